use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use upriors::{puf_growth, Item, UncertainDatabase};

/// Generate synthetic uncertain transaction data
///
/// Parameters:
/// - num_transactions: Number of transactions
/// - num_items: Total number of possible items
/// - avg_transaction_size: Average items per transaction
/// - min_probability: Lower bound of the existential probabilities
fn generate_transactions(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    min_probability: f64,
) -> UncertainDatabase<usize> {
    let mut rng = rand::thread_rng();
    let mut database = UncertainDatabase::default();

    for _ in 0..num_transactions {
        let random_factor: f64 = rng.r#gen();
        let num_items_in_tx = (avg_transaction_size as f64 * (0.5 + random_factor)).round() as usize;
        let num_items_in_tx = num_items_in_tx.min(num_items);

        let mut transaction: Vec<Item<usize>> = Vec::with_capacity(num_items_in_tx);
        for _ in 0..num_items_in_tx {
            let item = rng.gen_range(0..num_items);
            if transaction.iter().all(|existing| existing.label != item) {
                transaction.push(Item::new(item, rng.gen_range(min_probability..=1.0)));
            }
        }
        database.push(transaction);
    }

    database
}

/// Benchmark PUF-Growth with different dataset sizes
fn bench_puf_growth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("puf_growth_scaling");

    let configs = vec![
        ("small_100tx", 100, 20, 5),
        ("medium_500tx", 500, 50, 10),
        ("large_1000tx", 1000, 100, 15),
    ];

    for (name, num_tx, num_items, avg_size) in configs {
        let database = generate_transactions(num_tx, num_items, avg_size, 0.3);
        let min_sup = 0.1 * num_tx as f64;

        group.bench_with_input(BenchmarkId::from_parameter(name), &database, |b, db| {
            b.iter(|| puf_growth(black_box(db), black_box(min_sup)));
        });
    }

    group.finish();
}

/// Benchmark PUF-Growth with different thresholds
fn bench_puf_growth_min_support(c: &mut Criterion) {
    let mut group = c.benchmark_group("puf_growth_min_support");

    let database = generate_transactions(1000, 50, 10, 0.3);

    for &fraction in &[0.05, 0.1, 0.2, 0.3] {
        let min_sup = fraction * database.len() as f64;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:.2}", fraction)),
            &min_sup,
            |b, &sup| {
                b.iter(|| puf_growth(black_box(&database), black_box(sup)));
            },
        );
    }

    group.finish();
}

/// Benchmark PUF-Growth with different probability spreads. Low lower bounds
/// widen the gap between the tree estimate and the exact support.
fn bench_puf_growth_uncertainty(c: &mut Criterion) {
    let mut group = c.benchmark_group("puf_growth_uncertainty");

    let spreads = vec![("certain_90", 0.9), ("mixed_50", 0.5), ("uncertain_10", 0.1)];

    for (name, min_probability) in spreads {
        let database = generate_transactions(1000, 50, 10, min_probability);

        group.bench_with_input(BenchmarkId::from_parameter(name), &database, |b, db| {
            b.iter(|| puf_growth(black_box(db), black_box(50.0)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_puf_growth_scaling,
    bench_puf_growth_min_support,
    bench_puf_growth_uncertainty
);
criterion_main!(benches);
