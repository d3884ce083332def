use super::growth::ItemCatalog;
use super::transaction::RankedItem;
use super::utils::{PatternStatus, PatternStorage, UncertainPatterns};
use std::collections::HashMap;
use std::hash::Hash;

/// Recomputes the exact expected support of every multi-item candidate and
/// keeps those reaching `min_sup`. Singletons are exact already and pass through.
///
/// Only the sanitized transactions are scanned: items outside the catalog can
/// not be part of a candidate, and a transaction with fewer than two frequent
/// items can not hold a multi-item pattern.
pub fn remove_false_positives<L: Clone + Eq + Hash>(
    transactions: &[Vec<RankedItem>],
    candidates: &PatternStorage,
    catalog: &ItemCatalog<L>,
    min_sup: f64,
) -> UncertainPatterns<L> {
    // Product of the probabilities of each item per transaction, duplicates included.
    let item_products: Vec<HashMap<usize, f64>> = transactions
        .iter()
        .map(|transaction| {
            let mut products: HashMap<usize, f64> = HashMap::with_capacity(transaction.len());
            for ranked in transaction {
                *products.entry(ranked.item).or_insert(1.0) *= ranked.probability;
            }
            products
        })
        .collect();

    let mut verified = UncertainPatterns::new();

    for (pattern, estimate) in candidates.iter_patterns() {
        if pattern.len() == 1 {
            if estimate >= min_sup {
                verified.insert(catalog.labels_of(pattern), estimate, PatternStatus::Verified);
            }
            continue;
        }

        if let Some(support) = exact_support(pattern, &item_products) {
            if support >= min_sup {
                verified.insert(catalog.labels_of(pattern), support, PatternStatus::Verified);
            }
        }
    }

    verified
}

/// Exact expected support of `pattern`, or `None` if no transaction contains it.
fn exact_support(pattern: &[usize], item_products: &[HashMap<usize, f64>]) -> Option<f64> {
    let mut distinct = pattern.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let mut support: Option<f64> = None;

    for products in item_products {
        let joint = distinct
            .iter()
            .try_fold(1.0, |acc, item| products.get(item).map(|&p| acc * p));

        if let Some(joint) = joint {
            *support.get_or_insert(0.0) += joint;
        }
    }

    support
}
