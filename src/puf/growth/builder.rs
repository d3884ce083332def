use super::tree::PufTree;
use crate::puf::transaction::{RankedItem, UncertainDatabase};
use std::collections::HashMap;
use std::hash::Hash;

/// Frequent labels of a database, indexed by global rank (0 = highest support).
#[derive(Debug, Clone)]
pub struct ItemCatalog<L> {
    labels: Vec<L>,
    supports: Vec<f64>,
    ranks: HashMap<L, usize>,
    distinct_items: usize,
}

impl<L: Clone + Eq + Hash> ItemCatalog<L> {
    pub fn label(&self, rank: usize) -> &L {
        &self.labels[rank]
    }

    pub fn support(&self, rank: usize) -> f64 {
        self.supports[rank]
    }

    pub fn rank(&self, label: &L) -> Option<usize> {
        self.ranks.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of distinct labels seen before filtering.
    pub fn distinct_items(&self) -> usize {
        self.distinct_items
    }

    pub fn labels_of(&self, items: &[usize]) -> Vec<L> {
        items.iter().map(|&item| self.labels[item].clone()).collect()
    }

    /// Exact expected supports keyed by rank, the info map of the global tree.
    pub fn support_map(&self) -> HashMap<usize, f64> {
        self.supports.iter().copied().enumerate().collect()
    }
}

/// Sums each label's probabilities over the database, in first-seen order.
pub fn count_expected_supports<L: Clone + Eq + Hash>(
    database: &UncertainDatabase<L>,
) -> Vec<(L, f64)> {
    let mut positions: HashMap<&L, usize> = HashMap::new();
    let mut supports: Vec<(L, f64)> = Vec::new();

    for transaction in database.transactions() {
        for item in transaction {
            match positions.get(&item.label) {
                Some(&pos) => supports[pos].1 += item.probability,
                None => {
                    positions.insert(&item.label, supports.len());
                    supports.push((item.label.clone(), item.probability));
                }
            }
        }
    }

    supports
}

/// Keeps labels whose expected support reaches `min_sup` and ranks them by
/// descending support. Ties keep first-seen order.
pub fn rank_frequent_items<L: Clone + Eq + Hash>(
    database: &UncertainDatabase<L>,
    min_sup: f64,
) -> ItemCatalog<L> {
    let supports = count_expected_supports(database);
    let distinct_items = supports.len();

    let mut frequent_items: Vec<(L, f64)> = supports
        .into_iter()
        .filter(|&(_, support)| support >= min_sup)
        .collect();

    frequent_items.sort_by(|a, b| b.1.total_cmp(&a.1));

    let ranks = frequent_items
        .iter()
        .enumerate()
        .map(|(rank, (label, _))| (label.clone(), rank))
        .collect();
    let (labels, supports) = frequent_items.into_iter().unzip();

    ItemCatalog {
        labels,
        supports,
        ranks,
        distinct_items,
    }
}

/// Drops infrequent items and orders each transaction by rank.
/// Transactions left with fewer than two items are discarded.
pub fn sanitize_transactions<L: Clone + Eq + Hash>(
    database: &UncertainDatabase<L>,
    catalog: &ItemCatalog<L>,
) -> Vec<Vec<RankedItem>> {
    database
        .transactions()
        .iter()
        .filter_map(|transaction| {
            let mut ranked: Vec<RankedItem> = transaction
                .iter()
                .filter_map(|item| {
                    catalog.rank(&item.label).map(|rank| RankedItem {
                        item: rank,
                        probability: item.probability,
                    })
                })
                .collect();

            if ranked.len() < 2 {
                return None;
            }
            ranked.sort_by_key(|ranked| ranked.item);
            Some(ranked)
        })
        .collect()
}

pub fn build_puf_tree<L: Clone + Eq + Hash>(
    transactions: &[Vec<RankedItem>],
    catalog: &ItemCatalog<L>,
) -> PufTree {
    let mut puf_tree = PufTree::with_info(catalog.support_map());

    for transaction in transactions {
        puf_tree.insert_transaction(transaction);
    }

    puf_tree
}

/// Builds the conditional tree of a pattern base. Items below `min_sup` in
/// the local tally are dropped and each path is re-sorted by local support.
pub fn build_conditional_puf_tree(prefix_paths: &[(Vec<usize>, f64)], min_sup: f64) -> PufTree {
    let mut item_supports: HashMap<usize, f64> = HashMap::new();

    for (path, weight) in prefix_paths {
        for &item in path {
            *item_supports.entry(item).or_insert(0.0) += weight;
        }
    }

    item_supports.retain(|_, support| *support >= min_sup);

    let mut conditional_tree = PufTree::with_info(item_supports);

    for (path, weight) in prefix_paths {
        let mut filtered_path: Vec<usize> = path
            .iter()
            .copied()
            .filter(|item| conditional_tree.info.contains_key(item))
            .collect();

        if filtered_path.is_empty() {
            continue;
        }

        filtered_path.sort_by(|a, b| conditional_tree.info[b].total_cmp(&conditional_tree.info[a]));
        conditional_tree.insert_path(&filtered_path, *weight);
    }

    conditional_tree
}
