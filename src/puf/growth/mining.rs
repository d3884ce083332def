use super::builder::{build_conditional_puf_tree, build_puf_tree, sanitize_transactions, ItemCatalog};
use super::tree::PufTree;
use crate::puf::transaction::{RankedItem, UncertainDatabase};
use crate::puf::utils::PatternStorage;
use std::hash::Hash;
use tracing::debug;

/// Output of the tree phase over a database.
#[derive(Debug, Clone)]
pub struct TreePhase {
    pub transactions: Vec<Vec<RankedItem>>,
    pub candidates: PatternStorage,
    pub tree_nodes: usize,
}

/// Runs preprocessing, tree construction and recursive generation. The
/// returned candidates are in ranked-item space; `catalog` maps them back to labels.
pub fn puf_growth_candidates<L: Clone + Eq + Hash>(
    database: &UncertainDatabase<L>,
    catalog: &ItemCatalog<L>,
    min_sup: f64,
) -> TreePhase {
    let transactions = sanitize_transactions(database, catalog);
    debug!(
        kept = transactions.len(),
        dropped = database.len() - transactions.len(),
        "sanitized transactions"
    );

    let mut puf_tree = build_puf_tree(&transactions, catalog);
    let tree_nodes = puf_tree.node_count();
    debug!(nodes = tree_nodes, "built PUF-tree");

    let mut candidates = PatternStorage::new();
    generate_patterns(&mut puf_tree, &[], min_sup, &mut candidates);

    // Frequent items whose every transaction was dropped never reach the tree.
    for item in 0..catalog.len() {
        if !puf_tree.header_table.contains_key(&item) {
            candidates.add_pattern(&[item], catalog.support(item));
        }
    }
    debug!(candidates = candidates.len(), "tree phase finished");

    TreePhase {
        transactions,
        candidates,
        tree_nodes,
    }
}

/// Mines `puf_tree` under `prefix`, appending every visited pattern to
/// `candidates` with the tree's local support. Processed items are detached
/// once their conditional subtree has been mined.
pub fn generate_patterns(
    puf_tree: &mut PufTree,
    prefix: &[usize],
    min_sup: f64,
    candidates: &mut PatternStorage,
) {
    let order = puf_tree.mining_order();

    for item in order {
        let mut pattern = prefix.to_vec();
        pattern.push(item);

        let local_support = puf_tree.info.get(&item).copied().unwrap_or(0.0);
        candidates.add_pattern(&pattern, local_support);

        if puf_tree.item_weight(item) >= min_sup {
            let prefix_paths = puf_tree.get_prefix_paths(item);
            if !prefix_paths.is_empty() {
                let mut conditional_tree = build_conditional_puf_tree(&prefix_paths, min_sup);
                if !conditional_tree.is_empty() {
                    generate_patterns(&mut conditional_tree, &pattern, min_sup, candidates);
                }
            }
        }

        puf_tree.detach_item(item);
    }
}
