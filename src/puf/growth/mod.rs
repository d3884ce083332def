pub mod builder;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_puf_tree, build_puf_tree, rank_frequent_items, sanitize_transactions, ItemCatalog};
pub use mining::{generate_patterns, puf_growth_candidates, TreePhase};
pub use tree::{PufNode, PufTree};
