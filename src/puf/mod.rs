pub mod correction;
pub mod growth;
pub mod miner;
pub mod transaction;
pub mod utils;

pub use correction::remove_false_positives;
pub use growth::{PufNode, PufTree};
pub use miner::{puf_growth, MiningOutcome, MiningStats, PufGrowth};
pub use transaction::{Item, RankedItem, Transaction, UncertainDatabase};
pub use utils::{Pattern, PatternStatus, PatternStorage, UncertainPatterns};
