pub mod storage;

pub use storage::{Pattern, PatternStatus, PatternStorage, UncertainPatterns};
