use super::correction::remove_false_positives;
use super::growth::{puf_growth_candidates, rank_frequent_items};
use super::transaction::UncertainDatabase;
use super::utils::{PatternStatus, UncertainPatterns};
use crate::config::MinerConfig;
use crate::error::{PufError, Result};
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MiningStats {
    pub total_transactions: usize,
    pub unique_items: usize,
    pub frequent_items: usize,
    pub sanitized_transactions: usize,
    pub tree_nodes: usize,
    pub candidates: usize,
    pub verified: usize,
    pub false_positives: usize,
    pub min_support: f64,
    pub runtime: Duration,
}

#[derive(Debug, Clone)]
pub struct MiningOutcome<L> {
    /// Patterns whose exact expected support reaches the threshold.
    pub patterns: UncertainPatterns<L>,
    /// Every pattern visited by the tree phase, with its estimated support.
    pub candidates: UncertainPatterns<L>,
    pub stats: MiningStats,
}

/// PUF-Growth miner over uncertain transactional databases.
#[derive(Debug, Clone)]
pub struct PufGrowth {
    config: MinerConfig,
}

impl PufGrowth {
    pub fn new(config: MinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Resolves the configured threshold against `database` and mines it.
    pub fn mine<L>(&self, database: &UncertainDatabase<L>) -> Result<MiningOutcome<L>>
    where
        L: Clone + Eq + Hash + Debug,
    {
        validate_probabilities(database)?;
        let min_sup = self.config.min_support.resolve(database.len())?;
        debug!(min_support = %self.config.min_support, resolved = min_sup, "resolved threshold");

        Ok(mine_database(database, min_sup))
    }
}

/// Mines `database` with an absolute threshold and returns the verified
/// patterns mapped to their exact expected support.
pub fn puf_growth<L: Clone + Eq + Hash>(
    database: &UncertainDatabase<L>,
    min_sup: f64,
) -> UncertainPatterns<L> {
    mine_database(database, min_sup).patterns
}

pub(crate) fn mine_database<L: Clone + Eq + Hash>(
    database: &UncertainDatabase<L>,
    min_sup: f64,
) -> MiningOutcome<L> {
    let start = Instant::now();

    let catalog = rank_frequent_items(database, min_sup);
    debug!(
        unique = catalog.distinct_items(),
        frequent = catalog.len(),
        "ranked frequent items"
    );

    let phase = puf_growth_candidates(database, &catalog, min_sup);
    let patterns = remove_false_positives(&phase.transactions, &phase.candidates, &catalog, min_sup);

    let mut candidates = UncertainPatterns::new();
    for (pattern, support) in phase.candidates.iter_patterns() {
        candidates.insert(catalog.labels_of(pattern), support, PatternStatus::Candidate);
    }

    let stats = MiningStats {
        total_transactions: database.len(),
        unique_items: catalog.distinct_items(),
        frequent_items: catalog.len(),
        sanitized_transactions: phase.transactions.len(),
        tree_nodes: phase.tree_nodes,
        candidates: candidates.len(),
        verified: patterns.len(),
        false_positives: candidates.len().saturating_sub(patterns.len()),
        min_support: min_sup,
        runtime: start.elapsed(),
    };
    info!(
        patterns = stats.verified,
        candidates = stats.candidates,
        runtime_ms = stats.runtime.as_millis() as u64,
        "uncertain frequent patterns mined with PUF-Growth"
    );

    MiningOutcome {
        patterns,
        candidates,
        stats,
    }
}

fn validate_probabilities<L: Debug>(database: &UncertainDatabase<L>) -> Result<()> {
    for transaction in database.transactions() {
        for item in transaction {
            if !(0.0..=1.0).contains(&item.probability) {
                return Err(PufError::InvalidProbability {
                    label: format!("{:?}", item.label),
                    probability: item.probability,
                });
            }
        }
    }
    Ok(())
}
