//! # PopulationStore
//!
//! The run-wide record of every layout ever evaluated and the score it earned.
//! Entries are never pruned: selection ranks the whole history, not just the
//! latest generation, and the final report is drawn from it.
//!
//! Entries keep the order in which layouts were first recorded, so ranking
//! ties and iteration are reproducible for a given seed.
//!
//! ## Example
//!
//! ```rust
//! use transit_ga::layout::Layout;
//! use transit_ga::population::{PopulationStore, ScoreRetention};
//!
//! let mut store = PopulationStore::new(ScoreRetention::Latest);
//! let layout = Layout::from_ids(&[&[1, 2], &[3, 4]]);
//!
//! store.record(layout.key(), 12.0);
//! store.record(layout.key(), 8.0);
//!
//! assert_eq!(store.len(), 1);
//! assert_eq!(store.get(&layout.key()), Some(8.0));
//! ```

use std::collections::HashMap;

use crate::layout::LayoutKey;

/// What the store keeps when a layout it already knows is scored again.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoreRetention {
    /// The most recent evaluation overwrites the previous score.
    #[default]
    Latest,
    /// The highest score ever observed for the layout is kept.
    HistoricalMax,
}

/// Append-only mapping from canonical layout to score.
#[derive(Debug, Clone, Default)]
pub struct PopulationStore {
    entries: Vec<(LayoutKey, f64)>,
    index: HashMap<LayoutKey, usize>,
    retention: ScoreRetention,
}

impl PopulationStore {
    pub fn new(retention: ScoreRetention) -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            retention,
        }
    }

    pub fn retention(&self) -> ScoreRetention {
        self.retention
    }

    /// Records the score of a completed evaluation and returns the score now stored.
    pub fn record(&mut self, key: LayoutKey, score: f64) -> f64 {
        match self.index.get(&key) {
            Some(&position) => {
                let stored = &mut self.entries[position].1;
                *stored = match self.retention {
                    ScoreRetention::Latest => score,
                    ScoreRetention::HistoricalMax => stored.max(score),
                };
                *stored
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, score));
                score
            }
        }
    }

    pub fn get(&self, key: &LayoutKey) -> Option<f64> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1)
    }

    pub fn contains(&self, key: &LayoutKey) -> bool {
        self.index.contains_key(key)
    }

    /// Number of structurally distinct layouts recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (&LayoutKey, f64)> {
        self.entries.iter().map(|(key, score)| (key, *score))
    }

    /// The best-scoring layout of the whole history.
    ///
    /// Ties resolve to the layout recorded first.
    pub fn best(&self) -> Option<(&LayoutKey, f64)> {
        self.iter()
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
    }
}
