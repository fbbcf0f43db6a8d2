//! Configuration options for loading a catalog.

use serde::{Deserialize, Serialize};

/// Seed used when no explicit shuffle seed is configured.
pub const DEFAULT_SHUFFLE_SEED: u64 = 0;

/// How a validated batch is ordered before insertion into the tree.
///
/// The tree never rebalances, so inserting an already sorted file produces a
/// linear chain. Shuffling first keeps the expected height logarithmic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleMode {
    /// Insert in file order.
    Preserve,
    /// Shuffle with a fixed seed; the same file always builds the same tree.
    Seeded(u64),
    /// Shuffle with a fresh seed from the operating system.
    Random,
}

impl Default for ShuffleMode {
    fn default() -> Self {
        Self::Seeded(DEFAULT_SHUFFLE_SEED)
    }
}

/// Options controlling how a batch is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Insertion order applied after validation.
    #[serde(default)]
    pub shuffle: ShuffleMode,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep file order (useful when the tree shape must be predictable).
    pub fn preserve_order() -> Self {
        Self {
            shuffle: ShuffleMode::Preserve,
        }
    }

    pub fn with_shuffle(mut self, shuffle: ShuffleMode) -> Self {
        self.shuffle = shuffle;
        self
    }
}
