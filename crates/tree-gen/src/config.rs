//! Configuration for tree generation.
//!
//! A [`GeneratorConfig`] fixes the shape of every tree a generator builds:
//! how many levels sit below the root and how many children each node gets.
//!
//! # Sizing
//!
//! Trees are materialized completely. Level `k` holds `growth_rate^k` nodes
//! and a whole tree holds `Σ growth_rate^k` for `k` in `0..=depth`, so memory
//! and time grow exponentially with depth. Use [`GeneratorConfig::node_count`]
//! to size a request before generating it.

use anyhow::{Context, Result};

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shape of a generated tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// Number of levels generated below the root.
    pub depth: usize,

    /// Number of children every node produces.
    pub growth_rate: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            growth_rate: 2,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with the given depth and growth rate.
    pub fn new(depth: usize, growth_rate: usize) -> Self {
        Self { depth, growth_rate }
    }

    /// Create a configuration from signed values.
    ///
    /// Negative values are rejected with a [`ConfigError`].
    pub fn try_new(depth: i64, growth_rate: i64) -> Result<Self> {
        if depth < 0 {
            return Err(ConfigError::NegativeDepth(depth).into());
        }
        if growth_rate < 0 {
            return Err(ConfigError::NegativeGrowthRate(growth_rate).into());
        }

        let depth = usize::try_from(depth).context("depth does not fit in usize")?;
        let growth_rate =
            usize::try_from(growth_rate).context("growth rate does not fit in usize")?;

        Ok(Self::new(depth, growth_rate))
    }

    /// Set the depth.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Set the growth rate.
    pub fn growth_rate(mut self, growth_rate: usize) -> Self {
        self.growth_rate = growth_rate;
        self
    }

    /// Number of levels in a generated tree, root level included.
    ///
    /// Saturates at `usize::MAX` when `depth` is `usize::MAX`.
    pub fn level_count(&self) -> usize {
        self.depth.saturating_add(1)
    }

    /// Number of nodes on `level` (`growth_rate^level`).
    ///
    /// Returns `None` if the count does not fit in a `usize`. Levels past
    /// `depth` are not checked; the formula is applied as is.
    pub fn level_len(&self, level: usize) -> Option<usize> {
        match self.growth_rate {
            0 => Some(if level == 0 { 1 } else { 0 }),
            1 => Some(1),
            rate => rate.checked_pow(u32::try_from(level).ok()?),
        }
    }

    /// Total number of nodes in a generated tree.
    ///
    /// Returns `None` if the count does not fit in a `usize`.
    pub fn node_count(&self) -> Option<usize> {
        match self.growth_rate {
            0 => Some(1),
            1 => self.depth.checked_add(1),
            rate => {
                let mut total: usize = 1;
                let mut level_len: usize = 1;
                for _ in 0..self.depth {
                    level_len = level_len.checked_mul(rate)?;
                    total = total.checked_add(level_len)?;
                }
                Some(total)
            }
        }
    }
}
