//! Breadth-first tree generation.
//!
//! [`TreeGenerator`] drains [`Levels`] into a single arena and hands back a
//! [`Tree`]. The free [`generate`] function accepts signed sizes and rejects
//! negative ones up front.

use std::time::Instant;

use anyhow::Result;
use log::info;

use crate::config::GeneratorConfig;
use crate::levels::Levels;
use crate::tree::Tree;
use crate::update::{ContentUpdate, Identity};

/// Builds complete trees breadth-first, one level at a time
///
/// Level `k` is produced by walking level `k - 1` in order and giving every
/// parent `growth_rate` children, child index `0` first. Each child's contents
/// are the parent's contents passed through the generator's
/// [`ContentUpdate`], [`Identity`] unless replaced with
/// [`TreeGenerator::with_update`].
///
/// # Cost
///
/// The whole tree is kept in memory. Time and space are proportional to
/// `Σ growth_rate^k` for `k` in `0..=depth`, exponential in the depth; see
/// [`GeneratorConfig::node_count`]. A request too large for available memory
/// aborts on allocation failure like any other Rust collection.
#[derive(Debug, Clone, Default)]
pub struct TreeGenerator<U = Identity> {
    config: GeneratorConfig,
    update: U,
}

impl TreeGenerator {
    /// Create a generator that copies contents unchanged from parent to child
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            update: Identity,
        }
    }
}

impl<U> TreeGenerator<U> {
    /// Replace the content update applied on every edge
    pub fn with_update<V>(self, update: V) -> TreeGenerator<V> {
        TreeGenerator {
            config: self.config,
            update,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Get the content update
    pub fn update(&self) -> &U {
        &self.update
    }

    /// Generate the full tree rooted at `root_contents`
    pub fn generate<C>(&self, root_contents: C) -> Tree<C>
    where
        U: ContentUpdate<C>,
    {
        let start_time = Instant::now();

        let mut nodes = Vec::with_capacity(self.config.node_count().unwrap_or(0));
        let mut levels = Vec::new();

        for level in self.levels(root_contents) {
            let start = nodes.len();
            nodes.extend(level);
            levels.push(start..nodes.len());
        }

        info!(
            "Tree generation (depth={}, growth rate={}): {} nodes in {:?}",
            self.config.depth,
            self.config.growth_rate,
            nodes.len(),
            start_time.elapsed()
        );

        Tree::from_parts(self.config, nodes, levels)
    }

    /// Generate the tree lazily, one level per iteration
    ///
    /// Nothing past the root is computed until the iterator is advanced.
    pub fn levels<C>(&self, root_contents: C) -> Levels<'_, C, U>
    where
        U: ContentUpdate<C>,
    {
        Levels::new(self.config, &self.update, root_contents)
    }
}

/// Generate a tree from a signed configuration
///
/// Negative `depth` or `growth_rate` fail with a
/// [`ConfigError`](crate::ConfigError) before any node is created.
///
/// ```
/// use tree_gen::generate;
///
/// let levels = generate(2, 2, |s: &String| format!("{s}+"), String::from("R"))
///     .unwrap()
///     .into_levels();
///
/// assert_eq!(levels.len(), 3);
/// assert_eq!(levels[&2].len(), 4);
/// assert_eq!(levels[&2][0].contents(), "R++");
/// ```
pub fn generate<C, U>(depth: i64, growth_rate: i64, update: U, root_contents: C) -> Result<Tree<C>>
where
    U: ContentUpdate<C>,
{
    let config = GeneratorConfig::try_new(depth, growth_rate)?;
    Ok(TreeGenerator::new(config)
        .with_update(update)
        .generate(root_contents))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_default_generator() {
        let generator: TreeGenerator = TreeGenerator::default();
        let tree = generator.generate(1u8);
        assert_eq!(tree.depth(), 5);
        assert_eq!(tree.growth_rate(), 2);
        assert_eq!(tree.len(), 63);
    }

    #[test]
    fn test_with_update() {
        let generator = TreeGenerator::new(GeneratorConfig::new(3, 1)).with_update(|n: &i32| n * 10);
        let tree = generator.generate(1i32);

        let chain: Vec<i32> = tree.iter().map(|n| *n.contents()).collect();
        assert_eq!(chain, vec![1, 10, 100, 1000]);
    }

    #[test]
    fn test_generate_rejects_negative_config() {
        let err = generate(-2, 2, Identity, 0).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::NegativeDepth(-2))
        );

        let err = generate(2, -1, Identity, 0).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::NegativeGrowthRate(-1))
        );
    }

    #[test]
    fn test_update_called_once_per_edge() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let counting = |n: &u32| {
            calls.set(calls.get() + 1);
            *n
        };
        let tree = TreeGenerator::new(GeneratorConfig::new(3, 3))
            .with_update(counting)
            .generate(0u32);

        assert_eq!(calls.get(), tree.len() - 1);
    }
}
