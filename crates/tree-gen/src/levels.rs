//! Level-by-level generation without materializing the whole tree

use std::iter::FusedIterator;

use log::debug;

use crate::config::GeneratorConfig;
use crate::node::{Node, NodeId};
use crate::update::ContentUpdate;

/// Iterator over the levels of a tree, root level first
///
/// Created by [`TreeGenerator::levels`](crate::TreeGenerator::levels). Each
/// item is one complete level in generation order. Only the level about to be
/// yielded is held; once handed out, a level is owned by the caller.
///
/// Node ids, parent ids and child indices match what
/// [`TreeGenerator::generate`](crate::TreeGenerator::generate) produces for the
/// same configuration, even though earlier levels are no longer around to
/// resolve parent ids against.
pub struct Levels<'a, C, U> {
    config: GeneratorConfig,
    update: &'a U,
    pending: Option<Vec<Node<C>>>,
    pending_level: usize,
    next_id: usize,
}

impl<'a, C, U> Levels<'a, C, U>
where
    U: ContentUpdate<C>,
{
    pub(crate) fn new(config: GeneratorConfig, update: &'a U, root_contents: C) -> Self {
        Self {
            config,
            update,
            pending: Some(vec![Node::root(root_contents)]),
            pending_level: 0,
            next_id: 1,
        }
    }

    /// Derive the next level from `parents`, assigning ids from `next_id` on
    fn expand(&mut self, parents: &[Node<C>]) -> Vec<Node<C>> {
        let growth_rate = self.config.growth_rate;
        let mut children = Vec::with_capacity(parents.len().saturating_mul(growth_rate));

        for parent in parents {
            for child_index in 0..growth_rate {
                let id = NodeId(self.next_id);
                let contents = self.update.update(parent.contents());
                children.push(Node::child(id, parent, child_index, contents));
                self.next_id += 1;
            }
        }

        children
    }
}

impl<'a, C, U> Iterator for Levels<'a, C, U>
where
    U: ContentUpdate<C>,
{
    type Item = Vec<Node<C>>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.pending.take()?;
        let level = self.pending_level;

        debug!("level {} ready: {} nodes", level, current.len());

        if level < self.config.depth {
            let next = self.expand(&current);
            self.pending = Some(next);
            self.pending_level = level + 1;
        }

        Some(current)
    }

    /// Saturates at `usize::MAX` for a depth of `usize::MAX`, whose root
    /// level leaves one level more than a `usize` can count
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.pending {
            Some(_) => (self.config.depth - self.pending_level).saturating_add(1),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<'a, C, U> ExactSizeIterator for Levels<'a, C, U> where U: ContentUpdate<C> {}

impl<'a, C, U> FusedIterator for Levels<'a, C, U> where U: ContentUpdate<C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::Identity;

    #[test]
    fn test_yields_every_level() {
        let levels: Vec<_> = Levels::new(GeneratorConfig::new(2, 3), &Identity, 'x').collect();

        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0].len(), 1);
        assert_eq!(levels[1].len(), 3);
        assert_eq!(levels[2].len(), 9);
    }

    #[test]
    fn test_ids_follow_generation_order() {
        let levels: Vec<_> = Levels::new(GeneratorConfig::new(2, 2), &Identity, ()).collect();

        let ids: Vec<usize> = levels.iter().flatten().map(|n| n.id().get()).collect();
        assert_eq!(ids, (0..7).collect::<Vec<_>>());

        // Second child of the second level-1 node
        let node = &levels[2][3];
        assert_eq!(node.parent(), Some(NodeId(2)));
        assert_eq!(node.child_index(), 1);
    }

    #[test]
    fn test_exact_size() {
        let mut levels = Levels::new(GeneratorConfig::new(3, 0), &Identity, 0);
        assert_eq!(levels.len(), 4);
        levels.next();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels.next().map(|l| l.len()), Some(0));
        levels.by_ref().for_each(drop);
        assert_eq!(levels.len(), 0);
        assert!(levels.next().is_none());
    }
}
