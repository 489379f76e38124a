use std::fmt;

use crate::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Placement rule used by [`BinaryTree::insert`](crate::BinaryTree::insert).
///
/// Insertion walks down from the root one occupied slot at a time. At each step the
/// rule looks at the node being inserted, the node currently sitting in the slot
/// (`examined`) and the direction taken to reach that slot (`pending`, `None` at the
/// root), and answers which child slot of `examined` to try next.
pub trait Descent {
    fn direction<K: Ord, V>(
        &self,
        pending: Option<Direction>,
        node: &Node<K, V>,
        examined: &Node<K, V>,
    ) -> Direction;
}

/// The default rule.
///
/// At the root, greater keys go right and everything else (equal keys included) goes
/// left. Below the root the answer depends on the pending direction:
///
/// - after going right, a key smaller than the examined node keeps going right,
///   otherwise it turns left;
/// - after going left, a key smaller than the examined node keeps going left,
///   otherwise it turns right.
///
/// The resulting shape is not a search order for keys below the first level, and
/// repeated keys land in places a textbook insert would not choose. Trees built with
/// this rule are reproducible but not searchable; see [`LeftBiased`] for that.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Alternating;

impl Descent for Alternating {
    fn direction<K: Ord, V>(
        &self,
        pending: Option<Direction>,
        node: &Node<K, V>,
        examined: &Node<K, V>,
    ) -> Direction {
        match pending {
            None => {
                if node > examined {
                    Direction::Right
                } else {
                    Direction::Left
                }
            }
            Some(Direction::Right) => {
                if node < examined {
                    Direction::Right
                } else {
                    Direction::Left
                }
            }
            Some(Direction::Left) => {
                if node < examined {
                    Direction::Left
                } else {
                    Direction::Right
                }
            }
        }
    }
}

/// Ordinary binary search tree placement where equal keys go left.
///
/// Every key in a left subtree is `<=` its ancestor and every key in a right subtree is
/// `>` it, which [`BinaryTree::check_order`](crate::BinaryTree::check_order) verifies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LeftBiased;

impl Descent for LeftBiased {
    fn direction<K: Ord, V>(
        &self,
        _pending: Option<Direction>,
        node: &Node<K, V>,
        examined: &Node<K, V>,
    ) -> Direction {
        if node > examined {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}
