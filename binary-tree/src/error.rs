use thiserror::Error;

use crate::Direction;

/// A node found on the wrong side of one of its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key at depth {depth} is out of order in a {side} subtree")]
pub struct OrderError {
    /// Depth of the offending node, the root being at depth 0.
    pub depth: usize,
    /// Which subtree of its parent the offending node hangs from.
    pub side: Direction,
}
