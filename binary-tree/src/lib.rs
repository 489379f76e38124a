//! An unbalanced binary tree of key/value pairs, grown by descending from the root to
//! the first free child slot.
//!
//! Where a new node ends up is decided by a [`Descent`] rule. The default,
//! [`Alternating`], switches its comparison sense depending on the side it came from
//! and sends keys equal to the root to the left. [`LeftBiased`] is the plain search
//! tree rule with ties on the left.
//!
//! Keys must implement [`Ord`], and that order has to be consistent (`<`, `==`, `>`
//! never contradict each other). An inconsistent order does not cause undefined
//! behavior but leaves the shape of the tree unspecified.
//!
//! Nothing is ever removed or rebalanced: sorted input degenerates into a chain and
//! insertion costs `O(depth)`. Insertion, formatting and dropping are iterative, so deep
//! chains do not grow the call stack.

use std::fmt;

use log::trace;

mod descent;
mod error;
mod node;

pub use descent::{Alternating, Descent, Direction, LeftBiased};
pub use error::OrderError;
pub use node::Node;

#[derive(Debug)]
pub struct BinaryTree<K, V, D = Alternating> {
    root: Option<Box<Node<K, V>>>,
    len: usize,
    descent: D,
}

impl<K, V> BinaryTree<K, V> {
    pub const fn new() -> Self {
        Self {
            root: None,
            len: 0,
            descent: Alternating,
        }
    }
}

impl<K, V, D> BinaryTree<K, V, D> {
    pub fn with_descent(descent: D) -> Self {
        Self {
            root: None,
            len: 0,
            descent,
        }
    }

    pub fn descent(&self) -> &D {
        &self.descent
    }

    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// Number of inserted pairs, duplicates included.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path. An empty tree has height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root().map(|r| (r, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|l| (l, depth + 1)));
            stack.extend(node.right().map(|r| (r, depth + 1)));
        }
        height
    }
}

impl<K: Ord, V, D: Descent> BinaryTree<K, V, D> {
    /// Attaches `(key, value)` as a new leaf.
    ///
    /// An empty tree takes the pair as its root. Otherwise the walk starts at the root and
    /// asks the descent rule which child of the examined node to try, until it reaches an
    /// empty slot. Existing nodes are never moved, replaced or modified apart from gaining
    /// this one child.
    pub fn insert(&mut self, key: K, value: V) {
        let node = Box::new(Node::new(key, value));
        let mut pending = None;
        let mut depth = 0;
        let mut slot = &mut self.root;
        while let Some(examined) = slot {
            let dir = self.descent.direction(pending, &node, examined);
            pending = Some(dir);
            depth += 1;
            slot = examined.slot_mut(dir);
        }
        match pending {
            None => trace!("tree was empty, new node becomes the root"),
            Some(side) => trace!("attaching node at depth {depth} as a {side} child"),
        }
        *slot = Some(node);
        self.len += 1;
    }
}

impl<K: Ord, V> BinaryTree<K, V, LeftBiased> {
    /// Checks that every key in a left subtree is `<=` and every key in a right subtree is
    /// `>` each of its ancestors.
    ///
    /// Holds for every tree built with [`LeftBiased`] under a consistent [`Ord`].
    pub fn check_order(&self) -> Result<(), OrderError> {
        let mut stack = Vec::new();
        if let Some(root) = self.root() {
            push_children(&mut stack, root, 0, None, None);
        }
        while let Some(Bounded {
            node,
            depth,
            side,
            lower,
            upper,
        }) = stack.pop()
        {
            let above = lower.map_or(true, |lower| node.key() > lower);
            let below = upper.map_or(true, |upper| node.key() <= upper);
            if !(above && below) {
                return Err(OrderError { depth, side });
            }
            push_children(&mut stack, node, depth, lower, upper);
        }
        Ok(())
    }
}

// lower is exclusive, upper inclusive
struct Bounded<'a, K, V> {
    node: &'a Node<K, V>,
    depth: usize,
    side: Direction,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
}

fn push_children<'a, K, V>(
    stack: &mut Vec<Bounded<'a, K, V>>,
    parent: &'a Node<K, V>,
    depth: usize,
    lower: Option<&'a K>,
    upper: Option<&'a K>,
) {
    if let Some(left) = parent.left() {
        stack.push(Bounded {
            node: left,
            depth: depth + 1,
            side: Direction::Left,
            lower,
            upper: Some(parent.key()),
        });
    }
    if let Some(right) = parent.right() {
        stack.push(Bounded {
            node: right,
            depth: depth + 1,
            side: Direction::Right,
            lower: Some(parent.key()),
            upper,
        });
    }
}

impl<K, V, D: Default> Default for BinaryTree<K, V, D> {
    fn default() -> Self {
        Self::with_descent(D::default())
    }
}

impl<K, V, D> Drop for BinaryTree<K, V, D> {
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_children().into_iter().flatten());
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for BinaryTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V, D: Descent> Extend<(K, V)> for BinaryTree<K, V, D> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Writes the shape as `key(left,right)`, with `_` for a missing child and a bare key for
/// a leaf. An empty tree is written as `_`.
impl<K: fmt::Display, V, D> fmt::Display for BinaryTree<K, V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::subtree(self.root())];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Open(node) if node.is_leaf() => write!(f, "{}", node.key())?,
                Piece::Open(node) => {
                    write!(f, "{}(", node.key())?;
                    // popped in reverse
                    stack.extend([
                        Piece::Text(")"),
                        Piece::subtree(node.right()),
                        Piece::Text(","),
                        Piece::subtree(node.left()),
                    ]);
                }
                Piece::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

enum Piece<'a, K, V> {
    Open(&'a Node<K, V>),
    Text(&'static str),
}

impl<'a, K, V> Piece<'a, K, V> {
    fn subtree(node: Option<&'a Node<K, V>>) -> Self {
        node.map_or(Piece::Text("_"), Piece::Open)
    }
}
