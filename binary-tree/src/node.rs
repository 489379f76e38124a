use std::cmp::Ordering;

use crate::Direction;

/// A key/value pair together with the two subtrees it owns.
///
/// Nodes compare by key alone. The value and the children never take part in ordering.
#[derive(Debug)]
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Option<Box<Node<K, V>>>,
    right: Option<Box<Node<K, V>>>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn key_value(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub fn child(&self, dir: Direction) -> Option<&Self> {
        match dir {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child slot on `dir`. Only ever written while it is `None`.
    pub(crate) fn slot_mut(&mut self, dir: Direction) -> &mut Option<Box<Self>> {
        match dir {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    pub(crate) fn take_children(&mut self) -> [Option<Box<Self>>; 2] {
        [self.left.take(), self.right.take()]
    }
}

impl<K: PartialEq, V> PartialEq for Node<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Node<K, V> {}

impl<K: Ord, V> PartialOrd for Node<K, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, V> Ord for Node<K, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
