use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::iter::Iter;
use crate::node::{Link, Node};

/// Unbalanced binary search tree.
///
/// Values are placed by their [`Ord`] implementation: smaller values go
/// left, everything else (including equal values) goes right. The tree never
/// rotates, so its shape depends entirely on insertion order. Sorted input
/// degrades to a linear chain; callers that care should shuffle first.
///
/// | Operation | Average | Worst case |
/// |-----------|---------|------------|
/// | `insert`  | O(log n) | O(n) |
/// | `search`  | O(log n) | O(n) |
/// | `iter`    | O(n) total, O(h) memory | |
///
/// All traversals are iterative, so even a fully degenerate tree can be
/// searched, cleared and dropped without deep recursion.
pub struct SearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> SearchTree<T> {
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of stored values, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
        }
        tallest
    }

    /// Ascending in-order traversal. Each call starts a fresh walk over the
    /// current contents.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Removes every value.
    ///
    /// Nodes are released in post-order: a node is only dropped once both of
    /// its children have been detached and dropped.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            if node.is_leaf() {
                drop(node);
                continue;
            }
            let left = node.left.take();
            let right = node.right.take();
            pending.push(node);
            pending.extend(left);
            pending.extend(right);
        }
        self.len = 0;
    }
}

impl<T: Ord> SearchTree<T> {
    /// Inserts `value` below the first empty slot on its search path.
    ///
    /// A value equal to an existing one is routed right of it. Because
    /// [`search`](Self::search) stops at the first equal node, such a value
    /// is shadowed: it is counted and enumerated but never returned by
    /// `search`.
    pub fn insert(&mut self, value: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::leaf(value));
        self.len += 1;
    }

    /// Looks up the value whose key equals `key`.
    ///
    /// Returns `None` when the search path ends without a match.
    pub fn search<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.value.borrow()) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }
}

impl<T> Default for SearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for SearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a SearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for SearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
