//! Node - a single multi-way tree node.
//!
//! A [`Node`] stores a sorted run of keys and, when internal, owns one
//! child subtree per key gap:
//!
//! ```text
//!            ┌────┬────┬────┐
//!            │ 17 │ 42 │ 80 │          keys (strictly increasing)
//!            └────┴────┴────┘
//!           /     |    |     \
//!        <17   17..42 42..80  >80      children (keys.len() + 1)
//! ```
//!
//! Leaf-ness is derived: a node with no children is a leaf. All the
//! structural surgery lives here ([`split_child`](Node::split_child) for
//! insertion, the borrow/merge/extract family for deletion), while the
//! tree-level entry points and root handling live in [`crate::tree`].
//!
//! Every mutator moves keys and subtrees between owning `Vec`s; nothing is
//! shared, so ownership transfer during a split or merge is a plain move.

use std::cmp::Ordering;
use std::mem;

use crate::error::{Error, Result};

/// A single node of the B-tree.
///
/// Exposed read-only (via [`BTree::root`](crate::BTree::root)) so tests and
/// benchmarks can assert occupancy bounds; callers cannot mutate through
/// this surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    /// Keys in strictly increasing order.
    pub(crate) keys: Vec<K>,

    /// Child subtrees; empty for leaves, `keys.len() + 1` long otherwise.
    pub(crate) children: Vec<Node<K>>,
}

impl<K> Node<K> {
    /// Create an empty leaf node.
    pub(crate) fn new() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    // ========================================================================
    // Read-only introspection
    // ========================================================================

    /// The node's keys, in ascending order.
    #[inline]
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The node's child subtrees (empty for a leaf).
    #[inline]
    pub fn children(&self) -> &[Node<K>] {
        &self.children
    }

    /// Number of keys stored in this node.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Whether this node is a leaf (has no children).
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this node holds the maximum `2t - 1` keys.
    #[inline]
    pub(crate) fn is_full(&self, t: usize) -> bool {
        self.keys.len() == 2 * t - 1
    }
}

impl<K: Ord> Node<K> {
    // ========================================================================
    // Insertion
    // ========================================================================

    /// Split the full child at `idx` into two siblings of `t - 1` keys each,
    /// promoting its median key into this node at position `idx`.
    ///
    /// The child keeps its lower half; a new right sibling takes the upper
    /// half (and, for internal children, the upper `t` subtrees). This node
    /// must not be full, which the preemptive descent guarantees.
    ///
    /// # Panics
    /// Panics if `idx` is out of range or the child is not full.
    pub(crate) fn split_child(&mut self, idx: usize, t: usize) {
        let child = &mut self.children[idx];
        assert!(child.is_full(t), "split of a non-full child");

        let right_keys = child.keys.split_off(t);
        let right_children = if child.is_leaf() {
            Vec::new()
        } else {
            child.children.split_off(t)
        };
        let median = child.keys.pop().expect("full child has no median");

        self.keys.insert(idx, median);
        self.children.insert(
            idx + 1,
            Node {
                keys: right_keys,
                children: right_children,
            },
        );
    }

    /// Insert `key` into the subtree rooted at this node, which must not be
    /// full. Returns `false` without modifying key contents if `key` is
    /// already present.
    ///
    /// Full children are split before descending into them, so every
    /// recursive call also sees a non-full node.
    pub(crate) fn insert_non_full(&mut self, key: K, t: usize) -> bool {
        let mut idx = match self.keys.binary_search(&key) {
            Ok(_) => return false,
            Err(idx) => idx,
        };

        if self.is_leaf() {
            self.keys.insert(idx, key);
            return true;
        }

        if self.children[idx].is_full(t) {
            self.split_child(idx, t);
            // The promoted median now sits at `idx`; re-aim the descent.
            match key.cmp(&self.keys[idx]) {
                Ordering::Equal => return false,
                Ordering::Greater => idx += 1,
                Ordering::Less => {}
            }
        }
        self.children[idx].insert_non_full(key, t)
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Remove `key` from the subtree rooted at this node. Returns whether
    /// the key was present.
    ///
    /// Every child is topped up to at least `t` keys before descending into
    /// it, so the node the key is finally erased from can always spare one.
    /// A call sheds at most one key from this node, so a node entered with
    /// `t` keys exits within bounds; only the root may drain to zero, and
    /// [`crate::BTree::remove`] collapses it afterwards.
    pub(crate) fn remove(&mut self, key: &K, t: usize) -> bool {
        match self.keys.binary_search(key) {
            Ok(idx) => {
                if self.is_leaf() {
                    self.keys.remove(idx);
                    true
                } else {
                    self.remove_separator(key, idx, t)
                }
            }
            Err(idx) => {
                if self.is_leaf() {
                    return false;
                }
                let idx = self.fill_child(idx, t);
                self.children[idx].remove(key, t)
            }
        }
    }

    /// Remove `keys[idx]` from this internal node.
    ///
    /// Replaces it with the predecessor (max of the left child) when the
    /// left child can spare a key, else with the successor (min of the
    /// right child), else merges both children around it and recurses into
    /// the merged node.
    fn remove_separator(&mut self, key: &K, idx: usize, t: usize) -> bool {
        if self.children[idx].keys.len() >= t {
            let pred = self.children[idx].remove_max(t);
            self.keys[idx] = pred;
        } else if self.children[idx + 1].keys.len() >= t {
            let succ = self.children[idx + 1].remove_min(t);
            self.keys[idx] = succ;
        } else {
            // Both neighbors at t - 1: absorb the separator and delete it
            // from the merged node of 2t - 1 keys.
            self.merge_children(idx);
            return self.children[idx].remove(key, t);
        }
        true
    }

    /// Extract the maximum key of this subtree, keeping it balanced.
    ///
    /// # Panics
    /// Panics if the subtree cannot spare a key (caller must check).
    fn remove_max(&mut self, t: usize) -> K {
        if self.is_leaf() {
            self.keys.pop().expect("max extraction from empty leaf")
        } else {
            let idx = self.fill_child(self.children.len() - 1, t);
            self.children[idx].remove_max(t)
        }
    }

    /// Extract the minimum key of this subtree, keeping it balanced.
    ///
    /// # Panics
    /// Panics if the subtree cannot spare a key (caller must check).
    fn remove_min(&mut self, t: usize) -> K {
        if self.is_leaf() {
            if self.keys.is_empty() {
                panic!("min extraction from empty leaf");
            }
            self.keys.remove(0)
        } else {
            let idx = self.fill_child(0, t);
            self.children[idx].remove_min(t)
        }
    }

    /// Ensure the child at `idx` has at least `t` keys before a descent.
    ///
    /// Tries a borrow from the left sibling, then from the right sibling,
    /// then merges with a sibling (right preferred, left when `idx` is the
    /// last child). Returns the child's index afterwards, which shifts down
    /// by one exactly when the left-merge fallback ran.
    fn fill_child(&mut self, idx: usize, t: usize) -> usize {
        if self.children[idx].keys.len() >= t {
            return idx;
        }
        if idx > 0 && self.children[idx - 1].keys.len() >= t {
            self.rotate_from_left(idx);
            idx
        } else if idx + 1 < self.children.len() && self.children[idx + 1].keys.len() >= t {
            self.rotate_from_right(idx);
            idx
        } else if idx + 1 < self.children.len() {
            self.merge_children(idx);
            idx
        } else {
            self.merge_children(idx - 1);
            idx - 1
        }
    }

    /// Rotate the left sibling's maximum key up through the parent and the
    /// separator down into the front of `children[idx]`.
    fn rotate_from_left(&mut self, idx: usize) {
        let donated = self.children[idx - 1]
            .keys
            .pop()
            .expect("left sibling has no keys");
        let separator = mem::replace(&mut self.keys[idx - 1], donated);
        self.children[idx].keys.insert(0, separator);

        if !self.children[idx - 1].is_leaf() {
            let carried = self.children[idx - 1]
                .children
                .pop()
                .expect("left sibling has no children");
            self.children[idx].children.insert(0, carried);
        }
    }

    /// Rotate the right sibling's minimum key up through the parent and the
    /// separator down onto the back of `children[idx]`.
    fn rotate_from_right(&mut self, idx: usize) {
        let donated = self.children[idx + 1].keys.remove(0);
        let separator = mem::replace(&mut self.keys[idx], donated);
        self.children[idx].keys.push(separator);

        if !self.children[idx + 1].is_leaf() {
            let carried = self.children[idx + 1].children.remove(0);
            self.children[idx].children.push(carried);
        }
    }

    /// Merge `children[idx + 1]` and the separator `keys[idx]` into
    /// `children[idx]`, which afterwards holds both halves.
    ///
    /// The absorbed sibling is detached and dropped here; this is the only
    /// place a node's lifetime ends other than tree teardown.
    ///
    /// # Panics
    /// Panics if `idx + 1` is not a valid child index.
    fn merge_children(&mut self, idx: usize) {
        let separator = self.keys.remove(idx);
        let mut right = self.children.remove(idx + 1);

        let left = &mut self.children[idx];
        left.keys.push(separator);
        left.keys.append(&mut right.keys);
        left.children.append(&mut right.children);
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Recursively check the structural invariants of this subtree.
    ///
    /// `lower`/`upper` are the exclusive key bounds inherited from ancestor
    /// separators. Returns the subtree height (a leaf is 0) so the caller
    /// can verify all leaves sit at the same depth.
    pub(crate) fn check(
        &self,
        t: usize,
        is_root: bool,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<usize> {
        let n = self.keys.len();

        if n > 2 * t - 1 {
            return Err(Error::InvariantViolation(format!(
                "node has {} keys, max is {}",
                n,
                2 * t - 1
            )));
        }
        if !is_root && n < t - 1 {
            return Err(Error::InvariantViolation(format!(
                "non-root node has {} keys, min is {}",
                n,
                t - 1
            )));
        }

        if self.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(Error::InvariantViolation(
                "keys out of sorted order".into(),
            ));
        }
        if let (Some(lo), Some(first)) = (lower, self.keys.first()) {
            if first <= lo {
                return Err(Error::InvariantViolation(
                    "key at or below ancestor separator".into(),
                ));
            }
        }
        if let (Some(hi), Some(last)) = (upper, self.keys.last()) {
            if last >= hi {
                return Err(Error::InvariantViolation(
                    "key at or above ancestor separator".into(),
                ));
            }
        }

        if self.is_leaf() {
            return Ok(0);
        }

        if self.children.len() != n + 1 {
            return Err(Error::InvariantViolation(format!(
                "internal node has {} keys but {} children",
                n,
                self.children.len()
            )));
        }

        let mut height = None;
        for (i, child) in self.children.iter().enumerate() {
            let lo = if i == 0 { lower } else { Some(&self.keys[i - 1]) };
            let hi = if i == n { upper } else { Some(&self.keys[i]) };
            let child_height = child.check(t, false, lo, hi)?;
            match height {
                None => height = Some(child_height),
                Some(h) if h != child_height => {
                    return Err(Error::InvariantViolation(
                        "leaves at unequal depths".into(),
                    ));
                }
                Some(_) => {}
            }
        }
        Ok(height.expect("internal node has no children") + 1)
    }
}
