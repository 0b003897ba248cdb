//! BTree - the tree-level API.
//!
//! The [`BTree`] owns the root [`Node`] and the tree-wide minimum degree
//! `t`. It handles the two events a node cannot see from inside the
//! recursion: the root growing a level when it is full at insert time, and
//! the root collapsing into its sole child when deletion drains it.
//!
//! ```text
//!            BTree { t, len }
//!                  │
//!                  ▼ owns
//!              ┌────────┐
//!              │  root  │          0..=2t-1 keys
//!              └────────┘
//!             /    |     \
//!          ┌───┐ ┌───┐ ┌───┐
//!          │   │ │   │ │   │      t-1..=2t-1 keys each,
//!          └───┘ └───┘ └───┘      all leaves at one depth
//! ```

use std::mem;

use crate::error::{Error, Result};
use crate::node::Node;

/// An in-memory B-tree holding a set of unique, ordered keys.
///
/// Search, insertion and deletion all run in O(t · log_t n). Insertion
/// splits full nodes preemptively on the way down; deletion tops up
/// under-minimum children before descending, so neither ever has to walk
/// back up the tree to repair an overflow or underflow.
///
/// Duplicate policy: this is a set. Inserting a key that is already
/// present leaves the stored key untouched and returns `false`.
///
/// Single-threaded by design. Mutation goes through `&mut self`; a caller
/// that needs shared access must serialize operations externally.
///
/// # Usage
/// ```
/// use btree_index::BTree;
///
/// let mut tree = BTree::new(3).unwrap();
/// tree.insert(10);
/// tree.insert(20);
/// tree.insert(5);
///
/// assert_eq!(tree.get(&10), Some(&10));
/// assert_eq!(tree.get(&15), None);
/// assert!(tree.remove(&10));
/// assert!(!tree.remove(&10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BTree<K> {
    /// Top of the tree; an empty leaf when the tree is empty.
    root: Node<K>,

    /// Minimum degree, fixed at construction. Every node holds at most
    /// `2t - 1` keys and every non-root node at least `t - 1`.
    t: usize,

    /// Number of keys currently stored.
    len: usize,
}

impl<K: Ord> BTree<K> {
    /// Create an empty tree with the given minimum degree.
    ///
    /// # Errors
    /// Returns [`Error::InvalidMinDegree`] if `min_degree < 2`.
    pub fn new(min_degree: usize) -> Result<Self> {
        if min_degree < 2 {
            return Err(Error::InvalidMinDegree(min_degree));
        }
        Ok(Self {
            root: Node::new(),
            t: min_degree,
            len: 0,
        })
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// The minimum degree `t` this tree was built with.
    #[inline]
    pub fn min_degree(&self) -> usize {
        self.t
    }

    /// Maximum keys any node may hold (`2t - 1`).
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.t - 1
    }

    /// Minimum keys any non-root node must hold (`t - 1`).
    #[inline]
    pub fn min_keys(&self) -> usize {
        self.t - 1
    }

    /// Number of keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only access to the root node.
    ///
    /// Meant for tests and benchmarks that assert occupancy bounds; the
    /// handle cannot mutate the tree.
    #[inline]
    pub fn root(&self) -> &Node<K> {
        &self.root
    }

    /// Edges from the root down to the leaf level.
    ///
    /// All leaves sit at the same depth, so following first children is as
    /// good as any path.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = &self.root;
        while !node.is_leaf() {
            node = &node.children[0];
            height += 1;
        }
        height
    }

    // ========================================================================
    // Public API: search
    // ========================================================================

    /// Look up `key`, returning a reference to the stored key on a hit.
    ///
    /// Descends from the root, binary-searching each node; an exact match
    /// returns immediately, a miss at a leaf returns `None`.
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut node = &self.root;
        loop {
            match node.keys.binary_search(key) {
                Ok(idx) => return Some(&node.keys[idx]),
                Err(idx) => {
                    if node.is_leaf() {
                        return None;
                    }
                    node = &node.children[idx];
                }
            }
        }
    }

    /// Whether `key` is present.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    // ========================================================================
    // Public API: insert
    // ========================================================================

    /// Insert `key`. Returns `true` if it was newly added, `false` if it
    /// was already present (the stored key is left untouched).
    ///
    /// A full root is split before the descent starts, growing the tree by
    /// one level; every other full node is split just before the descent
    /// passes through it. A duplicate may still trigger those preemptive
    /// splits before it is detected, which rearranges nodes but never
    /// changes the key set.
    pub fn insert(&mut self, key: K) -> bool {
        if self.root.is_full(self.t) {
            // Grow by one level: the old root becomes the sole child of a
            // fresh root, then splits into it.
            let old_root = mem::replace(&mut self.root, Node::new());
            self.root.children.push(old_root);
            self.root.split_child(0, self.t);
        }
        let inserted = self.root.insert_non_full(key, self.t);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    // ========================================================================
    // Public API: remove
    // ========================================================================

    /// Remove `key`. Returns `true` only if the key was present.
    ///
    /// Children are rebalanced to at least `t` keys on the way down
    /// (borrow from the left sibling, else the right, else merge), so the
    /// final erase never leaves a node under-full. An absent key may still
    /// cause rebalancing along the search path; the key set is unchanged.
    pub fn remove(&mut self, key: &K) -> bool {
        if self.len == 0 {
            return false;
        }

        let removed = self.root.remove(key, self.t);

        if self.root.key_count() == 0 && !self.root.is_leaf() {
            // Height shrinks: the drained root hands over to its sole child.
            assert_eq!(
                self.root.children.len(),
                1,
                "drained root with more than one child"
            );
            let child = self.root.children.pop().expect("drained root lost its child");
            self.root = child;
        }

        if removed {
            self.len -= 1;
        }
        removed
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Re-check every structural invariant over the whole tree.
    ///
    /// Verifies occupancy bounds, in-node and cross-subtree key ordering,
    /// children counts, and that all leaves share one depth. Intended for
    /// tests; cost is a full traversal.
    ///
    /// # Errors
    /// Returns [`Error::InvariantViolation`] describing the first breakage
    /// found.
    pub fn validate(&self) -> Result<()> {
        self.root.check(self.t, true, None, None)?;
        Ok(())
    }
}
