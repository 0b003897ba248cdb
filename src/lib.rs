//! btree-index - an in-memory B-tree keyed set with a configurable minimum degree.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         btree-index                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │                 BTree (tree.rs)                      │   │
//! │  │   new / get / insert / remove / validate             │   │
//! │  │   root growth + collapse, len and degree queries     │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! │                            ↓ owns                           │
//! │  ┌─────────────────────────────────────────────────────┐   │
//! │  │                 Node (node.rs)                       │   │
//! │  │   keys: Vec<K>  +  children: Vec<Node<K>>            │   │
//! │  │   split │ borrow-left │ borrow-right │ merge          │   │
//! │  └─────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nodes own their children outright; splits and merges move keys and
//! subtrees between `Vec`s, so there is no reference counting and no
//! parent pointer anywhere in the structure.
//!
//! # Modules
//! - [`tree`] - The [`BTree`] container and its public operations
//! - [`node`] - The [`Node`] structure and the rebalancing primitives
//! - [`error`] - [`Error`] and the crate [`Result`] alias
//!
//! # Quick Start
//! ```
//! use btree_index::BTree;
//!
//! // Minimum degree 3: nodes hold 2 to 5 keys (root excepted).
//! let mut tree = BTree::new(3).unwrap();
//!
//! for key in [10, 20, 5, 6, 12, 30, 7, 17] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(tree.get(&6), Some(&6));
//! assert!(tree.remove(&10));
//! assert_eq!(tree.get(&10), None);
//! ```

pub mod error;
pub mod node;
pub mod tree;

// Re-export commonly used items at crate root for convenience
pub use error::{Error, Result};
pub use node::Node;
pub use tree::BTree;
