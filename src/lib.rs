//! # Persistent Trie
//!
//! A persistent trie with copy-on-write mutation and structural sharing.
//!
//! This crate provides an immutable byte-keyed trie where every mutation
//! returns a new logical version, leaving all prior versions observable and
//! valid. Unchanged subtrees are shared between versions via `Arc`, so
//! deriving a version costs O(key length) rather than O(trie size). It is
//! intended as an in-memory index building block for systems that need
//! versioned or snapshot-isolated key-value lookups.
//!
//! ## Features
//!
//! - **Immutable API**: All modifying operations return a new trie version
//! - **Structural Sharing**: Unchanged subtrees are shared between versions
//! - **Type-Erased Values**: Keys in one trie may store values of distinct
//!   types, recovered with a checked downcast
//! - **Thread-Safe Versions**: Any number of readers may use a version while
//!   writers derive new ones, with no synchronization beyond `Arc`
//!
//! ## Example
//!
//! ```rust
//! use trie_persistent::Trie;
//!
//! // Create a new trie
//! let v1 = Trie::new();
//!
//! // Each mutation returns a new version
//! let v2 = v1.put(b"hello", 1u32);
//! let v3 = v2.put(b"world", String::from("two"));
//!
//! // Lookup values with an explicit type
//! assert_eq!(v3.get::<u32>(b"hello"), Some(&1));
//! assert_eq!(v3.get::<String>(b"world"), Some(&String::from("two")));
//!
//! // Prior versions are untouched
//! assert!(v1.is_empty());
//! assert_eq!(v2.get::<String>(b"world"), None);
//! ```

mod node;
mod trie;

// Re-export public types
pub use crate::trie::Trie;
