//! Internal node implementation for the persistent trie.
//!
//! This module contains the internal `TrieNode` structure that forms the
//! backbone of the trie. `TrieNode` instances are always wrapped in an `Arc`
//! to enable structural sharing across versions, and are never mutated after
//! construction: a mutation builds a replacement node and relinks it.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Type-erased payload stored at a value-bearing node.
///
/// Payloads of distinct types may coexist within a single trie. `Trie::get`
/// recovers the concrete type with a checked downcast, so a mismatched
/// lookup reads as absence rather than as the wrong type.
pub(crate) type Payload = Arc<dyn Any + Send + Sync>;

/// Internal node type for the trie.
///
/// This type is not exposed in the public API. Each node maps edge bytes to
/// child nodes and optionally terminates a stored key with a payload.
pub(crate) struct TrieNode {
    /// Child nodes indexed by the next key byte
    pub children: BTreeMap<u8, Arc<TrieNode>>,

    /// The payload stored at this node, if this node terminates a key
    pub value: Option<Payload>,
}

impl TrieNode {
    /// Creates a value-less branch node over the given children.
    pub fn branch(children: BTreeMap<u8, Arc<TrieNode>>) -> Self {
        TrieNode {
            children,
            value: None,
        }
    }

    /// Creates a value-bearing node over the given children.
    pub fn with_value(children: BTreeMap<u8, Arc<TrieNode>>, payload: Payload) -> Self {
        TrieNode {
            children,
            value: Some(payload),
        }
    }

    /// Returns whether this node terminates a stored key.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns whether this node is a leaf node (has no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

// Payloads are type-erased, so Debug prints structure only.
impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("has_value", &self.has_value())
            .field("children", &self.children)
            .finish()
    }
}
