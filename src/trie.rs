//! The main trie implementation.
//!
//! This module contains the `Trie` type, which provides the primary API for
//! working with the persistent trie data structure.

use std::any::Any;
use std::sync::Arc;

use crate::node::{Payload, TrieNode};

/// A persistent trie with copy-on-write mutation and structural sharing.
///
/// The trie maps byte-sequence keys to values of arbitrary types. Every
/// mutating operation returns a new `Trie` version that shares all unchanged
/// nodes with the original via `Arc`; only the nodes on the mutated key's
/// path are rebuilt, so deriving a version costs O(key length) regardless of
/// trie size.
///
/// A version is immutable once constructed: any number of threads may read
/// it concurrently while other threads derive new versions from it, without
/// synchronization.
///
/// Value types are erased per key. `get` takes the expected type explicitly
/// and performs a checked downcast, so asking for the wrong type reads as
/// absence rather than as a misinterpreted value.
#[derive(Clone, Debug)]
pub struct Trie {
    /// The root node, or `None` for the canonical empty trie
    pub(crate) root: Option<Arc<TrieNode>>,

    /// The number of values stored in the trie
    size: usize,
}

impl Trie {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_persistent::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Trie {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of values stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_persistent::Trie;
    ///
    /// let trie = Trie::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// let trie = trie.put(b"hello", 42u32);
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_persistent::Trie;
    ///
    /// let trie = Trie::new();
    /// assert!(trie.is_empty());
    ///
    /// let trie = trie.put(b"hello", 42u32);
    /// assert!(!trie.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Retrieves a reference to the value stored for the given key, if any.
    ///
    /// Returns `None` if the key is absent, and also if a value is present
    /// but its type is not `T`: the payload is recovered with a checked
    /// downcast, never reinterpreted.
    ///
    /// The returned borrow stays valid for as long as this version does,
    /// even if later versions overwrite or remove the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_persistent::Trie;
    ///
    /// let trie = Trie::new().put(b"hello", 42u32);
    ///
    /// assert_eq!(trie.get::<u32>(b"hello"), Some(&42));
    /// assert_eq!(trie.get::<u32>(b"world"), None);
    /// assert_eq!(trie.get::<String>(b"hello"), None);
    /// ```
    pub fn get<T: Any>(&self, key: &[u8]) -> Option<&T> {
        self.node_at(key)?.value.as_ref()?.downcast_ref::<T>()
    }

    /// Returns `true` if the trie stores a value for the given key,
    /// regardless of the value's type.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_persistent::Trie;
    ///
    /// let trie = Trie::new().put(b"hello", 42u32);
    ///
    /// assert!(trie.contains_key(b"hello"));
    /// assert!(!trie.contains_key(b"world"));
    /// ```
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.node_at(key).is_some_and(|node| node.has_value())
    }

    /// Inserts a key-value pair, returning a new trie version.
    ///
    /// If the key already holds a value it is overwritten, whatever its
    /// type. The value is moved into the trie, so non-`Clone` types work.
    /// Nodes off the key's path are shared with `self`, not copied.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_persistent::Trie;
    ///
    /// let trie1 = Trie::new();
    /// let trie2 = trie1.put(b"hello", 42u32);
    ///
    /// assert!(trie1.is_empty());
    /// assert_eq!(trie2.get::<u32>(b"hello"), Some(&42));
    /// ```
    pub fn put<T: Any + Send + Sync>(&self, key: &[u8], value: T) -> Self {
        let (root, replaced) = Self::put_node(self.root.as_ref(), key, Arc::new(value));

        Trie {
            root: Some(root),
            size: if replaced { self.size } else { self.size + 1 },
        }
    }

    /// Removes a key, returning a new trie version.
    ///
    /// The terminal node is dropped if it has no children, or demoted to a
    /// value-less branch if it does; ancestors left with no value and no
    /// children are pruned as well. Removing an absent key is a no-op that
    /// still returns a valid version with the same observable mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use trie_persistent::Trie;
    ///
    /// let trie = Trie::new().put(b"a", 1u32).put(b"ab", 2u32);
    /// let trie = trie.remove(b"ab");
    ///
    /// assert_eq!(trie.get::<u32>(b"ab"), None);
    /// assert_eq!(trie.get::<u32>(b"a"), Some(&1));
    /// ```
    pub fn remove(&self, key: &[u8]) -> Self {
        let root = match &self.root {
            Some(root) => root,
            None => return self.clone(),
        };

        let (new_root, removed) = Self::remove_node(root, key);
        if !removed {
            return self.clone();
        }

        Trie {
            root: new_root,
            size: self.size - 1,
        }
    }

    // Walks the key byte by byte from the root. Returns the terminal node,
    // which may or may not carry a value.
    fn node_at(&self, key: &[u8]) -> Option<&TrieNode> {
        let mut current = self.root.as_deref()?;

        for byte in key {
            current = current.children.get(byte)?;
        }

        Some(current)
    }

    // Recursive helper for put that clones the nodes along the key's path
    // and shares everything else. `node` is the old node at this position,
    // if the position existed. Returns the replacement node and whether an
    // existing value was overwritten.
    fn put_node(
        node: Option<&Arc<TrieNode>>,
        key: &[u8],
        payload: Payload,
    ) -> (Arc<TrieNode>, bool) {
        // Shallow copy: the map is rebuilt, the child handles are shared.
        let children = node.map(|n| n.children.clone()).unwrap_or_default();

        match key.split_first() {
            None => {
                // Terminal position: keep the existing children, set the value.
                let replaced = node.is_some_and(|n| n.has_value());
                (Arc::new(TrieNode::with_value(children, payload)), replaced)
            }
            Some((&byte, rest)) => {
                let old_child = node.and_then(|n| n.children.get(&byte));
                let (new_child, replaced) = Self::put_node(old_child, rest, payload);

                let mut children = children;
                children.insert(byte, new_child);

                let mut new_node = TrieNode::branch(children);
                new_node.value = node.and_then(|n| n.value.clone());

                (Arc::new(new_node), replaced)
            }
        }
    }

    // Recursive helper for remove. The downward pass clones the path; the
    // upward pass decides, per node, whether to keep it, demote it to a
    // value-less branch, or drop it entirely (`None`), driven purely by
    // "has value or has at least one remaining child". The bool reports
    // whether a value was actually removed; on a miss the original node is
    // returned untouched and shared.
    fn remove_node(node: &Arc<TrieNode>, key: &[u8]) -> (Option<Arc<TrieNode>>, bool) {
        match key.split_first() {
            None => {
                if !node.has_value() {
                    // The position exists but holds no value: nothing to do.
                    return (Some(Arc::clone(node)), false);
                }

                if node.is_leaf() {
                    (None, true)
                } else {
                    // Still a branch point: demote, keep the children.
                    (Some(Arc::new(TrieNode::branch(node.children.clone()))), true)
                }
            }
            Some((&byte, rest)) => {
                let child = match node.children.get(&byte) {
                    Some(child) => child,
                    None => return (Some(Arc::clone(node)), false),
                };

                let (new_child, removed) = Self::remove_node(child, rest);
                if !removed {
                    return (Some(Arc::clone(node)), false);
                }

                let mut children = node.children.clone();
                match new_child {
                    Some(new_child) => {
                        children.insert(byte, new_child);
                    }
                    None => {
                        children.remove(&byte);
                    }
                }

                if children.is_empty() && !node.has_value() {
                    // This node became an empty non-value node: prune it too.
                    return (None, true);
                }

                let mut new_node = TrieNode::branch(children);
                new_node.value = node.value.clone();

                (Some(Arc::new(new_node)), true)
            }
        }
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
