//! Singly-linked collision chains.
//!
//! Each bucket of the map owns one [`Chain`]: a forward list of
//! [`BucketNode`]s. New nodes go in at the head, so a chain lists its keys
//! newest first. Removal unlinks a single node and leaves every other node
//! in its relative order. Both orderings are observable through the map's
//! rehash traversal and must not change.

use std::fmt;

/// One key/value entry and the link to the next entry of its chain.
pub(crate) struct BucketNode {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) next: Option<Box<BucketNode>>,
}

impl BucketNode {
    /// Allocate an unlinked node. Inputs are expected to be bounded already.
    pub(crate) fn boxed(key: &str, value: &str) -> Box<Self> {
        Box::new(Self {
            key: key.to_owned(),
            value: value.to_owned(),
            next: None,
        })
    }
}

/// Head of a collision chain.
#[derive(Default)]
pub(crate) struct Chain {
    head: Option<Box<BucketNode>>,
}

impl Chain {
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walks the chain; lengths are not cached.
    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub(crate) fn head(&self) -> Option<&BucketNode> {
        self.head.as_deref()
    }

    /// Nodes from head to tail.
    pub(crate) fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            next: self.head.as_deref(),
        }
    }

    pub(crate) fn find(&self, key: &str) -> Option<&BucketNode> {
        self.iter().find(|node| node.key == key)
    }

    pub(crate) fn find_mut(&mut self, key: &str) -> Option<&mut BucketNode> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(node);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Link `node` in front of the current head.
    pub(crate) fn push_front(&mut self, mut node: Box<BucketNode>) {
        node.next = self.head.take();
        self.head = Some(node);
    }

    /// Unlink and return the head node.
    pub(crate) fn pop_front(&mut self) -> Option<Box<BucketNode>> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        Some(node)
    }

    /// Unlink the node holding `key`, keeping the survivors in order.
    ///
    /// Keys are unique within a map, so at most one node matches.
    pub(crate) fn remove(&mut self, key: &str) -> Option<Box<BucketNode>> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().map_or(false, |node| node.key != key) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        Some(removed)
    }
}

impl Clone for Chain {
    fn clone(&self) -> Self {
        let mut tail: Vec<(&str, &str)> = self
            .iter()
            .map(|node| (node.key.as_str(), node.value.as_str()))
            .collect();

        // Rebuild back to front so head insertion restores the same order.
        let mut chain = Chain::default();
        while let Some((key, value)) = tail.pop() {
            chain.push_front(BucketNode::boxed(key, value));
        }
        chain
    }
}

impl Drop for Chain {
    fn drop(&mut self) {
        // Unlink one node at a time; the default drop would recurse once per node.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| (&node.key, &node.value)))
            .finish()
    }
}

/// Borrowing iterator over a chain, head to tail.
pub(crate) struct ChainIter<'a> {
    next: Option<&'a BucketNode>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a BucketNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_of(keys: &[&str]) -> Chain {
        // push_front in reverse so the chain reads in slice order
        let mut chain = Chain::default();
        for key in keys.iter().rev() {
            chain.push_front(BucketNode::boxed(key, &key.to_uppercase()));
        }
        chain
    }

    fn keys(chain: &Chain) -> Vec<&str> {
        chain.iter().map(|n| n.key.as_str()).collect()
    }

    #[test]
    fn test_push_front_is_newest_first() {
        let mut chain = Chain::default();
        chain.push_front(BucketNode::boxed("a", "1"));
        chain.push_front(BucketNode::boxed("b", "2"));
        chain.push_front(BucketNode::boxed("c", "3"));
        assert_eq!(keys(&chain), vec!["c", "b", "a"]);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_find() {
        let chain = chain_of(&["x", "y", "z"]);
        assert_eq!(chain.find("y").map(|n| n.value.as_str()), Some("Y"));
        assert!(chain.find("w").is_none());
    }

    #[test]
    fn test_find_mut_updates_in_place() {
        let mut chain = chain_of(&["x", "y", "z"]);
        chain.find_mut("z").unwrap().value = "new".to_owned();
        assert_eq!(chain.find("z").unwrap().value, "new");
        assert_eq!(keys(&chain), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_remove_head() {
        let mut chain = chain_of(&["a", "b", "c"]);
        let removed = chain.remove("a").unwrap();
        assert_eq!(removed.key, "a");
        assert!(removed.next.is_none());
        assert_eq!(keys(&chain), vec!["b", "c"]);
    }

    #[test]
    fn test_remove_middle_preserves_order() {
        let mut chain = chain_of(&["a", "b", "c", "d"]);
        assert!(chain.remove("c").is_some());
        assert_eq!(keys(&chain), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_remove_tail() {
        let mut chain = chain_of(&["a", "b", "c"]);
        assert!(chain.remove("c").is_some());
        assert_eq!(keys(&chain), vec!["a", "b"]);
    }

    #[test]
    fn test_remove_missing() {
        let mut chain = chain_of(&["a", "b"]);
        assert!(chain.remove("zz").is_none());
        assert_eq!(keys(&chain), vec!["a", "b"]);

        let mut empty = Chain::default();
        assert!(empty.remove("a").is_none());
    }

    #[test]
    fn test_pop_front_walks_head_to_tail() {
        let mut chain = chain_of(&["a", "b", "c"]);
        let mut seen = Vec::new();
        while let Some(node) = chain.pop_front() {
            assert!(node.next.is_none());
            seen.push(node.key);
        }
        assert_eq!(seen, vec!["a", "b", "c"]);
        assert!(chain.is_empty());
    }

    #[test]
    fn test_clone_preserves_order() {
        let chain = chain_of(&["p", "q", "r"]);
        let copy = chain.clone();
        assert_eq!(keys(&copy), keys(&chain));
    }

    #[test]
    fn test_long_chain_drop_does_not_overflow() {
        let mut chain = Chain::default();
        for i in 0..200_000 {
            chain.push_front(BucketNode::boxed(&i.to_string(), ""));
        }
        drop(chain);
    }

    #[test]
    fn test_debug() {
        let chain = chain_of(&["a"]);
        assert_eq!(format!("{:?}", chain), r#"[("a", "A")]"#);
    }
}
