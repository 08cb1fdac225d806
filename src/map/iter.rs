//! Borrowing iteration over a [`DynamicHashMap`](super::DynamicHashMap).

use super::chain::{BucketNode, Chain};
use std::fmt;
use std::iter::FusedIterator;

/// Iterator over `(key, value)` pairs in rehash order.
///
/// Created by [`DynamicHashMap::iter`](super::DynamicHashMap::iter).
#[derive(Clone)]
pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Chain>,
    node: Option<&'a BucketNode>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(buckets: &'a [Chain], len: usize) -> Self {
        Self {
            buckets: buckets.iter(),
            node: None,
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                self.remaining -= 1;
                return Some((node.key.as_str(), node.value.as_str()));
            }
            self.node = self.buckets.next()?.head();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish()
    }
}
