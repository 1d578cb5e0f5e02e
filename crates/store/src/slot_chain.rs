//! Chain-backed box with one owned node per item.
//!
//! Nodes form a singly linked chain in most-recently-added order: adds
//! prepend at the head, removal splices out the leftmost match. An item
//! still occupies one node regardless of weight; the weight only feeds
//! the capacity bookkeeping.

use crate::{effective_capacity, SlotItem};

#[derive(Debug)]
struct Node<T> {
    item: T,
    next: Option<Box<Node<T>>>,
}

/// Fixed-capacity linked box of weighted items.
#[derive(Debug)]
pub struct SlotChain<T> {
    head: Option<Box<Node<T>>>,
    occupied: usize,
    capacity: usize,
}

impl<T: SlotItem> SlotChain<T> {
    /// Make an empty box. A zero capacity selects
    /// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY).
    pub fn new(capacity: usize) -> Self {
        Self {
            head: None,
            occupied: 0,
            capacity: effective_capacity(capacity),
        }
    }

    /// Sum of the weights of all items currently chained.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Whether no items are stored.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Fixed capacity in weight units.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Prepend an item at the head. Fails without mutating if its weight
    /// does not fit in the remaining capacity.
    pub fn add(&mut self, item: T) -> bool {
        let weight = item.weight();
        if self.occupied + weight > self.capacity {
            return false;
        }
        self.head = Some(Box::new(Node {
            item,
            next: self.head.take(),
        }));
        self.occupied += weight;
        true
    }

    /// Splice out the leftmost (most recently added) node whose item has
    /// the given tag. Fails if no node matches.
    pub fn remove(&mut self, tag: &str) -> bool {
        // Walk the cursor to the first matching node, then unlink it with
        // no node borrow still live.
        let mut cursor = &mut self.head;
        while cursor.as_deref().is_some_and(|node| node.item.tag() != tag) {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return false,
            }
        }
        match cursor.take() {
            Some(mut node) => {
                *cursor = node.next.take();
                self.occupied -= node.item.weight();
                true
            }
            None => false,
        }
    }

    /// Whether any chained item has the given tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.iter().any(|item| item.tag() == tag)
    }

    /// Number of nodes whose item has the given tag. One node is one
    /// item, whatever its weight.
    pub fn count(&self, tag: &str) -> usize {
        self.iter().filter(|item| item.tag() == tag).count()
    }

    /// Iterate the stored items head-first (most recently added first).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Clone> Clone for SlotChain<T> {
    // Duplicate every node; the clone never aliases the source chain.
    // Built iteratively so arbitrarily long chains stay off the stack.
    fn clone(&self) -> Self {
        let mut clone = Self {
            head: None,
            occupied: self.occupied,
            capacity: self.capacity,
        };
        let mut tail = &mut clone.head;
        let mut source = self.head.as_deref();
        while let Some(node) = source {
            *tail = Some(Box::new(Node {
                item: node.item.clone(),
                next: None,
            }));
            if let Some(new_node) = tail {
                tail = &mut new_node.next;
            }
            source = node.next.as_deref();
        }
        clone
    }
}

impl<T> Drop for SlotChain<T> {
    // Unlink nodes one at a time so a long chain cannot overflow the
    // stack through nested `Box` drops.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// Head-first iterator over a [`SlotChain`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.item)
    }
}
