//! Array-backed box with weight-aware compaction.
//!
//! Storage is a single fixed-length buffer. The occupied region is always
//! the prefix `[0, occupied)`; everything past the watermark holds the
//! filler value. A weight-`w` item is written into all `w` of its slots,
//! and [`SlotArray::count`] relies on that replication to skip a whole
//! item in one step.

use crate::{effective_capacity, SlotItem};

/// Fixed-capacity contiguous box of weighted items.
#[derive(Debug, Clone)]
pub struct SlotArray<T> {
    slots: Vec<T>,
    occupied: usize,
}

impl<T: SlotItem> SlotArray<T> {
    /// Make an empty box. A zero capacity selects
    /// [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY).
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); effective_capacity(capacity)],
            occupied: 0,
        }
    }

    /// Sum of the weights of all items currently stored.
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Whether no items are stored.
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Fixed capacity in slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Append an item at the watermark, replicated across its `weight()`
    /// slots. Fails without mutating if the item does not fit.
    pub fn add(&mut self, item: T) -> bool {
        let weight = item.weight();
        if self.occupied + weight > self.slots.len() {
            return false;
        }
        for slot in &mut self.slots[self.occupied..self.occupied + weight] {
            *slot = item.clone();
        }
        self.occupied += weight;
        true
    }

    /// Leftmost occupied slot in `[start, end)` holding an item with the
    /// given tag. `None` when the window is empty, inverted, or reaches
    /// past the watermark.
    fn find_in(&self, tag: &str, start: usize, end: usize) -> Option<usize> {
        if start >= self.occupied || end > self.occupied || start >= end {
            return None;
        }
        self.slots[start..end]
            .iter()
            .position(|item| item.tag() == tag)
            .map(|offset| start + offset)
    }

    /// Remove the leftmost item with the given tag, shifting everything
    /// after it left by the removed weight and resetting the vacated tail
    /// to filler values. Fails if no item matches.
    pub fn remove(&mut self, tag: &str) -> bool {
        let Some(index) = self.find_in(tag, 0, self.occupied) else {
            return false;
        };
        let weight = self.slots[index].weight();
        for i in index..self.occupied - weight {
            self.slots[i] = self.slots[i + weight].clone();
        }
        for slot in &mut self.slots[self.occupied - weight..self.occupied] {
            *slot = T::default();
        }
        self.occupied -= weight;
        true
    }

    /// Whether any stored item has the given tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.find_in(tag, 0, self.occupied).is_some()
    }

    /// Number of distinct stored items with the given tag. A matching
    /// item's whole slot block counts once.
    pub fn count(&self, tag: &str) -> usize {
        let mut count = 0;
        let mut pos = 0;
        while pos < self.occupied {
            if self.slots[pos].tag() == tag {
                count += 1;
                pos += self.slots[pos].weight();
            } else {
                pos += 1;
            }
        }
        count
    }

    /// Iterate the occupied slots left to right. A weight-`w` item is
    /// yielded from each of its `w` slots.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.occupied].iter()
    }
}
