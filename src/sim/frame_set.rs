//! Resident frame set.

use crate::common::{FrameCapacity, PageId};

/// Pages currently resident, in slot order.
///
/// Slot order is admission order among residents: an evicted page's slot is
/// closed up and the newly admitted page goes to the end. The set never
/// holds more than `capacity` pages or the same page twice.
#[derive(Debug, Clone)]
pub struct FrameSet {
    slots: Vec<PageId>,
    capacity: FrameCapacity,
}

impl FrameSet {
    pub fn new(capacity: FrameCapacity) -> Self {
        Self {
            slots: Vec::with_capacity(capacity.get()),
            capacity,
        }
    }

    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity.get()
    }

    pub fn capacity(&self) -> FrameCapacity {
        self.capacity
    }

    /// Resident pages in slot order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().copied()
    }

    /// Page in the lowest slot.
    pub fn first(&self) -> Option<PageId> {
        self.slots.first().copied()
    }

    /// Put `page` in the next free slot.
    ///
    /// Returns `false` (and changes nothing) if the page is already resident
    /// or no slot is free.
    pub fn admit(&mut self, page: PageId) -> bool {
        if self.is_full() || self.contains(page) {
            return false;
        }
        self.slots.push(page);
        true
    }

    /// Remove `page`, returning the slot it occupied.
    pub fn remove(&mut self, page: PageId) -> Option<usize> {
        let slot = self.slots.iter().position(|&p| p == page)?;
        self.slots.remove(slot);
        Some(slot)
    }

    /// Copy of the current contents, for a trace record.
    pub fn snapshot(&self) -> Vec<PageId> {
        self.slots.clone()
    }
}
