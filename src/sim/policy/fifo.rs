//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::PageId;
use crate::sim::FrameSet;

use super::Replacer;

/// Evicts pages in the order they were admitted.
///
/// Hits never reorder the queue: a page that keeps being referenced is still
/// evicted once it becomes the oldest admission.
pub struct FifoReplacer {
    /// Pages in admission order (front = oldest).
    queue: VecDeque<PageId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<PageId>,
}

impl FifoReplacer {
    /// Create a new FIFO replacer.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            in_queue: HashSet::new(),
        }
    }

    /// Number of pages tracked in the arrival queue.
    pub fn size(&self) -> usize {
        self.in_queue.len()
    }
}

impl Default for FifoReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Replacer for FifoReplacer {
    fn record_hit(&mut self, _page: PageId, _step: usize) {}

    fn record_admission(&mut self, page: PageId, _step: usize) {
        if self.in_queue.insert(page) {
            self.queue.push_back(page);
        }
    }

    /// Pops the oldest admission that is still resident.
    fn evict(&mut self, resident: &FrameSet, _future: &[PageId]) -> Option<PageId> {
        while let Some(page) = self.queue.pop_front() {
            self.in_queue.remove(&page);

            if resident.contains(page) {
                return Some(page);
            }
            // Not resident any more, skip it
        }
        None
    }
}
