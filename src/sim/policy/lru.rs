//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::sim::FrameSet;

use super::Replacer;

/// Evicts the resident page whose latest reference is oldest.
///
/// Both hits and admissions stamp the page with the current step. Steps are
/// unique per reference, so two pages never share a stamp.
pub struct LruReplacer {
    /// Step of the most recent reference to each tracked page.
    last_access: HashMap<PageId, usize>,
}

impl LruReplacer {
    pub fn new() -> Self {
        Self {
            last_access: HashMap::new(),
        }
    }

    /// Step of the most recent reference to `page`, if tracked.
    pub fn last_access(&self, page: PageId) -> Option<usize> {
        self.last_access.get(&page).copied()
    }

    fn touch(&mut self, page: PageId, step: usize) {
        self.last_access.insert(page, step);
    }
}

impl Default for LruReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Replacer for LruReplacer {
    fn record_hit(&mut self, page: PageId, step: usize) {
        self.touch(page, step);
    }

    fn record_admission(&mut self, page: PageId, step: usize) {
        self.touch(page, step);
    }

    fn evict(&mut self, resident: &FrameSet, _future: &[PageId]) -> Option<PageId> {
        // Untracked pages sort first; they cannot occur when the simulator drives us.
        let victim = resident
            .iter()
            .min_by_key(|page| self.last_access.get(page).copied())?;

        self.last_access.remove(&victim);
        Some(victim)
    }
}
