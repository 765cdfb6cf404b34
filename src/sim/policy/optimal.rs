//! Optimal (Belady) replacement policy.

use crate::common::PageId;
use crate::sim::FrameSet;

use super::Replacer;

/// Evicts the resident page whose next reference lies furthest ahead.
///
/// Keeps no state: the look-ahead is recomputed from the remaining
/// sequence on every eviction. A page that never recurs counts as
/// infinitely far. Ties go to the page in the lowest frame slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    /// Distance to the next use of `page` in `future`, `None` if never used again.
    pub fn next_use(page: PageId, future: &[PageId]) -> Option<usize> {
        future.iter().position(|&p| p == page)
    }
}

impl Replacer for OptimalReplacer {
    fn record_hit(&mut self, _page: PageId, _step: usize) {}

    fn record_admission(&mut self, _page: PageId, _step: usize) {}

    fn evict(&mut self, resident: &FrameSet, future: &[PageId]) -> Option<PageId> {
        let mut victim: Option<(PageId, usize)> = None;

        for page in resident.iter() {
            let distance = Self::next_use(page, future).unwrap_or(usize::MAX);
            // Strictly greater, so the earliest slot wins a tie.
            match victim {
                Some((_, best)) if distance <= best => {}
                _ => victim = Some((page, distance)),
            }
            if distance == usize::MAX {
                break;
            }
        }

        victim.map(|(page, _)| page)
    }
}
