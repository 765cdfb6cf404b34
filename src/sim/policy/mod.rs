//! Eviction policy implementations (replacers).
//!
//! Every policy answers one question: which resident page goes when a miss
//! arrives and all frames are taken. The per-step skeleton (hit/miss check,
//! admission, trace recording) lives in [`Simulator`](crate::sim::Simulator)
//! and is shared by all of them.
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts by admission order, ignoring hits
//! - [`LruReplacer`] - evicts the page referenced furthest in the past
//! - [`OptimalReplacer`] - evicts the page needed furthest in the future (Belady)

mod fifo;
mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::common::{Error, PageId};
use crate::sim::FrameSet;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// Victim selection over a resident frame set.
///
/// A replacer is owned by exactly one run and sees every reference in order:
/// hits through [`record_hit`](Replacer::record_hit), admissions through
/// [`record_admission`](Replacer::record_admission). `step` is the 0-based
/// position of the reference in the sequence.
pub trait Replacer: Send {
    /// A resident page was referenced again.
    fn record_hit(&mut self, page: PageId, step: usize);

    /// A page was just admitted into a frame.
    fn record_admission(&mut self, page: PageId, step: usize);

    /// Choose a victim among `resident` and drop it from the policy state.
    ///
    /// `future` is the part of the reference sequence strictly after the
    /// current step. Returns `None` only if `resident` is empty.
    fn evict(&mut self, resident: &FrameSet, future: &[PageId]) -> Option<PageId>;
}

/// The page-replacement policy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Policy {
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "LRU")]
    Lru,
    #[serde(rename = "Optimal")]
    Optimal,
}

impl Policy {
    /// All policies, in display order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Lru, Policy::Optimal];

    /// Fresh replacer state for one run.
    pub fn replacer(self) -> Box<dyn Replacer> {
        match self {
            Policy::Fifo => Box::new(FifoReplacer::new()),
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::Optimal => Box::new(OptimalReplacer),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Lru => "LRU",
            Policy::Optimal => "Optimal",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "lru" => Ok(Policy::Lru),
            "optimal" | "opt" | "belady" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
