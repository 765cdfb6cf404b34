//! framesim - A page-replacement simulator with swappable eviction policies.
//!
//! Given a reference sequence of page ids and a fixed number of frames,
//! framesim replays the sequence under FIFO, LRU or Optimal replacement and
//! reports the frame contents, hit/miss outcome and cumulative fault count
//! after every reference.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                           framesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Presentation (input/, render/, bin/framesim)     │   │
//! │  │   reference text → Vec<PageId>   report → table / JSON  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │             Simulator (sim/)  [Policy Swappable]        │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     Eviction Policies: FIFO | LRU | Optimal     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │      Simulator + FrameSet + SimulationReport + Stats    │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameCapacity, Error, config)
//! - [`sim`] - The simulation loop and eviction policies
//! - [`input`] - Parsing reference strings from text and files
//! - [`render`] - Text tables for traces and comparisons
//!
//! # Quick Start
//! ```
//! use framesim::{pages, run, Policy};
//!
//! let refs = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
//! let report = run(Policy::Lru, 3, &refs).unwrap();
//!
//! assert_eq!(report.total_faults, 9);
//! assert_eq!(report.trace.len(), refs.len());
//! ```

pub mod common;
pub mod input;
pub mod render;
pub mod sim;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimConfig, DEFAULT_CAPACITY};
pub use common::{pages, Error, FrameCapacity, PageId, Result};

pub use sim::{
    compare, run, FrameSet, Outcome, Policy, Replacer, SimulationReport, Simulator, StepRecord,
    TraceStats,
};
