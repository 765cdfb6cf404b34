//! Page-replacement simulation.
//!
//! A run takes a reference sequence and a frame capacity and replays every
//! reference against a resident [`FrameSet`], using one [`Policy`] to pick
//! victims when the frames are full.
//!
//! # Components
//! - [`Simulator`] / [`run`] - The per-step loop (hit/miss, evict, admit, record)
//! - [`FrameSet`] - Resident pages in slot order
//! - [`SimulationReport`] / [`StepRecord`] - The trace a run produces
//! - [`TraceStats`] - Counters derived from a trace
//! - [`compare`] - Several policies over the same input, in parallel
//! - [`policy`] - Eviction policy implementations

mod compare;
mod frame_set;
pub mod policy;
mod simulator;
mod stats;
mod trace;

pub use compare::compare;
pub use frame_set::FrameSet;
pub use policy::{Policy, Replacer};
pub use simulator::{run, Simulator};
pub use stats::TraceStats;
pub use trace::{Outcome, SimulationReport, StepRecord};
