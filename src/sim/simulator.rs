//! The per-step simulation loop shared by every policy.

use log::{debug, trace};

use crate::common::config::SimConfig;
use crate::common::{PageId, Result};
use crate::sim::{FrameSet, Outcome, Policy, Replacer, SimulationReport, StepRecord};

/// Runs one policy over a reference sequence.
///
/// Frame state and policy bookkeeping are created fresh inside each
/// [`run`](Simulator::run) call and dropped at the end, so one simulator
/// can be reused and shared freely.
///
/// # Example
/// ```
/// use framesim::{pages, Policy, SimConfig, Simulator};
///
/// let sim = Simulator::new(SimConfig::new(Policy::Optimal, 3).unwrap());
/// let report = sim.run(&pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]));
/// assert_eq!(report.total_faults, 7);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SimConfig {
        self.config
    }

    /// Process every reference in order and return the full trace.
    pub fn run(&self, sequence: &[PageId]) -> SimulationReport {
        self.run_with(self.config.policy.replacer(), sequence)
    }

    /// Same loop as [`run`](Simulator::run), driven by an explicit replacer.
    pub(crate) fn run_with(
        &self,
        mut replacer: Box<dyn Replacer>,
        sequence: &[PageId],
    ) -> SimulationReport {
        let SimConfig { policy, capacity } = self.config;

        let mut frames = FrameSet::new(capacity);
        let mut faults = 0u64;
        let mut steps = Vec::with_capacity(sequence.len());

        for (i, &page) in sequence.iter().enumerate() {
            let (outcome, evicted) = if frames.contains(page) {
                replacer.record_hit(page, i);
                (Outcome::Hit, None)
            } else {
                faults += 1;

                let evicted = if frames.is_full() {
                    let victim = replacer.evict(&frames, &sequence[i + 1..]);
                    debug_assert!(
                        victim.is_some(),
                        "{} chose no victim from a full frame set",
                        policy
                    );
                    if let Some(victim) = victim {
                        let slot = frames.remove(victim);
                        debug_assert!(slot.is_some(), "victim {} is not resident", victim);
                        trace!(
                            "{} step {}: evict {} to admit {}",
                            policy,
                            i + 1,
                            victim,
                            page
                        );
                    }
                    victim
                } else {
                    None
                };

                let admitted = frames.admit(page);
                debug_assert!(admitted, "page {} was not admitted", page);
                replacer.record_admission(page, i);
                (Outcome::Miss, evicted)
            };

            steps.push(StepRecord {
                step: i + 1,
                page,
                frames: frames.snapshot(),
                outcome,
                cumulative_faults: faults,
                evicted,
            });
        }

        debug!(
            "{} with {}: {} references, {} faults",
            policy,
            capacity,
            sequence.len(),
            faults
        );

        SimulationReport {
            policy,
            capacity: capacity.get(),
            total_faults: faults,
            trace: steps,
        }
    }
}

/// Run `policy` with `capacity` frames over `sequence`.
///
/// Fails with [`Error::InvalidCapacity`](crate::Error::InvalidCapacity)
/// when `capacity` is zero, before any reference is processed.
///
/// # Example
/// ```
/// use framesim::{pages, run, Policy};
///
/// let report = run(Policy::Fifo, 1, &pages(&[1, 1, 1])).unwrap();
/// assert_eq!(report.total_faults, 1);
/// assert!(run(Policy::Fifo, 0, &pages(&[1])).is_err());
/// ```
pub fn run(policy: Policy, capacity: usize, sequence: &[PageId]) -> Result<SimulationReport> {
    let config = SimConfig::new(policy, capacity)?;
    Ok(Simulator::new(config).run(sequence))
}
