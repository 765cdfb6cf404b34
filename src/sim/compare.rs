//! Side-by-side comparison of several policies.

use std::panic;
use std::thread;

use log::debug;

use crate::common::config::SimConfig;
use crate::common::{FrameCapacity, PageId, Result};
use crate::sim::{Policy, SimulationReport, Simulator};

/// Run each of `policies` over the same sequence, one thread per policy.
///
/// Every run owns its own frame state. Reports come back in the order the
/// policies were given. An invalid capacity fails before any run starts.
///
/// # Example
/// ```
/// use framesim::{compare, pages, Policy};
///
/// let refs = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2]);
/// let reports = compare(3, &refs, &Policy::ALL).unwrap();
/// let faults: Vec<u64> = reports.iter().map(|r| r.total_faults).collect();
/// assert_eq!(faults, vec![10, 9, 7]);
/// ```
pub fn compare(
    capacity: usize,
    sequence: &[PageId],
    policies: &[Policy],
) -> Result<Vec<SimulationReport>> {
    let capacity = FrameCapacity::new(capacity)?;

    let reports: Vec<SimulationReport> = thread::scope(|scope| {
        let handles: Vec<_> = policies
            .iter()
            .map(|&policy| {
                scope.spawn(move || Simulator::new(SimConfig { policy, capacity }).run(sequence))
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    });
    debug!("compared {} policies with {}", reports.len(), capacity);

    Ok(reports)
}
