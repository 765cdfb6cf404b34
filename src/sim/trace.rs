//! Simulation trace: per-step records and the run report.

use serde::Serialize;

use crate::common::PageId;
use crate::sim::{Policy, TraceStats};

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    #[inline]
    pub fn is_miss(self) -> bool {
        self == Outcome::Miss
    }
}

/// State after processing one reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 1-based step index.
    pub step: usize,
    /// Page referenced at this step.
    pub page: PageId,
    /// Resident pages after the step, in slot order.
    pub frames: Vec<PageId>,
    pub outcome: Outcome,
    /// Faults so far, including this step.
    pub cumulative_faults: u64,
    /// Page evicted to make room, on a miss with all frames taken.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evicted: Option<PageId>,
}

/// Result of running one policy over one reference sequence.
///
/// The trace is a complete audit log: replaying it step by step gives back
/// every frame state and the final fault count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationReport {
    pub policy: Policy,
    pub capacity: usize,
    pub total_faults: u64,
    pub trace: Vec<StepRecord>,
}

impl SimulationReport {
    /// Counters derived from the trace.
    pub fn stats(&self) -> TraceStats {
        let mut stats = TraceStats::default();
        for record in &self.trace {
            stats.references += 1;
            match record.outcome {
                Outcome::Hit => stats.hits += 1,
                Outcome::Miss => stats.faults += 1,
            }
            if record.evicted.is_some() {
                stats.evictions += 1;
            }
        }
        stats
    }

    /// Resident-set size after each step.
    pub fn occupancy(&self) -> Vec<usize> {
        self.trace.iter().map(|r| r.frames.len()).collect()
    }

    /// CRC32 over the encoded trace.
    ///
    /// Equal traces give equal checksums, whichever policy produced them.
    pub fn checksum(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        for record in &self.trace {
            hasher.update(&(record.step as u64).to_le_bytes());
            hasher.update(&record.page.0.to_le_bytes());
            hasher.update(&(record.frames.len() as u64).to_le_bytes());
            for page in &record.frames {
                hasher.update(&page.0.to_le_bytes());
            }
            hasher.update(&[record.outcome.is_miss() as u8]);
            hasher.update(&record.cumulative_faults.to_le_bytes());
            match record.evicted {
                Some(page) => {
                    hasher.update(&[1]);
                    hasher.update(&page.0.to_le_bytes());
                }
                None => hasher.update(&[0]),
            }
        }
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    fn record(step: usize, page: i64, frames: &[i64], outcome: Outcome, faults: u64) -> StepRecord {
        StepRecord {
            step,
            page: PageId(page),
            frames: pages(frames),
            outcome,
            cumulative_faults: faults,
            evicted: None,
        }
    }

    fn sample_report() -> SimulationReport {
        let mut third = record(3, 2, &[1, 2], Outcome::Miss, 2);
        third.evicted = Some(PageId(3));
        SimulationReport {
            policy: Policy::Fifo,
            capacity: 2,
            total_faults: 2,
            trace: vec![
                record(1, 3, &[3], Outcome::Miss, 1),
                record(2, 3, &[3], Outcome::Hit, 1),
                third,
            ],
        }
    }

    #[test]
    fn test_stats_from_trace() {
        let stats = sample_report().stats();
        assert_eq!(stats.references, 3);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.faults, 2);
        assert_eq!(stats.evictions, 1);
    }

    #[test]
    fn test_occupancy() {
        assert_eq!(sample_report().occupancy(), vec![1, 1, 2]);
    }

    #[test]
    fn test_checksum_detects_change() {
        let report = sample_report();
        let mut altered = report.clone();
        altered.trace[1].outcome = Outcome::Miss;

        assert_eq!(report.checksum(), sample_report().checksum());
        assert_ne!(report.checksum(), altered.checksum());
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(record(1, 7, &[7], Outcome::Miss, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "step": 1,
                "page": 7,
                "frames": [7],
                "outcome": "Miss",
                "cumulative_faults": 1
            })
        );
    }
}
