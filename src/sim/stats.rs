//! Simulation statistics.

use std::fmt;

/// Counters summarizing one trace.
///
/// # Example
/// ```
/// use framesim::TraceStats;
///
/// let stats = TraceStats { references: 10, hits: 7, faults: 3, evictions: 1 };
/// assert_eq!(stats.hit_rate(), 0.7);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    /// Number of references processed.
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References that caused a page fault.
    pub faults: u64,

    /// Faults that had to evict a resident page.
    pub evictions: u64,
}

impl TraceStats {
    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Calculate fault rate (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
