//! Text rendering of simulation reports.

use std::fmt::Write;

use crate::common::PageId;
use crate::sim::{Outcome, SimulationReport};

/// Per-step table followed by the total fault count.
///
/// Frame slots that are still free print as `-`.
///
/// ```text
/// FIFO, 3 frames
/// Step  Ref  Frames      Result  Faults
///    1    7  [7, -, -]   Miss         1
/// ...
/// Total Page Faults: 10
/// ```
pub fn render_trace(report: &SimulationReport) -> String {
    let cells: Vec<String> = report
        .trace
        .iter()
        .map(|r| frame_cells(&r.frames, report.capacity))
        .collect();
    let ref_width = report
        .trace
        .iter()
        .map(|r| r.page.to_string().len())
        .max()
        .unwrap_or(0)
        .max(3);
    let frames_width = cells.iter().map(String::len).max().unwrap_or(0).max(6);

    let mut out = String::new();
    let _ = writeln!(out, "{}, {} frames", report.policy, report.capacity);
    let _ = writeln!(
        out,
        "Step  {:>rw$}  {:<fw$}  Result  Faults",
        "Ref",
        "Frames",
        rw = ref_width,
        fw = frames_width
    );
    for (record, cells) in report.trace.iter().zip(&cells) {
        let outcome = match record.outcome {
            Outcome::Hit => "Hit",
            Outcome::Miss => "Miss",
        };
        let _ = writeln!(
            out,
            "{:>4}  {:>rw$}  {:<fw$}  {:<6}  {:>6}",
            record.step,
            record.page.to_string(),
            cells,
            outcome,
            record.cumulative_faults,
            rw = ref_width,
            fw = frames_width
        );
    }
    let _ = writeln!(out, "Total Page Faults: {}", report.total_faults);
    out
}

/// One summary row per report.
pub fn render_comparison(reports: &[SimulationReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<8}  {:>6}  {:>6}  {:>8}", "Policy", "Faults", "Hits", "Hit rate");
    for report in reports {
        let stats = report.stats();
        let _ = writeln!(
            out,
            "{:<8}  {:>6}  {:>6}  {:>7.2}%",
            report.policy.name(),
            stats.faults,
            stats.hits,
            stats.hit_rate() * 100.0
        );
    }
    out
}

/// Resident-set size after each step, on one line.
///
/// ```text
/// Pages in memory: 1 2 3 3 3 3
/// ```
pub fn render_occupancy(report: &SimulationReport) -> String {
    let sizes: Vec<String> = report.occupancy().iter().map(ToString::to_string).collect();
    format!("Pages in memory: {}", sizes.join(" ")).trim_end().to_string()
}

fn frame_cells(frames: &[PageId], capacity: usize) -> String {
    let mut cells: Vec<String> = frames.iter().map(ToString::to_string).collect();
    cells.resize(capacity.max(frames.len()), "-".to_string());
    format!("[{}]", cells.join(", "))
}
