//! Report rendering: ASCII Gantt timeline and metrics table.
//!
//! The reporting surface consumes exactly what the scheduler exposes: the
//! coalesced activity log and the per-process metrics sequence. Wide
//! timelines fall back to an interval listing so the chart never wraps.

use std::collections::BTreeMap;
use std::fmt::Write;

use schedsim_core::common::SimTime;
use schedsim_core::sched::{ActivityLog, ProcessMetrics};

/// Widest timeline rendered as a per-tick chart before falling back to an
/// interval listing.
const MAX_CHART_TICKS: u64 = 100;

/// Renders the activity log as a Gantt-style timeline, one row per process.
pub fn render_gantt(log: &ActivityLog, policy: &str, quantum: Option<u64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title("CPU Activity (Gantt Chart)", policy, quantum));

    if log.is_empty() {
        let _ = writeln!(out, "  (no activity recorded)");
        return out;
    }

    // Group each process's occupied intervals, rows ordered by identifier.
    let mut rows: BTreeMap<&str, Vec<(SimTime, SimTime)>> = BTreeMap::new();
    for interval in log.intervals() {
        rows.entry(interval.pid.as_str())
            .or_default()
            .push((interval.start, interval.end));
    }

    let makespan = log.makespan();
    if makespan > MAX_CHART_TICKS {
        for (pid, spans) in &rows {
            let spans: Vec<String> = spans
                .iter()
                .map(|(start, end)| format!("[{start}, {end})"))
                .collect();
            let _ = writeln!(out, "  {pid:<8} {}", spans.join(" "));
        }
        return out;
    }

    let label_width = rows.keys().map(|pid| pid.len()).max().unwrap_or(0).max(4);
    let lane_width = makespan as usize;
    for (pid, spans) in &rows {
        let mut cells = vec!['.'; lane_width];
        for &(start, end) in spans {
            for cell in &mut cells[start as usize..end as usize] {
                *cell = '#';
            }
        }
        let lane: String = cells.into_iter().collect();
        let _ = writeln!(out, "  {pid:<label_width$} |{lane}|");
    }
    let _ = writeln!(out, "  {:<label_width$} 0{makespan:>lane_width$}", "time");
    out
}

/// Renders the metrics table, one row per process.
pub fn render_metrics_table(metrics: &[ProcessMetrics], policy: &str, quantum: Option<u64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title("Performance Metrics", policy, quantum));
    let _ = writeln!(
        out,
        "  {:<8} {:>12} {:>10} {:>13} {:>15} {:>26}",
        "Process", "Arrival Time", "Burst Time", "Response Time", "Turnaround Time", "Normalized Turnaround Time"
    );
    for m in metrics {
        let response = m
            .response_time
            .map_or_else(|| "-".to_owned(), |t| t.to_string());
        let _ = writeln!(
            out,
            "  {:<8} {:>12} {:>10} {:>13} {:>15} {:>26.3}",
            m.pid.as_str(),
            m.arrival_time,
            m.burst_time,
            response,
            m.turnaround_time,
            m.normalized_turnaround_time
        );
    }
    out
}

fn title(base: &str, policy: &str, quantum: Option<u64>) -> String {
    quantum.map_or_else(
        || format!("{base} - {policy}"),
        |q| format!("{base} - {policy} - Time Quantum: {q}"),
    )
}
