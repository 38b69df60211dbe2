use cpu_scheduling_sim::{Policy, Schedule, SchedulerError};
use std::fmt::Write;

const HEADER: &str = "| PID    | Arrival Time | Burst Time | Waiting Time | Turnaround Time |";
const RULE: &str = "|--------|--------------|------------|--------------|-----------------|";

pub fn render_table(schedule: &Schedule) -> String {
    let mut table = format!("{HEADER}\n{RULE}\n");
    for result in &schedule.results {
        let _ = writeln!(
            table,
            "| {:<6} | {:<12} | {:<10} | {:<12} | {:<15} |",
            result.id, result.arrival, result.burst, result.waiting, result.turnaround
        );
    }
    table
}

/// One-line Gantt chart, e.g. `[0-2 P1] [2-3 idle] [3-5 P2]`.
pub fn render_timeline(schedule: &Schedule) -> String {
    schedule
        .timeline
        .iter()
        .map(|slice| {
            format!(
                "[{}-{} {}]",
                slice.start,
                slice.end,
                slice.process.as_deref().unwrap_or("idle")
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render(policy: &Policy, schedule: &Schedule) -> Result<String, SchedulerError> {
    let averages = schedule.averages()?;

    let mut report = format!("\n{policy} Scheduling Results:\n");
    report.push_str(&render_table(schedule));
    let _ = writeln!(report, "\nAverage Waiting Time: {:.2}", averages.waiting);
    let _ = writeln!(report, "Average Turnaround Time: {:.2}", averages.turnaround);
    let _ = writeln!(report, "Timeline: {}", render_timeline(schedule));
    Ok(report)
}
