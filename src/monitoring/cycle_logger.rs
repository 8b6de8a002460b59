use crate::global_variables::SEPARATOR_WIDTH;
use crate::models::{CycleRecord, Direction, Durations, SensorReading, SignalState};
use std::io::{self, Write};

/// Appends one cycle to the run log and hands the log back.
pub fn log_state(
    logs: &mut Vec<CycleRecord>,
    iteration: usize,
    counts: SensorReading,
    chosen: Direction,
    durations: Durations,
    emergency: bool,
) -> &[CycleRecord] {
    logs.push(CycleRecord {
        iteration,
        counts,
        chosen,
        durations,
        emergency,
    });
    logs
}

/// Compact one-line view, e.g. `N:G(33s) | E:R(36s) | S:R(36s) | W:R(36s)`.
pub fn visualize_state(state: &SignalState) -> String {
    state
        .iter()
        .map(|(direction, light)| {
            format!("{}:{}({}s)", direction.initial(), light.color.glyph(), light.time)
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn print_state<W: Write>(out: &mut W, state: &SignalState) -> io::Result<()> {
    writeln!(out, "{}", visualize_state(state))
}

pub fn format_cycle_report(record: &CycleRecord) -> String {
    format!(
        "Cycle {}: counts={}, chosen={}, green={}s",
        record.iteration, record.counts, record.chosen, record.durations.green
    )
}

pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Report line, signal view, then the rule.
pub fn write_cycle_report<W: Write>(
    out: &mut W,
    record: &CycleRecord,
    state: &SignalState,
) -> io::Result<()> {
    writeln!(out, "{}", format_cycle_report(record))?;
    print_state(out, state)?;
    writeln!(out, "{}", separator())
}
