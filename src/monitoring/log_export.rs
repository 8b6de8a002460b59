use crate::errors::SimulationError;
use crate::models::{CycleRecord, Direction, DIRECTIONS};
use serde::Serialize;
use std::io::Write;

/// Flat CSV row for one cycle.
#[derive(Debug, Serialize)]
struct CycleLogRow {
    iteration: usize,
    north: u32,
    east: u32,
    south: u32,
    west: u32,
    chosen: Direction,
    green: u32,
    yellow: u32,
    emergency: bool,
}

impl From<&CycleRecord> for CycleLogRow {
    fn from(record: &CycleRecord) -> Self {
        let [north, east, south, west] = record.counts.as_array();
        Self {
            iteration: record.iteration,
            north,
            east,
            south,
            west,
            chosen: record.chosen,
            green: record.durations.green,
            yellow: record.durations.yellow,
            emergency: record.emergency,
        }
    }
}

/// Writes the log as a pretty-printed JSON array.
pub fn write_log_json<W: Write>(writer: W, logs: &[CycleRecord]) -> Result<(), SimulationError> {
    serde_json::to_writer_pretty(writer, logs)?;
    Ok(())
}

/// Writes the log as CSV with a header row.
pub fn write_log_csv<W: Write>(writer: W, logs: &[CycleRecord]) -> Result<(), SimulationError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in logs {
        wtr.serialize(CycleLogRow::from(record))?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionSummary {
    pub direction: Direction,
    pub times_chosen: usize,
    pub green_seconds: u64,
}

/// Totals over a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub cycles: usize,
    pub emergency_cycles: usize,
    pub average_green: f64,
    pub per_direction: Vec<DirectionSummary>,
}

pub fn summarize(logs: &[CycleRecord]) -> RunSummary {
    let mut per_direction: Vec<DirectionSummary> = DIRECTIONS
        .iter()
        .map(|&direction| DirectionSummary {
            direction,
            times_chosen: 0,
            green_seconds: 0,
        })
        .collect();

    let mut total_green = 0u64;
    for record in logs {
        let entry = &mut per_direction[record.chosen.index()];
        entry.times_chosen += 1;
        entry.green_seconds += record.durations.green as u64;
        total_green += record.durations.green as u64;
    }

    let average_green = if logs.is_empty() {
        0.0
    } else {
        total_green as f64 / logs.len() as f64
    };

    RunSummary {
        cycles: logs.len(),
        emergency_cycles: logs.iter().filter(|r| r.emergency).count(),
        average_green,
        per_direction,
    }
}
