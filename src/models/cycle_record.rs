use crate::models::direction::Direction;
use crate::models::sensor_reading::SensorReading;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub green: u32,
    pub yellow: u32,
}

/// One completed decision cycle, as kept in the run log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// 1-based cycle number.
    pub iteration: usize,
    pub counts: SensorReading,
    pub chosen: Direction,
    pub durations: Durations,
    /// True when an emergency override decided the cycle.
    #[serde(default)]
    pub emergency: bool,
}
