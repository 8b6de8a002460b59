use crate::models::direction::{Direction, DIRECTIONS};
use serde::{Deserialize, Serialize};

/// The possible colors shown by a signal head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LightColor {
    Green,
    Yellow,
    Red,
}

impl LightColor {
    pub fn glyph(self) -> char {
        match self {
            LightColor::Green => 'G',
            LightColor::Yellow => 'Y',
            LightColor::Red => 'R',
        }
    }
}

/// What one approach shows, and for how many more seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Light {
    pub color: LightColor,
    pub time: u32,
}

/// Snapshot of all four signal heads for a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalState {
    lights: [Light; 4],
    /// Yellow phase following the green. Not shown on any head in this snapshot.
    pub yellow_duration: u32,
}

impl SignalState {
    pub fn new(lights: [Light; 4], yellow_duration: u32) -> Self {
        Self {
            lights,
            yellow_duration,
        }
    }

    pub fn light(&self, direction: Direction) -> Light {
        self.lights[direction.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, Light)> + '_ {
        DIRECTIONS.iter().map(move |&d| (d, self.light(d)))
    }

    /// Counts every timer down by `elapsed` seconds, stopping at zero.
    /// Colors are left alone; switching phases is up to the caller.
    pub fn update_timers(&mut self, elapsed: u32) {
        for light in self.lights.iter_mut() {
            light.time = light.time.saturating_sub(elapsed);
        }
    }
}
