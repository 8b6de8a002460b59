use crate::models::SensorReading;

pub const RANDOM_DEMO_CYCLES: usize = 8;

/// Four scripted cycles: a clear leader, a different leader, an empty
/// intersection, and a four-way tie.
pub fn deterministic_readings() -> Vec<SensorReading> {
    vec![
        SensorReading::new([5, 2, 3, 1]),
        SensorReading::new([2, 9, 4, 1]),
        SensorReading::new([0, 0, 0, 0]),
        SensorReading::new([3, 3, 3, 3]),
    ]
}

/// Two evenly loaded cycles; East calls an emergency on the second.
pub fn emergency_readings() -> Vec<SensorReading> {
    vec![
        SensorReading::new([1, 1, 1, 1]),
        SensorReading::new([2, 2, 2, 2]),
    ]
}

pub fn emergency_directives() -> Vec<Option<&'static str>> {
    vec![None, Some("East")]
}
