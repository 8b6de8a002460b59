use crate::errors::InputError;
use crate::global_variables::SENSOR_MAX_COUNT;
use crate::models::SensorReading;
use rand::Rng;
use serde_json::Value;
use std::io::Read;

/// Reads the vehicle count for each direction.
///
/// A supplied reading is used as-is. Without one, every direction gets an
/// independent uniform count in `0..=SENSOR_MAX_COUNT`.
pub fn read_sensors<R: Rng>(
    simulated: Option<&SensorReading>,
    rng: &mut R,
) -> SensorReading {
    match simulated {
        Some(reading) => *reading,
        None => random_reading(rng),
    }
}

/// Hook for preprocessing raw sensor data before the controller sees it.
/// Currently a straight pass-through to `read_sensors`.
pub fn detect_traffic<R: Rng>(
    sensor_data: Option<&SensorReading>,
    rng: &mut R,
) -> SensorReading {
    read_sensors(sensor_data, rng)
}

/// Parses a JSON array of per-cycle readings, e.g.
/// `[{"North": 5, "East": 2}, {"South": 1}]`.
pub fn parse_sensor_script(json: &str) -> Result<Vec<SensorReading>, InputError> {
    let value: Value = serde_json::from_str(json)?;
    let cycles = value
        .as_array()
        .ok_or_else(|| InputError::NotASequence(value.to_string()))?;
    cycles.iter().map(SensorReading::from_json_value).collect()
}

/// Reads a whole sensor script (see `parse_sensor_script`) from `reader`.
pub fn read_sensor_script<R: Read>(mut reader: R) -> Result<Vec<SensorReading>, InputError> {
    let mut json = String::new();
    reader.read_to_string(&mut json)?;
    parse_sensor_script(&json)
}

fn random_reading<R: Rng>(rng: &mut R) -> SensorReading {
    let mut counts = [0; 4];
    for count in counts.iter_mut() {
        *count = rng.random_range(0..=SENSOR_MAX_COUNT);
    }
    SensorReading::new(counts)
}
