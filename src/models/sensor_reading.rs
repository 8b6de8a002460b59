use crate::errors::InputError;
use crate::models::direction::{Direction, DIRECTIONS};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Vehicle counts for one cycle, one entry per direction.
///
/// Backed by a fixed array in `DIRECTIONS` order, so a reading can never be
/// missing a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct SensorReading {
    counts: [u32; 4],
}

impl SensorReading {
    /// Counts given in `DIRECTIONS` order (North, East, South, West).
    pub fn new(counts: [u32; 4]) -> Self {
        Self { counts }
    }

    /// Builds a reading from whatever directions are supplied; the rest are 0.
    /// A direction given twice keeps its last count.
    pub fn from_partial<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Direction, u32)>,
    {
        let mut counts = [0; 4];
        for (direction, count) in entries {
            counts[direction.index()] = count;
        }
        Self { counts }
    }

    /// Parses an untyped JSON object such as `{"North": 5, "East": "2"}`.
    ///
    /// Missing directions default to 0. Counts must be non-negative integers;
    /// numeric strings and whole-valued floats are accepted, anything else is
    /// rejected rather than silently defaulted.
    pub fn from_json_value(value: &Value) -> Result<Self, InputError> {
        let object = value
            .as_object()
            .ok_or_else(|| InputError::NotAnObject(value.to_string()))?;

        let mut entries = Vec::with_capacity(object.len());
        for (key, raw) in object {
            let direction: Direction = key.parse()?;
            entries.push((direction, coerce_count(direction, raw)?));
        }
        Ok(Self::from_partial(entries))
    }

    pub fn get(&self, direction: Direction) -> u32 {
        self.counts[direction.index()]
    }

    /// Sum over all directions. Widened so four large counts cannot overflow.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// `(direction, count)` pairs in `DIRECTIONS` order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, u32)> + '_ {
        DIRECTIONS.iter().map(move |&d| (d, self.get(d)))
    }

    pub fn as_array(&self) -> [u32; 4] {
        self.counts
    }
}

fn coerce_count(direction: Direction, raw: &Value) -> Result<u32, InputError> {
    let invalid = || InputError::InvalidCount {
        direction: direction.to_string(),
        value: raw.to_string(),
    };

    match raw {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                u32::try_from(v).map_err(|_| invalid())
            } else if let Some(f) = n.as_f64() {
                if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
                    Ok(f as u32)
                } else {
                    Err(invalid())
                }
            } else {
                Err(invalid())
            }
        }
        Value::String(s) => s.trim().parse::<u32>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

impl TryFrom<Value> for SensorReading {
    type Error = InputError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json_value(&value)
    }
}

impl Serialize for SensorReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(DIRECTIONS.len()))?;
        for (direction, count) in self.iter() {
            map.serialize_entry(direction.name(), &count)?;
        }
        map.end()
    }
}

/// Renders as `{'North': 5, 'East': 2, 'South': 3, 'West': 1}`.
impl fmt::Display for SensorReading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, (direction, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}': {}", direction, count)?;
        }
        f.write_str("}")
    }
}
