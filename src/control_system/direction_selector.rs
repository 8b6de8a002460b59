use crate::models::{Direction, SensorReading, DIRECTIONS};

/// Outcome of choosing which approach gets the green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub direction: Direction,
    /// Vehicles waiting on the chosen approach.
    pub count: u32,
    /// True when an emergency override made the choice.
    pub emergency: bool,
}

/// Returns the emergency direction if `emergency_dir` names one, else `None`.
///
/// Unknown names are ignored and only logged. The override is for the
/// current cycle only.
pub fn emergency_override(_counts: &SensorReading, emergency_dir: Option<&str>) -> Option<Direction> {
    let name = emergency_dir.filter(|n| !n.is_empty())?;
    match name.parse::<Direction>() {
        Ok(direction) => Some(direction),
        Err(e) => {
            log::warn!("ignoring emergency request: {}", e);
            None
        }
    }
}

/// Picks the direction with the most vehicles.
///
/// Scans in `DIRECTIONS` order and only replaces the current pick on a strictly
/// larger count, so ties go to the earlier direction and an empty intersection
/// yields North with 0.
pub fn prioritize_direction(counts: &SensorReading) -> (Direction, u32) {
    let mut chosen = DIRECTIONS[0];
    let mut max_count: Option<u32> = None;
    for (direction, count) in counts.iter() {
        if max_count.map_or(true, |max| count > max) {
            max_count = Some(count);
            chosen = direction;
        }
    }
    (chosen, max_count.unwrap_or(0))
}

/// Emergency override first, then traffic-based selection.
pub fn select_direction(counts: &SensorReading, emergency_dir: Option<&str>) -> Selection {
    match emergency_override(counts, emergency_dir) {
        Some(direction) => Selection {
            direction,
            count: counts.get(direction),
            emergency: true,
        },
        None => {
            let (direction, count) = prioritize_direction(counts);
            Selection {
                direction,
                count,
                emergency: false,
            }
        }
    }
}
