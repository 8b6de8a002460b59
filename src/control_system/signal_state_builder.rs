use crate::models::{Direction, Light, LightColor, SignalState, DIRECTIONS};

/// Builds the signal heads for a cycle.
///
/// The chosen direction shows green for `green_duration`. Every other
/// direction stays red through that green and the yellow that follows it.
pub fn set_signal_state(green_direction: Direction, green_duration: u32, yellow_duration: u32) -> SignalState {
    let red_time = green_duration.saturating_add(yellow_duration);
    let lights = DIRECTIONS.map(|d| {
        if d == green_direction {
            Light {
                color: LightColor::Green,
                time: green_duration,
            }
        } else {
            Light {
                color: LightColor::Red,
                time: red_time,
            }
        }
    });
    SignalState::new(lights, yellow_duration)
}
