use crate::control_system::controller_config::ControllerConfig;
use crate::control_system::direction_selector::{select_direction, Selection};
use crate::control_system::duration_calculator::calculate_durations;
use crate::control_system::signal_state_builder::set_signal_state;
use crate::errors::ConfigError;
use crate::models::{Durations, SensorReading, SignalState};

/// Everything decided for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleDecision {
    pub selection: Selection,
    pub total: u64,
    pub durations: Durations,
    pub state: SignalState,
}

/// Decides one cycle at a time from that cycle's counts alone.
/// Holds only timing configuration; nothing carries over between cycles.
#[derive(Debug, Clone, Default)]
pub struct TrafficLightController {
    config: ControllerConfig,
}

impl TrafficLightController {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    // counts -> override check -> selection -> duration -> state
    pub fn decide(&self, counts: &SensorReading, emergency_dir: Option<&str>) -> CycleDecision {
        let selection = select_direction(counts, emergency_dir);
        let total = counts.total();
        let green = calculate_durations(
            selection.count,
            total,
            self.config.min_green,
            self.config.max_green,
        );
        let state = set_signal_state(selection.direction, green, self.config.yellow_duration);

        log::debug!(
            "chose {} ({} of {} vehicles{}), green {}s",
            selection.direction,
            selection.count,
            total,
            if selection.emergency { ", emergency" } else { "" },
            green
        );

        CycleDecision {
            selection,
            total,
            durations: Durations {
                green,
                yellow: state.yellow_duration,
            },
            state,
        }
    }
}
