pub mod controller_config;
pub mod direction_selector;
pub mod duration_calculator;
pub mod signal_state_builder;
pub mod traffic_light_controller;

pub use controller_config::ControllerConfig;
pub use direction_selector::{emergency_override, prioritize_direction, select_direction, Selection};
pub use duration_calculator::calculate_durations;
pub use signal_state_builder::set_signal_state;
pub use traffic_light_controller::{CycleDecision, TrafficLightController};
