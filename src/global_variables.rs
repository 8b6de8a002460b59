// Green phase bounds (seconds)
pub const DEFAULT_MIN_GREEN: u32 = 10;
pub const DEFAULT_MAX_GREEN: u32 = 60;

// Yellow phase that follows every green
pub const DEFAULT_YELLOW_DURATION: u32 = 3;

// Random sensor counts are drawn from 0..=SENSOR_MAX_COUNT
pub const SENSOR_MAX_COUNT: u32 = 20;

// Console report
pub const SEPARATOR_WIDTH: usize = 60;

// Interactive input
pub const DEFAULT_INTERACTIVE_CYCLES: usize = 3;
