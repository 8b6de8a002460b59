use thiserror::Error;

/// Problems with sensor input that does not come in already typed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unknown direction `{0}` (expected North, East, South or West)")]
    InvalidDirection(String),
    #[error("invalid vehicle count `{value}` for {direction}: expected a non-negative integer")]
    InvalidCount { direction: String, value: String },
    #[error("sensor input must be an object keyed by direction, got `{0}`")]
    NotAnObject(String),
    #[error("sensor script must be a JSON array of readings, got `{0}`")]
    NotASequence(String),
    #[error("malformed sensor script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("input stream closed before all counts were entered")]
    EndOfInput,
    #[error("failed to read from prompt: {0}")]
    Prompt(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_green ({min}s) must not exceed max_green ({max}s)")]
    GreenRange { min: u32, max: u32 },
    #[error("failed to parse controller config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to export cycle log as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to export cycle log as CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Usage(String),
}
