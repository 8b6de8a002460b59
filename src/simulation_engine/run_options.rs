use crate::control_system::ControllerConfig;
use crate::errors::SimulationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Command line for `simulation_main`:
/// `[json|csv] [--config '<json>'] [--script]`.
///
/// `--script` reads a JSON array of readings from stdin and runs it instead
/// of the built-in demos.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunOptions {
    pub export: Option<ExportFormat>,
    pub config: ControllerConfig,
    pub script_from_stdin: bool,
}

impl RunOptions {
    pub fn from_args<I>(args: I) -> Result<Self, SimulationError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "json" => options.export = Some(ExportFormat::Json),
                "csv" => options.export = Some(ExportFormat::Csv),
                "--script" => options.script_from_stdin = true,
                "--config" => {
                    let json = args.next().ok_or_else(|| {
                        SimulationError::Usage("--config needs a JSON object".to_string())
                    })?;
                    options.config = ControllerConfig::from_json_str(&json)?;
                }
                other => {
                    return Err(SimulationError::Usage(format!(
                        "unknown argument '{}' (expected json, csv, --config or --script)",
                        other
                    )))
                }
            }
        }
        Ok(options)
    }
}
