use crate::CliError;
use serde::Deserialize;
use tinait_graph::{Format, MAX_ORDER};

/// Settings read from `--config <path>`. Missing keys take their defaults; flags given on the
/// command line win over the file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input format when `--format` is absent.
    pub format: String,
    /// Graphs with more vertices report `null` for exponential capabilities.
    pub max_exponential_order: usize,
    /// Only search `closed` when its prerequisite predicates hold.
    pub gate_closed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::default().id().to_string(),
            max_exponential_order: MAX_ORDER,
            gate_closed: true,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|err| CliError::Config(format!("{path}: {err}")))
    }

    pub fn input_format(&self) -> Result<Format, CliError> {
        self.format
            .parse()
            .map_err(|err| CliError::Config(format!("format: {err}")))
    }
}
