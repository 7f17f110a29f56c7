//! Pipeline configuration
//!
//! Every field has a default, so an empty JSON object is a complete
//! configuration that reproduces the reference flight.

use flight_core::{Error, Result};
use flight_isolation::IsolationForestParameters;
use flight_synth::FlightProfileParameters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default CSV export path
pub const DEFAULT_CSV_PATH: &str = "flight_results.csv";

/// Where the report goes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV export path; `None` disables the export
    pub csv_path: Option<PathBuf>,
    /// Print the summary and anomaly listing to stdout
    pub console: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: Some(PathBuf::from(DEFAULT_CSV_PATH)),
            console: true,
        }
    }
}

/// Full configuration of one analysis run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub detector: IsolationForestParameters,
    pub profile: FlightProfileParameters,
    pub output: OutputConfig,
}

impl PipelineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfiguration(format!("invalid pipeline config: {e}")))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Other(e.into()))
    }

    pub fn validate(&self) -> Result<()> {
        self.detector.validate()?;
        self.profile.validate()?;
        if let Some(path) = &self.output.csv_path {
            if path.as_os_str().is_empty() {
                return Err(Error::InvalidConfiguration(
                    "csv_path must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flight_isolation::MaxSamples;

    #[test]
    fn test_empty_object_is_default() {
        let config = PipelineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
        assert_eq!(config.detector.contamination, 0.08);
        assert_eq!(config.detector.seed, 42);
        assert_eq!(config.output.csv_path.as_deref(), Some(Path::new(DEFAULT_CSV_PATH)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_sections() {
        let config = PipelineConfig::from_json_str(
            r#"{
                "detector": { "contamination": 0.1, "max_samples": { "count": 32 } },
                "profile": { "seed": 9 },
                "output": { "csv_path": null, "console": false }
            }"#,
        )
        .unwrap();

        assert_eq!(config.detector.contamination, 0.1);
        assert_eq!(config.detector.max_samples, MaxSamples::Count(32));
        assert_eq!(config.detector.n_trees, 100);
        assert_eq!(config.profile.seed, 9);
        assert_eq!(config.output.csv_path, None);
        assert!(!config.output.console);
    }

    #[test]
    fn test_round_trip_through_json() {
        let config = PipelineConfig::default();
        let json = config.to_json_string().unwrap();
        assert_eq!(PipelineConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            PipelineConfig::from_json_str("{ not json"),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_contamination() {
        let mut config = PipelineConfig::default();
        config.detector.contamination = 0.6;
        assert!(matches!(config.validate(), Err(Error::InvalidConfiguration(_))));
    }
}
