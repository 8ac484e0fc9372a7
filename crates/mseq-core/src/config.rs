//! # Configuration System
//!
//! YAML configuration for batch sequence generation: which sequence to
//! build and how to log while doing it.
//!
//! ## Configuration Search Path
//!
//! Configuration is loaded from the first file found:
//! 1. Path specified via `MSEQ_CONFIG` environment variable
//! 2. `./mseq.yaml` (current directory)
//! 3. `~/.config/mseq/config.yaml` (user config)
//!
//! ## Example Configuration
//!
//! ```yaml
//! sequence:
//!   base: 3
//!   power: 4
//!   shift: 0
//!   selection: 0   # random row
//!   seed: 42       # makes the random row reproducible
//!
//! logging:
//!   level: debug
//!   format: compact
//! ```

use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::logging::LogConfig;
use crate::mseq::{MSequence, MseqParams};
use crate::taps::taps_for;
use crate::types::{Alphabet, MseqResult, Symbol};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "MSEQ_CONFIG";

/// Error type for configuration operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config not found: {0}")]
    NotFound(String),

    #[error("failed to read config: {0}")]
    ReadError(String),

    #[error("failed to parse config: {0}")]
    ParseError(String),

    #[error("invalid config: {0}")]
    ValidationError(String),
}

/// Which sequence to generate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Number of sequence levels (2, 3 or 5)
    pub base: u32,
    /// Register length
    pub power: u32,
    /// Cyclic left rotation
    pub shift: usize,
    /// 1-based tap row, 0 for random
    pub selection: usize,
    /// Seed for the random row; thread RNG when absent
    pub seed: Option<u64>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        let params = MseqParams::default();
        Self {
            base: params.base,
            power: params.power,
            shift: params.shift,
            selection: params.selection,
            seed: None,
        }
    }
}

impl SequenceConfig {
    pub fn params(&self) -> MseqParams {
        MseqParams {
            base: self.base,
            power: self.power,
            shift: self.shift,
            selection: self.selection,
        }
    }

    /// Resolve the tap row, seeding the random draw if configured.
    pub fn build(&self) -> MseqResult<MSequence> {
        match self.seed {
            Some(seed) => MSequence::with_rng(&self.params(), &mut StdRng::seed_from_u64(seed)),
            None => MSequence::new(&self.params()),
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MseqConfig {
    pub sequence: SequenceConfig,
    pub logging: LogConfig,
}

impl MseqConfig {
    /// Load configuration from the search path.
    ///
    /// Returns the default config if no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(ConfigError::NotFound(path.display().to_string()));
            }
            return Self::load_from(&path);
        }

        match Self::config_search_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_yaml()?)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
    }

    /// Get configuration search paths.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./mseq.yaml")];
        if let Some(dirs) = directories::ProjectDirs::from("", "", "mseq") {
            paths.push(dirs.config_dir().join("config.yaml"));
        }
        paths
    }

    /// Check that the configured sequence is tabulated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let alphabet = Alphabet::try_from(self.sequence.base)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        taps_for(alphabet, self.sequence.power)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;
        Ok(())
    }

    /// Generate the configured sequence.
    pub fn generate(&self) -> MseqResult<Vec<Symbol>> {
        Ok(self.sequence.build()?.generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogFormat, LogLevel};
    use crate::mseq::generate;

    #[test]
    fn test_default_config() {
        let config = MseqConfig::default();
        assert_eq!(config.sequence.base, 2);
        assert_eq!(config.sequence.shift, 1);
        assert_eq!(config.sequence.selection, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
sequence:
  base: 3
  power: 4
  shift: 7
  selection: 2
logging:
  level: debug
  format: json
"#;
        let config = MseqConfig::parse(yaml).unwrap();
        assert_eq!(config.sequence.base, 3);
        assert_eq!(config.sequence.power, 4);
        assert_eq!(config.sequence.shift, 7);
        assert_eq!(config.sequence.selection, 2);
        assert_eq!(config.sequence.seed, None);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.generate().unwrap(), generate(3, 4, 7, 2).unwrap());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let config = MseqConfig::parse("sequence:\n  power: 7\n").unwrap();
        assert_eq!(config.sequence.base, 2);
        assert_eq!(config.sequence.power, 7);
        assert_eq!(config.sequence.shift, 1);
        assert_eq!(config.logging, LogConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = MseqConfig::parse("sequence: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation() {
        let mut config = MseqConfig::default();
        config.sequence.base = 4;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        config.sequence.base = 5;
        config.sequence.power = 5;
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "invalid config: M-sequence 5^5 is not defined");

        config.sequence.power = 4;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seeded_random_selection() {
        let config = MseqConfig::parse(
            "sequence:\n  base: 2\n  power: 9\n  shift: 0\n  selection: 0\n  seed: 1234\n",
        )
        .unwrap();
        let a = config.sequence.build().unwrap();
        let b = config.sequence.build().unwrap();
        assert_eq!(a.selection(), b.selection());
        assert!((1..=48).contains(&a.selection()));
        assert_eq!(config.generate().unwrap(), a.generate());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let mut config = MseqConfig::default();
        config.sequence.seed = Some(9);
        config.logging = LogConfig::development();
        let parsed = MseqConfig::parse(&config.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("mseq-config-{}.yaml", std::process::id()));
        let mut config = MseqConfig::default();
        config.sequence.base = 5;
        config.sequence.power = 3;
        config.save(&path).unwrap();
        let loaded = MseqConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = MseqConfig::load_from(Path::new("/nonexistent/mseq.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_config_search_paths() {
        let paths = MseqConfig::config_search_paths();
        assert_eq!(paths[0], PathBuf::from("./mseq.yaml"));
    }
}
