// src/config.rs

//! Conversion settings
//!
//! Settings come from three layers, highest first: command-line flags, an
//! optional TOML file, and the built-in defaults below.
//!
//! # Example hanconv.toml
//!
//! ```toml
//! input = "./NNLM-ZH/assets/tokens.txt"
//! output = "./tokens.txt"
//!
//! # zh-hant, zh-hans, zh-tw, zh-hk or zh-cn
//! target = "zh-hant"
//! ```

use crate::converter::Target;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default token file to read
pub const DEFAULT_INPUT_PATH: &str = "./NNLM-ZH/assets/tokens.txt";

/// Default file to write converted tokens to
pub const DEFAULT_OUTPUT_PATH: &str = "./tokens.txt";

/// Resolved settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Token file to read
    pub input: PathBuf,

    /// File to write converted tokens to
    pub output: PathBuf,

    /// Script variant to convert into
    pub target: Target,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            target: Target::default(),
        }
    }
}

/// Values supplied on the command line; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub target: Option<Target>,
}

impl ConvertConfig {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::parse(&content).map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate settings from a TOML string
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        let config: ConvertConfig = toml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the final settings: defaults, then `file`, then `overrides`
    pub fn resolve(file: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match file {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(input) = overrides.input {
            config.input = input;
        }
        if let Some(output) = overrides.output {
            config.output = output;
        }
        if let Some(target) = overrides.target {
            config.target = target;
        }

        config.validate().map_err(|reason| Error::Config {
            path: file
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("<command line>")),
            reason,
        })?;
        Ok(config)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.input.as_os_str().is_empty() {
            return Err("input path is empty".to_string());
        }
        if self.output.as_os_str().is_empty() {
            return Err("output path is empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ConvertConfig::default();
        assert_eq!(config.input, PathBuf::from("./NNLM-ZH/assets/tokens.txt"));
        assert_eq!(config.output, PathBuf::from("./tokens.txt"));
        assert_eq!(config.target, Target::Traditional);
    }

    #[test]
    fn test_parse_full() {
        let config = ConvertConfig::parse(
            r#"
input = "vocab/in.txt"
output = "vocab/out.txt"
target = "zh-tw"
"#,
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from("vocab/in.txt"));
        assert_eq!(config.output, PathBuf::from("vocab/out.txt"));
        assert_eq!(config.target, Target::Taiwan);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = ConvertConfig::parse(r#"target = "t2s""#).unwrap();
        assert_eq!(config.target, Target::Simplified);
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_PATH));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        assert!(ConvertConfig::parse(r#"inptu = "typo.txt""#).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_target() {
        assert!(ConvertConfig::parse(r#"target = "zh-xx""#).is_err());
    }

    #[test]
    fn test_parse_rejects_empty_path() {
        let err = ConvertConfig::parse(r#"output = """#).unwrap_err();
        assert!(err.contains("output path is empty"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConvertConfig::load(Path::new("/nonexistent/hanconv.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_resolve_precedence() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
input = "from-file.txt"
output = "from-file-out.txt"
target = "zh-hk"
"#
        )
        .unwrap();

        let overrides = ConfigOverrides {
            output: Some(PathBuf::from("from-cli.txt")),
            ..Default::default()
        };
        let config = ConvertConfig::resolve(Some(file.path()), overrides).unwrap();
        assert_eq!(config.input, PathBuf::from("from-file.txt"));
        assert_eq!(config.output, PathBuf::from("from-cli.txt"));
        assert_eq!(config.target, Target::HongKong);
    }

    #[test]
    fn test_resolve_without_file() {
        let overrides = ConfigOverrides {
            target: Some(Target::Mainland),
            ..Default::default()
        };
        let config = ConvertConfig::resolve(None, overrides).unwrap();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.target, Target::Mainland);
    }

    #[test]
    fn test_resolve_rejects_empty_override() {
        let overrides = ConfigOverrides {
            input: Some(PathBuf::new()),
            ..Default::default()
        };
        let err = ConvertConfig::resolve(None, overrides).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
