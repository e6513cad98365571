use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Startup configuration
// ---------------------------------------------------------------------------

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "planco.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("separator must be a single ASCII character, got {0:?}")]
    InvalidSeparator(char),

    #[error("no header alias configured for the {0} column")]
    NoAliases(&'static str),
}

/// Header names that identify the required columns of the input file.
///
/// The first header matching any alias wins.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub account_number: Vec<String>,
    pub account_title: Vec<String>,
    /// Name of the derived class column; `None` disables derivation.
    pub class: Option<String>,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            account_number: vec![
                "Numéro de compte".into(),
                "Numero de compte".into(),
                "N° de compte".into(),
            ],
            account_title: vec![
                "Intitulé du compte".into(),
                "Intitule du compte".into(),
                "Libellé".into(),
            ],
            class: Some("Classe".into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub file_path: PathBuf,
    pub separator: char,
    pub columns: ColumnNames,
    pub export_file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            file_path: PathBuf::from("planco.csv"),
            separator: ';',
            columns: ColumnNames::default(),
            export_file_name: "plan_comptable_filtre.csv".into(),
        }
    }
}

impl AppConfig {
    /// Read and validate a JSON config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the startup configuration: explicit path, else
    /// [`DEFAULT_CONFIG_FILE`] if present, else built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            log::warn!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Like [`AppConfig::resolve`], but a broken config file is logged and
    /// replaced by the built-in defaults so the window still opens.
    pub fn resolve_or_default(explicit: Option<&Path>) -> Self {
        Self::resolve(explicit).unwrap_or_else(|e| {
            log::error!("{e}; using built-in defaults");
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.separator_byte()?;
        if self.columns.account_number.is_empty() {
            return Err(ConfigError::NoAliases("account number"));
        }
        if self.columns.account_title.is_empty() {
            return Err(ConfigError::NoAliases("account title"));
        }
        Ok(())
    }

    /// The separator as the single byte the CSV reader expects.
    pub fn separator_byte(&self) -> Result<u8, ConfigError> {
        separator_byte(self.separator)
    }
}

pub fn separator_byte(separator: char) -> Result<u8, ConfigError> {
    u8::try_from(separator)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(ConfigError::InvalidSeparator(separator))
}
