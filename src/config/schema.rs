use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::Locale;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/specto/config.toml` or `~/.config/specto/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SPECTO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub export: ExportSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Display language at startup: `en` or `zh`. Unknown codes mean `en`.
    pub language: Locale,

    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Whether categories start expanded.
    pub expand_all: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: Locale::En,
            header_text: " ~ specto: what's inside the file ~ ".to_string(),
            expand_all: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Column the attribute labels are padded to in text reports.
    pub label_width: usize,

    /// Where exported reports go. Defaults to the loaded file's directory.
    pub directory: Option<PathBuf>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            label_width: 25,
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,

    /// Log file. Defaults to `$XDG_STATE_HOME/specto/specto.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
