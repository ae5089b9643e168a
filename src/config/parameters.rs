//! Builder and output configuration.
//!
//! Enumeration ranges are fixed by the model; only which optional rules run
//! and where the table is written can be configured.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the builder configuration file
pub const DEFAULT_CONFIG_PATH: &str = "data/config/builder.json";

/// Default name of the text dump consumed by the simulator
pub const DEFAULT_OUTPUT_PATH: &str = "Geerts_all_reactions.txt";

/// On-disk format of the reaction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One dictionary-style line per record (simulator input)
    #[default]
    Text,
    /// One JSON object per line
    Jsonl,
    /// Comma-separated rows with a header
    Csv,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Jsonl => "jsonl",
            ExportFormat::Csv => "csv",
        }
    }
}

/// Where and how the table is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: ExportFormat,
}

impl OutputConfig {
    /// Switch to `format`, giving the output path the matching extension
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.path.set_extension(format.extension());
        self.format = format;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: ExportFormat::Text,
        }
    }
}

/// Top-level builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Emit plasma monomer-antibody binding and its volume correction.
    ///
    /// Off by default: the reference network does not include these
    /// reactions.
    pub include_central_antibody_binding: bool,
    /// Output destination
    pub output: OutputConfig,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            include_central_antibody_binding: false,
            output: OutputConfig::default(),
        }
    }
}

impl BuilderConfig {
    /// Load from the default location or return defaults
    pub fn load_or_default() -> Self {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load from JSON file or return defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded builder configuration from {:?}", path.as_ref());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse builder configuration: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Builder configuration file not found, using defaults");
                Self::default()
            }
        }
    }
}
