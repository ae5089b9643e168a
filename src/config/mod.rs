//! Configuration module for the reaction table builder.

mod parameters;

pub use parameters::{
    BuilderConfig, ExportFormat, OutputConfig, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH,
};
