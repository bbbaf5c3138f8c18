//! Configuration file parsing and validation

pub mod stemgen_toml;

pub use stemgen_toml::{
    CONFIG_FILE_NAME, ColorOption, Config, ConfigError, OutputConfig, OutputFormat, ScanConfig,
    StemConfig,
};
