//! Error types
//!
//! Layout passes never fail; errors only surface when building a layout
//! from bad weights or when loading configuration.

use thiserror::Error;

/// Invalid weighted grid construction input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// No weights were given, so there is no unit per line
    #[error("weight list is empty")]
    EmptyWeights,

    /// Weights must be positive
    #[error("weight at index {index} is zero")]
    ZeroWeight { index: usize },

    /// The weights do not fit in one line count
    #[error("total weight overflows")]
    WeightOverflow,
}

/// Hex color parsing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid color format: {0}")]
    InvalidFormat(String),
    #[error("Invalid hex digit: {0}")]
    InvalidDigit(char),
}

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid color for '{name}': {source}")]
    Color {
        name: String,
        #[source]
        source: ColorParseError,
    },

    #[error("Unknown color token: {0}")]
    UnknownColorToken(String),

    #[error("Unknown grid arrangement: {0}")]
    UnknownArrangement(String),

    #[error("Grid '{name}': {source}")]
    Layout {
        name: String,
        #[source]
        source: LayoutError,
    },

    #[error("Adaptive grid '{0}' requires a device")]
    MissingDevice(String),
}
