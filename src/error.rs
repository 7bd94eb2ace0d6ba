use std::io;

/// All error types for the house-lights pipeline.
#[derive(thiserror::Error, Debug)]
pub enum HouseLightsError {
    #[error("Malformed house file {house}{}: {reason}", line_suffix(.line))]
    MalformedHouseFile {
        house: String,
        line: Option<usize>,
        reason: String,
    },
    #[error("Degenerate bounds for house {house}: {reason}")]
    DegenerateBounds { house: String, reason: String },
    #[error("Input error: {0}")]
    Input(String),
    #[error("Output error: {0}")]
    Output(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl HouseLightsError {
    pub fn malformed(house: &str, line: Option<usize>, reason: impl Into<String>) -> Self {
        HouseLightsError::MalformedHouseFile {
            house: house.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub fn degenerate(house: &str, reason: impl Into<String>) -> Self {
        HouseLightsError::DegenerateBounds {
            house: house.to_string(),
            reason: reason.into(),
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HouseLightsError>;
