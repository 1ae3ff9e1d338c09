use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid country calling code: {0}")]
    InvalidCountryCode(String),
    #[error("invalid area code: {0}")]
    InvalidAreaCode(String),
    #[error("invalid region code: {0}")]
    InvalidRegionCode(String),
    #[error("unknown label set: {0}")]
    UnknownLabelSet(String),
    #[error("unknown confidence bonus: {0}")]
    UnknownBonus(String),
}
