use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("failed to read prefix table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse prefix table {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T> = std::result::Result<T, LookupError>;
