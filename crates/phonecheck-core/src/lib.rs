pub mod batch;
pub mod directory;
pub mod domain;
pub mod dto;
pub mod error;
pub mod pipeline;
pub mod rules;
pub mod summary;

pub use batch::{BatchOutcome, Progress};
pub use directory::{DirectoryError, NumberDirectory};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use pipeline::{LookupField, PhoneClassifier, PipelineOptions, ValidateError};
pub use rules::*;
pub use summary::{BatchSummary, LineTypeCount};

#[cfg(test)]
mod testing;
