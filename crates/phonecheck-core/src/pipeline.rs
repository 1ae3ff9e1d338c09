use crate::directory::{DirectoryError, NumberDirectory};
use crate::domain::{normalize_number, LabelPreset, LineType, NormalizeDefaults, RawInput};
use crate::domain::{ParsedNumber, ValidationRecord};
use crate::rules::{
    classify_line_type, score_confidence, ClassifyRules, ConfidenceRules, ConfidenceSignals,
};
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_CARRIER_FALLBACK: &str = "Unknown";
pub const DEFAULT_LOCATION_FALLBACK: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// `None` hands the cell text to the parser untouched.
    pub normalize: Option<NormalizeDefaults>,
    pub classify: ClassifyRules,
    pub confidence: ConfidenceRules,
    pub labels: LabelPreset,
    pub carrier_fallback: String,
    pub location_fallback: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            normalize: Some(NormalizeDefaults::default()),
            classify: ClassifyRules::default(),
            confidence: ConfidenceRules::default(),
            labels: LabelPreset::default(),
            carrier_fallback: DEFAULT_CARRIER_FALLBACK.to_string(),
            location_fallback: DEFAULT_LOCATION_FALLBACK.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupField {
    Carrier,
    Location,
}

impl fmt::Display for LookupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupField::Carrier => f.write_str("carrier"),
            LookupField::Location => f.write_str("location"),
        }
    }
}

/// Why a row did not produce a valid record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidateError {
    #[error("no phone number in cell")]
    Missing,
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error("{input} failed the validity check")]
    Implausible { input: String },
    #[error("{0} lookup returned no data")]
    LookupEmpty(LookupField),
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl From<DirectoryError> for ValidateError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Parse { input, reason } => ValidateError::Parse { input, reason },
            DirectoryError::Internal(message) => ValidateError::Unexpected(message),
        }
    }
}

/// Turns raw cells into validation records using a [`NumberDirectory`].
#[derive(Debug, Clone)]
pub struct PhoneClassifier<D> {
    directory: D,
    options: PipelineOptions,
}

impl<D: NumberDirectory> PhoneClassifier<D> {
    pub fn new(directory: D, options: PipelineOptions) -> Self {
        Self { directory, options }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn label(&self, line_type: LineType) -> &'static str {
        self.options.labels.label(line_type)
    }

    /// The string handed to the parser for `text`.
    pub fn prepare(&self, text: &str) -> String {
        match &self.options.normalize {
            Some(defaults) => normalize_number(text, defaults),
            None => text.trim().to_string(),
        }
    }

    /// Total form of [`Self::try_validate`]: every failure becomes the
    /// canonical invalid record.
    pub fn validate(&self, raw: &RawInput) -> ValidationRecord {
        match self.try_validate(raw) {
            Ok(record) => record,
            Err(err) => {
                debug!(input = raw.display(), error = %err, "row marked invalid");
                ValidationRecord::invalid(raw)
            }
        }
    }

    pub fn try_validate(&self, raw: &RawInput) -> Result<ValidationRecord, ValidateError> {
        let text = raw.as_text().ok_or(ValidateError::Missing)?;
        let prepared = self.prepare(text);
        let parsed = guarded(|| self.directory.parse(&prepared))??;
        if !parsed.valid {
            return Err(ValidateError::Implausible { input: prepared });
        }

        let carrier = non_empty(guarded(|| self.directory.carrier_name(&parsed))?);
        let location = non_empty(guarded(|| self.directory.location(&parsed))?);
        let timezones = guarded(|| self.directory.time_zones(&parsed))?;

        let line_type = classify_line_type(&parsed, &self.options.classify);
        let signals = ConfidenceSignals {
            carrier: carrier.as_deref(),
            location: location.as_deref(),
        };
        let confidence = score_confidence(&parsed, &signals, &self.options.confidence);

        Ok(ValidationRecord {
            valid: true,
            formatted_number: formatted(&parsed),
            carrier: self.or_fallback(LookupField::Carrier, carrier),
            location: self.or_fallback(LookupField::Location, location),
            timezones,
            line_type,
            is_mobile: line_type.is_mobile(),
            confidence,
        })
    }

    fn or_fallback(&self, field: LookupField, value: Option<String>) -> String {
        match value.ok_or(ValidateError::LookupEmpty(field)) {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, "using fallback label");
                match field {
                    LookupField::Carrier => self.options.carrier_fallback.clone(),
                    LookupField::Location => self.options.location_fallback.clone(),
                }
            }
        }
    }
}

fn formatted(parsed: &ParsedNumber) -> String {
    if parsed.international.is_empty() {
        parsed.e164.clone()
    } else {
        parsed.international.clone()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Runs a library call, converting a panic into [`ValidateError::Unexpected`].
fn guarded<T>(call: impl FnOnce() -> T) -> Result<T, ValidateError> {
    panic::catch_unwind(AssertUnwindSafe(call)).map_err(|payload| {
        let message = panic_message(payload.as_ref());
        warn!(%message, "phone library panicked");
        ValidateError::Unexpected(message)
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
