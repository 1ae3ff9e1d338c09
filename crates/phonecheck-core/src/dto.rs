use crate::domain::{LabelPreset, ValidationRecord};
use serde::{Deserialize, Serialize};

/// A validation record as reported to users, with the line type rendered
/// through the active label set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDto {
    pub input: String,
    pub valid: bool,
    pub formatted_number: String,
    pub carrier: String,
    pub location: String,
    pub timezones: Vec<String>,
    pub line_type: String,
    pub is_mobile: bool,
    pub confidence: f64,
}

impl RecordDto {
    pub fn from_record(input: &str, record: &ValidationRecord, labels: LabelPreset) -> Self {
        Self {
            input: input.to_string(),
            valid: record.valid,
            formatted_number: record.formatted_number.clone(),
            carrier: record.carrier.clone(),
            location: record.location.clone(),
            timezones: record.timezones.clone(),
            line_type: labels.label(record.line_type).to_string(),
            is_mobile: record.is_mobile,
            confidence: record.confidence,
        }
    }
}
