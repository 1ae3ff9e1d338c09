use crate::domain::{LineType, RawInput};

/// Validation result for a single input cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRecord {
    pub valid: bool,
    pub formatted_number: String,
    pub carrier: String,
    pub location: String,
    pub timezones: Vec<String>,
    pub line_type: LineType,
    pub is_mobile: bool,
    pub confidence: f64,
}

impl ValidationRecord {
    /// The record every failed row collapses into. The raw text is echoed as
    /// the formatted number so the row stays recognizable in the output.
    pub fn invalid(raw: &RawInput) -> Self {
        Self {
            valid: false,
            formatted_number: raw.display().to_string(),
            carrier: String::new(),
            location: String::new(),
            timezones: Vec::new(),
            line_type: LineType::Invalid,
            is_mobile: false,
            confidence: 0.0,
        }
    }

    pub fn timezone_column(&self) -> String {
        self.timezones.join(",")
    }
}
