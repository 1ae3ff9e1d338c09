/// One cell of the phone column, before any normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    Missing,
    Text(String),
}

impl RawInput {
    /// Blank cells and spreadsheet `NaN` markers become `Missing`. Numeric
    /// cells exported as floats (`4155552671.0`) lose their zero fraction.
    pub fn from_cell(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
            return Self::Missing;
        }
        Self::Text(strip_zero_fraction(trimmed).to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Missing => None,
            Self::Text(value) => Some(value),
        }
    }

    pub fn display(&self) -> &str {
        self.as_text().unwrap_or("")
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        Self::from_cell(value)
    }
}

/// Shortest whole part that can only be a phone number exported as a float.
const MIN_FLOAT_DIGITS: usize = 8;

fn strip_zero_fraction(value: &str) -> &str {
    match value.split_once('.') {
        Some((whole, "0"))
            if whole.len() >= MIN_FLOAT_DIGITS && whole.bytes().all(|b| b.is_ascii_digit()) =>
        {
            whole
        }
        _ => value,
    }
}
