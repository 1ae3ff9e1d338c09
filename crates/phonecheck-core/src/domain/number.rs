use serde::{Deserialize, Serialize};

/// Number type reported by the phone-number library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    Mobile,
    FixedLine,
    FixedLineOrMobile,
    Voip,
    TollFree,
    Unknown,
    /// Premium rate, shared cost, pager and the other rarely seen types.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    pub country_code: u16,
    /// National significant number, digits only.
    pub national_number: String,
    /// Two-letter region code, when the library could attribute one.
    pub region: Option<String>,
    pub kind: NumberKind,
    pub valid: bool,
    pub e164: String,
    pub international: String,
}

impl ParsedNumber {
    /// First three digits of the national significant number.
    pub fn area_code(&self) -> Option<&str> {
        let candidate = self.national_number.get(..3)?;
        if candidate.bytes().all(|b| b.is_ascii_digit()) {
            Some(candidate)
        } else {
            None
        }
    }

    pub fn is_valid_for_region(&self, region: &str) -> bool {
        self.valid
            && self
                .region
                .as_deref()
                .is_some_and(|own| own.eq_ignore_ascii_case(region))
    }

    /// E.164 rendering without the leading `+`.
    pub fn e164_digits(&self) -> &str {
        self.e164.trim_start_matches('+')
    }
}

#[cfg(test)]
mod tests {
    use super::{NumberKind, ParsedNumber};

    fn number(national: &str, region: Option<&str>, valid: bool) -> ParsedNumber {
        ParsedNumber {
            country_code: 1,
            national_number: national.to_string(),
            region: region.map(str::to_string),
            kind: NumberKind::FixedLineOrMobile,
            valid,
            e164: format!("+1{national}"),
            international: format!("+1 {national}"),
        }
    }

    #[test]
    fn area_code_takes_first_three_digits() {
        assert_eq!(number("9175550123", None, true).area_code(), Some("917"));
        assert_eq!(number("91", None, true).area_code(), None);
    }

    #[test]
    fn region_check_requires_validity() {
        assert!(number("2125550123", Some("US"), true).is_valid_for_region("us"));
        assert!(!number("2125550123", Some("US"), false).is_valid_for_region("US"));
        assert!(!number("4165550123", Some("CA"), true).is_valid_for_region("US"));
        assert!(!number("4165550123", None, true).is_valid_for_region("US"));
    }

    #[test]
    fn e164_digits_strip_plus() {
        assert_eq!(number("2125550123", None, true).e164_digits(), "12125550123");
    }
}
