use crate::error::CoreError;

pub const DEFAULT_COUNTRY_CODE: &str = "1";
pub const DEFAULT_AREA_CODE: &str = "480";

/// Prefixes applied to bare national numbers before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeDefaults {
    country_code: String,
    area_code: String,
}

impl NormalizeDefaults {
    pub fn new(country_code: &str, area_code: &str) -> Result<Self, CoreError> {
        let country_code = country_code.trim().trim_start_matches('+');
        if country_code.is_empty()
            || country_code.len() > 3
            || !country_code.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(CoreError::InvalidCountryCode(country_code.to_string()));
        }

        let area_code = area_code.trim();
        if area_code.len() != 3 || !area_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CoreError::InvalidAreaCode(area_code.to_string()));
        }

        Ok(Self {
            country_code: country_code.to_string(),
            area_code: area_code.to_string(),
        })
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }
}

impl Default for NormalizeDefaults {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            area_code: DEFAULT_AREA_CODE.to_string(),
        }
    }
}

/// Reduces `value` to digits and adds the `+` marker the parser expects.
///
/// Ten digits are treated as a national number missing its country code and
/// seven digits as a local number missing both country and area code. Any
/// other length passes through unchanged, so `"notanumber"` becomes `"+"` and
/// is rejected later by the parser.
pub fn normalize_number(value: &str, defaults: &NormalizeDefaults) -> String {
    let digits: String = value.chars().filter(|ch| ch.is_ascii_digit()).collect();

    let mut out = String::with_capacity(digits.len() + 8);
    out.push('+');
    match digits.len() {
        10 => out.push_str(&defaults.country_code),
        7 => {
            out.push_str(&defaults.country_code);
            out.push_str(&defaults.area_code);
        }
        _ => {}
    }
    out.push_str(&digits);
    out
}
