use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    Mobile,
    Landline,
    LandlineOrMobile,
    Voip,
    TollFree,
    Unknown,
    Other,
    Invalid,
}

impl LineType {
    pub fn is_mobile(self) -> bool {
        matches!(self, LineType::Mobile)
    }
}

/// Output vocabulary for line types.
///
/// `legacy` keeps the first generation of labels (`Cell`, `International`,
/// `Invalid/Fake`), `standard` the later `Unknown`/`Other`/`Invalid` set and
/// `mobile` reports mobiles as `Mobile` for use with area-code
/// disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPreset {
    Legacy,
    #[default]
    Standard,
    Mobile,
}

impl LabelPreset {
    pub fn label(self, line_type: LineType) -> &'static str {
        match line_type {
            LineType::Mobile => match self {
                LabelPreset::Legacy | LabelPreset::Standard => "Cell",
                LabelPreset::Mobile => "Mobile",
            },
            LineType::Landline => "Landline",
            LineType::LandlineOrMobile => "Landline/Cell",
            LineType::Voip => "VOIP",
            LineType::TollFree => "Toll-Free",
            LineType::Unknown => match self {
                LabelPreset::Legacy => "International",
                LabelPreset::Standard | LabelPreset::Mobile => "Unknown",
            },
            LineType::Other => match self {
                LabelPreset::Legacy => "Invalid/Fake",
                LabelPreset::Standard | LabelPreset::Mobile => "Other",
            },
            LineType::Invalid => match self {
                LabelPreset::Legacy => "Invalid/Fake",
                LabelPreset::Standard | LabelPreset::Mobile => "Invalid",
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LabelPreset::Legacy => "legacy",
            LabelPreset::Standard => "standard",
            LabelPreset::Mobile => "mobile",
        }
    }
}

impl FromStr for LabelPreset {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(LabelPreset::Legacy),
            "standard" => Ok(LabelPreset::Standard),
            "mobile" => Ok(LabelPreset::Mobile),
            _ => Err(CoreError::UnknownLabelSet(raw.trim().to_string())),
        }
    }
}
