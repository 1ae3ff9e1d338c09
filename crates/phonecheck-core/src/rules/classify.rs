use crate::domain::{LineType, NumberKind, ParsedNumber};
use crate::rules::area_codes::AreaCodeAllowList;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassifyRules {
    /// When set, fixed-line-or-mobile numbers are resolved through
    /// `mobile_area_codes` instead of being reported as ambiguous.
    pub disambiguate: bool,
    pub mobile_area_codes: AreaCodeAllowList,
}

impl ClassifyRules {
    pub fn with_disambiguation(list: AreaCodeAllowList) -> Self {
        Self {
            disambiguate: true,
            mobile_area_codes: list,
        }
    }

    /// The allow-list in effect, if disambiguation is on.
    pub fn disambiguation(&self) -> Option<&AreaCodeAllowList> {
        self.disambiguate.then_some(&self.mobile_area_codes)
    }
}

pub fn classify_line_type(number: &ParsedNumber, rules: &ClassifyRules) -> LineType {
    if number.national_number.is_empty()
        || !number.national_number.bytes().all(|b| b.is_ascii_digit())
    {
        return LineType::Invalid;
    }

    match number.kind {
        NumberKind::Mobile => LineType::Mobile,
        NumberKind::FixedLine => LineType::Landline,
        NumberKind::FixedLineOrMobile => match rules.disambiguation() {
            Some(list) => list.resolve(number.area_code()),
            None => LineType::LandlineOrMobile,
        },
        NumberKind::Voip => LineType::Voip,
        NumberKind::TollFree => LineType::TollFree,
        NumberKind::Unknown => LineType::Unknown,
        NumberKind::Other => LineType::Other,
    }
}
