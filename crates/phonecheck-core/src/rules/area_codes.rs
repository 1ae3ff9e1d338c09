use crate::domain::LineType;
use crate::error::CoreError;
use std::collections::BTreeSet;

/// Area codes historically assigned to mobile carriers in the New York and
/// New Jersey metro area. Incomplete: unlisted mobile codes resolve to
/// landline.
pub const MOBILE_AREA_CODES: [&str; 16] = [
    "917", "347", "201", "551", "973", "862", "646", "332", "929", "718", "516", "631", "934",
    "914", "845", "838",
];

/// Tie-break for numbers the library reports as fixed-line-or-mobile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCodeAllowList {
    codes: BTreeSet<String>,
}

impl AreaCodeAllowList {
    pub fn new<I, S>(codes: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for code in codes {
            let code = code.as_ref().trim();
            if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CoreError::InvalidAreaCode(code.to_string()));
            }
            set.insert(code.to_string());
        }
        Ok(Self { codes: set })
    }

    pub fn contains(&self, area_code: &str) -> bool {
        self.codes.contains(area_code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn resolve(&self, area_code: Option<&str>) -> LineType {
        match area_code {
            Some(code) if self.contains(code) => LineType::Mobile,
            _ => LineType::Landline,
        }
    }
}

impl Default for AreaCodeAllowList {
    fn default() -> Self {
        Self {
            codes: MOBILE_AREA_CODES.iter().map(|code| code.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AreaCodeAllowList, MOBILE_AREA_CODES};
    use crate::domain::LineType;

    #[test]
    fn default_list_holds_every_listed_code() {
        let list = AreaCodeAllowList::default();
        assert_eq!(list.len(), MOBILE_AREA_CODES.len());
        for code in MOBILE_AREA_CODES {
            assert!(list.contains(code), "missing {code}");
        }
    }

    #[test]
    fn resolve_defaults_to_landline() {
        let list = AreaCodeAllowList::default();
        assert_eq!(list.resolve(Some("917")), LineType::Mobile);
        assert_eq!(list.resolve(Some("212")), LineType::Landline);
        assert_eq!(list.resolve(None), LineType::Landline);
    }

    #[test]
    fn new_rejects_malformed_codes() {
        assert!(AreaCodeAllowList::new(["917", "12"]).is_err());
        assert!(AreaCodeAllowList::new(["9a7"]).is_err());
        let list = AreaCodeAllowList::new([" 415 ", "415"]).expect("list");
        assert_eq!(list.len(), 1);
    }
}
