use crate::domain::ParsedNumber;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const BASE_TENTHS: usize = 8;
const MAX_TENTHS: usize = 10;
pub const MIN_E164_LEN: usize = 11;
pub const DEFAULT_HOME_REGION: &str = "US";

/// Conditions that each add a tenth to the base score of a valid number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceBonus {
    /// The carrier lookup returned a name.
    Carrier,
    /// The geocoder returned a description.
    Location,
    /// The E.164 rendering has at least eleven characters.
    E164Length,
    /// The number belongs to the home region.
    HomeRegion,
}

impl FromStr for ConfidenceBonus {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "carrier" => Ok(ConfidenceBonus::Carrier),
            "location" => Ok(ConfidenceBonus::Location),
            "e164-length" => Ok(ConfidenceBonus::E164Length),
            "home-region" => Ok(ConfidenceBonus::HomeRegion),
            _ => Err(CoreError::UnknownBonus(raw.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfidenceRules {
    bonuses: Vec<ConfidenceBonus>,
    home_region: String,
}

impl ConfidenceRules {
    pub fn new(bonuses: &[ConfidenceBonus], home_region: &str) -> Result<Self, CoreError> {
        let region = home_region.trim();
        if region.len() != 2 || !region.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidRegionCode(region.to_string()));
        }

        let mut unique = Vec::with_capacity(bonuses.len());
        for bonus in bonuses {
            if !unique.contains(bonus) {
                unique.push(*bonus);
            }
        }

        Ok(Self {
            bonuses: unique,
            home_region: region.to_ascii_uppercase(),
        })
    }

    pub fn bonuses(&self) -> &[ConfidenceBonus] {
        &self.bonuses
    }

    pub fn home_region(&self) -> &str {
        &self.home_region
    }
}

/// Bonuses that need no lookup data, so every valid number can earn them.
pub const DEFAULT_BONUSES: [ConfidenceBonus; 2] =
    [ConfidenceBonus::E164Length, ConfidenceBonus::HomeRegion];

impl Default for ConfidenceRules {
    fn default() -> Self {
        Self {
            bonuses: DEFAULT_BONUSES.to_vec(),
            home_region: DEFAULT_HOME_REGION.to_string(),
        }
    }
}

/// Raw lookup results, before fallback labels are substituted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfidenceSignals<'a> {
    pub carrier: Option<&'a str>,
    pub location: Option<&'a str>,
}

/// Heuristic certainty in `[0.0, 1.0]`; not a calibrated probability.
///
/// Invalid numbers always score `0.0`. Valid numbers start at `0.8` and gain
/// `0.1` per satisfied bonus, capped at `1.0`. Scores are counted in whole
/// tenths so repeated additions do not drift.
pub fn score_confidence(
    number: &ParsedNumber,
    signals: &ConfidenceSignals<'_>,
    rules: &ConfidenceRules,
) -> f64 {
    if !number.valid {
        return 0.0;
    }

    let satisfied = rules
        .bonuses
        .iter()
        .filter(|bonus| bonus_satisfied(**bonus, number, signals, rules))
        .count();
    let tenths = (BASE_TENTHS + satisfied).min(MAX_TENTHS);
    tenths as f64 / 10.0
}

fn bonus_satisfied(
    bonus: ConfidenceBonus,
    number: &ParsedNumber,
    signals: &ConfidenceSignals<'_>,
    rules: &ConfidenceRules,
) -> bool {
    match bonus {
        ConfidenceBonus::Carrier => signals.carrier.is_some_and(|name| !name.trim().is_empty()),
        ConfidenceBonus::Location => signals
            .location
            .is_some_and(|place| !place.trim().is_empty()),
        ConfidenceBonus::E164Length => number.e164.len() >= MIN_E164_LEN,
        ConfidenceBonus::HomeRegion => number.is_valid_for_region(&rules.home_region),
    }
}

#[cfg(test)]
mod tests {
    use super::{score_confidence, ConfidenceBonus, ConfidenceRules, ConfidenceSignals};
    use crate::domain::{NumberKind, ParsedNumber};

    fn lookup_rules() -> ConfidenceRules {
        ConfidenceRules::new(&[ConfidenceBonus::Carrier, ConfidenceBonus::Location], "US")
            .expect("rules")
    }

    fn us_number(valid: bool) -> ParsedNumber {
        ParsedNumber {
            country_code: 1,
            national_number: "4155552671".to_string(),
            region: Some("US".to_string()),
            kind: NumberKind::FixedLineOrMobile,
            valid,
            e164: "+14155552671".to_string(),
            international: "+1 415-555-2671".to_string(),
        }
    }

    #[test]
    fn invalid_numbers_score_zero() {
        let signals = ConfidenceSignals {
            carrier: Some("Carrier"),
            location: Some("Somewhere"),
        };
        let score = score_confidence(&us_number(false), &signals, &ConfidenceRules::default());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn valid_numbers_start_at_base() {
        let score = score_confidence(
            &us_number(true),
            &ConfidenceSignals::default(),
            &lookup_rules(),
        );
        assert_eq!(score, 0.8);
    }

    #[test]
    fn default_rules_need_no_lookup_data() {
        let rules = ConfidenceRules::default();
        let signals = ConfidenceSignals::default();
        assert_eq!(score_confidence(&us_number(true), &signals, &rules), 1.0);

        let mut foreign = us_number(true);
        foreign.region = Some("GB".to_string());
        foreign.e164 = "+442079460958".to_string();
        assert_eq!(score_confidence(&foreign, &signals, &rules), 0.9);
    }

    #[test]
    fn each_lookup_bonus_adds_a_tenth() {
        let rules = lookup_rules();
        let carrier_only = ConfidenceSignals {
            carrier: Some("Carrier"),
            location: Some("  "),
        };
        assert_eq!(score_confidence(&us_number(true), &carrier_only, &rules), 0.9);

        let both = ConfidenceSignals {
            carrier: Some("Carrier"),
            location: Some("San Francisco, CA"),
        };
        assert_eq!(score_confidence(&us_number(true), &both, &rules), 1.0);
    }

    #[test]
    fn format_and_region_bonuses() {
        let rules =
            ConfidenceRules::new(&[ConfidenceBonus::E164Length, ConfidenceBonus::HomeRegion], "us")
                .expect("rules");
        let signals = ConfidenceSignals::default();
        assert_eq!(score_confidence(&us_number(true), &signals, &rules), 1.0);

        let mut foreign = us_number(true);
        foreign.region = Some("CA".to_string());
        assert_eq!(score_confidence(&foreign, &signals, &rules), 0.9);

        foreign.e164 = "+1234".to_string();
        assert_eq!(score_confidence(&foreign, &signals, &rules), 0.8);
    }

    #[test]
    fn score_is_capped() {
        let rules = ConfidenceRules::new(
            &[
                ConfidenceBonus::Carrier,
                ConfidenceBonus::Location,
                ConfidenceBonus::E164Length,
                ConfidenceBonus::HomeRegion,
            ],
            "US",
        )
        .expect("rules");
        let signals = ConfidenceSignals {
            carrier: Some("Carrier"),
            location: Some("Somewhere"),
        };
        assert_eq!(score_confidence(&us_number(true), &signals, &rules), 1.0);
    }

    #[test]
    fn rules_dedupe_and_validate() {
        let rules = ConfidenceRules::new(
            &[ConfidenceBonus::Carrier, ConfidenceBonus::Carrier],
            "us",
        )
        .expect("rules");
        assert_eq!(rules.bonuses(), &[ConfidenceBonus::Carrier]);
        assert_eq!(rules.home_region(), "US");
        assert!(ConfidenceRules::new(&[], "USA").is_err());
    }

    #[test]
    fn bonus_names_parse() {
        assert_eq!(
            "e164-length".parse::<ConfidenceBonus>(),
            Ok(ConfidenceBonus::E164Length)
        );
        assert!("random".parse::<ConfidenceBonus>().is_err());
    }
}
