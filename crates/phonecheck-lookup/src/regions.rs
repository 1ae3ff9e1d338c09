/// Fallback geography used when no prefix table covers a number: English
/// region name and the time zones spanned by the region.
struct Region {
    code: &'static str,
    name: &'static str,
    zones: &'static [&'static str],
}

pub const UNKNOWN_ZONE: &str = "Etc/Unknown";

const REGIONS: &[Region] = &[
    Region {
        code: "AR",
        name: "Argentina",
        zones: &["America/Buenos_Aires"],
    },
    Region {
        code: "AT",
        name: "Austria",
        zones: &["Europe/Vienna"],
    },
    Region {
        code: "AU",
        name: "Australia",
        zones: &[
            "Australia/Adelaide",
            "Australia/Brisbane",
            "Australia/Darwin",
            "Australia/Perth",
            "Australia/Sydney",
        ],
    },
    Region {
        code: "BE",
        name: "Belgium",
        zones: &["Europe/Brussels"],
    },
    Region {
        code: "BR",
        name: "Brazil",
        zones: &["America/Manaus", "America/Recife", "America/Sao_Paulo"],
    },
    Region {
        code: "CA",
        name: "Canada",
        zones: &[
            "America/Edmonton",
            "America/Halifax",
            "America/St_Johns",
            "America/Toronto",
            "America/Vancouver",
            "America/Winnipeg",
        ],
    },
    Region {
        code: "CH",
        name: "Switzerland",
        zones: &["Europe/Zurich"],
    },
    Region {
        code: "CN",
        name: "China",
        zones: &["Asia/Shanghai"],
    },
    Region {
        code: "CO",
        name: "Colombia",
        zones: &["America/Bogota"],
    },
    Region {
        code: "DE",
        name: "Germany",
        zones: &["Europe/Berlin"],
    },
    Region {
        code: "DK",
        name: "Denmark",
        zones: &["Europe/Copenhagen"],
    },
    Region {
        code: "ES",
        name: "Spain",
        zones: &["Atlantic/Canary", "Europe/Madrid"],
    },
    Region {
        code: "FI",
        name: "Finland",
        zones: &["Europe/Helsinki"],
    },
    Region {
        code: "FR",
        name: "France",
        zones: &["Europe/Paris"],
    },
    Region {
        code: "GB",
        name: "United Kingdom",
        zones: &["Europe/London"],
    },
    Region {
        code: "GR",
        name: "Greece",
        zones: &["Europe/Athens"],
    },
    Region {
        code: "HK",
        name: "Hong Kong",
        zones: &["Asia/Hong_Kong"],
    },
    Region {
        code: "IE",
        name: "Ireland",
        zones: &["Europe/Dublin"],
    },
    Region {
        code: "IL",
        name: "Israel",
        zones: &["Asia/Jerusalem"],
    },
    Region {
        code: "IN",
        name: "India",
        zones: &["Asia/Calcutta"],
    },
    Region {
        code: "IT",
        name: "Italy",
        zones: &["Europe/Rome"],
    },
    Region {
        code: "JP",
        name: "Japan",
        zones: &["Asia/Tokyo"],
    },
    Region {
        code: "KR",
        name: "South Korea",
        zones: &["Asia/Seoul"],
    },
    Region {
        code: "MX",
        name: "Mexico",
        zones: &[
            "America/Cancun",
            "America/Mazatlan",
            "America/Mexico_City",
            "America/Tijuana",
        ],
    },
    Region {
        code: "NL",
        name: "Netherlands",
        zones: &["Europe/Amsterdam"],
    },
    Region {
        code: "NO",
        name: "Norway",
        zones: &["Europe/Oslo"],
    },
    Region {
        code: "NZ",
        name: "New Zealand",
        zones: &["Pacific/Auckland", "Pacific/Chatham"],
    },
    Region {
        code: "PH",
        name: "Philippines",
        zones: &["Asia/Manila"],
    },
    Region {
        code: "PL",
        name: "Poland",
        zones: &["Europe/Warsaw"],
    },
    Region {
        code: "PR",
        name: "Puerto Rico",
        zones: &["America/Puerto_Rico"],
    },
    Region {
        code: "PT",
        name: "Portugal",
        zones: &["Atlantic/Azores", "Europe/Lisbon"],
    },
    Region {
        code: "SE",
        name: "Sweden",
        zones: &["Europe/Stockholm"],
    },
    Region {
        code: "SG",
        name: "Singapore",
        zones: &["Asia/Singapore"],
    },
    Region {
        code: "TR",
        name: "Turkey",
        zones: &["Europe/Istanbul"],
    },
    Region {
        code: "UA",
        name: "Ukraine",
        zones: &["Europe/Kiev"],
    },
    Region {
        code: "US",
        name: "United States",
        zones: &[
            "America/Adak",
            "America/Anchorage",
            "America/Chicago",
            "America/Denver",
            "America/Los_Angeles",
            "America/New_York",
            "America/Phoenix",
            "Pacific/Honolulu",
        ],
    },
    Region {
        code: "ZA",
        name: "South Africa",
        zones: &["Africa/Johannesburg"],
    },
];

fn find(code: &str) -> Option<&'static Region> {
    REGIONS
        .iter()
        .find(|region| region.code.eq_ignore_ascii_case(code))
}

pub fn region_name(code: &str) -> Option<&'static str> {
    find(code).map(|region| region.name)
}

pub fn region_time_zones(code: &str) -> Option<&'static [&'static str]> {
    find(code).map(|region| region.zones)
}

#[cfg(test)]
mod tests {
    use super::{region_name, region_time_zones, REGIONS};

    #[test]
    fn regions_are_sorted_and_unique() {
        for pair in REGIONS.windows(2) {
            assert!(pair[0].code < pair[1].code, "{} >= {}", pair[0].code, pair[1].code);
        }
    }

    #[test]
    fn every_region_has_zones() {
        for region in REGIONS {
            assert!(!region.zones.is_empty(), "{} has no zones", region.code);
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(region_name("gb"), Some("United Kingdom"));
        assert_eq!(region_time_zones("JP"), Some(&["Asia/Tokyo"][..]));
        assert_eq!(region_name("XX"), None);
    }
}
