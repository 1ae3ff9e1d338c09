use crate::directory::{DirectoryError, NumberDirectory};
use crate::domain::{NumberKind, ParsedNumber};
use std::collections::HashMap;

struct Entry {
    region: &'static str,
    valid: bool,
    carrier: Option<&'static str>,
    location: Option<&'static str>,
    zone: &'static str,
}

/// In-memory directory keyed by normalized `+1` numbers.
pub(crate) struct FakeDirectory {
    entries: HashMap<&'static str, Entry>,
}

impl FakeDirectory {
    pub(crate) fn sample() -> Self {
        let mut entries = HashMap::new();
        entries.insert(
            "+14155552671",
            Entry {
                region: "US",
                valid: true,
                carrier: Some("Pacific Mobile"),
                location: Some("San Francisco, CA"),
                zone: "America/Los_Angeles",
            },
        );
        for number in ["+12125550123", "+19175550123"] {
            entries.insert(
                number,
                Entry {
                    region: "US",
                    valid: true,
                    carrier: None,
                    location: Some(""),
                    zone: "America/New_York",
                },
            );
        }
        entries.insert(
            "+15550000000",
            Entry {
                region: "US",
                valid: false,
                carrier: None,
                location: None,
                zone: "Etc/Unknown",
            },
        );
        Self { entries }
    }
}

impl NumberDirectory for FakeDirectory {
    fn parse(&self, input: &str) -> Result<ParsedNumber, DirectoryError> {
        if input == "+16666666666" {
            panic!("metadata corrupted");
        }
        let entry = self.entries.get(input).ok_or_else(|| DirectoryError::Parse {
            input: input.to_string(),
            reason: "not a number".to_string(),
        })?;
        let national = &input[2..];
        Ok(ParsedNumber {
            country_code: 1,
            national_number: national.to_string(),
            region: Some(entry.region.to_string()),
            kind: NumberKind::FixedLineOrMobile,
            valid: entry.valid,
            e164: input.to_string(),
            international: format!("+1 {}-{}-{}", &national[..3], &national[3..6], &national[6..]),
        })
    }

    fn carrier_name(&self, number: &ParsedNumber) -> Option<String> {
        self.entries
            .get(number.e164.as_str())
            .and_then(|entry| entry.carrier)
            .map(str::to_string)
    }

    fn location(&self, number: &ParsedNumber) -> Option<String> {
        self.entries
            .get(number.e164.as_str())
            .and_then(|entry| entry.location)
            .map(str::to_string)
    }

    fn time_zones(&self, number: &ParsedNumber) -> Vec<String> {
        self.entries
            .get(number.e164.as_str())
            .map(|entry| vec![entry.zone.to_string()])
            .unwrap_or_default()
    }
}
