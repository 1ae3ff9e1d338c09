use crate::nanp::area_code_zone;
use crate::regions::{region_name, region_time_zones, UNKNOWN_ZONE};
use crate::tables::PrefixTables;
use phonecheck_core::{DirectoryError, NumberDirectory, NumberKind, ParsedNumber};
use phonenumber::metadata::DATABASE;
use phonenumber::{Mode, PhoneNumber, Type};

const NANP_COUNTRY_CODE: u16 = 1;

/// [`NumberDirectory`] backed by the `phonenumber` crate's libphonenumber
/// metadata, with carrier, location and timezone answers taken from prefix
/// tables first and built-in region data second.
#[derive(Debug, Clone, Default)]
pub struct LibDirectory {
    tables: PrefixTables,
}

impl LibDirectory {
    pub fn new(tables: PrefixTables) -> Self {
        Self { tables }
    }
}

impl NumberDirectory for LibDirectory {
    fn parse(&self, input: &str) -> Result<ParsedNumber, DirectoryError> {
        let number = phonenumber::parse(None, input).map_err(|err| DirectoryError::Parse {
            input: input.to_string(),
            reason: err.to_string(),
        })?;
        Ok(describe(&number))
    }

    fn carrier_name(&self, number: &ParsedNumber) -> Option<String> {
        self.tables
            .carriers
            .longest_match(number.e164_digits())
            .cloned()
    }

    fn location(&self, number: &ParsedNumber) -> Option<String> {
        if let Some(place) = self.tables.locations.longest_match(number.e164_digits()) {
            return Some(place.clone());
        }
        number
            .region
            .as_deref()
            .and_then(region_name)
            .map(str::to_string)
    }

    fn time_zones(&self, number: &ParsedNumber) -> Vec<String> {
        if let Some(zones) = self.tables.time_zones.longest_match(number.e164_digits()) {
            return zones.clone();
        }
        if number.country_code == NANP_COUNTRY_CODE {
            if let Some(zone) = number.area_code().and_then(area_code_zone) {
                return vec![zone.to_string()];
            }
        }
        match number.region.as_deref().and_then(region_time_zones) {
            Some(zones) => zones.iter().map(|zone| zone.to_string()).collect(),
            None => vec![UNKNOWN_ZONE.to_string()],
        }
    }
}

fn describe(number: &PhoneNumber) -> ParsedNumber {
    let country = number.country();
    let country_code = country.code();
    let e164 = number.format().mode(Mode::E164).to_string();
    let international = number.format().mode(Mode::International).to_string();

    ParsedNumber {
        country_code,
        national_number: national_significant_number(&e164, country_code),
        region: country.id().map(|id| format!("{id:?}")),
        kind: number_kind(number.number_type(&DATABASE)),
        valid: number.is_valid(),
        e164,
        international,
    }
}

fn national_significant_number(e164: &str, country_code: u16) -> String {
    let digits = e164.trim_start_matches('+');
    let code = country_code.to_string();
    digits.strip_prefix(code.as_str()).unwrap_or(digits).to_string()
}

fn number_kind(kind: Type) -> NumberKind {
    match kind {
        Type::Mobile => NumberKind::Mobile,
        Type::FixedLine => NumberKind::FixedLine,
        Type::FixedLineOrMobile => NumberKind::FixedLineOrMobile,
        Type::Voip => NumberKind::Voip,
        Type::TollFree => NumberKind::TollFree,
        Type::Unknown => NumberKind::Unknown,
        _ => NumberKind::Other,
    }
}
