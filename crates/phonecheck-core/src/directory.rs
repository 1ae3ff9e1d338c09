use crate::domain::ParsedNumber;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
    #[error("phone library failure: {0}")]
    Internal(String),
}

/// Access to the phone-number library: parsing, validity, number type and
/// the carrier, geocoder and timezone lookups.
///
/// Implementations hold only read-only reference data, so one directory can
/// serve any number of rows.
pub trait NumberDirectory {
    fn parse(&self, input: &str) -> Result<ParsedNumber, DirectoryError>;

    fn carrier_name(&self, number: &ParsedNumber) -> Option<String>;

    fn location(&self, number: &ParsedNumber) -> Option<String>;

    fn time_zones(&self, number: &ParsedNumber) -> Vec<String>;
}

impl<T: NumberDirectory + ?Sized> NumberDirectory for &T {
    fn parse(&self, input: &str) -> Result<ParsedNumber, DirectoryError> {
        (**self).parse(input)
    }

    fn carrier_name(&self, number: &ParsedNumber) -> Option<String> {
        (**self).carrier_name(number)
    }

    fn location(&self, number: &ParsedNumber) -> Option<String> {
        (**self).location(number)
    }

    fn time_zones(&self, number: &ParsedNumber) -> Vec<String> {
        (**self).time_zones(number)
    }
}
