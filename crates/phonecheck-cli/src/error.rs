use anyhow::Error;
use phonecheck_config::ConfigError;
use phonecheck_core::CoreError;
use phonecheck_lookup::LookupError;
use phonecheck_table::TableError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            });
        }
        if let Some(table_err) = cause.downcast_ref::<TableError>() {
            return ExitCode::from(table_exit_code(table_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(_lookup_err) = cause.downcast_ref::<LookupError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn table_exit_code(err: &TableError) -> u8 {
    if err.is_not_found() {
        return EXIT_NOT_FOUND;
    }
    match err {
        TableError::Spreadsheet { .. }
        | TableError::EmptyWorkbook(_)
        | TableError::MissingHeader
        | TableError::RowLength { .. }
        | TableError::Csv(_) => EXIT_INVALID_INPUT,
        _ => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidCountryCode(_)
        | ConfigError::InvalidAreaCode(_)
        | ConfigError::InvalidMobileAreaCode(_)
        | ConfigError::InvalidHomeRegion(_)
        | ConfigError::InvalidDelimiter(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
