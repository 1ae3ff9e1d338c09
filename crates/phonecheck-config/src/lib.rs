use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonecheck_core::{
    AreaCodeAllowList, ConfidenceBonus, ConfidenceRules, CoreError, LabelPreset,
    NormalizeDefaults, PipelineOptions,
};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonecheck";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_DELIMITER: u8 = b',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub pipeline: PipelineOptions,
    pub lookup: LookupConfig,
    pub output: OutputConfig,
}

/// Optional prefix tables layered over the built-in region data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupConfig {
    pub carriers: Option<PathBuf>,
    pub locations: Option<PathBuf>,
    pub timezones: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub formatted_number: bool,
    pub is_mobile: bool,
    pub delimiter: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pipeline: PipelineOptions::default(),
            lookup: LookupConfig::default(),
            output: OutputConfig {
                formatted_number: true,
                is_mobile: false,
                delimiter: DEFAULT_DELIMITER,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid normalize.country_code value: {0}")]
    InvalidCountryCode(String),
    #[error("invalid normalize.area_code value: {0}")]
    InvalidAreaCode(String),
    #[error("invalid classify.mobile_area_codes entry: {0}")]
    InvalidMobileAreaCode(String),
    #[error("invalid confidence.home_region value: {0}")]
    InvalidHomeRegion(String),
    #[error("invalid output.delimiter value: {0:?}")]
    InvalidDelimiter(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    normalize: Option<NormalizeFile>,
    classify: Option<ClassifyFile>,
    confidence: Option<ConfidenceFile>,
    lookup: Option<LookupFile>,
    output: Option<OutputFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NormalizeFile {
    enabled: Option<bool>,
    country_code: Option<String>,
    area_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClassifyFile {
    labels: Option<LabelPreset>,
    disambiguate_area_codes: Option<bool>,
    mobile_area_codes: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfidenceFile {
    bonuses: Option<Vec<ConfidenceBonus>>,
    home_region: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LookupFile {
    carrier_fallback: Option<String>,
    location_fallback: Option<String>,
    carriers: Option<PathBuf>,
    locations: Option<PathBuf>,
    timezones: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    formatted_number: Option<bool>,
    is_mobile: Option<bool>,
    delimiter: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

/// Parses a single-byte CSV delimiter; `\t` and `tab` select a tab.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    match raw {
        "\\t" | "tab" | "\t" => return Ok(b'\t'),
        _ => {}
    }
    let bytes = raw.as_bytes();
    if bytes.len() != 1 || !bytes[0].is_ascii() || bytes[0] == b'"' || bytes[0] == b'\n' {
        return Err(ConfigError::InvalidDelimiter(raw.to_string()));
    }
    Ok(bytes[0])
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed, path.parent())?))
}

fn merge_config(parsed: ConfigFile, base_dir: Option<&Path>) -> Result<AppConfig> {
    let mut config = AppConfig::default();
    let pipeline = &mut config.pipeline;

    if let Some(normalize) = parsed.normalize {
        let defaults = NormalizeDefaults::default();
        let country_code = normalize
            .country_code
            .unwrap_or_else(|| defaults.country_code().to_string());
        let area_code = normalize
            .area_code
            .unwrap_or_else(|| defaults.area_code().to_string());
        let defaults =
            NormalizeDefaults::new(&country_code, &area_code).map_err(|err| match err {
                CoreError::InvalidCountryCode(value) => ConfigError::InvalidCountryCode(value),
                CoreError::InvalidAreaCode(value) => ConfigError::InvalidAreaCode(value),
                other => ConfigError::InvalidAreaCode(other.to_string()),
            })?;
        pipeline.normalize = if normalize.enabled.unwrap_or(true) {
            Some(defaults)
        } else {
            None
        };
    }

    if let Some(classify) = parsed.classify {
        if let Some(labels) = classify.labels {
            pipeline.labels = labels;
        }
        if let Some(codes) = classify.mobile_area_codes {
            pipeline.classify.mobile_area_codes =
                AreaCodeAllowList::new(&codes).map_err(|err| match err {
                    CoreError::InvalidAreaCode(code) => ConfigError::InvalidMobileAreaCode(code),
                    other => ConfigError::InvalidMobileAreaCode(other.to_string()),
                })?;
        }
        if let Some(disambiguate) = classify.disambiguate_area_codes {
            pipeline.classify.disambiguate = disambiguate;
        }
    }

    if let Some(confidence) = parsed.confidence {
        let defaults = ConfidenceRules::default();
        let bonuses = confidence
            .bonuses
            .unwrap_or_else(|| defaults.bonuses().to_vec());
        let region = confidence
            .home_region
            .unwrap_or_else(|| defaults.home_region().to_string());
        pipeline.confidence = ConfidenceRules::new(&bonuses, &region)
            .map_err(|_| ConfigError::InvalidHomeRegion(region.clone()))?;
    }

    if let Some(lookup) = parsed.lookup {
        if let Some(fallback) = lookup.carrier_fallback {
            pipeline.carrier_fallback = fallback;
        }
        if let Some(fallback) = lookup.location_fallback {
            pipeline.location_fallback = fallback;
        }
        config.lookup = LookupConfig {
            carriers: lookup.carriers.map(|path| relative_to(base_dir, path)),
            locations: lookup.locations.map(|path| relative_to(base_dir, path)),
            timezones: lookup.timezones.map(|path| relative_to(base_dir, path)),
        };
    }

    let disambiguating = config.pipeline.classify.disambiguate;
    config.output.is_mobile = disambiguating;
    if let Some(output) = parsed.output {
        if let Some(formatted_number) = output.formatted_number {
            config.output.formatted_number = formatted_number;
        }
        if let Some(is_mobile) = output.is_mobile {
            config.output.is_mobile = is_mobile;
        }
        if let Some(delimiter) = output.delimiter {
            config.output.delimiter = parse_delimiter(&delimiter)?;
        }
    }

    Ok(config)
}

fn relative_to(base_dir: Option<&Path>, path: PathBuf) -> PathBuf {
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}
