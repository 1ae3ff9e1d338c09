use chrono::{SecondsFormat, Utc};
use std::path::Path;

pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn display_path(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
