use crate::error::{LookupError, Result};
use crate::prefix::PrefixMap;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// Carrier, location and timezone data supplied as `prefix,value` CSV files.
/// Timezone values list several zones separated by `&`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTables {
    pub carriers: PrefixMap<String>,
    pub locations: PrefixMap<String>,
    pub time_zones: PrefixMap<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct TableLoad {
    pub tables: PrefixTables,
    pub warnings: Vec<String>,
}

impl PrefixTables {
    pub fn load(
        carriers: Option<&Path>,
        locations: Option<&Path>,
        time_zones: Option<&Path>,
    ) -> Result<TableLoad> {
        let mut load = TableLoad::default();

        if let Some(path) = carriers {
            for (prefix, value) in read_prefix_file(path, &mut load.warnings)? {
                load.tables.carriers.insert(&prefix, value);
            }
        }
        if let Some(path) = locations {
            for (prefix, value) in read_prefix_file(path, &mut load.warnings)? {
                load.tables.locations.insert(&prefix, value);
            }
        }
        if let Some(path) = time_zones {
            for (prefix, value) in read_prefix_file(path, &mut load.warnings)? {
                let zones = split_zones(&value);
                if zones.is_empty() {
                    load.warnings
                        .push(format!("{}: no zones for prefix {prefix}", path.display()));
                    continue;
                }
                load.tables.time_zones.insert(&prefix, zones);
            }
        }

        for warning in &load.warnings {
            warn!("{warning}");
        }
        debug!(
            carriers = load.tables.carriers.len(),
            locations = load.tables.locations.len(),
            time_zones = load.tables.time_zones.len(),
            "prefix tables loaded"
        );
        Ok(load)
    }
}

fn split_zones(value: &str) -> Vec<String> {
    value
        .split('&')
        .map(str::trim)
        .filter(|zone| !zone.is_empty())
        .map(str::to_string)
        .collect()
}

fn read_prefix_file(path: &Path, warnings: &mut Vec<String>) -> Result<Vec<(String, String)>> {
    let file = File::open(path).map_err(|source| LookupError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| LookupError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(index as u64 + 1);
        let prefix = record.get(0).unwrap_or("");
        let value = record.get(1).unwrap_or("");

        if index == 0 && prefix.eq_ignore_ascii_case("prefix") {
            continue;
        }
        let digits = prefix.trim_start_matches('+');
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            warnings.push(format!(
                "{}:{line}: skipping invalid prefix {prefix:?}",
                path.display()
            ));
            continue;
        }
        if value.is_empty() {
            warnings.push(format!(
                "{}:{line}: skipping prefix {prefix} without value",
                path.display()
            ));
            continue;
        }
        rows.push((digits.to_string(), value.to_string()));
    }
    Ok(rows)
}
