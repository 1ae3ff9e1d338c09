use crate::error::{Result, TableError};
use calamine::{open_workbook_auto, Data, Range, Reader};
use csv::ReaderBuilder;
use phonecheck_core::RawInput;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];
/// Largest float that still holds every integer exactly.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;
const PHONE_HEADER_HINTS: [&str; 4] = ["phone", "mobile", "cell", "tel"];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A header row plus data rows, each padded to the header width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnChoice {
    /// First header that looks like a phone column.
    Auto,
    /// Header name (case-insensitive) or 1-based column number.
    Named(String),
}

impl ColumnChoice {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg.map(str::trim) {
            Some(name) if !name.is_empty() => ColumnChoice::Named(name.to_string()),
            _ => ColumnChoice::Auto,
        }
    }
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, choice: &ColumnChoice) -> Result<usize> {
        match choice {
            ColumnChoice::Auto => self.detect_phone_column().ok_or(TableError::NoPhoneColumn),
            ColumnChoice::Named(name) => self
                .find_header(name)
                .or_else(|| self.numbered_column(name))
                .ok_or_else(|| TableError::ColumnNotFound(name.clone())),
        }
    }

    pub fn detect_phone_column(&self) -> Option<usize> {
        PHONE_HEADER_HINTS.iter().find_map(|hint| {
            self.headers
                .iter()
                .position(|header| header.to_ascii_lowercase().contains(hint))
        })
    }

    pub fn column_inputs(&self, index: usize) -> Vec<RawInput> {
        self.rows
            .iter()
            .map(|row| {
                row.get(index)
                    .map(|cell| RawInput::from_cell(cell))
                    .unwrap_or(RawInput::Missing)
            })
            .collect()
    }

    fn find_header(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim() == wanted)
            .or_else(|| {
                self.headers
                    .iter()
                    .position(|header| header.trim().eq_ignore_ascii_case(wanted))
            })
    }

    fn numbered_column(&self, raw: &str) -> Option<usize> {
        let number: usize = raw.trim().parse().ok()?;
        if number == 0 || number > self.headers.len() {
            return None;
        }
        Some(number - 1)
    }
}

pub fn read_table_file(path: &Path, delimiter: u8) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    if let Some(extension) = extension {
        if SPREADSHEET_EXTENSIONS.contains(&extension.as_str()) {
            return read_workbook(path);
        }
    }

    let data = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TableError::MissingFile(path.to_path_buf()),
        _ => TableError::Io(err),
    })?;
    read_table(data.as_slice(), delimiter)
}

/// Reads the first worksheet of an Excel or OpenDocument workbook.
fn read_workbook(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(TableError::MissingFile(path.to_path_buf()));
    }
    let spreadsheet_error = |source: calamine::Error| TableError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_error)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TableError::EmptyWorkbook(path.to_path_buf()))?
        .map_err(spreadsheet_error)?;
    table_from_range(&range)
}

fn table_from_range(range: &Range<Data>) -> Result<Table> {
    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().ok_or(TableError::MissingHeader)?;
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(TableError::MissingHeader);
    }

    let rows: Vec<Vec<String>> = rows
        .map(|mut row| {
            row.resize(headers.len(), String::new());
            row
        })
        .collect();
    debug!(columns = headers.len(), rows = rows.len(), "worksheet read");
    Ok(Table { headers, rows })
}

/// Whole-number floats are written without a fraction so numeric phone cells
/// read back as their digits.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) if value.fract() == 0.0 && value.abs() < MAX_EXACT_FLOAT => {
            format!("{value:.0}")
        }
        other => other.to_string(),
    }
}

pub fn read_table<R: Read>(mut reader: R, delimiter: u8) -> Result<Table> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data.as_slice());

    let mut csv = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(data);

    let headers: Vec<String> = csv.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|header| header.trim().is_empty()) {
        return Err(TableError::MissingHeader);
    }

    let mut rows = Vec::new();
    for (index, result) in csv.records().enumerate() {
        let record = result?;
        if record.len() > headers.len() {
            let line = record
                .position()
                .map(|pos| pos.line())
                .unwrap_or(index as u64 + 2);
            return Err(TableError::RowLength {
                line,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    debug!(columns = headers.len(), rows = rows.len(), "table read");
    Ok(Table { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::{read_table, read_table_file, table_from_range, ColumnChoice};
    use crate::error::TableError;
    use calamine::{Data, Range};
    use phonecheck_core::RawInput;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_table_pads_short_rows_and_strips_bom() {
        let data = "\u{feff}Name,Phone Number\nAda,4155552671\nGrace\n";
        let table = read_table(data.as_bytes(), b',').expect("read");
        assert_eq!(table.headers, vec!["Name", "Phone Number"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1], vec!["Grace".to_string(), String::new()]);
    }

    #[test]
    fn read_table_rejects_long_rows() {
        let data = "Name,Phone\nAda,1,2\n";
        let err = read_table(data.as_bytes(), b',').unwrap_err();
        assert!(matches!(
            err,
            TableError::RowLength {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn read_table_honors_delimiter() {
        let data = "Name;Phone\nAda;+1 415 555 2671\n";
        let table = read_table(data.as_bytes(), b';').expect("read");
        assert_eq!(table.rows[0][1], "+1 415 555 2671");
    }

    #[test]
    fn column_choice_by_name_number_or_detection() {
        let data = "Name,Mobile Phone,Notes\nAda,4155552671,\n";
        let table = read_table(data.as_bytes(), b',').expect("read");
        assert_eq!(table.column_index(&ColumnChoice::Auto).expect("auto"), 1);
        assert_eq!(
            table
                .column_index(&ColumnChoice::Named("notes".to_string()))
                .expect("named"),
            2
        );
        assert_eq!(
            table
                .column_index(&ColumnChoice::Named("1".to_string()))
                .expect("numbered"),
            0
        );
        assert!(matches!(
            table.column_index(&ColumnChoice::Named("Email".to_string())),
            Err(TableError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn detection_fails_without_phone_like_header() {
        let table = read_table("Name,Email\nAda,a@b.c\n".as_bytes(), b',').expect("read");
        assert!(matches!(
            table.column_index(&ColumnChoice::Auto),
            Err(TableError::NoPhoneColumn)
        ));
        assert_eq!(ColumnChoice::from_arg(Some("  ")), ColumnChoice::Auto);
    }

    #[test]
    fn column_inputs_map_blank_cells_to_missing() {
        let table = read_table("Phone\n4155552671.0\n\"\"\n".as_bytes(), b',').expect("read");
        assert_eq!(
            table.column_inputs(0),
            vec![
                RawInput::Text("4155552671".to_string()),
                RawInput::Missing
            ]
        );
    }

    #[test]
    fn worksheet_cells_become_text() {
        let mut range = Range::new((0, 0), (3, 1));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 1), Data::String("Phone".to_string()));
        range.set_value((1, 0), Data::String("Ada".to_string()));
        range.set_value((1, 1), Data::Float(4155552671.0));
        range.set_value((2, 0), Data::String("Grace".to_string()));
        range.set_value((2, 1), Data::String("(917) 555-0123".to_string()));
        range.set_value((3, 0), Data::String("Linus".to_string()));

        let table = table_from_range(&range).expect("table");
        assert_eq!(table.headers, vec!["Name", "Phone"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.rows[0][1], "4155552671");
        assert_eq!(table.rows[1][1], "(917) 555-0123");
        assert_eq!(
            table.column_inputs(1),
            vec![
                RawInput::Text("4155552671".to_string()),
                RawInput::Text("(917) 555-0123".to_string()),
                RawInput::Missing,
            ]
        );
    }

    #[test]
    fn empty_worksheet_has_no_header() {
        let range: Range<Data> = Range::empty();
        assert!(matches!(
            table_from_range(&range),
            Err(TableError::MissingHeader)
        ));
    }

    #[test]
    fn read_table_file_reports_broken_and_missing_workbooks() {
        let temp = TempDir::new().expect("tempdir");
        let xlsx = temp.path().join("numbers.xlsx");
        fs::write(&xlsx, b"PK").expect("write xlsx");
        assert!(matches!(
            read_table_file(&xlsx, b','),
            Err(TableError::Spreadsheet { .. })
        ));

        let missing_sheet = temp.path().join("missing.ods");
        assert!(read_table_file(&missing_sheet, b',')
            .unwrap_err()
            .is_not_found());

        let missing = temp.path().join("missing.csv");
        let err = read_table_file(&missing, b',').unwrap_err();
        assert!(err.is_not_found());
    }
}
