use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("input file not found: {0}")]
    MissingFile(PathBuf),
    #[error("cannot read spreadsheet {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("spreadsheet has no worksheets: {0}")]
    EmptyWorkbook(PathBuf),
    #[error("input has no header row")]
    MissingHeader,
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("no phone column found; pass --column")]
    NoPhoneColumn,
    #[error("row {line} has {found} cells but the header has {expected}")]
    RowLength {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("{records} records for {rows} rows")]
    RecordCount { rows: usize, records: usize },
}

impl TableError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TableError::MissingFile(_) | TableError::ColumnNotFound(_) | TableError::NoPhoneColumn
        )
    }
}

pub type Result<T> = std::result::Result<T, TableError>;
