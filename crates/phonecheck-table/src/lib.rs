pub mod annotate;
pub mod error;
pub mod read;

pub use annotate::{annotate, write_table, OutputColumns};
pub use error::{Result, TableError};
pub use read::{read_table, read_table_file, ColumnChoice, Table};
