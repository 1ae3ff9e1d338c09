pub mod directory;
pub mod error;
pub mod nanp;
pub mod prefix;
pub mod regions;
pub mod tables;

pub use directory::LibDirectory;
pub use error::{LookupError, Result};
pub use prefix::PrefixMap;
pub use tables::{PrefixTables, TableLoad};
