pub mod input;
pub mod line_type;
pub mod number;
pub mod phone;
pub mod record;

pub use input::RawInput;
pub use line_type::{LabelPreset, LineType};
pub use number::{NumberKind, ParsedNumber};
pub use phone::{normalize_number, NormalizeDefaults, DEFAULT_AREA_CODE, DEFAULT_COUNTRY_CODE};
pub use record::ValidationRecord;
