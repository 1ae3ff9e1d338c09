pub mod area_codes;
pub mod classify;
pub mod confidence;

pub use area_codes::{AreaCodeAllowList, MOBILE_AREA_CODES};
pub use classify::{classify_line_type, ClassifyRules};
pub use confidence::{score_confidence, ConfidenceBonus, ConfidenceRules, ConfidenceSignals};
