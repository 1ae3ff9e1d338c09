use crate::domain::{LabelPreset, ValidationRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTypeCount {
    pub label: String,
    pub count: usize,
}

/// Aggregate figures for one batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub mobile: usize,
    pub non_mobile: usize,
    /// Ordered by descending count, ties by label.
    pub line_types: Vec<LineTypeCount>,
}

impl BatchSummary {
    pub fn from_records(records: &[ValidationRecord], labels: LabelPreset) -> Self {
        let total = records.len();
        let valid = records.iter().filter(|record| record.valid).count();
        let mobile = records.iter().filter(|record| record.is_mobile).count();

        let mut line_types: Vec<LineTypeCount> = Vec::new();
        for record in records {
            let label = labels.label(record.line_type);
            match line_types.iter_mut().find(|entry| entry.label == label) {
                Some(entry) => entry.count += 1,
                None => line_types.push(LineTypeCount {
                    label: label.to_string(),
                    count: 1,
                }),
            }
        }
        line_types.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));

        Self {
            total,
            valid,
            invalid: total - valid,
            mobile,
            non_mobile: total - mobile,
            line_types,
        }
    }

    pub fn valid_percent(&self) -> f64 {
        percent(self.valid, self.total)
    }

    pub fn invalid_percent(&self) -> f64 {
        percent(self.invalid, self.total)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 * 100.0 / total as f64
}
