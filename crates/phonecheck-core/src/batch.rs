use crate::directory::NumberDirectory;
use crate::domain::{RawInput, ValidationRecord};
use crate::pipeline::PhoneClassifier;
use crate::summary::BatchSummary;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        self.processed * 100 / self.total
    }

    pub fn is_done(&self) -> bool {
        self.processed >= self.total
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// One record per input, in input order.
    pub records: Vec<ValidationRecord>,
    pub summary: BatchSummary,
}

impl<D: NumberDirectory> PhoneClassifier<D> {
    /// Validates every input in order, reporting progress after each row.
    /// Rows fail individually; the batch always completes.
    pub fn run_batch<F>(&self, inputs: &[RawInput], mut on_progress: F) -> BatchOutcome
    where
        F: FnMut(Progress),
    {
        let total = inputs.len();
        let mut records = Vec::with_capacity(total);
        for (index, raw) in inputs.iter().enumerate() {
            records.push(self.validate(raw));
            on_progress(Progress {
                processed: index + 1,
                total,
            });
        }

        let summary = BatchSummary::from_records(&records, self.options().labels);
        debug!(
            total = summary.total,
            valid = summary.valid,
            invalid = summary.invalid,
            "batch complete"
        );
        BatchOutcome { records, summary }
    }
}
