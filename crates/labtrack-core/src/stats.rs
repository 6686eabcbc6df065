//! Summary statistics over a list of test records

use crate::types::{TestRecord, TestStatus};

/// Per-status counts shown on the dashboard.
///
/// `total` counts every record, including ones whose status is outside the
/// fixed set, so `pending + in_progress + completed <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TestSummary {
    /// Derive counts from a record list. Cheap enough to run on every render.
    pub fn from_records(records: &[TestRecord]) -> Self {
        let count = |status: TestStatus| records.iter().filter(|t| t.status == status).count();

        Self {
            total: records.len(),
            pending: count(TestStatus::Pending),
            in_progress: count(TestStatus::InProgress),
            completed: count(TestStatus::Completed),
        }
    }
}
