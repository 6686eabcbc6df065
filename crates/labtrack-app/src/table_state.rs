//! Test table state: row cursor and inline edit

use labtrack_core::{TestId, TestRecord, TestStatus};

use crate::request::RequestId;

/// Focused input of the row being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditFocus {
    #[default]
    Status,
    Result,
}

impl EditFocus {
    pub fn toggle(self) -> Self {
        match self {
            EditFocus::Status => EditFocus::Result,
            EditFocus::Result => EditFocus::Status,
        }
    }
}

/// At most one row is in edit mode
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditState {
    #[default]
    NotEditing,
    Editing {
        id: TestId,
        draft_status: TestStatus,
        draft_result: String,
        focus: EditFocus,
        /// Outstanding `PUT /tests/{id}`, if any
        saving: Option<RequestId>,
    },
}

impl EditState {
    /// Edit draft seeded from `record`.
    ///
    /// A status outside the fixed options starts at the first option so a
    /// save never sends an unknown value back.
    pub fn begin(record: &TestRecord) -> Self {
        let draft_status = match record.status {
            TestStatus::Other(_) => TestStatus::default(),
            ref known => known.clone(),
        };
        EditState::Editing {
            id: record.id.clone(),
            draft_status,
            draft_result: record.result.clone().unwrap_or_default(),
            focus: EditFocus::Status,
            saving: None,
        }
    }

    pub fn editing_id(&self) -> Option<&TestId> {
        match self {
            EditState::Editing { id, .. } => Some(id),
            EditState::NotEditing => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn saving_request(&self) -> Option<RequestId> {
        match self {
            EditState::Editing { saving, .. } => *saving,
            EditState::NotEditing => None,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving_request().is_some()
    }
}

/// State owned by the test table
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub edit: EditState,
    /// Last save failure
    pub error: Option<String>,
    /// Cursor into the visible (filtered) rows
    pub selected: usize,
}

impl TableState {
    /// Keep the cursor inside `len` visible rows
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match len {
            0 => 0,
            n => self.selected.min(n - 1),
        };
    }
}
