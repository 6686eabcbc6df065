//! Dashboard state: the authoritative test list and its children

use labtrack_core::{TestRecord, TestStatus, TestSummary};

use crate::create_form_state::CreateFormState;
use crate::request::RequestId;
use crate::table_state::TableState;

/// Backend reachability shown in the dashboard header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

/// Display-only row filter; never affects the summary
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TestStatus),
}

impl StatusFilter {
    /// All → Pending → In Progress → Completed → All
    pub fn next(&self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Only(TestStatus::OPTIONS[0].clone()),
            StatusFilter::Only(status) => {
                let idx = TestStatus::OPTIONS.iter().position(|s| s == status);
                match idx {
                    Some(i) if i + 1 < TestStatus::OPTIONS.len() => {
                        StatusFilter::Only(TestStatus::OPTIONS[i + 1].clone())
                    }
                    _ => StatusFilter::All,
                }
            }
        }
    }

    pub fn matches(&self, record: &TestRecord) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => &record.status == status,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(status) => status.as_str(),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, StatusFilter::All)
    }
}

/// Which child receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardFocus {
    Table,
    CreateForm,
    EditRow,
}

/// State owned by the dashboard while it is mounted
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Records in backend order, replaced wholesale on every fetch
    pub tests: Vec<TestRecord>,
    /// Initial fetch outstanding
    pub loading: bool,
    /// Newest outstanding `GET /tests`
    pub fetch_request: Option<RequestId>,
    pub health: HealthStatus,
    pub health_request: Option<RequestId>,
    /// `Some` while the create form is shown
    pub create_form: Option<CreateFormState>,
    pub table: TableState,
    pub status_filter: StatusFilter,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            tests: Vec::new(),
            loading: true,
            fetch_request: None,
            health: HealthStatus::default(),
            health_request: None,
            create_form: None,
            table: TableState::default(),
            status_filter: StatusFilter::default(),
        }
    }
}

impl DashboardState {
    /// Summary over the full list, regardless of filter
    pub fn summary(&self) -> TestSummary {
        TestSummary::from_records(&self.tests)
    }

    /// Rows the table shows, in backend order
    pub fn visible_tests(&self) -> Vec<&TestRecord> {
        self.tests
            .iter()
            .filter(|t| self.status_filter.matches(t))
            .collect()
    }

    pub fn selected_test(&self) -> Option<&TestRecord> {
        self.visible_tests().get(self.table.selected).copied()
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible_tests().len();
        self.table.clamp_selection(len);
    }

    pub fn is_refreshing(&self) -> bool {
        self.fetch_request.is_some()
    }

    pub fn focus(&self) -> DashboardFocus {
        if self.table.edit.is_editing() {
            DashboardFocus::EditRow
        } else if self.create_form.is_some() {
            DashboardFocus::CreateForm
        } else {
            DashboardFocus::Table
        }
    }

    /// Every request this dashboard is waiting on
    pub fn outstanding_requests(&self) -> Vec<RequestId> {
        [
            self.fetch_request,
            self.health_request,
            self.create_form.as_ref().and_then(|f| f.pending),
            self.table.edit.saving_request(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
