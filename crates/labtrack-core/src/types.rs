//! Lab test domain types
//!
//! The backend owns every record; the client only reads the named fields and
//! sends back drafts and status updates. Enumerated fields travel as their
//! display strings (`"X-Ray"`, `"In Progress"`), so the enums convert to and
//! from `String` for serde.

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Backend-assigned record identifier.
///
/// The client never constructs one; it is read from list responses and
/// echoed back in update paths. Both numeric and string ids are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TestId {
    Number(u64),
    Text(String),
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestId::Number(n) => write!(f, "{}", n),
            TestId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TestId {
    fn from(n: u64) -> Self {
        TestId::Number(n)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Enumerations
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of lab test
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestType {
    #[default]
    Blood,
    Urine,
    XRay,
    Mri,
    /// A value outside the fixed set, as received from the backend
    Other(String),
}

impl TestType {
    /// Selectable options, in display order
    pub const OPTIONS: [TestType; 4] = [TestType::Blood, TestType::Urine, TestType::XRay, TestType::Mri];

    pub fn as_str(&self) -> &str {
        match self {
            TestType::Blood => "Blood",
            TestType::Urine => "Urine",
            TestType::XRay => "X-Ray",
            TestType::Mri => "MRI",
            TestType::Other(s) => s,
        }
    }

    /// Next selectable option (wraps; unknown values restart at the first)
    pub fn next(&self) -> Self {
        cycle(&Self::OPTIONS, self, true)
    }

    /// Previous selectable option (wraps)
    pub fn prev(&self) -> Self {
        cycle(&Self::OPTIONS, self, false)
    }
}

impl From<String> for TestType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Blood" => TestType::Blood,
            "Urine" => TestType::Urine,
            "X-Ray" => TestType::XRay,
            "MRI" => TestType::Mri,
            _ => TestType::Other(s),
        }
    }
}

impl From<TestType> for String {
    fn from(t: TestType) -> Self {
        match t {
            TestType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing status of a lab test
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TestStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    /// A value outside the fixed set, as received from the backend
    Other(String),
}

impl TestStatus {
    /// Selectable options, in display order
    pub const OPTIONS: [TestStatus; 3] = [
        TestStatus::Pending,
        TestStatus::InProgress,
        TestStatus::Completed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            TestStatus::Pending => "Pending",
            TestStatus::InProgress => "In Progress",
            TestStatus::Completed => "Completed",
            TestStatus::Other(s) => s,
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::OPTIONS, self, true)
    }

    pub fn prev(&self) -> Self {
        cycle(&Self::OPTIONS, self, false)
    }
}

impl From<String> for TestStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Pending" => TestStatus::Pending,
            "In Progress" => TestStatus::InProgress,
            "Completed" => TestStatus::Completed,
            _ => TestStatus::Other(s),
        }
    }
}

impl From<TestStatus> for String {
    fn from(s: TestStatus) -> Self {
        match s {
            TestStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn cycle<T: Clone + PartialEq>(options: &[T], current: &T, forward: bool) -> T {
    let len = options.len();
    let next_idx = match options.iter().position(|o| o == current) {
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx + len - 1) % len,
        None => 0,
    };
    options[next_idx].clone()
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// A lab test record as returned by `GET /tests`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    pub id: TestId,
    pub patient_name: String,
    pub doctor_name: String,
    pub test_type: TestType,
    pub status: TestStatus,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TestRecord {
    /// The result text, or `None` when absent or empty
    pub fn result_text(&self) -> Option<&str> {
        self.result.as_deref().filter(|r| !r.is_empty())
    }

    /// Snapshot of the editable fields
    pub fn status_update(&self) -> StatusUpdate {
        StatusUpdate {
            status: self.status.clone(),
            result: self.result.clone().unwrap_or_default(),
        }
    }
}

/// Draft of a record to be created (`POST /tests` body)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TestDraft {
    pub patient_name: String,
    pub doctor_name: String,
    pub test_type: TestType,
    pub status: TestStatus,
    pub result: String,
}

impl TestDraft {
    /// Label of the first required field left empty, if any
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.patient_name.trim().is_empty() {
            Some("Patient Name")
        } else if self.doctor_name.trim().is_empty() {
            Some("Doctor Name")
        } else {
            None
        }
    }
}

/// Editable subset of a record (`PUT /tests/{id}` body)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StatusUpdate {
    pub status: TestStatus,
    pub result: String,
}

/// Login credentials (`POST /login` body)
#[derive(Clone, PartialEq, Eq, Default, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Render a backend `created_at` value in local time.
///
/// The backend emits naive UTC ISO-8601 (`2024-05-01T09:30:00.123456`);
/// RFC 3339 values with an offset are accepted too. `None` renders as `N/A`
/// and anything unparseable is shown verbatim.
pub fn format_created_at(raw: Option<&str>) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M:%S";

    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY).to_string();
    }

    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => naive
            .and_utc()
            .with_timezone(&Local)
            .format(DISPLAY)
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
