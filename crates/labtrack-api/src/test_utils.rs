//! In-memory backend for tests
//!
//! [`FakeLabApi`] behaves like the real service for the happy paths
//! (credential check, required-field validation, id lookup) and lets tests
//! script failures, latency and health. Every call is recorded.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use labtrack_core::{Credentials, StatusUpdate, TestDraft, TestId, TestRecord};

use crate::client::LabApi;
use crate::error::ApiError;
use crate::wire::LoginOutcome;

/// Which operation a scripted failure or delay applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    ListTests,
    CreateTest,
    UpdateTest,
    Health,
}

/// A recorded request
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Login { username: String, password: String },
    ListTests,
    CreateTest(TestDraft),
    UpdateTest { id: TestId, update: StatusUpdate },
    Health,
}

impl ApiCall {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            ApiCall::Login { .. } => Endpoint::Login,
            ApiCall::ListTests => Endpoint::ListTests,
            ApiCall::CreateTest(_) => Endpoint::CreateTest,
            ApiCall::UpdateTest { .. } => Endpoint::UpdateTest,
            ApiCall::Health => Endpoint::Health,
        }
    }
}

#[derive(Debug)]
struct FakeState {
    valid: Credentials,
    records: Vec<TestRecord>,
    next_id: u64,
    healthy: bool,
    failures: HashMap<Endpoint, VecDeque<ApiError>>,
    delays: HashMap<Endpoint, Duration>,
    calls: Vec<ApiCall>,
}

/// Scriptable [`LabApi`]; clones share state
#[derive(Debug, Clone)]
pub struct FakeLabApi {
    state: Arc<Mutex<FakeState>>,
}

impl Default for FakeLabApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeLabApi {
    /// Empty backend accepting `admin` / `password123`
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeState {
                valid: Credentials::new("admin", "password123"),
                records: Vec::new(),
                next_id: 1,
                healthy: true,
                failures: HashMap::new(),
                delays: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }

    /// Backend pre-populated with `records`
    pub fn with_records(records: Vec<TestRecord>) -> Self {
        let fake = Self::new();
        {
            let mut state = fake.lock();
            state.next_id = records
                .iter()
                .filter_map(|r| match r.id {
                    TestId::Number(n) => Some(n + 1),
                    TestId::Text(_) => None,
                })
                .max()
                .unwrap_or(1);
            state.records = records;
        }
        fake
    }

    /// Fail the next call to `endpoint` with `error`. Queued failures are
    /// consumed in order.
    pub fn fail_next(&self, endpoint: Endpoint, error: ApiError) {
        self.lock()
            .failures
            .entry(endpoint)
            .or_default()
            .push_back(error);
    }

    /// Sleep before answering every call to `endpoint`
    pub fn set_delay(&self, endpoint: Endpoint, delay: Duration) {
        self.lock().delays.insert(endpoint, delay);
    }

    pub fn set_healthy(&self, healthy: bool) {
        self.lock().healthy = healthy;
    }

    pub fn records(&self) -> Vec<TestRecord> {
        self.lock().records.clone()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// Number of recorded calls to `endpoint`
    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|c| c.endpoint() == endpoint)
            .count()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Record the call, then honor any scripted delay and failure
    async fn enter(&self, call: ApiCall) -> Result<(), ApiError> {
        let endpoint = call.endpoint();
        let delay = {
            let mut state = self.lock();
            state.calls.push(call);
            state.delays.get(&endpoint).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let failure = self
            .lock()
            .failures
            .get_mut(&endpoint)
            .and_then(|queue| queue.pop_front());
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl LabApi for FakeLabApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, ApiError> {
        self.enter(ApiCall::Login {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        })
        .await?;

        if *credentials == self.lock().valid {
            Ok(LoginOutcome::Accepted)
        } else {
            Ok(LoginOutcome::Rejected)
        }
    }

    async fn list_tests(&self) -> Result<Vec<TestRecord>, ApiError> {
        self.enter(ApiCall::ListTests).await?;
        Ok(self.records())
    }

    async fn create_test(&self, draft: &TestDraft) -> Result<(), ApiError> {
        self.enter(ApiCall::CreateTest(draft.clone())).await?;

        for (field, value) in [
            ("patient_name", &draft.patient_name),
            ("doctor_name", &draft.doctor_name),
        ] {
            if value.is_empty() {
                return Err(ApiError::rejected(400, Some(format!("{} is required", field))));
            }
        }

        let mut state = self.lock();
        let id = TestId::Number(state.next_id);
        state.next_id += 1;
        state.records.push(TestRecord {
            id,
            patient_name: draft.patient_name.clone(),
            doctor_name: draft.doctor_name.clone(),
            test_type: draft.test_type.clone(),
            status: draft.status.clone(),
            result: Some(draft.result.clone()),
            created_at: Some("2024-05-01T09:30:00.000000".to_string()),
        });
        Ok(())
    }

    async fn update_test(&self, id: &TestId, update: &StatusUpdate) -> Result<(), ApiError> {
        self.enter(ApiCall::UpdateTest {
            id: id.clone(),
            update: update.clone(),
        })
        .await?;

        let mut state = self.lock();
        let Some(record) = state.records.iter_mut().find(|r| &r.id == id) else {
            return Err(ApiError::rejected(404, None));
        };
        record.status = update.status.clone();
        record.result = Some(update.result.clone());
        Ok(())
    }

    async fn health(&self) -> Result<bool, ApiError> {
        self.enter(ApiCall::Health).await?;
        Ok(self.lock().healthy)
    }
}

/// A record with sensible defaults for tests
pub fn sample_record(id: u64, patient: &str, status: labtrack_core::TestStatus) -> TestRecord {
    TestRecord {
        id: TestId::Number(id),
        patient_name: patient.to_string(),
        doctor_name: "Dr. Johnson".to_string(),
        test_type: labtrack_core::TestType::Blood,
        status,
        result: None,
        created_at: Some("2024-05-01T09:30:00.000000".to_string()),
    }
}
