//! Backend client trait and its reqwest implementation

use std::time::Duration;

use labtrack_core::{Credentials, StatusUpdate, TestDraft, TestId, TestRecord};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::wire::{ErrorBody, HealthResponse, LoginOutcome, LoginResponse};

/// Base URL used when neither configuration nor environment provides one
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Per-request timeout used when configuration does not override it
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Operations the lab test service exposes.
///
/// Create and update report success only; callers refetch the list to see
/// the persisted state.
#[trait_variant::make(LabApi: Send)]
pub trait LocalLabApi {
    /// `POST /login`.
    ///
    /// Any body carrying `success`, whatever the status, is a verdict on the
    /// credentials. The service answers a wrong password with 401 and
    /// `{"success": false}`, so that case yields [`LoginOutcome::Rejected`]
    /// ("Invalid credentials") rather than the generic login failure a client
    /// treating every 401 as an error would show.
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, ApiError>;

    /// `GET /tests`, in backend order
    async fn list_tests(&self) -> Result<Vec<TestRecord>, ApiError>;

    /// `POST /tests`
    async fn create_test(&self, draft: &TestDraft) -> Result<(), ApiError>;

    /// `PUT /tests/{id}`
    async fn update_test(&self, id: &TestId, update: &StatusUpdate) -> Result<(), ApiError>;

    /// `GET /health`; `Ok(false)` when the service answers but is not healthy
    async fn health(&self) -> Result<bool, ApiError>;
}

// ─────────────────────────────────────────────────────────────────────────────
// HttpLabApi
// ─────────────────────────────────────────────────────────────────────────────

/// [`LabApi`] over HTTP/JSON
#[derive(Debug, Clone)]
pub struct HttpLabApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpLabApi {
    /// Build a client for `base_url`.
    ///
    /// The URL must be absolute http(s); a path prefix such as
    /// `https://lab.example.com/api` is kept and endpoints are appended to it.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("labtrack/", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!("Backend client created for {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::invalid_base_url(self.base_url.as_str(), "cannot be a base"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl LabApi for HttpLabApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginOutcome, ApiError> {
        let url = self.endpoint(&["login"])?;
        debug!("POST {} as {}", url, credentials.username);

        let response = self.client.post(url).json(credentials).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // The service answers 401 with `{"success": false}`; any body in that
        // shape is a verdict on the credentials, not a request failure.
        match serde_json::from_slice::<LoginResponse>(&bytes) {
            Ok(body) => Ok(LoginOutcome::from(&body)),
            Err(_) if !status.is_success() => Err(rejection(status, &bytes)),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_tests(&self) -> Result<Vec<TestRecord>, ApiError> {
        let url = self.endpoint(&["tests"])?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        decode_json(response).await
    }

    async fn create_test(&self, draft: &TestDraft) -> Result<(), ApiError> {
        let url = self.endpoint(&["tests"])?;
        debug!("POST {} for patient {}", url, draft.patient_name);

        let response = self.client.post(url).json(draft).send().await?;
        expect_success(response).await
    }

    async fn update_test(&self, id: &TestId, update: &StatusUpdate) -> Result<(), ApiError> {
        let id = id.to_string();
        let url = self.endpoint(&["tests", &id])?;
        debug!("PUT {} status={}", url, update.status);

        let response = self.client.put(url).json(update).send().await?;
        expect_success(response).await
    }

    async fn health(&self) -> Result<bool, ApiError> {
        let url = self.endpoint(&["health"])?;

        let response = self.client.get(url).send().await?;
        let body: HealthResponse = decode_json(response).await?;
        if !body.is_healthy() {
            warn!("Backend reports status '{}'", body.status);
        }
        Ok(body.is_healthy())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let url = Url::parse(raw.trim()).map_err(|e| ApiError::invalid_base_url(raw, e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::invalid_base_url(
            raw,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.cannot_be_a_base() {
        return Err(ApiError::invalid_base_url(raw, "cannot be a base"));
    }
    Ok(url)
}

fn rejection(status: StatusCode, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error);
    ApiError::rejected(status.as_u16(), message)
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        return Err(rejection(status, &bytes));
    }
    Ok(serde_json::from_slice(&bytes)?)
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let bytes = response.bytes().await?;
    Err(rejection(status, &bytes))
}
