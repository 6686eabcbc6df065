//! Response bodies that exist only on the wire

use serde::Deserialize;

/// `POST /login` response body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// Body of a non-success response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// `GET /health` response body
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Whether the backend accepted a credential pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
}

impl From<&LoginResponse> for LoginOutcome {
    fn from(resp: &LoginResponse) -> Self {
        if resp.success {
            LoginOutcome::Accepted
        } else {
            LoginOutcome::Rejected
        }
    }
}
