//! Login form handlers

use labtrack_api::LoginOutcome;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::request::{RequestFailure, RequestId};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(login) = state.login_mut() {
        login.focused_value_mut().push(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(login) = state.login_mut() {
        login.focused_value_mut().pop();
    }
    UpdateResult::none()
}

pub fn handle_switch_field(state: &mut AppState) -> UpdateResult {
    if let Some(login) = state.login_mut() {
        login.focus = login.focus.toggle();
    }
    UpdateResult::none()
}

/// Validate required fields and send `POST /login`.
///
/// Ignored while a login request is outstanding.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let Some(login) = state.login() else {
        return UpdateResult::none();
    };
    if login.is_loading() {
        debug!("Login already in flight, ignoring submit");
        return UpdateResult::none();
    }

    if let Some(field) = login.first_missing() {
        if let Some(login) = state.login_mut() {
            login.focus = field;
            login.error = Some(format!("{} is required", field.label()));
        }
        return UpdateResult::none();
    }

    let request_id = state.next_request_id();
    let Some(login) = state.login_mut() else {
        return UpdateResult::none();
    };
    login.error = None;
    login.pending = Some(request_id);

    info!("Logging in as {}", login.username);
    UpdateResult::action(UpdateAction::Login {
        request_id,
        credentials: login.credentials(),
    })
}

/// Resolve the outstanding login.
///
/// Loading always clears. Acceptance notifies the app exactly once through
/// [`Message::LoginSucceeded`].
pub fn handle_finished(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<LoginOutcome, RequestFailure>,
) -> UpdateResult {
    let Some(login) = state.login_mut() else {
        debug!("Dropping login result {}: login screen not mounted", request_id);
        return UpdateResult::none();
    };
    if login.pending != Some(request_id) {
        debug!("Dropping stale login result {}", request_id);
        return UpdateResult::none();
    }
    login.pending = None;

    match result {
        Ok(LoginOutcome::Accepted) => {
            info!("Login accepted for {}", login.username);
            login.error = None;
            UpdateResult::message(Message::LoginSucceeded)
        }
        Ok(LoginOutcome::Rejected) => {
            info!("Login rejected for {}", login.username);
            login.error = Some(INVALID_CREDENTIALS.to_string());
            UpdateResult::none()
        }
        Err(failure) => {
            warn!("Login request failed: {}", failure);
            login.error = Some(LOGIN_FAILED.to_string());
            UpdateResult::none()
        }
    }
}
