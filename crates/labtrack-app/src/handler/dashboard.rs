//! Dashboard handlers: list fetching, health, selection, child notifications

use labtrack_core::TestRecord;
use tracing::{debug, info, warn};

use crate::create_form_state::CreateFormState;
use crate::dashboard_state::{DashboardState, HealthStatus};
use crate::login_state::LoginState;
use crate::message::Message;
use crate::request::{RequestFailure, RequestId};
use crate::state::{AppState, Screen};
use crate::table_state::EditState;

use super::{UpdateAction, UpdateResult};

/// Mount the dashboard after login: fetch the list, then probe health
pub fn handle_mount(state: &mut AppState) -> UpdateResult {
    info!("Dashboard mounted");
    state.screen = Screen::Dashboard(DashboardState::default());

    match start_fetch(state) {
        Some(action) => UpdateResult::action_then(action, Message::CheckHealth),
        None => UpdateResult::none(),
    }
}

/// Manual refresh re-fetches the list and re-probes health
pub fn handle_refresh(state: &mut AppState) -> UpdateResult {
    match start_fetch(state) {
        Some(action) => UpdateResult::action_then(action, Message::CheckHealth),
        None => UpdateResult::none(),
    }
}

/// Issue a `GET /tests`; a result for any earlier fetch becomes stale
fn start_fetch(state: &mut AppState) -> Option<UpdateAction> {
    let request_id = state.next_request_id();
    let dash = state.dashboard_mut()?;
    dash.fetch_request = Some(request_id);
    debug!("Fetching tests ({})", request_id);
    Some(UpdateAction::FetchTests { request_id })
}

/// Replace the list wholesale, or log and keep the previous list on failure
pub fn handle_tests_loaded(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<Vec<TestRecord>, RequestFailure>,
) -> UpdateResult {
    let Some(dash) = state.dashboard_mut() else {
        debug!("Dropping test list {}: dashboard not mounted", request_id);
        return UpdateResult::none();
    };
    if dash.fetch_request != Some(request_id) {
        debug!("Dropping stale test list {}", request_id);
        return UpdateResult::none();
    }
    dash.fetch_request = None;
    dash.loading = false;

    let tests = match result {
        Ok(tests) => tests,
        Err(failure) => {
            warn!("Error fetching tests: {}", failure);
            return UpdateResult::none();
        }
    };
    debug!("Loaded {} tests", tests.len());

    let selected_id = dash.selected_test().map(|t| t.id.clone());
    dash.tests = tests;
    if let Some(id) = selected_id {
        if let Some(pos) = dash.visible_tests().iter().position(|t| t.id == id) {
            dash.table.selected = pos;
        }
    }
    dash.clamp_selection();

    // An edited row that no longer exists cannot be saved
    let orphaned = dash
        .table
        .edit
        .editing_id()
        .is_some_and(|id| !dash.tests.iter().any(|t| &t.id == id));
    if orphaned {
        let saving = dash.table.edit.saving_request();
        dash.table.edit = EditState::NotEditing;
        dash.table.error = None;
        return UpdateResult::cancel(saving.into_iter().collect());
    }
    UpdateResult::none()
}

pub fn handle_check_health(state: &mut AppState) -> UpdateResult {
    let request_id = state.next_request_id();
    let Some(dash) = state.dashboard_mut() else {
        return UpdateResult::none();
    };
    dash.health = HealthStatus::Checking;
    dash.health_request = Some(request_id);
    UpdateResult::action(UpdateAction::CheckHealth { request_id })
}

pub fn handle_health_checked(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<bool, RequestFailure>,
) -> UpdateResult {
    let Some(dash) = state.dashboard_mut() else {
        return UpdateResult::none();
    };
    if dash.health_request != Some(request_id) {
        debug!("Dropping stale health result {}", request_id);
        return UpdateResult::none();
    }
    dash.health_request = None;
    dash.health = match result {
        Ok(true) => HealthStatus::Online,
        Ok(false) => HealthStatus::Offline,
        Err(failure) => {
            warn!("Health check failed: {}", failure);
            HealthStatus::Offline
        }
    };
    UpdateResult::none()
}

/// Move the row cursor; `step` maps (current, visible len) to the new index
pub fn handle_select(state: &mut AppState, step: impl Fn(usize, usize) -> usize) -> UpdateResult {
    if let Some(dash) = state.dashboard_mut() {
        let len = dash.visible_tests().len();
        dash.table.selected = step(dash.table.selected, len);
        dash.clamp_selection();
    }
    UpdateResult::none()
}

pub fn handle_cycle_filter(state: &mut AppState) -> UpdateResult {
    if let Some(dash) = state.dashboard_mut() {
        dash.status_filter = dash.status_filter.next();
        dash.clamp_selection();
        debug!("Status filter: {}", dash.status_filter.label());
    }
    UpdateResult::none()
}

pub fn handle_toggle_create_form(state: &mut AppState) -> UpdateResult {
    let Some(dash) = state.dashboard_mut() else {
        return UpdateResult::none();
    };
    if dash.create_form.is_some() {
        // Closing goes through the form so it cancels its own request
        UpdateResult::message(Message::CreateFormCancel)
    } else {
        dash.create_form = Some(CreateFormState::default());
        UpdateResult::none()
    }
}

pub fn handle_hide_create_form(state: &mut AppState) -> UpdateResult {
    if let Some(dash) = state.dashboard_mut() {
        dash.create_form = None;
    }
    UpdateResult::none()
}

/// Unmount the dashboard, cancelling everything it was waiting on
pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    let Some(dash) = state.dashboard() else {
        return UpdateResult::none();
    };
    let outstanding = dash.outstanding_requests();

    info!("Logged out");
    state.screen = Screen::Login(LoginState::default());
    UpdateResult::cancel(outstanding)
}

pub fn handle_test_created(state: &mut AppState) -> UpdateResult {
    if let Some(dash) = state.dashboard_mut() {
        dash.create_form = None;
    }
    match start_fetch(state) {
        Some(action) => UpdateResult::action(action),
        None => UpdateResult::none(),
    }
}

pub fn handle_test_updated(state: &mut AppState) -> UpdateResult {
    match start_fetch(state) {
        Some(action) => UpdateResult::action(action),
        None => UpdateResult::none(),
    }
}
