//! Create form handlers

use tracing::{debug, info, warn};

use crate::create_form_state::{CreateField, CreateFormState};
use crate::message::Message;
use crate::request::{RequestFailure, RequestId};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub const CREATE_FAILED: &str = "Failed to create test";

fn form_mut(state: &mut AppState) -> Option<&mut CreateFormState> {
    state.dashboard_mut()?.create_form.as_mut()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(text) = form_mut(state).and_then(|f| f.focused_text_mut()) {
        text.push(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(text) = form_mut(state).and_then(|f| f.focused_text_mut()) {
        text.pop();
    }
    UpdateResult::none()
}

pub fn handle_move_focus(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(form) = form_mut(state) {
        form.focus = if forward {
            form.focus.next()
        } else {
            form.focus.prev()
        };
    }
    UpdateResult::none()
}

pub fn handle_cycle(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(form) = form_mut(state) {
        form.cycle_focused(forward);
    }
    UpdateResult::none()
}

/// Enter: buttons act, fields advance focus
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let Some(form) = form_mut(state) else {
        return UpdateResult::none();
    };
    match form.focus {
        CreateField::Submit => UpdateResult::message(Message::CreateFormSubmit),
        CreateField::Cancel => UpdateResult::message(Message::CreateFormCancel),
        _ => {
            form.focus = form.focus.next();
            UpdateResult::none()
        }
    }
}

/// Validate required fields and send `POST /tests`.
///
/// Ignored while a create request is outstanding.
pub fn handle_submit(state: &mut AppState) -> UpdateResult {
    let draft = match form_mut(state) {
        None => return UpdateResult::none(),
        Some(form) if form.is_loading() => {
            debug!("Create already in flight, ignoring submit");
            return UpdateResult::none();
        }
        Some(form) => {
            if let Some(field) = form.missing_field() {
                form.focus = field;
                form.error = Some(format!("{} is required", field.label()));
                return UpdateResult::none();
            }
            form.draft.clone()
        }
    };

    let request_id = state.next_request_id();
    let Some(form) = form_mut(state) else {
        return UpdateResult::none();
    };
    form.error = None;
    form.pending = Some(request_id);

    info!("Creating test for {}", draft.patient_name);
    UpdateResult::action(UpdateAction::CreateTest { request_id, draft })
}

/// Cancel: abort any in-flight create, then ask the dashboard to hide the form
pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    let Some(form) = form_mut(state) else {
        return UpdateResult::none();
    };
    match form.pending.take() {
        Some(request_id) => {
            debug!("Cancelling in-flight create {}", request_id);
            UpdateResult::action_then(
                UpdateAction::CancelRequests {
                    request_ids: vec![request_id],
                },
                Message::HideCreateForm,
            )
        }
        None => UpdateResult::message(Message::HideCreateForm),
    }
}

/// Resolve the outstanding create.
///
/// Success resets the draft and notifies the dashboard exactly once through
/// [`Message::TestCreated`]. Failure keeps the draft and shows the server's
/// message or a generic one.
pub fn handle_finished(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<(), RequestFailure>,
) -> UpdateResult {
    let Some(form) = form_mut(state) else {
        debug!("Dropping create result {}: form not shown", request_id);
        return UpdateResult::none();
    };
    if form.pending != Some(request_id) {
        debug!("Dropping stale create result {}", request_id);
        return UpdateResult::none();
    }
    form.pending = None;

    match result {
        Ok(()) => {
            info!("Test created");
            form.reset();
            UpdateResult::message(Message::TestCreated)
        }
        Err(failure) => {
            warn!("Error creating test: {}", failure);
            form.error = Some(failure.user_message(CREATE_FAILED));
            UpdateResult::none()
        }
    }
}
