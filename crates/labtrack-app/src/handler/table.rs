//! Test table handlers: inline edit of status and result

use labtrack_core::StatusUpdate;
use tracing::{debug, info, warn};

use crate::message::Message;
use crate::request::{RequestFailure, RequestId};
use crate::state::AppState;
use crate::table_state::{EditFocus, EditState, TableState};

use super::{UpdateAction, UpdateResult};

pub const UPDATE_FAILED: &str = "Failed to update test";

fn table_mut(state: &mut AppState) -> Option<&mut TableState> {
    state.dashboard_mut().map(|d| &mut d.table)
}

/// Put the selected row into edit mode, replacing any other edit
pub fn handle_start_edit(state: &mut AppState) -> UpdateResult {
    let Some(dash) = state.dashboard_mut() else {
        return UpdateResult::none();
    };
    let Some(record) = dash.selected_test() else {
        return UpdateResult::none();
    };
    let edit = EditState::begin(record);
    debug!("Editing test {}", record.id);

    let superseded = dash.table.edit.saving_request();
    dash.table.edit = edit;
    dash.table.error = None;
    UpdateResult::cancel(superseded.into_iter().collect())
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(TableState {
        edit:
            EditState::Editing {
                draft_result,
                focus: EditFocus::Result,
                ..
            },
        ..
    }) = table_mut(state)
    {
        draft_result.push(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(TableState {
        edit:
            EditState::Editing {
                draft_result,
                focus: EditFocus::Result,
                ..
            },
        ..
    }) = table_mut(state)
    {
        draft_result.pop();
    }
    UpdateResult::none()
}

pub fn handle_toggle_focus(state: &mut AppState) -> UpdateResult {
    if let Some(TableState {
        edit: EditState::Editing { focus, .. },
        ..
    }) = table_mut(state)
    {
        *focus = focus.toggle();
    }
    UpdateResult::none()
}

pub fn handle_cycle_status(state: &mut AppState, forward: bool) -> UpdateResult {
    if let Some(TableState {
        edit: EditState::Editing { draft_status, .. },
        ..
    }) = table_mut(state)
    {
        *draft_status = if forward {
            draft_status.next()
        } else {
            draft_status.prev()
        };
    }
    UpdateResult::none()
}

/// Send `PUT /tests/{id}` with the draft status and result.
///
/// Ignored while a save is outstanding. A retry clears the previous failure.
pub fn handle_save(state: &mut AppState) -> UpdateResult {
    let request_id = state.next_request_id();
    let Some(TableState {
        edit:
            EditState::Editing {
                id,
                draft_status,
                draft_result,
                saving,
                ..
            },
        error,
        ..
    }) = table_mut(state)
    else {
        return UpdateResult::none();
    };
    if saving.is_some() {
        debug!("Save already in flight, ignoring");
        return UpdateResult::none();
    }
    *saving = Some(request_id);
    *error = None;

    info!("Updating test {} to {}", id, draft_status);
    UpdateResult::action(UpdateAction::UpdateTest {
        request_id,
        id: id.clone(),
        update: StatusUpdate {
            status: draft_status.clone(),
            result: draft_result.clone(),
        },
    })
}

/// Discard the draft and its error without a request; an in-flight save is
/// aborted
pub fn handle_cancel(state: &mut AppState) -> UpdateResult {
    let Some(table) = table_mut(state) else {
        return UpdateResult::none();
    };
    let in_flight = table.edit.saving_request();
    table.edit = EditState::NotEditing;
    table.error = None;
    UpdateResult::cancel(in_flight.into_iter().collect())
}

/// Resolve the outstanding save.
///
/// Success leaves edit mode and notifies the dashboard exactly once through
/// [`Message::TestUpdated`]. Failure stays in edit mode with the server's
/// message or a generic one.
pub fn handle_finished(
    state: &mut AppState,
    request_id: RequestId,
    result: Result<(), RequestFailure>,
) -> UpdateResult {
    let Some(table) = table_mut(state) else {
        debug!("Dropping update result {}: dashboard not mounted", request_id);
        return UpdateResult::none();
    };
    let EditState::Editing { saving, .. } = &mut table.edit else {
        debug!("Dropping update result {}: not editing", request_id);
        return UpdateResult::none();
    };
    if *saving != Some(request_id) {
        debug!("Dropping stale update result {}", request_id);
        return UpdateResult::none();
    }
    *saving = None;

    match result {
        Ok(()) => {
            info!("Test updated");
            table.edit = EditState::NotEditing;
            table.error = None;
            UpdateResult::message(Message::TestUpdated)
        }
        Err(failure) => {
            warn!("Error updating test: {}", failure);
            table.error = Some(failure.user_message(UPDATE_FAILED));
            UpdateResult::none()
        }
    }
}
