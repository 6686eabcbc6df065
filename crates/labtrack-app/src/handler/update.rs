//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{create_form, dashboard, keys::handle_key, login, table, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick = state.tick.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Login
        // ─────────────────────────────────────────────────────────
        Message::LoginInput(c) => login::handle_input(state, c),
        Message::LoginBackspace => login::handle_backspace(state),
        Message::LoginNextField | Message::LoginPrevField => login::handle_switch_field(state),
        Message::LoginSubmit => login::handle_submit(state),
        Message::LoginFinished { request_id, result } => {
            login::handle_finished(state, request_id, result)
        }
        Message::LoginSucceeded => dashboard::handle_mount(state),

        // ─────────────────────────────────────────────────────────
        // Dashboard
        // ─────────────────────────────────────────────────────────
        Message::RefreshTests => dashboard::handle_refresh(state),
        Message::TestsLoaded { request_id, result } => {
            dashboard::handle_tests_loaded(state, request_id, result)
        }
        Message::CheckHealth => dashboard::handle_check_health(state),
        Message::HealthChecked { request_id, result } => {
            dashboard::handle_health_checked(state, request_id, result)
        }
        Message::SelectPrev => dashboard::handle_select(state, |cur, _| cur.saturating_sub(1)),
        Message::SelectNext => dashboard::handle_select(state, |cur, _| cur + 1),
        Message::SelectFirst => dashboard::handle_select(state, |_, _| 0),
        Message::SelectLast => dashboard::handle_select(state, |_, len| len.saturating_sub(1)),
        Message::CycleStatusFilter => dashboard::handle_cycle_filter(state),
        Message::ToggleCreateForm => dashboard::handle_toggle_create_form(state),
        Message::HideCreateForm => dashboard::handle_hide_create_form(state),
        Message::Logout => dashboard::handle_logout(state),
        Message::TestCreated => dashboard::handle_test_created(state),
        Message::TestUpdated => dashboard::handle_test_updated(state),

        // ─────────────────────────────────────────────────────────
        // Create Form
        // ─────────────────────────────────────────────────────────
        Message::CreateFormInput(c) => create_form::handle_input(state, c),
        Message::CreateFormBackspace => create_form::handle_backspace(state),
        Message::CreateFormNextField => create_form::handle_move_focus(state, true),
        Message::CreateFormPrevField => create_form::handle_move_focus(state, false),
        Message::CreateFormCycle { forward } => create_form::handle_cycle(state, forward),
        Message::CreateFormActivate => create_form::handle_activate(state),
        Message::CreateFormSubmit => create_form::handle_submit(state),
        Message::CreateFormCancel => create_form::handle_cancel(state),
        Message::CreateTestFinished { request_id, result } => {
            create_form::handle_finished(state, request_id, result)
        }

        // ─────────────────────────────────────────────────────────
        // Table Editing
        // ─────────────────────────────────────────────────────────
        Message::StartEdit => table::handle_start_edit(state),
        Message::EditInput(c) => table::handle_input(state, c),
        Message::EditBackspace => table::handle_backspace(state),
        Message::EditToggleFocus => table::handle_toggle_focus(state),
        Message::EditCycleStatus { forward } => table::handle_cycle_status(state, forward),
        Message::SaveEdit => table::handle_save(state),
        Message::CancelEdit => table::handle_cancel(state),
        Message::UpdateTestFinished { request_id, result } => {
            table::handle_finished(state, request_id, result)
        }
    }
}
