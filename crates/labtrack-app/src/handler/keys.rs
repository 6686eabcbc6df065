//! Key event handlers for each screen and focus

use crate::create_form_state::CreateField;
use crate::dashboard_state::{DashboardFocus, DashboardState};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Screen};
use crate::table_state::{EditFocus, EditState};

/// Convert key events to messages based on the mounted screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match &state.screen {
        Screen::Login(_) => handle_key_login(key),
        Screen::Dashboard(dash) => match dash.focus() {
            DashboardFocus::Table => handle_key_table(key),
            DashboardFocus::CreateForm => handle_key_create_form(dash, key),
            DashboardFocus::EditRow => handle_key_edit_row(dash, key),
        },
    }
}

/// Handle key events on the login screen
fn handle_key_login(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Down => Some(Message::LoginNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::LoginPrevField),
        InputKey::Enter => Some(Message::LoginSubmit),
        InputKey::Backspace => Some(Message::LoginBackspace),
        InputKey::Esc => Some(Message::Quit),
        InputKey::Char(c) => Some(Message::LoginInput(c)),
        _ => None,
    }
}

/// Handle key events on the dashboard when the table has focus
fn handle_key_table(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),

        // Navigation
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),

        InputKey::Enter | InputKey::Char('e') => Some(Message::StartEdit),
        InputKey::Char('n') => Some(Message::ToggleCreateForm),
        InputKey::Char('r') => Some(Message::RefreshTests),
        InputKey::Char('f') => Some(Message::CycleStatusFilter),
        InputKey::Char('L') => Some(Message::Logout),
        _ => None,
    }
}

/// Handle key events while the create form is shown
fn handle_key_create_form(dash: &DashboardState, key: InputKey) -> Option<Message> {
    let focus = dash.create_form.as_ref()?.focus;

    match key {
        InputKey::Esc => Some(Message::CreateFormCancel),
        InputKey::Tab | InputKey::Down => Some(Message::CreateFormNextField),
        InputKey::BackTab | InputKey::Up => Some(Message::CreateFormPrevField),
        InputKey::Enter => Some(Message::CreateFormActivate),

        // Selects cycle; text fields take characters
        InputKey::Left if focus.is_select() => Some(Message::CreateFormCycle { forward: false }),
        InputKey::Right if focus.is_select() => Some(Message::CreateFormCycle { forward: true }),
        InputKey::Char(' ') if focus.is_select() => {
            Some(Message::CreateFormCycle { forward: true })
        }
        InputKey::Char(' ') if matches!(focus, CreateField::Submit | CreateField::Cancel) => {
            Some(Message::CreateFormActivate)
        }
        InputKey::Char(c) if focus.is_text() => Some(Message::CreateFormInput(c)),
        InputKey::Backspace if focus.is_text() => Some(Message::CreateFormBackspace),
        _ => None,
    }
}

/// Handle key events while a row is in edit mode
fn handle_key_edit_row(dash: &DashboardState, key: InputKey) -> Option<Message> {
    let EditState::Editing { focus, .. } = &dash.table.edit else {
        return None;
    };

    match (key, focus) {
        (InputKey::Esc, _) => Some(Message::CancelEdit),
        (InputKey::Enter, _) => Some(Message::SaveEdit),
        (InputKey::Tab | InputKey::BackTab, _) => Some(Message::EditToggleFocus),

        (InputKey::Left, EditFocus::Status) => Some(Message::EditCycleStatus { forward: false }),
        (InputKey::Right | InputKey::Char(' '), EditFocus::Status) => {
            Some(Message::EditCycleStatus { forward: true })
        }

        (InputKey::Char(c), EditFocus::Result) => Some(Message::EditInput(c)),
        (InputKey::Backspace, EditFocus::Result) => Some(Message::EditBackspace),
        _ => None,
    }
}
