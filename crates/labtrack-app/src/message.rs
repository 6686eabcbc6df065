//! Message types for the application (TEA pattern)

use labtrack_api::LoginOutcome;
use labtrack_core::TestRecord;

use crate::input_key::InputKey;
use crate::request::{RequestFailure, RequestId};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Login
    // ─────────────────────────────────────────────────────────
    /// Type a character into the focused login field
    LoginInput(char),
    LoginBackspace,
    LoginNextField,
    LoginPrevField,
    LoginSubmit,

    /// `POST /login` finished
    LoginFinished {
        request_id: RequestId,
        result: Result<LoginOutcome, RequestFailure>,
    },

    /// Login accepted; the app switches to the dashboard
    LoginSucceeded,

    // ─────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────
    /// Re-fetch the full test list
    RefreshTests,

    /// `GET /tests` finished
    TestsLoaded {
        request_id: RequestId,
        result: Result<Vec<TestRecord>, RequestFailure>,
    },

    /// Probe backend health
    CheckHealth,

    /// `GET /health` finished
    HealthChecked {
        request_id: RequestId,
        result: Result<bool, RequestFailure>,
    },

    SelectPrev,
    SelectNext,
    SelectFirst,
    SelectLast,

    /// Advance the table's status filter (All → Pending → ... → All)
    CycleStatusFilter,

    /// Show or hide the create form
    ToggleCreateForm,

    /// Hide the create form (sent by the form itself on cancel)
    HideCreateForm,

    /// Leave the dashboard and return to the login screen
    Logout,

    // ─────────────────────────────────────────────────────────
    // Child notifications
    // ─────────────────────────────────────────────────────────
    /// The create form stored a new record
    TestCreated,

    /// The table stored an edited record
    TestUpdated,

    // ─────────────────────────────────────────────────────────
    // Create Form
    // ─────────────────────────────────────────────────────────
    CreateFormInput(char),
    CreateFormBackspace,
    CreateFormNextField,
    CreateFormPrevField,

    /// Cycle the focused select field
    CreateFormCycle { forward: bool },

    /// Enter on the focused field or button
    CreateFormActivate,

    /// Submit the draft
    CreateFormSubmit,

    /// Cancel button or Esc
    CreateFormCancel,

    /// `POST /tests` finished
    CreateTestFinished {
        request_id: RequestId,
        result: Result<(), RequestFailure>,
    },

    // ─────────────────────────────────────────────────────────
    // Table Editing
    // ─────────────────────────────────────────────────────────
    /// Put the selected row into edit mode
    StartEdit,
    EditInput(char),
    EditBackspace,

    /// Switch focus between the status select and the result field
    EditToggleFocus,

    EditCycleStatus { forward: bool },
    SaveEdit,
    CancelEdit,

    /// `PUT /tests/{id}` finished
    UpdateTestFinished {
        request_id: RequestId,
        result: Result<(), RequestFailure>,
    },
}
