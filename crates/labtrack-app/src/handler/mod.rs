//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen and focus
//! - `login`: Login form handlers
//! - `dashboard`: List fetching, health, selection, child notifications
//! - `create_form`: Create form handlers
//! - `table`: Inline edit handlers

pub(crate) mod create_form;
pub(crate) mod dashboard;
pub(crate) mod keys;
pub(crate) mod login;
pub(crate) mod table;
pub(crate) mod update;


use labtrack_core::{Credentials, StatusUpdate, TestDraft, TestId};

use crate::message::Message;
use crate::request::RequestId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// `POST /login`
    Login {
        request_id: RequestId,
        credentials: Credentials,
    },

    /// `GET /tests`
    FetchTests { request_id: RequestId },

    /// `GET /health`
    CheckHealth { request_id: RequestId },

    /// `POST /tests`
    CreateTest {
        request_id: RequestId,
        draft: TestDraft,
    },

    /// `PUT /tests/{id}`
    UpdateTest {
        request_id: RequestId,
        id: TestId,
        update: StatusUpdate,
    },

    /// Abort in-flight requests; their results are never delivered
    CancelRequests { request_ids: Vec<RequestId> },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Run `action`, then continue with `msg`
    pub fn action_then(action: UpdateAction, msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: Some(action),
        }
    }

    /// Cancel `request_ids` if there are any
    pub fn cancel(request_ids: Vec<RequestId>) -> Self {
        if request_ids.is_empty() {
            Self::none()
        } else {
            Self::action(UpdateAction::CancelRequests { request_ids })
        }
    }
}
