//! labtrack-app - Application state and orchestration for the lab test tracker
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a single [`AppState`] model, [`Message`]s, a pure-ish
//! `update()` function returning [`UpdateAction`]s, and the [`Engine`] that
//! dispatches those actions as cancellable backend requests. Configuration
//! loading and signal handling live here too.
//!
//! Terminal types never appear in this crate; frontends translate their key
//! events into [`InputKey`].

pub mod actions;
pub mod config;
pub mod create_form_state;
pub mod dashboard_state;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod login_state;
pub mod message;
pub mod process;
pub mod request;
pub mod signals;
pub mod state;
pub mod table_state;

// Re-export primary types
pub use create_form_state::{CreateField, CreateFormState};
pub use dashboard_state::{DashboardFocus, DashboardState, HealthStatus, StatusFilter};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use login_state::{LoginField, LoginState};
pub use message::Message;
pub use request::{RequestFailure, RequestId};
pub use state::{AppPhase, AppState, Screen};
pub use table_state::{EditFocus, EditState, TableState};
