//! Message processing: runs the TEA update loop and dispatches actions

use labtrack_api::LabApi;
use tokio::sync::mpsc;

use crate::actions::{handle_action, RequestTaskMap};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed immediately, in order; each step's
/// action is dispatched before its follow-up runs.
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    api: &A,
    msg_tx: &mpsc::Sender<Message>,
    tasks: &RequestTaskMap,
) where
    A: LabApi + Clone + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, api, msg_tx.clone(), tasks);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}
