//! Engine - owns the TEA state, message channel and request tasks
//!
//! Frontends feed input into [`Engine::msg_sender`], call
//! [`Engine::drain_pending_messages`] once per frame and render from
//! [`Engine::state`].

use std::sync::Arc;
use std::time::Duration;

use labtrack_api::{HttpLabApi, LabApi};
use labtrack_core::prelude::*;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::actions::{self, lock_tasks, RequestTaskMap};
use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// How long shutdown waits for aborted tasks to wind down
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Orchestration engine for the lab test tracker.
///
/// Generic over the backend so tests can substitute an in-memory one.
pub struct Engine<A = HttpLabApi> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, request tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// In-flight request tasks
    pub request_tasks: RequestTaskMap,

    /// Loaded settings
    pub settings: Settings,

    api: A,
    signal_task: Option<JoinHandle<()>>,
}

impl Engine<HttpLabApi> {
    /// Create an engine talking HTTP to `settings.api.base_url`.
    ///
    /// Spawns the OS signal handler, so must be called inside a tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        let api = HttpLabApi::new(&settings.api.base_url, settings.api.timeout())?;
        info!("Backend: {}", api.base_url());

        let mut engine = Self::with_api(settings, api);
        engine.signal_task = Some(signals::spawn_signal_handler(engine.msg_tx.clone()));
        Ok(engine)
    }
}

impl<A> Engine<A>
where
    A: LabApi + Clone + Sync + 'static,
{
    /// Create an engine over an arbitrary backend (no signal handler)
    pub fn with_api(settings: Settings, api: A) -> Self {
        let state = AppState::with_settings(&settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);

        Self {
            state,
            msg_tx,
            msg_rx,
            request_tasks: Arc::default(),
            settings,
            api,
            signal_task: None,
        }
    }

    /// Process a single message through the TEA update cycle
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(
            &mut self.state,
            msg,
            &self.api,
            &self.msg_tx,
            &self.request_tasks,
        );
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it, with any follow-ups.
    ///
    /// Returns `false` once every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Number of backend requests still running
    pub fn in_flight_requests(&self) -> usize {
        actions::in_flight(&self.request_tasks)
    }

    /// Abort every in-flight request and the signal handler
    pub async fn shutdown(&mut self) {
        if let Some(task) = self.signal_task.take() {
            task.abort();
        }

        let tasks: Vec<_> = lock_tasks(&self.request_tasks).drain().collect();
        for (request_id, handle) in tasks {
            handle.abort();
            match tokio::time::timeout(SHUTDOWN_GRACE, handle).await {
                Ok(Ok(())) => debug!("{} had already finished", request_id),
                Ok(Err(e)) if e.is_cancelled() => debug!("{} cancelled", request_id),
                Ok(Err(e)) => warn!("{} panicked: {}", request_id, e),
                Err(_) => warn!("{} did not stop in time", request_id),
            }
        }
        info!("Engine shut down");
    }
}
