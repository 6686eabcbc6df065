//! Action handlers: UpdateAction dispatch and background request spawning
//!
//! Every backend call runs as its own tokio task that reports back with a
//! result [`Message`]. Tasks are tracked by [`RequestId`] so they can be
//! aborted; an aborted request never delivers its message.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use labtrack_api::LabApi;
use labtrack_core::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::Message;
use crate::request::{RequestFailure, RequestId};
use crate::UpdateAction;

/// In-flight request tasks by id
pub type RequestTaskMap = Arc<Mutex<HashMap<RequestId, JoinHandle<()>>>>;

pub(crate) fn lock_tasks(tasks: &RequestTaskMap) -> MutexGuard<'_, HashMap<RequestId, JoinHandle<()>>> {
    match tasks.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<A>(
    action: UpdateAction,
    api: &A,
    msg_tx: mpsc::Sender<Message>,
    tasks: &RequestTaskMap,
) where
    A: LabApi + Clone + Sync + 'static,
{
    match action {
        UpdateAction::Login {
            request_id,
            credentials,
        } => {
            let api = api.clone();
            spawn_request(tasks, request_id, async move {
                let result = api.login(&credentials).await.map_err(RequestFailure::from);
                send(&msg_tx, Message::LoginFinished { request_id, result }).await;
            });
        }

        UpdateAction::FetchTests { request_id } => {
            let api = api.clone();
            spawn_request(tasks, request_id, async move {
                let result = api.list_tests().await.map_err(RequestFailure::from);
                send(&msg_tx, Message::TestsLoaded { request_id, result }).await;
            });
        }

        UpdateAction::CheckHealth { request_id } => {
            let api = api.clone();
            spawn_request(tasks, request_id, async move {
                let result = api.health().await.map_err(RequestFailure::from);
                send(&msg_tx, Message::HealthChecked { request_id, result }).await;
            });
        }

        UpdateAction::CreateTest { request_id, draft } => {
            let api = api.clone();
            spawn_request(tasks, request_id, async move {
                let result = api.create_test(&draft).await.map_err(RequestFailure::from);
                send(&msg_tx, Message::CreateTestFinished { request_id, result }).await;
            });
        }

        UpdateAction::UpdateTest {
            request_id,
            id,
            update,
        } => {
            let api = api.clone();
            spawn_request(tasks, request_id, async move {
                let result = api
                    .update_test(&id, &update)
                    .await
                    .map_err(RequestFailure::from);
                send(&msg_tx, Message::UpdateTestFinished { request_id, result }).await;
            });
        }

        UpdateAction::CancelRequests { request_ids } => {
            cancel_requests(tasks, &request_ids);
        }
    }
}

/// Spawn a request task and track it under `request_id`
fn spawn_request<F>(tasks: &RequestTaskMap, request_id: RequestId, fut: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    debug!("Dispatching {}", request_id);
    let handle = tokio::spawn(fut);

    let mut map = lock_tasks(tasks);
    map.retain(|_, h| !h.is_finished());
    map.insert(request_id, handle);
}

/// Abort the given requests. Ids that already finished are ignored.
pub fn cancel_requests(tasks: &RequestTaskMap, request_ids: &[RequestId]) {
    let mut map = lock_tasks(tasks);
    for id in request_ids {
        if let Some(handle) = map.remove(id) {
            if !handle.is_finished() {
                debug!("Cancelled {}", id);
            }
            handle.abort();
        }
    }
}

/// Number of request tasks still running
pub fn in_flight(tasks: &RequestTaskMap) -> usize {
    lock_tasks(tasks)
        .values()
        .filter(|h| !h.is_finished())
        .count()
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.send(msg).await {
        warn!("{}, dropping request result", Error::channel_send(e.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labtrack_api::test_utils::{Endpoint, FakeLabApi};
    use labtrack_core::{Credentials, TestId};
    use std::time::Duration;

    fn setup() -> (RequestTaskMap, mpsc::Sender<Message>, mpsc::Receiver<Message>) {
        let (tx, rx) = mpsc::channel(16);
        (Arc::default(), tx, rx)
    }

    #[tokio::test]
    async fn test_fetch_reports_back_with_request_id() {
        let (tasks, tx, mut rx) = setup();
        let api = FakeLabApi::new();

        handle_action(
            UpdateAction::FetchTests {
                request_id: RequestId::new(7),
            },
            &api,
            tx,
            &tasks,
        );

        match rx.recv().await {
            Some(Message::TestsLoaded { request_id, result }) => {
                assert_eq!(request_id, RequestId::new(7));
                assert!(result.unwrap().is_empty());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_login_failure_is_summarized() {
        let (tasks, tx, mut rx) = setup();
        let api = FakeLabApi::new();
        api.fail_next(
            Endpoint::Login,
            labtrack_api::ApiError::rejected(503, None),
        );

        handle_action(
            UpdateAction::Login {
                request_id: RequestId::new(1),
                credentials: Credentials::new("admin", "password123"),
            },
            &api,
            tx,
            &tasks,
        );

        let Some(Message::LoginFinished { result, .. }) = rx.recv().await else {
            panic!("expected LoginFinished");
        };
        let failure = result.unwrap_err();
        assert_eq!(failure.server_message, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_request_never_reports() {
        let (tasks, tx, mut rx) = setup();
        let api = FakeLabApi::new();
        api.set_delay(Endpoint::UpdateTest, Duration::from_secs(5));

        handle_action(
            UpdateAction::UpdateTest {
                request_id: RequestId::new(3),
                id: TestId::Number(1),
                update: Default::default(),
            },
            &api,
            tx.clone(),
            &tasks,
        );
        tokio::task::yield_now().await;
        assert_eq!(in_flight(&tasks), 1);

        handle_action(
            UpdateAction::CancelRequests {
                request_ids: vec![RequestId::new(3)],
            },
            &api,
            tx,
            &tasks,
        );
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert!(rx.try_recv().is_err());
        assert_eq!(in_flight(&tasks), 0);
    }

    #[tokio::test]
    async fn test_cancel_unknown_id_is_noop() {
        let tasks: RequestTaskMap = Arc::default();
        cancel_requests(&tasks, &[RequestId::new(99)]);
        assert_eq!(in_flight(&tasks), 0);
    }
}
