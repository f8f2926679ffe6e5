//! Mock story source
//!
//! Stands in for a remote API: resolves with a fixed response after an
//! artificial delay. Each fetch runs as a task on the tokio runtime and is
//! controlled through a [`FetchHandle`].

use crate::domain_models::Story;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Response body served by the mock source
pub const MOCK_STORIES_RESPONSE: &str = r#"{
  "data": {
    "stories": [
      {
        "title": "React",
        "url": "https://reactjs.org/",
        "author": "Jordan Walke",
        "num_comments": 3,
        "points": 4,
        "objectID": 0
      },
      {
        "title": "Redux",
        "url": "https://redux.js.org/",
        "author": "Dan Abramov, Andrew Clark",
        "num_comments": 2,
        "points": 5,
        "objectID": 1
      }
    ]
  }
}"#;

/// Default simulated latency
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("simulated network failure")]
    Simulated,

    #[error("malformed stories response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct StoriesResponse {
    data: StoriesPayload,
}

#[derive(Debug, Deserialize)]
struct StoriesPayload {
    stories: Vec<Story>,
}

/// Story source answering from [`MOCK_STORIES_RESPONSE`]
#[derive(Debug, Clone)]
pub struct MockStorySource {
    delay: Duration,
    simulate_failure: bool,
}

impl Default for MockStorySource {
    fn default() -> Self {
        Self::new(DEFAULT_FETCH_DELAY)
    }
}

impl MockStorySource {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            simulate_failure: false,
        }
    }

    /// Make every fetch reject with [`FetchError::Simulated`]
    pub fn failing(mut self, simulate_failure: bool) -> Self {
        self.simulate_failure = simulate_failure;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the simulated latency, then resolve with the stories
    pub async fn fetch_stories(&self) -> Result<Vec<Story>, FetchError> {
        tokio::time::sleep(self.delay).await;

        if self.simulate_failure {
            return Err(FetchError::Simulated);
        }

        let response: StoriesResponse = serde_json::from_str(MOCK_STORIES_RESPONSE)?;
        Ok(response.data.stories)
    }
}

/// Handle to an in-flight fetch
///
/// Dropping the handle does not stop the fetch; call [`FetchHandle::cancel`]
/// to discard its result.
#[derive(Debug)]
pub struct FetchHandle {
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<()>,
}

impl FetchHandle {
    /// Stop the fetch; a result that is already on its way is dropped
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.task.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Run one fetch on `runtime` and hand its outcome to `on_done`
///
/// `on_done` is not called when the fetch was cancelled first.
pub fn spawn_fetch<F>(runtime: &Handle, source: MockStorySource, on_done: F) -> FetchHandle
where
    F: FnOnce(Result<Vec<Story>, FetchError>) + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let task_cancelled = Arc::clone(&cancelled);

    let task = runtime.spawn(async move {
        log::debug!("Fetching stories (delay {:?})", source.delay());
        let result = source.fetch_stories().await;

        if task_cancelled.load(Ordering::SeqCst) {
            log::debug!("Fetch was cancelled, discarding result");
            return;
        }

        on_done(result);
    });

    FetchHandle { cancelled, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_mock_response_holds_two_stories() {
        let rt = runtime();
        let stories = rt
            .block_on(MockStorySource::new(Duration::ZERO).fetch_stories())
            .unwrap();

        assert_eq!(stories.len(), 2);
        assert_eq!(stories[0].title, "React");
        assert_eq!(stories[0].object_id, 0);
        assert_eq!(stories[0].author, "Jordan Walke");
        assert_eq!(stories[1].title, "Redux");
        assert_eq!(stories[1].object_id, 1);
        assert_eq!(stories[1].points, 5);
    }

    #[test]
    fn test_failing_source_rejects() {
        let rt = runtime();
        let result = rt.block_on(
            MockStorySource::new(Duration::ZERO)
                .failing(true)
                .fetch_stories(),
        );
        assert!(matches!(result, Err(FetchError::Simulated)));
    }

    #[test]
    fn test_fetch_waits_for_delay() {
        let rt = runtime();
        let source = MockStorySource::new(Duration::from_millis(50));
        let started = std::time::Instant::now();
        rt.block_on(source.fetch_stories()).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_spawned_fetch_delivers_once() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();

        let handle = spawn_fetch(
            rt.handle(),
            MockStorySource::new(Duration::from_millis(10)),
            move |result| {
                tx.send(result.map(|stories| stories.len())).ok();
            },
        );

        let delivered = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(delivered.unwrap(), 2);
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
        assert!(!handle.is_cancelled());
    }

    #[test]
    fn test_cancelled_fetch_discards_result() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel::<usize>();

        let handle = spawn_fetch(
            rt.handle(),
            MockStorySource::new(Duration::from_millis(100)),
            move |result| {
                tx.send(result.map(|s| s.len()).unwrap_or(0)).ok();
            },
        );
        handle.cancel();

        assert!(handle.is_cancelled());
        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }
}
