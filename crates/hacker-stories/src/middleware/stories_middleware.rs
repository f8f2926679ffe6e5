//! StoriesMiddleware - loads the story list when the screen mounts
//!
//! On `Lifecycle::Mounted` the fetch starts on the tokio runtime and its
//! outcome comes back through the dispatcher. On `Lifecycle::Unmounted` an
//! in-flight fetch is cancelled so a late result never reaches the store.

use crate::actions::{Action, FetchAction, LifecycleAction, StoriesAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::story_source::{spawn_fetch, FetchHandle, MockStorySource};
use tokio::runtime::Handle;

pub struct StoriesMiddleware {
    runtime: Handle,
    source: MockStorySource,
    mounted: bool,
    fetch: Option<FetchHandle>,
}

impl StoriesMiddleware {
    pub fn new(runtime: Handle, source: MockStorySource) -> Self {
        Self {
            runtime,
            source,
            mounted: false,
            fetch: None,
        }
    }

    fn start_fetch(&mut self, dispatcher: &Dispatcher) {
        dispatcher.dispatch(Action::Fetch(FetchAction::Started));

        let dispatcher = dispatcher.clone();
        let handle = spawn_fetch(&self.runtime, self.source.clone(), move |result| {
            match result {
                Ok(stories) => {
                    log::info!("Fetched {} stories", stories.len());
                    dispatcher.dispatch(Action::Stories(StoriesAction::Set(stories)));
                    dispatcher.dispatch(Action::Fetch(FetchAction::Succeeded));
                }
                Err(e) => {
                    dispatcher.dispatch(Action::Fetch(FetchAction::Failed(e.to_string())));
                }
            }
        });

        self.fetch = Some(handle);
    }

    fn cancel_fetch(&mut self) {
        if let Some(handle) = self.fetch.take() {
            if handle.is_cancelled() {
                log::debug!("Story fetch already cancelled");
            } else if !handle.is_finished() {
                log::info!("Cancelling in-flight story fetch");
                handle.cancel();
            }
        }
    }
}

impl Middleware for StoriesMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Lifecycle(LifecycleAction::Mounted) => {
                if self.mounted {
                    log::warn!("Stories screen mounted twice, not fetching again");
                } else {
                    self.mounted = true;
                    self.start_fetch(dispatcher);
                }
            }
            Action::Lifecycle(LifecycleAction::Unmounted) => {
                self.mounted = false;
                self.cancel_fetch();
            }
            // A result can be queued just before the fetch is cancelled
            Action::Stories(StoriesAction::Set(_))
            | Action::Fetch(FetchAction::Succeeded | FetchAction::Failed(_))
                if !self.mounted =>
            {
                log::debug!("Dropping fetch result after unmount: {:?}", action);
                return false;
            }
            _ => {}
        }

        true
    }
}

impl Drop for StoriesMiddleware {
    fn drop(&mut self) {
        self.cancel_fetch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::Story;
    use std::sync::mpsc;
    use std::time::Duration;

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap()
    }

    #[test]
    fn test_mount_starts_loading_immediately() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware =
            StoriesMiddleware::new(rt.handle().clone(), MockStorySource::new(Duration::ZERO));

        middleware.handle(
            &Action::Lifecycle(LifecycleAction::Mounted),
            &AppState::default(),
            &dispatcher,
        );

        let first = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(first, Action::Fetch(FetchAction::Started)));

        let second = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(second, Action::Stories(StoriesAction::Set(ref s)) if s.len() == 2));

        let third = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        assert!(matches!(third, Action::Fetch(FetchAction::Succeeded)));
    }

    #[test]
    fn test_second_mount_does_not_refetch() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = StoriesMiddleware::new(
            rt.handle().clone(),
            MockStorySource::new(Duration::from_secs(10)),
        );

        let mounted = Action::Lifecycle(LifecycleAction::Mounted);
        middleware.handle(&mounted, &AppState::default(), &dispatcher);
        middleware.handle(&mounted, &AppState::default(), &dispatcher);

        let started = rx
            .try_iter()
            .filter(|a| matches!(a, Action::Fetch(FetchAction::Started)))
            .count();
        assert_eq!(started, 1);
    }

    #[test]
    fn test_unmount_discards_late_result() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = StoriesMiddleware::new(
            rt.handle().clone(),
            MockStorySource::new(Duration::from_millis(100)),
        );

        middleware.handle(
            &Action::Lifecycle(LifecycleAction::Mounted),
            &AppState::default(),
            &dispatcher,
        );
        middleware.handle(
            &Action::Lifecycle(LifecycleAction::Unmounted),
            &AppState::default(),
            &dispatcher,
        );

        std::thread::sleep(Duration::from_millis(300));
        let actions: Vec<Action> = rx.try_iter().collect();
        assert_eq!(actions.len(), 1);
        assert!(matches!(actions[0], Action::Fetch(FetchAction::Started)));
    }

    #[test]
    fn test_results_after_unmount_are_swallowed() {
        let rt = runtime();
        let (tx, _rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = StoriesMiddleware::new(
            rt.handle().clone(),
            MockStorySource::new(Duration::from_secs(10)),
        );
        let state = AppState::default();

        middleware.handle(&Action::Lifecycle(LifecycleAction::Mounted), &state, &dispatcher);
        let set = Action::Stories(StoriesAction::Set(vec![Story::new(0, "React", "")]));
        assert!(middleware.handle(&set, &state, &dispatcher));

        middleware.handle(&Action::Lifecycle(LifecycleAction::Unmounted), &state, &dispatcher);

        // Already queued when the fetch was cancelled
        assert!(!middleware.handle(&set, &state, &dispatcher));
        assert!(!middleware.handle(
            &Action::Fetch(FetchAction::Succeeded),
            &state,
            &dispatcher
        ));
        assert!(!middleware.handle(
            &Action::Fetch(FetchAction::Failed("late".into())),
            &state,
            &dispatcher
        ));
        // Removals still reach the reducer
        let remove = Action::Stories(StoriesAction::Remove(Story::new(0, "React", "")));
        assert!(middleware.handle(&remove, &state, &dispatcher));
    }

    #[test]
    fn test_failure_reports_reason() {
        let rt = runtime();
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = StoriesMiddleware::new(
            rt.handle().clone(),
            MockStorySource::new(Duration::ZERO).failing(true),
        );

        middleware.handle(
            &Action::Lifecycle(LifecycleAction::Mounted),
            &AppState::default(),
            &dispatcher,
        );

        let _started = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        let failed = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(
            failed,
            Action::Fetch(FetchAction::Failed(ref reason)) if reason == "simulated network failure"
        ));
    }
}
