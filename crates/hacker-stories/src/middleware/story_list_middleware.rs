//! StoryListMiddleware - resolves row commands against the story under the cursor

use crate::actions::{Action, StoriesAction, StoryListAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use crate::utils::browser::open_url;
use tokio::runtime::Handle;

type UrlOpener = Box<dyn FnMut(String) + Send>;

pub struct StoryListMiddleware {
    open: UrlOpener,
}

impl StoryListMiddleware {
    /// Open links in the system browser, spawned on `runtime`
    pub fn new(runtime: Handle) -> Self {
        Self::with_opener(move |url| {
            runtime.spawn(open_url(url));
        })
    }

    pub fn with_opener(open: impl FnMut(String) + Send + 'static) -> Self {
        Self {
            open: Box::new(open),
        }
    }
}

impl Middleware for StoryListMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::StoryList(StoryListAction::DismissSelected) => {
                match state.selected_story() {
                    Some(story) => {
                        log::info!("Dismissing story {} ({})", story.object_id, story.title);
                        dispatcher.dispatch(Action::Stories(StoriesAction::Remove(story.clone())));
                    }
                    None => log::debug!("Nothing selected to dismiss"),
                }
                false
            }
            Action::StoryList(StoryListAction::OpenSelected) => {
                match state.selected_story() {
                    Some(story) if !story.url.is_empty() => {
                        log::info!("Opening {}", story.url);
                        (self.open)(story.url.clone());
                    }
                    Some(story) => log::warn!("Story {} has no link", story.object_id),
                    None => log::debug!("Nothing selected to open"),
                }
                false
            }
            _ => true,
        }
    }
}
