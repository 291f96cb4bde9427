use super::{reduce, total_comments, StoriesAction, StoriesState};
use crate::hn::{HnError, Story};
use log::*;

/// A fetch the controller wants performed. The token must be handed back to
/// `StoriesController::settle` together with the outcome.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FetchTicket {
    pub token: u64,
    pub query: String,
}

/// Owns the stories state and the token of the latest fetch. All state
/// changes go through `reduce`.
///
#[derive(Debug, Default)]
pub struct StoriesController {
    state: StoriesState,
    latest_token: u64,
    total_comments: u64,
}

impl StoriesController {
    /// Return a new idle controller.
    ///
    pub fn new() -> Self {
        StoriesController::default()
    }

    /// Return the current display state.
    ///
    pub fn state(&self) -> &StoriesState {
        &self.state
    }

    /// Return the total comment count of the displayed stories.
    ///
    pub fn total_comments(&self) -> u64 {
        self.total_comments
    }

    /// Return the token of the most recently started fetch.
    ///
    #[cfg(test)]
    pub fn latest_token(&self) -> u64 {
        self.latest_token
    }

    /// Start a fetch for the query, superseding any fetch in flight. An empty
    /// query resolves immediately to an empty list and returns `None`, so no
    /// request is made.
    ///
    pub fn begin_fetch(&mut self, query: &str) -> Option<FetchTicket> {
        self.latest_token += 1;
        self.dispatch(StoriesAction::FetchInitialized);
        if query.is_empty() {
            debug!("Empty query, skipping search request.");
            self.dispatch(StoriesAction::FetchSucceeded(vec![]));
            return None;
        }
        Some(FetchTicket {
            token: self.latest_token,
            query: query.to_owned(),
        })
    }

    /// Apply the outcome of the fetch identified by `token`. Outcomes of
    /// superseded fetches are discarded. Returns whether the outcome was
    /// applied.
    ///
    pub fn settle(&mut self, token: u64, outcome: Result<Vec<Story>, HnError>) -> bool {
        if token != self.latest_token {
            debug!(
                "Discarding settlement of superseded fetch {} (latest is {}).",
                token, self.latest_token
            );
            return false;
        }
        match outcome {
            Ok(stories) => {
                info!("Loaded {} stories.", stories.len());
                self.dispatch(StoriesAction::FetchSucceeded(stories));
            }
            Err(e) => {
                error!("Failed to fetch stories: {}", e);
                self.dispatch(StoriesAction::FetchFailed);
            }
        }
        true
    }

    /// Remove the story from the list. Never triggers a fetch.
    ///
    pub fn remove(&mut self, story: &Story) {
        debug!("Removing story {} ('{}')...", story.id, story.title);
        self.dispatch(StoriesAction::StoryRemoved(story.clone()));
    }

    fn dispatch(&mut self, action: StoriesAction) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        self.total_comments = total_comments(&self.state.stories);
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{story_one, story_two};
    use super::super::Status;
    use super::*;

    fn failure() -> HnError {
        HnError::MissingField { field: "hits" }
    }

    #[test]
    fn new_controller_is_idle() {
        let controller = StoriesController::new();
        assert_eq!(controller.state().status, Status::Idle);
        assert!(controller.state().stories.is_empty());
        assert_eq!(controller.total_comments(), 0);
        assert_eq!(controller.latest_token(), 0);
    }

    #[test]
    fn begin_fetch_starts_loading() {
        let mut controller = StoriesController::new();
        let ticket = controller.begin_fetch("React").unwrap();
        assert_eq!(ticket.query, "React");
        assert_eq!(ticket.token, controller.latest_token());
        assert!(controller.state().is_loading());
        assert!(!controller.state().is_error());
    }

    #[test]
    fn begin_fetch_with_empty_query_skips_request() {
        let mut controller = StoriesController::new();
        controller.begin_fetch("React");
        assert!(controller.begin_fetch("").is_none());
        let state = controller.state();
        assert!(state.stories.is_empty());
        assert!(!state.is_loading());
        assert!(!state.is_error());
    }

    #[test]
    fn settle_success_loads_stories() {
        let mut controller = StoriesController::new();
        let ticket = controller.begin_fetch("React").unwrap();
        assert!(controller.settle(ticket.token, Ok(vec![story_one()])));
        assert_eq!(controller.state().status, Status::Loaded);
        assert_eq!(controller.state().stories, vec![story_one()]);
        assert_eq!(controller.total_comments(), 3);
    }

    #[test]
    fn settle_failure_marks_failed() {
        let mut controller = StoriesController::new();
        let ticket = controller.begin_fetch("React").unwrap();
        assert!(controller.settle(ticket.token, Err(failure())));
        assert_eq!(controller.state().status, Status::Failed);
        assert!(controller.state().stories.is_empty());
        assert!(!controller.state().is_loading());
    }

    #[test]
    fn failure_after_success_lands_on_empty_list() {
        let mut controller = StoriesController::new();
        let first = controller.begin_fetch("React").unwrap();
        controller.settle(first.token, Ok(vec![story_one(), story_two()]));
        let second = controller.begin_fetch("Redux").unwrap();
        controller.settle(second.token, Err(failure()));
        assert!(controller.state().is_error());
        assert!(controller.state().stories.is_empty());
        assert_eq!(controller.total_comments(), 0);
    }

    #[test]
    fn superseded_success_is_discarded() {
        let mut controller = StoriesController::new();
        let react = controller.begin_fetch("React").unwrap();
        let redux = controller.begin_fetch("Redux").unwrap();

        assert!(controller.settle(redux.token, Ok(vec![story_two()])));
        assert!(!controller.settle(react.token, Ok(vec![story_one()])));

        assert_eq!(controller.state().stories, vec![story_two()]);
        assert_eq!(controller.total_comments(), 2);
    }

    #[test]
    fn superseded_failure_is_discarded() {
        let mut controller = StoriesController::new();
        let react = controller.begin_fetch("React").unwrap();
        let redux = controller.begin_fetch("Redux").unwrap();

        assert!(!controller.settle(react.token, Err(failure())));
        assert!(controller.state().is_loading());

        controller.settle(redux.token, Ok(vec![story_two()]));
        assert_eq!(controller.state().status, Status::Loaded);
    }

    #[test]
    fn settlement_after_empty_query_is_discarded() {
        let mut controller = StoriesController::new();
        let react = controller.begin_fetch("React").unwrap();
        controller.begin_fetch("");
        assert!(!controller.settle(react.token, Ok(vec![story_one()])));
        assert!(controller.state().stories.is_empty());
    }

    #[test]
    fn tokens_increase_monotonically() {
        let mut controller = StoriesController::new();
        let first = controller.begin_fetch("a").unwrap();
        controller.begin_fetch("");
        let third = controller.begin_fetch("abc").unwrap();
        assert!(third.token > first.token);
        assert_eq!(third.token, 3);
    }

    #[test]
    fn remove_first_of_two_keeps_second() {
        let mut controller = StoriesController::new();
        let ticket = controller.begin_fetch("React").unwrap();
        controller.settle(ticket.token, Ok(vec![story_one(), story_two()]));

        controller.remove(&story_one());

        assert_eq!(controller.state().stories, vec![story_two()]);
        assert_eq!(controller.state().status, Status::Loaded);
        assert_eq!(controller.total_comments(), 2);
        assert_eq!(controller.latest_token(), ticket.token);
    }

    #[test]
    fn remove_absent_story_is_noop() {
        let mut controller = StoriesController::new();
        let ticket = controller.begin_fetch("React").unwrap();
        controller.settle(ticket.token, Ok(vec![story_one()]));
        let before = controller.state().clone();

        controller.remove(&story_two());

        assert_eq!(*controller.state(), before);
    }
}
