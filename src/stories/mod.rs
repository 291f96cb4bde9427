//! Stories state machine.
//!
//! Fetch lifecycle events and user removals are modelled as actions and
//! funnelled through a single pure reducer. The controller in
//! `controller.rs` owns the state and decides which fetch settlements are
//! still current.

mod controller;

pub use controller::{FetchTicket, StoriesController};

use crate::hn::Story;

/// Lifecycle status of the stories list.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Display state produced by the reducer.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct StoriesState {
    pub stories: Vec<Story>,
    pub status: Status,
}

impl StoriesState {
    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn is_error(&self) -> bool {
        self.status == Status::Failed
    }
}

/// Events that drive the stories state. Modelled as things that happened
/// rather than setters.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum StoriesAction {
    FetchInitialized,
    FetchSucceeded(Vec<Story>),
    FetchFailed,
    StoryRemoved(Story),
}

/// Return the next state for the given action.
///
pub fn reduce(state: StoriesState, action: StoriesAction) -> StoriesState {
    match action {
        StoriesAction::FetchInitialized => StoriesState {
            stories: vec![],
            status: Status::Loading,
        },
        StoriesAction::FetchSucceeded(stories) => StoriesState {
            stories,
            status: Status::Loaded,
        },
        // Stories were cleared when the fetch began; nothing to restore.
        StoriesAction::FetchFailed => StoriesState {
            status: Status::Failed,
            ..state
        },
        StoriesAction::StoryRemoved(story) => {
            let mut stories = state.stories;
            if let Some(index) = stories.iter().position(|s| *s == story) {
                stories.remove(index);
            }
            StoriesState { stories, ..state }
        }
    }
}

/// Sum of comment counts across the given stories.
///
pub fn total_comments(stories: &[Story]) -> u64 {
    stories
        .iter()
        .fold(0u64, |total, story| total.saturating_add(story.num_comments))
}
