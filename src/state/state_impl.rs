use super::error::StateError;
use super::navigation::Focus;
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::hn::{HnError, Story};
use crate::logger::LogBuffer;
use crate::storage::{KeyValueStore, MemoryStore, QueryStore, SEARCH_TERM_KEY};
use crate::stories::{FetchTicket, StoriesController, StoriesState};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::TableState;

/// The persisted search term over whichever store the application uses.
///
pub type SearchTerm = QueryStore<Box<dyn KeyValueStore + Send>>;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    search_term: SearchTerm,
    stories: StoriesController,
    current_focus: Focus,
    stories_table_state: TableState,
    spinner_index: usize,
    log_buffer: LogBuffer,
    show_log: bool,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            search_term: QueryStore::open(Box::new(MemoryStore::new()), SEARCH_TERM_KEY, ""),
            stories: StoriesController::new(),
            current_focus: Focus::Search,
            stories_table_state: TableState::default(),
            spinner_index: 0,
            log_buffer: LogBuffer::default(),
            show_log: true,
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new instance with the given network sender, search term, log
    /// buffer and theme.
    ///
    pub fn new(
        net_sender: NetworkEventSender,
        search_term: SearchTerm,
        log_buffer: LogBuffer,
        theme: Theme,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            search_term,
            log_buffer,
            theme,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Return the current search term.
    ///
    pub fn get_search_term(&self) -> &str {
        self.search_term.get()
    }

    /// Change the search term, persisting it and starting a new search if it
    /// changed.
    ///
    pub fn set_search_term(&mut self, term: &str) -> &mut Self {
        if self.search_term.set(term) {
            self.search();
        }
        self
    }

    /// Append a character to the search term.
    ///
    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        let mut term = self.get_search_term().to_owned();
        term.push(c);
        self.set_search_term(&term)
    }

    /// Remove the last character of the search term.
    ///
    pub fn remove_search_char(&mut self) -> &mut Self {
        let mut term = self.get_search_term().to_owned();
        if term.pop().is_some() {
            self.set_search_term(&term);
        }
        self
    }

    /// Clear the search term.
    ///
    pub fn clear_search_term(&mut self) -> &mut Self {
        self.set_search_term("")
    }

    /// Start a search for the current term, superseding any search in
    /// flight.
    ///
    pub fn search(&mut self) -> &mut Self {
        self.stories_table_state.select(None);
        let term = self.search_term.get().to_owned();
        if let Some(FetchTicket { token, query }) = self.stories.begin_fetch(&term) {
            info!("Searching stories for '{}'...", query);
            self.dispatch(NetworkEvent::Search { token, query });
        }
        self
    }

    /// Hand back the outcome of the search identified by the token. Returns
    /// whether it was still current.
    ///
    pub fn settle_search(&mut self, token: u64, outcome: Result<Vec<Story>, HnError>) -> bool {
        let applied = self.stories.settle(token, outcome);
        if applied {
            self.select_first_story();
        }
        applied
    }

    /// Return the stories display state.
    ///
    pub fn get_stories(&self) -> &StoriesState {
        self.stories.state()
    }

    /// Return the total comment count of the displayed stories.
    ///
    pub fn get_total_comments(&self) -> u64 {
        self.stories.total_comments()
    }

    /// Return the table state for the stories table.
    ///
    pub fn get_stories_table_state(&mut self) -> &mut TableState {
        &mut self.stories_table_state
    }

    /// Return the selected story, if any.
    ///
    pub fn get_selected_story(&self) -> Option<&Story> {
        self.stories_table_state
            .selected()
            .and_then(|index| self.stories.state().stories.get(index))
    }

    fn select_first_story(&mut self) {
        if self.stories.state().stories.is_empty() {
            self.stories_table_state.select(None);
        } else {
            self.stories_table_state.select(Some(0));
        }
    }

    /// Activate the next story.
    ///
    pub fn next_story_index(&mut self) -> &mut Self {
        let len = self.stories.state().stories.len();
        if len == 0 {
            self.stories_table_state.select(None);
            return self;
        }
        let next = match self.stories_table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.stories_table_state.select(Some(next));
        self
    }

    /// Activate the previous story.
    ///
    pub fn previous_story_index(&mut self) -> &mut Self {
        let len = self.stories.state().stories.len();
        if len == 0 {
            self.stories_table_state.select(None);
            return self;
        }
        let prev = match self.stories_table_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.stories_table_state.select(Some(prev));
        self
    }

    /// Remove the selected story from the list, keeping the selection on the
    /// same row where possible. Never triggers a search.
    ///
    pub fn remove_selected_story(&mut self) -> Result<Story, StateError> {
        let story = self
            .get_selected_story()
            .cloned()
            .ok_or(StateError::NoStorySelected)?;
        self.stories.remove(&story);
        let len = self.stories.state().stories.len();
        let selected = self.stories_table_state.selected().unwrap_or(0);
        if len == 0 {
            self.stories_table_state.select(None);
        } else if selected >= len {
            self.stories_table_state.select(Some(len - 1));
        }
        Ok(story)
    }

    /// Return the current focus.
    ///
    pub fn current_focus(&self) -> &Focus {
        &self.current_focus
    }

    /// Change focus to the search box.
    ///
    pub fn focus_search(&mut self) -> &mut Self {
        self.current_focus = Focus::Search;
        self
    }

    /// Change focus to the stories list, selecting the first story if none
    /// is selected.
    ///
    pub fn focus_stories(&mut self) -> &mut Self {
        self.current_focus = Focus::Stories;
        if self.stories_table_state.selected().is_none() {
            self.select_first_story();
        }
        self
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Toggle visibility of the log panel.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Return whether the log panel is visible.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    /// Return the most recent log entries, oldest first.
    ///
    pub fn get_log_entries(&self, limit: usize) -> Vec<String> {
        match self.log_buffer.lock() {
            Ok(entries) => {
                let skip = entries.len().saturating_sub(limit);
                entries.iter().skip(skip).cloned().collect()
            }
            Err(_) => vec![],
        }
    }

    /// Dispatches an asynchronous network event.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        if let Some(net_sender) = &self.net_sender {
            if let Err(err) = net_sender.send(event) {
                error!("Received error from network dispatch: {}", err);
            }
        }
    }
}
