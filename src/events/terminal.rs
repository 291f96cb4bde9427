use crate::state::{Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                if state.get_stories().is_loading() {
                    state.advance_spinner_index();
                }
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    match state.current_focus() {
        Focus::Search => handle_search_key(state, key),
        Focus::Stories => handle_stories_key(state, key),
    }
}

fn handle_search_key(state: &mut State, key: KeyEvent) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            state.clear_search_term();
        }
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            state.add_search_char(c);
        }
        (KeyCode::Backspace, _) => {
            state.remove_search_char();
        }
        (KeyCode::Tab, _) | (KeyCode::Down, _) | (KeyCode::Enter, _) => {
            state.focus_stories();
        }
        (KeyCode::Esc, _) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        _ => {}
    }
    true
}

fn handle_stories_key(state: &mut State, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            state.next_story_index();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous_story_index();
        }
        KeyCode::Char('d') | KeyCode::Char('x') | KeyCode::Delete => {
            match state.remove_selected_story() {
                Ok(story) => info!("Removed '{}'.", story.title),
                Err(e) => warn!("Cannot remove story: {}", e),
            }
        }
        KeyCode::Char('o') | KeyCode::Enter => match state.get_selected_story() {
            Some(story) if !story.url.is_empty() => info!("{}: {}", story.title, story.url),
            Some(story) => info!("'{}' has no URL.", story.title),
            None => {}
        },
        KeyCode::Char('/') | KeyCode::Tab => {
            state.focus_search();
        }
        KeyCode::Char('l') => {
            state.toggle_log();
        }
        _ => {}
    }
    true
}
