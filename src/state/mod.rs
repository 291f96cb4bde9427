//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the query, the stories controller and view data
//! - Navigation types (Focus)
//! - State error handling

mod error;
mod navigation;
mod state_impl;

pub use error::StateError;
pub use navigation::Focus;
pub use state_impl::{SearchTerm, State};
