//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: search API interactions
//! - Terminal events: User input and terminal interactions

pub mod network;
pub mod terminal;
