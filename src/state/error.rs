//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No story is selected in the list
    #[error("No story selected")]
    NoStorySelected,
}
