//! Navigation-related state types.

/// Specifying the different foci.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Focus {
    #[default]
    Search,
    Stories,
}
