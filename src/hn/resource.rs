use fake::Dummy;

/// Defines story data structure.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Story {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub author: String,
    pub num_comments: u64,
    pub points: i64,
}
