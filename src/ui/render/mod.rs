mod all;
mod footer;
mod header;
mod log;
mod search;
mod stories;

use self::log::log;
use super::Frame;
use footer::footer;
use header::header;
use search::search;
use stories::stories;

pub use all::all as render;
