//! Line-oriented text encoding for properties
//!
//! One `key=value` entry per line. Lines that are blank after trimming, or
//! whose first trimmed character is `#`, carry no entry. The key is split
//! from the value at the first `=`; any later `=` belongs to the value.
//! There are no escape sequences, continuation lines or section headers.

pub mod line;
pub mod text;

/// Separator between key and value
pub const SEPARATOR: char = '=';

/// First character of a comment line
pub const COMMENT_MARKER: char = '#';

pub use line::Line;
pub use text::{load_from_path, read_from};
