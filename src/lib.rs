//! Codepoint-indexed strings and string lists.
//!
//! This crate pairs [`UStr`], an immutable utf8 string addressed by codepoint
//! rather than byte, with [`StringList`], a growable list of such strings
//! used for splitting and joining. A `UStr` caches its codepoint count, so
//! asking for the length is O(1); indexed operations (substring, remove,
//! reverse) translate codepoint offsets to byte offsets by scanning the
//! buffer forward over codepoint boundaries.
//!
//! "Codepoint" here means one unicode scalar value. There is no grapheme
//! segmentation and no normalization: `"🍎🍌"` has length 2 because it
//! encodes two codepoints, regardless of how it renders.
//!
//! ```
//! use unistr::{StringList, UStr};
//!
//! let s = UStr::new_from_str("apples and 🍌s");
//! assert_eq!(s.len_chars(), 13);
//! assert_eq!(s.len_bytes(), 16);
//! assert_eq!(s.substring(0, 6), "apples");
//!
//! let parts = StringList::split(&s, &UStr::new_from_str(" ")).unwrap();
//! assert_eq!(parts.len(), 3);
//! assert_eq!(parts.join(&UStr::new_from_str("-")), "apples-and-🍌s");
//! ```
//!
//! Buffers don't have to be valid utf8: [`UStr::from_bytes`] accepts
//! arbitrary bytes and counts codepoints best-effort (one per byte that
//! doesn't match the continuation pattern `10xxxxxx`). Every operation stays
//! in bounds on malformed input.

mod list;
mod str_tools;
mod ustr;

pub use crate::list::StringList;
pub use crate::ustr::UStr;

use std::collections::TryReserveError;
use std::fmt;

/// The error type for fallible [`StringList`] operations.
///
/// [`UStr::substring`] and [`UStr::remove_at`] deliberately don't use it:
/// those degrade to a safe default (empty string, unmodified copy) on bad
/// indices instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index argument was outside the operation's documented bounds.
    IndexOutOfRange,
    /// The backing storage could not be grown.
    AllocationFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange => f.write_str("index out of range"),
            Error::AllocationFailed => f.write_str("allocation failed"),
        }
    }
}

impl std::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Error::AllocationFailed
    }
}
