use thiserror::Error;

/// Returned by [`minimal_flips`](crate::minimal_flips) when no sequence of flips can transform
/// the source string into the destination.
///
/// Flips only reorder characters, so this happens exactly when the two strings are not anagrams
/// of each other. Strings of different lengths are never anagrams.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no flip sequence exists: the strings are not anagrams of each other")]
pub struct NoSequenceExists;
