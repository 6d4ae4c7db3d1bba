//! Flip distance between anagrams.
//!
//! A _flip_ is a swap of two adjacent characters in a string. Two strings which are anagrams of
//! each other (the same multiset of characters) can always be transformed into one another by a
//! finite sequence of flips. The length of the shortest such sequence is the _flip distance_
//! between them. Strings which aren't anagrams are infinitely far apart.
//!
//! This crate provides three things:
//!
//! * [`matches`]: checks that a caller-supplied sequence of swaps consists only of flips and
//!   transforms one string into another.
//! * [`minimal_flips`]: builds a shortest flip sequence between two anagrams.
//! * [`SimilaritySearch`]: counts distinct-content pairs of equal-length substrings of a string
//!   which are within a given flip distance of each other.
//!
//! ```
//! let flips = flips::minimal_flips("abc", "bca").unwrap();
//! assert_eq!(flips.len(), 2);
//! assert!(flips::matches("abc", "bca", &flips));
//! ```
//!
//! All positions and lengths are measured in `char`s (Unicode scalar values), not bytes.

#![no_std]

extern crate alloc;

mod error;
mod finder;
mod search;
mod swap;

pub use error::NoSequenceExists;
pub use finder::{flip_distance, is_anagram, minimal_flips};
pub use search::SimilaritySearch;
pub use swap::{apply_flips, matches, FlipSequence, Swap};

/// Default hasher for the content-pair set used by [`SimilaritySearch`].
#[cfg(feature = "default-hasher")]
pub type DefaultHashBuilder = ahash::RandomState;

/// Counts the distinct-content substring pairs of `s` within `max_dist` flips of each other,
/// summed over every window length from 2 up to (but excluding) the length of `s`.
///
/// See [`SimilaritySearch::count_within_distance`].
#[cfg(feature = "default-hasher")]
pub fn count_within_distance(s: &str, max_dist: usize) -> usize {
    SimilaritySearch::new().count_within_distance(s, max_dist)
}

/// Counts the distinct-content pairs of `length`-char substrings of `s` within `max_dist` flips
/// of each other.
///
/// See [`SimilaritySearch::count_within_distance_for_length`].
#[cfg(feature = "default-hasher")]
pub fn count_within_distance_for_length(s: &str, max_dist: usize, length: usize) -> usize {
    SimilaritySearch::new().count_within_distance_for_length(s, max_dist, length)
}

/// Lists the distinct-content pairs counted by [`count_within_distance_for_length`].
///
/// See [`SimilaritySearch::similar_pairs`].
#[cfg(feature = "default-hasher")]
pub fn similar_pairs(
    s: &str,
    max_dist: usize,
    length: usize,
) -> alloc::vec::Vec<(alloc::string::String, alloc::string::String)> {
    SimilaritySearch::new().similar_pairs(s, max_dist, length)
}
