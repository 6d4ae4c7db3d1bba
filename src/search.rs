//! Counting similar substrings.
//!
//! For a fixed window length every substring of that length is a candidate. Two candidates are
//! _similar_ when their contents differ and the flip distance between them is at most the given
//! threshold. Pairs are identified by their contents rather than by their positions: the same
//! two substrings appearing at several places in the input count once.

use core::hash::BuildHasher;

use hashbrown::HashSet;

use crate::{
    alloc::{string::String, vec::Vec},
    finder::minimal_flips,
    NoSequenceExists,
};

/// Counts pairs of substrings which are within a flip distance of each other.
///
/// The hasher `S` is used for the set which deduplicates content pairs. With the
/// `default-hasher` feature (enabled by default) [`SimilaritySearch::new`] uses
/// [`DefaultHashBuilder`](crate::DefaultHashBuilder).
#[derive(Debug, Clone, Default)]
pub struct SimilaritySearch<S> {
    build_hasher: S,
}

#[cfg(feature = "default-hasher")]
impl SimilaritySearch<crate::DefaultHashBuilder> {
    /// Creates a search which deduplicates pairs with a fresh
    /// [`DefaultHashBuilder`](crate::DefaultHashBuilder).
    ///
    /// ```
    /// use flips::SimilaritySearch;
    ///
    /// let search = SimilaritySearch::new();
    /// assert_eq!(search.count_within_distance_for_length("abab", 1, 2), 1);
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(crate::DefaultHashBuilder::new())
    }
}

impl<S: BuildHasher + Clone> SimilaritySearch<S> {
    /// Creates a search which deduplicates pairs with the given hasher.
    ///
    /// The hasher only affects performance: counts are the same for any `BuildHasher`.
    pub fn with_hasher(build_hasher: S) -> Self {
        Self { build_hasher }
    }

    /// Counts the distinct-content pairs of `s`'s substrings within `max_dist` flips of each
    /// other, summed over every window length from 2 up to but excluding the length of `s`.
    ///
    /// Length 1 is skipped: two single characters are either identical or not anagrams. The
    /// full length is skipped too as it only has one window and so no pairs.
    ///
    /// ```
    /// use flips::SimilaritySearch;
    ///
    /// let search = SimilaritySearch::new();
    /// // "ab" and "ba" are one flip apart. The length 3 windows "aba" and "bab" aren't anagrams.
    /// assert_eq!(search.count_within_distance("abab", 1), 1);
    /// ```
    #[cfg(not(feature = "rayon"))]
    pub fn count_within_distance(&self, s: &str, max_dist: usize) -> usize {
        let total: usize = window_lengths(s)
            .map(|length| self.count_within_distance_for_length(s, max_dist, length))
            .sum();
        tracing::debug!(max_dist, total, "counted similar substring pairs");
        total
    }

    /// Counts the distinct-content pairs of `s`'s substrings within `max_dist` flips of each
    /// other, summed over every window length from 2 up to but excluding the length of `s`.
    ///
    /// Length 1 is skipped: two single characters are either identical or not anagrams. The
    /// full length is skipped too as it only has one window and so no pairs.
    ///
    /// Each window length is counted on the rayon thread pool.
    ///
    /// ```
    /// use flips::SimilaritySearch;
    ///
    /// let search = SimilaritySearch::new();
    /// // "ab" and "ba" are one flip apart. The length 3 windows "aba" and "bab" aren't anagrams.
    /// assert_eq!(search.count_within_distance("abab", 1), 1);
    /// ```
    #[cfg(feature = "rayon")]
    pub fn count_within_distance(&self, s: &str, max_dist: usize) -> usize
    where
        S: Sync,
    {
        use rayon::prelude::*;

        let total: usize = window_lengths(s)
            .into_par_iter()
            .map(|length| self.count_within_distance_for_length(s, max_dist, length))
            .sum();
        tracing::debug!(max_dist, total, "counted similar substring pairs");
        total
    }

    /// Counts the distinct-content pairs of `length`-char substrings of `s` which are within
    /// `max_dist` flips of each other.
    ///
    /// Meaningful lengths are `2..=len - 1` where `len` is the number of chars in `s`. Other
    /// lengths are accepted and count 0 since they can't produce a pair of distinct anagrams.
    pub fn count_within_distance_for_length(
        &self,
        s: &str,
        max_dist: usize,
        length: usize,
    ) -> usize {
        let windows = windows(s, length);
        let count = self.for_each_similar_pair(&windows, max_dist, |_, _| ());
        tracing::debug!(
            length,
            windows = windows.len(),
            pairs = count,
            "counted similar windows"
        );
        count
    }

    /// Lists the pairs counted by [`count_within_distance_for_length`].
    ///
    /// Each pair is ordered with the lexicographically smaller substring first. Pairs are listed
    /// in the order they're discovered: by the position of the earlier window, then the later.
    ///
    /// [`count_within_distance_for_length`]: SimilaritySearch::count_within_distance_for_length
    pub fn similar_pairs(
        &self,
        s: &str,
        max_dist: usize,
        length: usize,
    ) -> Vec<(String, String)> {
        let windows = windows(s, length);
        let mut pairs = Vec::new();
        self.for_each_similar_pair(&windows, max_dist, |left, right| {
            pairs.push((String::from(left), String::from(right)));
        });
        pairs
    }

    /// Calls `on_new_pair` once for each distinct content pair within `max_dist` and returns the
    /// number of such pairs.
    fn for_each_similar_pair<'a>(
        &self,
        windows: &[&'a str],
        max_dist: usize,
        mut on_new_pair: impl FnMut(&'a str, &'a str),
    ) -> usize {
        // Sorted chars: equal signatures <=> anagrams.
        let signatures: Vec<Vec<char>> = windows
            .iter()
            .map(|window| {
                let mut chars: Vec<char> = window.chars().collect();
                chars.sort_unstable();
                chars
            })
            .collect();

        let mut seen: HashSet<(&'a str, &'a str), S> =
            HashSet::with_hasher(self.build_hasher.clone());

        for (i, &left) in windows.iter().enumerate() {
            for (j, &right) in windows.iter().enumerate().skip(i + 1) {
                if left == right || signatures[i] != signatures[j] {
                    continue;
                }

                let key = if left < right {
                    (left, right)
                } else {
                    (right, left)
                };
                if seen.contains(&key) {
                    continue;
                }

                match minimal_flips(left, right) {
                    Ok(flips) if flips.len() <= max_dist => {
                        seen.insert(key);
                        on_new_pair(key.0, key.1);
                    }
                    // Too far apart, or infinitely far apart.
                    Ok(_) | Err(NoSequenceExists) => (),
                }
            }
        }

        seen.len()
    }
}

/// The window lengths summed by `count_within_distance`.
fn window_lengths(s: &str) -> core::ops::Range<usize> {
    2..s.chars().count()
}

/// Every `length`-char substring of `s`, in order of position.
fn windows(s: &str, length: usize) -> Vec<&str> {
    let Some(span) = length.checked_add(1) else {
        return Vec::new();
    };

    let boundaries: Vec<usize> = s
        .char_indices()
        .map(|(idx, _)| idx)
        .chain(core::iter::once(s.len()))
        .collect();

    boundaries
        .windows(span)
        .map(|bounds| &s[bounds[0]..bounds[length]])
        .collect()
}
