// Minimal flip sequences.
//
// The search is a greedy "stable bubbling": walk the destination left to right and, for each
// position, bubble the leftmost remaining occurrence of the needed character down into place
// with flips. Positions to the left are fixed and never revisited.
//
// Picking the *leftmost* remaining occurrence is what makes this minimal when characters repeat.
// It pairs the k-th occurrence of a character in the source with the k-th occurrence of the same
// character in the destination, which is the permutation with the fewest inversions among all
// permutations mapping source onto destination. Bubbling then spends exactly one flip per
// inversion. Choosing a later occurrence can only add inversions, so duplicates must not be
// skipped or special-cased.

use crate::{
    alloc::vec::Vec,
    swap::{FlipSequence, Swap},
    NoSequenceExists,
};

/// Finds a shortest sequence of flips which transforms `src` into `dest`.
///
/// The length of the returned sequence is the flip distance between the two strings. Every
/// element is a flip (its positions differ by one) and applying the sequence to `src` yields
/// `dest`.
///
/// Fails with [`NoSequenceExists`] if the strings are not anagrams of each other, which includes
/// strings of different lengths.
///
/// ```
/// use flips::{minimal_flips, NoSequenceExists, Swap};
///
/// assert_eq!(minimal_flips("ab", "ba"), Ok(vec![Swap::new(0, 1)]));
/// assert_eq!(minimal_flips("cat", "dog"), Err(NoSequenceExists));
/// ```
pub fn minimal_flips(src: &str, dest: &str) -> Result<FlipSequence, NoSequenceExists> {
    let mut work: Vec<char> = src.chars().collect();
    let target: Vec<char> = dest.chars().collect();
    if !is_anagram_chars(&work, &target) {
        tracing::trace!(src, dest, "no flip sequence between non-anagrams");
        return Err(NoSequenceExists);
    }

    let mut flips = Vec::new();
    bubble_into_place(&mut work, &target, |swap| flips.push(swap))?;
    Ok(flips)
}

/// Computes the flip distance between `src` and `dest` without building the sequence.
///
/// Returns `None` when the distance is infinite, in other words when the strings are not
/// anagrams. Otherwise this is the length of [`minimal_flips`]'s result.
pub fn flip_distance(src: &str, dest: &str) -> Option<usize> {
    let mut work: Vec<char> = src.chars().collect();
    let target: Vec<char> = dest.chars().collect();
    if !is_anagram_chars(&work, &target) {
        return None;
    }

    let mut distance = 0;
    bubble_into_place(&mut work, &target, |_| distance += 1).ok()?;
    Some(distance)
}

/// Checks whether `left` and `right` contain the same multiset of characters.
///
/// ```
/// assert!(flips::is_anagram("listen", "silent"));
/// assert!(!flips::is_anagram("aab", "abb"));
/// assert!(!flips::is_anagram("ab", "abc"));
/// ```
pub fn is_anagram(left: &str, right: &str) -> bool {
    let left: Vec<char> = left.chars().collect();
    let right: Vec<char> = right.chars().collect();
    is_anagram_chars(&left, &right)
}

fn is_anagram_chars(left: &[char], right: &[char]) -> bool {
    if left.len() != right.len() {
        return false;
    }

    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort_unstable();
    right.sort_unstable();
    left == right
}

/// Rearranges `work` into `target`, reporting each flip in the order it is performed.
///
/// `work` and `target` must be anagrams. If they are not, an error is returned once the first
/// position with no remaining candidate is reached and `work` is left partially rearranged.
fn bubble_into_place(
    work: &mut [char],
    target: &[char],
    mut on_flip: impl FnMut(Swap),
) -> Result<(), NoSequenceExists> {
    if work.len() != target.len() {
        return Err(NoSequenceExists);
    }

    for (dest_idx, &needed) in target.iter().enumerate() {
        // Leftmost remaining occurrence. Everything before `dest_idx` is already fixed.
        let offset = work[dest_idx..]
            .iter()
            .position(|&ch| ch == needed)
            .ok_or(NoSequenceExists)?;

        for src_idx in (dest_idx + 1..=dest_idx + offset).rev() {
            work.swap(src_idx - 1, src_idx);
            on_flip(Swap::new(src_idx - 1, src_idx));
        }
    }

    Ok(())
}
