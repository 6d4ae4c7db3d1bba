use core::fmt;

use crate::alloc::{string::String, vec::Vec};

/// An exchange of the characters at two positions of a string.
///
/// A swap is _valid_ on a string when both positions are in bounds for it, and it is a _flip_
/// when the positions are adjacent (they differ by exactly one). The order of `left` and `right`
/// doesn't change the effect of the swap but it is preserved for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swap {
    pub left: usize,
    pub right: usize,
}

impl Swap {
    pub const fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Whether the two positions are adjacent.
    pub const fn is_flip(&self) -> bool {
        self.left.abs_diff(self.right) == 1
    }

    /// Whether both positions are in bounds for a string of `len` chars.
    pub const fn is_valid_on(&self, len: usize) -> bool {
        self.left < len && self.right < len
    }
}

impl From<(usize, usize)> for Swap {
    fn from((left, right): (usize, usize)) -> Self {
        Self { left, right }
    }
}

impl From<Swap> for (usize, usize) {
    fn from(swap: Swap) -> Self {
        (swap.left, swap.right)
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.left, self.right)
    }
}

/// An ordered sequence of swaps, applied first to last.
///
/// Sequences produced by [`minimal_flips`](crate::minimal_flips) only ever contain flips.
pub type FlipSequence = Vec<Swap>;

/// Checks whether `flips` is a sequence of valid flips which transforms `src` into `dest`.
///
/// Returns `false` without applying anything if any element is not a flip. Otherwise the swaps
/// are applied in order to a private copy of `src`'s characters and the result is compared
/// against `dest`. A swap with an out-of-bounds position also gives `false`.
///
/// ```
/// use flips::{matches, Swap};
///
/// assert!(matches("abc", "bca", &[Swap::new(0, 1), Swap::new(1, 2)]));
/// // Same permutation, but (0, 2) is not a flip.
/// assert!(!matches("abc", "cba", &[Swap::new(0, 2)]));
/// ```
pub fn matches(src: &str, dest: &str, flips: &[Swap]) -> bool {
    if !flips.iter().all(Swap::is_flip) {
        return false;
    }

    let mut chars: Vec<char> = src.chars().collect();
    if !apply_in_place(&mut chars, flips) {
        return false;
    }

    dest.chars().eq(chars.iter().copied())
}

/// Applies `swaps` in order to `src` and returns the resulting string.
///
/// Unlike [`matches`] the swaps don't need to be flips. Returns `None` if any swap is not valid
/// on `src`.
pub fn apply_flips(src: &str, swaps: &[Swap]) -> Option<String> {
    let mut chars: Vec<char> = src.chars().collect();
    if !apply_in_place(&mut chars, swaps) {
        return None;
    }

    Some(chars.into_iter().collect())
}

/// Bounds checks every swap before touching `chars` so that an invalid sequence leaves the
/// buffer unchanged.
fn apply_in_place(chars: &mut [char], swaps: &[Swap]) -> bool {
    if !swaps.iter().all(|swap| swap.is_valid_on(chars.len())) {
        return false;
    }

    for swap in swaps {
        chars.swap(swap.left, swap.right);
    }

    true
}
