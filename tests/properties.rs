//! Property-based tests for flip sequences and the flip distance.
//!
//! The flip distance is a metric on each set of anagrams:
//!
//! 1. **Identity of indiscernibles**: d(x, y) = 0 <=> x = y
//! 2. **Symmetry**: d(x, y) = d(y, x)
//! 3. **Triangle inequality**: d(x, z) <= d(x, y) + d(y, z)
//!
//! Minimality of `minimal_flips` is checked against a breadth-first search over every
//! arrangement reachable by flips, which is only feasible for short strings.

use std::collections::{BTreeSet, HashSet, VecDeque};

use flips::*;
use proptest::prelude::*;

fn arb_chars(max_len: usize) -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::char::range('a', 'd'), 0..=max_len)
}

fn arb_string() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-c]{0,6}").unwrap()
}

/// A string and a random rearrangement of it.
fn arb_anagrams(max_len: usize) -> impl Strategy<Value = (String, String)> {
    arb_chars(max_len)
        .prop_flat_map(|chars| (Just(chars.clone()), Just(chars).prop_shuffle()))
        .prop_map(|(left, right)| (left.into_iter().collect(), right.into_iter().collect()))
}

fn arb_anagram_triple(max_len: usize) -> impl Strategy<Value = (String, String, String)> {
    arb_chars(max_len)
        .prop_flat_map(|chars| {
            (
                Just(chars.clone()),
                Just(chars.clone()).prop_shuffle(),
                Just(chars).prop_shuffle(),
            )
        })
        .prop_map(|(a, b, c)| {
            (
                a.into_iter().collect(),
                b.into_iter().collect(),
                c.into_iter().collect(),
            )
        })
}

/// A string and a sequence of in-bounds swaps on it. The swaps are not necessarily flips.
fn arb_string_and_swaps() -> impl Strategy<Value = (String, Vec<Swap>)> {
    prop::string::string_regex("[a-c]{1,6}")
        .unwrap()
        .prop_flat_map(|s| {
            let len = s.chars().count();
            let swaps = prop::collection::vec((0..len, 0..len), 0..6)
                .prop_map(|pairs| pairs.into_iter().map(Swap::from).collect::<Vec<_>>());
            (Just(s), swaps)
        })
}

fn brute_force_distance(src: &str, dest: &str) -> Option<usize> {
    let start: Vec<char> = src.chars().collect();
    let goal: Vec<char> = dest.chars().collect();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.clone());
    queue.push_back((start, 0));

    while let Some((current, distance)) = queue.pop_front() {
        if current == goal {
            return Some(distance);
        }
        for i in 1..current.len() {
            let mut next = current.clone();
            next.swap(i - 1, i);
            if seen.insert(next.clone()) {
                queue.push_back((next, distance + 1));
            }
        }
    }

    None
}

/// Position-pair enumeration with a set of ordered content pairs.
fn naive_count(s: &str, max_dist: usize, length: usize) -> usize {
    let chars: Vec<char> = s.chars().collect();
    if length == 0 || length > chars.len() {
        return 0;
    }
    let windows: Vec<String> = chars
        .windows(length)
        .map(|window| window.iter().collect())
        .collect();

    let mut pairs = BTreeSet::new();
    for (i, left) in windows.iter().enumerate() {
        for right in &windows[i + 1..] {
            if left == right {
                continue;
            }
            if flip_distance(left, right).is_some_and(|d| d <= max_dist) {
                pairs.insert((left.min(right).clone(), left.max(right).clone()));
            }
        }
    }
    pairs.len()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn minimal_flips_are_accepted_by_matches((src, dest) in arb_anagrams(10)) {
        let flips = minimal_flips(&src, &dest).unwrap();
        prop_assert!(matches(&src, &dest, &flips));
        prop_assert!(flips.iter().all(Swap::is_flip));
        prop_assert_eq!(apply_flips(&src, &flips), Some(dest.clone()));
    }

    #[test]
    fn minimal_flips_is_minimal((src, dest) in arb_anagrams(6)) {
        let flips = minimal_flips(&src, &dest).unwrap();
        prop_assert_eq!(Some(flips.len()), brute_force_distance(&src, &dest));
    }

    #[test]
    fn minimal_flips_is_deterministic((src, dest) in arb_anagrams(10)) {
        prop_assert_eq!(minimal_flips(&src, &dest), minimal_flips(&src, &dest));
    }

    #[test]
    fn distance_is_bounded_by_inversions((src, dest) in arb_anagrams(10)) {
        let n = src.chars().count();
        let distance = flip_distance(&src, &dest).unwrap();
        prop_assert!(distance <= n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn distance_matches_sequence_length((src, dest) in arb_anagrams(10)) {
        prop_assert_eq!(
            flip_distance(&src, &dest),
            minimal_flips(&src, &dest).ok().map(|flips| flips.len())
        );
    }

    #[test]
    fn distance_identity((src, dest) in arb_anagrams(10)) {
        prop_assert_eq!(flip_distance(&src, &src), Some(0));
        prop_assert_eq!(flip_distance(&src, &dest) == Some(0), src == dest);
    }

    #[test]
    fn distance_symmetric((a, b) in arb_anagrams(10)) {
        prop_assert_eq!(
            minimal_flips(&a, &b).map(|flips| flips.len()),
            minimal_flips(&b, &a).map(|flips| flips.len())
        );
    }

    #[test]
    fn distance_triangle_inequality((a, b, c) in arb_anagram_triple(8)) {
        let d_ac = flip_distance(&a, &c).unwrap();
        let d_ab = flip_distance(&a, &b).unwrap();
        let d_bc = flip_distance(&b, &c).unwrap();
        prop_assert!(
            d_ac <= d_ab + d_bc,
            "d({}, {}) = {} > d({}, {}) + d({}, {}) = {} + {}",
            a, c, d_ac, a, b, b, c, d_ab, d_bc
        );
    }

    #[test]
    fn non_anagrams_have_no_sequence(a in arb_string(), b in arb_string()) {
        if is_anagram(&a, &b) {
            prop_assert!(minimal_flips(&a, &b).is_ok());
        } else {
            prop_assert_eq!(minimal_flips(&a, &b), Err(NoSequenceExists));
            prop_assert_eq!(flip_distance(&a, &b), None);
        }
    }

    #[test]
    fn matches_implies_flips_reach_dest((src, swaps) in arb_string_and_swaps()) {
        let Some(dest) = apply_flips(&src, &swaps) else {
            unreachable!("swaps are generated in bounds");
        };
        let all_flips = swaps.iter().all(Swap::is_flip);
        prop_assert_eq!(matches(&src, &dest, &swaps), all_flips);
    }

    #[test]
    fn non_adjacent_swap_is_never_a_match((src, dest) in arb_anagrams(8), gap in 2usize..4) {
        let len = src.chars().count();
        prop_assume!(len > gap);

        // Swapping twice leaves the string unchanged, so the net permutation still matches.
        let mut flips = minimal_flips(&src, &dest).unwrap();
        flips.push(Swap::new(0, gap));
        flips.push(Swap::new(gap, 0));
        prop_assert_eq!(apply_flips(&src, &flips), Some(dest.clone()));
        prop_assert!(!matches(&src, &dest, &flips));
    }

    #[test]
    fn count_matches_naive_enumeration(s in "[a-c]{0,9}", max_dist in 0usize..5) {
        let len = s.chars().count();
        let mut total = 0;
        for length in 2..len {
            let expected = naive_count(&s, max_dist, length);
            prop_assert_eq!(count_within_distance_for_length(&s, max_dist, length), expected);
            prop_assert_eq!(similar_pairs(&s, max_dist, length).len(), expected);
            total += expected;
        }
        prop_assert_eq!(count_within_distance(&s, max_dist), total);
    }

    #[test]
    fn count_is_monotone_in_threshold(s in "[a-c]{0,9}", max_dist in 0usize..5) {
        prop_assert!(count_within_distance(&s, max_dist) <= count_within_distance(&s, max_dist + 1));
    }

    #[test]
    fn similar_pairs_are_ordered_distinct_and_close(
        s in "[a-c]{0,9}",
        max_dist in 0usize..5,
        length in 2usize..5,
    ) {
        let pairs = similar_pairs(&s, max_dist, length);
        let unique: BTreeSet<_> = pairs.iter().cloned().collect();
        prop_assert_eq!(unique.len(), pairs.len());
        for (left, right) in &pairs {
            prop_assert!(left < right);
            prop_assert_eq!(left.chars().count(), length);
            prop_assert!(s.contains(left.as_str()) && s.contains(right.as_str()));
            prop_assert!(flip_distance(left, right).is_some_and(|d| (1..=max_dist).contains(&d)));
        }
    }
}
