// Copyright (c) 2025 Mele Text Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the text rearrangement utilities.

use crate::text_ops::{
    collapse_whitespace, gather, split_by, split_on, split_str, stable_partition, words,
};
use proptest::prelude::*;
use test_case::test_case;

#[test_case("a:b:c", ':', &["a", "b", "c"]; "plain fields")]
#[test_case("sync:x:4:65534:sync:/bin:/bin/sync", ':', &["sync", "x", "4", "65534", "sync", "/bin", "/bin/sync"]; "passwd line")]
#[test_case("a::b", ':', &["a", "", "b"]; "adjacent separators keep an empty slice")]
#[test_case(":a", ':', &["", "a"]; "leading separator keeps an empty slice")]
#[test_case("a:b:", ':', &["a", "b"]; "trailing separator emits nothing")]
#[test_case("", ':', &[]; "empty input")]
fn test_split_str_cases(input: &str, sep: char, expected: &[&str]) {
    assert_eq!(split_str(input, sep), expected);
}

#[test]
fn test_split_by_predicate() {
    let values = vec![1, 2, 3, 0, 4, 5, 0, 6];
    assert_eq!(
        split_by(&values, |n| *n == 0),
        vec![vec![1, 2, 3], vec![4, 5], vec![6]]
    );
}

#[test]
fn test_split_on_matches_split_by() {
    let values = vec![1, 2, -1, 3, 4];
    assert_eq!(split_on(&values, &-1), split_by(&values, |n| *n == -1));
}

#[test_case("all you need is love", &["all", "you", "need", "is", "love"]; "single spaces")]
#[test_case("  all   you \t need  is love ", &["all", "you", "need", "is", "love"]; "messy whitespace")]
#[test_case("", &[]; "empty line")]
#[test_case(" \t  ", &[]; "whitespace only")]
fn test_words_cases(input: &str, expected: &[&str]) {
    assert_eq!(words(input, ' '), expected);
}

#[test]
fn test_collapse_whitespace_classic() {
    assert_eq!(
        collapse_whitespace("big     bad    \t   wolf"),
        "big bad wolf"
    );
}

#[test]
fn test_gather_around_middle() {
    let mut digits = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    let (start, end) = gather(&mut digits, 5, |n| n % 2 == 0);
    assert_eq!(&digits[start..end], &[0, 2, 4, 6, 8]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Splitting never loses or reorders non-separator elements.
    #[test]
    fn prop_split_preserves_content(
        values in prop::collection::vec(0i32..10, 0..50),
        sep in 0i32..10,
    ) {
        let slices = split_on(&values, &sep);
        let rejoined: Vec<i32> = slices.into_iter().flatten().collect();
        let expected: Vec<i32> = values.iter().copied().filter(|v| *v != sep).collect();
        prop_assert_eq!(rejoined, expected);
    }

    /// The split point equals the number of matching elements, matches come
    /// first, and the multiset of elements is unchanged.
    #[test]
    fn prop_stable_partition_invariants(values in prop::collection::vec(0i32..100, 0..50)) {
        let is_even = |n: &i32| n % 2 == 0;
        let mut partitioned = values.clone();
        let split = stable_partition(&mut partitioned, is_even);

        prop_assert_eq!(split, values.iter().filter(|n| is_even(n)).count());
        prop_assert!(partitioned[..split].iter().all(is_even));
        prop_assert!(!partitioned[split..].iter().any(is_even));

        // Relative order inside each group is preserved.
        let expected_front: Vec<i32> = values.iter().copied().filter(is_even).collect();
        let expected_back: Vec<i32> =
            values.iter().copied().filter(|n| !is_even(n)).collect();
        prop_assert_eq!(&partitioned[..split], &expected_front[..]);
        prop_assert_eq!(&partitioned[split..], &expected_back[..]);
    }

    /// The gathered range holds exactly the matching elements, in their
    /// original relative order.
    #[test]
    fn prop_gather_range_holds_matches(
        values in prop::collection::vec(0i32..100, 0..50),
        pivot_fraction in 0.0f64..=1.0,
    ) {
        let is_even = |n: &i32| n % 2 == 0;
        let pivot = (values.len() as f64 * pivot_fraction) as usize;

        let mut gathered = values.clone();
        let (start, end) = gather(&mut gathered, pivot, is_even);

        let expected: Vec<i32> = values.iter().copied().filter(is_even).collect();
        prop_assert_eq!(&gathered[start..end], &expected[..]);
    }

    /// Collapsing whitespace twice changes nothing further.
    #[test]
    fn prop_collapse_is_idempotent(s in "[a-z \t\r\n]{0,60}") {
        let once = collapse_whitespace(&s);
        prop_assert_eq!(collapse_whitespace(&once), once);
    }

    /// Tokenized words are never empty and never contain the separator.
    #[test]
    fn prop_words_are_clean(s in "[a-z ]{0,60}") {
        for token in words(&s, ' ') {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.contains(' '));
        }
    }
}
