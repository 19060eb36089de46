//! Relevance ordering.
//!
//! Candidates are ordered by these rules, each one only breaking ties left by the previous:
//! 1. an exact lemma or definition match comes first
//! 2. the query's field hint picks the compared field (lemma unless asked otherwise)
//! 3. a longer prefix shared with the query comes first
//! 4. a field containing the query comes before one that does not
//! 5. folded field text, ascending
//!
//! Every rule reads one candidate at a time, so the rules collapse into a per-candidate
//! [`RankKey`] and the order is a plain lexicographic comparison of keys.

use std::cmp::{Ordering, Reverse};

use crate::keys::EntryKeys;
use crate::query::Needle;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey<'a> {
    inexact: bool,
    shared_prefix: Reverse<usize>,
    lacks_needle: bool,
    field: &'a str,
}

pub fn rank_key<'a>(keys: &'a EntryKeys, needle: &Needle) -> RankKey<'a> {
    let field = keys.field(needle.hint);
    RankKey {
        inexact: !keys.is_exact(&needle.text),
        shared_prefix: Reverse(common_prefix_len(&needle.text, field)),
        lacks_needle: !field.contains(needle.text.as_str()),
        field: keys.folded_field(needle.hint),
    }
}

pub fn compare(a: &EntryKeys, b: &EntryKeys, needle: &Needle) -> Ordering {
    rank_key(a, needle).cmp(&rank_key(b, needle))
}

/// Stable sort of candidate indices; full ties keep collection order
pub fn rank(candidates: &mut [usize], keys: &[EntryKeys], needle: &Needle) {
    candidates.sort_by_cached_key(|&idx| rank_key(&keys[idx], needle));
}

/// Length in characters of the longest common prefix
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}
