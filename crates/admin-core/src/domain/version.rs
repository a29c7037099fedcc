//! Version string comparison
//!
//! Segments are split on `.`, `-`, `+` and `_`. Numeric segments compare
//! numerically, so `3.10.0` is newer than `3.9.5`. Missing trailing segments
//! count as `0`. A textual segment (pre-release tag) sorts below any number,
//! which puts `2.0.0-rc1` before `2.0.0`. Tags rank by their alphabetic
//! prefix and then by their numeric suffix, so `rc9 < rc10`.

use std::cmp::Ordering;

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Number(u64),
    /// Alphabetic prefix and numeric suffix (`rc10` is `("rc", 10)`).
    Tag(&'a str, u64),
}

fn tag(s: &str) -> Segment<'_> {
    let split = s.find(|c: char| c.is_ascii_digit()).unwrap_or(s.len());
    let (prefix, suffix) = s.split_at(split);
    match suffix {
        "" => Segment::Tag(prefix, 0),
        digits => match digits.parse::<u64>() {
            Ok(n) => Segment::Tag(prefix, n),
            Err(_) => Segment::Tag(s, 0),
        },
    }
}

fn segments(version: &str) -> Vec<Segment<'_>> {
    version
        .trim()
        .trim_start_matches(['v', 'V'])
        .split(['.', '-', '+', '_'])
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<u64>() {
            Ok(n) => Segment::Number(n),
            Err(_) => tag(s),
        })
        .collect()
}

fn tag_rank(tag: &str) -> u8 {
    match tag.to_ascii_lowercase().as_str() {
        "dev" => 0,
        "alpha" | "a" => 1,
        "beta" | "b" => 2,
        "rc" => 3,
        _ => 4,
    }
}

fn compare_segment(a: &Segment<'_>, b: &Segment<'_>) -> Ordering {
    match (a, b) {
        (Segment::Number(x), Segment::Number(y)) => x.cmp(y),
        (Segment::Number(_), Segment::Tag(..)) => Ordering::Greater,
        (Segment::Tag(..), Segment::Number(_)) => Ordering::Less,
        (Segment::Tag(x, n), Segment::Tag(y, m)) => tag_rank(x)
            .cmp(&tag_rank(y))
            .then_with(|| x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase()))
            .then_with(|| n.cmp(m)),
    }
}

pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);
    let zero = Segment::Number(0);

    for i in 0..left.len().max(right.len()) {
        let x = left.get(i).unwrap_or(&zero);
        let y = right.get(i).unwrap_or(&zero);
        match compare_segment(x, y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// True when `candidate` is strictly newer than `current`.
pub fn is_newer(candidate: &str, current: &str) -> bool {
    compare_versions(candidate, current) == Ordering::Greater
}
