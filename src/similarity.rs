//! Similarity scoring between two tokens.
//!
//! The ratio is computed from matching blocks found by repeatedly taking the
//! longest contiguous common run of characters and recursing on what is left
//! on either side of it (Ratcliff/Obershelp). Strings are compared as
//! sequences of `char`, so multi-byte scripts score by letter, not by byte.

use std::collections::HashMap;

/// A run of `len` equal characters starting at `a_start` in the first
/// sequence and `b_start` in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

/// Longest common contiguous run of `a` and `b`.
///
/// Among runs of equal length the one starting earliest in `a` wins, then the
/// one starting earliest in `b`. Returns a zero-length block when nothing is
/// shared.
fn longest_block(a: &[char], b: &[char]) -> Block {
    let n = b.len();
    let mut prev = vec![0usize; n + 1];
    let mut curr = vec![0usize; n + 1];
    let mut best = Block {
        a_start: 0,
        b_start: 0,
        len: 0,
    };

    for (i, &ac) in a.iter().enumerate() {
        for (j, &bc) in b.iter().enumerate() {
            let run = if ac == bc { prev[j] + 1 } else { 0 };
            curr[j + 1] = run;
            if run > best.len {
                best = Block {
                    a_start: i + 1 - run,
                    b_start: j + 1 - run,
                    len: run,
                };
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

fn blocks_of(a: &[char], b: &[char]) -> Vec<Block> {
    let mut found = Vec::new();
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let local = longest_block(&a[alo..ahi], &b[blo..bhi]);
        if local.len == 0 {
            continue;
        }
        let block = Block {
            a_start: alo + local.a_start,
            b_start: blo + local.b_start,
            len: local.len,
        };
        if alo < block.a_start && blo < block.b_start {
            pending.push((alo, block.a_start, blo, block.b_start));
        }
        let (a_end, b_end) = (block.a_start + block.len, block.b_start + block.len);
        if a_end < ahi && b_end < bhi {
            pending.push((a_end, ahi, b_end, bhi));
        }
        found.push(block);
    }

    found.sort_by_key(|block| (block.a_start, block.b_start));
    found
}

/// Matching blocks of `a` against `b`, ordered by position in `a`.
pub fn matching_blocks(a: &str, b: &str) -> Vec<Block> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    blocks_of(&a, &b)
}

fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        2.0 * matched as f64 / total as f64
    }
}

pub(crate) fn similarity_chars(a: &[char], b: &[char]) -> f64 {
    // Tied blocks make the raw algorithm order dependent, so always score the
    // pair the same way round.
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let matched: usize = blocks_of(a, b).iter().map(|block| block.len).sum();
    ratio(matched, a.len() + b.len())
}

/// Similarity ratio of `a` and `b` in `[0, 1]`.
///
/// `2 * M / T` where `M` is the total length of the matching blocks and `T`
/// the combined length of both strings. Two empty strings score `1.0`.
/// Comparison is exact: no case folding and no normalization.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    similarity_chars(&a, &b)
}

pub(crate) fn quick_ratio_chars(a: &[char], b: &[char]) -> f64 {
    let mut available: HashMap<char, usize> = HashMap::with_capacity(b.len());
    for &c in b {
        *available.entry(c).or_insert(0) += 1;
    }
    let mut matched = 0;
    for c in a {
        if let Some(count) = available.get_mut(c) {
            if *count > 0 {
                *count -= 1;
                matched += 1;
            }
        }
    }
    ratio(matched, a.len() + b.len())
}

/// Upper bound on [`similarity`] from shared characters, ignoring order.
pub fn quick_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    quick_ratio_chars(&a, &b)
}

pub(crate) fn real_quick_ratio_len(la: usize, lb: usize) -> f64 {
    ratio(la.min(lb), la + lb)
}

/// Upper bound on [`similarity`] from the lengths alone.
pub fn real_quick_ratio(a: &str, b: &str) -> f64 {
    real_quick_ratio_len(a.chars().count(), b.chars().count())
}
