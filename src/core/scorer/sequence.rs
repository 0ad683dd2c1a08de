//! Block-matching sequence ratio (Ratcliff/Obershelp).
//!
//! Finds the longest common contiguous block, then recurses on the pieces to
//! its left and right. Unlike positional matching this tolerates shifted
//! content: `AB1234` vs `XAB1234` still shares a six character block.
//!
//! There is no junk heuristic; every character takes part in matching.

use super::normalized_chars;
use serde::{Deserialize, Serialize};

/// A run of `size` equal characters at `a[a_start..]` and `b[b_start..]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub size: usize,
}

/// All matching blocks between `a` and `b`, ordered by position.
pub fn matching_blocks(a: &str, b: &str) -> Vec<MatchingBlock> {
    let a = normalized_chars(a);
    let b = normalized_chars(b);
    matching_blocks_chars(&a, &b)
}

/// `2 * M / (len(a) + len(b))` where `M` is the number of matched characters.
///
/// Two empty strings score `1.0`.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a = normalized_chars(a);
    let b = normalized_chars(b);
    sequence_ratio_chars(&a, &b)
}

pub(crate) fn sequence_ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched: usize = matching_blocks_chars(a, b).iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}

pub(crate) fn matching_blocks_chars(a: &[char], b: &[char]) -> Vec<MatchingBlock> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut blocks = Vec::new();

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let block = longest_match(a, b, a_lo, a_hi, b_lo, b_hi);
        if block.size == 0 {
            continue;
        }

        if a_lo < block.a_start && b_lo < block.b_start {
            pending.push((a_lo, block.a_start, b_lo, block.b_start));
        }
        let a_end = block.a_start + block.size;
        let b_end = block.b_start + block.size;
        if a_end < a_hi && b_end < b_hi {
            pending.push((a_end, a_hi, b_end, b_hi));
        }

        blocks.push(block);
    }

    blocks.sort_by_key(|m| (m.a_start, m.b_start));
    collapse_adjacent(blocks)
}

/// Longest common block inside `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Ties go to the block starting earliest in `a`, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> MatchingBlock {
    let mut best = MatchingBlock {
        a_start: a_lo,
        b_start: b_lo,
        size: 0,
    };

    // run[j + 1] = length of the common suffix of a[..=i] and b[..=j]
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for i in a_lo..a_hi {
        for j in b_lo..b_hi {
            if a[i] == b[j] {
                let run = previous[j] + 1;
                current[j + 1] = run;
                if run > best.size {
                    best = MatchingBlock {
                        a_start: i + 1 - run,
                        b_start: j + 1 - run,
                        size: run,
                    };
                }
            } else {
                current[j + 1] = 0;
            }
        }
        std::mem::swap(&mut previous, &mut current);
    }

    best
}

fn collapse_adjacent(blocks: Vec<MatchingBlock>) -> Vec<MatchingBlock> {
    let mut collapsed: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match collapsed.last_mut() {
            Some(last)
                if last.a_start + last.size == block.a_start
                    && last.b_start + last.size == block.b_start =>
            {
                last.size += block.size;
            }
            _ => collapsed.push(block),
        }
    }

    collapsed
}
