use super::window::SearchWindow;
use crate::block::{MAX_LENGTH, MAX_OFFSET};

/// A back-reference candidate: `length` bytes found `offset` bytes back
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub offset: usize,
    pub length: usize,
}

/// Greedy longest-prefix match search against a [`SearchWindow`].
///
/// Starting from the first lookahead byte, the candidate grows one byte at a
/// time while the window still holds an occurrence of it. The last candidate
/// that matched is returned, at its rightmost (closest) occurrence.
#[derive(Clone, Copy, Debug)]
pub struct MatchExtender {
    max_distance: usize,
    max_length: usize,
}

impl MatchExtender {
    pub fn new(max_distance: usize, max_length: usize) -> Self {
        Self { max_distance, max_length }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Find the longest greedy match for the start of `lookahead`.
    ///
    /// Returns `None` when even the first byte has no occurrence within reach.
    pub fn longest_match(&self, window: &SearchWindow, lookahead: &[u8]) -> Option<Match> {
        let limit = lookahead.len().min(self.max_length);
        let mut best: Option<Match> = None;
        let mut min_distance = 1;

        for length in 1..=limit {
            // An occurrence of the longer candidate is also one of the shorter,
            // so it can only sit at or beyond the previous distance.
            match window.find_match(&lookahead[..length], min_distance, self.max_distance) {
                Some(offset) => {
                    best = Some(Match { offset, length });
                    min_distance = offset;
                }
                None => break,
            }
        }

        best
    }
}

impl Default for MatchExtender {
    fn default() -> Self {
        Self::new(MAX_OFFSET, MAX_LENGTH)
    }
}
