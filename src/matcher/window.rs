use crate::block::WINDOW_SIZE;

/// Bounded history of decoded bytes used as the back-reference source.
///
/// Bytes are kept contiguous so candidate positions can be located with
/// `memrchr`. Storage grows to twice the capacity before the evicted prefix
/// is dropped in one move.
pub struct SearchWindow {
    buffer: Vec<u8>,
    /// Index in `buffer` of the oldest retained byte
    start: usize,
    capacity: usize,
    /// Total bytes ever written
    total_written: u64,
}

impl SearchWindow {
    pub fn new() -> Self {
        Self::with_capacity(WINDOW_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self { buffer: Vec::with_capacity(capacity * 2), start: 0, capacity, total_written: 0 }
    }

    /// Add a single byte to the window, evicting the oldest byte when full
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
        self.total_written += 1;
        if self.buffer.len() - self.start > self.capacity {
            self.start += 1;
        }
        if self.start >= self.capacity {
            self.buffer.drain(..self.start);
            self.start = 0;
        }
    }

    /// Add multiple bytes to the window
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push_byte(b);
        }
    }

    /// Retained bytes, oldest first
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer[self.start..]
    }

    /// Number of retained bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len() - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get available window size (alias of `len`, bounded by capacity)
    pub fn available(&self) -> usize {
        self.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get total bytes written
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    /// Get `length` bytes from `distance` bytes back
    ///
    /// Note: distance=1 means the most recently written byte.
    /// Length can exceed distance (run-length encoding case).
    pub fn get(&self, distance: usize, length: usize) -> Vec<u8> {
        let mut result = Vec::with_capacity(length);
        self.copy_to_vec(distance, length, &mut result);
        result
    }

    /// Copy `length` bytes from `distance` bytes back into `out`
    pub fn copy_to_vec(&self, distance: usize, length: usize, out: &mut Vec<u8>) {
        debug_assert!((1..=self.len()).contains(&distance));

        let data = self.as_slice();
        let start = data.len() - distance;
        let start_len = out.len();

        for i in 0..length {
            if i < distance {
                out.push(data[start + i]);
            } else {
                // RLE: copy from what was just produced
                let rle_idx = start_len + i - distance;
                out.push(out[rle_idx]);
            }
        }
    }

    /// Distance to the rightmost occurrence of `pattern`, searching the whole window
    pub fn find_rightmost_match(&self, pattern: &[u8]) -> Option<usize> {
        self.find_match(pattern, 1, self.len())
    }

    /// Smallest distance `d` in `min_distance..=max_distance` at which `pattern`
    /// occurs starting `d` bytes before the end of the window.
    ///
    /// An occurrence may run past the end of the window; those positions are
    /// compared against the pattern itself, exactly as an overlapping copy
    /// reproduces them when decoding.
    pub fn find_match(
        &self,
        pattern: &[u8],
        min_distance: usize,
        max_distance: usize,
    ) -> Option<usize> {
        let data = self.as_slice();
        let len = data.len();
        let max_distance = max_distance.min(len);
        let first = *pattern.first()?;

        if min_distance == 0 || min_distance > max_distance {
            return None;
        }

        // Candidate starts, as indices into `data`
        let lowest = len - max_distance;
        let mut end = len - min_distance + 1;

        while end > lowest {
            let pos = lowest + memchr::memrchr(first, &data[lowest..end])?;
            if Self::matches_at(data, pos, pattern) {
                return Some(len - pos);
            }
            end = pos;
        }
        None
    }

    #[inline]
    fn matches_at(data: &[u8], pos: usize, pattern: &[u8]) -> bool {
        pattern.iter().enumerate().skip(1).all(|(j, &b)| {
            let idx = pos + j;
            let actual = if idx < data.len() { data[idx] } else { pattern[idx - data.len()] };
            actual == b
        })
    }

    /// Reset the window
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.start = 0;
        self.total_written = 0;
    }
}

impl Default for SearchWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_basic() {
        let mut window = SearchWindow::new();
        window.push_byte(b'A');
        window.push_byte(b'B');
        window.push_byte(b'C');

        assert_eq!(window.get(1, 1), vec![b'C']);
        assert_eq!(window.get(2, 1), vec![b'B']);
        assert_eq!(window.get(3, 1), vec![b'A']);
        assert_eq!(window.get(3, 3), vec![b'A', b'B', b'C']);
    }

    #[test]
    fn test_window_rle() {
        let mut window = SearchWindow::new();
        window.push_bytes(b"AB");

        // distance=2, length=6 -> "ABABAB"
        assert_eq!(window.get(2, 6), b"ABABAB".to_vec());
    }

    #[test]
    fn test_window_eviction() {
        let mut window = SearchWindow::with_capacity(4);
        window.push_bytes(b"abcdefghij");

        assert_eq!(window.len(), 4);
        assert_eq!(window.total_written(), 10);
        assert_eq!(window.as_slice(), b"ghij");
    }

    #[test]
    fn test_window_wrap() {
        let mut window = SearchWindow::new();

        for i in 0..40000u32 {
            window.push_byte((i & 0xFF) as u8);
        }

        assert_eq!(window.available(), WINDOW_SIZE);
        assert_eq!(window.total_written(), 40000);

        // Most recent byte should be (39999 & 0xFF) = 63
        assert_eq!(window.get(1, 1), vec![63]);
        // Oldest retained byte is 40000 - 16384 = 23616
        assert_eq!(window.as_slice()[0], (23616 & 0xFF) as u8);
    }

    #[test]
    fn test_rightmost_match_prefers_closest() {
        let mut window = SearchWindow::new();
        window.push_bytes(b"abcXabcY");

        // "abc" occurs at index 0 (distance 8) and index 4 (distance 4)
        assert_eq!(window.find_rightmost_match(b"abc"), Some(4));
        assert_eq!(window.find_rightmost_match(b"abcX"), Some(8));
        assert_eq!(window.find_rightmost_match(b"Y"), Some(1));
        assert_eq!(window.find_rightmost_match(b"Z"), None);
    }

    #[test]
    fn test_match_overlapping_end() {
        let mut window = SearchWindow::new();
        window.push_byte(b'a');

        assert_eq!(window.find_rightmost_match(b"a"), Some(1));
        assert_eq!(window.find_rightmost_match(b"aaaa"), Some(1));

        window.clear();
        window.push_bytes(b"xab");
        assert_eq!(window.find_rightmost_match(b"ababa"), Some(2));
        assert_eq!(window.find_rightmost_match(b"abb"), None);
    }

    #[test]
    fn test_match_distance_range() {
        let mut window = SearchWindow::new();
        window.push_bytes(b"aXaXa");

        assert_eq!(window.find_match(b"a", 1, 5), Some(1));
        assert_eq!(window.find_match(b"a", 2, 5), Some(3));
        assert_eq!(window.find_match(b"a", 4, 5), Some(5));
        assert_eq!(window.find_match(b"a", 2, 2), None);
        assert_eq!(window.find_match(b"a", 1, 0), None);
    }

    #[test]
    fn test_match_empty_window_or_pattern() {
        let window = SearchWindow::new();
        assert_eq!(window.find_rightmost_match(b"a"), None);

        let mut window = SearchWindow::new();
        window.push_bytes(b"abc");
        assert_eq!(window.find_rightmost_match(b""), None);
    }

    #[test]
    fn test_match_never_reaches_evicted_bytes() {
        let mut window = SearchWindow::with_capacity(4);
        window.push_bytes(b"zabcd");

        assert_eq!(window.find_rightmost_match(b"z"), None);
        assert_eq!(window.find_rightmost_match(b"abcd"), Some(4));
    }
}
