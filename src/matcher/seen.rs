/// Set of byte values that have already been written as a literal
#[derive(Clone, Debug, Default)]
pub struct SeenBytes {
    bits: [u64; 4],
}

impl SeenBytes {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `byte` has never been marked
    #[inline]
    pub fn is_novel(&self, byte: u8) -> bool {
        self.bits[(byte >> 6) as usize] & (1 << (byte & 63)) == 0
    }

    #[inline]
    pub fn mark_seen(&mut self, byte: u8) {
        self.bits[(byte >> 6) as usize] |= 1 << (byte & 63);
    }

    /// Number of distinct values marked
    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn clear(&mut self) {
        self.bits = [0; 4];
    }
}
