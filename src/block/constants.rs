/// Number of values a single digit unit can hold
pub const DIGIT_BASE: usize = 128;

/// Largest encodable back-reference offset
pub const MAX_OFFSET: usize = DIGIT_BASE * 127; // 16256

/// Largest encodable back-reference length
pub const MAX_LENGTH: usize = DIGIT_BASE - 1; // 127

/// Bytes of decoded history retained for back-references
pub const WINDOW_SIZE: usize = DIGIT_BASE * DIGIT_BASE; // 16384

/// Unconsumed source bytes considered per block
pub const LOOKAHEAD_SIZE: usize = DIGIT_BASE;

/// Encoded block size: offset high digit, offset low digit, payload
pub const BLOCK_WIDTH: usize = 3;

/// Bias added to digit and length units in the ASCII block format
pub const ASCII_DIGIT_BIAS: u8 = b'0';
