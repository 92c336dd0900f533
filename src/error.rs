use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open source file {}: {source}", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Block range errors
    #[error("Offset {offset} out of encodable range 1..={max}")]
    OffsetOutOfRange { offset: usize, max: usize },

    #[error("Length {length} out of encodable range 1..={max}")]
    LengthOutOfRange { length: usize, max: usize },

    // Block decoding errors
    #[error("Invalid digit unit 0x{0:02x}")]
    InvalidDigit(u8),

    #[error("Invalid reference length unit 0x{0:02x}")]
    InvalidLength(u8),

    #[error("Back-reference offset {offset} exceeds decoded history {available}")]
    InvalidReference { offset: usize, available: usize },

    #[error("Truncated block: {0} trailing bytes")]
    TruncatedBlock(usize),

    #[error("Verification failed: decoded output differs from input at byte {0}")]
    VerificationFailed(u64),
}

pub type Result<T> = std::result::Result<T, Error>;
