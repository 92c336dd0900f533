pub mod block;
pub mod decode;
pub mod encoder;
pub mod error;
pub mod matcher;

pub use block::{Block, BlockFormat, BlockReader, BlockWriter};
pub use decode::{decode, verify, BlockDecoder};
pub use encoder::{
    compress_file, compress_to_vec, encode_blocks, output_path_for, EncoderState, StreamEncoder,
};
pub use error::{Error, Result};
pub use matcher::{Match, MatchExtender, SearchWindow, SeenBytes};

use std::io::{Read, Write};

/// Configuration for encoding
#[derive(Clone, Debug)]
pub struct EncodeConfig {
    /// Wire layout of digit and length units
    pub format: BlockFormat,
    /// Buffer size for I/O operations
    pub buffer_size: usize,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self { format: BlockFormat::Ascii, buffer_size: 128 * 1024 }
    }
}

/// Statistics from an encoding run
#[derive(Clone, Debug, Default)]
pub struct CompressStats {
    pub input_bytes: u64,
    pub output_bytes: u64,
    pub blocks_written: u64,
    pub literal_blocks: u64,
    pub reference_blocks: u64,
}

impl CompressStats {
    /// Output size relative to input size (0.0 for empty input)
    pub fn compression_ratio(&self) -> f64 {
        if self.input_bytes == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_bytes as f64
        }
    }
}

/// Trait for the complete encoding operation
pub trait Compressor {
    /// Encode `input` into a stream of blocks written to `output`
    fn compress<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CompressStats>;
}
