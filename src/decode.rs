//! Companion decoder for the block stream.
//!
//! Replays literal and reference blocks against a [`SearchWindow`] of the
//! same size the encoder uses, so every reference an encoder emits must be
//! resolvable here.

use crate::block::{Block, BlockFormat, BlockReader};
use crate::error::{Error, Result};
use crate::matcher::SearchWindow;
use std::io::Read;

/// Reconstructs source bytes from blocks
pub struct BlockDecoder {
    window: SearchWindow,
}

impl BlockDecoder {
    pub fn new() -> Self {
        Self { window: SearchWindow::new() }
    }

    /// Append the bytes `block` stands for to `out`
    pub fn decode_block(&mut self, block: &Block, out: &mut Vec<u8>) -> Result<()> {
        match *block {
            Block::Literal(byte) => {
                self.window.push_byte(byte);
                out.push(byte);
            }
            Block::Reference { offset, length } => {
                let offset = offset as usize;
                let available = self.window.available();
                if offset == 0 || offset > available {
                    return Err(Error::InvalidReference { offset, available });
                }
                let start = out.len();
                self.window.copy_to_vec(offset, length as usize, out);
                self.window.push_bytes(&out[start..]);
            }
        }
        Ok(())
    }

    /// Total bytes decoded so far
    pub fn position(&self) -> u64 {
        self.window.total_written()
    }
}

impl Default for BlockDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a full block stream from a reader
pub fn decode_from<R: Read>(input: R, format: BlockFormat) -> Result<Vec<u8>> {
    let mut decoder = BlockDecoder::new();
    let mut out = Vec::new();
    for block in BlockReader::new(input, format) {
        decoder.decode_block(&block?, &mut out)?;
    }
    Ok(out)
}

/// Decode an in-memory block stream
pub fn decode(data: &[u8], format: BlockFormat) -> Result<Vec<u8>> {
    decode_from(data, format)
}

/// Check that `compressed` decodes back to exactly `original`
pub fn verify(original: &[u8], compressed: &[u8], format: BlockFormat) -> Result<()> {
    let decoded = decode(compressed, format)?;
    let common = original.len().min(decoded.len());
    let mismatch = original
        .iter()
        .zip(decoded.iter())
        .position(|(a, b)| a != b)
        .or((original.len() != decoded.len()).then_some(common));

    match mismatch {
        Some(pos) => Err(Error::VerificationFailed(pos as u64)),
        None => Ok(()),
    }
}
