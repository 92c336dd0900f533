use super::state::EncoderState;
use crate::block::{Block, BlockWriter, LOOKAHEAD_SIZE};
use crate::error::Result;
use crate::{CompressStats, Compressor, EncodeConfig};
use std::io::{BufReader, BufWriter, Read, Write};
use tracing::{debug, trace};

/// Sequential block encoder over a byte stream
pub struct StreamEncoder {
    config: EncodeConfig,
}

impl StreamEncoder {
    pub fn new(config: EncodeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncodeConfig {
        &self.config
    }
}

impl Compressor for StreamEncoder {
    fn compress<R: Read, W: Write>(&mut self, input: R, output: W) -> Result<CompressStats> {
        let mut reader = BufReader::with_capacity(self.config.buffer_size, input);
        let writer = BufWriter::with_capacity(self.config.buffer_size, output);
        let mut block_writer = BlockWriter::new(writer, self.config.format);

        let mut state = EncoderState::new();
        let mut lookahead: Vec<u8> = Vec::with_capacity(LOOKAHEAD_SIZE);
        let mut stats = CompressStats::default();

        loop {
            fill_lookahead(&mut reader, &mut lookahead)?;
            if lookahead.is_empty() {
                break;
            }

            let block = state.next_block(&lookahead)?;
            block_writer.write_block(&block)?;

            match block {
                Block::Literal(byte) => {
                    trace!(byte, "literal");
                    stats.literal_blocks += 1;
                }
                Block::Reference { offset, length } => {
                    trace!(offset, length, "reference");
                    stats.reference_blocks += 1;
                }
            }

            let consumed = block.uncompressed_size();
            state.advance(&lookahead[..consumed]);
            lookahead.drain(..consumed);
            stats.input_bytes += consumed as u64;
        }

        stats.blocks_written = block_writer.blocks_written();
        stats.output_bytes = block_writer.bytes_written();
        block_writer.finish()?;

        debug!(
            input_bytes = stats.input_bytes,
            output_bytes = stats.output_bytes,
            literals = stats.literal_blocks,
            references = stats.reference_blocks,
            "encoding finished"
        );

        Ok(stats)
    }
}

/// Top the lookahead up to `LOOKAHEAD_SIZE` bytes, short only at end of input
fn fill_lookahead<R: Read>(reader: &mut R, lookahead: &mut Vec<u8>) -> Result<()> {
    let wanted = LOOKAHEAD_SIZE - lookahead.len();
    if wanted > 0 {
        reader.by_ref().take(wanted as u64).read_to_end(lookahead)?;
    }
    Ok(())
}

/// Encode an in-memory buffer into serialized blocks
pub fn compress_to_vec(data: &[u8], config: &EncodeConfig) -> Result<Vec<u8>> {
    let mut encoder = StreamEncoder::new(config.clone());
    let mut output = Vec::with_capacity(data.len());
    encoder.compress(data, &mut output)?;
    Ok(output)
}
