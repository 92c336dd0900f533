use super::codec::{Block, BlockFormat};
use super::constants::BLOCK_WIDTH;
use crate::error::Result;
use std::io::Write;

/// Writes whole fixed-width blocks to an unframed stream
pub struct BlockWriter<W: Write> {
    writer: W,
    format: BlockFormat,
    blocks_written: u64,
}

impl<W: Write> BlockWriter<W> {
    pub fn new(writer: W, format: BlockFormat) -> Self {
        Self { writer, format, blocks_written: 0 }
    }

    /// Serialize and write a single block
    pub fn write_block(&mut self, block: &Block) -> Result<()> {
        self.writer.write_all(&block.to_bytes(self.format))?;
        self.blocks_written += 1;
        Ok(())
    }

    pub fn blocks_written(&self) -> u64 {
        self.blocks_written
    }

    /// Bytes written so far (always a whole number of blocks)
    pub fn bytes_written(&self) -> u64 {
        self.blocks_written * BLOCK_WIDTH as u64
    }

    /// Flush and finish writing
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }

    /// Get a reference to the inner writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_blocks() {
        let mut writer = BlockWriter::new(Vec::new(), BlockFormat::Ascii);
        writer.write_block(&Block::literal(b'a')).unwrap();
        writer.write_block(&Block::reference(1, 3).unwrap()).unwrap();

        assert_eq!(writer.blocks_written(), 2);
        assert_eq!(writer.bytes_written(), 6);

        let output = writer.finish().unwrap();
        assert_eq!(output, b"00a013");
    }

    #[test]
    fn test_finish_empty() {
        let writer = BlockWriter::new(Vec::new(), BlockFormat::Binary);
        assert!(writer.get_ref().is_empty());
        assert!(writer.finish().unwrap().is_empty());
    }
}
