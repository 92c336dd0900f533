use super::codec::{Block, BlockFormat};
use super::constants::BLOCK_WIDTH;
use crate::error::{Error, Result};
use std::io::{ErrorKind, Read};

/// Reads fixed-width blocks back from a stream
pub struct BlockReader<R: Read> {
    reader: R,
    format: BlockFormat,
    done: bool,
}

impl<R: Read> BlockReader<R> {
    pub fn new(reader: R, format: BlockFormat) -> Self {
        Self { reader, format, done: false }
    }

    /// Read the next block, or `None` at a clean end of stream
    pub fn read_block(&mut self) -> Result<Option<Block>> {
        let mut buf = [0u8; BLOCK_WIDTH];
        let mut filled = 0;

        while filled < BLOCK_WIDTH {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        match filled {
            0 => Ok(None),
            BLOCK_WIDTH => Block::from_bytes(buf, self.format).map(Some),
            partial => Err(Error::TruncatedBlock(partial)),
        }
    }
}

impl<R: Read> Iterator for BlockReader<R> {
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.read_block().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.done = true;
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_blocks() {
        let reader = BlockReader::new(Cursor::new(b"00a013"), BlockFormat::Ascii);
        let blocks: Vec<Block> = reader.collect::<Result<_>>().unwrap();
        assert_eq!(blocks, vec![Block::Literal(b'a'), Block::Reference { offset: 1, length: 3 }]);
    }

    #[test]
    fn test_read_empty() {
        let mut reader = BlockReader::new(Cursor::new(Vec::<u8>::new()), BlockFormat::Ascii);
        assert!(reader.read_block().unwrap().is_none());
    }

    #[test]
    fn test_read_truncated() {
        let mut reader = BlockReader::new(Cursor::new(b"00a0"), BlockFormat::Ascii);
        assert_eq!(reader.next().unwrap().unwrap(), Block::Literal(b'a'));
        assert!(matches!(reader.next(), Some(Err(Error::TruncatedBlock(1)))));
        assert!(reader.next().is_none());
    }
}
