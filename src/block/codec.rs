use super::constants::*;
use crate::error::{Error, Result};

/// How digit and length units are laid out on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlockFormat {
    /// Digits and reference lengths are stored as `value + b'0'`, literal bytes raw
    #[default]
    Ascii,
    /// Digits and reference lengths are stored as raw values
    Binary,
}

impl BlockFormat {
    #[inline]
    fn bias(self) -> u8 {
        match self {
            BlockFormat::Ascii => ASCII_DIGIT_BIAS,
            BlockFormat::Binary => 0,
        }
    }

    /// Store a value (0-127) as one unit
    #[inline]
    fn encode_unit(self, value: u8) -> u8 {
        debug_assert!((value as usize) < DIGIT_BASE);
        value + self.bias()
    }

    /// Recover a value (0-127) from one unit, if the unit lies in the digit space
    #[inline]
    fn decode_unit(self, unit: u8) -> Option<u8> {
        unit.checked_sub(self.bias()).filter(|&v| (v as usize) < DIGIT_BASE)
    }
}

/// One unit of compressed output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    /// A raw byte, written with offset 0
    Literal(u8),
    /// Copy `length` bytes starting `offset` bytes back in the decoded stream
    Reference { offset: u16, length: u8 },
}

impl Block {
    pub fn literal(byte: u8) -> Self {
        Block::Literal(byte)
    }

    /// Build a back-reference, checking both fields against the encodable range
    pub fn reference(offset: usize, length: usize) -> Result<Self> {
        if !(1..=MAX_OFFSET).contains(&offset) {
            return Err(Error::OffsetOutOfRange { offset, max: MAX_OFFSET });
        }
        if !(1..=MAX_LENGTH).contains(&length) {
            return Err(Error::LengthOutOfRange { length, max: MAX_LENGTH });
        }
        Ok(Block::Reference { offset: offset as u16, length: length as u8 })
    }

    /// Offset field as written; 0 marks a literal
    pub fn offset(&self) -> usize {
        match self {
            Block::Literal(_) => 0,
            Block::Reference { offset, .. } => *offset as usize,
        }
    }

    /// Number of source bytes this block stands for
    pub fn uncompressed_size(&self) -> usize {
        match self {
            Block::Literal(_) => 1,
            Block::Reference { length, .. } => *length as usize,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Block::Literal(_))
    }

    /// Serialize as `[offset_high, offset_low, payload]`
    pub fn to_bytes(&self, format: BlockFormat) -> [u8; BLOCK_WIDTH] {
        let offset = self.offset();
        let high = format.encode_unit((offset / DIGIT_BASE) as u8);
        let low = format.encode_unit((offset % DIGIT_BASE) as u8);
        let payload = match self {
            Block::Literal(byte) => *byte,
            Block::Reference { length, .. } => format.encode_unit(*length),
        };
        [high, low, payload]
    }

    /// Parse one serialized block
    pub fn from_bytes(bytes: [u8; BLOCK_WIDTH], format: BlockFormat) -> Result<Self> {
        let high = format.decode_unit(bytes[0]).ok_or(Error::InvalidDigit(bytes[0]))?;
        let low = format.decode_unit(bytes[1]).ok_or(Error::InvalidDigit(bytes[1]))?;
        let offset = high as usize * DIGIT_BASE + low as usize;

        if offset == 0 {
            return Ok(Block::Literal(bytes[2]));
        }

        let length = format
            .decode_unit(bytes[2])
            .filter(|&l| l > 0)
            .ok_or(Error::InvalidLength(bytes[2]))?;
        Block::reference(offset, length as usize)
    }
}
