pub mod codec;
pub mod constants;
pub mod reader;
pub mod writer;

pub use codec::{Block, BlockFormat};
pub use constants::*;
pub use reader::BlockReader;
pub use writer::BlockWriter;
