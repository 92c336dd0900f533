pub mod file;
pub mod state;
pub mod stream;

pub use file::{compress_file, output_path_for, OUTPUT_SUFFIX};
pub use state::{encode_blocks, EncoderState};
pub use stream::{compress_to_vec, StreamEncoder};
