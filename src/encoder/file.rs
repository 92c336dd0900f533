use super::stream::StreamEncoder;
use crate::error::{Error, Result};
use crate::{CompressStats, Compressor, EncodeConfig};
use std::ffi::OsString;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Suffix appended to the input path to name the compressed output
pub const OUTPUT_SUFFIX: &str = "-compressed.bin";

/// Default output path: `<input>-compressed.bin`
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Encode the file at `input` into `output`.
///
/// The source is opened before the destination is created. If encoding fails
/// part way, the partially written destination is removed.
pub fn compress_file(input: &Path, output: &Path, config: EncodeConfig) -> Result<CompressStats> {
    let source = File::open(input)
        .map_err(|source| Error::SourceOpen { path: input.to_path_buf(), source })?;
    let dest = File::create(output)?;

    let mut encoder = StreamEncoder::new(config);
    match encoder.compress(source, dest) {
        Ok(stats) => Ok(stats),
        Err(e) => {
            warn!(path = %output.display(), "removing partial output");
            let _ = fs::remove_file(output);
            Err(e)
        }
    }
}
