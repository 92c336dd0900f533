#![no_main]

use libfuzzer_sys::fuzz_target;
use lzblock::{decode, BlockFormat};

fuzz_target!(|data: &[u8]| {
    // Arbitrary block streams may be rejected - we're looking for panics, not errors
    let _ = decode(data, BlockFormat::Ascii);
    let _ = decode(data, BlockFormat::Binary);
});
