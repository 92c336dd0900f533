#![no_main]

use libfuzzer_sys::fuzz_target;
use lzblock::{compress_to_vec, decode, BlockFormat, EncodeConfig};

fuzz_target!(|data: &[u8]| {
    for format in [BlockFormat::Ascii, BlockFormat::Binary] {
        let config = EncodeConfig { format, ..Default::default() };
        let encoded = compress_to_vec(data, &config).expect("in-memory encoding failed");

        assert_eq!(encoded.len() % 3, 0);
        let decoded = decode(&encoded, format).expect("encoder output must decode");
        assert_eq!(decoded, data);
    }
});
