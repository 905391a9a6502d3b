#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_bytes, from_bytes_with_opts, to_bytes, DeOpts};

fuzz_target!(|data: &[u8]| {
    if let Ok(tag) = from_bytes_with_opts(data, DeOpts::new().max_seq_len(1000)) {
        let bs = to_bytes(&tag, false).unwrap();
        let decoded = from_bytes(&bs).unwrap();
        assert_eq!(to_bytes(&decoded, false).unwrap(), bs);
    }
});
