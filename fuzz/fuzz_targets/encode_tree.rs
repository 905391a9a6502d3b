#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtcodec::{from_bytes, to_bytes, NamedTag};

fuzz_target!(|tag: NamedTag| {
    // Strings over u16::MAX bytes are allowed in the tree but not on the wire.
    if let Ok(bs) = to_bytes(&tag, false) {
        let decoded = from_bytes(&bs).unwrap();

        // NaN never equals itself, so compare the encodings instead.
        assert_eq!(to_bytes(&decoded, false).unwrap(), bs);
    }
});
