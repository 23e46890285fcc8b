#![no_main]

use libfuzzer_sys::fuzz_target;
use nbtree::{codec::file, CodecOptions};

fuzz_target!(|data: &[u8]| {
    // Произвольные байты, в том числе повреждённые gzip/zlib оболочки.
    for options in [CodecOptions::java(), CodecOptions::bedrock()] {
        let _ = file::from_bytes(data, &options);
    }
});
