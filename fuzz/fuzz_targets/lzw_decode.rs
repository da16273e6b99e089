#![no_main]
use libfuzzer_sys::fuzz_target;

// Arbitrary bytes must decode or be rejected, never panic.
fuzz_target!(|wire: &[u8]| {
    if let Ok(bytes) = lzw::decompress(wire) {
        assert!(bytes.len() >= wire.len() / 2);
    }
});
