#![no_main]
use libfuzzer_sys::fuzz_target;
use lzw::{Config, Decoder, Encoder};

fuzz_target!(|data: (Vec<u8>, Vec<u8>, u16)| {
    let (first, second, cap) = data;
    let cap = 257 + (cap as usize % 2048);
    let config = Config::new(cap).unwrap();

    let mut encoder = Encoder::with_config(&config);
    let mut codes = Vec::new();
    encoder.encode(&first, &mut codes).unwrap();
    encoder.encode(&second, &mut codes).unwrap();

    let mut decoder = Decoder::with_config(&config);
    let mut out = Vec::new();
    decoder.decode(&codes, &mut out).unwrap();

    assert!(decoder.dictionary().len() <= cap);
    assert_eq!(out, [first, second].concat());
});
