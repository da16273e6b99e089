use lzw::{Decoder, Encoder};

fn main() {
    let input = (0..100_000u32)
        .map(|i| (i % 7 + (i / 512) % 5) as u8)
        .collect::<Vec<_>>();

    for _ in 0..200 {
        let mut encoder = Encoder::new();
        let mut codes = Vec::new();
        for chunk in input.chunks(8192) {
            encoder.encode(chunk, &mut codes).unwrap();
        }

        let mut decoder = Decoder::new();
        let mut out = Vec::with_capacity(input.len());
        decoder.decode(&codes, &mut out).unwrap();
        assert_eq!(out.len(), input.len());
    }
}
