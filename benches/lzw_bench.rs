use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use lzw::{Decoder, Encoder};

fn sample_input() -> Vec<u8> {
    // Repetitive text with slow drift, so the dictionary keeps finding matches.
    let words: [&[u8]; 6] = [b"tobe ", b"ornot ", b"that ", b"is ", b"the ", b"question "];
    (0..20_000)
        .flat_map(|i| words[(i * 7 + i / 97) % words.len()].iter().copied())
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_encode");
    let input = sample_input();
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("one_shot", |b| b.iter(|| lzw::encode(&input)));

    group.bench_function("chunked_session", |b| {
        b.iter(|| {
            let mut encoder = Encoder::new();
            let mut codes = Vec::new();
            for chunk in input.chunks(4096) {
                encoder.encode(chunk, &mut codes).unwrap();
            }
            codes
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzw_decode");
    let input = sample_input();
    let codes = lzw::encode(&input);
    group.throughput(Throughput::Bytes(input.len() as u64));

    group.bench_function("one_shot", |b| {
        b.iter(|| {
            let mut decoder = Decoder::new();
            let mut out = Vec::with_capacity(input.len());
            decoder.decode(&codes, &mut out).unwrap();
            out
        })
    });

    let wire = lzw::compress(&input);
    group.bench_function("framed", |b| b.iter(|| lzw::decompress(&wire).unwrap()));
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
