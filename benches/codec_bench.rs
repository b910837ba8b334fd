use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use seghuff::{build_codes, decode, encode, Codebook, Params};

/// Deterministic pseudo-text: skewed byte distribution with local drift, so
/// per-segment tables actually differ.
fn sample_input(len: usize) -> Vec<u8> {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let drift = (i / 4096) as u64;
            (((state >> 32) % 16 + drift) % 64) as u8 + b' '
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("codebook_build");
    let input = sample_input(64 * 1024);
    group.throughput(Throughput::Bytes(input.len() as u64));

    for &segment_length in &[1024usize, 4096, 16384] {
        group.bench_function(format!("sequential_{segment_length}"), |b| {
            b.iter(|| build_codes(&input, segment_length, 1).unwrap())
        });
    }

    let params = Params::new(4096, 1).unwrap();
    group.bench_function("parallel_4096_x4", |b| {
        b.iter(|| Codebook::build_parallel(&input, params, 4).unwrap())
    });
}

fn bench_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let input = sample_input(64 * 1024);
    group.throughput(Throughput::Bytes(input.len() as u64));

    let book = build_codes(&input, 4096, 1).unwrap();
    group.bench_function("encode", |b| b.iter(|| encode(&input, &book).unwrap()));

    let bits = encode(&input, &book).unwrap();
    group.bench_function("decode", |b| b.iter(|| decode(&bits, &book).unwrap()));

    let wide_book = build_codes(&input, 4096, 2).unwrap();
    group.bench_function("encode_2byte_symbols", |b| {
        b.iter(|| encode(&input, &wide_book).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_encode_decode);
criterion_main!(benches);
