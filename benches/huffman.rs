use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use huffpack::compression::{Compression, FrequencyTable, HuffmanCodec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_test_data(size: usize, alphabet: u16) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(size as u64 ^ alphabet as u64);
    (0..size)
        .map(|_| {
            // Squaring skews the distribution toward low symbols.
            let x: f64 = rng.gen();
            ((x * x) * alphabet as f64) as u8
        })
        .collect()
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_compress");
    let codec = HuffmanCodec::new();

    for &size in &[1024, 65536, 1 << 20] {
        for &alphabet in &[4u16, 64, 256] {
            let data = generate_test_data(size, alphabet);
            group.bench_with_input(
                BenchmarkId::new("compress", format!("{size}_{alphabet}")),
                &data,
                |b, data| b.iter(|| black_box(codec.compress(data).unwrap())),
            );
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_decompress");
    let codec = HuffmanCodec::new();

    for &size in &[1024, 65536, 1 << 20] {
        for &alphabet in &[4u16, 64, 256] {
            let container = codec.compress(&generate_test_data(size, alphabet)).unwrap();
            group.bench_with_input(
                BenchmarkId::new("decompress", format!("{size}_{alphabet}")),
                &container,
                |b, container| b.iter(|| black_box(codec.decompress(container).unwrap())),
            );
        }
    }
    group.finish();
}

fn bench_frequency(c: &mut Criterion) {
    let data = generate_test_data(1 << 20, 256);
    c.bench_function("frequency_table_1mb", |b| {
        b.iter(|| black_box(FrequencyTable::from_bytes(&data)))
    });
}

criterion_group!(benches, bench_compress, bench_decompress, bench_frequency);
criterion_main!(benches);
