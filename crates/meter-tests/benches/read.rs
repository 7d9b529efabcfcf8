use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use meter_reader::{BinaryReader, TextEncoding};
use meter_tests::{FRAME_HEADER_SIZE, damage_stream, length_prefixed};

fn bench_scalars(c: &mut Criterion) {
    let bytes: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    let mut group = c.benchmark_group("scalars");
    group.throughput(Throughput::Bytes(bytes.len() as u64));

    group.bench_function("u32_be", |b| {
        b.iter(|| {
            let mut reader = BinaryReader::new(&bytes);
            let mut acc = 0u32;
            while let Ok(v) = reader.read_u32() {
                acc = acc.wrapping_add(v);
            }
            acc
        });
    });

    group.bench_function("u64_le", |b| {
        b.iter(|| {
            let mut reader = BinaryReader::new(&bytes);
            let mut acc = 0u64;
            while let Ok(v) = reader.read_u64_le() {
                acc = acc.wrapping_add(v);
            }
            acc
        });
    });

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let prefixed = length_prefixed(&"Gale Thrust ".repeat(8));
    let cstring: Vec<u8> = b"field-03-dungeon-north".iter().copied().chain([0]).collect();

    c.bench_function("length_prefixed_string", |b| {
        b.iter(|| {
            BinaryReader::new(&prefixed)
                .read_length_prefixed_string(TextEncoding::Utf8)
                .unwrap()
                .len()
        });
    });

    c.bench_function("cstring", |b| {
        b.iter(|| {
            BinaryReader::new(&cstring)
                .read_cstring(TextEncoding::Utf8)
                .unwrap()
                .len()
        });
    });
}

fn bench_frame_walk(c: &mut Criterion) {
    let stream = damage_stream(256);
    let mut group = c.benchmark_group("frames");
    group.throughput(Throughput::Bytes(stream.len() as u64));

    group.bench_function("slice_256_frames", |b| {
        b.iter(|| {
            let mut reader = BinaryReader::new(&stream);
            let mut frames = 0;
            while !reader.eof() {
                let size = reader.peek_u32().unwrap() as usize;
                let mut frame = reader.slice(size).unwrap();
                frame.skip(FRAME_HEADER_SIZE).unwrap();
                frames += 1;
            }
            frames
        });
    });

    group.finish();
}

criterion_group!(benches, bench_scalars, bench_strings, bench_frame_walk);
criterion_main!(benches);
