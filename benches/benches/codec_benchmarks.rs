use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nbtree::{
    codec::{compress, file, load},
    decode, encode, CodecOptions, Compound, CompressionKind, CompressionLevel, Endian, List,
    NamedTag, Tag, TagKind,
};

// ============================================================================
// Helper functions для создания тестовых документов
// ============================================================================

fn create_flat_compound(entries: usize) -> NamedTag {
    let mut root = Compound::with_capacity(entries);
    for i in 0..entries {
        let name = format!("key_{i}");
        match i % 4 {
            0 => root.insert(name, i as i32),
            1 => root.insert(name, i as i64 * 1_000_003),
            2 => root.insert(name, i as f64 / 3.0),
            _ => root.insert(name, format!("value_{i}")),
        };
    }
    NamedTag::new("", root)
}

fn create_nested_compound(depth: usize) -> NamedTag {
    let mut tag = Tag::Compound(Compound::new());
    for level in 0..depth {
        let mut c = Compound::new();
        c.insert("level", level as i32);
        c.insert("child", tag);
        tag = Tag::Compound(c);
    }
    NamedTag::new("nested", tag)
}

fn create_chunk_like(sections: usize) -> NamedTag {
    let mut list = List::new(TagKind::Compound);
    for y in 0..sections {
        let mut section = Compound::new();
        section.insert("Y", y as i8);
        section.insert("Blocks", vec![(y % 256) as u8; 4096]);
        section.insert("Data", vec![0u8; 2048]);
        section.insert("Palette", (0..64).collect::<Vec<i32>>());
        // Вид элемента совпадает с видом списка.
        let _ = list.push(section);
    }

    let mut level = Compound::new();
    level.insert("xPos", 12i32);
    level.insert("zPos", -7i32);
    level.insert("LastUpdate", 1_264_099_775_885i64);
    level.insert("Sections", list);

    let mut root = Compound::new();
    root.insert("Level", level);
    NamedTag::new("", root)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_encode_decode_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/flat_compound");

    for entries in [10, 100, 1000].iter() {
        let doc = create_flat_compound(*entries);
        let encoded = encode(&doc, Endian::Big).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", entries), &doc, |b, d| {
            b.iter(|| black_box(encode(black_box(d), Endian::Big).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("decode", entries), &encoded, |b, data| {
            b.iter(|| black_box(decode(black_box(data), Endian::Big).unwrap()));
        });
    }

    group.finish();
}

fn bench_byte_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/byte_order");
    let doc = create_chunk_like(16);

    for endian in [Endian::Big, Endian::Little] {
        let encoded = encode(&doc, endian).unwrap();
        group.throughput(Throughput::Bytes(encoded.len() as u64));

        group.bench_function(BenchmarkId::new("encode", format!("{endian:?}")), |b| {
            b.iter(|| black_box(encode(black_box(&doc), endian).unwrap()));
        });
        group.bench_function(BenchmarkId::new("decode", format!("{endian:?}")), |b| {
            b.iter(|| black_box(decode(black_box(&encoded), endian).unwrap()));
        });
    }

    group.finish();
}

fn bench_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/nesting");

    for depth in [8, 64, 256].iter() {
        let doc = create_nested_compound(*depth);
        let encoded = encode(&doc, Endian::Big).unwrap();

        group.bench_with_input(BenchmarkId::new("decode", depth), &encoded, |b, data| {
            b.iter(|| black_box(decode(black_box(data), Endian::Big).unwrap()));
        });
    }

    group.finish();
}

fn bench_envelopes(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/envelope");
    group.sample_size(30);

    let doc = create_chunk_like(16);
    let raw = encode(&doc, Endian::Big).unwrap();
    group.throughput(Throughput::Bytes(raw.len() as u64));

    for kind in [CompressionKind::Gzip, CompressionKind::Zlib] {
        for level in [CompressionLevel::Level(1), CompressionLevel::Default, CompressionLevel::Level(9)] {
            let id = format!("{}/{level:?}", kind.name());
            group.bench_function(BenchmarkId::new("compress", &id), |b| {
                b.iter(|| black_box(compress(black_box(&raw), kind, level).unwrap()));
            });
        }

        let packed = compress(&raw, kind, CompressionLevel::Default).unwrap();
        group.bench_function(BenchmarkId::new("load", kind.name()), |b| {
            b.iter(|| black_box(load(black_box(&packed)).unwrap()));
        });

        let options = CodecOptions::java().with_compression(Some(kind));
        group.bench_function(BenchmarkId::new("from_bytes", kind.name()), |b| {
            b.iter(|| black_box(file::from_bytes(black_box(&packed), &options).unwrap()));
        });
    }

    group.bench_function("load/raw", |b| {
        b.iter(|| black_box(load(black_box(&raw)).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_decode_flat,
    bench_byte_order,
    bench_nesting,
    bench_envelopes
);
criterion_main!(benches);
