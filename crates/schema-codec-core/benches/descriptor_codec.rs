use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use schema_codec_core::codec::{
    decode_stream_descriptor, decode_type_descriptor, encode_stream_descriptor,
    encode_type_descriptor, from_bytes, to_bytes,
};
use schema_codec_core::proto;
use schema_codec_core::types::{scalar_field, DataType, Dimension, IndexDescriptor, StreamDescriptor, TypeDescriptor};

fn wide_descriptor(columns: usize) -> StreamDescriptor {
    let mut desc = StreamDescriptor::new("bench").with_index(IndexDescriptor::timestamp());
    desc.add_field(scalar_field("time", DataType::NANOSECONDS_UTC64));
    for i in 0..columns {
        desc.add_field(scalar_field(format!("col_{}", i), DataType::FLOAT64));
    }
    desc
}

fn bench_type_descriptor(c: &mut Criterion) {
    let desc = TypeDescriptor::new(DataType::INT64, Dimension::Dim1);
    let wire = encode_type_descriptor(&desc);
    c.bench_function("type_descriptor_encode", |b| {
        b.iter(|| encode_type_descriptor(black_box(&desc)))
    });
    c.bench_function("type_descriptor_decode", |b| {
        b.iter(|| decode_type_descriptor(black_box(&wire)))
    });
}

fn bench_stream_descriptor(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_descriptor");
    for &columns in &[8usize, 128, 1024] {
        let desc = wide_descriptor(columns);
        let bytes = to_bytes(&encode_stream_descriptor(&desc));

        group.bench_with_input(BenchmarkId::new("encode", columns), &desc, |b, desc| {
            b.iter(|| to_bytes(&encode_stream_descriptor(black_box(desc))))
        });
        group.bench_with_input(BenchmarkId::new("decode", columns), &bytes, |b, bytes| {
            b.iter(|| {
                let wire: proto::StreamDescriptor = from_bytes(black_box(bytes)).unwrap();
                decode_stream_descriptor(&wire).unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_type_descriptor, bench_stream_descriptor);
criterion_main!(benches);
