use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prettify::{to_value, Printer, Value, ValueMap};
use serde::Serialize;

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
    payload: Vec<u8>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn benchmark_render_record(c: &mut Criterion) {
    let user = to_value(&User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    })
    .unwrap();
    let printer = Printer::plain();

    c.bench_function("render_record", |b| {
        b.iter(|| printer.format(black_box(&user)))
    });
}

fn benchmark_render_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_map");

    for size in [10, 100, 1000].iter() {
        let mut map = ValueMap::new();
        for i in 0..*size {
            map.insert(format!("key{:04}", i), i as i64);
        }
        let value = Value::Map(map);
        let printer = Printer::plain();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| printer.format(black_box(&value)))
        });
    }
    group.finish();
}

fn benchmark_render_nested(c: &mut Criterion) {
    let data = to_value(&NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
        payload: (0..64).collect(),
    })
    .unwrap();
    let printer = Printer::plain();

    c.bench_function("render_nested_struct", |b| {
        b.iter(|| printer.format(black_box(&data)))
    });
}

fn benchmark_render_seq(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_seq");

    let numbers = Value::Seq((0..100).map(Value::Int).collect());
    let strings = Value::Seq((0..100).map(|i| Value::from(format!("item {}", i))).collect());

    let printer = Printer::plain();
    let compact = Printer::plain().with_compact_seq(true);

    group.bench_function("integers", |b| {
        b.iter(|| printer.format(black_box(&numbers)))
    });

    group.bench_function("integers_compact", |b| {
        b.iter(|| compact.format(black_box(&numbers)))
    });

    group.bench_function("strings", |b| {
        b.iter(|| printer.format(black_box(&strings)))
    });

    group.finish();
}

fn benchmark_hex_dump(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex_dump");

    for size in [16, 256, 4096].iter() {
        let bytes = Value::bytes((0..*size).map(|i| (i % 256) as u8).collect::<Vec<u8>>());
        let printer = Printer::plain();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| printer.format(black_box(&bytes)))
        });
    }
    group.finish();
}

fn benchmark_sorted_vs_unsorted(c: &mut Criterion) {
    let mut map = ValueMap::new();
    for i in (0..500).rev() {
        map.insert(format!("key{:04}", i), i as i64);
    }
    let value = Value::Map(map);

    let mut group = c.benchmark_group("key_sorting");

    let sorted = Printer::plain();
    let unsorted = Printer::plain().with_sort_keys(prettify::SortKeys::Unsorted);

    group.bench_function("ascending", |b| b.iter(|| sorted.format(black_box(&value))));
    group.bench_function("unsorted", |b| {
        b.iter(|| unsorted.format(black_box(&value)))
    });

    group.finish();
}

fn benchmark_to_value(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("to_value_struct", |b| b.iter(|| to_value(black_box(&user))));
}

criterion_group!(
    benches,
    benchmark_render_record,
    benchmark_render_map,
    benchmark_render_nested,
    benchmark_render_seq,
    benchmark_hex_dump,
    benchmark_sorted_vs_unsorted,
    benchmark_to_value
);
criterion_main!(benches);
