//! Scanner benchmarks.
//!
//! Measures scanning throughput across template shapes and input sizes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use upat_lexer::scan;

const STATIC_PATH: &str = "/api/v1/users/list";
const TYPED_TEMPLATE: &str = "/users/:id=number/posts/:slug?sort=string&page=number#comments";
const CATCH_ALL: &str = "/docs/[...path]/view";
const ABSOLUTE: &str = "https://api.example.com:8443/v2/items?tag=a&tag=b";

fn generate_path(segments: usize) -> String {
    (0..segments)
        .map(|i| if i % 3 == 0 { format!("/:p{i}") } else { format!("/seg{i}") })
        .collect()
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/shapes");
    for (name, input) in [
        ("static_path", STATIC_PATH),
        ("typed_template", TYPED_TEMPLATE),
        ("catch_all", CATCH_ALL),
        ("absolute", ABSOLUTE),
    ] {
        group.bench_function(name, |b| b.iter(|| black_box(scan(black_box(input)))));
    }
    group.finish();
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/scaling");
    for segments in [4, 16, 64] {
        let input = generate_path(segments);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(segments), &input, |b, input| {
            b.iter(|| black_box(scan(input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shapes, bench_scaling);
criterion_main!(benches);
