//! Analyzer benchmarks: template preparation and instance extraction.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use upat_analyze::parse;

const TEMPLATE: &str =
    "/shop/:category=string/price/:min=number/tags/:filters=array?page=number&sort=string";
const INSTANCE: &str = "/shop/electronics/price/100/tags/new,sale,popular?page=3&sort=price";

fn bench_template(c: &mut Criterion) {
    c.bench_function("analyze/template", |b| {
        b.iter(|| black_box(parse(black_box(TEMPLATE))));
    });
}

fn bench_instance(c: &mut Criterion) {
    let template = parse(TEMPLATE);
    c.bench_function("analyze/instance_params", |b| {
        b.iter(|| {
            let mut instance = template.instance(black_box(INSTANCE));
            black_box(instance.params().ok());
            black_box(instance.search_params().ok());
        });
    });
}

fn bench_static_props(c: &mut Criterion) {
    let template = parse("/docs/[...path]/view");
    c.bench_function("analyze/static_props", |b| {
        b.iter(|| {
            let mut instance = template.instance(black_box("/docs/guides/testing/intro/view"));
            black_box(instance.static_props());
        });
    });
}

criterion_group!(benches, bench_template, bench_instance, bench_static_props);
criterion_main!(benches);
