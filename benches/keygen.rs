use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linksy::keygen::{CollisionProber, encode, next_prime_after, select_length};
use linksy::services::LinkService;
use linksy::storage::MemoryStorage;
use std::sync::Arc;

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for len in [20usize, 200, 2000] {
        let url = format!("https://example.com/{}", "a".repeat(len));
        group.bench_with_input(BenchmarkId::from_parameter(len), &url, |b, url| {
            b.iter(|| encode(black_box(url)))
        });
    }
    group.finish();
}

fn bench_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_length");
    for n in [10u64, 10_000, 10_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| select_length(black_box(n)))
        });
    }
    group.finish();

    c.bench_function("next_prime_after/1e9", |b| {
        b.iter(|| next_prime_after(black_box(1_000_000_000)))
    });
}

fn bench_create(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("create_short_link/memory", |b| {
        let service = LinkService::new(Arc::new(MemoryStorage::new()), CollisionProber::default());
        let mut i = 0u64;
        b.to_async(&rt).iter(|| {
            i += 1;
            let target = format!("https://example.com/bench/{}", i);
            let service = &service;
            async move { service.create_short_link(&target).await.unwrap() }
        })
    });
}

criterion_group!(benches, bench_encode, bench_length, bench_create);
criterion_main!(benches);
