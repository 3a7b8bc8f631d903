use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rolodex::{contact::ContactDraft, directory::ContactDirectory};

fn draft(i: u64) -> ContactDraft {
    ContactDraft {
        name: format!("Contact{i}"),
        phone_number: format!("555-{i:04}"),
    }
}

fn bench_adds(c: &mut Criterion) {
    c.bench_function("directory_add_10k", |b| {
        b.iter(|| {
            let mut dir = ContactDirectory::new();
            for i in 0..10_000u64 {
                let _ = dir.add(draft(i)).expect("add");
            }
        });
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let mut dir = ContactDirectory::new();
    for i in 0..10_000u64 {
        let _ = dir.add(draft(i)).expect("add");
    }

    for query in ["contact99", "555-00"] {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, &query| {
            b.iter(|| {
                let _ = dir.search(query);
            });
        });
    }

    group.finish();
}

fn bench_aggregate_calls(c: &mut Criterion) {
    let mut dir = ContactDirectory::new();
    for i in 0..1_000u64 {
        let id = dir.add(draft(i)).expect("add");
        for call in 0..10u64 {
            dir.record_call(id, format!("call {call}")).expect("record");
        }
    }

    c.bench_function("aggregate_calls_10k", |b| {
        b.iter(|| {
            let _ = dir.all_calls_recent_order();
        });
    });
}

criterion_group!(benches, bench_adds, bench_search, bench_aggregate_calls);
criterion_main!(benches);
