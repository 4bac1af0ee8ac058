use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grip::{ResourcePolicy, UniqueResource};

struct Noop;

impl ResourcePolicy for Noop {
    type Raw = u64;
    const INVALID: u64 = 0;
    fn cleanup(_raw: u64) {}
}

type Held = UniqueResource<Noop>;

fn bench_wrapper_lifecycle(c: &mut Criterion) {
    c.bench_function("unique_resource_new_drop", |b| {
        b.iter(|| {
            // Measure the full construct + drop cycle with a no-op cleanup.
            let held = Held::new(black_box(7));
            black_box(held.get());
        });
    });

    c.bench_function("unique_resource_release", |b| {
        b.iter(|| {
            let mut held = Held::new(black_box(7));
            black_box(held.release());
        });
    });

    c.bench_function("unique_resource_reset_to", |b| {
        let mut held = Held::new(1);
        let mut next = 2u64;
        b.iter(|| {
            held.reset_to(black_box(next));
            next = if next == u64::MAX { 2 } else { next + 1 };
        });
    });

    c.bench_function("unique_resource_swap", |b| {
        let mut a = Held::new(1);
        let mut z = Held::new(2);
        b.iter(|| {
            a.swap(&mut z);
            black_box(a.get());
        });
    });
}

fn bench_acceptor(c: &mut Criterion) {
    c.bench_function("acceptor_adopt_roundtrip", |b| {
        let mut held = Held::new(1);
        let mut next = 2u64;
        b.iter(|| {
            unsafe { *held.acceptor().as_mut_ptr() = black_box(next) };
            next = if next == u64::MAX { 2 } else { next + 1 };
            black_box(held.get());
        });
    });

    c.bench_function("acceptor_untouched_roundtrip", |b| {
        let mut held = Held::new(1);
        b.iter(|| {
            let acceptor = held.acceptor();
            black_box(acceptor.get());
        });
    });
}

criterion_group!(benches, bench_wrapper_lifecycle, bench_acceptor);
criterion_main!(benches);
