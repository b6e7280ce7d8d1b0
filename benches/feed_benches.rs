use criterion::{black_box, BenchmarkId, Criterion};
use phase_rose::phase_feed;

pub fn bench_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed");

    // Benchmark the producer side, which has to be real-time safe
    group.bench_function("try_push", |b| {
        let (sender, receiver) = phase_feed(4096);
        b.iter(|| {
            if !sender.try_push(black_box(1.0)) {
                receiver.drain(|_| ());
            }
        });
    });

    // Benchmark draining batches of different sizes
    for batch_size in [16, 256, 4096] {
        group.bench_with_input(
            BenchmarkId::new("drain", batch_size),
            &batch_size,
            |b, &batch_size| {
                let (sender, receiver) = phase_feed(batch_size);
                b.iter(|| {
                    for i in 0..batch_size {
                        sender.try_push(i as f64);
                    }

                    let mut sum = 0.0;
                    receiver.drain(|angle| sum += angle);
                    black_box(sum)
                });
            },
        );
    }

    group.finish();
}
