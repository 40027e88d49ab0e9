#[allow(dead_code)]
mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use runset::IntSet;
use utils::get_random_ops;

pub fn mixed_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_updates");
    for &n in [100, 1000].iter() {
        let ops = get_random_ops(n, 4 * n as i32, 342);
        group.bench_with_input(BenchmarkId::new("add_remove", n), &ops, |b, ops| {
            b.iter(|| {
                let mut set = IntSet::new();
                for &(is_add, iv) in ops {
                    if is_add {
                        set.add_all(iv);
                    } else {
                        set.remove_all(iv);
                    }
                }
                black_box(set.size())
            })
        });

        let mut loaded = IntSet::new();
        for &(_, iv) in &ops {
            loaded.add_all(iv);
        }
        group.bench_function(BenchmarkId::new("copy", n), |b| {
            b.iter(|| black_box(loaded.copy()))
        });
    }

    group.finish();
}

criterion_group!(benches, mixed_benchmark);
criterion_main!(benches);
