use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use runset::Interval;

//// Utility functions

pub(crate) fn get_random_intervals(
    n: usize,
    domain: i32,
    max_width: i32,
    seed: u64,
) -> Vec<Interval> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::new();
    for _i in 0..n {
        let low = rng.gen_range(-domain, domain);
        let high = low.saturating_add(rng.gen_range(0, max_width));
        results.push(Interval::new(low, high).unwrap());
    }

    results
}

pub(crate) fn get_random_ops(n: usize, domain: i32, seed: u64) -> Vec<(bool, Interval)> {
    let mut rng = SmallRng::seed_from_u64(seed);
    get_random_intervals(n, domain, 16, seed.wrapping_add(1))
        .into_iter()
        .map(|iv| (rng.gen_bool(0.6), iv))
        .collect()
}
