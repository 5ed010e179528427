use std::cmp::Ordering;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 300;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 600;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 500;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1000;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= 16_384 {
        apply_small_runtime_config(group);
    } else if size <= 65_536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Keys drawn uniformly over the whole value range of their type.
pub trait SampleKey: Copy + PartialOrd {
    fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_sample_int {
    ($($ty:ty),*) => {
        $(
            impl SampleKey for $ty {
                #[inline]
                fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.random()
                }
            }
        )*
    };
}

macro_rules! impl_sample_float {
    ($($ty:ty => $bits:ty),*) => {
        $(
            impl SampleKey for $ty {
                // Uniform over finite bit patterns, so every exponent shows up.
                #[inline]
                fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    loop {
                        let x = <$ty>::from_bits(rng.random::<$bits>());
                        if x.is_finite() {
                            return x;
                        }
                    }
                }
            }
        )*
    };
}

impl_sample_int!(u8, u16, u32, u64, i8, i16, i32, i64);
impl_sample_float!(f32 => u32, f64 => u64);

pub fn random_keys<T: SampleKey, R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<T> {
    (0..len).map(|_| T::sample(rng)).collect()
}

/// Ascending keys with roughly 1% of positions swapped at random.
pub fn nearly_sorted_keys<T: SampleKey, R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<T> {
    let mut data = random_keys::<T, R>(rng, len);
    data.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    if len > 1 {
        let swaps = (len / 100).max(1);
        for _ in 0..swaps {
            let a = rng.random_range(0..len);
            let b = rng.random_range(0..len);
            data.swap(a, b);
        }
    }
    data
}
