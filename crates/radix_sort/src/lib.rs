//! LSD radix sort for fixed-width numeric keys.
//!
//! Keys are mapped onto unsigned integers of the same width whose unsigned
//! order matches the key order (see [`RadixKey`]), then sorted one byte at a
//! time from the least significant digit upward. Supported keys are
//! `u8 u16 u32 u64 i8 i16 i32 i64 f32 f64`.
//!
//! 8-bit keys are sorted by one counting pass directly in the caller's slice.
//! Wider keys need a scratch buffer of the same length: [`sort`] allocates one
//! per call, [`sort_with_buffer`] borrows one from the caller and
//! [`sort_with_ctx`] reuses one across calls.
//!
//! ```
//! let mut data = [1.5_f32, -2.5, 0.0, -0.0, 3.25];
//! radix_sort::sort(&mut data);
//! assert_eq!(data, [-2.5, -0.0, 0.0, 1.5, 3.25]);
//! ```

mod counting;
mod digits;
mod error;
mod histogram;
mod key;
mod lsd;
mod offsets;
mod scatter;

use log::trace;

pub use digits::Digits;
pub use error::SortError;
pub use key::{KeyWidth, RadixKey};

use lsd::PassReport;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TunedParams {
    /// Skip the reordering pass for a digit position where every key has the
    /// same byte.
    pub skip_uniform_digits: bool,
    /// Return before counting when the keys are already non-decreasing.
    pub check_presorted: bool,
}

impl TunedParams {
    /// Reorder every digit position unconditionally.
    pub const FULL_PASSES: Self = Self {
        skip_uniform_digits: false,
        check_presorted: false,
    };
}

impl Default for TunedParams {
    fn default() -> Self {
        TUNED_PARAMS
    }
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    skip_uniform_digits: true,
    check_presorted: true,
};

/// Reusable scratch storage for repeated sorts of one key type.
#[derive(Clone, Debug)]
pub struct SortContext<T> {
    pub scratch: Vec<T>,
    pub params: TunedParams,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            params: TUNED_PARAMS,
        }
    }
}

impl<T: RadixKey> SortContext<T> {
    pub fn with_params(params: TunedParams) -> Self {
        Self {
            scratch: Vec::new(),
            params,
        }
    }

    #[inline]
    pub(crate) fn ensure_scratch(&mut self, len: usize) -> &mut [T] {
        if self.scratch.len() < len {
            self.scratch.resize(len, T::default());
        }
        &mut self.scratch[..len]
    }
}

/// Sorts `data` ascending, allocating a scratch buffer when the key width
/// needs one.
pub fn sort<T: RadixKey>(data: &mut [T]) {
    let mut ctx = SortContext::default();
    sort_with_ctx(data, &mut ctx);
}

/// Sorts `data` ascending using `ctx.scratch` as the auxiliary buffer, growing
/// it if needed.
pub fn sort_with_ctx<T: RadixKey>(data: &mut [T], ctx: &mut SortContext<T>) {
    let params = ctx.params;
    if T::WIDTH.needs_scratch() {
        let scratch = ctx.ensure_scratch(data.len());
        dispatch(data, scratch, &params);
    } else {
        dispatch(data, &mut [], &params);
    }
}

/// Sorts `data` ascending using `temp` as the auxiliary buffer.
///
/// Only `temp[..data.len()]` is written; its contents afterwards are
/// unspecified. 8-bit keys never touch `temp`.
///
/// # Panics
///
/// Panics if the key width needs scratch space and `temp` is shorter than
/// `data`. See [`try_sort_with_buffer`] for a non-panicking variant.
pub fn sort_with_buffer<T: RadixKey>(data: &mut [T], temp: &mut [T]) {
    if let Err(err) = try_sort_with_buffer(data, temp) {
        panic!("radix sort: {err}");
    }
}

/// Sorts `data` ascending using `temp` as the auxiliary buffer, reporting an
/// undersized `temp` instead of panicking. `data` is untouched on error.
pub fn try_sort_with_buffer<T: RadixKey>(
    data: &mut [T],
    temp: &mut [T],
) -> Result<(), SortError> {
    if T::WIDTH.needs_scratch() && temp.len() < data.len() {
        return Err(SortError::ScratchTooSmall {
            needed: data.len(),
            actual: temp.len(),
        });
    }
    dispatch(data, temp, &TUNED_PARAMS);
    Ok(())
}

fn dispatch<T: RadixKey>(data: &mut [T], scratch: &mut [T], params: &TunedParams) {
    let report = match T::WIDTH {
        KeyWidth::W8 => {
            counting::sort_bytes(data);
            PassReport {
                passes: usize::from(data.len() > 1),
                copied_back: false,
            }
        }
        KeyWidth::W16 => lsd::sort::<T, 2>(data, scratch, params),
        KeyWidth::W32 => lsd::sort::<T, 4>(data, scratch, params),
        KeyWidth::W64 => lsd::sort::<T, 8>(data, scratch, params),
    };

    trace!(
        "radix sort: width={:?} len={} passes={} copied_back={}",
        T::WIDTH,
        data.len(),
        report.passes,
        report.copied_back
    );
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    /// Reference order: `sort_unstable` for integers, `total_cmp` for floats.
    /// Results are compared through `to_radix`, which is bitwise equality.
    trait Reference: RadixKey {
        fn reference_sort(data: &mut [Self]);
        fn sample(rng: &mut StdRng) -> Self;
    }

    macro_rules! impl_reference_int {
        ($($ty:ty),*) => {
            $(
                impl Reference for $ty {
                    fn reference_sort(data: &mut [Self]) {
                        data.sort_unstable();
                    }

                    fn sample(rng: &mut StdRng) -> Self {
                        rng.random()
                    }
                }
            )*
        };
    }

    macro_rules! impl_reference_float {
        ($($ty:ty => $bits:ty),*) => {
            $(
                impl Reference for $ty {
                    fn reference_sort(data: &mut [Self]) {
                        data.sort_unstable_by(<$ty>::total_cmp);
                    }

                    fn sample(rng: &mut StdRng) -> Self {
                        <$ty>::from_bits(rng.random::<$bits>())
                    }
                }
            )*
        };
    }

    impl_reference_int!(u8, u16, u32, u64, i8, i16, i32, i64);
    impl_reference_float!(f32 => u32, f64 => u64);

    fn bits<T: RadixKey>(data: &[T]) -> Vec<T::Bits> {
        data.iter().map(|x| x.to_radix()).collect()
    }

    fn assert_sorts_like_reference<T: Reference>(data: &[T]) {
        let mut expected = data.to_vec();
        T::reference_sort(&mut expected);

        let mut actual = data.to_vec();
        sort(&mut actual);
        assert_eq!(bits(&actual), bits(&expected), "sort len={}", data.len());

        let mut actual = data.to_vec();
        let mut temp = vec![T::default(); data.len()];
        sort_with_buffer(&mut actual, &mut temp);
        assert_eq!(bits(&actual), bits(&expected), "sort_with_buffer len={}", data.len());

        let mut actual = data.to_vec();
        let mut ctx = SortContext::with_params(TunedParams::FULL_PASSES);
        sort_with_ctx(&mut actual, &mut ctx);
        assert_eq!(bits(&actual), bits(&expected), "full passes len={}", data.len());

        // Sorting sorted output changes nothing.
        sort(&mut actual);
        assert_eq!(bits(&actual), bits(&expected), "idempotence len={}", data.len());
    }

    fn random_vec<T: Reference>(rng: &mut StdRng, len: usize) -> Vec<T> {
        (0..len).map(|_| T::sample(rng)).collect()
    }

    fn check_type<T: Reference>(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);

        for len in 0..=64 {
            let data = random_vec::<T>(&mut rng, len);
            assert_sorts_like_reference::<T>(&data);
        }

        for &len in &[100_usize, 255, 256, 257, 1_000, 4_099, 10_007, 100_000] {
            let data = random_vec::<T>(&mut rng, len);
            assert_sorts_like_reference::<T>(&data);

            let mut ascending = data.clone();
            T::reference_sort(&mut ascending);
            assert_sorts_like_reference::<T>(&ascending);

            let descending: Vec<T> = ascending.iter().rev().copied().collect();
            assert_sorts_like_reference::<T>(&descending);

            let equal = vec![data[len / 2]; len];
            assert_sorts_like_reference::<T>(&equal);

            // Few distinct values.
            let pool = random_vec::<T>(&mut rng, 7);
            let dups: Vec<T> = (0..len).map(|_| pool[rng.random_range(0..pool.len())]).collect();
            assert_sorts_like_reference::<T>(&dups);
        }
    }

    #[test]
    fn u8_matches_reference() {
        check_type::<u8>(0x5EED_0008);
    }

    #[test]
    fn i8_matches_reference() {
        check_type::<i8>(0x5EED_1008);
    }

    #[test]
    fn u16_matches_reference() {
        check_type::<u16>(0x5EED_0016);
    }

    #[test]
    fn i16_matches_reference() {
        check_type::<i16>(0x5EED_1016);
    }

    #[test]
    fn u32_matches_reference() {
        check_type::<u32>(0x5EED_0032);
    }

    #[test]
    fn i32_matches_reference() {
        check_type::<i32>(0x5EED_1032);
    }

    #[test]
    fn u64_matches_reference() {
        check_type::<u64>(0x5EED_0064);
    }

    #[test]
    fn i64_matches_reference() {
        check_type::<i64>(0x5EED_1064);
    }

    #[test]
    fn f32_matches_reference() {
        check_type::<f32>(0x5EED_2032);
    }

    #[test]
    fn f64_matches_reference() {
        check_type::<f64>(0x5EED_2064);
    }

    #[test]
    fn concrete_scenarios() {
        let mut a = [3_i32, 1, 2];
        sort(&mut a);
        assert_eq!(a, [1, 2, 3]);

        let mut b = [-5_i16, 3, -1, 0];
        sort(&mut b);
        assert_eq!(b, [-5, -1, 0, 3]);

        let mut c = [1.5_f32, -2.5, 0.0, -0.0, 3.25];
        sort(&mut c);
        assert_eq!(c, [-2.5, -0.0, 0.0, 1.5, 3.25]);
        assert!(c[1].is_sign_negative());
        assert!(c[2].is_sign_positive());

        let mut d: [u32; 0] = [];
        sort(&mut d);
        let mut temp: [u32; 0] = [];
        sort_with_buffer(&mut d, &mut temp);

        let mut e = [200_u8, 0, 255, 127];
        sort(&mut e);
        assert_eq!(e, [0, 127, 200, 255]);
    }

    #[test]
    fn edge_cases() {
        let cases: [Vec<i64>; 6] = [
            vec![],
            vec![42],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, -1, i64::MIN + 1],
        ];
        for case in &cases {
            assert_sorts_like_reference::<i64>(case);
        }

        let floats = [
            f32::INFINITY,
            -0.0,
            f32::MIN_POSITIVE,
            f32::NEG_INFINITY,
            -f32::from_bits(1),
            0.0,
            f32::from_bits(1),
            f32::MAX,
            f32::MIN,
            -1.0,
        ];
        assert_sorts_like_reference::<f32>(&floats);
    }

    #[test]
    fn nans_sort_by_bit_pattern() {
        let pos_nan = f32::NAN.abs();
        let neg_nan = -pos_nan;
        let mut data = [1.0_f32, pos_nan, f32::NEG_INFINITY, neg_nan, f32::INFINITY, -1.0];
        sort(&mut data);
        let raw: Vec<u32> = data.iter().map(|x| x.to_bits()).collect();
        let expected: Vec<u32> = [neg_nan, f32::NEG_INFINITY, -1.0, 1.0, f32::INFINITY, pos_nan]
            .iter()
            .map(|x| x.to_bits())
            .collect();
        assert_eq!(raw, expected);
    }

    #[test]
    fn million_i64_with_exact_scratch() {
        let mut rng = StdRng::seed_from_u64(0x1E6_2026);
        let data: Vec<i64> = (0..1_000_000).map(|_| rng.random()).collect();

        let mut expected = data.clone();
        expected.sort_unstable();

        let mut actual = data;
        let mut temp = vec![0_i64; actual.len()];
        sort_with_buffer(&mut actual, &mut temp);
        assert_eq!(actual, expected);
    }

    #[test]
    fn short_scratch_is_reported() {
        let mut data = vec![3_u32, 2, 1];
        let mut temp = vec![0_u32; 2];
        assert_eq!(
            try_sort_with_buffer(&mut data, &mut temp),
            Err(SortError::ScratchTooSmall {
                needed: 3,
                actual: 2
            })
        );
        assert_eq!(data, [3, 2, 1]);

        // Single-byte keys never need scratch.
        let mut bytes = vec![3_u8, 2, 1];
        assert_eq!(try_sort_with_buffer(&mut bytes, &mut []), Ok(()));
        assert_eq!(bytes, [1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "scratch buffer holds 1 elements, sort needs 2")]
    fn short_scratch_panics() {
        let mut data = [2.0_f64, 1.0];
        let mut temp = [0.0_f64];
        sort_with_buffer(&mut data, &mut temp);
    }

    #[test]
    fn context_scratch_is_reused() {
        let mut rng = StdRng::seed_from_u64(0xC7C_2026);
        let mut ctx = SortContext::<u32>::default();
        for &len in &[1000_usize, 10, 5000, 3] {
            let mut data: Vec<u32> = (0..len).map(|_| rng.random()).collect();
            let mut expected = data.clone();
            expected.sort_unstable();
            sort_with_ctx(&mut data, &mut ctx);
            assert_eq!(data, expected);
        }
        assert_eq!(ctx.scratch.len(), 5000);

        let mut bytes_ctx = SortContext::<i8>::default();
        let mut bytes = vec![1_i8, -1, 0];
        sort_with_ctx(&mut bytes, &mut bytes_ctx);
        assert_eq!(bytes, [-1, 0, 1]);
        assert!(bytes_ctx.scratch.is_empty());
    }

    #[test]
    fn key_widths() {
        assert_eq!(<u8 as RadixKey>::WIDTH, KeyWidth::W8);
        assert_eq!(<i16 as RadixKey>::WIDTH, KeyWidth::W16);
        assert_eq!(<f32 as RadixKey>::WIDTH, KeyWidth::W32);
        assert_eq!(<i64 as RadixKey>::WIDTH, KeyWidth::W64);
        assert_eq!(<f64 as RadixKey>::WIDTH.digits(), 8);
    }
}
