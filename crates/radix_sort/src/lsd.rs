use crate::TunedParams;
use crate::digits::Digits;
use crate::histogram::Histograms;
use crate::key::RadixKey;
use crate::offsets::build_offsets;
use crate::scatter::scatter;

/// Which half of the buffer pair holds the current ordering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Live {
    Data,
    Scratch,
}

impl Live {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Self::Data => Self::Scratch,
            Self::Scratch => Self::Data,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct PassReport {
    pub passes: usize,
    pub copied_back: bool,
}

/// LSD radix sort over `D` byte digits.
///
/// All digit positions are counted in one scan, then reordered from the least
/// significant upward, alternating `data -> scratch -> data`. `scratch` must
/// hold at least `data.len()` elements; only that prefix is touched.
pub(crate) fn sort<T: RadixKey, const D: usize>(
    data: &mut [T],
    scratch: &mut [T],
    params: &TunedParams,
) -> PassReport {
    debug_assert_eq!(D, T::WIDTH.digits());
    let len = data.len();
    if len < 2 {
        return PassReport::default();
    }
    if params.check_presorted && is_sorted_by_radix(data) {
        return PassReport::default();
    }

    let scratch = &mut scratch[..len];
    let mut hist = Histograms::<D>::count(data);

    let probe = data[0].to_radix();
    let skip: [bool; D] = std::array::from_fn(|position| {
        params.skip_uniform_digits && hist.is_uniform(position, probe.byte_at(position), len)
    });

    build_offsets(&mut hist.tables);

    let mut live = Live::Data;
    let mut passes = 0usize;
    for (position, offsets) in hist.tables.iter_mut().enumerate() {
        if skip[position] {
            continue;
        }
        match live {
            Live::Data => scatter(data, scratch, offsets, position),
            Live::Scratch => scatter(scratch, data, offsets, position),
        }
        live = live.flip();
        passes += 1;
    }

    let copied_back = live == Live::Scratch;
    if copied_back {
        data.copy_from_slice(scratch);
    }

    PassReport {
        passes,
        copied_back,
    }
}

#[inline]
fn is_sorted_by_radix<T: RadixKey>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0].to_radix() <= w[1].to_radix())
}
