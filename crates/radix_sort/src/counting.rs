use crate::digits::{Digits, RADIX};
use crate::key::RadixKey;
use crate::offsets::exclusive_prefix_sum;

/// Counting sort for single-byte keys.
///
/// The whole key is one digit, so a single 256-bucket table describes the
/// sorted output completely and the slice is rewritten value by value without
/// a scratch buffer. Equal 8-bit keys are indistinguishable, so no source
/// order needs to survive.
pub fn sort_bytes<T: RadixKey>(data: &mut [T]) {
    debug_assert_eq!(<T::Bits as Digits>::BYTES, 1);
    if data.len() < 2 {
        return;
    }

    let mut starts = [0usize; RADIX];
    for &x in data.iter() {
        starts[x.to_radix().byte_at(0)] += 1;
    }
    let len = exclusive_prefix_sum(&mut starts);

    for v in 0..RADIX {
        let start = starts[v];
        let end = if v + 1 < RADIX { starts[v + 1] } else { len };
        if start < end {
            data[start..end].fill(T::from_radix(<T::Bits as Digits>::from_byte(v as u8)));
        }
    }
}
