use crate::digits::{Digits, RADIX};
use crate::key::RadixKey;

/// Stable reordering pass for one digit position.
///
/// Walks `src` front to back and writes each key, untransformed, to
/// `dst[offsets[digit]]`, bumping that offset. `offsets` must be the offset
/// table built from the same keys at the same `position`.
#[inline]
pub fn scatter<T: RadixKey>(
    src: &[T],
    dst: &mut [T],
    offsets: &mut [usize; RADIX],
    position: usize,
) {
    debug_assert_eq!(src.len(), dst.len());

    let mut chunks = src.chunks_exact(4);
    for chunk in &mut chunks {
        let d0 = chunk[0].to_radix().byte_at(position);
        let d1 = chunk[1].to_radix().byte_at(position);
        let d2 = chunk[2].to_radix().byte_at(position);
        let d3 = chunk[3].to_radix().byte_at(position);

        place(dst, offsets, d0, chunk[0]);
        place(dst, offsets, d1, chunk[1]);
        place(dst, offsets, d2, chunk[2]);
        place(dst, offsets, d3, chunk[3]);
    }

    for &x in chunks.remainder() {
        place(dst, offsets, x.to_radix().byte_at(position), x);
    }
}

#[inline(always)]
fn place<T: Copy>(dst: &mut [T], offsets: &mut [usize; RADIX], digit: usize, x: T) {
    let pos = offsets[digit];
    dst[pos] = x;
    offsets[digit] = pos + 1;
}
