use crate::digits::{Digits, RADIX};
use crate::key::RadixKey;

/// One frequency table per digit position, filled by a single scan.
///
/// After [`crate::offsets::build_offsets`] the same storage holds the offset
/// tables consumed by the reordering passes.
#[derive(Clone, Debug)]
pub struct Histograms<const D: usize> {
    pub tables: [[usize; RADIX]; D],
}

impl<const D: usize> Histograms<D> {
    pub fn new() -> Self {
        Self {
            tables: [[0; RADIX]; D],
        }
    }

    /// Counts every digit position of every key in `src`.
    pub fn count<T: RadixKey>(src: &[T]) -> Self {
        debug_assert!(D <= <T::Bits as Digits>::BYTES);
        let mut hist = Self::new();
        let tables = &mut hist.tables;

        let mut chunks = src.chunks_exact(4);
        for chunk in &mut chunks {
            let k0 = chunk[0].to_radix();
            let k1 = chunk[1].to_radix();
            let k2 = chunk[2].to_radix();
            let k3 = chunk[3].to_radix();

            for (position, table) in tables.iter_mut().enumerate() {
                table[k0.byte_at(position)] += 1;
                table[k1.byte_at(position)] += 1;
                table[k2.byte_at(position)] += 1;
                table[k3.byte_at(position)] += 1;
            }
        }

        for x in chunks.remainder() {
            let k = x.to_radix();
            for (position, table) in tables.iter_mut().enumerate() {
                table[k.byte_at(position)] += 1;
            }
        }

        hist
    }

    /// Whether every key shares the byte `probe` at `position`, i.e. reordering
    /// by that digit would leave the sequence unchanged.
    #[inline]
    pub fn is_uniform(&self, position: usize, probe: usize, len: usize) -> bool {
        self.tables[position][probe] == len
    }
}

impl<const D: usize> Default for Histograms<D> {
    fn default() -> Self {
        Self::new()
    }
}
