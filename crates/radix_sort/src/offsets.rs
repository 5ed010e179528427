use crate::digits::RADIX;

/// Rewrites a frequency table into its exclusive prefix sum and returns the
/// total count.
///
/// Bucket `v` starts right after every bucket below it, so scattering in
/// source order yields an ascending, stable placement.
#[inline]
pub fn exclusive_prefix_sum(table: &mut [usize; RADIX]) -> usize {
    let mut sum = 0usize;
    for c in table.iter_mut() {
        let old = *c;
        *c = sum;
        sum += old;
    }
    sum
}

/// Turns every frequency table into an offset table in one sweep over the
/// byte values, advancing all running sums together.
pub fn build_offsets<const D: usize>(tables: &mut [[usize; RADIX]; D]) {
    let mut sums = [0usize; D];
    for v in 0..RADIX {
        for (table, sum) in tables.iter_mut().zip(sums.iter_mut()) {
            let old = table[v];
            table[v] = *sum;
            *sum += old;
        }
    }
}
