use std::fmt::Debug;

use crate::digits::Digits;

/// Number of base-256 digits in a key, which selects the sort plan.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum KeyWidth {
    W8,
    W16,
    W32,
    W64,
}

impl KeyWidth {
    pub const fn digits(self) -> usize {
        match self {
            Self::W8 => 1,
            Self::W16 => 2,
            Self::W32 => 4,
            Self::W64 => 8,
        }
    }

    /// 8-bit keys are sorted by a single counting pass that rewrites the slice
    /// in place; every wider key ping-pongs through a scratch buffer.
    pub const fn needs_scratch(self) -> bool {
        !matches!(self, Self::W8)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width key with an order-preserving map onto an unsigned integer.
///
/// For any keys `a` and `b` of the same type, `a < b` iff
/// `a.to_radix() < b.to_radix()`. The map is a bijection and
/// [`RadixKey::from_radix`] is its inverse.
///
/// Floating-point keys order by their sign-magnitude encoding: `-0.0` sorts
/// directly before `0.0`, and NaNs land at either end depending on their sign
/// bit.
pub trait RadixKey: Copy + Default + PartialOrd + Debug + sealed::Sealed {
    type Bits: Digits;

    const WIDTH: KeyWidth;

    fn to_radix(self) -> Self::Bits;

    fn from_radix(bits: Self::Bits) -> Self;
}

macro_rules! impl_unsigned {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl RadixKey for $ty {
                type Bits = $ty;

                const WIDTH: KeyWidth = KeyWidth::$width;

                #[inline(always)]
                fn to_radix(self) -> Self::Bits {
                    self
                }

                #[inline(always)]
                fn from_radix(bits: Self::Bits) -> Self {
                    bits
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($ty:ty => $bits:ty, $width:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl RadixKey for $ty {
                type Bits = $bits;

                const WIDTH: KeyWidth = KeyWidth::$width;

                // Flipping the sign bit maps MIN to 0 and MAX to the unsigned MAX.
                #[inline(always)]
                fn to_radix(self) -> Self::Bits {
                    (self as $bits) ^ (1 << (<$bits>::BITS - 1))
                }

                #[inline(always)]
                fn from_radix(bits: Self::Bits) -> Self {
                    (bits ^ (1 << (<$bits>::BITS - 1))) as $ty
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty => $bits:ty, $signed:ty, $width:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl RadixKey for $ty {
                type Bits = $bits;

                const WIDTH: KeyWidth = KeyWidth::$width;

                // Negative: complement every bit. Non-negative: set the sign bit.
                #[inline(always)]
                fn to_radix(self) -> Self::Bits {
                    const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                    let raw = <$ty>::to_bits(self);
                    let mask = ((raw as $signed) >> (<$bits>::BITS - 1)) as $bits | SIGN;
                    raw ^ mask
                }

                #[inline(always)]
                fn from_radix(bits: Self::Bits) -> Self {
                    const SIGN: $bits = 1 << (<$bits>::BITS - 1);
                    let mask = (((!bits) as $signed) >> (<$bits>::BITS - 1)) as $bits | SIGN;
                    <$ty>::from_bits(bits ^ mask)
                }
            }
        )*
    };
}

impl_unsigned!(u8 => W8, u16 => W16, u32 => W32, u64 => W64);
impl_signed!(i8 => u8, W8, i16 => u16, W16, i32 => u32, W32, i64 => u64, W64);
impl_float!(f32 => u32, i32, W32, f64 => u64, i64, W64);
