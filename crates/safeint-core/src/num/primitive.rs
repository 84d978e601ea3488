// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Integer Type Descriptor
//!
//! `PrimitiveInt` characterizes a native integer type by the two attributes
//! the conversion algebra cares about, its width (`BITS`) and its
//! signedness (`SIGNED`), and links it to its signed and unsigned
//! counterparts of the same width.
//!
//! Every value also has a canonical 128-bit view: `to_bits` sign-extends
//! signed values and zero-extends unsigned ones into a `u128`. Two values of
//! the same signedness are mathematically equal exactly when their canonical
//! views are equal, and truncating a canonical view back with `from_bits`
//! recovers any value that is in range of the destination type. The
//! conversion and comparison modules are written entirely in terms of this
//! view, so no per-pair code is needed.

use crate::num::constants::{PlusOne, Zero};
use crate::num::ops::checked_arithmetic::{
    SafeAbs, SafeAdd, SafeDiv, SafeMul, SafeNeg, SafeRem, SafeSub,
};
use num_traits::PrimInt;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// A native fixed-width integer type.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `u128`, `usize`, `i8`, `i16`,
/// `i32`, `i64`, `i128` and `isize`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::PrimitiveInt;
///
/// fn describe<T: PrimitiveInt>() -> (u32, bool) {
///     (<T as PrimitiveInt>::BITS, T::SIGNED)
/// }
///
/// assert_eq!(describe::<u16>(), (16, false));
/// assert_eq!(describe::<i64>(), (64, true));
/// ```
pub trait PrimitiveInt:
    PrimInt
    + Default
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Zero
    + PlusOne
    + SafeAdd
    + SafeSub
    + SafeMul
    + SafeDiv
    + SafeRem
    + SafeAbs
    + SafeNeg
{
    /// The width of the type in bits.
    const BITS: u32;
    /// `true` if the type can represent negative values.
    const SIGNED: bool;
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;

    /// The signed type of the same width.
    type Signed: PrimitiveInt;
    /// The unsigned type of the same width.
    type Unsigned: PrimitiveInt;

    /// Returns `true` if the value is less than zero. Always `false` for
    /// unsigned types.
    fn is_negative(self) -> bool;

    /// Returns the canonical 128-bit view of the value: sign-extended for
    /// signed types, zero-extended for unsigned types.
    fn to_bits(self) -> u128;

    /// Truncates a canonical 128-bit view to this type.
    ///
    /// Exact for every view produced by `to_bits` of a value that lies in
    /// `[Self::MIN, Self::MAX]`; callers must range-check first.
    fn from_bits(bits: u128) -> Self;
}

/// The signed counterpart of `T`.
pub type SignedOf<T> = <T as PrimitiveInt>::Signed;

/// The unsigned counterpart of `T`.
pub type UnsignedOf<T> = <T as PrimitiveInt>::Unsigned;

macro_rules! impl_primitive_pair {
    ($($u:ty, $s:ty);* $(;)?) => {
        $(
            impl PrimitiveInt for $u {
                const BITS: u32 = <$u>::BITS;
                const SIGNED: bool = false;
                const MIN: Self = <$u>::MIN;
                const MAX: Self = <$u>::MAX;

                type Signed = $s;
                type Unsigned = $u;

                #[inline(always)]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline(always)]
                fn to_bits(self) -> u128 {
                    self as u128
                }

                #[inline(always)]
                fn from_bits(bits: u128) -> Self {
                    bits as $u
                }
            }

            impl PrimitiveInt for $s {
                const BITS: u32 = <$s>::BITS;
                const SIGNED: bool = true;
                const MIN: Self = <$s>::MIN;
                const MAX: Self = <$s>::MAX;

                type Signed = $s;
                type Unsigned = $u;

                #[inline(always)]
                fn is_negative(self) -> bool {
                    self < 0
                }

                // `as` sign-extends when widening a signed integer.
                #[inline(always)]
                fn to_bits(self) -> u128 {
                    self as u128
                }

                #[inline(always)]
                fn from_bits(bits: u128) -> Self {
                    bits as $s
                }
            }
        )*
    };
}

impl_primitive_pair! {
    u8, i8;
    u16, i16;
    u32, i32;
    u64, i64;
    u128, i128;
    usize, isize;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_of<T: PrimitiveInt>() -> u32 {
        <T as PrimitiveInt>::BITS
    }

    fn counterpart_bits<T: PrimitiveInt>() -> (u32, u32) {
        (bits_of::<SignedOf<T>>(), bits_of::<UnsignedOf<T>>())
    }

    #[test]
    fn test_widths_and_signedness() {
        assert_eq!(bits_of::<u8>(), 8);
        assert_eq!(bits_of::<i128>(), 128);
        assert_eq!(bits_of::<usize>(), usize::BITS);
        assert!(<i32 as PrimitiveInt>::SIGNED);
        assert!(!<u32 as PrimitiveInt>::SIGNED);
    }

    #[test]
    fn test_counterparts_share_width() {
        assert_eq!(counterpart_bits::<u16>(), (16, 16));
        assert_eq!(counterpart_bits::<i64>(), (64, 64));
        assert!(<SignedOf<u8> as PrimitiveInt>::SIGNED);
        assert!(!<UnsignedOf<isize> as PrimitiveInt>::SIGNED);
    }

    #[test]
    fn test_canonical_view_sign_extends() {
        assert_eq!(PrimitiveInt::to_bits(-1i8), u128::MAX);
        assert_eq!(PrimitiveInt::to_bits(i64::MIN), (i64::MIN as i128) as u128);
        assert_eq!(PrimitiveInt::to_bits(u8::MAX), 255);
        assert_eq!(PrimitiveInt::to_bits(u128::MAX), u128::MAX);
    }

    #[test]
    fn test_from_bits_recovers_in_range_values() {
        for v in i8::MIN..=i8::MAX {
            let bits = PrimitiveInt::to_bits(v);
            assert_eq!(<i8 as PrimitiveInt>::from_bits(bits), v);
            assert_eq!(<i64 as PrimitiveInt>::from_bits(bits), v as i64);
        }
        assert_eq!(<u8 as PrimitiveInt>::from_bits(0x1_ff), 0xff);
    }

    #[test]
    fn test_is_negative() {
        assert!(PrimitiveInt::is_negative(-3i16));
        assert!(!PrimitiveInt::is_negative(0i16));
        assert!(!PrimitiveInt::is_negative(u64::MAX));
    }
}
