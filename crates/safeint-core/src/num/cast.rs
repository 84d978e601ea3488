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

//! # Conversion Algebra
//!
//! Decides, for any source type `A` and destination type `B`, whether every
//! value of `A` is representable in `B` or whether a runtime range check is
//! needed, and performs the checked conversion.
//!
//! The decision is a pure function of the two types' widths and
//! signedness, captured by `CastKind`. Because both are associated
//! constants, `CastKind::of::<A, B>()` is evaluated at compile time and the
//! dispatch in `in_range` folds away after monomorphization: lossless pairs
//! compile to a plain reinterpretation with no branch.
//!
//! | `A`      | `B`      | widths      | kind                      | check                    |
//! |----------|----------|-------------|---------------------------|--------------------------|
//! | signed   | signed   | `wB >= wA`  | `SignedWiden`             | none                     |
//! | unsigned | unsigned | `wB >= wA`  | `UnsignedWiden`           | none                     |
//! | unsigned | signed   | `wB > wA`   | `UnsignedToWiderSigned`   | none                     |
//! | signed   | signed   | `wB < wA`   | `SignedNarrow`            | `min(B) <= v <= max(B)`  |
//! | unsigned | unsigned | `wB < wA`   | `UnsignedNarrow`          | `v <= max(B)`            |
//! | signed   | unsigned | any         | `SignedToUnsigned`        | `v >= 0 && v <= max(B)`  |
//! | unsigned | signed   | `wB <= wA`  | `UnsignedToSignedNarrow`  | `v <= max(B)`            |

use crate::error::{Operation, OverflowError, overflow};
use crate::num::primitive::PrimitiveInt;

/// The classification of a conversion between two integer types.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::CastKind;
///
/// assert_eq!(CastKind::of::<u8, i16>(), CastKind::UnsignedToWiderSigned);
/// assert!(CastKind::of::<u8, i16>().is_lossless());
/// assert_eq!(CastKind::of::<i32, u64>(), CastKind::SignedToUnsigned);
/// assert!(!CastKind::of::<i32, u64>().is_lossless());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastKind {
    /// Signed to signed of equal or greater width.
    SignedWiden,
    /// Unsigned to unsigned of equal or greater width.
    UnsignedWiden,
    /// Unsigned to signed of strictly greater width.
    UnsignedToWiderSigned,
    /// Signed to signed of smaller width.
    SignedNarrow,
    /// Unsigned to unsigned of smaller width.
    UnsignedNarrow,
    /// Signed to unsigned of any width.
    SignedToUnsigned,
    /// Unsigned to signed of equal or smaller width.
    UnsignedToSignedNarrow,
}

impl CastKind {
    /// Classifies a conversion from a type with `from_signed`/`from_bits` to
    /// one with `to_signed`/`to_bits`.
    pub const fn classify(from_signed: bool, from_bits: u32, to_signed: bool, to_bits: u32) -> Self {
        match (from_signed, to_signed) {
            (true, true) if to_bits >= from_bits => Self::SignedWiden,
            (true, true) => Self::SignedNarrow,
            (false, false) if to_bits >= from_bits => Self::UnsignedWiden,
            (false, false) => Self::UnsignedNarrow,
            (false, true) if to_bits > from_bits => Self::UnsignedToWiderSigned,
            (false, true) => Self::UnsignedToSignedNarrow,
            (true, false) => Self::SignedToUnsigned,
        }
    }

    /// Classifies the conversion from `A` to `B`.
    #[inline(always)]
    pub const fn of<A: PrimitiveInt, B: PrimitiveInt>() -> Self {
        Self::classify(A::SIGNED, A::BITS, B::SIGNED, B::BITS)
    }

    /// Returns `true` if every source value is representable in the
    /// destination, so the conversion needs no runtime check.
    #[inline(always)]
    pub const fn is_lossless(self) -> bool {
        matches!(
            self,
            Self::SignedWiden | Self::UnsignedWiden | Self::UnsignedToWiderSigned
        )
    }
}

/// Returns `true` if `value` is representable in `B`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::in_range;
///
/// assert!(in_range::<u8, i32>(255));
/// assert!(!in_range::<u8, i32>(256));
/// assert!(!in_range::<u8, i32>(-1));
/// assert!(in_range::<i64, u16>(u16::MAX));
/// ```
#[inline]
pub fn in_range<B: PrimitiveInt, A: PrimitiveInt>(value: A) -> bool {
    match CastKind::of::<A, B>() {
        CastKind::SignedWiden | CastKind::UnsignedWiden | CastKind::UnsignedToWiderSigned => true,
        CastKind::SignedNarrow => {
            // Both sides are signed, so the canonical views read back as i128 exactly.
            let v = value.to_bits() as i128;
            v <= B::MAX.to_bits() as i128 && v >= B::MIN.to_bits() as i128
        }
        CastKind::UnsignedNarrow | CastKind::UnsignedToSignedNarrow => {
            value.to_bits() <= B::MAX.to_bits()
        }
        CastKind::SignedToUnsigned => !value.is_negative() && value.to_bits() <= B::MAX.to_bits(),
    }
}

/// Converts `value` to `B`, failing if it is not representable.
///
/// On success the result has the same mathematical value as the input.
/// Lossless conversions never fail.
///
/// # Errors
///
/// Returns an `OverflowError` tagged `Operation::Cast` if `value` lies
/// outside `[B::MIN, B::MAX]`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::{cast, Operation};
///
/// assert_eq!(cast::<i8, i64>(-128), Ok(-128i8));
/// assert_eq!(cast::<u32, u8>(7), Ok(7u32));
/// assert_eq!(cast::<u32, i32>(-1).unwrap_err().operation(), Operation::Cast);
/// ```
#[inline]
pub fn cast<B: PrimitiveInt, A: PrimitiveInt>(value: A) -> Result<B, OverflowError> {
    if in_range::<B, A>(value) {
        Ok(B::from_bits(value.to_bits()))
    } else {
        Err(overflow(Operation::Cast))
    }
}

/// Method-call form of `cast` and `in_range` for every `PrimitiveInt`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::SafeCast;
///
/// let n: i64 = 300;
/// assert!(n.safe_cast::<u8>().is_err());
/// assert_eq!(n.safe_cast::<u16>(), Ok(300u16));
/// assert!(n.fits::<i16>());
/// ```
pub trait SafeCast: PrimitiveInt {
    /// Converts `self` to `B`, failing if it is not representable.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if `self` lies outside `[B::MIN, B::MAX]`.
    #[inline]
    fn safe_cast<B: PrimitiveInt>(self) -> Result<B, OverflowError> {
        cast::<B, Self>(self)
    }

    /// Returns `true` if `self` is representable in `B`.
    #[inline]
    fn fits<B: PrimitiveInt>(self) -> bool {
        in_range::<B, Self>(self)
    }
}

impl<T: PrimitiveInt> SafeCast for T {}
