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

//! # Limits and Signedness Queries
//!
//! Type-level queries that hook `Integer<T>` into generic numeric code:
//!
//! - `NumericLimits` exposes the representable range and width of native
//!   and wrapped integers alike.
//! - `SignednessQuery` reports signedness and names the signed and unsigned
//!   counterparts of a type; `MakeSigned<T>` and `MakeUnsigned<T>` are the
//!   corresponding type aliases.
//! - The `num-traits` vocabulary (`Bounded`, `Zero`, `One`, the `Checked*`
//!   family, `ToPrimitive`, `FromPrimitive`, `NumCast`) is implemented for
//!   `Integer<T>` on top of the checked operations, so code written against
//!   `num-traits` sees overflow as `None` instead of wraparound.

use crate::integer::Integer;
use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub,
    FromPrimitive, NumCast, One, ToPrimitive,
};
use safeint_core::{PrimitiveInt, cast};

/// The representable range of an integer type.
///
/// # Examples
///
/// ```rust
/// # use safeint::{Integer, NumericLimits};
///
/// fn span<T: NumericLimits>() -> (T, T) {
///     (T::LOWEST, T::MAX)
/// }
///
/// assert_eq!(span::<i8>(), (-128, 127));
/// assert_eq!(<Integer<u16> as NumericLimits>::MAX.get(), u16::MAX);
/// ```
pub trait NumericLimits: Copy {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
    /// The most negative representable value. Identical to `MIN` for
    /// integers.
    const LOWEST: Self;
    /// The width in bits.
    const BITS: u32;
}

/// Signedness of an integer type and its same-width counterparts.
///
/// # Examples
///
/// ```rust
/// # use safeint::{Integer, MakeSigned, MakeUnsigned, SignednessQuery};
///
/// assert!(<i32 as SignednessQuery>::SIGNED);
/// assert!(<Integer<u32> as SignednessQuery>::UNSIGNED);
///
/// let s: MakeSigned<Integer<u8>> = Integer::new(-1i8);
/// let u: MakeUnsigned<i64> = 1u64;
/// assert!(s.is_negative());
/// assert_eq!(u, 1);
/// ```
pub trait SignednessQuery {
    /// `true` if the type can represent negative values.
    const SIGNED: bool;
    /// `true` if the type cannot represent negative values.
    const UNSIGNED: bool = !Self::SIGNED;

    /// The signed type of the same width.
    type SignedType;
    /// The unsigned type of the same width.
    type UnsignedType;
}

/// The signed counterpart of `T`.
pub type MakeSigned<T> = <T as SignednessQuery>::SignedType;

/// The unsigned counterpart of `T`.
pub type MakeUnsigned<T> = <T as SignednessQuery>::UnsignedType;

macro_rules! impl_native_limits {
    ($($t:ty),* $(,)?) => {
        $(
            impl NumericLimits for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const LOWEST: Self = <$t>::MIN;
                const BITS: u32 = <$t>::BITS;
            }

            impl SignednessQuery for $t {
                const SIGNED: bool = <$t as PrimitiveInt>::SIGNED;

                type SignedType = <$t as PrimitiveInt>::Signed;
                type UnsignedType = <$t as PrimitiveInt>::Unsigned;
            }
        )*
    };
}

impl_native_limits!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T> NumericLimits for Integer<T>
where
    T: PrimitiveInt,
{
    const MIN: Self = Self::new(T::MIN);
    const MAX: Self = Self::new(T::MAX);
    const LOWEST: Self = Self::new(T::MIN);
    const BITS: u32 = T::BITS;
}

impl<T> SignednessQuery for Integer<T>
where
    T: PrimitiveInt,
{
    const SIGNED: bool = T::SIGNED;

    type SignedType = Integer<T::Signed>;
    type UnsignedType = Integer<T::Unsigned>;
}

impl<T> Bounded for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline(always)]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<T> num_traits::Zero for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline(always)]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        self.get() == T::ZERO
    }
}

impl<T> One for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline(always)]
    fn one() -> Self {
        Self::ONE
    }
}

macro_rules! impl_num_checked {
    ($trait_name:ident, $method:ident, $try_method:ident) => {
        impl<T> $trait_name for Integer<T>
        where
            T: PrimitiveInt,
        {
            #[inline]
            fn $method(&self, v: &Self) -> Option<Self> {
                self.$try_method(*v).ok()
            }
        }
    };
}

impl_num_checked!(CheckedAdd, checked_add, try_add);
impl_num_checked!(CheckedSub, checked_sub, try_sub);
impl_num_checked!(CheckedMul, checked_mul, try_mul);
impl_num_checked!(CheckedDiv, checked_div, try_div);
impl_num_checked!(CheckedRem, checked_rem, try_rem);

impl<T> CheckedNeg for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline]
    fn checked_neg(&self) -> Option<Self> {
        self.try_neg().ok()
    }
}

impl<T> ToPrimitive for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        cast::<i64, T>(self.get()).ok()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        cast::<u64, T>(self.get()).ok()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        cast::<i128, T>(self.get()).ok()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        cast::<u128, T>(self.get()).ok()
    }
}

impl<T> FromPrimitive for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Self::try_from_int(n).ok()
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Self::try_from_int(n).ok()
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Self::try_from_int(n).ok()
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Self::try_from_int(n).ok()
    }
}

impl<T> NumCast for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline]
    fn from<N: ToPrimitive>(n: N) -> Option<Self> {
        <T as NumCast>::from(n).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_checked<T: CheckedAdd + num_traits::Zero + Copy>(values: &[T]) -> Option<T> {
        values
            .iter()
            .try_fold(T::zero(), |acc, v| acc.checked_add(v))
    }

    #[test]
    fn test_native_limits() {
        assert_eq!(<u8 as NumericLimits>::MIN, 0);
        assert_eq!(<u8 as NumericLimits>::MAX, 255);
        assert_eq!(<i64 as NumericLimits>::LOWEST, i64::MIN);
        assert_eq!(<i128 as NumericLimits>::BITS, 128);
        assert_eq!(<usize as NumericLimits>::BITS, usize::BITS);
    }

    #[test]
    fn test_wrapped_limits_match_native() {
        assert_eq!(<Integer<i16> as NumericLimits>::MIN.get(), i16::MIN);
        assert_eq!(<Integer<i16> as NumericLimits>::MAX.get(), i16::MAX);
        assert_eq!(<Integer<i16> as NumericLimits>::LOWEST.get(), i16::MIN);
        assert_eq!(<Integer<u32> as NumericLimits>::BITS, 32);
        assert_eq!(<Integer<u64> as Bounded>::max_value().get(), u64::MAX);
        assert_eq!(<Integer<i8> as Bounded>::min_value().get(), i8::MIN);
    }

    #[test]
    fn test_signedness_queries() {
        assert!(<i8 as SignednessQuery>::SIGNED);
        assert!(!<i8 as SignednessQuery>::UNSIGNED);
        assert!(<u128 as SignednessQuery>::UNSIGNED);
        assert!(<Integer<isize> as SignednessQuery>::SIGNED);
        assert!(<Integer<usize> as SignednessQuery>::UNSIGNED);

        let signed: MakeSigned<u16> = -1i16;
        let unsigned: MakeUnsigned<Integer<i32>> = Integer::new(u32::MAX);
        assert_eq!(signed, -1);
        assert_eq!(unsigned.get(), u32::MAX);
    }

    #[test]
    fn test_zero_and_one() {
        use num_traits::Zero as _;

        assert!(Integer::<u8>::zero().is_zero());
        assert!(!Integer::<i8>::one().is_zero());
        assert_eq!(Integer::<i64>::one().get(), 1);
    }

    #[test]
    fn test_checked_family_reports_overflow_as_none() {
        let max = Integer::new(u8::MAX);
        let one = Integer::new(1u8);
        assert_eq!(max.checked_add(&one), None);
        assert_eq!(one.checked_sub(&max), None);
        assert_eq!(max.checked_mul(&Integer::new(2u8)), None);
        assert_eq!(max.checked_div(&Integer::new(0u8)), None);
        assert_eq!(max.checked_rem(&Integer::new(0u8)), None);
        assert_eq!(Integer::new(i32::MIN).checked_neg(), None);
        assert_eq!(max.checked_sub(&one).map(Integer::get), Some(254));
    }

    #[test]
    fn test_generic_num_traits_code_sees_overflow() {
        let fits = [Integer::new(100u8), Integer::new(100u8), Integer::new(55u8)];
        let spills = [Integer::new(100u8), Integer::new(100u8), Integer::new(56u8)];
        assert_eq!(sum_checked(&fits).map(Integer::get), Some(255));
        assert_eq!(sum_checked(&spills), None);
    }

    #[test]
    fn test_to_primitive() {
        let n = Integer::new(-1i16);
        assert_eq!(n.to_i8(), Some(-1));
        assert_eq!(n.to_u16(), None);
        assert_eq!(n.to_i128(), Some(-1));
        assert_eq!(Integer::new(u128::MAX).to_u64(), None);
        assert_eq!(Integer::new(u128::MAX).to_u128(), Some(u128::MAX));
    }

    #[test]
    fn test_from_primitive_and_num_cast() {
        assert_eq!(Integer::<u8>::from_i64(-1), None);
        assert_eq!(Integer::<u8>::from_u64(255).map(Integer::get), Some(255));
        assert_eq!(Integer::<i8>::from_u128(128), None);
        assert_eq!(<Integer<i32> as NumCast>::from(7u64).map(Integer::get), Some(7));
        assert_eq!(<Integer<u16> as NumCast>::from(-3i8), None);
        assert_eq!(
            <Integer<u16> as NumCast>::from(Integer::new(300i64)).map(Integer::get),
            Some(300)
        );
    }
}
