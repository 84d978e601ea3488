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

//! # Safe Integer Value Type
//!
//! `Integer<T>` wraps exactly one native integer of type `T`. It is a plain
//! `Copy` value with the layout of `T`; what it changes is the set of
//! operations available on it:
//!
//! - Construction from, extraction to, and assignment from any other native
//!   or wrapped integer type is checked.
//! - Every arithmetic operation either produces the exact mathematical
//!   result or fails with `OverflowError`, including division and modulus
//!   by zero and negation of a signed minimum.
//! - Comparisons between any two integer types are mathematically exact and
//!   never fail.
//!
//! The `try_*` methods return `Result` and leave `self` untouched on
//! failure. The `std::ops` operators (see the `ops` module) call the same
//! methods and panic with the `OverflowError` on failure.
//!
//! ## Usage
//!
//! ```rust
//! use safeint::{Integer, Operation};
//!
//! let mut bytes = Integer::new(250u8);
//! bytes.try_add_assign(5i64)?;
//! assert_eq!(bytes.get(), 255);
//!
//! let err = bytes.try_add(1u8).unwrap_err();
//! assert_eq!(err.operation(), Operation::Add);
//! assert_eq!(bytes.get(), 255);
//! # Ok::<(), safeint::OverflowError>(())
//! ```

use crate::operand::{Operand, coerce};
use safeint_core::{Operation, OverflowError, PrimitiveInt, cast};

/// A native integer whose conversions and arithmetic never silently
/// overflow.
///
/// # Examples
///
/// ```rust
/// # use safeint::Integer;
///
/// let a = Integer::new(100i8);
/// let b = Integer::new(27u64);
/// assert_eq!((a + b).get(), 127i8);
/// assert!(a.try_add(28u8).is_err());
/// assert!(a < Integer::new(u128::MAX));
/// ```
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Integer<T>
where
    T: PrimitiveInt,
{
    value: T,
}

impl<T> Integer<T>
where
    T: PrimitiveInt,
{
    /// `true` if `T` is signed.
    pub const SIGNED: bool = T::SIGNED;
    /// `true` if `T` is unsigned.
    pub const UNSIGNED: bool = !T::SIGNED;
    /// The width of `T` in bits.
    pub const BITS: u32 = T::BITS;
    /// The smallest representable value.
    pub const MIN: Self = Self::new(T::MIN);
    /// The largest representable value.
    pub const MAX: Self = Self::new(T::MAX);
    /// Zero.
    pub const ZERO: Self = Self::new(T::ZERO);
    /// One.
    pub const ONE: Self = Self::new(T::PLUS_ONE);

    /// Wraps a native value of type `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// const LIMIT: Integer<u32> = Integer::new(4096);
    /// assert_eq!(LIMIT.get(), 4096);
    /// ```
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Wraps any native or wrapped integer, checking that it is
    /// representable in `T`.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` tagged `Operation::Cast` if `value` is out
    /// of range of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// assert_eq!(Integer::<u8>::try_from_int(255i32).map(Integer::get), Ok(255u8));
    /// assert!(Integer::<u8>::try_from_int(-1i32).is_err());
    /// assert!(Integer::<i8>::try_from_int(Integer::new(128u16)).is_err());
    /// ```
    #[inline]
    pub fn try_from_int<R>(value: R) -> Result<Self, OverflowError>
    where
        R: Operand,
    {
        cast::<T, R::Primitive>(value.primitive()).map(Self::new)
    }

    /// Wraps any native or wrapped integer.
    ///
    /// # Panics
    ///
    /// Panics if `value` is out of range of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// let len = Integer::<u16>::from_int(512usize);
    /// assert_eq!(len.get(), 512);
    /// ```
    #[inline]
    #[track_caller]
    pub fn from_int<R>(value: R) -> Self
    where
        R: Operand,
    {
        match Self::try_from_int(value) {
            Ok(v) => v,
            Err(e) => crate::ops::raise(e),
        }
    }

    /// Returns the wrapped native value.
    #[inline(always)]
    pub const fn get(self) -> T {
        self.value
    }

    /// Returns the wrapped value converted to another native type.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if the value is out of range of `U`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// let n = Integer::new(-1i32);
    /// assert_eq!(n.get_as::<i8>(), Ok(-1i8));
    /// assert!(n.get_as::<u32>().is_err());
    /// ```
    #[inline]
    pub fn get_as<U>(self) -> Result<U, OverflowError>
    where
        U: PrimitiveInt,
    {
        cast::<U, T>(self.value)
    }

    /// Returns the value wrapped as another integer type.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if the value is out of range of `U`.
    #[inline]
    pub fn cast<U>(self) -> Result<Integer<U>, OverflowError>
    where
        U: PrimitiveInt,
    {
        Integer::<U>::try_from_int(self)
    }

    /// Returns the value as the signed type of the same width.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if an unsigned value exceeds the signed
    /// maximum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// assert_eq!(Integer::new(127u8).make_signed().map(|v| v.get()), Ok(127i8));
    /// assert!(Integer::new(128u8).make_signed().is_err());
    /// ```
    #[inline]
    pub fn make_signed(self) -> Result<Integer<T::Signed>, OverflowError> {
        self.cast()
    }

    /// Returns the value as the unsigned type of the same width.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if a signed value is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// assert_eq!(Integer::new(5i16).make_unsigned().map(|v| v.get()), Ok(5u16));
    /// assert!(Integer::new(-5i16).make_unsigned().is_err());
    /// ```
    #[inline]
    pub fn make_unsigned(self) -> Result<Integer<T::Unsigned>, OverflowError> {
        self.cast()
    }

    /// Returns `true` if the value is less than zero.
    #[inline(always)]
    pub fn is_negative(self) -> bool {
        self.value.is_negative()
    }

    /// Returns the magnitude of the value.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` for the minimum value of a signed type,
    /// which has no positive counterpart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// assert_eq!(Integer::new(-7i8).abs().map(|v| v.get()), Ok(7));
    /// assert!(Integer::new(i8::MIN).abs().is_err());
    /// ```
    #[inline]
    pub fn abs(self) -> Result<Self, OverflowError> {
        self.value.safe_abs().map(Self::new)
    }

    /// Adds any native or wrapped integer, coerced to `T` first.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if `rhs` is out of range of `T` or the
    /// sum is.
    #[inline]
    pub fn try_add<R>(self, rhs: R) -> Result<Self, OverflowError>
    where
        R: Operand,
    {
        let rhs = coerce::<T, R>(rhs, Operation::Add)?;
        self.value.safe_add(rhs).map(Self::new)
    }

    /// Subtracts any native or wrapped integer, coerced to `T` first.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if `rhs` is out of range of `T` or the
    /// difference is.
    #[inline]
    pub fn try_sub<R>(self, rhs: R) -> Result<Self, OverflowError>
    where
        R: Operand,
    {
        let rhs = coerce::<T, R>(rhs, Operation::Subtract)?;
        self.value.safe_sub(rhs).map(Self::new)
    }

    /// Multiplies by any native or wrapped integer, coerced to `T` first.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if `rhs` is out of range of `T` or the
    /// product is.
    #[inline]
    pub fn try_mul<R>(self, rhs: R) -> Result<Self, OverflowError>
    where
        R: Operand,
    {
        let rhs = coerce::<T, R>(rhs, Operation::Multiply)?;
        self.value.safe_mul(rhs).map(Self::new)
    }

    /// Divides by any native or wrapped integer, coerced to `T` first.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if `rhs` is out of range of `T`, is zero,
    /// or is `-1` while `self` is the signed minimum.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// // -1 has no unsigned representation.
    /// assert!(Integer::new(5u32).try_div(-1i32).is_err());
    /// assert_eq!(Integer::new(5u32).try_div(2i32).map(|v| v.get()), Ok(2));
    /// ```
    #[inline]
    pub fn try_div<R>(self, rhs: R) -> Result<Self, OverflowError>
    where
        R: Operand,
    {
        let rhs = coerce::<T, R>(rhs, Operation::Divide)?;
        self.value.safe_div(rhs).map(Self::new)
    }

    /// Computes the remainder after division by any native or wrapped
    /// integer, coerced to `T` first.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as `try_div`.
    #[inline]
    pub fn try_rem<R>(self, rhs: R) -> Result<Self, OverflowError>
    where
        R: Operand,
    {
        let rhs = coerce::<T, R>(rhs, Operation::Modulus)?;
        self.value.safe_rem(rhs).map(Self::new)
    }

    /// Returns `-self`.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` for the signed minimum and for any
    /// non-zero unsigned value.
    #[inline]
    pub fn try_neg(self) -> Result<Self, OverflowError> {
        self.value.safe_neg().map(Self::new)
    }

    /// Replaces the value with `self + rhs`, leaving it unchanged on failure.
    ///
    /// # Errors
    ///
    /// See `try_add`.
    #[inline]
    pub fn try_add_assign<R>(&mut self, rhs: R) -> Result<(), OverflowError>
    where
        R: Operand,
    {
        *self = self.try_add(rhs)?;
        Ok(())
    }

    /// Replaces the value with `self - rhs`, leaving it unchanged on failure.
    ///
    /// # Errors
    ///
    /// See `try_sub`.
    #[inline]
    pub fn try_sub_assign<R>(&mut self, rhs: R) -> Result<(), OverflowError>
    where
        R: Operand,
    {
        *self = self.try_sub(rhs)?;
        Ok(())
    }

    /// Replaces the value with `self * rhs`, leaving it unchanged on failure.
    ///
    /// # Errors
    ///
    /// See `try_mul`.
    #[inline]
    pub fn try_mul_assign<R>(&mut self, rhs: R) -> Result<(), OverflowError>
    where
        R: Operand,
    {
        *self = self.try_mul(rhs)?;
        Ok(())
    }

    /// Replaces the value with `self / rhs`, leaving it unchanged on failure.
    ///
    /// # Errors
    ///
    /// See `try_div`.
    #[inline]
    pub fn try_div_assign<R>(&mut self, rhs: R) -> Result<(), OverflowError>
    where
        R: Operand,
    {
        *self = self.try_div(rhs)?;
        Ok(())
    }

    /// Replaces the value with `self % rhs`, leaving it unchanged on failure.
    ///
    /// # Errors
    ///
    /// See `try_rem`.
    #[inline]
    pub fn try_rem_assign<R>(&mut self, rhs: R) -> Result<(), OverflowError>
    where
        R: Operand,
    {
        *self = self.try_rem(rhs)?;
        Ok(())
    }

    /// Replaces the value with any native or wrapped integer, leaving it
    /// unchanged if `value` is out of range of `T`.
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError` if `value` is out of range of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// let mut n = Integer::new(1u8);
    /// assert!(n.try_assign(-1i8).is_err());
    /// assert_eq!(n.get(), 1);
    /// n.try_assign(Integer::new(200i64)).unwrap();
    /// assert_eq!(n.get(), 200);
    /// ```
    #[inline]
    pub fn try_assign<R>(&mut self, value: R) -> Result<(), OverflowError>
    where
        R: Operand,
    {
        *self = Self::try_from_int(value)?;
        Ok(())
    }

    /// Adds one and returns the new value (pre-increment).
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError`, leaving the value unchanged, if it is
    /// already `MAX`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use safeint::Integer;
    ///
    /// let mut n = Integer::new(254u8);
    /// assert_eq!(n.increment().map(|v| v.get()), Ok(255));
    /// assert!(n.increment().is_err());
    /// assert_eq!(n.get(), 255);
    /// ```
    #[inline]
    pub fn increment(&mut self) -> Result<Self, OverflowError> {
        self.try_add_assign(Self::ONE)?;
        Ok(*self)
    }

    /// Adds one and returns the value from before the increment
    /// (post-increment).
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError`, leaving the value unchanged, if it is
    /// already `MAX`.
    #[inline]
    pub fn post_increment(&mut self) -> Result<Self, OverflowError> {
        let prior = *self;
        self.try_add_assign(Self::ONE)?;
        Ok(prior)
    }

    /// Subtracts one and returns the new value (pre-decrement).
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError`, leaving the value unchanged, if it is
    /// already `MIN`.
    #[inline]
    pub fn decrement(&mut self) -> Result<Self, OverflowError> {
        self.try_sub_assign(Self::ONE)?;
        Ok(*self)
    }

    /// Subtracts one and returns the value from before the decrement
    /// (post-decrement).
    ///
    /// # Errors
    ///
    /// Returns an `OverflowError`, leaving the value unchanged, if it is
    /// already `MIN`.
    #[inline]
    pub fn post_decrement(&mut self) -> Result<Self, OverflowError> {
        let prior = *self;
        self.try_sub_assign(Self::ONE)?;
        Ok(prior)
    }
}

impl<T> Default for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline(always)]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T> From<T> for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline(always)]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

macro_rules! impl_into_native {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<Integer<$t>> for $t {
                #[inline(always)]
                fn from(value: Integer<$t>) -> Self {
                    value.get()
                }
            }
        )*
    };
}

impl_into_native!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T> std::fmt::Debug for Integer<T>
where
    T: PrimitiveInt,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Integer").field(&self.value).finish()
    }
}

macro_rules! impl_fmt_delegate {
    ($($fmt_trait:ident),* $(,)?) => {
        $(
            impl<T> std::fmt::$fmt_trait for Integer<T>
            where
                T: PrimitiveInt + std::fmt::$fmt_trait,
            {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    std::fmt::$fmt_trait::fmt(&self.value, f)
                }
            }
        )*
    };
}

impl_fmt_delegate!(Display, LowerHex, UpperHex, Octal, Binary);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Integer::<i32>::default().get(), 0);
        assert_eq!(Integer::<u32>::default().get(), 0);
        assert_eq!(Integer::<u128>::default(), Integer::<u128>::ZERO);
    }

    #[test]
    fn test_constants() {
        assert!(Integer::<i16>::SIGNED);
        assert!(!Integer::<i16>::UNSIGNED);
        assert!(Integer::<usize>::UNSIGNED);
        assert_eq!(Integer::<u64>::BITS, 64);
        assert_eq!(Integer::<i8>::MIN.get(), -128);
        assert_eq!(Integer::<i8>::MAX.get(), 127);
        assert_eq!(Integer::<u8>::ONE.get(), 1);
    }

    #[test]
    fn test_construction_equal_width() {
        assert_eq!(Integer::<u32>::try_from_int(u32::MAX).map(Integer::get), Ok(u32::MAX));
        assert_eq!(Integer::<i32>::try_from_int(i32::MIN).map(Integer::get), Ok(i32::MIN));
        assert!(Integer::<u32>::try_from_int(-1i32).is_err());
        assert_eq!(Integer::<u32>::try_from_int(0i32).map(Integer::get), Ok(0));
        assert_eq!(Integer::<i32>::try_from_int(i32::MAX as u32).map(Integer::get), Ok(i32::MAX));
        assert!(Integer::<i32>::try_from_int(i32::MAX as u32 + 1).is_err());
    }

    #[test]
    fn test_construction_greater_width_source() {
        assert!(Integer::<u16>::try_from_int(65_536u64).is_err());
        assert_eq!(Integer::<u16>::try_from_int(65_535u64).map(Integer::get), Ok(65_535));
        assert!(Integer::<i16>::try_from_int(32_768i64).is_err());
        assert!(Integer::<i16>::try_from_int(-32_769i64).is_err());
        assert!(Integer::<u16>::try_from_int(-1i64).is_err());
        assert_eq!(Integer::<u16>::try_from_int(65_535i64).map(Integer::get), Ok(65_535));
        assert!(Integer::<i16>::try_from_int(32_768u64).is_err());
    }

    #[test]
    fn test_construction_lesser_width_source() {
        assert_eq!(Integer::<u64>::try_from_int(u8::MAX).map(Integer::get), Ok(255));
        assert_eq!(Integer::<i64>::try_from_int(i8::MIN).map(Integer::get), Ok(-128));
        assert!(Integer::<u64>::try_from_int(-1i8).is_err());
        assert_eq!(Integer::<i64>::try_from_int(u32::MAX).map(Integer::get), Ok(u32::MAX as i64));
    }

    #[test]
    fn test_construction_from_wrapped() {
        let wide = Integer::new(-40_000i32);
        assert!(Integer::<i16>::try_from_int(wide).is_err());
        assert_eq!(Integer::<i64>::try_from_int(wide).map(Integer::get), Ok(-40_000));
        assert_eq!(wide.cast::<i64>().map(Integer::get), Ok(-40_000));
    }

    #[test]
    #[should_panic(expected = "Integer value out of range in conversion")]
    fn test_from_int_panics_out_of_range() {
        let _ = Integer::<u8>::from_int(256u16);
    }

    #[test]
    fn test_extraction() {
        let n = Integer::new(300i32);
        assert_eq!(n.get(), 300);
        assert!(n.get_as::<u8>().is_err());
        assert_eq!(n.get_as::<u16>(), Ok(300));
        assert_eq!(i32::from(n), 300);
    }

    #[test]
    fn test_make_signed_and_unsigned() {
        assert_eq!(Integer::new(u64::MAX >> 1).make_signed().map(Integer::get), Ok(i64::MAX));
        assert!(Integer::new(u64::MAX).make_signed().is_err());
        assert_eq!(Integer::new(i64::MAX).make_unsigned().map(Integer::get), Ok(u64::MAX >> 1));
        assert!(Integer::new(i64::MIN).make_unsigned().is_err());
        assert_eq!(Integer::new(3u8).make_unsigned().map(Integer::get), Ok(3u8));
    }

    #[test]
    fn test_failed_assignments_leave_value_unchanged() {
        let mut n = Integer::new(250u8);
        assert!(n.try_add_assign(6u8).is_err());
        assert!(n.try_sub_assign(251u8).is_err());
        assert!(n.try_mul_assign(2u8).is_err());
        assert!(n.try_div_assign(0u8).is_err());
        assert!(n.try_rem_assign(0u8).is_err());
        assert!(n.try_add_assign(-1i8).is_err());
        assert!(n.try_assign(1_000u32).is_err());
        assert_eq!(n.get(), 250);

        n.try_add_assign(5u64).unwrap();
        assert_eq!(n.get(), 255);
        n.try_div_assign(Integer::new(5i128)).unwrap();
        assert_eq!(n.get(), 51);
        n.try_rem_assign(10i8).unwrap();
        assert_eq!(n.get(), 1);
    }

    #[test]
    fn test_mixed_operand_failure_is_reported_as_the_operation() {
        let n = Integer::new(10u8);
        assert_eq!(n.try_add(-1i32).unwrap_err().operation(), Operation::Add);
        assert_eq!(n.try_sub(300u16).unwrap_err().operation(), Operation::Subtract);
        assert_eq!(n.try_mul(-2i8).unwrap_err().operation(), Operation::Multiply);
        assert_eq!(n.try_div(-1i32).unwrap_err().operation(), Operation::Divide);
        assert_eq!(n.try_rem(256u32).unwrap_err().operation(), Operation::Modulus);
    }

    #[test]
    fn test_signed_addition_with_unsigned_operand() {
        let n = Integer::new(100i8);
        assert_eq!(n.try_add(27u8).map(Integer::get), Ok(127));
        assert!(n.try_add(28u8).is_err());
        assert!(n.try_add(200u8).is_err());
        assert_eq!(n.try_add(-128i64).map(Integer::get), Ok(-28));
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut n = Integer::new(5i32);
        assert_eq!(n.increment().map(Integer::get), Ok(6));
        assert_eq!(n.post_increment().map(Integer::get), Ok(6));
        assert_eq!(n.get(), 7);
        assert_eq!(n.decrement().map(Integer::get), Ok(6));
        assert_eq!(n.post_decrement().map(Integer::get), Ok(6));
        assert_eq!(n.get(), 5);

        let mut top = Integer::<u16>::MAX;
        assert!(top.post_increment().is_err());
        assert_eq!(top, Integer::<u16>::MAX);

        let mut bottom = Integer::<i64>::MIN;
        assert!(bottom.decrement().is_err());
        assert!(bottom.post_decrement().is_err());
        assert_eq!(bottom.get(), i64::MIN);

        let mut zero = Integer::new(0u8);
        assert!(zero.decrement().is_err());
        assert_eq!(zero.get(), 0);
    }

    fn step_up_and_back<T: PrimitiveInt>(start: T) -> Result<(T, T), OverflowError> {
        let mut n = Integer::new(start);
        let before = n.post_increment()?;
        let after = n.decrement()?;
        Ok((before.get(), after.get()))
    }

    #[test]
    fn test_increment_in_generic_context() {
        assert_eq!(step_up_and_back(0u8), Ok((0, 0)));
        assert_eq!(step_up_and_back(-1i128), Ok((-1, -1)));
        assert_eq!(step_up_and_back(u64::MAX - 1), Ok((u64::MAX - 1, u64::MAX - 1)));
        assert_eq!(
            step_up_and_back(i16::MAX).unwrap_err().operation(),
            Operation::Add
        );
        assert_eq!(
            step_up_and_back(usize::MAX).unwrap_err().operation(),
            Operation::Add
        );
    }

    #[test]
    fn test_abs_and_neg() {
        assert!(Integer::new(i8::MIN).abs().is_err());
        assert_eq!(Integer::new(i8::MIN + 1).abs().map(Integer::get), Ok(127));
        assert_eq!(Integer::new(9u8).abs().map(Integer::get), Ok(9));
        assert!(Integer::new(i32::MIN).try_neg().is_err());
        assert_eq!(Integer::new(i32::MAX).try_neg().map(Integer::get), Ok(-i32::MAX));
        assert_eq!(Integer::new(0u32).try_neg().map(Integer::get), Ok(0));
        assert!(Integer::new(1u32).try_neg().is_err());
        assert!(Integer::new(-1i8).is_negative());
    }

    #[test]
    fn test_formatting() {
        let n = Integer::new(255u8);
        assert_eq!(format!("{n}"), "255");
        assert_eq!(format!("{n:?}"), "Integer(255)");
        assert_eq!(format!("{n:x}"), "ff");
        assert_eq!(format!("{n:#X}"), "0xFF");
        assert_eq!(format!("{n:o}"), "377");
        assert_eq!(format!("{:b}", Integer::new(5i8)), "101");
        assert_eq!(format!("{:>5}", Integer::new(-3i16)), "   -3");
    }
}
