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

use crate::error::{Operation, OverflowError, overflow};
use crate::num::constants::MinusOne;

/// Checked addition by value.
///
/// The overflow test compares against the headroom `MAX - a` (or `MIN - a`
/// for two negative operands) and never evaluates a sum that could wrap.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::SafeAdd;
///
/// assert_eq!(200u8.safe_add(55), Ok(255));
/// assert!(200u8.safe_add(56).is_err());
/// assert_eq!(i8::MIN.safe_add(127), Ok(-1));
/// assert!((-100i8).safe_add(-29).is_err());
/// ```
pub trait SafeAdd: Sized {
    /// Adds `rhs` to `self`, returning an `OverflowError` if the sum is not
    /// representable.
    fn safe_add(self, rhs: Self) -> Result<Self, OverflowError>;
}

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::SafeSub;
///
/// assert_eq!(5u32.safe_sub(5), Ok(0));
/// assert!(5u32.safe_sub(6).is_err());
/// assert_eq!(i16::MAX.safe_sub(i16::MAX), Ok(0));
/// assert!(0i16.safe_sub(i16::MIN).is_err());
/// ```
pub trait SafeSub: Sized {
    /// Subtracts `rhs` from `self`, returning an `OverflowError` if the
    /// difference is not representable.
    fn safe_sub(self, rhs: Self) -> Result<Self, OverflowError>;
}

/// Checked multiplication by value.
///
/// A signed product equal to `MIN` is accepted, even though `MIN` has no
/// positive counterpart.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::SafeMul;
///
/// assert_eq!(85u8.safe_mul(3), Ok(255));
/// assert!(128u8.safe_mul(2).is_err());
/// assert_eq!((-64i8).safe_mul(2), Ok(-128));
/// assert!((-64i8).safe_mul(-2).is_err());
/// ```
pub trait SafeMul: Sized {
    /// Multiplies `self` by `rhs`, returning an `OverflowError` if the
    /// product is not representable.
    fn safe_mul(self, rhs: Self) -> Result<Self, OverflowError>;
}

/// Checked division by value.
///
/// Fails on a zero divisor and on `MIN / -1` for signed types.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::SafeDiv;
///
/// assert_eq!(7i32.safe_div(-2), Ok(-3));
/// assert!(7i32.safe_div(0).is_err());
/// assert!(i32::MIN.safe_div(-1).is_err());
/// ```
pub trait SafeDiv: Sized {
    /// Divides `self` by `rhs`, truncating toward zero.
    fn safe_div(self, rhs: Self) -> Result<Self, OverflowError>;
}

/// Checked remainder by value.
///
/// Fails under the same conditions as `SafeDiv`.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::SafeRem;
///
/// assert_eq!((-7i32).safe_rem(2), Ok(-1));
/// assert!(10u8.safe_rem(0).is_err());
/// assert!(i8::MIN.safe_rem(-1).is_err());
/// ```
pub trait SafeRem: Sized {
    /// Computes the remainder of `self / rhs`, with the sign of `self`.
    fn safe_rem(self, rhs: Self) -> Result<Self, OverflowError>;
}

/// Checked absolute value by value.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::SafeAbs;
///
/// assert_eq!((-127i8).safe_abs(), Ok(127));
/// assert!(i8::MIN.safe_abs().is_err());
/// assert_eq!(u8::MAX.safe_abs(), Ok(u8::MAX));
/// ```
pub trait SafeAbs: Sized {
    /// Returns the magnitude of `self`.
    fn safe_abs(self) -> Result<Self, OverflowError>;
}

/// Checked negation by value.
///
/// Unsigned values negate only when zero.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::SafeNeg;
///
/// assert_eq!(5i64.safe_neg(), Ok(-5));
/// assert!(i64::MIN.safe_neg().is_err());
/// assert_eq!(0u64.safe_neg(), Ok(0));
/// assert!(1u64.safe_neg().is_err());
/// ```
pub trait SafeNeg: Sized {
    /// Returns `-self`.
    fn safe_neg(self) -> Result<Self, OverflowError>;
}

macro_rules! safe_unsigned_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl SafeAdd for $t {
                #[inline]
                fn safe_add(self, rhs: Self) -> Result<Self, OverflowError> {
                    if self == 0 {
                        return Ok(rhs);
                    }
                    if rhs == 0 {
                        return Ok(self);
                    }
                    if (<$t>::MAX - self) < rhs {
                        return Err(overflow(Operation::Add));
                    }
                    Ok(self + rhs)
                }
            }

            impl SafeSub for $t {
                #[inline]
                fn safe_sub(self, rhs: Self) -> Result<Self, OverflowError> {
                    if rhs > self {
                        return Err(overflow(Operation::Subtract));
                    }
                    Ok(self - rhs)
                }
            }

            impl SafeMul for $t {
                #[inline]
                fn safe_mul(self, rhs: Self) -> Result<Self, OverflowError> {
                    if self == 0 || rhs == 0 {
                        return Ok(0);
                    }
                    if self == 1 {
                        return Ok(rhs);
                    }
                    if rhs == 1 {
                        return Ok(self);
                    }
                    if (<$t>::MAX / self) < rhs {
                        return Err(overflow(Operation::Multiply));
                    }
                    Ok(self * rhs)
                }
            }

            impl SafeDiv for $t {
                #[inline]
                fn safe_div(self, rhs: Self) -> Result<Self, OverflowError> {
                    if rhs == 0 {
                        return Err(overflow(Operation::Divide));
                    }
                    Ok(self / rhs)
                }
            }

            impl SafeRem for $t {
                #[inline]
                fn safe_rem(self, rhs: Self) -> Result<Self, OverflowError> {
                    if rhs == 0 {
                        return Err(overflow(Operation::Modulus));
                    }
                    Ok(self % rhs)
                }
            }

            impl SafeAbs for $t {
                #[inline(always)]
                fn safe_abs(self) -> Result<Self, OverflowError> {
                    Ok(self)
                }
            }

            impl SafeNeg for $t {
                #[inline]
                fn safe_neg(self) -> Result<Self, OverflowError> {
                    if self == 0 {
                        Ok(0)
                    } else {
                        Err(overflow(Operation::Negate))
                    }
                }
            }
        )*
    };
}

macro_rules! safe_signed_impl {
    ($($t:ty),* $(,)?) => {
        $(
            impl SafeAdd for $t {
                #[inline]
                fn safe_add(self, rhs: Self) -> Result<Self, OverflowError> {
                    if self == 0 {
                        return Ok(rhs);
                    }
                    if rhs == 0 {
                        return Ok(self);
                    }
                    // Opposite signs move toward zero.
                    if (self < 0) != (rhs < 0) {
                        return Ok(self + rhs);
                    }
                    if self > 0 {
                        if (<$t>::MAX - self) < rhs {
                            return Err(overflow(Operation::Add));
                        }
                    } else if (<$t>::MIN - self) > rhs {
                        return Err(overflow(Operation::Add));
                    }
                    Ok(self + rhs)
                }
            }

            impl SafeSub for $t {
                #[inline]
                fn safe_sub(self, rhs: Self) -> Result<Self, OverflowError> {
                    if rhs == 0 {
                        return Ok(self);
                    }
                    if self == 0 {
                        return rhs.safe_neg().map_err(|e| e.during(Operation::Subtract));
                    }
                    if (self < 0) == (rhs < 0) {
                        return Ok(self - rhs);
                    }
                    if rhs < 0 {
                        if (<$t>::MAX + rhs) < self {
                            return Err(overflow(Operation::Subtract));
                        }
                    } else if (<$t>::MIN - self) > -rhs {
                        return Err(overflow(Operation::Subtract));
                    }
                    Ok(self - rhs)
                }
            }

            impl SafeMul for $t {
                #[inline]
                fn safe_mul(self, rhs: Self) -> Result<Self, OverflowError> {
                    if self == 0 || rhs == 0 {
                        return Ok(0);
                    }
                    if self == 1 {
                        return Ok(rhs);
                    }
                    if rhs == 1 {
                        return Ok(self);
                    }
                    if (self < 0) == (rhs < 0) {
                        // Positive product; `MIN` has no magnitude, and any
                        // same-signed partner of magnitude >= 1 overflows it.
                        let a = self.safe_abs().map_err(|e| e.during(Operation::Multiply))?;
                        let b = rhs.safe_abs().map_err(|e| e.during(Operation::Multiply))?;
                        if (<$t>::MAX / a) < b {
                            return Err(overflow(Operation::Multiply));
                        }
                    } else {
                        // Negative product; `positive >= 2` here, so `MIN / positive`
                        // truncates toward zero and is the smallest partner that fits.
                        let (positive, negative) = if self > 0 { (self, rhs) } else { (rhs, self) };
                        if negative < <$t>::MIN / positive {
                            return Err(overflow(Operation::Multiply));
                        }
                    }
                    Ok(self * rhs)
                }
            }

            impl SafeDiv for $t {
                #[inline]
                fn safe_div(self, rhs: Self) -> Result<Self, OverflowError> {
                    if rhs == 0 || (rhs == -1 && self == <$t>::MIN) {
                        return Err(overflow(Operation::Divide));
                    }
                    Ok(self / rhs)
                }
            }

            impl SafeRem for $t {
                #[inline]
                fn safe_rem(self, rhs: Self) -> Result<Self, OverflowError> {
                    if rhs == 0 || (rhs == -1 && self == <$t>::MIN) {
                        return Err(overflow(Operation::Modulus));
                    }
                    Ok(self % rhs)
                }
            }

            impl SafeAbs for $t {
                #[inline]
                fn safe_abs(self) -> Result<Self, OverflowError> {
                    if self >= 0 {
                        return Ok(self);
                    }
                    if self == <$t>::MIN {
                        return Err(overflow(Operation::Abs));
                    }
                    Ok(-self)
                }
            }

            impl SafeNeg for $t {
                #[inline]
                fn safe_neg(self) -> Result<Self, OverflowError> {
                    self.safe_mul(<$t as MinusOne>::MINUS_ONE)
                        .map_err(|e| e.during(Operation::Negate))
                }
            }
        )*
    };
}

safe_unsigned_impl!(u8, u16, u32, u64, u128, usize);
safe_signed_impl!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type BinaryOp<T> = fn(T, T) -> Result<T, OverflowError>;

    /// Checks `op` against the exact `i128` result `reference`: success iff
    /// the reference lies in `[min, max]`, with an identical value.
    fn check<T>(op: BinaryOp<T>, reference: Option<i128>, a: T, b: T, min: i128, max: i128, what: Operation)
    where
        T: Copy + std::fmt::Debug + Into<i128>,
    {
        match (op(a, b), reference) {
            (Ok(v), Some(r)) => {
                assert!(r >= min && r <= max, "{what}: {a:?}, {b:?} should overflow");
                assert_eq!(v.into(), r, "{what}: {a:?}, {b:?}");
            }
            (Err(e), Some(r)) => {
                assert!(r < min || r > max, "{what}: {a:?}, {b:?} = {r} spuriously overflowed");
                assert_eq!(e.operation(), what);
            }
            (Err(e), None) => assert_eq!(e.operation(), what),
            (Ok(v), None) => panic!("{what}: {a:?}, {b:?} produced {v:?} for an undefined result"),
        }
    }

    fn div_reference(a: i128, b: i128) -> Option<i128> {
        (b != 0).then(|| a / b)
    }

    fn rem_reference(a: i128, b: i128) -> Option<i128> {
        (b != 0).then(|| a % b)
    }

    #[test]
    fn test_exhaustive_u8() {
        let (min, max) = (0, u8::MAX as i128);
        for a in u8::MIN..=u8::MAX {
            for b in u8::MIN..=u8::MAX {
                let (wa, wb) = (a as i128, b as i128);
                check(u8::safe_add, Some(wa + wb), a, b, min, max, Operation::Add);
                check(u8::safe_sub, Some(wa - wb), a, b, min, max, Operation::Subtract);
                check(u8::safe_mul, Some(wa * wb), a, b, min, max, Operation::Multiply);
                check(u8::safe_div, div_reference(wa, wb), a, b, min, max, Operation::Divide);
                check(u8::safe_rem, rem_reference(wa, wb), a, b, min, max, Operation::Modulus);
            }
        }
    }

    #[test]
    fn test_exhaustive_i8() {
        let (min, max) = (i8::MIN as i128, i8::MAX as i128);
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                let (wa, wb) = (a as i128, b as i128);
                check(i8::safe_add, Some(wa + wb), a, b, min, max, Operation::Add);
                check(i8::safe_sub, Some(wa - wb), a, b, min, max, Operation::Subtract);
                check(i8::safe_mul, Some(wa * wb), a, b, min, max, Operation::Multiply);
                check(i8::safe_div, div_reference(wa, wb), a, b, min, max, Operation::Divide);
            }
        }
    }

    #[test]
    fn test_signed_modulus_rejects_min_by_minus_one() {
        // Mathematically zero, but the quotient it implies is unrepresentable.
        assert_eq!(
            i8::MIN.safe_rem(-1),
            Err(OverflowError::new(Operation::Modulus))
        );
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                if b == 0 || (a == i8::MIN && b == -1) {
                    assert!(a.safe_rem(b).is_err());
                } else {
                    assert_eq!(a.safe_rem(b), Ok(a % b));
                }
            }
        }
    }

    #[test]
    fn test_exhaustive_unary_i8() {
        for a in i8::MIN..=i8::MAX {
            let expected = -(a as i16);
            match a.safe_neg() {
                Ok(v) => assert_eq!(v as i16, expected),
                Err(e) => {
                    assert_eq!(a, i8::MIN);
                    assert_eq!(e.operation(), Operation::Negate);
                }
            }
            match a.safe_abs() {
                Ok(v) => assert_eq!(v as i16, (a as i16).abs()),
                Err(e) => {
                    assert_eq!(a, i8::MIN);
                    assert_eq!(e.operation(), Operation::Abs);
                }
            }
        }
        assert_eq!((i8::MIN + 1).safe_abs(), Ok(i8::MAX));
    }

    #[test]
    fn test_unsigned_unary() {
        assert_eq!(0u32.safe_neg(), Ok(0));
        assert_eq!(
            1u32.safe_neg(),
            Err(OverflowError::new(Operation::Negate))
        );
        assert_eq!(u32::MAX.safe_abs(), Ok(u32::MAX));
    }

    #[test]
    fn test_boundaries_on_wide_types() {
        assert!(u64::MAX.safe_add(1).is_err());
        assert_eq!(u64::MAX.safe_add(0), Ok(u64::MAX));
        assert!(u128::MAX.safe_add(1).is_err());
        assert!(i128::MAX.safe_add(1).is_err());
        assert!(i128::MIN.safe_sub(1).is_err());
        assert!(i128::MIN.safe_mul(-1).is_err());
        assert!(i128::MIN.safe_div(-1).is_err());
        assert_eq!(i128::MIN.safe_mul(1), Ok(i128::MIN));
        assert_eq!((i64::MIN / 2).safe_mul(2), Ok(i64::MIN));
        assert!(isize::MIN.safe_abs().is_err());

        let half = u32::MAX / 2 + 1;
        assert!(half.safe_mul(3).is_err());
        assert!(half.safe_mul(2).is_err());
        assert_eq!((u32::MAX / 3).safe_mul(3), Ok(u32::MAX));
    }

    #[test]
    fn test_add_sub_inverse_randomized_i64() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20_000 {
            let a: i64 = rng.random::<i64>() >> rng.random_range(0..63);
            let b: i64 = rng.random::<i64>() >> rng.random_range(0..63);
            let (wa, wb) = (a as i128, b as i128);
            let (min, max) = (i64::MIN as i128, i64::MAX as i128);

            check(i64::safe_add, Some(wa + wb), a, b, min, max, Operation::Add);
            check(i64::safe_sub, Some(wa - wb), a, b, min, max, Operation::Subtract);
            check(i64::safe_mul, Some(wa * wb), a, b, min, max, Operation::Multiply);
            check(i64::safe_div, div_reference(wa, wb), a, b, min, max, Operation::Divide);

            if let Ok(sum) = a.safe_add(b) {
                assert_eq!(sum.safe_sub(b), Ok(a));
            }
        }
    }

    #[test]
    fn test_randomized_u64() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20_000 {
            let a: u64 = rng.random::<u64>() >> rng.random_range(0..64);
            let b: u64 = rng.random::<u64>() >> rng.random_range(0..64);
            let (wa, wb) = (a as i128, b as i128);
            let (min, max) = (0, u64::MAX as i128);

            check(u64::safe_add, Some(wa + wb), a, b, min, max, Operation::Add);
            check(u64::safe_sub, Some(wa - wb), a, b, min, max, Operation::Subtract);
            check(u64::safe_mul, wa.checked_mul(wb), a, b, min, max, Operation::Multiply);
            check(u64::safe_rem, rem_reference(wa, wb), a, b, min, max, Operation::Modulus);
        }
    }
}
