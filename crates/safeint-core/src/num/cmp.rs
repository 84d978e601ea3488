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

//! # Cross-Type Comparison
//!
//! Exact equality and three-way ordering between integers of any two
//! primitive types. Neither operand is converted to the other's type, so a
//! comparison can never fail, even for pairs where `cast` would.
//!
//! Operands of differing signedness are settled by sign first: a negative
//! value is never equal to, and always less than, a value of an unsigned
//! type. Once both are known to be non-negative they are compared in the
//! widest unsigned type, `u128`, through their canonical views, which holds
//! any pair of widths.

use crate::num::primitive::PrimitiveInt;
use std::cmp::Ordering;

/// Returns `true` if `a` and `b` are mathematically equal.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::is_equal;
///
/// assert!(is_equal(200u8, 200i64));
/// assert!(!is_equal(-1i32, u32::MAX));
/// assert!(!is_equal(-1i8, u128::MAX));
/// ```
#[inline]
pub fn is_equal<A: PrimitiveInt, B: PrimitiveInt>(a: A, b: B) -> bool {
    if A::SIGNED == B::SIGNED {
        a.to_bits() == b.to_bits()
    } else if a.is_negative() || b.is_negative() {
        false
    } else {
        a.to_bits() == b.to_bits()
    }
}

/// Compares `a` with `b` by mathematical value.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::compare;
/// # use std::cmp::Ordering;
///
/// assert_eq!(compare(-1i32, u32::MAX), Ordering::Less);
/// assert_eq!(compare(u64::MAX, i8::MIN), Ordering::Greater);
/// assert_eq!(compare(42u16, 42i128), Ordering::Equal);
/// ```
#[inline]
pub fn compare<A: PrimitiveInt, B: PrimitiveInt>(a: A, b: B) -> Ordering {
    match (A::SIGNED, B::SIGNED) {
        (true, true) => (a.to_bits() as i128).cmp(&(b.to_bits() as i128)),
        (false, false) => a.to_bits().cmp(&b.to_bits()),
        _ if a.is_negative() => Ordering::Less,
        _ if b.is_negative() => Ordering::Greater,
        _ => a.to_bits().cmp(&b.to_bits()),
    }
}
