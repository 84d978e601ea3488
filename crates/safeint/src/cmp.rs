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
//! Equality, ordering and hashing for `Integer<T>`. Any wrapped or native
//! integer can be compared with any other, and the answer is always the
//! mathematically correct one. Comparisons never fail: no operand is
//! converted to the other's type, so an `i8` may be compared with a `u128`
//! without either being representable in the other.
//!
//! Hashing is consistent with these equality rules across types: two
//! wrapped values that compare equal produce identical hashes through a
//! shared `Hasher`, regardless of their underlying types.

use crate::integer::Integer;
use crate::operand::Operand;
use safeint_core::{PrimitiveInt, compare, is_equal};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T, R> PartialEq<R> for Integer<T>
where
    T: PrimitiveInt,
    R: Operand,
{
    #[inline]
    fn eq(&self, other: &R) -> bool {
        is_equal(self.get(), other.primitive())
    }
}

impl<T> Eq for Integer<T> where T: PrimitiveInt {}

impl<T, R> PartialOrd<R> for Integer<T>
where
    T: PrimitiveInt,
    R: Operand,
{
    #[inline]
    fn partial_cmp(&self, other: &R) -> Option<Ordering> {
        Some(compare(self.get(), other.primitive()))
    }
}

impl<T> Ord for Integer<T>
where
    T: PrimitiveInt,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.get(), other.get())
    }
}

impl<T> Hash for Integer<T>
where
    T: PrimitiveInt,
{
    // The sign flag separates `-1` from `u128::MAX`, which share a pattern.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let value = self.get();
        value.is_negative().hash(state);
        value.to_bits().hash(state);
    }
}

macro_rules! impl_native_lhs_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl<B> PartialEq<Integer<B>> for $t
            where
                B: PrimitiveInt,
            {
                #[inline]
                fn eq(&self, other: &Integer<B>) -> bool {
                    is_equal(*self, other.get())
                }
            }

            impl<B> PartialOrd<Integer<B>> for $t
            where
                B: PrimitiveInt,
            {
                #[inline]
                fn partial_cmp(&self, other: &Integer<B>) -> Option<Ordering> {
                    Some(compare(*self, other.get()))
                }
            }
        )*
    };
}

impl_native_lhs_cmp!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
