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

//! The right-hand-side coercion shared by every mixed-type operation.
//!
//! Any native integer or wrapped `Integer` may appear as the second operand
//! of an arithmetic operation, an assignment, or a comparison. `Operand`
//! exposes the native value behind it so that each operation can be written
//! once against "left type, right coerced to left type".

use crate::integer::Integer;
use safeint_core::{Operation, OverflowError, PrimitiveInt, cast};

/// A native or wrapped integer usable as an operand.
///
/// # Examples
///
/// ```rust
/// # use safeint::{Integer, Operand};
///
/// assert_eq!(7u16.primitive(), 7u16);
/// assert_eq!(Integer::new(-3i64).primitive(), -3i64);
/// ```
pub trait Operand: Copy {
    /// The native integer type behind this operand.
    type Primitive: PrimitiveInt;

    /// Returns the native value.
    fn primitive(self) -> Self::Primitive;
}

impl<T> Operand for Integer<T>
where
    T: PrimitiveInt,
{
    type Primitive = T;

    #[inline(always)]
    fn primitive(self) -> T {
        self.get()
    }
}

macro_rules! impl_native_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl Operand for $t {
                type Primitive = $t;

                #[inline(always)]
                fn primitive(self) -> $t {
                    self
                }
            }
        )*
    };
}

impl_native_operand!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Converts `operand` to `T` for use in `operation`.
///
/// A conversion failure is reported as a failure of `operation` itself.
#[inline]
pub(crate) fn coerce<T, R>(operand: R, operation: Operation) -> Result<T, OverflowError>
where
    T: PrimitiveInt,
    R: Operand,
{
    cast::<T, R::Primitive>(operand.primitive()).map_err(|e| e.during(operation))
}
