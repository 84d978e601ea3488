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

//! # Checked Operators
//!
//! `std::ops` implementations for `Integer<T>`. Every binary operator is
//! routed through the matching `try_*` method on `Integer`, which coerces
//! the right-hand operand to `T` and runs the checked engine; the operator
//! form panics with the `OverflowError` message instead of returning it.
//!
//! Supported permutations for `+ - * / %` and their assignment forms:
//!
//! - `Integer<A> op Integer<B>` and `Integer<A> op B` yield `Integer<A>`.
//! - `A op Integer<B>` yields `Integer<A>`.
//! - `A op= Integer<B>` stores back into the native `A`.
//!
//! Unary `-` is checked as well.
//!
//! ## Usage
//!
//! ```rust
//! use safeint::Integer;
//!
//! let mut total = Integer::new(0u32);
//! total += 40u8;
//! total += Integer::new(2i64);
//! assert_eq!(total.get(), 42);
//!
//! let mut raw = 10u16;
//! raw *= Integer::new(3i8);
//! assert_eq!(raw, 30);
//! ```
//!
//! ```rust,should_panic
//! use safeint::Integer;
//!
//! let _ = Integer::new(255u8) + 1u8;
//! ```

use crate::integer::Integer;
use crate::operand::Operand;
use safeint_core::{OverflowError, PrimitiveInt};

/// Panics with the message of `error`.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn raise(error: OverflowError) -> ! {
    panic!("{error}")
}

macro_rules! impl_checked_op {
    ($trait_name:ident, $method:ident, $try_method:ident, $assign_trait:ident, $assign_method:ident, $try_assign_method:ident) => {
        impl<T, R> std::ops::$trait_name<R> for Integer<T>
        where
            T: PrimitiveInt,
            R: Operand,
        {
            type Output = Self;

            #[inline]
            #[track_caller]
            fn $method(self, rhs: R) -> Self::Output {
                match self.$try_method(rhs) {
                    Ok(v) => v,
                    Err(e) => raise(e),
                }
            }
        }

        impl<T, R> std::ops::$assign_trait<R> for Integer<T>
        where
            T: PrimitiveInt,
            R: Operand,
        {
            #[inline]
            #[track_caller]
            fn $assign_method(&mut self, rhs: R) {
                if let Err(e) = self.$try_assign_method(rhs) {
                    raise(e);
                }
            }
        }
    };
}

impl_checked_op!(Add, add, try_add, AddAssign, add_assign, try_add_assign);
impl_checked_op!(Sub, sub, try_sub, SubAssign, sub_assign, try_sub_assign);
impl_checked_op!(Mul, mul, try_mul, MulAssign, mul_assign, try_mul_assign);
impl_checked_op!(Div, div, try_div, DivAssign, div_assign, try_div_assign);
impl_checked_op!(Rem, rem, try_rem, RemAssign, rem_assign, try_rem_assign);

// The native left-hand side decides the result type.
macro_rules! impl_native_lhs_op {
    ($trait_name:ident, $method:ident, $try_method:ident, $assign_trait:ident, $assign_method:ident; $($t:ty),* $(,)?) => {
        $(
            impl<B> std::ops::$trait_name<Integer<B>> for $t
            where
                B: PrimitiveInt,
            {
                type Output = Integer<$t>;

                #[inline]
                #[track_caller]
                fn $method(self, rhs: Integer<B>) -> Self::Output {
                    match Integer::new(self).$try_method(rhs) {
                        Ok(v) => v,
                        Err(e) => raise(e),
                    }
                }
            }

            impl<B> std::ops::$assign_trait<Integer<B>> for $t
            where
                B: PrimitiveInt,
            {
                #[inline]
                #[track_caller]
                fn $assign_method(&mut self, rhs: Integer<B>) {
                    match Integer::new(*self).$try_method(rhs) {
                        Ok(v) => *self = v.get(),
                        Err(e) => raise(e),
                    }
                }
            }
        )*
    };
}

macro_rules! impl_native_lhs_ops {
    ($($t:ty),* $(,)?) => {
        impl_native_lhs_op!(Add, add, try_add, AddAssign, add_assign; $($t),*);
        impl_native_lhs_op!(Sub, sub, try_sub, SubAssign, sub_assign; $($t),*);
        impl_native_lhs_op!(Mul, mul, try_mul, MulAssign, mul_assign; $($t),*);
        impl_native_lhs_op!(Div, div, try_div, DivAssign, div_assign; $($t),*);
        impl_native_lhs_op!(Rem, rem, try_rem, RemAssign, rem_assign; $($t),*);
    };
}

impl_native_lhs_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl<T> std::ops::Neg for Integer<T>
where
    T: PrimitiveInt,
{
    type Output = Self;

    #[inline]
    #[track_caller]
    fn neg(self) -> Self::Output {
        match self.try_neg() {
            Ok(v) => v,
            Err(e) => raise(e),
        }
    }
}
