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

//! # Safeint
//!
//! `Integer<T>` wraps a native integer and makes every conversion,
//! comparison and arithmetic operation between integers of any width and
//! signedness well-defined. Conversions and arithmetic either produce the
//! exact mathematical result or fail with `OverflowError`; comparisons are
//! always exact and never fail.
//!
//! ## Modules
//!
//! - `integer`: The `Integer<T>` value type, its constructors, extraction,
//!   checked `try_*` operations and formatting.
//! - `operand`: `Operand`, implemented by every native integer and every
//!   `Integer<T>`, so either may appear as a right-hand operand.
//! - `ops`: The `std::ops` operators. They panic where the `try_*` methods
//!   return an error.
//! - `cmp`: Cross-type `PartialEq`, `PartialOrd`, `Ord` and a `Hash` that
//!   agrees with equality across types.
//! - `limits`: `NumericLimits`, `SignednessQuery` and the `num-traits`
//!   integration.
//!
//! The algebra underneath lives in `safeint_core` and is re-exported here.
//!
//! ## Usage
//!
//! ```rust
//! use safeint::{Integer, Operation, cast};
//!
//! let len = Integer::new(200u8);
//! let err = len.try_add(100i32).unwrap_err();
//! assert_eq!(err.operation(), Operation::Add);
//!
//! assert_eq!(cast::<i16, u64>(1234), Ok(1234i16));
//! assert!(cast::<i16, u64>(40_000).is_err());
//!
//! assert!(Integer::new(-1i32) < u32::MAX);
//! assert!(Integer::new(-1i32) != u32::MAX);
//! ```

pub mod cmp;
pub mod integer;
pub mod limits;
pub mod operand;
pub mod ops;

pub use integer::Integer;
pub use limits::{MakeSigned, MakeUnsigned, NumericLimits, SignednessQuery};
pub use operand::Operand;
pub use safeint_core::{
    CastKind, Operation, OverflowError, PrimitiveInt, SafeAbs, SafeAdd, SafeCast, SafeDiv,
    SafeMul, SafeNeg, SafeRem, SafeSub, cast, compare, in_range, is_equal,
};

/// A wrapped `usize`.
pub type SizeType = Integer<usize>;

/// A wrapped `isize`.
pub type SignedSizeType = Integer<isize>;

/// A wrapped `isize`, named for the difference of two positions.
pub type PointerDifferenceType = Integer<isize>;
