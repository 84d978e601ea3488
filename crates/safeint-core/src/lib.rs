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

//! # Safeint Core
//!
//! The integer algebra underneath the `safeint` wrapper type. Every rule that
//! decides whether a value of one primitive integer type is representable in
//! another, how two integers of different widths and signedness compare, and
//! when an arithmetic result leaves its type's range lives here.
//!
//! ## Modules
//!
//! - `error`: The single failure kind, `OverflowError`, tagged with the
//!   `Operation` that produced it.
//! - `num`: The integer type descriptor (`PrimitiveInt`), associated
//!   constants (`Zero`, `PlusOne`, `MinusOne`), checked conversions
//!   (`cast`, `in_range`, `CastKind`), cross-type comparison (`is_equal`,
//!   `compare`), and the by-value checked arithmetic traits (`SafeAdd`,
//!   `SafeSub`, `SafeMul`, `SafeDiv`, `SafeRem`, `SafeAbs`, `SafeNeg`).
//!
//! ## Purpose
//!
//! Native integers wrap, truncate, or reinterpret their sign when types of
//! different width meet. These primitives replace each of those implicit
//! behaviors with an explicit, checked one that either yields the exact
//! mathematical result or reports an `OverflowError`.

pub mod error;
pub mod num;

pub use error::{Operation, OverflowError};
pub use num::cast::{CastKind, SafeCast, cast, in_range};
pub use num::cmp::{compare, is_equal};
pub use num::ops::checked_arithmetic::{
    SafeAbs, SafeAdd, SafeDiv, SafeMul, SafeNeg, SafeRem, SafeSub,
};
pub use num::primitive::PrimitiveInt;
