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

//! # Numeric Foundations
//!
//! The integer algebra, leaves first.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Zero`, `PlusOne`, `MinusOne`)
//!   used by the arithmetic shortcuts and by increment, decrement and negation.
//! - `primitive`: `PrimitiveInt`, the type descriptor of a native integer:
//!   width, signedness, bounds, counterparts and a canonical 128-bit view.
//! - `cast`: The conversion algebra. Classifies a source/destination pair as
//!   lossless or range-checked and performs the checked conversion.
//! - `cmp`: Mathematically exact equality and ordering between integers of
//!   any two types, without converting either operand.
//! - `ops`: By-value checked arithmetic returning `Result<T, OverflowError>`.

pub mod cast;
pub mod cmp;
pub mod constants;
pub mod ops;
pub mod primitive;
