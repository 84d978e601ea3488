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

//! The overflow error shared by every checked conversion and operation.

/// The operation that failed to produce a representable result.
///
/// This is diagnostic context only; every failure is the same error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// A conversion between integer types.
    Cast,
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division.
    Divide,
    /// Remainder.
    Modulus,
    /// Unary negation.
    Negate,
    /// Absolute value.
    Abs,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Cast => "conversion",
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
            Self::Modulus => "modulus",
            Self::Negate => "negation",
            Self::Abs => "absolute value",
        };
        f.write_str(name)
    }
}

/// The error returned when a conversion or arithmetic result cannot be
/// represented exactly in its destination type.
///
/// Division and modulus by zero, and negating the minimum value of a signed
/// type, are reported through this error as well.
///
/// # Examples
///
/// ```rust
/// # use safeint_core::{Operation, OverflowError, SafeAdd};
///
/// let err = 255u8.safe_add(1).unwrap_err();
/// assert_eq!(err, OverflowError::new(Operation::Add));
/// assert_eq!(err.to_string(), "Integer value out of range in addition");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverflowError {
    operation: Operation,
}

impl OverflowError {
    /// Creates a new `OverflowError` for the given operation.
    #[inline(always)]
    pub const fn new(operation: Operation) -> Self {
        Self { operation }
    }

    /// Returns the operation that overflowed.
    #[inline(always)]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Returns the same error attributed to another operation.
    ///
    /// Used when a right-hand operand fails to convert before an arithmetic
    /// operation runs, so the caller sees the operation it asked for.
    #[inline(always)]
    pub const fn during(self, operation: Operation) -> Self {
        Self { operation }
    }
}

impl std::fmt::Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Integer value out of range in {}", self.operation)
    }
}

impl std::error::Error for OverflowError {}

/// Builds the error for `operation`, kept off the hot path.
#[cold]
#[inline(never)]
pub(crate) fn overflow(operation: Operation) -> OverflowError {
    OverflowError::new(operation)
}
