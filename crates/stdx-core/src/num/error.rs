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

//! Error types for the integer value layer.
//!
//! None of the arithmetic policies return these errors: checked arithmetic
//! reports failure as `None`, and the strict family traps with an
//! [`ArithmeticError`] as the panic message. The remaining types cover the
//! fallible edges of the API: parsing and cross-width conversion.

use std::{
    fmt::{Display, Formatter},
    num::{IntErrorKind, ParseIntError},
};

/// The reason a strict arithmetic operation cannot produce its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    /// The exact result lies outside the representable range.
    Overflow {
        /// The operation verb, e.g. `"add"` or `"negate"`.
        op: &'static str,
    },
    /// The divisor of a division or remainder was zero.
    DivisionByZero {
        /// The operation verb, e.g. `"divide"`.
        op: &'static str,
    },
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow { op } => write!(f, "attempt to {op} with overflow"),
            Self::DivisionByZero { op } => write!(f, "attempt to {op} with a divisor of zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Details about a string that could not be parsed into an integer type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIntegerError {
    source: ParseIntError,
    type_name: &'static str,
}

impl ParseIntegerError {
    pub(crate) fn new(source: ParseIntError, type_name: &'static str) -> Self {
        Self { source, type_name }
    }

    /// The kind of parse failure reported by the native parser.
    #[inline]
    pub fn kind(&self) -> &IntErrorKind {
        self.source.kind()
    }

    /// The name of the native type the string was parsed into (e.g. `"i64"`).
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl Display for ParseIntegerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "could not parse integer as type {}: {}",
            self.type_name, self.source
        )
    }
}

impl std::error::Error for ParseIntegerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A cross-width conversion whose value does not fit the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TryFromIntegerError {
    /// The name of the source native type.
    pub from: &'static str,
    /// The name of the target native type.
    pub to: &'static str,
}

impl Display for TryFromIntegerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "out of range conversion from {} to {} attempted",
            self.from, self.to
        )
    }
}

impl std::error::Error for TryFromIntegerError {}
