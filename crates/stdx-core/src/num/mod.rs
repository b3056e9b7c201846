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

//! # Policy Integers
//!
//! A thin, zero-cost wrapper over the native integer types whose
//! arithmetic makes the overflow policy part of every call site.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`MinusOne`, `Zero`, `PlusOne`,
//!   `Bounds`, `BitWidth`) implemented for all core integer types.
//! - `primitive`: The sealed `PrimitiveInt` trait tying each native type to
//!   its signed and unsigned counterpart.
//! - `integer`: The `Integer<T>` type, its aliases, formatting, parsing and
//!   operator traits.
//! - `ops`: One method family per overflow policy (checked, wrapping,
//!   saturating, overflowing, strict), including the rounded divisions.
//! - `convert`: Cross-width casts under the same policies.
//! - `interop`: `num_traits` implementations for generic numeric code.
//! - `error`: Error types for traps, parsing and fallible conversions.

pub mod constants;
pub mod convert;
pub mod error;
pub mod integer;
pub mod interop;
pub mod ops;
pub mod primitive;

mod rounding;

pub use error::{ArithmeticError, ParseIntegerError, TryFromIntegerError};
pub use integer::{I8, I16, I32, I64, I128, Integer, Isize, U8, U16, U32, U64, U128, Usize};
pub use primitive::{PrimitiveInt, SignedPrimitive, UnsignedPrimitive};
