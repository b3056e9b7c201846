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

//! # Stdx Core
//!
//! Fixed-width integers with explicit overflow policies. Every arithmetic
//! operation on [`num::Integer`] comes in five flavors that differ only in
//! what happens when the mathematical result does not fit the width:
//!
//! - `checked_*` returns `Option<T>` and yields `None` on overflow.
//! - `wrapping_*` keeps the low bits (two's-complement modular arithmetic).
//! - `saturating_*` clamps to `MIN` or `MAX`.
//! - `overflowing_*` returns the wrapped value plus an overflow flag.
//! - strict (plain names and the operator traits) traps with a panic.
//!
//! ## Modules
//!
//! - `num`: The `Integer<T>` wrapper with its per-width aliases (`I8` to
//!   `I128`, `U8` to `U128`, `Isize`, `Usize`), the policy method families,
//!   rounded division, cross-width casts, and `num_traits` interop.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
