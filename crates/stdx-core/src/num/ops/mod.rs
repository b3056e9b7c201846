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

//! # Overflow Policies
//!
//! Every arithmetic operation on [`Integer`] exists once per overflow policy,
//! as a parallel method family rather than a runtime flag:
//!
//! - `overflowing_arithmetic`: `overflowing_*` returning `(value, overflowed)`.
//!   This is the core the other families are derived from.
//! - `checked_arithmetic`: `checked_*` returning `Option<Integer<T>>`, `None`
//!   on overflow or a zero divisor.
//! - `wrapping_arithmetic`: `wrapping_*` reducing the exact result modulo
//!   `2^BITS`.
//! - `saturating_arithmetic`: `saturating_*` clamping to `MIN`/`MAX`.
//! - `strict_arithmetic`: unprefixed `add`, `sub`, `div_floor`, ... that trap
//!   when the caller's no-overflow precondition does not hold.
//!
//! Division by zero has no representable answer under any policy. Checked
//! division returns `None`; every other policy traps.
//!
//! Operations: `add`, `sub`, `mul`, `neg`, `pow`, `div` (= `div_down`),
//! `div_up` (= `div_ceil`), `div_floor`, `div_ceil`, `div_euclid`, `rem`,
//! `rem_euclid`; on signed types additionally `abs`, `add_unsigned` and
//! `sub_unsigned`; on unsigned types `add_signed`.
//!
//! [`Integer`]: crate::num::integer::Integer

pub mod checked_arithmetic;
pub mod overflowing_arithmetic;
pub mod saturating_arithmetic;
pub mod strict_arithmetic;
pub mod wrapping_arithmetic;

use crate::num::{error::ArithmeticError, primitive::PrimitiveInt};

pub(crate) const OP_ADD: &str = "add";
pub(crate) const OP_SUB: &str = "subtract";
pub(crate) const OP_MUL: &str = "multiply";
pub(crate) const OP_NEG: &str = "negate";
pub(crate) const OP_ABS: &str = "take the absolute value";
pub(crate) const OP_POW: &str = "raise to a power";
pub(crate) const OP_DIV: &str = "divide";
pub(crate) const OP_REM: &str = "calculate the remainder";
pub(crate) const OP_CAST: &str = "cast";

/// Aborts the current operation with a panic carrying `error`.
///
/// The event is also reported through `tracing` so hosts with a subscriber
/// see contract violations in their logs before the unwind.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn trap(error: ArithmeticError) -> ! {
    let location = std::panic::Location::caller();
    tracing::error!(
        %error,
        file = location.file(),
        line = location.line(),
        "integer arithmetic contract violated"
    );
    panic!("{error}")
}

/// Exponentiation by squaring, collecting the overflow flag of every
/// multiplication step.
///
/// Every squared base is consumed by a later multiplication, so a flagged
/// intermediate always implies the exact power is out of range.
#[inline]
pub(crate) fn overflowing_pow<T: PrimitiveInt>(base: T, exp: u32) -> (T, bool) {
    if exp == 0 {
        return (T::PLUS_ONE, false);
    }

    let mut base = base;
    let mut exp = exp;
    let mut acc = T::PLUS_ONE;
    let mut overflowed = false;

    while exp > 1 {
        if exp & 1 == 1 {
            let (r, o) = acc.overflowing_mul(base);
            acc = r;
            overflowed |= o;
        }
        exp /= 2;
        let (r, o) = base.overflowing_mul(base);
        base = r;
        overflowed |= o;
    }

    let (r, o) = acc.overflowing_mul(base);
    (r, overflowed | o)
}
