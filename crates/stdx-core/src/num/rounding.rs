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

//! # Division Rounding Core
//!
//! Integer division is only ambiguous when the exact quotient is not an
//! integer. This module computes the truncated quotient and remainder once,
//! then nudges the quotient by one in the direction the rounding convention
//! asks for. Every overflow policy's division and remainder is a thin wrapper
//! over [`div_rounded`] and [`rem_rounded`].
//!
//! The only quotient that can leave the representable range is `MIN / -1` on
//! signed types. Its remainder is zero, so no convention adjusts it and the
//! wrapped quotient is `MIN` for every rounding mode.

use crate::num::primitive::PrimitiveInt;

/// How a non-integral quotient is rounded to an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Rounding {
    /// Toward zero.
    Down,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
    /// Such that the remainder is in `[0, |rhs|)`.
    Euclid,
}

/// Whether `lhs / rhs` overflows, i.e. `MIN / -1` on a signed type.
#[inline(always)]
pub(crate) fn quotient_overflows<T: PrimitiveInt>(lhs: T, rhs: T) -> bool {
    T::IS_SIGNED && lhs == T::MIN && rhs == T::MINUS_ONE
}

/// Divides `lhs` by `rhs` under the given rounding convention.
///
/// Returns `None` if `rhs` is zero; otherwise the wrapped quotient and whether
/// the exact quotient was out of range.
#[inline]
pub(crate) fn div_rounded<T: PrimitiveInt>(lhs: T, rhs: T, rounding: Rounding) -> Option<(T, bool)> {
    if rhs == T::ZERO {
        return None;
    }

    let quotient = lhs.wrapping_div(rhs);
    let remainder = lhs.wrapping_rem(rhs);
    if remainder == T::ZERO {
        return Some((quotient, quotient_overflows(lhs, rhs)));
    }

    // A non-zero remainder means |quotient| < |lhs|, so a one-step
    // adjustment cannot leave the range.
    let remainder_negative = remainder.is_negative();
    let divisor_negative = rhs.is_negative();
    let rounded = match rounding {
        Rounding::Down => quotient,
        Rounding::Floor if remainder_negative != divisor_negative => {
            quotient.overflowing_sub(T::PLUS_ONE).0
        }
        Rounding::Ceil if remainder_negative == divisor_negative => {
            quotient.overflowing_add(T::PLUS_ONE).0
        }
        Rounding::Euclid if remainder_negative => {
            if divisor_negative {
                quotient.overflowing_add(T::PLUS_ONE).0
            } else {
                quotient.overflowing_sub(T::PLUS_ONE).0
            }
        }
        _ => quotient,
    };

    Some((rounded, false))
}

/// Computes the remainder of `lhs / rhs`.
///
/// With `euclid` unset the remainder takes the sign of `lhs` (truncating
/// division); with it set the remainder is in `[0, |rhs|)`. The remainder is
/// always representable, including for `MIN % -1`. Returns `None` if `rhs`
/// is zero.
#[inline]
pub(crate) fn rem_rounded<T: PrimitiveInt>(lhs: T, rhs: T, euclid: bool) -> Option<T> {
    if rhs == T::ZERO {
        return None;
    }

    let remainder = lhs.wrapping_rem(rhs);
    if euclid && remainder.is_negative() {
        // remainder + |rhs| lies in (0, |rhs|), representable even when |rhs| is not.
        if rhs.is_negative() {
            Some(remainder.overflowing_sub(rhs).0)
        } else {
            Some(remainder.overflowing_add(rhs).0)
        }
    } else {
        Some(remainder)
    }
}
