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

//! Overflowing arithmetic: every operation returns `(value, overflowed)`.
//!
//! `value` is always the wrapping result and `overflowed` is `true` exactly
//! when the mathematical result was outside `[MIN, MAX]`. The checked,
//! wrapping and saturating families are projections of these methods.

use crate::num::{
    error::ArithmeticError,
    integer::{Integer, U32},
    ops::{OP_DIV, OP_REM, overflowing_pow, trap},
    primitive::{PrimitiveInt, SignedPrimitive, UnsignedPrimitive},
    rounding::{Rounding, div_rounded, rem_rounded},
};

impl<T: PrimitiveInt> Integer<T> {
    #[inline(always)]
    #[track_caller]
    fn overflowing_div_with(self, rhs: Self, rounding: Rounding) -> (Self, bool) {
        match div_rounded(self.0, rhs.0, rounding) {
            Some((q, overflowed)) => (Self(q), overflowed),
            None => trap(ArithmeticError::DivisionByZero { op: OP_DIV }),
        }
    }

    #[inline(always)]
    #[track_caller]
    fn overflowing_rem_with(self, rhs: Self, euclid: bool) -> (Self, bool) {
        match rem_rounded(self.0, rhs.0, euclid) {
            Some(r) => (Self(r), false),
            None => trap(ArithmeticError::DivisionByZero { op: OP_REM }),
        }
    }

    /// Addition with an overflow flag.
    ///
    /// ```rust
    /// # use stdx_core::num::U8;
    /// assert_eq!(U8::new(250).overflowing_add(U8::new(10)), (U8::new(4), true));
    /// assert_eq!(U8::new(250).overflowing_add(U8::new(5)), (U8::MAX, false));
    /// ```
    #[inline(always)]
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let (v, o) = self.0.overflowing_add(rhs.0);
        (Self(v), o)
    }

    /// Subtraction with an overflow flag.
    #[inline(always)]
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let (v, o) = self.0.overflowing_sub(rhs.0);
        (Self(v), o)
    }

    /// Multiplication with an overflow flag.
    #[inline(always)]
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        let (v, o) = self.0.overflowing_mul(rhs.0);
        (Self(v), o)
    }

    /// Negation with an overflow flag.
    ///
    /// Signed `MIN` negates to itself with the flag set. On unsigned types
    /// only zero negates without overflow; any other value yields
    /// `2^BITS - self` with the flag set.
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(I8::MIN.overflowing_neg(), (I8::MIN, true));
    /// assert_eq!(U8::ZERO.overflowing_neg(), (U8::ZERO, false));
    /// assert_eq!(U8::ONE.overflowing_neg(), (U8::MAX, true));
    /// ```
    #[inline(always)]
    pub fn overflowing_neg(self) -> (Self, bool) {
        let (v, o) = self.0.overflowing_neg();
        (Self(v), o)
    }

    /// Raises `self` to the power `exp` with an overflow flag.
    ///
    /// The flag is set if any multiplication step overflowed.
    #[inline]
    pub fn overflowing_pow(self, exp: impl Into<U32>) -> (Self, bool) {
        let (v, o) = overflowing_pow(self.0, exp.into().get());
        (Self(v), o)
    }

    /// Truncating division with an overflow flag. Only `MIN / -1` overflows.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn overflowing_div(self, rhs: Self) -> (Self, bool) {
        self.overflowing_div_with(rhs, Rounding::Down)
    }

    /// Alias of [`overflowing_div`](Self::overflowing_div).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn overflowing_div_down(self, rhs: Self) -> (Self, bool) {
        self.overflowing_div_with(rhs, Rounding::Down)
    }

    /// Ceiling division with an overflow flag; same as
    /// [`overflowing_div_ceil`](Self::overflowing_div_ceil).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn overflowing_div_up(self, rhs: Self) -> (Self, bool) {
        self.overflowing_div_with(rhs, Rounding::Ceil)
    }

    /// Floor division with an overflow flag.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn overflowing_div_floor(self, rhs: Self) -> (Self, bool) {
        self.overflowing_div_with(rhs, Rounding::Floor)
    }

    /// Ceiling division with an overflow flag.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn overflowing_div_ceil(self, rhs: Self) -> (Self, bool) {
        self.overflowing_div_with(rhs, Rounding::Ceil)
    }

    /// Euclidean division with an overflow flag.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn overflowing_div_euclid(self, rhs: Self) -> (Self, bool) {
        self.overflowing_div_with(rhs, Rounding::Euclid)
    }

    /// Truncating remainder. The remainder is always representable, so the
    /// flag is always `false`; `MIN % -1` is `(0, false)`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn overflowing_rem(self, rhs: Self) -> (Self, bool) {
        self.overflowing_rem_with(rhs, false)
    }

    /// Euclidean remainder; the flag is always `false`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn overflowing_rem_euclid(self, rhs: Self) -> (Self, bool) {
        self.overflowing_rem_with(rhs, true)
    }
}

impl<T: SignedPrimitive> Integer<T> {
    /// Absolute value with an overflow flag; `MIN` yields `(MIN, true)`.
    #[inline]
    pub fn overflowing_abs(self) -> (Self, bool) {
        if self.0.is_negative() {
            self.overflowing_neg()
        } else {
            (self, false)
        }
    }

    /// Adds an unsigned value of the same width, flagging results outside
    /// the signed range.
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(I8::new(-100).overflowing_add_unsigned(U8::new(200)), (I8::new(100), false));
    /// assert_eq!(I8::new(1).overflowing_add_unsigned(U8::new(127)), (I8::MIN, true));
    /// ```
    #[inline]
    pub fn overflowing_add_unsigned(self, rhs: Integer<T::Unsigned>) -> (Self, bool) {
        let rhs = T::from_unsigned_bits(rhs.0);
        let (v, o) = self.0.overflowing_add(rhs);
        (Self(v), o != rhs.is_negative())
    }

    /// Subtracts an unsigned value of the same width, flagging results
    /// outside the signed range.
    #[inline]
    pub fn overflowing_sub_unsigned(self, rhs: Integer<T::Unsigned>) -> (Self, bool) {
        let rhs = T::from_unsigned_bits(rhs.0);
        let (v, o) = self.0.overflowing_sub(rhs);
        (Self(v), o != rhs.is_negative())
    }
}

impl<T: UnsignedPrimitive> Integer<T> {
    /// Adds a signed value of the same width, flagging results outside the
    /// unsigned range.
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(U8::new(5).overflowing_add_signed(I8::new(-3)), (U8::new(2), false));
    /// assert_eq!(U8::new(1).overflowing_add_signed(I8::new(-3)), (U8::new(254), true));
    /// ```
    #[inline]
    pub fn overflowing_add_signed(self, rhs: Integer<T::Signed>) -> (Self, bool) {
        let (v, carry) = self.0.overflowing_add(T::from_signed_bits(rhs.0));
        (Self(v), carry != rhs.0.is_negative())
    }
}
