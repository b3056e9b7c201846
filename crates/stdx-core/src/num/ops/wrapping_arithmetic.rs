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

//! Wrapping arithmetic: the exact result reduced modulo `2^BITS`.
//!
//! Wrapping operations never fail on overflow. The single exception is a zero
//! divisor, which has no result to wrap and traps.

use crate::num::{
    integer::{Integer, U32},
    primitive::{PrimitiveInt, SignedPrimitive, UnsignedPrimitive},
};

impl<T: PrimitiveInt> Integer<T> {
    /// Wrapping addition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(U8::MAX.wrapping_add(U8::ONE), U8::MIN);
    /// assert_eq!(I8::MAX.wrapping_add(I8::ONE), I8::MIN);
    /// ```
    #[inline(always)]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        self.overflowing_add(rhs).0
    }

    /// Wrapping subtraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(U8::MIN.wrapping_sub(U8::ONE), U8::MAX);
    /// assert_eq!(I8::MIN.wrapping_sub(I8::ONE), I8::MAX);
    /// ```
    #[inline(always)]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        self.overflowing_sub(rhs).0
    }

    /// Wrapping multiplication.
    #[inline(always)]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        self.overflowing_mul(rhs).0
    }

    /// Wrapping negation. Signed `MIN` negates to itself.
    #[inline(always)]
    pub fn wrapping_neg(self) -> Self {
        self.overflowing_neg().0
    }

    /// Wrapping exponentiation.
    #[inline]
    pub fn wrapping_pow(self, exp: impl Into<U32>) -> Self {
        self.overflowing_pow(exp).0
    }

    /// Wrapping truncating division; `MIN / -1` wraps to `MIN`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn wrapping_div(self, rhs: Self) -> Self {
        self.overflowing_div(rhs).0
    }

    /// Alias of [`wrapping_div`](Self::wrapping_div).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn wrapping_div_down(self, rhs: Self) -> Self {
        self.overflowing_div_down(rhs).0
    }

    /// Wrapping ceiling division; same as [`wrapping_div_ceil`](Self::wrapping_div_ceil).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn wrapping_div_up(self, rhs: Self) -> Self {
        self.overflowing_div_up(rhs).0
    }

    /// Wrapping floor division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn wrapping_div_floor(self, rhs: Self) -> Self {
        self.overflowing_div_floor(rhs).0
    }

    /// Wrapping ceiling division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn wrapping_div_ceil(self, rhs: Self) -> Self {
        self.overflowing_div_ceil(rhs).0
    }

    /// Wrapping Euclidean division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn wrapping_div_euclid(self, rhs: Self) -> Self {
        self.overflowing_div_euclid(rhs).0
    }

    /// Truncating remainder; never wraps.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn wrapping_rem(self, rhs: Self) -> Self {
        self.overflowing_rem(rhs).0
    }

    /// Euclidean remainder; never wraps.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn wrapping_rem_euclid(self, rhs: Self) -> Self {
        self.overflowing_rem_euclid(rhs).0
    }
}

impl<T: SignedPrimitive> Integer<T> {
    /// Wrapping absolute value; `MIN` stays `MIN`.
    ///
    /// ```rust
    /// # use stdx_core::num::I64;
    /// assert_eq!(I64::MIN.wrapping_abs(), I64::MIN);
    /// assert_eq!(I64::new(-9).wrapping_abs(), I64::new(9));
    /// ```
    #[inline]
    pub fn wrapping_abs(self) -> Self {
        self.overflowing_abs().0
    }

    /// Wrapping addition of a same-width unsigned value.
    #[inline]
    pub fn wrapping_add_unsigned(self, rhs: Integer<T::Unsigned>) -> Self {
        self.overflowing_add_unsigned(rhs).0
    }

    /// Wrapping subtraction of a same-width unsigned value.
    #[inline]
    pub fn wrapping_sub_unsigned(self, rhs: Integer<T::Unsigned>) -> Self {
        self.overflowing_sub_unsigned(rhs).0
    }
}

impl<T: UnsignedPrimitive> Integer<T> {
    /// Wrapping addition of a same-width signed value.
    #[inline]
    pub fn wrapping_add_signed(self, rhs: Integer<T::Signed>) -> Self {
        self.overflowing_add_signed(rhs).0
    }
}
