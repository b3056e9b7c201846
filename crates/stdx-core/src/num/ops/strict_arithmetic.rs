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

//! Strict arithmetic: the unprefixed operations.
//!
//! These compute the exact mathematical result and require the caller to
//! guarantee it is representable. A violated precondition is a bug in the
//! caller, not a recoverable condition, so it traps in every build profile
//! (see [`ArithmeticError`]). The `+ - * / %` and unary `-` operators on
//! [`Integer`] use these methods.

use crate::num::{
    error::ArithmeticError,
    integer::{Integer, U32},
    ops::{OP_ABS, OP_ADD, OP_DIV, OP_MUL, OP_NEG, OP_POW, OP_SUB, trap},
    primitive::{PrimitiveInt, SignedPrimitive, UnsignedPrimitive},
};

#[inline(always)]
#[track_caller]
fn strict<T: PrimitiveInt>((value, overflowed): (Integer<T>, bool), op: &'static str) -> Integer<T> {
    if overflowed {
        trap(ArithmeticError::Overflow { op })
    }
    value
}

#[allow(clippy::should_implement_trait)]
impl<T: PrimitiveInt> Integer<T> {
    /// Addition.
    ///
    /// # Panics
    ///
    /// Panics if the sum is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::U32;
    /// assert_eq!(U32::new(2).add(U32::new(3)), U32::new(5));
    /// ```
    #[inline(always)]
    #[track_caller]
    pub fn add(self, rhs: Self) -> Self {
        strict(self.overflowing_add(rhs), OP_ADD)
    }

    /// Subtraction.
    ///
    /// # Panics
    ///
    /// Panics if the difference is out of range.
    #[inline(always)]
    #[track_caller]
    pub fn sub(self, rhs: Self) -> Self {
        strict(self.overflowing_sub(rhs), OP_SUB)
    }

    /// Multiplication.
    ///
    /// # Panics
    ///
    /// Panics if the product is out of range.
    #[inline(always)]
    #[track_caller]
    pub fn mul(self, rhs: Self) -> Self {
        strict(self.overflowing_mul(rhs), OP_MUL)
    }

    /// Negation.
    ///
    /// # Panics
    ///
    /// Panics for signed `MIN` and for any non-zero unsigned value.
    #[inline(always)]
    #[track_caller]
    pub fn neg(self) -> Self {
        strict(self.overflowing_neg(), OP_NEG)
    }

    /// Exponentiation. `x.pow(0)` is `1` for every `x`, including zero.
    ///
    /// # Panics
    ///
    /// Panics if the power is out of range.
    ///
    /// ```rust
    /// # use stdx_core::num::{I16, U32};
    /// assert_eq!(I16::new(-3).pow(U32::new(3)), I16::new(-27));
    /// assert_eq!(I16::ZERO.pow(0u32), I16::ONE);
    /// ```
    #[inline]
    #[track_caller]
    pub fn pow(self, exp: impl Into<U32>) -> Self {
        strict(self.overflowing_pow(exp), OP_POW)
    }

    /// Truncating division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or on `MIN / -1`.
    #[inline]
    #[track_caller]
    pub fn div(self, rhs: Self) -> Self {
        strict(self.overflowing_div(rhs), OP_DIV)
    }

    /// Truncating division; alias of [`div`](Self::div).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or on `MIN / -1`.
    #[inline]
    #[track_caller]
    pub fn div_down(self, rhs: Self) -> Self {
        strict(self.overflowing_div_down(rhs), OP_DIV)
    }

    /// Ceiling division; alias of [`div_ceil`](Self::div_ceil).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or on `MIN / -1`.
    #[inline]
    #[track_caller]
    pub fn div_up(self, rhs: Self) -> Self {
        strict(self.overflowing_div_up(rhs), OP_DIV)
    }

    /// Division rounding toward negative infinity.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or on `MIN / -1`.
    ///
    /// ```rust
    /// # use stdx_core::num::I8;
    /// assert_eq!(I8::new(-8).div_floor(I8::new(3)), I8::new(-3));
    /// ```
    #[inline]
    #[track_caller]
    pub fn div_floor(self, rhs: Self) -> Self {
        strict(self.overflowing_div_floor(rhs), OP_DIV)
    }

    /// Division rounding toward positive infinity.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or on `MIN / -1`.
    #[inline]
    #[track_caller]
    pub fn div_ceil(self, rhs: Self) -> Self {
        strict(self.overflowing_div_ceil(rhs), OP_DIV)
    }

    /// Euclidean division: the `q` with `self = rhs * q + r` and `0 <= r < |rhs|`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero or on `MIN / -1`.
    ///
    /// ```rust
    /// # use stdx_core::num::I8;
    /// let (a, b) = (I8::new(-8), I8::new(-3));
    /// assert_eq!(a.div_euclid(b), I8::new(3));
    /// assert_eq!(b * a.div_euclid(b) + a.rem_euclid(b), a);
    /// ```
    #[inline]
    #[track_caller]
    pub fn div_euclid(self, rhs: Self) -> Self {
        strict(self.overflowing_div_euclid(rhs), OP_DIV)
    }

    /// Truncating remainder; takes the sign of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn rem(self, rhs: Self) -> Self {
        self.overflowing_rem(rhs).0
    }

    /// Euclidean remainder, in `[0, |rhs|)`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn rem_euclid(self, rhs: Self) -> Self {
        self.overflowing_rem_euclid(rhs).0
    }
}

impl<T: SignedPrimitive> Integer<T> {
    /// Absolute value.
    ///
    /// # Panics
    ///
    /// Panics for `MIN`.
    #[inline]
    #[track_caller]
    pub fn abs(self) -> Self {
        strict(self.overflowing_abs(), OP_ABS)
    }

    /// Addition of a same-width unsigned value.
    ///
    /// # Panics
    ///
    /// Panics if the sum is out of the signed range.
    #[inline]
    #[track_caller]
    pub fn add_unsigned(self, rhs: Integer<T::Unsigned>) -> Self {
        strict(self.overflowing_add_unsigned(rhs), OP_ADD)
    }

    /// Subtraction of a same-width unsigned value.
    ///
    /// # Panics
    ///
    /// Panics if the difference is out of the signed range.
    #[inline]
    #[track_caller]
    pub fn sub_unsigned(self, rhs: Integer<T::Unsigned>) -> Self {
        strict(self.overflowing_sub_unsigned(rhs), OP_SUB)
    }
}

impl<T: UnsignedPrimitive> Integer<T> {
    /// Addition of a same-width signed value.
    ///
    /// # Panics
    ///
    /// Panics if the sum is out of the unsigned range.
    #[inline]
    #[track_caller]
    pub fn add_signed(self, rhs: Integer<T::Signed>) -> Self {
        strict(self.overflowing_add_signed(rhs), OP_ADD)
    }
}
