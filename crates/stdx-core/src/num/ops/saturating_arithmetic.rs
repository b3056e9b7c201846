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

//! Saturating arithmetic: out-of-range results clamp to `MIN` or `MAX`.
//!
//! Each method takes the overflowing result and, when the flag is set, picks
//! the bound on the side the exact result left the range. The side is always
//! decidable from the operand signs alone.

use crate::num::{
    integer::{Integer, U32},
    primitive::{PrimitiveInt, SignedPrimitive, UnsignedPrimitive},
};

impl<T: PrimitiveInt> Integer<T> {
    #[inline(always)]
    fn clamp_to(value: (Self, bool), below: bool) -> Self {
        match value {
            (_, true) if below => Self::MIN,
            (_, true) => Self::MAX,
            (v, false) => v,
        }
    }

    /// Saturating addition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(U8::new(250).saturating_add(U8::new(10)), U8::MAX);
    /// assert_eq!(I8::new(120).saturating_add(I8::new(10)), I8::MAX);
    /// assert_eq!(I8::new(-120).saturating_add(I8::new(-20)), I8::MIN);
    /// ```
    #[inline(always)]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self::clamp_to(self.overflowing_add(rhs), rhs.0.is_negative())
    }

    /// Saturating subtraction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(U8::new(5).saturating_sub(U8::new(10)), U8::MIN);
    /// assert_eq!(I8::new(-120).saturating_sub(I8::new(20)), I8::MIN);
    /// assert_eq!(I8::new(120).saturating_sub(I8::new(-20)), I8::MAX);
    /// ```
    #[inline(always)]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::clamp_to(self.overflowing_sub(rhs), !rhs.0.is_negative())
    }

    /// Saturating multiplication; the bound follows the sign of the product.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(U8::new(64).saturating_mul(U8::new(10)), U8::MAX);
    /// assert_eq!(I8::new(30).saturating_mul(I8::new(10)), I8::MAX);
    /// assert_eq!(I8::new(-30).saturating_mul(I8::new(10)), I8::MIN);
    /// ```
    #[inline(always)]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        let below = self.0.is_negative() != rhs.0.is_negative();
        Self::clamp_to(self.overflowing_mul(rhs), below)
    }

    /// Saturating negation.
    ///
    /// Signed `MIN` clamps to `MAX`; non-zero unsigned values clamp to `0`.
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(I8::MIN.saturating_neg(), I8::MAX);
    /// assert_eq!(U8::new(3).saturating_neg(), U8::ZERO);
    /// ```
    #[inline(always)]
    pub fn saturating_neg(self) -> Self {
        Self::clamp_to(self.overflowing_neg(), !T::IS_SIGNED)
    }

    /// Saturating exponentiation.
    ///
    /// A negative base raised to an odd power clamps to `MIN`, otherwise to `MAX`.
    #[inline]
    pub fn saturating_pow(self, exp: impl Into<U32>) -> Self {
        let exp = exp.into();
        let below = self.0.is_negative() && exp.get() & 1 == 1;
        Self::clamp_to(self.overflowing_pow(exp), below)
    }

    /// Saturating truncating division; `MIN / -1` clamps to `MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn saturating_div(self, rhs: Self) -> Self {
        Self::clamp_to(self.overflowing_div(rhs), false)
    }

    /// Alias of [`saturating_div`](Self::saturating_div).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn saturating_div_down(self, rhs: Self) -> Self {
        Self::clamp_to(self.overflowing_div_down(rhs), false)
    }

    /// Saturating ceiling division; same as [`saturating_div_ceil`](Self::saturating_div_ceil).
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn saturating_div_up(self, rhs: Self) -> Self {
        Self::clamp_to(self.overflowing_div_up(rhs), false)
    }

    /// Saturating floor division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn saturating_div_floor(self, rhs: Self) -> Self {
        Self::clamp_to(self.overflowing_div_floor(rhs), false)
    }

    /// Saturating ceiling division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn saturating_div_ceil(self, rhs: Self) -> Self {
        Self::clamp_to(self.overflowing_div_ceil(rhs), false)
    }

    /// Saturating Euclidean division.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn saturating_div_euclid(self, rhs: Self) -> Self {
        Self::clamp_to(self.overflowing_div_euclid(rhs), false)
    }

    /// Truncating remainder; a remainder never saturates.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn saturating_rem(self, rhs: Self) -> Self {
        self.overflowing_rem(rhs).0
    }

    /// Euclidean remainder; a remainder never saturates.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[inline]
    #[track_caller]
    pub fn saturating_rem_euclid(self, rhs: Self) -> Self {
        self.overflowing_rem_euclid(rhs).0
    }
}

impl<T: SignedPrimitive> Integer<T> {
    /// Saturating absolute value; `MIN` clamps to `MAX`.
    #[inline]
    pub fn saturating_abs(self) -> Self {
        Self::clamp_to(self.overflowing_abs(), false)
    }

    /// Saturating addition of a same-width unsigned value. Can only exceed `MAX`.
    #[inline]
    pub fn saturating_add_unsigned(self, rhs: Integer<T::Unsigned>) -> Self {
        Self::clamp_to(self.overflowing_add_unsigned(rhs), false)
    }

    /// Saturating subtraction of a same-width unsigned value. Can only fall below `MIN`.
    #[inline]
    pub fn saturating_sub_unsigned(self, rhs: Integer<T::Unsigned>) -> Self {
        Self::clamp_to(self.overflowing_sub_unsigned(rhs), true)
    }
}

impl<T: UnsignedPrimitive> Integer<T> {
    /// Saturating addition of a same-width signed value.
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(U8::new(3).saturating_add_signed(I8::new(-5)), U8::MIN);
    /// assert_eq!(U8::new(250).saturating_add_signed(I8::new(10)), U8::MAX);
    /// ```
    #[inline]
    pub fn saturating_add_signed(self, rhs: Integer<T::Signed>) -> Self {
        Self::clamp_to(self.overflowing_add_signed(rhs), rhs.0.is_negative())
    }
}
