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

//! Checked arithmetic: every operation returns `Option<Integer<T>>`.
//!
//! The result is `Some` exactly when the mathematical result is representable
//! and the operation is defined. Division and remainder by zero, negating or
//! taking the absolute value of signed `MIN`, and every out-of-range result
//! yield `None`. Nothing here panics.

use crate::num::{
    integer::{Integer, U32},
    primitive::{PrimitiveInt, SignedPrimitive, UnsignedPrimitive},
    rounding::{Rounding, div_rounded, rem_rounded},
};

#[inline(always)]
fn keep<T: PrimitiveInt>((value, overflowed): (Integer<T>, bool)) -> Option<Integer<T>> {
    if overflowed { None } else { Some(value) }
}

impl<T: PrimitiveInt> Integer<T> {
    #[inline(always)]
    fn checked_div_with(self, rhs: Self, rounding: Rounding) -> Option<Self> {
        match div_rounded(self.0, rhs.0, rounding)? {
            (_, true) => None,
            (q, false) => Some(Self(q)),
        }
    }

    /// Checked addition, returning `None` if the sum is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::U8;
    /// let a = U8::new(200);
    /// assert_eq!(a.checked_add(U8::new(100)), None); // Overflow occurs
    /// assert_eq!(a.checked_add(U8::new(50)), Some(U8::new(250)));
    /// ```
    #[inline(always)]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        keep(self.overflowing_add(rhs))
    }

    /// Checked subtraction, returning `None` if the difference is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::U8;
    /// let a = U8::new(50);
    /// assert_eq!(a.checked_sub(U8::new(100)), None); // Underflow occurs
    /// assert_eq!(a.checked_sub(U8::new(20)), Some(U8::new(30)));
    /// ```
    #[inline(always)]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        keep(self.overflowing_sub(rhs))
    }

    /// Checked multiplication, returning `None` if the product is out of range.
    #[inline(always)]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        keep(self.overflowing_mul(rhs))
    }

    /// Checked negation.
    ///
    /// `None` for signed `MIN`, and for every non-zero unsigned value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(I8::MIN.checked_neg(), None);
    /// assert_eq!(I8::new(100).checked_neg(), Some(I8::new(-100)));
    /// assert_eq!(U8::ZERO.checked_neg(), Some(U8::ZERO));
    /// assert_eq!(U8::ONE.checked_neg(), None);
    /// ```
    #[inline(always)]
    pub fn checked_neg(self) -> Option<Self> {
        keep(self.overflowing_neg())
    }

    /// Checked exponentiation. `x.checked_pow(0)` is `Some(1)` for every `x`.
    #[inline]
    pub fn checked_pow(self, exp: impl Into<U32>) -> Option<Self> {
        keep(self.overflowing_pow(exp))
    }

    /// Checked truncating division.
    ///
    /// `None` if `rhs` is zero or the quotient overflows (`MIN / -1`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::I8;
    /// assert_eq!(I8::new(-8).checked_div(I8::new(3)), Some(I8::new(-2)));
    /// assert_eq!(I8::new(1).checked_div(I8::ZERO), None);
    /// assert_eq!(I8::MIN.checked_div(I8::new(-1)), None);
    /// ```
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        self.checked_div_with(rhs, Rounding::Down)
    }

    /// Alias of [`checked_div`](Self::checked_div).
    #[inline]
    pub fn checked_div_down(self, rhs: Self) -> Option<Self> {
        self.checked_div_with(rhs, Rounding::Down)
    }

    /// Checked ceiling division; same as [`checked_div_ceil`](Self::checked_div_ceil).
    #[inline]
    pub fn checked_div_up(self, rhs: Self) -> Option<Self> {
        self.checked_div_with(rhs, Rounding::Ceil)
    }

    /// Checked division rounding toward negative infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::I32;
    /// assert_eq!(I32::new(8).checked_div_floor(I32::new(-3)), Some(I32::new(-3)));
    /// assert_eq!(I32::new(-8).checked_div_floor(I32::new(-3)), Some(I32::new(2)));
    /// ```
    #[inline]
    pub fn checked_div_floor(self, rhs: Self) -> Option<Self> {
        self.checked_div_with(rhs, Rounding::Floor)
    }

    /// Checked division rounding toward positive infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stdx_core::num::I32;
    /// assert_eq!(I32::new(8).checked_div_ceil(I32::new(3)), Some(I32::new(3)));
    /// assert_eq!(I32::new(-8).checked_div_ceil(I32::new(3)), Some(I32::new(-2)));
    /// ```
    #[inline]
    pub fn checked_div_ceil(self, rhs: Self) -> Option<Self> {
        self.checked_div_with(rhs, Rounding::Ceil)
    }

    /// Checked Euclidean division.
    #[inline]
    pub fn checked_div_euclid(self, rhs: Self) -> Option<Self> {
        self.checked_div_with(rhs, Rounding::Euclid)
    }

    /// Checked truncating remainder; `None` only if `rhs` is zero.
    ///
    /// `MIN % -1` is exactly zero and therefore `Some(0)`.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        rem_rounded(self.0, rhs.0, false).map(Self)
    }

    /// Checked Euclidean remainder; `None` only if `rhs` is zero.
    #[inline]
    pub fn checked_rem_euclid(self, rhs: Self) -> Option<Self> {
        rem_rounded(self.0, rhs.0, true).map(Self)
    }
}

impl<T: SignedPrimitive> Integer<T> {
    /// Checked absolute value; `None` only for `MIN`.
    ///
    /// ```rust
    /// # use stdx_core::num::I16;
    /// assert_eq!(I16::new(-5).checked_abs(), Some(I16::new(5)));
    /// assert_eq!(I16::MIN.checked_abs(), None);
    /// ```
    #[inline]
    pub fn checked_abs(self) -> Option<Self> {
        keep(self.overflowing_abs())
    }

    /// Checked addition of a same-width unsigned value.
    #[inline]
    pub fn checked_add_unsigned(self, rhs: Integer<T::Unsigned>) -> Option<Self> {
        keep(self.overflowing_add_unsigned(rhs))
    }

    /// Checked subtraction of a same-width unsigned value.
    #[inline]
    pub fn checked_sub_unsigned(self, rhs: Integer<T::Unsigned>) -> Option<Self> {
        keep(self.overflowing_sub_unsigned(rhs))
    }
}

impl<T: UnsignedPrimitive> Integer<T> {
    /// Checked addition of a same-width signed value, against the unsigned range.
    ///
    /// ```rust
    /// # use stdx_core::num::{I32, U32};
    /// assert_eq!(U32::new(5).checked_add_signed(I32::new(-5)), Some(U32::ZERO));
    /// assert_eq!(U32::new(5).checked_add_signed(I32::new(-6)), None);
    /// ```
    #[inline]
    pub fn checked_add_signed(self, rhs: Integer<T::Signed>) -> Option<Self> {
        keep(self.overflowing_add_signed(rhs))
    }
}

#[cfg(test)]
mod tests {
    use crate::num::{I8, I64, Isize, U8, U16, Usize};

    #[test]
    fn test_checked_add() {
        assert_eq!(U8::MAX.checked_add(U8::ONE), None);
        assert_eq!(I8::MAX.checked_add(I8::ONE), None);
        assert_eq!(I8::MIN.checked_add(I8::new(-1)), None);
        assert_eq!(I8::new(-1).checked_add(I8::new(1)), Some(I8::ZERO));
        assert_eq!(Usize::MAX.checked_add(Usize::ZERO), Some(Usize::MAX));
    }

    #[test]
    fn test_checked_sub() {
        assert_eq!(U8::ZERO.checked_sub(U8::ONE), None);
        assert_eq!(I8::MIN.checked_sub(I8::ONE), None);
        assert_eq!(I8::MAX.checked_sub(I8::new(-1)), None);
        assert_eq!(I64::new(42).checked_sub(I64::new(42)), Some(I64::ZERO));
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(U8::new(20).checked_mul(U8::new(10)), Some(U8::new(200)));
        assert_eq!(U8::new(20).checked_mul(U8::new(20)), None);
        assert_eq!(I8::new(-16).checked_mul(I8::new(8)), Some(I8::MIN));
        assert_eq!(I8::new(-1).checked_mul(I8::MIN), None);
    }

    #[test]
    fn test_checked_division_modes() {
        let x = I8::new(8);
        let y = I8::new(3);
        assert_eq!(x.checked_div(y), Some(I8::new(2)));
        assert_eq!(x.checked_div_down(-y), Some(I8::new(-2)));
        assert_eq!(x.checked_div_up(-y), Some(I8::new(-2)));
        assert_eq!((-x).checked_div_up(-y), Some(I8::new(3)));
        assert_eq!((-x).checked_div_euclid(y), Some(I8::new(-3)));
        assert_eq!(x.checked_div_euclid(-y), Some(I8::new(-2)));
        assert_eq!((-x).checked_div_euclid(-y), Some(I8::new(3)));
    }

    #[test]
    fn test_checked_division_by_zero() {
        for f in [
            I8::checked_div,
            I8::checked_div_down,
            I8::checked_div_up,
            I8::checked_div_floor,
            I8::checked_div_ceil,
            I8::checked_div_euclid,
            I8::checked_rem,
            I8::checked_rem_euclid,
        ] {
            assert_eq!(f(I8::new(5), I8::ZERO), None);
        }
        assert_eq!(U16::MAX.checked_div_ceil(U16::ZERO), None);
    }

    #[test]
    fn test_checked_remainder() {
        assert_eq!(I8::new(-8).checked_rem(I8::new(3)), Some(I8::new(-2)));
        assert_eq!(I8::new(-8).checked_rem_euclid(I8::new(3)), Some(I8::new(1)));
        assert_eq!(I8::new(-8).checked_rem_euclid(I8::new(-3)), Some(I8::new(1)));
        assert_eq!(I8::MIN.checked_rem(I8::new(-1)), Some(I8::ZERO));
        assert_eq!(
            U8::new(8).checked_rem(U8::new(3)),
            U8::new(8).checked_rem_euclid(U8::new(3))
        );
    }

    #[test]
    fn test_checked_pow() {
        assert_eq!(I8::ZERO.checked_pow(0u32), Some(I8::ONE));
        assert_eq!(I8::new(2).checked_pow(6u32), Some(I8::new(64)));
        assert_eq!(I8::new(2).checked_pow(7u32), None);
        assert_eq!(I8::new(-2).checked_pow(7u32), Some(I8::MIN));
        assert_eq!(U8::new(2).checked_pow(8u32), None);
    }

    #[test]
    fn test_checked_abs_and_neg() {
        assert_eq!(Isize::MIN.checked_abs(), None);
        assert_eq!(Isize::MIN.checked_neg(), None);
        assert_eq!(Isize::new(-3).checked_abs(), Some(Isize::new(3)));
        assert_eq!(Usize::new(3).checked_neg(), None);
    }

    #[test]
    fn test_checked_mixed_sign() {
        assert_eq!(I8::new(-1).checked_add_unsigned(U8::MAX), None);
        assert_eq!(I8::MIN.checked_add_unsigned(U8::MAX), Some(I8::MAX));
        assert_eq!(I8::ZERO.checked_sub_unsigned(U8::new(128)), Some(I8::MIN));
        assert_eq!(I8::ZERO.checked_sub_unsigned(U8::new(129)), None);
        assert_eq!(U8::new(10).checked_add_signed(I8::new(-10)), Some(U8::ZERO));
        assert_eq!(U8::new(250).checked_add_signed(I8::new(6)), None);
    }
}
