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

//! Cross-width value conversions under each overflow policy.
//!
//! Unlike [`cast_signed`](Integer::cast_signed) and
//! [`cast_unsigned`](Integer::cast_unsigned), which reinterpret bits between
//! same-width partners, these convert the *value* to any other width. The
//! policies mirror the arithmetic ones: `checked_cast` and `try_cast` fail
//! when the value does not fit, `wrapping_cast` keeps the low bits,
//! `saturating_cast` clamps and `cast` traps.

use crate::num::{
    error::{ArithmeticError, TryFromIntegerError},
    integer::Integer,
    ops::{OP_CAST, trap},
    primitive::PrimitiveInt,
};
use num_traits::{AsPrimitive, NumCast};

impl<T: PrimitiveInt> Integer<T> {
    /// Converts to another width, returning `None` if the value does not fit.
    ///
    /// ```rust
    /// # use stdx_core::num::{I16, I8, U8};
    /// assert_eq!(I16::new(-5).checked_cast::<i8>(), Some(I8::new(-5)));
    /// assert_eq!(I16::new(-5).checked_cast::<u8>(), None);
    /// assert_eq!(I16::new(300).checked_cast::<u8>(), None);
    /// assert_eq!(U8::MAX.checked_cast::<i16>(), Some(I16::new(255)));
    /// ```
    #[inline]
    pub fn checked_cast<U: PrimitiveInt>(self) -> Option<Integer<U>> {
        <U as NumCast>::from(self.0).map(Integer)
    }

    /// Converts to another width, reporting a value that does not fit as an error.
    #[inline]
    pub fn try_cast<U: PrimitiveInt>(self) -> Result<Integer<U>, TryFromIntegerError> {
        self.checked_cast().ok_or(TryFromIntegerError {
            from: std::any::type_name::<T>(),
            to: std::any::type_name::<U>(),
        })
    }

    /// Converts to another width, keeping the low `U::BITS` bits of the
    /// two's-complement representation (sign-extending when widening a
    /// signed value).
    ///
    /// ```rust
    /// # use stdx_core::num::{I32, U8, I8};
    /// assert_eq!(I32::new(-1).wrapping_cast::<u8>(), U8::MAX);
    /// assert_eq!(I32::new(384).wrapping_cast::<i8>(), I8::MIN);
    /// ```
    #[inline]
    pub fn wrapping_cast<U: PrimitiveInt>(self) -> Integer<U>
    where
        T: AsPrimitive<U>,
    {
        Integer(self.0.as_())
    }

    /// Converts to another width, clamping to the target's bounds.
    ///
    /// ```rust
    /// # use stdx_core::num::{I32, U8};
    /// assert_eq!(I32::new(-7).saturating_cast::<u8>(), U8::MIN);
    /// assert_eq!(I32::new(1000).saturating_cast::<u8>(), U8::MAX);
    /// ```
    #[inline]
    pub fn saturating_cast<U: PrimitiveInt>(self) -> Integer<U> {
        match self.checked_cast() {
            Some(v) => v,
            None if self.0.is_negative() => Integer::MIN,
            None => Integer::MAX,
        }
    }

    /// Converts to another width: the wrapped value and whether the value
    /// did not fit.
    #[inline]
    pub fn overflowing_cast<U: PrimitiveInt>(self) -> (Integer<U>, bool)
    where
        T: AsPrimitive<U>,
    {
        (self.wrapping_cast(), self.checked_cast::<U>().is_none())
    }

    /// Converts to another width.
    ///
    /// # Panics
    ///
    /// Panics if the value does not fit the target type.
    #[inline]
    #[track_caller]
    pub fn cast<U: PrimitiveInt>(self) -> Integer<U> {
        match self.checked_cast() {
            Some(v) => v,
            None => trap(ArithmeticError::Overflow { op: OP_CAST }),
        }
    }
}
