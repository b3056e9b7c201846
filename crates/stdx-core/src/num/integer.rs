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

//! # Fixed-Width Integer Value Type
//!
//! [`Integer<T>`] wraps a native primitive `T`, which fixes both the bit
//! width and the signedness at compile time. The value is always within
//! `[Integer::MIN, Integer::MAX]` because it *is* the native bit pattern;
//! there is nothing to validate.
//!
//! Arithmetic lives in [`ops`](crate::num::ops), one method family per
//! overflow policy. This module holds the type itself, its constants, the
//! bit-reinterpreting casts, formatting, parsing and the operator traits.

use crate::num::{
    error::ParseIntegerError,
    primitive::{PrimitiveInt, SignedPrimitive},
};
use std::{
    fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};

/// A fixed-width two's-complement integer.
///
/// Values are immutable; every operation returns a new `Integer`.
///
/// # Examples
///
/// ```rust
/// # use stdx_core::num::{I8, U8};
/// let x = I8::new(100);
/// assert_eq!(x.checked_add(I8::new(27)), Some(I8::MAX));
/// assert_eq!(x.checked_add(I8::new(28)), None);
/// assert_eq!(U8::MAX.wrapping_add(U8::ONE), U8::MIN);
/// assert_eq!(U8::MAX.cast_signed(), I8::new(-1));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[repr(transparent)]
pub struct Integer<T: PrimitiveInt>(pub(crate) T);

/// 8-bit signed integer.
pub type I8 = Integer<i8>;
/// 16-bit signed integer.
pub type I16 = Integer<i16>;
/// 32-bit signed integer.
pub type I32 = Integer<i32>;
/// 64-bit signed integer.
pub type I64 = Integer<i64>;
/// 128-bit signed integer.
pub type I128 = Integer<i128>;
/// Pointer-sized signed integer.
pub type Isize = Integer<isize>;
/// 8-bit unsigned integer.
pub type U8 = Integer<u8>;
/// 16-bit unsigned integer.
pub type U16 = Integer<u16>;
/// 32-bit unsigned integer.
pub type U32 = Integer<u32>;
/// 64-bit unsigned integer.
pub type U64 = Integer<u64>;
/// 128-bit unsigned integer.
pub type U128 = Integer<u128>;
/// Pointer-sized unsigned integer.
pub type Usize = Integer<usize>;

impl<T: PrimitiveInt> Integer<T> {
    /// The smallest representable value: `-2^(BITS-1)` if signed, else `0`.
    pub const MIN: Self = Self(T::MIN);

    /// The largest representable value: `2^(BITS-1) - 1` if signed, else `2^BITS - 1`.
    pub const MAX: Self = Self(T::MAX);

    /// The value `0`.
    pub const ZERO: Self = Self(T::ZERO);

    /// The value `1`.
    pub const ONE: Self = Self(T::PLUS_ONE);

    /// The width of the representation in bits.
    pub const BITS: u32 = T::BITS;

    /// Whether the type is signed.
    pub const IS_SIGNED: bool = T::IS_SIGNED;

    /// Wraps a native value.
    #[inline(always)]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// Returns the native value.
    #[inline(always)]
    pub const fn get(self) -> T {
        self.0
    }

    /// Returns `true` if the value is zero.
    #[inline(always)]
    pub fn is_zero(self) -> bool {
        self.0 == T::ZERO
    }

    /// Reinterprets the bit pattern as the same-width signed type.
    ///
    /// This is not a value conversion: unsigned `MAX` becomes signed `-1`.
    /// On a signed type this is the identity.
    ///
    /// ```rust
    /// # use stdx_core::num::{I16, U16};
    /// assert_eq!(U16::new(0x8000).cast_signed(), I16::MIN);
    /// ```
    #[inline(always)]
    pub fn cast_signed(self) -> Integer<T::Signed> {
        Integer(self.0.cast_signed())
    }

    /// Reinterprets the bit pattern as the same-width unsigned type.
    ///
    /// On an unsigned type this is the identity.
    ///
    /// ```rust
    /// # use stdx_core::num::{I32, U32};
    /// assert_eq!(I32::new(-1).cast_unsigned(), U32::MAX);
    /// ```
    #[inline(always)]
    pub fn cast_unsigned(self) -> Integer<T::Unsigned> {
        Integer(self.0.cast_unsigned())
    }

    /// Parses a value from a string in the given radix (2 to 36).
    ///
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`, like the native parser.
    pub fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntegerError> {
        T::from_str_radix(src, radix)
            .map(Self)
            .map_err(|e| ParseIntegerError::new(e, std::any::type_name::<T>()))
    }
}

impl<T: SignedPrimitive> Integer<T> {
    /// Returns `true` if the value is strictly below zero.
    #[inline(always)]
    pub fn is_negative(self) -> bool {
        self.0.is_negative()
    }

    /// Returns `true` if the value is strictly above zero.
    #[inline(always)]
    pub fn is_positive(self) -> bool {
        self.0 > T::ZERO
    }

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    #[inline]
    pub fn signum(self) -> Self {
        if self.is_negative() {
            Self(T::MINUS_ONE)
        } else if self.is_zero() {
            Self::ZERO
        } else {
            Self::ONE
        }
    }

    /// The absolute value as the same-width unsigned type.
    ///
    /// Never overflows: `|MIN|` is representable as an unsigned value.
    ///
    /// ```rust
    /// # use stdx_core::num::{I8, U8};
    /// assert_eq!(I8::MIN.unsigned_abs(), U8::new(128));
    /// ```
    #[inline]
    pub fn unsigned_abs(self) -> Integer<T::Unsigned> {
        self.wrapping_abs().cast_unsigned()
    }
}

impl<T: PrimitiveInt> From<T> for Integer<T> {
    #[inline(always)]
    fn from(value: T) -> Self {
        Self(value)
    }
}

macro_rules! impl_native_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<Integer<$t>> for $t {
                #[inline(always)]
                fn from(value: Integer<$t>) -> Self {
                    value.0
                }
            }
        )*
    };
}

impl_native_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: PrimitiveInt> FromStr for Integer<T> {
    type Err = ParseIntegerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<T>()
            .map(Self)
            .map_err(|e| ParseIntegerError::new(e, std::any::type_name::<T>()))
    }
}

macro_rules! impl_fmt_forward {
    ($($fmt_trait:ident),*) => {
        $(
            impl<T: PrimitiveInt> $fmt_trait for Integer<T> {
                #[inline]
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    $fmt_trait::fmt(&self.0, f)
                }
            }
        )*
    };
}

impl_fmt_forward!(Debug, Display, LowerHex, UpperHex, Binary, Octal);

// Operators follow the strict policy: they trap on overflow and on a zero
// divisor. `/` and `%` truncate toward zero.

macro_rules! impl_strict_binary_op {
    ($op_trait:ident, $op_method:ident, $assign_trait:ident, $assign_method:ident, $strict:ident) => {
        impl<T: PrimitiveInt> $op_trait for Integer<T> {
            type Output = Self;

            #[inline(always)]
            #[track_caller]
            fn $op_method(self, rhs: Self) -> Self {
                Integer::$strict(self, rhs)
            }
        }

        impl<T: PrimitiveInt> $assign_trait for Integer<T> {
            #[inline(always)]
            #[track_caller]
            fn $assign_method(&mut self, rhs: Self) {
                *self = Integer::$strict(*self, rhs);
            }
        }
    };
}

impl_strict_binary_op!(Add, add, AddAssign, add_assign, add);
impl_strict_binary_op!(Sub, sub, SubAssign, sub_assign, sub);
impl_strict_binary_op!(Mul, mul, MulAssign, mul_assign, mul);
impl_strict_binary_op!(Div, div, DivAssign, div_assign, div);
impl_strict_binary_op!(Rem, rem, RemAssign, rem_assign, rem);

impl<T: PrimitiveInt> Neg for Integer<T> {
    type Output = Self;

    #[inline(always)]
    #[track_caller]
    fn neg(self) -> Self {
        Integer::neg(self)
    }
}
