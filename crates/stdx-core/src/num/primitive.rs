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

//! # Native Integer Primitives
//!
//! `PrimitiveInt` is the sealed bridge between the native machine integers and
//! the generic [`Integer`](crate::num::integer::Integer) value type. It fixes
//! width and signedness at compile time, names the same-width cast partners,
//! and exposes the handful of native operations every overflow policy is built
//! from. Everything above this layer is written once, generically.

use crate::num::constants::{BitWidth, Bounds, MinusOne, PlusOne, Zero};
use num_traits::NumCast;
use std::{
    fmt::{Binary, Debug, Display, LowerHex, Octal, UpperHex},
    hash::Hash,
    num::ParseIntError,
    str::FromStr,
};

mod sealed {
    pub trait Sealed {}
}

/// A native fixed-width two's-complement integer.
///
/// Implemented for `i8`..`i128`, `isize`, `u8`..`u128` and `usize`. The trait
/// is sealed; the set of widths is closed.
pub trait PrimitiveInt:
    sealed::Sealed
    + Zero
    + PlusOne
    + MinusOne
    + Bounds
    + BitWidth
    + Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Debug
    + Display
    + LowerHex
    + UpperHex
    + Binary
    + Octal
    + FromStr<Err = ParseIntError>
    + NumCast
    + Send
    + Sync
    + 'static
{
    /// The signed type of the same width.
    type Signed: PrimitiveInt;
    /// The unsigned type of the same width.
    type Unsigned: PrimitiveInt;

    /// Native addition returning the wrapped result and a carry/overflow flag.
    fn overflowing_add(self, rhs: Self) -> (Self, bool);

    /// Native subtraction returning the wrapped result and a borrow/overflow flag.
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);

    /// Native multiplication returning the low half and an overflow flag.
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);

    /// Native two's-complement negation and whether it overflowed.
    fn overflowing_neg(self) -> (Self, bool);

    /// Truncating division with `MIN / -1` wrapping to `MIN`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Callers check the divisor first.
    fn wrapping_div(self, rhs: Self) -> Self;

    /// Truncating remainder with `MIN % -1` evaluating to `0`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero. Callers check the divisor first.
    fn wrapping_rem(self, rhs: Self) -> Self;

    /// Reinterprets the bit pattern as the same-width signed type.
    fn cast_signed(self) -> Self::Signed;

    /// Reinterprets the bit pattern as the same-width unsigned type.
    fn cast_unsigned(self) -> Self::Unsigned;

    /// Builds a value from the bit pattern of the same-width signed type.
    fn from_signed_bits(bits: Self::Signed) -> Self;

    /// Builds a value from the bit pattern of the same-width unsigned type.
    fn from_unsigned_bits(bits: Self::Unsigned) -> Self;

    /// Parses a value from a string in the given radix.
    fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError>;

    /// Returns `true` if the value is strictly below zero.
    #[inline(always)]
    fn is_negative(self) -> bool {
        Self::IS_SIGNED && self < Self::ZERO
    }
}

/// Marker for the signed primitives (`i8`..`i128`, `isize`).
pub trait SignedPrimitive: PrimitiveInt<Signed = Self> {}

/// Marker for the unsigned primitives (`u8`..`u128`, `usize`).
pub trait UnsignedPrimitive: PrimitiveInt<Unsigned = Self> {}

macro_rules! impl_primitive_int {
    ($t:ty, $signed:ty, $unsigned:ty) => {
        impl sealed::Sealed for $t {}

        impl PrimitiveInt for $t {
            type Signed = $signed;
            type Unsigned = $unsigned;

            #[inline(always)]
            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_add(self, rhs)
            }

            #[inline(always)]
            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_sub(self, rhs)
            }

            #[inline(always)]
            fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_mul(self, rhs)
            }

            #[inline(always)]
            fn overflowing_neg(self) -> (Self, bool) {
                <$t>::overflowing_neg(self)
            }

            #[inline(always)]
            fn wrapping_div(self, rhs: Self) -> Self {
                <$t>::wrapping_div(self, rhs)
            }

            #[inline(always)]
            fn wrapping_rem(self, rhs: Self) -> Self {
                <$t>::wrapping_rem(self, rhs)
            }

            #[inline(always)]
            fn cast_signed(self) -> $signed {
                self as $signed
            }

            #[inline(always)]
            fn cast_unsigned(self) -> $unsigned {
                self as $unsigned
            }

            #[inline(always)]
            fn from_signed_bits(bits: $signed) -> Self {
                bits as $t
            }

            #[inline(always)]
            fn from_unsigned_bits(bits: $unsigned) -> Self {
                bits as $t
            }

            #[inline]
            fn from_str_radix(src: &str, radix: u32) -> Result<Self, ParseIntError> {
                <$t>::from_str_radix(src, radix)
            }
        }
    };
}

macro_rules! impl_primitive_pair {
    ($($signed:ty, $unsigned:ty;)*) => {
        $(
            impl_primitive_int!($signed, $signed, $unsigned);
            impl_primitive_int!($unsigned, $signed, $unsigned);

            impl SignedPrimitive for $signed {}
            impl UnsignedPrimitive for $unsigned {}
        )*
    };
}

impl_primitive_pair! {
    i8, u8;
    i16, u16;
    i32, u32;
    i64, u64;
    i128, u128;
    isize, usize;
}
