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

//! `num_traits` integration.
//!
//! Implements the reference-taking `num_traits` arithmetic traits by
//! delegating to the by-value policy methods, so `Integer<T>` plugs into
//! generic numeric code written against `num_traits` bounds.

use crate::num::{error::ParseIntegerError, integer::Integer, primitive::PrimitiveInt};
use num_traits::{
    Bounded, CheckedAdd, CheckedDiv, CheckedEuclid, CheckedMul, CheckedNeg, CheckedRem,
    CheckedSub, Euclid, Num, One, Pow, SaturatingAdd, SaturatingMul, SaturatingSub, WrappingAdd,
    WrappingMul, WrappingNeg, WrappingSub, Zero,
    ops::overflowing::{OverflowingAdd, OverflowingMul, OverflowingSub},
};

macro_rules! impl_ref_binary {
    ($trait_name:ident, $method:ident, $out:ty) => {
        impl<T: PrimitiveInt> $trait_name for Integer<T> {
            #[inline(always)]
            fn $method(&self, v: &Self) -> $out {
                Integer::$method(*self, *v)
            }
        }
    };
}

macro_rules! impl_ref_unary {
    ($trait_name:ident, $method:ident, $out:ty) => {
        impl<T: PrimitiveInt> $trait_name for Integer<T> {
            #[inline(always)]
            fn $method(&self) -> $out {
                Integer::$method(*self)
            }
        }
    };
}

impl_ref_binary!(CheckedAdd, checked_add, Option<Self>);
impl_ref_binary!(CheckedSub, checked_sub, Option<Self>);
impl_ref_binary!(CheckedMul, checked_mul, Option<Self>);
impl_ref_binary!(CheckedDiv, checked_div, Option<Self>);
impl_ref_binary!(CheckedRem, checked_rem, Option<Self>);
impl_ref_unary!(CheckedNeg, checked_neg, Option<Self>);

impl_ref_binary!(WrappingAdd, wrapping_add, Self);
impl_ref_binary!(WrappingSub, wrapping_sub, Self);
impl_ref_binary!(WrappingMul, wrapping_mul, Self);
impl_ref_unary!(WrappingNeg, wrapping_neg, Self);

impl_ref_binary!(SaturatingAdd, saturating_add, Self);
impl_ref_binary!(SaturatingSub, saturating_sub, Self);
impl_ref_binary!(SaturatingMul, saturating_mul, Self);

impl_ref_binary!(OverflowingAdd, overflowing_add, (Self, bool));
impl_ref_binary!(OverflowingSub, overflowing_sub, (Self, bool));
impl_ref_binary!(OverflowingMul, overflowing_mul, (Self, bool));

impl<T: PrimitiveInt> Euclid for Integer<T> {
    #[inline]
    fn div_euclid(&self, v: &Self) -> Self {
        Integer::div_euclid(*self, *v)
    }

    #[inline]
    fn rem_euclid(&self, v: &Self) -> Self {
        Integer::rem_euclid(*self, *v)
    }
}

impl<T: PrimitiveInt> CheckedEuclid for Integer<T> {
    #[inline]
    fn checked_div_euclid(&self, v: &Self) -> Option<Self> {
        Integer::checked_div_euclid(*self, *v)
    }

    #[inline]
    fn checked_rem_euclid(&self, v: &Self) -> Option<Self> {
        Integer::checked_rem_euclid(*self, *v)
    }
}

impl<T: PrimitiveInt> Bounded for Integer<T> {
    #[inline(always)]
    fn min_value() -> Self {
        Self::MIN
    }

    #[inline(always)]
    fn max_value() -> Self {
        Self::MAX
    }
}

impl<T: PrimitiveInt> Zero for Integer<T> {
    #[inline(always)]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline(always)]
    fn is_zero(&self) -> bool {
        Integer::is_zero(*self)
    }
}

impl<T: PrimitiveInt> One for Integer<T> {
    #[inline(always)]
    fn one() -> Self {
        Self::ONE
    }
}

impl<T: PrimitiveInt> Num for Integer<T> {
    type FromStrRadixErr = ParseIntegerError;

    fn from_str_radix(str: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Integer::from_str_radix(str, radix)
    }
}

impl<T: PrimitiveInt> Pow<u32> for Integer<T> {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn pow(self, rhs: u32) -> Self {
        Integer::pow(self, rhs)
    }
}
