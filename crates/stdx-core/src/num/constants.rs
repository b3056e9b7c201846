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

//! Associated-constant traits for the native integer primitives.
//!
//! These traits expose the sentinel values the arithmetic core needs
//! (`ZERO`, `PLUS_ONE`, `MINUS_ONE`, the representable bounds and the bit
//! width) as associated constants, so generic code can name them without
//! going through a function call.

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for integer types that have a constant with the bit pattern of -1.
///
/// For signed types this is the value `-1`. Unsigned types have no negative
/// values, so the constant is the all-ones pattern (`MAX`), which is what `-1`
/// reinterprets to under two's complement.
pub trait MinusOne {
    /// The all-ones bit pattern for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for integer types with a closed representable range `[MIN, MAX]`.
///
/// # Examples
///
/// ```rust
/// # use stdx_core::num::constants::Bounds;
/// assert_eq!(<i8 as Bounds>::MIN, -128);
/// assert_eq!(<u16 as Bounds>::MAX, 65_535);
/// ```
pub trait Bounds {
    /// The smallest representable value.
    const MIN: Self;
    /// The largest representable value.
    const MAX: Self;
}

/// A trait describing the width and signedness of an integer type.
pub trait BitWidth {
    /// The number of bits in the representation.
    const BITS: u32;
    /// Whether the type uses a two's-complement signed interpretation.
    const IS_SIGNED: bool;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_constants_for {
    ($t:ty, $minus_one:expr, $signed:expr) => {
        impl_const_for!(Zero, ZERO, 0, $t);
        impl_const_for!(PlusOne, PLUS_ONE, 1, $t);
        impl_const_for!(MinusOne, MINUS_ONE, $minus_one, $t);

        impl Bounds for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
        }

        impl BitWidth for $t {
            const BITS: u32 = <$t>::BITS;
            const IS_SIGNED: bool = $signed;
        }
    };
}

impl_constants_for!(i8, -1, true);
impl_constants_for!(i16, -1, true);
impl_constants_for!(i32, -1, true);
impl_constants_for!(i64, -1, true);
impl_constants_for!(i128, -1, true);
impl_constants_for!(isize, -1, true);

impl_constants_for!(u8, u8::MAX, false);
impl_constants_for!(u16, u16::MAX, false);
impl_constants_for!(u32, u32::MAX, false);
impl_constants_for!(u64, u64::MAX, false);
impl_constants_for!(u128, u128::MAX, false);
impl_constants_for!(usize, usize::MAX, false);
