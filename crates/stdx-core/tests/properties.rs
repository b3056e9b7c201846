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

//! Randomized conformance checks.
//!
//! Widths up to 64 bits are compared against exact arithmetic in `i128`.
//! The 128-bit types have no wider reference, so they are checked against
//! the native methods and for consistency between the policies.

use rand::{Rng, SeedableRng, rngs::StdRng};
use stdx_core::num::Integer;

const ITERATIONS: usize = 2_000;

#[derive(Clone, Copy, Debug)]
enum Mode {
    Down,
    Floor,
    Ceil,
    Euclid,
}

const MODES: [Mode; 4] = [Mode::Down, Mode::Floor, Mode::Ceil, Mode::Euclid];

/// Exact quotient of `a / b` under `mode`. `b` must be non-zero.
fn exact_div(a: i128, b: i128, mode: Mode) -> i128 {
    let q = a / b;
    let r = a % b;
    match mode {
        Mode::Down => q,
        Mode::Floor if r != 0 && (r < 0) != (b < 0) => q - 1,
        Mode::Ceil if r != 0 && (r < 0) == (b < 0) => q + 1,
        Mode::Euclid => a.div_euclid(b),
        _ => q,
    }
}

macro_rules! reference_properties {
    ($name:ident, $t:ty, $seed:expr) => {
        mod $name {
            use super::*;

            type N = Integer<$t>;

            const LO: i128 = <$t>::MIN as i128;
            const HI: i128 = <$t>::MAX as i128;
            const EDGES: [i128; 7] = [LO, LO + 1, HI, HI - 1, 0, 1, -1];

            fn sample(rng: &mut StdRng) -> $t {
                match rng.random_range(0..4) {
                    0 => EDGES[rng.random_range(0..EDGES.len())] as $t,
                    1 => rng.random_range(-16_i128..16) as $t,
                    _ => rng.random::<$t>(),
                }
            }

            fn pairs(seed: u64) -> Vec<($t, $t)> {
                let mut rng = StdRng::seed_from_u64(seed);
                (0..ITERATIONS)
                    .map(|_| (sample(&mut rng), sample(&mut rng)))
                    .collect()
            }

            fn fits(v: i128) -> bool {
                (LO..=HI).contains(&v)
            }

            fn assert_policies(
                ctx: &str,
                exact: i128,
                wrapped: $t,
                checked: Option<N>,
                wrapping: N,
                saturating: N,
                overflowing: (N, bool),
            ) {
                let wrapped = N::new(wrapped);
                let expected_checked = if fits(exact) { Some(wrapped) } else { None };
                assert_eq!(checked, expected_checked, "checked {ctx}");
                assert_eq!(wrapping, wrapped, "wrapping {ctx}");
                assert_eq!(saturating, N::new(exact.clamp(LO, HI) as $t), "saturating {ctx}");
                assert_eq!(overflowing, (wrapped, !fits(exact)), "overflowing {ctx}");
            }

            #[test]
            fn test_add_sub_mul_match_exact_arithmetic() {
                for (a, b) in pairs($seed) {
                    let (x, y) = (N::new(a), N::new(b));
                    let (wa, wb) = (a as i128, b as i128);

                    let sum = wa + wb;
                    assert_policies(
                        &format!("{a} + {b}"),
                        sum,
                        sum as $t,
                        x.checked_add(y),
                        x.wrapping_add(y),
                        x.saturating_add(y),
                        x.overflowing_add(y),
                    );
                    if fits(sum) {
                        assert_eq!(x + y, N::new(sum as $t));
                    }

                    let difference = wa - wb;
                    assert_policies(
                        &format!("{a} - {b}"),
                        difference,
                        difference as $t,
                        x.checked_sub(y),
                        x.wrapping_sub(y),
                        x.saturating_sub(y),
                        x.overflowing_sub(y),
                    );
                    if fits(difference) {
                        assert_eq!(x - y, N::new(difference as $t));
                    }

                    // u64 products can exceed i128; saturating keeps the sign.
                    let product = wa.saturating_mul(wb);
                    assert_policies(
                        &format!("{a} * {b}"),
                        product,
                        wa.wrapping_mul(wb) as $t,
                        x.checked_mul(y),
                        x.wrapping_mul(y),
                        x.saturating_mul(y),
                        x.overflowing_mul(y),
                    );
                    if fits(product) {
                        assert_eq!(x * y, N::new(product as $t));
                    }
                }
            }

            #[test]
            fn test_neg_matches_exact_arithmetic() {
                for (a, _) in pairs($seed ^ 1) {
                    let x = N::new(a);
                    let negated = -(a as i128);
                    assert_policies(
                        &format!("-{a}"),
                        negated,
                        negated as $t,
                        x.checked_neg(),
                        x.wrapping_neg(),
                        x.saturating_neg(),
                        x.overflowing_neg(),
                    );
                    if fits(negated) {
                        assert_eq!(-x, N::new(negated as $t));
                    }
                }
            }

            #[test]
            fn test_division_modes_match_exact_arithmetic() {
                for (a, b) in pairs($seed ^ 2) {
                    if b == 0 {
                        continue;
                    }
                    let (x, y) = (N::new(a), N::new(b));
                    let (wa, wb) = (a as i128, b as i128);

                    for mode in MODES {
                        let exact = exact_div(wa, wb, mode);
                        let (checked, wrapping, saturating, overflowing) = match mode {
                            Mode::Down => (
                                x.checked_div_down(y),
                                x.wrapping_div_down(y),
                                x.saturating_div_down(y),
                                x.overflowing_div_down(y),
                            ),
                            Mode::Floor => (
                                x.checked_div_floor(y),
                                x.wrapping_div_floor(y),
                                x.saturating_div_floor(y),
                                x.overflowing_div_floor(y),
                            ),
                            Mode::Ceil => (
                                x.checked_div_ceil(y),
                                x.wrapping_div_ceil(y),
                                x.saturating_div_ceil(y),
                                x.overflowing_div_ceil(y),
                            ),
                            Mode::Euclid => (
                                x.checked_div_euclid(y),
                                x.wrapping_div_euclid(y),
                                x.saturating_div_euclid(y),
                                x.overflowing_div_euclid(y),
                            ),
                        };
                        assert_policies(
                            &format!("{a} / {b} ({mode:?})"),
                            exact,
                            exact as $t,
                            checked,
                            wrapping,
                            saturating,
                            overflowing,
                        );
                    }

                    assert_eq!(x.checked_div(y), x.checked_div_down(y));
                    assert_eq!(x.checked_div_up(y), x.checked_div_ceil(y));
                    assert_eq!(x.wrapping_div_up(y), x.wrapping_div_ceil(y));
                    assert_eq!(x.saturating_div_up(y), x.saturating_div_ceil(y));
                    assert_eq!(x.overflowing_div_up(y), x.overflowing_div_ceil(y));
                }
            }

            #[test]
            fn test_remainders_satisfy_division_identities() {
                for (a, b) in pairs($seed ^ 3) {
                    if b == 0 {
                        continue;
                    }
                    let (x, y) = (N::new(a), N::new(b));
                    let (wa, wb) = (a as i128, b as i128);

                    let r = wa % wb;
                    assert_eq!(x.checked_rem(y), Some(N::new(r as $t)), "{a} % {b}");
                    assert_eq!(x.wrapping_rem(y), N::new(r as $t));
                    assert_eq!(x.saturating_rem(y), N::new(r as $t));
                    assert_eq!(x.overflowing_rem(y), (N::new(r as $t), false));
                    assert_eq!(x % y, N::new(r as $t));
                    assert!(r == 0 || (r < 0) == (wa < 0), "remainder takes the dividend's sign");
                    assert_eq!(exact_div(wa, wb, Mode::Down) * wb + r, wa);

                    let re = wa.rem_euclid(wb);
                    assert_eq!(x.checked_rem_euclid(y), Some(N::new(re as $t)), "{a} rem_euclid {b}");
                    assert_eq!(x.rem_euclid(y), N::new(re as $t));
                    assert!((0..wb.abs()).contains(&re));
                    assert_eq!(exact_div(wa, wb, Mode::Euclid) * wb + re, wa);

                    let floor_r = wa - exact_div(wa, wb, Mode::Floor) * wb;
                    assert!(floor_r == 0 || (floor_r < 0) == (wb < 0), "floor remainder takes the divisor's sign");
                    let ceil_r = wa - exact_div(wa, wb, Mode::Ceil) * wb;
                    assert!(ceil_r == 0 || (ceil_r < 0) != (wb < 0), "ceil remainder opposes the divisor's sign");
                }
            }

            #[test]
            fn test_zero_divisor_is_none_under_checked() {
                let mut rng = StdRng::seed_from_u64($seed ^ 4);
                for _ in 0..64 {
                    let x = N::new(sample(&mut rng));
                    assert_eq!(x.checked_div(N::ZERO), None);
                    assert_eq!(x.checked_div_down(N::ZERO), None);
                    assert_eq!(x.checked_div_up(N::ZERO), None);
                    assert_eq!(x.checked_div_floor(N::ZERO), None);
                    assert_eq!(x.checked_div_ceil(N::ZERO), None);
                    assert_eq!(x.checked_div_euclid(N::ZERO), None);
                    assert_eq!(x.checked_rem(N::ZERO), None);
                    assert_eq!(x.checked_rem_euclid(N::ZERO), None);
                }
            }

            #[test]
            fn test_pow_matches_native() {
                let mut rng = StdRng::seed_from_u64($seed ^ 5);
                for _ in 0..ITERATIONS {
                    let base = sample(&mut rng);
                    let exp = rng.random_range(0_u32..70);
                    let x = N::new(base);
                    assert_eq!(x.checked_pow(exp), base.checked_pow(exp).map(N::new), "{base}^{exp}");
                    assert_eq!(x.wrapping_pow(exp), N::new(base.wrapping_pow(exp)));
                    assert_eq!(x.saturating_pow(exp), N::new(base.saturating_pow(exp)));
                    let (v, o) = base.overflowing_pow(exp);
                    assert_eq!(x.overflowing_pow(exp), (N::new(v), o));
                }
            }

            #[test]
            fn test_casts_and_ordering() {
                for (a, b) in pairs($seed ^ 6) {
                    let (x, y) = (N::new(a), N::new(b));
                    assert_eq!(x.cast_unsigned().cast_signed().cast_unsigned(), x.cast_unsigned());
                    assert_eq!(x.cast_signed().cast_unsigned(), x.cast_unsigned());
                    assert_eq!(x.cmp(&y), a.cmp(&b));

                    let wa = a as i128;
                    let narrow = (-32768..=32767).contains(&wa);
                    assert_eq!(x.checked_cast::<i16>().map(|v| v.get() as i128), narrow.then_some(wa));
                    assert_eq!(x.wrapping_cast::<i16>().get(), a as i16);
                    assert_eq!(x.saturating_cast::<i16>().get() as i128, wa.clamp(-32768, 32767));
                    assert_eq!(x.overflowing_cast::<i16>(), (Integer::new(a as i16), !narrow));

                    assert_eq!(x.to_string().parse::<N>(), Ok(x));
                    let hex = if wa < 0 {
                        format!("-{:x}", wa.unsigned_abs())
                    } else {
                        format!("{wa:x}")
                    };
                    assert_eq!(N::from_str_radix(&hex, 16), Ok(x));
                }
            }
        }
    };
}

reference_properties!(i8_reference, i8, 0x8);
reference_properties!(i16_reference, i16, 0x16);
reference_properties!(i32_reference, i32, 0x32);
reference_properties!(i64_reference, i64, 0x64);
reference_properties!(u8_reference, u8, 0x108);
reference_properties!(u16_reference, u16, 0x116);
reference_properties!(u32_reference, u32, 0x132);
reference_properties!(u64_reference, u64, 0x164);

macro_rules! mixed_sign_properties {
    ($name:ident, $s:ty, $u:ty, $seed:expr) => {
        mod $name {
            use super::*;

            type S = Integer<$s>;
            type U = Integer<$u>;

            const S_LO: i128 = <$s>::MIN as i128;
            const S_HI: i128 = <$s>::MAX as i128;
            const U_HI: i128 = <$u>::MAX as i128;

            #[test]
            fn test_signed_with_unsigned_operand() {
                let mut rng = StdRng::seed_from_u64($seed);
                for _ in 0..ITERATIONS {
                    let (a, b): ($s, $u) = (rng.random(), rng.random());
                    let (x, y) = (S::new(a), U::new(b));

                    for (exact, checked, wrapping, saturating, overflowing) in [
                        (
                            a as i128 + b as i128,
                            x.checked_add_unsigned(y),
                            x.wrapping_add_unsigned(y),
                            x.saturating_add_unsigned(y),
                            x.overflowing_add_unsigned(y),
                        ),
                        (
                            a as i128 - b as i128,
                            x.checked_sub_unsigned(y),
                            x.wrapping_sub_unsigned(y),
                            x.saturating_sub_unsigned(y),
                            x.overflowing_sub_unsigned(y),
                        ),
                    ] {
                        let fits = (S_LO..=S_HI).contains(&exact);
                        let wrapped = S::new(exact as $s);
                        assert_eq!(checked, fits.then_some(wrapped), "{a} with {b}");
                        assert_eq!(wrapping, wrapped);
                        assert_eq!(saturating, S::new(exact.clamp(S_LO, S_HI) as $s));
                        assert_eq!(overflowing, (wrapped, !fits));
                    }
                }
            }

            #[test]
            fn test_unsigned_with_signed_operand() {
                let mut rng = StdRng::seed_from_u64($seed ^ 1);
                for _ in 0..ITERATIONS {
                    let (a, b): ($u, $s) = (rng.random(), rng.random());
                    let (x, y) = (U::new(a), S::new(b));
                    let exact = a as i128 + b as i128;
                    let fits = (0..=U_HI).contains(&exact);
                    let wrapped = U::new(exact as $u);
                    assert_eq!(x.checked_add_signed(y), fits.then_some(wrapped), "{a} + {b}");
                    assert_eq!(x.wrapping_add_signed(y), wrapped);
                    assert_eq!(x.saturating_add_signed(y), U::new(exact.clamp(0, U_HI) as $u));
                    assert_eq!(x.overflowing_add_signed(y), (wrapped, !fits));
                }
            }

            #[test]
            fn test_abs_and_sign() {
                let mut rng = StdRng::seed_from_u64($seed ^ 2);
                for _ in 0..ITERATIONS {
                    let a: $s = rng.random();
                    let x = S::new(a);
                    let exact = (a as i128).abs();
                    let fits = exact <= S_HI;
                    assert_eq!(x.checked_abs(), fits.then(|| S::new(exact as $s)));
                    assert_eq!(x.saturating_abs(), S::new(exact.min(S_HI) as $s));
                    assert_eq!(x.overflowing_abs(), (S::new(exact as $s), !fits));
                    assert_eq!(x.unsigned_abs(), U::new(exact as $u));
                    assert_eq!(x.signum().get() as i128, (a as i128).signum());
                    assert_eq!(x.is_negative(), a < 0);
                    assert_eq!(x.is_positive(), a > 0);
                }
                assert_eq!(S::MIN.overflowing_abs(), (S::MIN, true));
            }
        }
    };
}

mixed_sign_properties!(mixed_8, i8, u8, 0xA8);
mixed_sign_properties!(mixed_16, i16, u16, 0xA16);
mixed_sign_properties!(mixed_32, i32, u32, 0xA32);
mixed_sign_properties!(mixed_64, i64, u64, 0xA64);

// `$draw` is a type rand can sample; pointer-sized values are drawn through it.
macro_rules! native_properties {
    ($name:ident, $t:ty, $draw:ty, $seed:expr) => {
        mod $name {
            use super::*;

            type N = Integer<$t>;

            fn sample(rng: &mut StdRng) -> $t {
                match rng.random_range(0..4) {
                    0 => [<$t>::MIN, <$t>::MAX, 0, 1, <$t>::MAX / 2][rng.random_range(0..5)],
                    1 => rng.random_range(0_u8..16) as $t,
                    _ => rng.random::<$draw>() as $t,
                }
            }

            #[test]
            fn test_policies_agree_with_native() {
                let mut rng = StdRng::seed_from_u64($seed);
                for _ in 0..ITERATIONS {
                    let (a, b) = (sample(&mut rng), sample(&mut rng));
                    let (x, y) = (N::new(a), N::new(b));

                    assert_eq!(x.checked_add(y), a.checked_add(b).map(N::new));
                    assert_eq!(x.checked_sub(y), a.checked_sub(b).map(N::new));
                    assert_eq!(x.checked_mul(y), a.checked_mul(b).map(N::new));
                    assert_eq!(x.saturating_add(y), N::new(a.saturating_add(b)));
                    assert_eq!(x.saturating_sub(y), N::new(a.saturating_sub(b)));
                    assert_eq!(x.saturating_mul(y), N::new(a.saturating_mul(b)));
                    assert_eq!(x.wrapping_mul(y), N::new(a.wrapping_mul(b)));

                    let (v, o) = a.overflowing_mul(b);
                    assert_eq!(x.overflowing_mul(y), (N::new(v), o));
                    assert_eq!(x.checked_mul(y).is_none(), o);

                    assert_eq!(x.checked_div(y), a.checked_div(b).map(N::new));
                    assert_eq!(x.checked_rem(y), a.checked_rem(b).map(N::new).or_else(|| {
                        // Native reports `MIN % -1` as overflow; it is exactly zero.
                        (b != 0).then_some(N::ZERO)
                    }));
                    assert_eq!(x.checked_div_euclid(y), a.checked_div_euclid(b).map(N::new));

                    if b != 0 {
                        let (q, r) = (x.wrapping_div_floor(y), x.wrapping_rem(y));
                        let floored = if r.is_zero() || (r < N::ZERO) == (y < N::ZERO) {
                            x.wrapping_div(y)
                        } else {
                            x.wrapping_div(y).wrapping_sub(N::ONE)
                        };
                        assert_eq!(q, floored);
                        assert_eq!(x.wrapping_div_up(y), x.wrapping_div_ceil(y));
                    }
                }
            }
        }
    };
}

native_properties!(i128_native, i128, i128, 0x128);
native_properties!(u128_native, u128, u128, 0x1128);
native_properties!(isize_native, isize, i64, 0x5128);
native_properties!(usize_native, usize, u64, 0x6128);
