//! Tolerances, rational helpers, and integer root extraction

use super::{NNRat, Nat, Rat};

/// Absolute tolerance for all numerical coincidence checks.
pub const EPS: f64 = 1e-7;

/// Relative tolerance; also pads the canonical side ordering of triangles.
pub const REL_TOL: f64 = 1e-3;

/// Approximate equality with both absolute and relative tolerance.
pub fn approx_eq(a: f64, b: f64) -> bool {
    let d = (a - b).abs();
    d < EPS || d < REL_TOL * a.abs().max(b.abs())
}

/// Approximate equality of a float against an exact rational.
pub fn approx_eq_rat(a: f64, b: &Rat) -> bool {
    approx_eq(a, rat_to_f64(b))
}

/// Approximate equality of a float against an exact non-negative rational.
pub fn approx_eq_nnrat(a: f64, b: &NNRat) -> bool {
    approx_eq(a, nnrat_to_f64(b))
}

pub fn rat_to_f64(q: &Rat) -> f64 {
    *q.numer() as f64 / *q.denom() as f64
}

pub fn nnrat_to_f64(q: &NNRat) -> f64 {
    *q.numer() as f64 / *q.denom() as f64
}

pub fn rat_to_string(q: &Rat) -> String {
    format!("{}/{}", q.numer(), q.denom())
}

pub fn nnrat_to_string(q: &NNRat) -> String {
    format!("{}/{}", q.numer(), q.denom())
}

/// Conversion to the unsigned carrier; the caller guarantees `q >= 0`.
pub fn rat_to_nnrat(q: &Rat) -> NNRat {
    debug_assert!(*q.numer() >= 0);
    NNRat::new(*q.numer() as Nat, *q.denom() as Nat)
}

pub fn nnrat_to_rat(q: &NNRat) -> Rat {
    Rat::new(*q.numer() as i64, *q.denom() as i64)
}

/// Well-known values of `sin²(rπ)` for rational `r`.
pub fn known_sin_squares() -> [(Rat, NNRat); 4] {
    [
        (Rat::new(1, 6), NNRat::new(1, 4)),
        (Rat::new(1, 4), NNRat::new(1, 2)),
        (Rat::new(1, 3), NNRat::new(3, 4)),
        (Rat::new(1, 2), NNRat::from_integer(1)),
    ]
}

/// Integer `n`-th root of `a`, if `a` is a perfect `n`-th power.
///
/// Newton-Raphson with an initial guess from the bit width of `a`.
pub fn integer_nth_root(a: Nat, n: u32) -> Option<Nat> {
    if n == 0 {
        return Some(1);
    }
    if n == 1 || a <= 1 {
        return Some(a);
    }
    let pow2 = (u64::BITS - a.leading_zeros()).div_ceil(n);
    let mut guess: Nat = 1 << pow2;
    loop {
        let next = (a / upower(guess, n - 1) + Nat::from(n - 1) * guess) / Nat::from(n);
        if next >= guess {
            break;
        }
        guess = next;
    }
    if upower(guess, n) == a {
        Some(guess)
    } else {
        None
    }
}

/// Integer square root, if the argument is a perfect square.
pub fn integer_sqrt(n: Nat) -> Option<Nat> {
    integer_nth_root(n, 2)
}

/// Rational `n`-th root, if numerator and denominator are perfect powers.
pub fn rat_nth_root(r: &NNRat, n: u32) -> Option<NNRat> {
    let num = integer_nth_root(*r.numer(), n)?;
    let den = integer_nth_root(*r.denom(), n)?;
    Some(NNRat::new(num, den))
}

/// Rational square root, if one exists.
pub fn rat_sqrt(r: &NNRat) -> Option<NNRat> {
    rat_nth_root(r, 2)
}

fn upower(base: Nat, exp: u32) -> Nat {
    let mut res: Nat = 1;
    for _ in 0..exp {
        res *= base;
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_absolute() {
        assert!(approx_eq(1.0, 1.0 + 1e-8));
        assert!(!approx_eq(1e-3, 2e-3));
    }

    #[test]
    fn test_approx_eq_relative() {
        // Large magnitudes fall back to the relative tolerance.
        assert!(approx_eq(1e6, 1e6 + 10.0));
        assert!(!approx_eq(1e6, 1.01e6));
    }

    #[test]
    fn test_integer_sqrt() {
        assert_eq!(integer_sqrt(0), Some(0));
        assert_eq!(integer_sqrt(1), Some(1));
        assert_eq!(integer_sqrt(144), Some(12));
        assert_eq!(integer_sqrt(145), None);
        assert_eq!(integer_sqrt(1 << 62), Some(1 << 31));
    }

    #[test]
    fn test_integer_nth_root() {
        assert_eq!(integer_nth_root(27, 3), Some(3));
        assert_eq!(integer_nth_root(28, 3), None);
        assert_eq!(integer_nth_root(1024, 10), Some(2));
    }

    #[test]
    fn test_rat_sqrt() {
        assert_eq!(
            rat_sqrt(&NNRat::new(9, 4)),
            Some(NNRat::new(3, 2))
        );
        assert_eq!(rat_sqrt(&NNRat::new(1, 2)), None);
    }

    #[test]
    fn test_known_sin_squares_are_numerically_right() {
        for (angle, sin_sq) in known_sin_squares() {
            let s = (rat_to_f64(&angle) * std::f64::consts::PI).sin();
            assert!(approx_eq(s * s, nnrat_to_f64(&sin_sq)));
        }
    }
}
