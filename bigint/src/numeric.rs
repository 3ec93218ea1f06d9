//! Free-standing numeric helpers shared by [`crate::UBigInt`], [`crate::SBigInt`],
//! and the `arb` crate's fraction reduction.
//!
//! Grounded on the original's small header-only numeric utilities
//! (`gcd.hxx`, `reduce.hxx`, `abs.hxx`), generalized from their `T: Ord +
//! Rem + Neg` template parameter to concrete operations on [`UBigInt`].

use crate::error::Result;
use crate::ubig::UBigInt;

/// Number of extra zero-digit groups [`UBigInt::root`] tries once the
/// radicand is exhausted and the remainder is still non-zero, matching the
/// original's hardcoded fractional-refinement depth.
pub const DEFAULT_ROOT_EXTRA_GROUPS: u32 = 10;

/// Greatest common divisor, via Euclid's algorithm.
pub fn gcd(n1: &UBigInt, n2: &UBigInt) -> UBigInt {
    let (mut a, mut b) = if n1 < n2 {
        (n2.clone(), n1.clone())
    } else {
        (n1.clone(), n2.clone())
    };
    while !b.is_zero() {
        let r = a.rem(&b).expect("b is non-zero by loop condition");
        a = b;
        b = r;
    }
    a
}

/// Reduces the fraction `p / q` in place by dividing both by their GCD.
/// `gcd(0, q) == q`, so a zero numerator collapses `q` to `1`.
pub fn reduce(p: &mut UBigInt, q: &mut UBigInt) -> Result<()> {
    let divisor = gcd(p, q);
    *p = p.div(&divisor)?;
    *q = q.div(&divisor)?;
    Ok(())
}

/// `floor(log_base(value))`: the number of digits `value` needs in `base`,
/// minus one. `value` must be non-zero.
pub fn log_base(value: &UBigInt, base: u32) -> Result<u64> {
    let mut count: u64 = 0;
    let mut v = value.clone();
    let base = UBigInt::from_u64(base as u64);
    while v >= base {
        v = v.div(&base)?;
        count += 1;
    }
    Ok(count)
}

/// Rational power: `base^(num/den)`, computed as the integer `den`-th root
/// of `base^num`. Used where the original composes `pow` and `root` to
/// evaluate fractional exponents (e.g. `Arb`'s base-conversion scaling).
pub fn rppower(base: &UBigInt, num: u64, den: u32) -> Result<UBigInt> {
    let raised = base.pow(&UBigInt::from_u64(num));
    let (root, _divisor, _remainder) = raised.root(den, DEFAULT_ROOT_EXTRA_GROUPS)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ub(s: &str) -> UBigInt {
        s.parse().unwrap()
    }

    #[test]
    fn gcd_basic() {
        assert_eq!(gcd(&ub("48"), &ub("18")), ub("6"));
        assert_eq!(gcd(&ub("17"), &ub("5")), ub("1"));
    }

    #[test]
    fn gcd_with_zero() {
        assert_eq!(gcd(&ub("0"), &ub("5")), ub("5"));
    }

    #[test]
    fn reduce_fraction() {
        let mut p = ub("48");
        let mut q = ub("18");
        reduce(&mut p, &mut q).unwrap();
        assert_eq!(p, ub("8"));
        assert_eq!(q, ub("3"));
    }

    #[test]
    fn reduce_zero_numerator_collapses_denominator_to_one() {
        let mut p = ub("0");
        let mut q = ub("18");
        reduce(&mut p, &mut q).unwrap();
        assert_eq!(p, ub("0"));
        assert_eq!(q, ub("1"));
    }

    #[test]
    fn log_base_counts_digits_minus_one() {
        assert_eq!(log_base(&ub("999"), 10).unwrap(), 2);
        assert_eq!(log_base(&ub("1000"), 10).unwrap(), 3);
        assert_eq!(log_base(&ub("1"), 10).unwrap(), 0);
    }

    #[test]
    fn rppower_square_root_of_square() {
        let r = rppower(&ub("5"), 2, 2).unwrap();
        assert_eq!(r, ub("5"));
    }
}
