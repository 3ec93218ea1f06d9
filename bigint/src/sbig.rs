//! Sign-magnitude arbitrary-precision signed integer.

use crate::error::{Error, Result};
use crate::ubig::UBigInt;
use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

/// An arbitrary-precision signed integer: a sign bit plus a [`UBigInt`]
/// magnitude. Zero is always canonicalized to positive.
///
/// Division and remainder use C99 truncated-division semantics (the
/// quotient rounds toward zero, and the remainder takes the sign of the
/// dividend), matching the original's `%` behavior rather than Euclidean
/// division.
#[derive(Clone, Eq)]
pub struct SBigInt {
    positive: bool,
    magnitude: UBigInt,
}

impl Default for SBigInt {
    fn default() -> Self {
        SBigInt {
            positive: true,
            magnitude: UBigInt::new(),
        }
    }
}

impl SBigInt {
    /// A new zero value.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// `true` if this value is strictly negative.
    pub fn is_negative(&self) -> bool {
        !self.positive && !self.is_zero()
    }

    /// The magnitude, discarding sign.
    pub fn magnitude(&self) -> &UBigInt {
        &self.magnitude
    }

    /// Builds a value from a sign and magnitude. Zero magnitudes are
    /// canonicalized to positive regardless of `positive`.
    pub fn from_parts(positive: bool, magnitude: UBigInt) -> Self {
        let positive = positive || magnitude.is_zero();
        SBigInt { positive, magnitude }
    }

    /// Builds a value from a native signed integer.
    pub fn from_i64(value: i64) -> Self {
        let positive = value >= 0;
        let magnitude = UBigInt::from_u64(value.unsigned_abs());
        SBigInt { positive, magnitude }
    }

    /// Parses `number` (an optional leading `-` or `+` followed by digits in
    /// `base`, or autobase-detected digits) into this value.
    pub fn set(&mut self, number: &str, autobase: bool) -> Result<()> {
        let (positive, rest) = match number.as_bytes().first() {
            Some(b'-') => (false, &number[1..]),
            Some(b'+') => (true, &number[1..]),
            _ => (true, number),
        };
        let mut magnitude = UBigInt::new();
        magnitude.set_base(self.magnitude.base())?;
        magnitude.set(rest, autobase)?;
        self.positive = positive || magnitude.is_zero();
        self.magnitude = magnitude;
        Ok(())
    }

    /// Formats this value in `base` (default base if `None`), with a
    /// leading `-` if negative.
    pub fn to_string_radix(&self, base: Option<u32>) -> Result<String> {
        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&self.magnitude.to_string_radix(base)?);
        Ok(out)
    }

    /// Unary negation.
    pub fn neg(&self) -> SBigInt {
        SBigInt::from_parts(!self.positive, self.magnitude.clone())
    }

    /// Absolute value.
    pub fn abs(&self) -> SBigInt {
        SBigInt::from_parts(true, self.magnitude.clone())
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &SBigInt) -> SBigInt {
        if self.positive == rhs.positive {
            SBigInt::from_parts(self.positive, self.magnitude.add(&rhs.magnitude))
        } else if self.magnitude >= rhs.magnitude {
            SBigInt::from_parts(
                self.positive,
                self.magnitude
                    .sub(&rhs.magnitude)
                    .expect("self.magnitude >= rhs.magnitude"),
            )
        } else {
            SBigInt::from_parts(
                rhs.positive,
                rhs.magnitude
                    .sub(&self.magnitude)
                    .expect("rhs.magnitude > self.magnitude"),
            )
        }
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &SBigInt) -> SBigInt {
        self.add(&rhs.neg())
    }

    /// `self * rhs`.
    pub fn mul(&self, rhs: &SBigInt) -> SBigInt {
        SBigInt::from_parts(self.positive == rhs.positive, self.magnitude.mul(&rhs.magnitude))
    }

    /// `(quotient, remainder)` under truncated division: the quotient
    /// rounds toward zero and the remainder takes the sign of `self`
    /// (C99 `/`/`%` semantics), e.g. `-7 / 2 == -3`, `-7 % 2 == -1`.
    pub fn div_rem(&self, rhs: &SBigInt) -> Result<(SBigInt, SBigInt)> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        let (q, r) = self.magnitude.div_rem(&rhs.magnitude)?;
        let quotient = SBigInt::from_parts(self.positive == rhs.positive, q);
        let remainder = SBigInt::from_parts(self.positive, r);
        Ok((quotient, remainder))
    }

    /// `self / rhs`.
    pub fn div(&self, rhs: &SBigInt) -> Result<SBigInt> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// `self % rhs`.
    pub fn rem(&self, rhs: &SBigInt) -> Result<SBigInt> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    /// Binary exponentiation. `exp` must be non-negative.
    pub fn pow(&self, exp: &SBigInt) -> Result<SBigInt> {
        if exp.is_negative() {
            return Err(Error::Negative);
        }
        let positive = self.positive || !exp.magnitude.is_odd();
        Ok(SBigInt::from_parts(positive, self.magnitude.pow(&exp.magnitude)))
    }

    /// Three-way comparison: `-1`, `0`, or `1`.
    pub fn compare(&self, rhs: &SBigInt) -> i32 {
        match self.cmp(rhs) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// `self + rhs`, treating `rhs` as an implicitly non-negative magnitude.
    pub fn add_u(&self, rhs: &UBigInt) -> SBigInt {
        if self.positive {
            SBigInt::from_parts(true, self.magnitude.add(rhs))
        } else if rhs >= &self.magnitude {
            SBigInt::from_parts(true, rhs.sub(&self.magnitude).expect("rhs >= self.magnitude"))
        } else {
            SBigInt::from_parts(
                false,
                self.magnitude.sub(rhs).expect("self.magnitude > rhs"),
            )
        }
    }

    /// `self - rhs`, treating `rhs` as an implicitly non-negative magnitude.
    pub fn sub_u(&self, rhs: &UBigInt) -> SBigInt {
        if !self.positive {
            SBigInt::from_parts(false, self.magnitude.add(rhs))
        } else if self.magnitude >= *rhs {
            SBigInt::from_parts(true, self.magnitude.sub(rhs).expect("self.magnitude >= rhs"))
        } else {
            SBigInt::from_parts(false, rhs.sub(&self.magnitude).expect("rhs > self.magnitude"))
        }
    }

    /// `self * rhs`, treating `rhs` as an implicitly non-negative magnitude.
    pub fn mul_u(&self, rhs: &UBigInt) -> SBigInt {
        SBigInt::from_parts(self.positive, self.magnitude.mul(rhs))
    }

    /// `(quotient, remainder)` of `self` divided by the implicitly
    /// non-negative magnitude `rhs`, under the same truncated-division
    /// semantics as [`SBigInt::div_rem`].
    pub fn div_rem_u(&self, rhs: &UBigInt) -> Result<(SBigInt, SBigInt)> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        let (q, r) = self.magnitude.div_rem(rhs)?;
        Ok((
            SBigInt::from_parts(self.positive, q),
            SBigInt::from_parts(self.positive, r),
        ))
    }

    /// `self / rhs`, treating `rhs` as an implicitly non-negative magnitude.
    pub fn div_u(&self, rhs: &UBigInt) -> Result<SBigInt> {
        self.div_rem_u(rhs).map(|(q, _)| q)
    }

    /// `self % rhs`, treating `rhs` as an implicitly non-negative magnitude.
    pub fn rem_u(&self, rhs: &UBigInt) -> Result<SBigInt> {
        self.div_rem_u(rhs).map(|(_, r)| r)
    }

    /// Three-way comparison against an implicitly non-negative magnitude.
    pub fn compare_u(&self, rhs: &UBigInt) -> i32 {
        if !self.positive {
            -1
        } else {
            match self.magnitude.cmp(rhs) {
                Ordering::Less => -1,
                Ordering::Equal => 0,
                Ordering::Greater => 1,
            }
        }
    }
}

impl PartialEq for SBigInt {
    fn eq(&self, other: &Self) -> bool {
        self.is_zero() && other.is_zero()
            || (self.positive == other.positive && self.magnitude == other.magnitude)
    }
}

impl PartialOrd for SBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.positive, other.positive) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.magnitude.cmp(&other.magnitude),
            (false, false) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl fmt::Display for SBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .to_string_radix(None)
            .expect("self.magnitude.base() is validated by set_base on construction");
        f.write_str(&s)
    }
}

impl fmt::Debug for SBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self
            .to_string_radix(Some(10))
            .expect("base 10 is always in range");
        f.debug_struct("SBigInt").field("value", &value).finish()
    }
}

impl FromStr for SBigInt {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let mut value = SBigInt::new();
        value.set(s, false)?;
        Ok(value)
    }
}

impl From<i64> for SBigInt {
    fn from(value: i64) -> Self {
        SBigInt::from_i64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sb(s: &str) -> SBigInt {
        s.parse().unwrap()
    }

    #[test]
    fn parse_signs() {
        assert!(sb("-5").is_negative());
        assert!(!sb("+5").is_negative());
        assert!(!sb("0").is_negative());
        assert!(!sb("-0").is_negative());
    }

    #[test]
    fn add_mixed_signs() {
        assert_eq!(sb("-5").add(&sb("3")), sb("-2"));
        assert_eq!(sb("5").add(&sb("-3")), sb("2"));
        assert_eq!(sb("-5").add(&sb("5")), sb("0"));
    }

    #[test]
    fn sub_and_neg() {
        assert_eq!(sb("5").sub(&sb("8")), sb("-3"));
        assert_eq!(sb("5").neg(), sb("-5"));
        assert_eq!(sb("-5").abs(), sb("5"));
    }

    #[test]
    fn mul_signs() {
        assert_eq!(sb("-3").mul(&sb("4")), sb("-12"));
        assert_eq!(sb("-3").mul(&sb("-4")), sb("12"));
    }

    #[test]
    fn truncated_division_semantics() {
        let (q, r) = sb("-7").div_rem(&sb("2")).unwrap();
        assert_eq!(q, sb("-3"));
        assert_eq!(r, sb("-1"));

        let (q, r) = sb("7").div_rem(&sb("-2")).unwrap();
        assert_eq!(q, sb("-3"));
        assert_eq!(r, sb("1"));
    }

    #[test]
    fn div_by_zero_fails() {
        assert_eq!(sb("5").div(&sb("0")), Err(Error::DivByZero));
    }

    #[test]
    fn pow_sign_rules() {
        assert_eq!(sb("-2").pow(&sb("2")).unwrap(), sb("4"));
        assert_eq!(sb("-2").pow(&sb("3")).unwrap(), sb("-8"));
        assert_eq!(sb("-2").pow(&sb("-1")), Err(Error::Negative));
    }

    #[test]
    fn ordering_across_signs() {
        assert!(sb("-1") < sb("1"));
        assert!(sb("-5") < sb("-1"));
        assert!(sb("5") > sb("1"));
    }

    fn ub(s: &str) -> UBigInt {
        s.parse().unwrap()
    }

    #[test]
    fn mixed_add_sub_against_ubigint() {
        assert_eq!(sb("-5").add_u(&ub("3")), sb("-2"));
        assert_eq!(sb("5").add_u(&ub("3")), sb("8"));
        assert_eq!(sb("-5").sub_u(&ub("3")), sb("-8"));
        assert_eq!(sb("5").sub_u(&ub("8")), sb("-3"));
    }

    #[test]
    fn mixed_mul_against_ubigint() {
        assert_eq!(sb("-3").mul_u(&ub("4")), sb("-12"));
        assert_eq!(sb("3").mul_u(&ub("4")), sb("12"));
    }

    #[test]
    fn mixed_division_against_ubigint() {
        let (q, r) = sb("-7").div_rem_u(&ub("2")).unwrap();
        assert_eq!(q, sb("-3"));
        assert_eq!(r, sb("-1"));
        assert_eq!(sb("5").div_u(&ub("0")), Err(Error::DivByZero));
    }

    #[test]
    fn mixed_compare_against_ubigint() {
        assert_eq!(sb("-5").compare_u(&ub("3")), -1);
        assert_eq!(sb("5").compare_u(&ub("5")), 0);
        assert_eq!(sb("5").compare_u(&ub("3")), 1);
    }
}
