//! Arbitrary-precision rational / fixed-point real number.

use crate::format;
use alloc::string::String;
use alloc::vec::Vec;
use bigint::numeric::reduce;
use bigint::{Error, Result, SBigInt, UBigInt};
use core::fmt;
use core::str::FromStr;

/// Number of fractional digits the default (blank-template) format shows
/// for a non-fixed-point value, since a rational like `1/3` has no
/// terminating expansion in any base. Fixed-point values instead show
/// exactly `point_pos` digits.
pub const DEFAULT_MAX_RADIX: u32 = 20;

/// An arbitrary-precision rational, or fixed-point real when `fixed` is
/// set.
///
/// `p / q` is the magnitude, `positive` the sign. Outside fixed-point mode
/// the fraction is kept fully reduced (`gcd(p, q) = 1`) after every
/// operation; in fixed-point mode `q` is instead forced back to `fixed_q`
/// after every operation, truncating `p` toward zero as needed. Zero is
/// always canonicalized to `positive = true`.
#[derive(Clone, Debug)]
pub struct Arb {
    pub(crate) positive: bool,
    pub(crate) p: UBigInt,
    pub(crate) q: UBigInt,
    pub(crate) fixed: bool,
    pub(crate) point_pos: u32,
    pub(crate) fixed_q: UBigInt,
    pub(crate) orig_base: u32,
}

impl Default for Arb {
    fn default() -> Self {
        Arb {
            positive: true,
            p: UBigInt::new(),
            q: UBigInt::from_u64(1),
            fixed: false,
            point_pos: 0,
            fixed_q: UBigInt::from_u64(1),
            orig_base: 10,
        }
    }
}

impl Arb {
    /// A new zero value, non-fixed, base 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new zero value in fixed-point mode with `point_pos` fractional
    /// digits in base 10 (`fixed_q = 10^point_pos`).
    pub fn with_point_pos(point_pos: u32) -> Self {
        let fixed_q = UBigInt::from_u64(10).pow(&UBigInt::from_u64(point_pos as u64));
        Arb {
            positive: true,
            p: UBigInt::new(),
            q: fixed_q.clone(),
            fixed: true,
            point_pos,
            fixed_q,
            orig_base: 10,
        }
    }

    /// Builds a value from a native signed integer.
    pub fn from_i64(value: i64) -> Self {
        let mut a = Arb::new();
        a.positive = value >= 0;
        a.p = UBigInt::from_u64(value.unsigned_abs());
        a
    }

    /// `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.p.is_zero()
    }

    /// `true` if this value is in fixed-point mode.
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// The reduced numerator magnitude.
    pub fn numerator(&self) -> &UBigInt {
        &self.p
    }

    /// The reduced denominator magnitude.
    pub fn denominator(&self) -> &UBigInt {
        &self.q
    }

    /// Parses a decimal/scientific literal:
    /// `[sign]? digits [. digits]? [(e|E) [sign]? digits]?`.
    ///
    /// State machine over three modes, `NUM`, `RAD` (after the radix point),
    /// and `EXP` (after `e`/`E`): a second `.`, a `.` inside `EXP`, a
    /// repeated exponent marker, or a sign appearing anywhere but at the
    /// very start of `NUM` or `EXP` all raise [`Error::BadFormat`].
    ///
    /// # Examples
    ///
    /// ```
    /// use arb::Arb;
    /// let mut a = Arb::new();
    /// a.set("1.5e1").unwrap();
    /// assert_eq!(a.to_string(), "15");
    /// ```
    pub fn set(&mut self, text: &str) -> Result<()> {
        #[derive(PartialEq)]
        enum Mode {
            Num,
            Rad,
            Exp,
        }

        let bytes = text.as_bytes();
        let mut mode = Mode::Num;
        let mut sign_num = true;
        let mut sign_exp = true;
        let mut seen_digit_num = false;
        let mut seen_digit_exp = false;
        let mut num_part: Vec<u8> = Vec::new();
        let mut rad_part: Vec<u8> = Vec::new();
        let mut exp_part: Vec<u8> = Vec::new();

        for (i, &byte) in bytes.iter().enumerate() {
            match byte {
                b'.' => {
                    if mode != Mode::Num {
                        return Err(Error::bad_format("unexpected '.'", i));
                    }
                    mode = Mode::Rad;
                }
                b'e' | b'E' => {
                    if mode == Mode::Exp {
                        return Err(Error::bad_format("repeated exponent marker", i));
                    }
                    mode = Mode::Exp;
                }
                b'+' | b'-' => {
                    let at_start = match mode {
                        Mode::Num => !seen_digit_num,
                        Mode::Exp => !seen_digit_exp,
                        Mode::Rad => false,
                    };
                    if !at_start {
                        return Err(Error::bad_format("sign not at start of number", i));
                    }
                    match mode {
                        Mode::Num => sign_num = byte == b'+',
                        Mode::Exp => sign_exp = byte == b'+',
                        Mode::Rad => unreachable!(),
                    }
                }
                b'0'..=b'9' => {
                    let digit = byte - b'0';
                    match mode {
                        Mode::Num => {
                            seen_digit_num = true;
                            num_part.push(digit);
                        }
                        Mode::Rad => rad_part.push(digit),
                        Mode::Exp => {
                            seen_digit_exp = true;
                            exp_part.push(digit);
                        }
                    }
                }
                _ => return Err(Error::bad_format("unrecognized character", i)),
            }
        }

        let lead = num_part.iter().take_while(|&&d| d == 0).count();
        num_part.drain(0..lead);
        let trail = rad_part.iter().rev().take_while(|&&d| d == 0).count();
        rad_part.truncate(rad_part.len() - trail);
        let lead = exp_part.iter().take_while(|&&d| d == 0).count();
        exp_part.drain(0..lead);

        let n_radix = rad_part.len() as u64;
        let mut num_digits = num_part;
        num_digits.extend_from_slice(&rad_part);

        let mut p = digits_to_ubig(&num_digits)?;
        let mut q = UBigInt::from_u64(1);

        let e_magnitude = digits_to_ubig(&exp_part)?;
        let e = SBigInt::from_parts(sign_exp, e_magnitude);
        let net_exp = e.sub(&SBigInt::from_parts(true, UBigInt::from_u64(n_radix)));

        if net_exp.is_negative() {
            q = UBigInt::from_u64(10).pow(net_exp.magnitude());
        } else if !net_exp.is_zero() {
            p = p.mul(&UBigInt::from_u64(10).pow(net_exp.magnitude()));
        }

        self.positive = sign_num || p.is_zero();
        self.p = p;
        self.q = q;
        self.reduce()
    }

    fn reduce(&mut self) -> Result<()> {
        if !self.fixed {
            reduce(&mut self.p, &mut self.q)?;
        } else if self.q != self.fixed_q {
            self.p = self.p.mul(&self.fixed_q).div(&self.q)?;
            self.q = self.fixed_q.clone();
        }
        if self.p.is_zero() {
            self.positive = true;
        }
        Ok(())
    }

    /// Unary negation.
    pub fn neg(&self) -> Arb {
        let mut out = self.clone();
        if !out.is_zero() {
            out.positive = !out.positive;
        }
        out
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &Arb) -> Result<Arb> {
        let new_q = self.q.mul(&rhs.q);
        let term1 = SBigInt::from_parts(self.positive, self.p.mul(&rhs.q));
        let term2 = SBigInt::from_parts(rhs.positive, rhs.p.mul(&self.q));
        let sum = term1.add(&term2);

        let mut out = self.clone();
        out.positive = !sum.is_negative();
        out.p = sum.magnitude().clone();
        out.q = new_q;
        out.reduce()?;
        Ok(out)
    }

    /// `self - rhs`.
    pub fn sub(&self, rhs: &Arb) -> Result<Arb> {
        self.add(&rhs.neg())
    }

    /// `self * rhs`.
    pub fn mul(&self, rhs: &Arb) -> Result<Arb> {
        let mut out = self.clone();
        out.positive = self.positive == rhs.positive;
        out.p = self.p.mul(&rhs.p);
        out.q = self.q.mul(&rhs.q);
        out.reduce()?;
        Ok(out)
    }

    /// `self / rhs`. Fails with [`Error::DivByZero`] if `rhs` is zero.
    pub fn div(&self, rhs: &Arb) -> Result<Arb> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        let mut out = self.clone();
        out.positive = self.positive == rhs.positive;
        out.p = self.p.mul(&rhs.q);
        out.q = self.q.mul(&rhs.p);
        out.reduce()?;
        Ok(out)
    }

    /// Formats this value using a `%`-escape template; an empty template
    /// means the default decomposition (integer part, radix point, up to
    /// `max_radix` fractional digits in `orig_base`). See [`crate::format`]
    /// for the recognized codes.
    pub fn format(&self, template: &str) -> Result<String> {
        format::format(self, template)
    }

    pub(crate) fn max_radix(&self) -> u32 {
        if self.fixed {
            self.point_pos
        } else {
            DEFAULT_MAX_RADIX
        }
    }

    pub(crate) fn orig_base(&self) -> u32 {
        self.orig_base
    }
}

fn digits_to_ubig(digits: &[u8]) -> Result<UBigInt> {
    if digits.is_empty() {
        return Ok(UBigInt::new());
    }
    let mut s = String::with_capacity(digits.len());
    for &d in digits {
        s.push((b'0' + d) as char);
    }
    s.parse()
}

impl PartialEq for Arb {
    fn eq(&self, other: &Self) -> bool {
        self.is_zero() && other.is_zero()
            || (self.positive == other.positive && self.p == other.p && self.q == other.q)
    }
}

impl Eq for Arb {}

impl fmt::Display for Arb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format("").unwrap_or_default())
    }
}

impl FromStr for Arb {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let mut value = Arb::new();
        value.set(s)?;
        Ok(value)
    }
}

impl From<i64> for Arb {
    fn from(value: i64) -> Self {
        Arb::from_i64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arb(s: &str) -> Arb {
        s.parse().unwrap()
    }

    #[test]
    fn parse_simple_decimal() {
        let a = arb("1.5");
        assert_eq!(a.numerator(), &UBigInt::from_u64(3));
        assert_eq!(a.denominator(), &UBigInt::from_u64(2));
    }

    #[test]
    fn parse_scientific() {
        let a = arb("1.5e2");
        assert_eq!(a.to_string(), "150");
    }

    #[test]
    fn parse_negative_exponent() {
        let a = arb("15e-2");
        assert_eq!(a.numerator(), &UBigInt::from_u64(3));
        assert_eq!(a.denominator(), &UBigInt::from_u64(20));
    }

    #[test]
    fn parse_rejects_double_dot() {
        assert_eq!(
            Arb::from_str("1.2.3"),
            Err(Error::bad_format("unexpected '.'", 3))
        );
    }

    #[test]
    fn parse_rejects_misplaced_sign() {
        assert!(matches!(Arb::from_str("1-2"), Err(Error::BadFormat { .. })));
    }

    #[test]
    fn addition_reduces() {
        let sum = arb("1.5").add(&arb("2.25")).unwrap();
        assert_eq!(sum.to_string(), "3.75");
    }

    #[test]
    fn division_stays_reduced() {
        let r = arb("1").div(&arb("3")).unwrap();
        assert_eq!(r.numerator(), &UBigInt::from_u64(1));
        assert_eq!(r.denominator(), &UBigInt::from_u64(3));
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(arb("1").div(&arb("0")), Err(Error::DivByZero));
    }

    #[test]
    fn fixed_point_forces_denominator() {
        let mut a = Arb::with_point_pos(6);
        a.set("1").unwrap();
        let b = Arb::with_point_pos(6);
        let r = a.div(&{
            let mut b = b;
            b.set("3").unwrap();
            b
        }).unwrap();
        assert_eq!(r.denominator(), &UBigInt::from_u64(1_000_000));
        assert_eq!(r.numerator(), &UBigInt::from_u64(333_333));
    }

    #[test]
    fn zero_is_canonically_positive() {
        let a = arb("-0");
        assert!(!a.positive_is_negative());
    }

    impl Arb {
        fn positive_is_negative(&self) -> bool {
            !self.positive && !self.is_zero()
        }
    }

    #[test]
    fn algebraic_identities() {
        let a = arb("7.5");
        let b = arb("-3.25");
        let zero = Arb::new();
        assert_eq!(a.add(&zero).unwrap(), a);
        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(a.sub(&a).unwrap(), Arb::new());
        assert_eq!(a.mul(&arb("1")).unwrap(), a);
    }
}
