//! Arbitrary-precision unsigned integer.

use crate::codec::{self, max_safe_base};
use crate::error::{Error, Result};
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

/// `2^16`: the internal base. Limbs are stored `< BASE`, so `limb * limb`
/// always fits comfortably in the `u64` accumulator used for carries.
const BASE: u64 = 1 << 16;
/// Number of bits represented by one limb.
const BITS_PER_LIMB: u32 = 16;
/// Number of symbolic output digits available (`0-9A-Z`).
const NUM_ODIGITS: u32 = 36;

const ODIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maps an ASCII byte to its digit value, or `None` if it is not a valid
/// digit character in any supported base. A lookup table rather than a
/// `match`/`to_digit` call, the way the original's 256-entry `s_idigits`
/// table does it, so parsing is a single array index per byte and the
/// offending byte position for `BadFormat` falls out for free.
const fn digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'A'..=b'Z' => Some((byte - b'A' + 10) as u32),
        b'a'..=b'z' => Some((byte - b'a' + 10) as u32),
        _ => None,
    }
}

/// An arbitrary-precision unsigned integer.
///
/// Stored as a little-endian sequence of half-word limbs: limb 0 is least
/// significant, every limb is `< 2^16`, and there are never trailing
/// (most-significant) zero limbs — the empty sequence represents zero.
#[derive(Clone, Eq)]
pub struct UBigInt {
    limbs: Vec<u32>,
    base: u32,
}

impl Default for UBigInt {
    fn default() -> Self {
        UBigInt {
            limbs: Vec::new(),
            base: 10,
        }
    }
}

impl UBigInt {
    /// A new zero value with default I/O base 10.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets this value to zero, default base 10.
    pub fn clear(&mut self) {
        self.limbs.clear();
        self.base = 10;
    }

    /// `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// `true` if this value is odd.
    pub fn is_odd(&self) -> bool {
        self.limbs.first().map(|&l| l & 1 == 1).unwrap_or(false)
    }

    /// The current default I/O base, used by [`UBigInt::set`] and
    /// [`UBigInt::to_string_radix`] when no explicit base is given.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Sets the default I/O base. Must lie in `[2, B]`, where `B` is the
    /// internal base (`65536`).
    pub fn set_base(&mut self, base: u32) -> Result<()> {
        if base < 2 || base as u64 > BASE {
            return Err(Error::base_out_of_range(base, BASE as u32));
        }
        self.base = base;
        Ok(())
    }

    /// Builds a value from a non-negative native integer.
    pub fn from_u64(mut value: u64) -> Self {
        let mut limbs = Vec::new();
        while value > 0 {
            limbs.push((value % BASE) as u32);
            value /= BASE;
        }
        UBigInt { limbs, base: 10 }
    }

    /// Builds a value from a native integer, failing with [`Error::Negative`]
    /// if it is negative.
    pub fn from_i64(value: i64) -> Result<Self> {
        if value < 0 {
            return Err(Error::Negative);
        }
        Ok(Self::from_u64(value as u64))
    }

    /// Extracts this value as a native integer, failing with
    /// [`Error::ScalarOverflow`] if it does not fit.
    pub fn value_u64(&self) -> Result<u64> {
        let mut result: u64 = 0;
        for &limb in self.limbs.iter().rev() {
            result = result
                .checked_mul(BASE)
                .and_then(|v| v.checked_add(limb as u64))
                .ok_or(Error::ScalarOverflow)?;
        }
        Ok(result)
    }

    /// Extracts this value as a `usize`, failing with
    /// [`Error::ScalarOverflow`] if it does not fit.
    pub fn value_usize(&self) -> Result<usize> {
        let v = self.value_u64()?;
        usize::try_from(v).map_err(|_| Error::ScalarOverflow)
    }

    /// Parses `number` into this value. If `autobase` is set, honors the
    /// `0x`/`0X` (base 16), `0b`/`0B` (base 2), and leading-`0` (base 8)
    /// prefixes; otherwise the current default base is used.
    ///
    /// # Errors
    ///
    /// [`Error::BadFormat`] if any character is not a valid digit in the
    /// active base.
    pub fn set(&mut self, number: &str, autobase: bool) -> Result<()> {
        let bytes = number.as_bytes();
        let (base, start) = if autobase {
            if bytes.len() > 2 && (bytes[0] == b'0') && (bytes[1] == b'x' || bytes[1] == b'X') {
                (16u32, 2)
            } else if bytes.len() > 2 && (bytes[0] == b'0') && (bytes[1] == b'b' || bytes[1] == b'B') {
                (2u32, 2)
            } else if bytes.len() > 1 && bytes[0] == b'0' {
                (8u32, 1)
            } else {
                (self.base, 0)
            }
        } else {
            (self.base, 0)
        };

        // Little-endian digit string in `base`, built by parsing
        // most-significant-first and inserting at the front.
        let mut digits: Vec<u32> = Vec::with_capacity(bytes.len() - start);
        for (i, &byte) in bytes[start..].iter().enumerate() {
            let value = digit_value(byte)
                .filter(|&d| d < base)
                .ok_or_else(|| Error::bad_format("unrecognized character", start + i))?;
            digits.insert(0, value);
        }
        codec::trim_zeros_front(&mut digits);

        let limbs = codec::base_convert(digits, base, BASE as u32)?;
        self.limbs = limbs;
        Ok(())
    }

    /// Shifts this value left by `base^len(number)` (in the current base)
    /// and adds the parsed value of `number`; used for streaming
    /// construction, digit by digit or chunk by chunk.
    pub fn push_back(&mut self, number: &str) -> Result<()> {
        let mut addend = UBigInt::new();
        addend.set_base(self.base)?;
        addend.set(number, false)?;

        let shift = UBigInt::from_u64(self.base as u64).pow(&UBigInt::from_u64(number.len() as u64));
        self.mul_assign(&shift);
        self.add_assign(&addend);
        Ok(())
    }

    /// Formats this value in `base` (or the default base if `base` is
    /// `None`). Bases beyond the 36 available symbolic digits are rendered
    /// as a comma-separated, most-significant-first list of quoted decimal
    /// digit values (`'d0','d1',...`) — a debug-oriented format, not a
    /// stable public one, per the original design's own caveat.
    ///
    /// Fails with the same errors as [`codec::base_convert`] if an
    /// explicit out-of-range `base` is given.
    pub fn to_string_radix(&self, base: Option<u32>) -> Result<String> {
        let base = base.unwrap_or(self.base);
        if self.is_zero() {
            return Ok(if base > NUM_ODIGITS {
                String::from("'0'")
            } else {
                String::from("0")
            });
        }

        let digits = codec::base_convert(self.limbs.clone(), BASE as u32, base)?;

        Ok(if base > NUM_ODIGITS {
            let mut out = String::new();
            for (i, &d) in digits.iter().rev().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('\'');
                out.push_str(&itoa(d));
                out.push('\'');
            }
            out
        } else {
            let mut out = String::with_capacity(digits.len());
            for &d in digits.iter().rev() {
                out.push(ODIGITS[d as usize] as char);
            }
            out
        })
    }

    fn carry(&mut self, mut i: usize) {
        while self.limbs[i] as u64 >= BASE {
            let q = self.limbs[i] as u64 / BASE;
            let r = self.limbs[i] as u64 % BASE;
            self.limbs[i] = r as u32;
            if i + 1 == self.limbs.len() {
                self.limbs.push(0);
            }
            self.limbs[i + 1] += q as u32;
            i += 1;
        }
    }

    /// `self += rhs`, in place.
    pub fn add_assign(&mut self, rhs: &UBigInt) {
        if self.limbs.len() < rhs.limbs.len() {
            self.limbs.resize(rhs.limbs.len(), 0);
        }
        for (i, &limb) in rhs.limbs.iter().enumerate() {
            self.limbs[i] += limb;
            self.carry(i);
        }
        codec::trim_zeros_back(&mut self.limbs);
    }

    /// `self + rhs`.
    pub fn add(&self, rhs: &UBigInt) -> UBigInt {
        let mut result = self.clone();
        result.add_assign(rhs);
        result
    }

    /// `self -= rhs`. Fails with [`Error::Negative`] if `rhs > self`.
    pub fn sub_assign(&mut self, rhs: &UBigInt) -> Result<()> {
        if *rhs > *self {
            return Err(Error::Negative);
        }
        let mut limbs = self.limbs.clone();
        for (i, &rlimb) in rhs.limbs.iter().enumerate() {
            if limbs[i] >= rlimb {
                limbs[i] -= rlimb;
            } else {
                limbs[i] = (limbs[i] as u64 + BASE - rlimb as u64) as u32;
                borrow(&mut limbs, i + 1);
            }
        }
        codec::trim_zeros_back(&mut limbs);
        self.limbs = limbs;
        Ok(())
    }

    /// `self - rhs`. Fails with [`Error::Negative`] if `rhs > self`.
    pub fn sub(&self, rhs: &UBigInt) -> Result<UBigInt> {
        let mut result = self.clone();
        result.sub_assign(rhs)?;
        Ok(result)
    }

    /// `self * rhs`, schoolbook O(n·m).
    pub fn mul(&self, rhs: &UBigInt) -> UBigInt {
        if self.is_zero() || rhs.is_zero() {
            return UBigInt::new();
        }
        let mut result_limbs = alloc::vec![0u32; self.limbs.len() + rhs.limbs.len()];
        for (j, &rlimb) in rhs.limbs.iter().enumerate() {
            let mut carry: u64 = 0;
            for (i, &llimb) in self.limbs.iter().enumerate() {
                let idx = i + j;
                let product = llimb as u64 * rlimb as u64 + result_limbs[idx] as u64 + carry;
                result_limbs[idx] = (product % BASE) as u32;
                carry = product / BASE;
            }
            let mut idx = j + self.limbs.len();
            while carry > 0 {
                let total = result_limbs[idx] as u64 + carry;
                result_limbs[idx] = (total % BASE) as u32;
                carry = total / BASE;
                idx += 1;
            }
        }
        codec::trim_zeros_back(&mut result_limbs);
        UBigInt {
            limbs: result_limbs,
            base: self.base,
        }
    }

    /// `self *= rhs`.
    pub fn mul_assign(&mut self, rhs: &UBigInt) {
        let result = self.mul(rhs);
        self.limbs = result.limbs;
    }

    /// Long division. Returns `(quotient, remainder)`.
    ///
    /// Given dividend `self` (`D`) and divisor `rhs` (`N`) with `N != 0`:
    /// if `N > D`, the quotient is 0 and the remainder is `D`. Otherwise a
    /// running *digit group* — initially the top `len(N)` limbs of `D` — is
    /// walked down through the remaining limbs of `D` one at a time. At
    /// each step a guess at the next quotient digit is formed by dividing
    /// the digit group's top limbs by `N`'s top limb, and corrected with a
    /// bounded binary search against `floor = 1, ceiling = limb::MAX` until
    /// `N * guess` lands in range. The search terminates because each
    /// iteration strictly narrows the window and the true digit is always
    /// contained in it.
    ///
    /// # Errors
    ///
    /// [`Error::DivByZero`] if `rhs` is zero.
    pub fn div_rem(&self, rhs: &UBigInt) -> Result<(UBigInt, UBigInt)> {
        if rhs.is_zero() {
            return Err(Error::DivByZero);
        }
        if rhs > self {
            return Ok((UBigInt::new(), self.clone()));
        }

        let n = rhs.limbs.len();
        let mut quotient: Vec<u32> = Vec::with_capacity(self.limbs.len() - n + 1);

        // The digit group starts as the top `n` limbs of `self`.
        let mut diggroup = UBigInt {
            limbs: self.limbs[self.limbs.len() - n..].to_vec(),
            base: self.base,
        };

        // Remaining limbs of `self`, from most to least significant, yet to
        // be folded into `diggroup`.
        let mut remaining = self.limbs[..self.limbs.len() - n].iter().rev();

        loop {
            if diggroup >= *rhs {
                let guess = guess_quotient_digit(&diggroup, rhs);
                let test = rhs.mul(&UBigInt::from_u64(guess as u64));
                let guess = correct_guess(rhs, &diggroup, guess, test);
                let test = rhs.mul(&UBigInt::from_u64(guess as u64));
                diggroup.sub_assign(&test).expect("guess is bounded by diggroup");
                quotient.insert(0, guess);
            } else {
                quotient.insert(0, 0);
            }

            match remaining.next() {
                Some(&next_limb) => diggroup.limbs.insert(0, next_limb),
                None => break,
            }
        }

        codec::trim_zeros_back(&mut quotient);
        Ok((
            UBigInt {
                limbs: quotient,
                base: self.base,
            },
            diggroup,
        ))
    }

    /// `self / rhs`, discarding the remainder.
    pub fn div(&self, rhs: &UBigInt) -> Result<UBigInt> {
        self.div_rem(rhs).map(|(q, _)| q)
    }

    /// `self % rhs`.
    pub fn rem(&self, rhs: &UBigInt) -> Result<UBigInt> {
        self.div_rem(rhs).map(|(_, r)| r)
    }

    fn bit_len(&self) -> u64 {
        match self.limbs.last() {
            None => 0,
            Some(&top) => {
                let top_bits = 32 - top.leading_zeros();
                (self.limbs.len() as u64 - 1) * BITS_PER_LIMB as u64 + top_bits as u64
            }
        }
    }

    /// `self << n` bits. Fails with [`Error::Overrun`] if the shift would
    /// require more limbs than can be addressed.
    pub fn shl(&self, n: u64) -> Result<UBigInt> {
        if self.is_zero() || n == 0 {
            return Ok(self.clone());
        }
        let whole_limbs = n / BITS_PER_LIMB as u64;
        let bits = (n % BITS_PER_LIMB as u64) as u32;
        let new_len = self
            .limbs
            .len()
            .checked_add(whole_limbs as usize + 1)
            .ok_or(Error::Overrun)?;
        if new_len > u32::MAX as usize {
            return Err(Error::Overrun);
        }

        let mut limbs = alloc::vec![0u32; whole_limbs as usize];
        let mut carry: u64 = 0;
        for &limb in &self.limbs {
            let shifted = ((limb as u64) << bits) | carry;
            limbs.push((shifted % BASE) as u32);
            carry = shifted / BASE;
        }
        if carry > 0 {
            limbs.push(carry as u32);
        }
        codec::trim_zeros_back(&mut limbs);
        Ok(UBigInt { limbs, base: self.base })
    }

    /// `self >> n` bits.
    pub fn shr(&self, n: u64) -> UBigInt {
        let whole_limbs = n / BITS_PER_LIMB as u64;
        if whole_limbs as usize >= self.limbs.len() {
            return UBigInt { limbs: Vec::new(), base: self.base };
        }
        let bits = (n % BITS_PER_LIMB as u64) as u32;
        let mut limbs: Vec<u32> = self.limbs[whole_limbs as usize..].to_vec();
        if bits > 0 {
            let mut carry: u32 = 0;
            for limb in limbs.iter_mut().rev() {
                let mask = (1u32 << bits) - 1;
                let new_carry = *limb & mask;
                *limb = (*limb >> bits) | (carry << (BITS_PER_LIMB - bits));
                carry = new_carry;
            }
        }
        codec::trim_zeros_back(&mut limbs);
        UBigInt { limbs, base: self.base }
    }

    fn bitwise(&self, rhs: &UBigInt, op: impl Fn(u32, u32) -> u32) -> UBigInt {
        let len = self.limbs.len().max(rhs.limbs.len());
        let mut limbs = Vec::with_capacity(len);
        for i in 0..len {
            let a = self.limbs.get(i).copied().unwrap_or(0);
            let b = rhs.limbs.get(i).copied().unwrap_or(0);
            limbs.push(op(a, b));
        }
        codec::trim_zeros_back(&mut limbs);
        UBigInt { limbs, base: self.base }
    }

    /// Bitwise AND.
    pub fn bit_and(&self, rhs: &UBigInt) -> UBigInt {
        self.bitwise(rhs, |a, b| a & b)
    }

    /// Bitwise inclusive OR.
    pub fn bit_ior(&self, rhs: &UBigInt) -> UBigInt {
        self.bitwise(rhs, |a, b| a | b)
    }

    /// Bitwise exclusive OR.
    pub fn bit_xor(&self, rhs: &UBigInt) -> UBigInt {
        self.bitwise(rhs, |a, b| a ^ b)
    }

    /// Bitwise complement, within the current value's own bit width (there
    /// is no well-defined complement of an unbounded unsigned integer, so
    /// this mirrors the original's choice of bounding to the operand's own
    /// significant bits).
    pub fn bit_cpm(&self) -> UBigInt {
        let bits = self.bit_len().max(1);
        let mut limbs = self.limbs.clone();
        limbs.resize(((bits + BITS_PER_LIMB as u64 - 1) / BITS_PER_LIMB as u64) as usize, 0);
        for limb in limbs.iter_mut() {
            *limb = (!*limb) & (BASE as u32 - 1);
        }
        // Mask off any bits above `bits` in the top limb.
        let top_bits = bits % BITS_PER_LIMB as u64;
        if top_bits != 0 {
            let mask = (1u32 << top_bits) - 1;
            if let Some(top) = limbs.last_mut() {
                *top &= mask;
            }
        }
        codec::trim_zeros_back(&mut limbs);
        UBigInt { limbs, base: self.base }
    }

    /// Three-way comparison: `-1`, `0`, or `1`.
    pub fn compare(&self, rhs: &UBigInt) -> i32 {
        match self.cmp(rhs) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Binary exponentiation: `self^exp`.
    pub fn pow(&self, exp: &UBigInt) -> UBigInt {
        let mut result = UBigInt::from_u64(1);
        let mut base = self.clone();
        let mut exp = exp.clone();
        while !exp.is_zero() {
            if exp.is_odd() {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp = exp.shr(1);
        }
        result
    }

    /// Integer `n`-th root: `self^(1/n)`, via a digit-by-digit shifting
    /// search. Returns `(root, divisor, remainder)`, such that the true
    /// value is `root + remainder / divisor`. `n = 0` fails with
    /// [`Error::DivByZero`]; `n = 1`, and radicands of `0` or `1`, are
    /// no-ops. `extra_groups` bounds how many additional groups of `n`
    /// zero-digits are tried for fractional refinement once the radicand is
    /// exhausted and the remainder is still non-zero (the original hardcodes
    /// this at 10; [`crate::numeric::DEFAULT_ROOT_EXTRA_GROUPS`] matches it).
    pub fn root(&self, n: u32, extra_groups: u32) -> Result<(UBigInt, UBigInt, UBigInt)> {
        if n == 0 {
            return Err(Error::DivByZero);
        }
        if self.is_zero() || (self.limbs.len() == 1 && self.limbs[0] == 1) || n == 1 {
            return Ok((self.clone(), UBigInt::from_u64(1), UBigInt::new()));
        }
        if n as u64 > usize::MAX as u64 {
            return Err(Error::RootTooLarge);
        }

        let iroot = n as usize;
        let groups = (self.limbs.len() - 1) / iroot + 1;

        let abase = UBigInt::from_u64(BASE);
        let abase_pow_n = abase.pow(&UBigInt::from_u64(n as u64));

        let mut eroot = UBigInt::new();
        let mut erem = UBigInt::new();
        let mut edivisor = UBigInt::from_u64(1);

        let mut group = 0usize;
        let mut extra = 0u32;
        loop {
            let diggroup = if group < groups {
                let spos = (groups - 1 - group) * iroot;
                let epos = (spos + iroot).min(self.limbs.len());
                group += 1;
                UBigInt {
                    limbs: self.limbs[spos..epos].to_vec(),
                    base: self.base,
                }
            } else {
                edivisor = edivisor.mul(&abase);
                extra += 1;
                UBigInt::new()
            };

            // Binary search for the next root digit in [0, BASE).
            let mut min: u64 = 0;
            let mut max: u64 = BASE - 1;
            let mut guess: u64 = 0;
            let eroot_pow_n = eroot.pow(&UBigInt::from_u64(n as u64));
            while min <= max {
                guess = min + (max - min) / 2;
                let candidate = abase.mul(&eroot).add(&UBigInt::from_u64(guess));
                let candidate_pow_n = candidate.pow(&UBigInt::from_u64(n as u64));
                let lhs = candidate_pow_n
                    .sub(&abase_pow_n.mul(&eroot_pow_n))
                    .unwrap_or_else(|_| UBigInt::new());
                let rhs = abase_pow_n.mul(&erem).add(&diggroup);
                if lhs <= rhs {
                    min = guess + 1;
                } else {
                    if guess == 0 {
                        break;
                    }
                    max = guess - 1;
                }
            }
            if guess == min && guess > 0 {
                guess -= 1;
            }

            let new_root = abase.mul(&eroot).add(&UBigInt::from_u64(guess));
            let new_root_pow_n = new_root.pow(&UBigInt::from_u64(n as u64));
            erem = abase_pow_n
                .mul(&erem)
                .add(&diggroup)
                .sub(&new_root_pow_n.sub(&abase_pow_n.mul(&eroot_pow_n)).unwrap_or_else(|_| UBigInt::new()))
                .unwrap_or_else(|_| UBigInt::new());
            eroot = new_root;

            if group >= groups && (extra >= extra_groups || erem.is_zero()) {
                break;
            }
        }

        Ok((eroot, edivisor, erem))
    }
}

fn borrow(limbs: &mut [u32], mut i: usize) {
    while limbs[i] == 0 {
        limbs[i] = BASE as u32 - 1;
        i += 1;
    }
    limbs[i] -= 1;
}

/// Forms an over-approximating guess at the next quotient digit by dividing
/// the top limbs of `diggroup` by the top limb of `rhs`.
fn guess_quotient_digit(diggroup: &UBigInt, rhs: &UBigInt) -> u64 {
    let n = rhs.limbs.len();
    let extra = diggroup.limbs.len() - n;
    let mut rough_dividend: u64 = 0;
    for j in 0..=extra {
        rough_dividend = rough_dividend * BASE + diggroup.limbs[diggroup.limbs.len() - 1 - j] as u64;
    }
    let rough_divisor = *rhs.limbs.last().unwrap() as u64;
    (rough_dividend / rough_divisor).min(BASE - 1)
}

/// Corrects an over-approximating quotient-digit guess with a bounded
/// binary search, the trickiest step of long division: while
/// `test > diggroup` or `test + rhs <= diggroup`, narrow the guess halfway
/// toward whichever bound it violated.
fn correct_guess(rhs: &UBigInt, diggroup: &UBigInt, mut guess: u64, mut test: UBigInt) -> u64 {
    let mut floor: u64 = 1;
    let mut ceiling: u64 = BASE - 1;
    loop {
        let over = test > *diggroup;
        let under = !over && diggroup.sub(&test).map(|d| d >= *rhs).unwrap_or(false);
        if !over && !under {
            break;
        }
        if over {
            ceiling = guess - 1;
            guess -= (guess - floor) / 2 + 1;
        } else {
            floor = guess + 1;
            guess += (ceiling - guess) / 2 + 1;
        }
        test = rhs.mul(&UBigInt::from_u64(guess));
    }
    guess
}

impl PartialEq for UBigInt {
    fn eq(&self, other: &Self) -> bool {
        self.limbs == other.limbs
    }
}

impl PartialOrd for UBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => self.limbs.iter().rev().cmp(other.limbs.iter().rev()),
            ord => ord,
        }
    }
}

impl fmt::Display for UBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .to_string_radix(None)
            .expect("self.base is validated by set_base on construction");
        f.write_str(&s)
    }
}

impl fmt::Debug for UBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self
            .to_string_radix(Some(10))
            .expect("base 10 is always in range");
        f.debug_struct("UBigInt")
            .field("value", &value)
            .field("base", &self.base)
            .finish()
    }
}

impl FromStr for UBigInt {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let mut value = UBigInt::new();
        value.set(s, false)?;
        Ok(value)
    }
}

impl From<u64> for UBigInt {
    fn from(value: u64) -> Self {
        UBigInt::from_u64(value)
    }
}

fn itoa(mut value: u32) -> String {
    if value == 0 {
        return String::from("0");
    }
    let mut buf = [0u8; 10];
    let mut i = buf.len();
    while value > 0 {
        i -= 1;
        buf[i] = b'0' + (value % 10) as u8;
        value /= 10;
    }
    String::from_utf8(buf[i..].to_vec()).expect("ascii digits")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ub(s: &str) -> UBigInt {
        s.parse().unwrap()
    }

    #[test]
    fn parse_and_format_decimal() {
        let n = ub("123456789012345678901234567890");
        assert_eq!(n.to_string_radix(Some(10)).unwrap(), "123456789012345678901234567890");
    }

    #[test]
    fn parse_hex_format_binary() {
        let mut n = UBigInt::new();
        n.set("FF", false).unwrap_or_else(|_| panic!());
        let mut n = UBigInt::new();
        n.set_base(16).unwrap();
        n.set("FF", false).unwrap();
        assert_eq!(n.value_u64().unwrap(), 255);
        assert_eq!(n.to_string_radix(Some(2)).unwrap(), "11111111");
    }

    #[test]
    fn autobase_prefixes() {
        let mut n = UBigInt::new();
        n.set("0xFF", true).unwrap();
        assert_eq!(n.value_u64().unwrap(), 255);
        n.set("0b1010", true).unwrap();
        assert_eq!(n.value_u64().unwrap(), 10);
        n.set("017", true).unwrap();
        assert_eq!(n.value_u64().unwrap(), 15);
    }

    #[test]
    fn bad_format_reports_position() {
        let mut n = UBigInt::new();
        let err = n.set("12x4", false).unwrap_err();
        match err {
            Error::BadFormat { position, .. } => assert_eq!(position, 2),
            _ => panic!("expected BadFormat"),
        }
    }

    #[test]
    fn division_basic() {
        let (q, r) = ub("1000000000000").div_rem(&ub("7")).unwrap();
        assert_eq!(q.to_string_radix(Some(10)).unwrap(), "142857142857");
        assert_eq!(r.to_string_radix(Some(10)).unwrap(), "1");
    }

    #[test]
    fn division_by_one() {
        let a = ub("123456789");
        let (q, r) = a.div_rem(&ub("1")).unwrap();
        assert_eq!(q, a);
        assert!(r.is_zero());
    }

    #[test]
    fn division_divisor_greater_than_dividend() {
        let a = ub("5");
        let (q, r) = a.div_rem(&ub("100")).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, a);
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(ub("5").div_rem(&ub("0")), Err(Error::DivByZero));
    }

    #[test]
    fn subtraction_to_exact_zero() {
        let r = ub("42").sub(&ub("42")).unwrap();
        assert!(r.is_zero());
    }

    #[test]
    fn subtraction_negative_fails() {
        assert_eq!(ub("1").sub(&ub("2")), Err(Error::Negative));
    }

    #[test]
    fn pow_large() {
        let n = ub("2").pow(&ub("256"));
        let s = n.to_string_radix(Some(10)).unwrap();
        assert!(s.starts_with("1157920892373161954235709850"));
        assert_eq!(s.len(), 78);
    }

    #[test]
    fn pow_zero_exponent() {
        assert_eq!(ub("5").pow(&ub("0")), ub("1"));
        assert_eq!(ub("0").pow(&ub("0")), ub("1"));
    }

    #[test]
    fn shift_roundtrip() {
        let a = ub("123456789");
        let shifted = a.shl(17).unwrap();
        assert_eq!(shifted.shr(17), a);
    }

    #[test]
    fn shift_zero_is_noop() {
        let a = ub("42");
        assert_eq!(a.shl(0).unwrap(), a);
        assert_eq!(a.shr(0), a);
    }

    #[test]
    fn bitwise_self_identities() {
        let a = ub("123456789");
        assert_eq!(a.bit_and(&a), a);
        assert_eq!(a.bit_ior(&a), a);
        assert!(a.bit_xor(&a).is_zero());
        assert_eq!(a.bit_cpm().bit_cpm(), a);
    }

    #[test]
    fn root_perfect_square() {
        let (root, _divisor, remainder) = ub("144").root(2, 10).unwrap();
        assert_eq!(root, ub("12"));
        assert!(remainder.is_zero());
    }

    #[test]
    fn root_cube() {
        let (root, _divisor, remainder) = ub("1000").root(3, 10).unwrap();
        assert_eq!(root, ub("10"));
        assert!(remainder.is_zero());
    }

    #[test]
    fn root_nonperfect() {
        let (root, _divisor, remainder) = ub("10").root(2, 10).unwrap();
        assert_eq!(root, ub("3"));
        assert!(!remainder.is_zero());
    }

    #[test]
    fn root_zero_exponent_fails() {
        assert_eq!(ub("10").root(0, 10), Err(Error::DivByZero));
    }

    #[test]
    fn algebraic_identities() {
        let a = ub("123456789012345678901234567890");
        let b = ub("98765432109876543210");
        assert_eq!(a.add(&UBigInt::new()), a);
        assert_eq!(a.mul(&ub("1")), a);
        assert!(a.sub(&a).unwrap().is_zero());
        let c = ub("42");
        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        assert_eq!(a.mul(&b), b.mul(&a));
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.mul(&b).add(&r), a);
    }

    #[test]
    fn round_trip_format_parse() {
        let a = ub("9876543210123456789");
        let s = a.to_string_radix(Some(16)).unwrap();
        let mut b = UBigInt::new();
        b.set_base(16).unwrap();
        b.set(&s, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn base_above_36_uses_comma_form() {
        let n = ub("1000");
        let s = n.to_string_radix(Some(1000)).unwrap();
        assert!(s.starts_with('\''));
        assert!(s.contains(','));
    }

    #[test]
    fn max_safe_base_matches_codec() {
        assert_eq!(max_safe_base(), 65_536);
    }

    #[test]
    fn to_string_radix_rejects_out_of_range_base() {
        let n = ub("42");
        assert!(n.to_string_radix(Some(0)).is_err());
        assert!(n.to_string_radix(Some(1)).is_err());
    }
}
