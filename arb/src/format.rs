//! The `%`-escape formatting mini-language for [`crate::Arb`].
//!
//! A blank template means the default decomposition: integer part, radix
//! point, and up to `max_radix` fractional digits in `orig_base`. A
//! non-blank template is a sequence of literal characters interleaved with
//! `%`-escapes, each optionally preceded by a `-` (no padding) or `_`
//! (space padding) modifier:
//!
//! - `%d` — integer part, in `orig_base`.
//! - `%f` — fractional part, up to `max_radix` digits in `orig_base`; `-f`
//!   trims trailing zeros, the default keeps the full width.
//! - `%b` / `%o` / `%x` — integer part re-radixed to base 2, 8, 16.
//! - `%%` — a literal `%`.
//!
//! Only these domain codes (radix/precision/sign) are implemented. The
//! original's calendar-style codes (`%m`, `%Y`, `%H`, ...) apply only when
//! `Arb` is embedded in a timestamp template by an external collaborator,
//! which is out of scope here; an unrecognized code raises
//! [`Error::BadFormat`] rather than passing through silently.

use crate::arb::Arb;
use alloc::string::String;
use bigint::{Error, Result, UBigInt};

pub(crate) fn format(value: &Arb, template: &str) -> Result<String> {
    if template.is_empty() {
        return Ok(default_format(value));
    }

    let mut out = String::new();
    let mut chars = template.char_indices().peekable();
    while let Some((pos, ch)) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        let (mut code_pos, mut code) = match chars.next() {
            Some(next) => next,
            None => return Err(Error::bad_format("dangling '%' at end of template", pos)),
        };

        let mut no_pad = false;
        if code == '-' || code == '_' {
            no_pad = code == '-';
            match chars.next() {
                Some((p, c)) => {
                    code_pos = p;
                    code = c;
                }
                None => {
                    return Err(Error::bad_format(
                        "dangling modifier at end of template",
                        code_pos,
                    ))
                }
            }
        }

        match code {
            '%' => out.push('%'),
            'd' => out.push_str(&integer_part(value)?),
            'f' => out.push_str(&fractional_part(value, no_pad)?),
            'b' => out.push_str(&integer_digits_in_base(value, 2)?),
            'o' => out.push_str(&integer_digits_in_base(value, 8)?),
            'x' => out.push_str(&integer_digits_in_base(value, 16)?),
            other => {
                return Err(Error::bad_format(
                    alloc::format!("unrecognized format code '%{}'", other),
                    code_pos,
                ))
            }
        }
    }
    Ok(out)
}

fn default_format(value: &Arb) -> String {
    let mut out = String::new();
    out.push_str(
        &integer_part(value).expect("value.orig_base() is validated by set_base on construction"),
    );
    let frac = fractional_digits(value, value.max_radix())
        .expect("value.orig_base() is validated by set_base on construction");
    if !frac.is_empty() {
        out.push('.');
        out.push_str(&frac);
    }
    out
}

fn integer_part(value: &Arb) -> Result<String> {
    let mut out = String::new();
    if !value.is_zero() && !value.positive {
        out.push('-');
    }
    out.push_str(&integer_digits_in_base(value, value.orig_base())?);
    Ok(out)
}

fn fractional_part(value: &Arb, no_pad: bool) -> Result<String> {
    let mut digits = fractional_digits(value, value.max_radix())?;
    if no_pad {
        while digits.ends_with('0') {
            digits.pop();
        }
    }
    Ok(digits)
}

fn integer_digits_in_base(value: &Arb, base: u32) -> Result<String> {
    let whole = value
        .numerator()
        .div(value.denominator())
        .unwrap_or_else(|_| UBigInt::new());
    whole.to_string_radix(Some(base))
}

fn fractional_digits(value: &Arb, max_radix: u32) -> Result<String> {
    let base = value.orig_base();
    let q = value.denominator();
    let mut remainder = value.numerator().rem(q).unwrap_or_else(|_| UBigInt::new());
    let mut out = String::new();
    for _ in 0..max_radix {
        if remainder.is_zero() {
            break;
        }
        remainder = remainder.mul(&UBigInt::from_u64(base as u64));
        let digit = remainder.div(q).unwrap_or_else(|_| UBigInt::new());
        remainder = remainder.rem(q).unwrap_or_else(|_| UBigInt::new());
        out.push_str(&digit.to_string_radix(Some(base))?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format_matches_display() {
        let a: Arb = "1.5".parse().unwrap();
        assert_eq!(format(&a, "").unwrap(), "1.5");
    }

    #[test]
    fn template_integer_and_fractional_codes() {
        let a: Arb = "12.5".parse().unwrap();
        assert_eq!(format(&a, "%d.%-f").unwrap(), "12.5");
    }

    #[test]
    fn template_hex_code() {
        let a: Arb = "255".parse().unwrap();
        assert_eq!(format(&a, "%x").unwrap(), "FF");
    }

    #[test]
    fn literal_percent() {
        let a: Arb = "5".parse().unwrap();
        assert_eq!(format(&a, "%d%%").unwrap(), "5%");
    }

    #[test]
    fn unrecognized_code_fails() {
        let a: Arb = "5".parse().unwrap();
        assert!(matches!(format(&a, "%Y"), Err(Error::BadFormat { .. })));
    }
}
