//! `serde` support, gated behind the `serde` feature.
//!
//! Grounded on `ufix::serde_impl`'s approach of hand-written `Serialize`/
//! `Deserialize` impls rather than `#[derive]`: like a fixed-point bit
//! pattern, a bigint's internal limb vector is not the representation a
//! consumer of the wire format wants to see, so both types serialize as
//! their canonical base-10 string instead.

use crate::{SBigInt, UBigInt};
use alloc::string::ToString;
use core::str::FromStr;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for UBigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let s = self
            .to_string_radix(Some(10))
            .expect("base 10 is always in range");
        serializer.serialize_str(&s)
    }
}

impl<'de> Deserialize<'de> for UBigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = alloc::string::String::deserialize(deserializer)?;
        UBigInt::from_str(&s).map_err(D::Error::custom)
    }
}

impl Serialize for SBigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SBigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = alloc::string::String::deserialize(deserializer)?;
        SBigInt::from_str(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ubigint_roundtrips_through_json() {
        let n: UBigInt = "123456789012345678901234567890".parse().unwrap();
        let json = serde_json::to_string(&n).unwrap();
        let back: UBigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }

    #[test]
    fn sbigint_roundtrips_through_json() {
        let n: SBigInt = "-42".parse().unwrap();
        let json = serde_json::to_string(&n).unwrap();
        let back: SBigInt = serde_json::from_str(&json).unwrap();
        assert_eq!(n, back);
    }
}
