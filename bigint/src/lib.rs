#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![forbid(missing_docs)]

/*!

Arbitrary-precision unsigned and signed big integers.

This crate provides [`UBigInt`], an arbitrary-precision unsigned integer
stored as a little-endian sequence of half-word limbs, [`SBigInt`], a
sign-magnitude wrapper around it, [`SafeInt`], an overflow-checked native
integer wrapper, and [`codec`], the stateless base-conversion routines both
big integer types are built on.

```
use bigint::UBigInt;

let a: UBigInt = "123456789012345678901234567890".parse().unwrap();
let b: UBigInt = "7".parse().unwrap();
let (_q, r) = a.div_rem(&b).unwrap();
assert_eq!(r.to_string_radix(Some(10)).unwrap(), "0");
```

 */

extern crate alloc;

mod error;
mod safe_int;
pub mod codec;
mod sbig;
pub mod numeric;
mod ubig;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{Error, Result};
pub use safe_int::SafeInt;
pub use sbig::SBigInt;
pub use ubig::UBigInt;
