#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![forbid(missing_docs)]

/*!

Arbitrary-precision rational / fixed-point real number.

This crate provides [`Arb`], built from a pair of `bigint::UBigInt`
magnitudes plus a sign, in either fully-reduced rational mode or a
fixed-point mode with a pinned denominator.

```
use arb::Arb;

let a: Arb = "1.5".parse().unwrap();
let b: Arb = "2.25".parse().unwrap();
assert_eq!(a.add(&b).unwrap().to_string(), "3.75");
```

 */

extern crate alloc;

mod arb;
mod format;

pub use arb::Arb;
pub use bigint::{Error, Result};
