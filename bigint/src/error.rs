use thiserror::Error;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Arbitrary-precision arithmetic error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A string could not be parsed as a number.
    #[error("bad format at byte {position}: {problem}")]
    BadFormat {
        /// Human-readable description of what went wrong.
        problem: String,
        /// 0-based byte offset of the first offending character.
        position: usize,
    },

    /// An operation would have produced a negative unsigned value.
    #[error("operation would produce a negative value")]
    Negative,

    /// A shift amount is too large to address.
    #[error("shift amount exceeds addressable storage")]
    Overrun,

    /// Division or modulo by zero.
    #[error("division by zero")]
    DivByZero,

    /// `Value<U>()` does not fit in the requested scalar type.
    #[error("value does not fit in the requested type")]
    ScalarOverflow,

    /// A base was below the minimum of 2.
    #[error("base {0} is below the minimum of 2")]
    MinBase(u32),

    /// A base exceeded the maximum safe base.
    #[error("base {base} exceeds the maximum safe base of {max}")]
    MaxBase {
        /// The offending base.
        base: u32,
        /// The largest base usable for this operation.
        max: u32,
    },

    /// A base used by [`crate::codec::base_convert`] fell outside
    /// `[2, max_safe_base]`; unlike `MinBase`/`MaxBase` this does not
    /// distinguish which bound was crossed, matching the original's single
    /// `base_convert` failure mode.
    #[error("base {base} is out of range [2, {max}]")]
    BaseOutOfRange {
        /// The offending base.
        base: u32,
        /// The largest base usable for this operation.
        max: u32,
    },

    /// A digit's value was not less than its base.
    #[error("digit {digit} is not valid in base {base}")]
    DigitOverflow {
        /// The offending digit value.
        digit: u32,
        /// The base the digit was supposed to belong to.
        base: u32,
    },

    /// A root exponent would index beyond the limb-count type.
    #[error("root exponent is too large")]
    RootTooLarge,

    /// Native-integer overflow (`SafeInt` boundary, or a cross-type cast).
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for constructing a [`Error::BaseOutOfRange`]-flavored error
    /// (reported as `MinBase`/`MaxBase` depending on which bound was crossed).
    pub(crate) fn base_out_of_range(base: u32, max: u32) -> Self {
        if base < 2 {
            Error::MinBase(base)
        } else {
            Error::MaxBase { base, max }
        }
    }

    /// Shorthand for constructing a [`Error::BadFormat`].
    pub fn bad_format(problem: impl Into<String>, position: usize) -> Self {
        Error::BadFormat {
            problem: problem.into(),
            position,
        }
    }
}
