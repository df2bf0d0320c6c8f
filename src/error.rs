//! Error types.

use core::fmt;

/// Errors raised by field, curve, and signature operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Input is empty or contains a non-hexadecimal digit.
    InvalidHex,

    /// Parsed value is greater than or equal to the field modulus.
    ValueOutOfField,

    /// Field order is even or below 3.
    InvalidModulus,

    /// Division by the zero field element.
    DivisionByZero,

    /// Curve parameters are singular: `4a³ + 27b² ≡ 0 (mod p)`.
    InvalidCurve,

    /// Affine coordinates do not satisfy the curve equation.
    PointNotOnCurve,

    /// wNAF window width outside the supported range `[2, 6]`.
    InvalidNafWidth,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidHex => "invalid hex-encoded value",
            Error::ValueOutOfField => "value exceeds the field modulus",
            Error::InvalidModulus => "field order must be an odd value of at least 3",
            Error::DivisionByZero => "division by zero",
            Error::InvalidCurve => "parameters describe a singular curve",
            Error::PointNotOnCurve => "point is not on the curve",
            Error::InvalidNafWidth => "wNAF width must be between 2 and 6",
        })
    }
}

impl core::error::Error for Error {}

/// Result type with the crate-wide [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
