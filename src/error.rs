use thiserror::Error;

/// Failures raised by exact arithmetic operations.
///
/// Every failure is synchronous and produces no partially constructed value.
/// Nothing is retried or recovered internally; the caller decides whether to
/// substitute a default or propagate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExactError {
    /// An exact narrowing accessor was called on a value that does not fit
    /// the requested width.
    #[error("value {value} does not fit exactly in {width}")]
    Narrowing { value: String, width: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{dividend} is not divisible by {divisor}")]
    InexactDivision { dividend: String, divisor: String },

    #[error("modulus {0} is not positive")]
    NonPositiveModulus(String),

    #[error("{value} has no inverse modulo {modulus}")]
    NotInvertible { value: String, modulus: String },

    #[error("gcd(0, 0) is undefined")]
    GcdOfZeros,

    #[error("lcm with a zero operand is undefined")]
    LcmOfZero,

    #[error("0^0 is undefined")]
    ZeroToTheZero,

    #[error("even root of a negative value")]
    EvenRootOfNegative,

    #[error("0th root is undefined")]
    ZerothRoot,

    #[error("zero has no finite factorization")]
    FactorizationOfZero,

    /// `build()` was called on a builder with no components supplied.
    #[error("number builder has no components to build from")]
    EmptyBuilder,

    #[error("degree {degree} is outside 0..={max}", max = crate::poly::MAX_DEGREE)]
    DegreeOutOfRange { degree: usize },

    #[error("coefficient count {length} is outside 1..={max}", max = crate::poly::MAX_LENGTH)]
    LengthOutOfRange { length: usize },

    /// Only constant polynomials may be raised to a negative exponent.
    #[error("negative exponent {exponent} on a non-constant polynomial")]
    NegativeExponent { exponent: i64 },

    #[error("radix {0} is outside 2..=36")]
    RadixOutOfRange(u32),

    #[error("cannot parse '{0}' as an exact number")]
    Parse(String),
}
