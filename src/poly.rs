//! Polynomials over the exact coefficient domains.

pub mod univariate;

use crate::error::ExactError;

/// The largest degree a polynomial may reach.
pub const MAX_DEGREE: usize = u16::MAX as usize;

/// The largest coefficient count, one more than [MAX_DEGREE] since the
/// constant term occupies its own slot.
pub const MAX_LENGTH: usize = MAX_DEGREE + 1;

pub(crate) fn check_degree(degree: usize) -> Result<(), ExactError> {
    if degree > MAX_DEGREE {
        return Err(ExactError::DegreeOutOfRange { degree });
    }
    Ok(())
}

pub(crate) fn check_length(length: usize) -> Result<(), ExactError> {
    if length == 0 || length > MAX_LENGTH {
        return Err(ExactError::LengthOutOfRange { length });
    }
    Ok(())
}
