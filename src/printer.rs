//! Text rendering for exact values.
//!
//! Every value type in this crate renders itself in any radix from 2 to 36
//! through [PrintOptions]. The digit alphabet is `0-9a-z`, matching the
//! arbitrary-precision backend, so the fixed and arbitrary paths of one value
//! are indistinguishable in text.

use smartstring::{LazyCompact, SmartString};

use crate::error::ExactError;

pub const MIN_RADIX: u32 = 2;
pub const MAX_RADIX: u32 = 36;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub radix: u32,
}

impl PrintOptions {
    /// Base-10 rendering, the [Display] default.
    pub const fn decimal() -> PrintOptions {
        PrintOptions { radix: 10 }
    }

    /// Rendering in `radix`, rejected outside `2..=36`.
    pub fn with_radix(radix: u32) -> Result<PrintOptions, ExactError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(ExactError::RadixOutOfRange(radix));
        }
        Ok(PrintOptions { radix })
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        PrintOptions::decimal()
    }
}

/// Render a native value in the given radix. The caller guarantees the radix
/// is in `2..=36`.
pub(crate) fn format_i64_radix(v: i64, radix: u32) -> SmartString<LazyCompact> {
    // 64 scratch bytes hold an i64 even in base 2
    let mut scratch = [0u8; 64];
    let mut n = 0;
    let mut mag = v.unsigned_abs();
    loop {
        scratch[n] = DIGITS[(mag % radix as u64) as usize];
        n += 1;
        mag /= radix as u64;
        if mag == 0 {
            break;
        }
    }

    let mut out = SmartString::new();
    if v < 0 {
        out.push('-');
    }
    while n > 0 {
        n -= 1;
        out.push(scratch[n] as char);
    }
    out
}
