//! The exact integer model.
//!
//! [ExactInteger] keeps whole numbers without approximation in the smaller
//! of two backings: a native 64-bit value ([FixedInteger], which excludes
//! `i64::MIN` so that negation and absolute value never leave the range) or
//! an arbitrary-precision value. Every operation routes its result through
//! the minimal-representation constructors, so a sum of two huge values
//! that cancels back into native range comes out native-backed again.
//!
//! [NarrowWidth] is the transient classification of how wide a backing a
//! value actually needs; the construction layer uses it to pick storage.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use std::str::FromStr;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use rug::ops::Pow;
use rug::Complete;
pub use rug::Integer as MultiPrecisionInteger;
use smallvec::SmallVec;

use crate::domains::{EuclideanDomain, ExactValue, InternalOrdering, Ring};
use crate::error::ExactError;
use crate::printer::{format_i64_radix, PrintOptions};
use crate::utils;

pub const SMALL_PRIMES: [i64; 100] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
];

/// Inline capacity of a prime factorization; values with more distinct
/// prime factors spill to the heap.
pub const INLINED_FACTORS: usize = 8;

pub type PrimeFactorization = SmallVec<[(ExactInteger, u32); INLINED_FACTORS]>;

/// The integer ring.
pub type Z = IntegerRing;
/// The integer ring.
pub const Z: IntegerRing = IntegerRing::new();

/// The integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerRing;

impl Default for IntegerRing {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

/// Width classes a value's magnitude can require, from tightest to widest.
///
/// `Unmeasured` is the identity of [comp](NarrowWidth::comp): a fresh
/// accumulator starts there before any value has been measured.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NarrowWidth {
    Unmeasured,
    W8,
    W16,
    W32,
    W64,
    Arbitrary,
}

impl NarrowWidth {
    /// The wider of the two classes.
    #[inline]
    pub fn comp(self, other: NarrowWidth) -> NarrowWidth {
        self.max(other)
    }

    /// The tightest class that holds `v` exactly.
    ///
    /// The test runs on the negated magnitude `-|v|`, which is always
    /// representable, so the most negative value of every width classifies
    /// without overflow.
    pub fn measure_i64(v: i64) -> NarrowWidth {
        let neg = if v > 0 { -v } else { v };
        let fits = |min: i64| neg > min || (v <= 0 && neg == min);
        if fits(i8::MIN as i64) {
            NarrowWidth::W8
        } else if fits(i16::MIN as i64) {
            NarrowWidth::W16
        } else if fits(i32::MIN as i64) {
            NarrowWidth::W32
        } else {
            NarrowWidth::W64
        }
    }

    /// The tightest class that holds `v` exactly.
    pub fn measure_big(v: &MultiPrecisionInteger) -> NarrowWidth {
        match v.to_i64() {
            Some(n) => NarrowWidth::measure_i64(n),
            None => NarrowWidth::Arbitrary,
        }
    }

    /// The tightest class that holds `v` exactly.
    pub fn measure(v: &ExactInteger) -> NarrowWidth {
        match v {
            ExactInteger::Fixed(f) => NarrowWidth::measure_i64(f.value()),
            ExactInteger::Arbitrary(b) => NarrowWidth::measure_big(b),
        }
    }

    /// Fold the measured class of `value` into `current`, memoizing the
    /// measurement in `slot` so repeated queries do not re-scan the value.
    pub fn get_and_comp(
        value: &ExactInteger,
        slot: &mut Option<NarrowWidth>,
        current: NarrowWidth,
    ) -> NarrowWidth {
        let w = *slot.get_or_insert_with(|| NarrowWidth::measure(value));
        w.comp(current)
    }
}

/// A native-backed exact integer.
///
/// The backing is an `i64` with the single most negative value excluded, so
/// the admissible range is symmetric and negation cannot overflow. Values of
/// magnitude up to [CACHE_DEPTH](Self::CACHE_DEPTH) are process-wide shared
/// singletons; the arbitrary-precision image of any instance is materialized
/// at most once and reused for every later request.
pub struct FixedInteger {
    value: i64,
    big: OnceCell<MultiPrecisionInteger>,
}

/// Shared instances for `-CACHE_DEPTH..=CACHE_DEPTH`, created on first use
/// and read-only afterwards.
static SMALL_CACHE: Lazy<Vec<Arc<FixedInteger>>> = Lazy::new(|| {
    (-FixedInteger::CACHE_DEPTH..=FixedInteger::CACHE_DEPTH)
        .map(|v| Arc::new(FixedInteger::fresh(v)))
        .collect()
});

impl FixedInteger {
    /// Magnitude up to which instances are canonicalized to singletons.
    pub const CACHE_DEPTH: i64 = 128;

    fn fresh(value: i64) -> FixedInteger {
        debug_assert!(value != i64::MIN);
        FixedInteger {
            value,
            big: OnceCell::new(),
        }
    }

    /// Obtain the instance for `value`: the shared singleton when the
    /// magnitude is within [CACHE_DEPTH](Self::CACHE_DEPTH), a fresh
    /// allocation otherwise.
    ///
    /// # Errors
    ///
    /// `i64::MIN` is rejected; callers that need it must go through the
    /// arbitrary-precision backing, e.g. via [ExactInteger::from_i64].
    pub fn of(value: i64) -> Result<Arc<FixedInteger>, ExactError> {
        if value == i64::MIN {
            return Err(ExactError::Narrowing {
                value: value.to_string(),
                width: "symmetric i64",
            });
        }
        Ok(FixedInteger::obtain(value))
    }

    pub(crate) fn obtain(value: i64) -> Arc<FixedInteger> {
        if value.unsigned_abs() <= FixedInteger::CACHE_DEPTH as u64 {
            SMALL_CACHE[(value + FixedInteger::CACHE_DEPTH) as usize].clone()
        } else {
            Arc::new(FixedInteger::fresh(value))
        }
    }

    #[inline]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The arbitrary-precision image, computed once on first access.
    pub fn big(&self) -> &MultiPrecisionInteger {
        self.big
            .get_or_init(|| MultiPrecisionInteger::from(self.value))
    }
}

impl PartialEq for FixedInteger {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for FixedInteger {}

impl Hash for FixedInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Debug for FixedInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedInteger").field(&self.value).finish()
    }
}

/// A whole number held without approximation.
///
/// The two backings hold disjoint value ranges: `Fixed` exactly the values
/// an admissible `i64` can (everything but `i64::MIN`), `Arbitrary` the
/// rest. Construct through [from_i64](Self::from_i64) and
/// [from_big](Self::from_big) so the invariant is maintained; equality,
/// hashing and comparison across the variants are then structural.
#[derive(Clone)]
pub enum ExactInteger {
    Fixed(Arc<FixedInteger>),
    Arbitrary(MultiPrecisionInteger),
}

impl ExactInteger {
    pub fn zero() -> ExactInteger {
        ExactInteger::from_i64(0)
    }

    pub fn one() -> ExactInteger {
        ExactInteger::from_i64(1)
    }

    /// Wrap a native value, promoting `i64::MIN` to the arbitrary-precision
    /// backing.
    pub fn from_i64(v: i64) -> ExactInteger {
        if v == i64::MIN {
            ExactInteger::Arbitrary(MultiPrecisionInteger::from(v))
        } else {
            ExactInteger::Fixed(FixedInteger::obtain(v))
        }
    }

    /// The minimal-representation constructor: an arbitrary-precision value
    /// narrows to the native backing whenever it fits.
    pub fn from_big(v: MultiPrecisionInteger) -> ExactInteger {
        match v.to_i64() {
            Some(n) if n != i64::MIN => ExactInteger::Fixed(FixedInteger::obtain(n)),
            _ => ExactInteger::Arbitrary(v),
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            ExactInteger::Fixed(f) => f.value() == 0,
            // zero always narrows to the native backing
            ExactInteger::Arbitrary(_) => false,
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            ExactInteger::Fixed(f) => f.value() == 1,
            ExactInteger::Arbitrary(_) => false,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            ExactInteger::Fixed(f) => f.value() < 0,
            ExactInteger::Arbitrary(b) => b.is_negative(),
        }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        match self {
            ExactInteger::Fixed(f) => f.value() > 0,
            ExactInteger::Arbitrary(b) => b.is_positive(),
        }
    }

    /// A clone of the arbitrary-precision image.
    pub fn to_multi_prec(&self) -> MultiPrecisionInteger {
        self.as_multi_prec().clone()
    }

    /// Borrow the arbitrary-precision image; for a native-backed value this
    /// materializes and memoizes it on first use.
    pub fn as_multi_prec(&self) -> &MultiPrecisionInteger {
        match self {
            ExactInteger::Fixed(f) => f.big(),
            ExactInteger::Arbitrary(b) => b,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            ExactInteger::Fixed(f) => f.value() as f64,
            ExactInteger::Arbitrary(b) => b.to_f64(),
        }
    }

    pub fn abs(&self) -> ExactInteger {
        match self {
            ExactInteger::Fixed(f) => ExactInteger::from_i64(f.value().abs()),
            ExactInteger::Arbitrary(b) => {
                if b.is_negative() {
                    ExactInteger::from_big(b.abs_ref().complete())
                } else {
                    self.clone()
                }
            }
        }
    }

    /// Truncating quotient and remainder; the remainder carries the sign of
    /// the dividend.
    ///
    /// # Errors
    ///
    /// Fails on a zero divisor.
    pub fn quot_rem(
        &self,
        divisor: &ExactInteger,
    ) -> Result<(ExactInteger, ExactInteger), ExactError> {
        if divisor.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        Ok(match (self, divisor) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => (
                ExactInteger::from_i64(a.value() / b.value()),
                ExactInteger::from_i64(a.value() % b.value()),
            ),
            _ => {
                let (q, r) = self
                    .as_multi_prec()
                    .div_rem_ref(divisor.as_multi_prec())
                    .complete();
                (ExactInteger::from_big(q), ExactInteger::from_big(r))
            }
        })
    }

    /// The quotient when the division is exact.
    ///
    /// # Errors
    ///
    /// Fails on a zero divisor or a non-zero remainder.
    pub fn quotient_exact(&self, divisor: &ExactInteger) -> Result<ExactInteger, ExactError> {
        let (q, r) = self.quot_rem(divisor)?;
        if r.is_zero() {
            Ok(q)
        } else {
            Err(ExactError::InexactDivision {
                dividend: self.to_string(),
                divisor: divisor.to_string(),
            })
        }
    }

    /// Truncating remainder, sign of the dividend. See [modulo](Self::modulo)
    /// for the non-negative variant.
    ///
    /// # Errors
    ///
    /// Fails on a zero divisor.
    pub fn remainder(&self, divisor: &ExactInteger) -> Result<ExactInteger, ExactError> {
        Ok(self.quot_rem(divisor)?.1)
    }

    /// The least non-negative residue, always in `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Fails unless the modulus is positive.
    pub fn modulo(&self, modulus: &ExactInteger) -> Result<ExactInteger, ExactError> {
        if !modulus.is_positive() {
            return Err(ExactError::NonPositiveModulus(modulus.to_string()));
        }
        Ok(match (self, modulus) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(m)) => {
                ExactInteger::from_i64(a.value().rem_euclid(m.value()))
            }
            _ => {
                let (_, r) = self
                    .as_multi_prec()
                    .div_rem_euc_ref(modulus.as_multi_prec())
                    .complete();
                ExactInteger::from_big(r)
            }
        })
    }

    /// The multiplicative inverse modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Fails unless the modulus is positive and the value is coprime to it.
    pub fn mod_inverse(&self, modulus: &ExactInteger) -> Result<ExactInteger, ExactError> {
        if !modulus.is_positive() {
            return Err(ExactError::NonPositiveModulus(modulus.to_string()));
        }

        // native extended euclid while the intermediates cannot overflow
        if let (ExactInteger::Fixed(a), ExactInteger::Fixed(m)) = (self, modulus) {
            if NarrowWidth::measure_i64(m.value()) <= NarrowWidth::W32 {
                let m_v = m.value();
                let (mut t0, mut t1) = (0i64, 1i64);
                let (mut r0, mut r1) = (m_v, a.value().rem_euclid(m_v));
                while r1 != 0 {
                    let q = r0 / r1;
                    (t0, t1) = (t1, t0 - q * t1);
                    (r0, r1) = (r1, r0 - q * r1);
                }
                if r0 != 1 {
                    return Err(ExactError::NotInvertible {
                        value: self.to_string(),
                        modulus: modulus.to_string(),
                    });
                }
                return Ok(ExactInteger::from_i64(t0.rem_euclid(m_v)));
            }
        }

        let (mut t0, mut t1) = (ExactInteger::zero(), ExactInteger::one());
        let mut r0 = modulus.clone();
        let mut r1 = self.modulo(modulus)?;
        while !r1.is_zero() {
            let (q, r) = r0.quot_rem(&r1)?;
            let t2 = &t0 - &(&q * &t1);
            (t0, t1) = (t1, t2);
            (r0, r1) = (r1, r);
        }
        if !r0.is_one() {
            return Err(ExactError::NotInvertible {
                value: self.to_string(),
                modulus: modulus.to_string(),
            });
        }
        if t0.is_negative() {
            t0 += modulus;
        }
        Ok(t0)
    }

    /// Greatest common divisor, always non-negative.
    ///
    /// # Errors
    ///
    /// Fails when both operands are zero.
    pub fn gcd(&self, other: &ExactInteger) -> Result<ExactInteger, ExactError> {
        if self.is_zero() && other.is_zero() {
            return Err(ExactError::GcdOfZeros);
        }
        Ok(self.gcd_raw(other))
    }

    /// The total gcd used internally; `gcd_raw(0, 0)` is `0`.
    pub(crate) fn gcd_raw(&self, other: &ExactInteger) -> ExactInteger {
        match (self, other) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => {
                // neither operand is i64::MIN, so the gcd fits
                ExactInteger::from_i64(utils::gcd_signed(a.value(), b.value()) as i64)
            }
            _ => ExactInteger::from_big(
                self.as_multi_prec()
                    .gcd_ref(other.as_multi_prec())
                    .complete(),
            ),
        }
    }

    /// Least common multiple, always positive.
    ///
    /// # Errors
    ///
    /// Fails when either operand is zero.
    pub fn lcm(&self, other: &ExactInteger) -> Result<ExactInteger, ExactError> {
        if self.is_zero() || other.is_zero() {
            return Err(ExactError::LcmOfZero);
        }
        let g = self.gcd_raw(other);
        let scaled = &self.quotient_exact(&g)? * other;
        Ok(scaled.abs())
    }

    /// Raise to a non-negative exponent.
    ///
    /// # Panics
    ///
    /// Panics when the exponent exceeds `u32::MAX`.
    pub fn pow(&self, e: u64) -> ExactInteger {
        if e > u32::MAX as u64 {
            panic!("Power of exponentiation is larger than 2^32: {}", e);
        }
        match self {
            ExactInteger::Fixed(f) => match f.value().checked_pow(e as u32) {
                Some(p) => ExactInteger::from_i64(p),
                None => {
                    ExactInteger::from_big(MultiPrecisionInteger::from(f.value()).pow(e as u32))
                }
            },
            ExactInteger::Arbitrary(b) => ExactInteger::from_big(b.pow(e as u32).complete()),
        }
    }

    /// The truncated `n`-th root together with the remainder
    /// `self - root^n`.
    ///
    /// # Errors
    ///
    /// Fails for `n = 0` and for even `n` over a negative value.
    pub fn root_rem(&self, n: u32) -> Result<(ExactInteger, ExactInteger), ExactError> {
        if n == 0 {
            return Err(ExactError::ZerothRoot);
        }
        if n % 2 == 0 && self.is_negative() {
            return Err(ExactError::EvenRootOfNegative);
        }

        // native square root from a float seed, corrected to the exact
        // truncation without ever overflowing
        if let (ExactInteger::Fixed(f), 2) = (self, n) {
            let v = f.value();
            let mut r = (v as f64).sqrt() as i64;
            while r.checked_mul(r).map_or(true, |s| s > v) {
                r -= 1;
            }
            while (r + 1).checked_mul(r + 1).map_or(false, |s| s <= v) {
                r += 1;
            }
            return Ok((ExactInteger::from_i64(r), ExactInteger::from_i64(v - r * r)));
        }

        let (root, rem) = self.as_multi_prec().root_rem_ref(n).complete();
        Ok((ExactInteger::from_big(root), ExactInteger::from_big(rem)))
    }

    /// Primality by trial division up to the integer square root.
    ///
    /// Correct for any magnitude, but no attempt is made to be fast for
    /// values beyond the native range.
    pub fn is_prime(&self) -> bool {
        match self {
            ExactInteger::Fixed(f) => is_prime_i64(f.value()),
            ExactInteger::Arbitrary(b) => {
                if b.is_negative() || b.is_even() {
                    return false;
                }
                for &p in &SMALL_PRIMES[1..] {
                    if b.is_divisible_u(p as u32) {
                        return false;
                    }
                }
                let mut c = MultiPrecisionInteger::from(SMALL_PRIMES[99] + 2);
                while c.square_ref().complete() <= *b {
                    if b.is_divisible(&c) {
                        return false;
                    }
                    c += 2;
                }
                true
            }
        }
    }

    /// The prime factorization of the magnitude as `(prime, multiplicity)`
    /// pairs in increasing prime order, by repeated trial division. One
    /// factors into the empty product.
    ///
    /// # Errors
    ///
    /// Fails for zero.
    pub fn prime_factorization(&self) -> Result<PrimeFactorization, ExactError> {
        if self.is_zero() {
            return Err(ExactError::FactorizationOfZero);
        }

        fn divide_out(v: &mut ExactInteger, c: &ExactInteger) -> u32 {
            let mut m = 0u32;
            loop {
                match v.quot_rem(c) {
                    Ok((q, r)) if r.is_zero() => {
                        *v = q;
                        m += 1;
                    }
                    _ => return m,
                }
            }
        }

        let mut out = PrimeFactorization::new();
        let mut v = self.abs();

        for &p in &SMALL_PRIMES {
            if v.is_one() {
                return Ok(out);
            }
            let c = ExactInteger::from_i64(p);
            let m = divide_out(&mut v, &c);
            if m > 0 {
                out.push((c, m));
            }
        }

        let mut c = ExactInteger::from_i64(SMALL_PRIMES[99] + 2);
        let two = ExactInteger::from_i64(2);
        while !v.is_one() {
            // whatever remains below the square of the candidate is prime
            let past_root = match (&v, &c) {
                (ExactInteger::Fixed(f), ExactInteger::Fixed(cf)) => {
                    cf.value() > f.value() / cf.value()
                }
                _ => c.pow(2) > v,
            };
            if past_root {
                out.push((v, 1));
                return Ok(out);
            }
            let m = divide_out(&mut v, &c);
            if m > 0 {
                out.push((c.clone(), m));
            }
            c += &two;
        }
        Ok(out)
    }

    /// All positive divisors of the magnitude, in increasing order.
    ///
    /// # Errors
    ///
    /// Fails for zero, which has no finite divisor list.
    pub fn divisors(&self) -> Result<Vec<ExactInteger>, ExactError> {
        let factorization = self.prime_factorization()?;
        let mut out = vec![ExactInteger::one()];
        for (p, m) in &factorization {
            let len = out.len();
            let mut power = ExactInteger::one();
            for _ in 0..*m {
                power = &power * p;
                for i in 0..len {
                    out.push(&out[i] * &power);
                }
            }
        }
        out.sort_unstable();
        Ok(out)
    }

    /// Render in the given radix.
    ///
    /// # Errors
    ///
    /// Fails when the radix is outside `2..=36`.
    pub fn to_radix_string(&self, radix: u32) -> Result<String, ExactError> {
        let opts = PrintOptions::with_radix(radix)?;
        Ok(self.format_string(&opts, false))
    }
}

fn is_prime_i64(v: i64) -> bool {
    if v < 2 {
        return false;
    }
    if v == 2 {
        return true;
    }
    if v % 2 == 0 {
        return false;
    }
    for &p in &SMALL_PRIMES[1..] {
        if p * p > v {
            return true;
        }
        if v % p == 0 {
            return false;
        }
    }
    let mut c = SMALL_PRIMES[99] + 2;
    while c <= v / c {
        if v % c == 0 {
            return false;
        }
        c += 2;
    }
    true
}

/// Generated exact and truncating narrowing accessors. `u16` is the
/// character-range width.
macro_rules! narrowing_accessors {
    ($(($t:ty, $exact:ident, $wrap:ident, $rug_to:ident, $rug_wrap:ident)),* $(,)?) => {
        impl ExactInteger {
            $(
                /// Exact conversion to the target width.
                ///
                /// # Errors
                ///
                /// Fails with a narrowing error when the value does not fit.
                pub fn $exact(&self) -> Result<$t, ExactError> {
                    let fit = match self {
                        ExactInteger::Fixed(f) => <$t>::try_from(f.value()).ok(),
                        ExactInteger::Arbitrary(b) => b.$rug_to(),
                    };
                    fit.ok_or_else(|| ExactError::Narrowing {
                        value: self.to_string(),
                        width: stringify!($t),
                    })
                }

                /// Truncating conversion; discards high bits.
                pub fn $wrap(&self) -> $t {
                    match self {
                        ExactInteger::Fixed(f) => f.value() as $t,
                        ExactInteger::Arbitrary(b) => b.$rug_wrap(),
                    }
                }
            )*
        }
    };
}

narrowing_accessors!(
    (i8, to_i8_exact, to_i8_wrapping, to_i8, to_i8_wrapping),
    (i16, to_i16_exact, to_i16_wrapping, to_i16, to_i16_wrapping),
    (i32, to_i32_exact, to_i32_wrapping, to_i32, to_i32_wrapping),
    (i64, to_i64_exact, to_i64_wrapping, to_i64, to_i64_wrapping),
    (u8, to_u8_exact, to_u8_wrapping, to_u8, to_u8_wrapping),
    (u16, to_u16_exact, to_u16_wrapping, to_u16, to_u16_wrapping),
    (u32, to_u32_exact, to_u32_wrapping, to_u32, to_u32_wrapping),
    (u64, to_u64_exact, to_u64_wrapping, to_u64, to_u64_wrapping),
);

impl PartialEq for ExactInteger {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => {
                Arc::ptr_eq(a, b) || a.value() == b.value()
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Arbitrary(b)) => a == b,
            // the backings hold disjoint value ranges
            _ => false,
        }
    }
}

impl Eq for ExactInteger {}

impl Hash for ExactInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            ExactInteger::Fixed(f) => f.value().hash(state),
            ExactInteger::Arbitrary(b) => match b.to_i64() {
                // i64::MIN is the one native value living in this backing
                Some(v) => v.hash(state),
                None => b.hash(state),
            },
        }
    }
}

impl PartialOrd for ExactInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => a.value().partial_cmp(&b.value()),
            (ExactInteger::Fixed(a), ExactInteger::Arbitrary(b)) => a.value().partial_cmp(b),
            (ExactInteger::Arbitrary(a), ExactInteger::Fixed(b)) => a.partial_cmp(&b.value()),
            (ExactInteger::Arbitrary(a), ExactInteger::Arbitrary(b)) => a.partial_cmp(b),
        }
    }
}

impl Ord for ExactInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap()
    }
}

impl InternalOrdering for ExactInteger {
    fn internal_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl ExactValue for ExactInteger {
    fn is_zero(&self) -> bool {
        self.is_zero()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }

    fn is_negative(&self) -> bool {
        self.is_negative()
    }

    fn format<W: fmt::Write>(
        &self,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> fmt::Result {
        let parens = in_product && self.is_negative();
        if parens {
            f.write_char('(')?;
        }
        match self {
            ExactInteger::Fixed(v) => f.write_str(&format_i64_radix(v.value(), opts.radix))?,
            ExactInteger::Arbitrary(b) => f.write_str(&b.to_string_radix(opts.radix as i32))?,
        }
        if parens {
            f.write_char(')')?;
        }
        Ok(())
    }
}

impl Display for ExactInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format(&PrintOptions::default(), false, f)
    }
}

impl Debug for ExactInteger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Default for ExactInteger {
    fn default() -> Self {
        ExactInteger::zero()
    }
}

macro_rules! from_native {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ExactInteger {
                fn from(v: $t) -> ExactInteger {
                    ExactInteger::from_i64(v as i64)
                }
            }
        )*
    };
}

from_native!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ExactInteger {
    fn from(v: u64) -> ExactInteger {
        match i64::try_from(v) {
            Ok(n) => ExactInteger::from_i64(n),
            Err(_) => ExactInteger::from_big(MultiPrecisionInteger::from(v)),
        }
    }
}

impl From<usize> for ExactInteger {
    fn from(v: usize) -> ExactInteger {
        ExactInteger::from(v as u64)
    }
}

impl From<MultiPrecisionInteger> for ExactInteger {
    fn from(v: MultiPrecisionInteger) -> ExactInteger {
        ExactInteger::from_big(v)
    }
}

impl From<&MultiPrecisionInteger> for ExactInteger {
    fn from(v: &MultiPrecisionInteger) -> ExactInteger {
        ExactInteger::from_big(v.clone())
    }
}

impl FromStr for ExactInteger {
    type Err = ExactError;

    fn from_str(s: &str) -> Result<Self, ExactError> {
        if let Ok(n) = s.parse::<i64>() {
            return Ok(ExactInteger::from_i64(n));
        }
        s.parse::<MultiPrecisionInteger>()
            .map(ExactInteger::from_big)
            .map_err(|_| ExactError::Parse(s.to_string()))
    }
}

impl Neg for &ExactInteger {
    type Output = ExactInteger;

    fn neg(self) -> ExactInteger {
        match self {
            // the backing excludes i64::MIN, so native negation is total
            ExactInteger::Fixed(f) => ExactInteger::from_i64(-f.value()),
            ExactInteger::Arbitrary(b) => ExactInteger::from_big((-b).complete()),
        }
    }
}

impl Neg for ExactInteger {
    type Output = ExactInteger;

    fn neg(self) -> ExactInteger {
        -&self
    }
}

impl<'a, 'b> Add<&'b ExactInteger> for &'a ExactInteger {
    type Output = ExactInteger;

    fn add(self, rhs: &'b ExactInteger) -> ExactInteger {
        match (self, rhs) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => {
                match a.value().checked_add(b.value()) {
                    Some(n) => ExactInteger::from_i64(n),
                    None => {
                        ExactInteger::from_big(MultiPrecisionInteger::from(a.value()) + b.value())
                    }
                }
            }
            (ExactInteger::Fixed(a), ExactInteger::Arbitrary(b)) => {
                ExactInteger::from_big((a.value() + b).complete())
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Fixed(b)) => {
                ExactInteger::from_big((a + b.value()).complete())
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Arbitrary(b)) => {
                ExactInteger::from_big((a + b).complete())
            }
        }
    }
}

impl<'a, 'b> Sub<&'b ExactInteger> for &'a ExactInteger {
    type Output = ExactInteger;

    fn sub(self, rhs: &'b ExactInteger) -> ExactInteger {
        match (self, rhs) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => {
                match a.value().checked_sub(b.value()) {
                    Some(n) => ExactInteger::from_i64(n),
                    None => {
                        ExactInteger::from_big(MultiPrecisionInteger::from(a.value()) - b.value())
                    }
                }
            }
            (ExactInteger::Fixed(a), ExactInteger::Arbitrary(b)) => {
                ExactInteger::from_big((a.value() - b).complete())
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Fixed(b)) => {
                ExactInteger::from_big((a - b.value()).complete())
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Arbitrary(b)) => {
                ExactInteger::from_big((a - b).complete())
            }
        }
    }
}

impl<'a, 'b> Mul<&'b ExactInteger> for &'a ExactInteger {
    type Output = ExactInteger;

    fn mul(self, rhs: &'b ExactInteger) -> ExactInteger {
        match (self, rhs) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => {
                match a.value().checked_mul(b.value()) {
                    Some(n) => ExactInteger::from_i64(n),
                    None => {
                        ExactInteger::from_big(MultiPrecisionInteger::from(a.value()) * b.value())
                    }
                }
            }
            (ExactInteger::Fixed(a), ExactInteger::Arbitrary(b)) => {
                ExactInteger::from_big((a.value() * b).complete())
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Fixed(b)) => {
                ExactInteger::from_big((a * b.value()).complete())
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Arbitrary(b)) => {
                ExactInteger::from_big((a * b).complete())
            }
        }
    }
}

impl<'a, 'b> Div<&'b ExactInteger> for &'a ExactInteger {
    type Output = ExactInteger;

    /// Truncating quotient.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor; use [ExactInteger::quot_rem] for the
    /// checked form.
    fn div(self, rhs: &'b ExactInteger) -> ExactInteger {
        if rhs.is_zero() {
            panic!("Cannot divide by zero");
        }
        match (self, rhs) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => {
                // a is never i64::MIN, so a / -1 cannot overflow
                ExactInteger::from_i64(a.value() / b.value())
            }
            _ => ExactInteger::from_big((self.as_multi_prec() / rhs.as_multi_prec()).complete()),
        }
    }
}

impl<'a, 'b> Rem<&'b ExactInteger> for &'a ExactInteger {
    type Output = ExactInteger;

    /// Truncating remainder, sign of the dividend.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor; use [ExactInteger::remainder] for the
    /// checked form.
    fn rem(self, rhs: &'b ExactInteger) -> ExactInteger {
        if rhs.is_zero() {
            panic!("Cannot divide by zero");
        }
        match (self, rhs) {
            (ExactInteger::Fixed(a), ExactInteger::Fixed(b)) => {
                ExactInteger::from_i64(a.value() % b.value())
            }
            _ => ExactInteger::from_big((self.as_multi_prec() % rhs.as_multi_prec()).complete()),
        }
    }
}

macro_rules! forward_binop {
    ($($op:ident, $f:ident);* $(;)?) => {
        $(
            impl<'a> $op<&'a ExactInteger> for ExactInteger {
                type Output = ExactInteger;

                fn $f(self, rhs: &'a ExactInteger) -> ExactInteger {
                    (&self).$f(rhs)
                }
            }

            impl<'a> $op<ExactInteger> for &'a ExactInteger {
                type Output = ExactInteger;

                fn $f(self, rhs: ExactInteger) -> ExactInteger {
                    self.$f(&rhs)
                }
            }

            impl $op<ExactInteger> for ExactInteger {
                type Output = ExactInteger;

                fn $f(self, rhs: ExactInteger) -> ExactInteger {
                    (&self).$f(&rhs)
                }
            }
        )*
    };
}

forward_binop!(Add, add; Sub, sub; Mul, mul; Div, div; Rem, rem);

impl<'a> AddAssign<&'a ExactInteger> for ExactInteger {
    fn add_assign(&mut self, rhs: &'a ExactInteger) {
        match (&mut *self, rhs) {
            (ExactInteger::Arbitrary(a), ExactInteger::Arbitrary(b)) => {
                *a += b;
                let v = std::mem::take(a);
                *self = ExactInteger::from_big(v);
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Fixed(b)) => {
                *a += b.value();
                let v = std::mem::take(a);
                *self = ExactInteger::from_big(v);
            }
            _ => *self = &*self + rhs,
        }
    }
}

impl<'a> SubAssign<&'a ExactInteger> for ExactInteger {
    fn sub_assign(&mut self, rhs: &'a ExactInteger) {
        match (&mut *self, rhs) {
            (ExactInteger::Arbitrary(a), ExactInteger::Arbitrary(b)) => {
                *a -= b;
                let v = std::mem::take(a);
                *self = ExactInteger::from_big(v);
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Fixed(b)) => {
                *a -= b.value();
                let v = std::mem::take(a);
                *self = ExactInteger::from_big(v);
            }
            _ => *self = &*self - rhs,
        }
    }
}

impl<'a> MulAssign<&'a ExactInteger> for ExactInteger {
    fn mul_assign(&mut self, rhs: &'a ExactInteger) {
        match (&mut *self, rhs) {
            (ExactInteger::Arbitrary(a), ExactInteger::Arbitrary(b)) => {
                *a *= b;
                let v = std::mem::take(a);
                *self = ExactInteger::from_big(v);
            }
            (ExactInteger::Arbitrary(a), ExactInteger::Fixed(b)) => {
                *a *= b.value();
                let v = std::mem::take(a);
                *self = ExactInteger::from_big(v);
            }
            _ => *self = &*self * rhs,
        }
    }
}

impl AddAssign<ExactInteger> for ExactInteger {
    fn add_assign(&mut self, rhs: ExactInteger) {
        *self += &rhs;
    }
}

impl SubAssign<ExactInteger> for ExactInteger {
    fn sub_assign(&mut self, rhs: ExactInteger) {
        *self -= &rhs;
    }
}

impl MulAssign<ExactInteger> for ExactInteger {
    fn mul_assign(&mut self, rhs: ExactInteger) {
        *self *= &rhs;
    }
}

impl Display for IntegerRing {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl Ring for IntegerRing {
    type Element = ExactInteger;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    #[inline]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a += b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a -= b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a *= b;
    }

    #[inline(always)]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        if let ExactInteger::Arbitrary(l) = a {
            // accumulate in place without materializing b * c
            match (b, c) {
                (ExactInteger::Fixed(x), ExactInteger::Arbitrary(y)) => *l += x.value() * y,
                (ExactInteger::Arbitrary(x), ExactInteger::Fixed(y)) => *l += x * y.value(),
                (ExactInteger::Arbitrary(x), ExactInteger::Arbitrary(y)) => *l += x * y,
                (ExactInteger::Fixed(_), ExactInteger::Fixed(_)) => {
                    *a += &(b * c);
                    return;
                }
            }
            let v = std::mem::take(l);
            *a = ExactInteger::from_big(v);
            return;
        }
        *a += &(b * c);
    }

    #[inline(always)]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        if let ExactInteger::Arbitrary(l) = a {
            match (b, c) {
                (ExactInteger::Fixed(x), ExactInteger::Arbitrary(y)) => *l -= x.value() * y,
                (ExactInteger::Arbitrary(x), ExactInteger::Fixed(y)) => *l -= x * y.value(),
                (ExactInteger::Arbitrary(x), ExactInteger::Arbitrary(y)) => *l -= x * y,
                (ExactInteger::Fixed(_), ExactInteger::Fixed(_)) => {
                    *a -= &(b * c);
                    return;
                }
            }
            let v = std::mem::take(l);
            *a = ExactInteger::from_big(v);
            return;
        }
        *a -= &(b * c);
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        ExactInteger::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        ExactInteger::one()
    }

    #[inline]
    fn nth(&self, n: i64) -> Self::Element {
        ExactInteger::from_i64(n)
    }

    #[inline]
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow(e)
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }

    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        let (q, r) = a.quot_rem(b).ok()?;
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }
}

impl EuclideanDomain for IntegerRing {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a % b
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (a / b, a % b)
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.gcd_raw(b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn width_classes() {
        assert_eq!(NarrowWidth::measure_i64(0), NarrowWidth::W8);
        assert_eq!(NarrowWidth::measure_i64(127), NarrowWidth::W8);
        assert_eq!(NarrowWidth::measure_i64(-128), NarrowWidth::W8);
        assert_eq!(NarrowWidth::measure_i64(128), NarrowWidth::W16);
        assert_eq!(NarrowWidth::measure_i64(-129), NarrowWidth::W16);
        assert_eq!(NarrowWidth::measure_i64(32767), NarrowWidth::W16);
        assert_eq!(NarrowWidth::measure_i64(32768), NarrowWidth::W32);
        assert_eq!(NarrowWidth::measure_i64(i32::MIN as i64), NarrowWidth::W32);
        assert_eq!(NarrowWidth::measure_i64(i64::MIN), NarrowWidth::W64);
        assert_eq!(
            NarrowWidth::measure_big(&(MultiPrecisionInteger::from(i64::MAX) + 1u32)),
            NarrowWidth::Arbitrary
        );
        assert_eq!(NarrowWidth::W16.comp(NarrowWidth::W64), NarrowWidth::W64);
        assert_eq!(
            NarrowWidth::Unmeasured.comp(NarrowWidth::W8),
            NarrowWidth::W8
        );
    }

    #[test]
    fn width_memoization() {
        let v = ExactInteger::from_i64(1000);
        let mut slot = None;
        let w = NarrowWidth::get_and_comp(&v, &mut slot, NarrowWidth::Unmeasured);
        assert_eq!(w, NarrowWidth::W16);
        assert_eq!(slot, Some(NarrowWidth::W16));
        let w = NarrowWidth::get_and_comp(&v, &mut slot, NarrowWidth::W32);
        assert_eq!(w, NarrowWidth::W32);
    }

    #[test]
    fn cache_identity() {
        for v in [-128i64, -1, 0, 5, 127, 128] {
            let a = FixedInteger::of(v).unwrap();
            let b = FixedInteger::of(v).unwrap();
            assert!(Arc::ptr_eq(&a, &b), "no singleton for {}", v);
        }
        let a = FixedInteger::of(129).unwrap();
        let b = FixedInteger::of(129).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn most_negative_rejected() {
        assert!(matches!(
            FixedInteger::of(i64::MIN),
            Err(ExactError::Narrowing { .. })
        ));
        let promoted = ExactInteger::from_i64(i64::MIN);
        assert!(matches!(promoted, ExactInteger::Arbitrary(_)));
        assert_eq!(promoted.to_i64_exact().unwrap(), i64::MIN);
    }

    #[test]
    fn minimal_representation() {
        let max = ExactInteger::from_i64(i64::MAX);
        let one = ExactInteger::one();
        let big = &max + &one;
        assert!(matches!(big, ExactInteger::Arbitrary(_)));
        let back = &big - &one;
        assert!(matches!(back, ExactInteger::Fixed(_)));
        assert_eq!(back, max);

        let round = ExactInteger::from_big(ExactInteger::from_i64(42).to_multi_prec());
        assert_eq!(round, ExactInteger::from_i64(42));
    }

    #[test]
    fn lazy_big_is_shared() {
        let f = FixedInteger::of(1000).unwrap();
        let p1 = f.big() as *const MultiPrecisionInteger;
        let p2 = f.big() as *const MultiPrecisionInteger;
        assert_eq!(p1, p2);
        assert_eq!(*f.big(), 1000);
    }

    #[test]
    fn narrowing_boundaries() {
        assert_eq!(ExactInteger::from_i64(127).to_i8_exact().unwrap(), 127);
        assert_eq!(ExactInteger::from_i64(-128).to_i8_exact().unwrap(), -128);
        assert!(matches!(
            ExactInteger::from_i64(128).to_i8_exact(),
            Err(ExactError::Narrowing { width: "i8", .. })
        ));
        assert_eq!(ExactInteger::from_i64(128).to_i8_wrapping(), -128);

        assert_eq!(ExactInteger::from_i64(65535).to_u16_exact().unwrap(), 65535);
        assert!(ExactInteger::from_i64(-1).to_u16_exact().is_err());
        assert!(ExactInteger::from_i64(65536).to_u16_exact().is_err());

        let big = &ExactInteger::from_i64(i64::MAX) + &ExactInteger::one();
        assert!(big.to_i64_exact().is_err());
        assert_eq!(big.to_i64_wrapping(), i64::MIN);
    }

    #[test]
    fn negation_is_total() {
        let v = ExactInteger::from_i64(i64::MIN);
        let n = -&v;
        assert!(matches!(n, ExactInteger::Arbitrary(_)));
        assert_eq!(-&n, v);
        assert_eq!(
            -&ExactInteger::from_i64(i64::MIN + 1),
            ExactInteger::from_i64(i64::MAX)
        );
    }

    #[test]
    fn truncating_division() {
        let a = ExactInteger::from_i64(-7);
        let b = ExactInteger::from_i64(2);
        let (q, r) = a.quot_rem(&b).unwrap();
        assert_eq!(q, ExactInteger::from_i64(-3));
        assert_eq!(r, ExactInteger::from_i64(-1));
        assert_eq!(
            a.quot_rem(&ExactInteger::zero()),
            Err(ExactError::DivisionByZero)
        );

        assert_eq!(
            ExactInteger::from_i64(6)
                .quotient_exact(&ExactInteger::from_i64(3))
                .unwrap(),
            ExactInteger::from_i64(2)
        );
        assert!(matches!(
            ExactInteger::from_i64(7).quotient_exact(&ExactInteger::from_i64(3)),
            Err(ExactError::InexactDivision { .. })
        ));
    }

    #[test]
    fn euclidean_modulo() {
        let m = ExactInteger::from_i64(5);
        assert_eq!(
            ExactInteger::from_i64(-7).modulo(&m).unwrap(),
            ExactInteger::from_i64(3)
        );
        assert_eq!(
            ExactInteger::from_i64(7).modulo(&m).unwrap(),
            ExactInteger::from_i64(2)
        );
        assert!(matches!(
            ExactInteger::from_i64(7).modulo(&ExactInteger::zero()),
            Err(ExactError::NonPositiveModulus(_))
        ));
        assert!(matches!(
            ExactInteger::from_i64(7).modulo(&ExactInteger::from_i64(-5)),
            Err(ExactError::NonPositiveModulus(_))
        ));
    }

    #[test]
    fn modular_inverse() {
        let m = ExactInteger::from_i64(17);
        let inv = ExactInteger::from_i64(5).mod_inverse(&m).unwrap();
        assert_eq!(inv, ExactInteger::from_i64(7));
        assert!(matches!(
            ExactInteger::from_i64(4).mod_inverse(&ExactInteger::from_i64(8)),
            Err(ExactError::NotInvertible { .. })
        ));

        // wide modulus takes the arbitrary-precision path
        let m = ExactInteger::from_i64(1_000_000_007i64 * 4 + 3);
        let v = ExactInteger::from_i64(123_456_789);
        let inv = v.mod_inverse(&m).unwrap();
        assert_eq!((&v * &inv).modulo(&m).unwrap(), ExactInteger::one());
    }

    #[test]
    fn gcd_lcm() {
        let g = ExactInteger::from_i64(12)
            .gcd(&ExactInteger::from_i64(-18))
            .unwrap();
        assert_eq!(g, ExactInteger::from_i64(6));
        assert_eq!(
            ExactInteger::zero().gcd(&ExactInteger::zero()),
            Err(ExactError::GcdOfZeros)
        );
        assert_eq!(
            ExactInteger::zero()
                .gcd(&ExactInteger::from_i64(4))
                .unwrap(),
            ExactInteger::from_i64(4)
        );

        let l = ExactInteger::from_i64(4)
            .lcm(&ExactInteger::from_i64(-6))
            .unwrap();
        assert_eq!(l, ExactInteger::from_i64(12));
        assert_eq!(
            ExactInteger::from_i64(4).lcm(&ExactInteger::zero()),
            Err(ExactError::LcmOfZero)
        );
    }

    #[test]
    fn powers() {
        assert_eq!(ExactInteger::from_i64(3).pow(4), ExactInteger::from_i64(81));
        assert_eq!(ExactInteger::from_i64(0).pow(0), ExactInteger::one());
        let big = ExactInteger::from_i64(10).pow(25);
        assert!(matches!(big, ExactInteger::Arbitrary(_)));
        assert_eq!(big.to_string(), "10000000000000000000000000");
    }

    #[test]
    fn roots() {
        let (r, rem) = ExactInteger::from_i64(10).root_rem(2).unwrap();
        assert_eq!(r, ExactInteger::from_i64(3));
        assert_eq!(rem, ExactInteger::from_i64(1));

        let (r, rem) = ExactInteger::from_i64(-27).root_rem(3).unwrap();
        assert_eq!(r, ExactInteger::from_i64(-3));
        assert_eq!(rem, ExactInteger::zero());

        let (r, rem) = ExactInteger::from_i64(i64::MAX).root_rem(2).unwrap();
        assert_eq!(r, ExactInteger::from_i64(3037000499));
        assert_eq!(&rem + &(&r * &r), ExactInteger::from_i64(i64::MAX));

        assert_eq!(
            ExactInteger::from_i64(-4).root_rem(2),
            Err(ExactError::EvenRootOfNegative)
        );
        assert_eq!(
            ExactInteger::from_i64(4).root_rem(0),
            Err(ExactError::ZerothRoot)
        );
    }

    #[test]
    fn primality() {
        assert!(ExactInteger::from_i64(2).is_prime());
        assert!(ExactInteger::from_i64(3).is_prime());
        assert!(ExactInteger::from_i64(541).is_prime());
        assert!(ExactInteger::from_i64(2147483647).is_prime());
        assert!(!ExactInteger::from_i64(543).is_prime());
        assert!(!ExactInteger::from_i64(1).is_prime());
        assert!(!ExactInteger::from_i64(0).is_prime());
        assert!(!ExactInteger::from_i64(-7).is_prime());
        assert!(!ExactInteger::from_i64(561).is_prime());
    }

    #[test]
    fn factorization() {
        let f = ExactInteger::from_i64(360).prime_factorization().unwrap();
        let expected: Vec<(ExactInteger, u32)> = vec![
            (ExactInteger::from_i64(2), 3),
            (ExactInteger::from_i64(3), 2),
            (ExactInteger::from_i64(5), 1),
        ];
        assert_eq!(f.into_vec(), expected);

        assert!(ExactInteger::one()
            .prime_factorization()
            .unwrap()
            .is_empty());
        assert_eq!(
            ExactInteger::zero().prime_factorization(),
            Err(ExactError::FactorizationOfZero)
        );

        // a composite whose factors both lie above the small-prime table
        let f = ExactInteger::from_i64(547 * 557)
            .prime_factorization()
            .unwrap();
        assert_eq!(
            f.into_vec(),
            vec![
                (ExactInteger::from_i64(547), 1),
                (ExactInteger::from_i64(557), 1)
            ]
        );
    }

    #[test]
    fn divisor_lists() {
        let d = ExactInteger::from_i64(12).divisors().unwrap();
        let expected: Vec<ExactInteger> = [1i64, 2, 3, 4, 6, 12]
            .iter()
            .map(|&v| ExactInteger::from_i64(v))
            .collect();
        assert_eq!(d, expected);
        assert_eq!(ExactInteger::from_i64(-12).divisors().unwrap(), expected);
        assert!(ExactInteger::zero().divisors().is_err());
    }

    #[test]
    fn radix_rendering() {
        assert_eq!(
            ExactInteger::from_i64(255).to_radix_string(16).unwrap(),
            "ff"
        );
        assert_eq!(
            ExactInteger::from_i64(-6).to_radix_string(2).unwrap(),
            "-110"
        );
        let big = ExactInteger::from_i64(16).pow(20);
        assert_eq!(big.to_radix_string(16).unwrap(), "100000000000000000000");
        assert_eq!(
            ExactInteger::one().to_radix_string(37),
            Err(ExactError::RadixOutOfRange(37))
        );
    }

    #[test]
    fn parsing() {
        assert_eq!(
            "42".parse::<ExactInteger>().unwrap(),
            ExactInteger::from_i64(42)
        );
        let big: ExactInteger = "123456789012345678901234567890".parse().unwrap();
        assert!(matches!(big, ExactInteger::Arbitrary(_)));
        assert_eq!(big.to_string(), "123456789012345678901234567890");
        assert!("12a".parse::<ExactInteger>().is_err());
    }

    #[test]
    fn ordering() {
        let mut v = vec![
            ExactInteger::from_i64(10),
            &ExactInteger::from_i64(i64::MAX) + &ExactInteger::one(),
            ExactInteger::from_i64(-3),
            ExactInteger::from_i64(i64::MIN),
        ];
        v.sort();
        assert_eq!(v[0], ExactInteger::from_i64(i64::MIN));
        assert_eq!(v[1], ExactInteger::from_i64(-3));
        assert_eq!(v[2], ExactInteger::from_i64(10));
        assert!(matches!(v[3], ExactInteger::Arbitrary(_)));
    }

    #[test]
    fn ring_fused_ops() {
        let mut acc = &ExactInteger::from_i64(i64::MAX) + &ExactInteger::one();
        Z.add_mul_assign(
            &mut acc,
            &ExactInteger::from_i64(2),
            &ExactInteger::from_i64(3),
        );
        let expected =
            &(&ExactInteger::from_i64(i64::MAX) + &ExactInteger::one()) + &ExactInteger::from_i64(6);
        assert_eq!(acc, expected);

        let mut acc = ExactInteger::from_i64(100);
        Z.sub_mul_assign(
            &mut acc,
            &ExactInteger::from_i64(7),
            &ExactInteger::from_i64(3),
        );
        assert_eq!(acc, ExactInteger::from_i64(79));
    }
}
