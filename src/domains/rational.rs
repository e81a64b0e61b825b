//! Exact rational numbers and the union of integers and fractions.
//!
//! A [Rational] is always kept in canonical form: the denominator is
//! positive, numerator and denominator share no factor, and a whole value
//! has denominator one. [ExactNumber] layers the disjoint-form union on
//! top: a value is either an integer or a fraction whose denominator
//! exceeds one, never both.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use rug::Rational as MultiPrecisionRational;

use crate::domains::integer::{ExactInteger, IntegerRing, MultiPrecisionInteger, Z};
use crate::domains::{EuclideanDomain, ExactValue, Field, InternalOrdering, Ring};
use crate::error::ExactError;
use crate::printer::PrintOptions;

/// The field of rational numbers.
pub type Q = RationalField;
/// The field of rational numbers.
pub const Q: RationalField = RationalField::new(Z);

/// The field of rational numbers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalField {
    ring: IntegerRing,
}

impl Default for RationalField {
    fn default() -> Self {
        Self::new(Z)
    }
}

impl RationalField {
    pub const fn new(ring: IntegerRing) -> RationalField {
        RationalField { ring }
    }
}

/// A rational number in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rational {
    numerator: ExactInteger,
    denominator: ExactInteger,
}

impl Rational {
    /// Build the canonical fraction `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Fails on a zero denominator.
    pub fn new(
        numerator: ExactInteger,
        denominator: ExactInteger,
    ) -> Result<Rational, ExactError> {
        if denominator.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        Ok(Rational::reduced(numerator, denominator))
    }

    /// Canonicalize: divide out the gcd and move the sign to the numerator.
    /// The denominator must be non-zero.
    pub(crate) fn reduced(mut numerator: ExactInteger, mut denominator: ExactInteger) -> Rational {
        debug_assert!(!denominator.is_zero());
        let g = numerator.gcd_raw(&denominator);
        if !g.is_one() {
            numerator = &numerator / &g;
            denominator = &denominator / &g;
        }
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Rational {
            numerator,
            denominator,
        }
    }

    pub fn zero() -> Rational {
        Rational {
            numerator: ExactInteger::zero(),
            denominator: ExactInteger::one(),
        }
    }

    pub fn one() -> Rational {
        Rational {
            numerator: ExactInteger::one(),
            denominator: ExactInteger::one(),
        }
    }

    pub fn numerator(&self) -> ExactInteger {
        self.numerator.clone()
    }

    pub fn denominator(&self) -> ExactInteger {
        self.denominator.clone()
    }

    pub fn numerator_ref(&self) -> &ExactInteger {
        &self.numerator
    }

    pub fn denominator_ref(&self) -> &ExactInteger {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// A canonical fraction is whole exactly when its denominator is one.
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn abs(&self) -> Rational {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    pub fn neg(&self) -> Rational {
        Q.neg(self)
    }

    pub fn pow(&self, e: u64) -> Rational {
        Q.pow(self, e)
    }

    /// Raise to any integer exponent; a negative exponent inverts first.
    ///
    /// # Errors
    ///
    /// Fails when zero is raised to a negative exponent.
    pub fn pow_signed(&self, e: i64) -> Result<Rational, ExactError> {
        if e >= 0 {
            Ok(self.pow(e as u64))
        } else {
            Ok(self.inv()?.pow(e.unsigned_abs()))
        }
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Fails for zero.
    pub fn inv(&self) -> Result<Rational, ExactError> {
        if self.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        Ok(Q.inv(self))
    }

    pub fn gcd(&self, other: &Rational) -> Rational {
        Q.gcd(self, other)
    }

    /// Round toward zero.
    pub fn floor(&self) -> ExactInteger {
        &self.numerator / &self.denominator
    }

    /// Round away from zero.
    pub fn ceil(&self) -> ExactInteger {
        if self.is_negative() {
            &((&self.numerator + &ExactInteger::one()) / &self.denominator) - &ExactInteger::one()
        } else {
            &((&self.numerator - &ExactInteger::one()) / &self.denominator) + &ExactInteger::one()
        }
    }

    /// Round to the nearest integer, halves away from zero.
    pub fn round_to_nearest_integer(&self) -> ExactInteger {
        if self.is_negative() {
            (self - &(1, 2).into()).floor()
        } else {
            (self + &(1, 2).into()).floor()
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.clone().to_multi_prec().to_f64()
    }

    pub fn to_multi_prec(self) -> MultiPrecisionRational {
        MultiPrecisionRational::from((
            self.numerator.to_multi_prec(),
            self.denominator.to_multi_prec(),
        ))
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

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl<T: Into<ExactInteger>> From<T> for Rational {
    #[inline]
    fn from(value: T) -> Self {
        Rational {
            numerator: value.into(),
            denominator: ExactInteger::one(),
        }
    }
}

impl From<&ExactInteger> for Rational {
    fn from(value: &ExactInteger) -> Self {
        Rational {
            numerator: value.clone(),
            denominator: ExactInteger::one(),
        }
    }
}

impl<T: Into<ExactInteger>> From<(T, T)> for Rational {
    /// Build the canonical fraction `num / den`.
    ///
    /// # Panics
    ///
    /// Panics on a zero denominator; use [Rational::new] for the checked
    /// form.
    #[inline]
    fn from((num, den): (T, T)) -> Self {
        let den = den.into();
        if den.is_zero() {
            panic!("Cannot divide by zero");
        }
        Rational::reduced(num.into(), den)
    }
}

impl From<MultiPrecisionRational> for Rational {
    fn from(value: MultiPrecisionRational) -> Self {
        // rug keeps rationals canonical, no second reduction needed
        let (num, den) = value.into_numer_denom();
        Rational {
            numerator: num.into(),
            denominator: den.into(),
        }
    }
}

impl From<f64> for Rational {
    /// Convert a finite floating point number to its exact rational
    /// equivalent.
    ///
    /// # Panics
    ///
    /// Panics on infinities and NaN.
    fn from(f: f64) -> Self {
        assert!(f.is_finite());

        let bits: u64 = f.to_bits();
        let sign: i8 = if bits >> 63 == 0 { 1 } else { -1 };
        let mut exponent: i16 = ((bits >> 52) & 0x7ff) as i16;
        let mantissa = if exponent == 0 {
            (bits & 0xfffffffffffff) << 1
        } else {
            (bits & 0xfffffffffffff) | 0x10000000000000
        };
        // exponent bias and mantissa shift
        exponent -= 1023 + 52;

        let signed_mantissa = ExactInteger::from_i64(sign as i64 * mantissa as i64);
        if exponent < 0 {
            // superfluous factors of two divide out in the reduction
            Rational::reduced(
                signed_mantissa,
                ExactInteger::from_i64(2).pow(-exponent as u64),
            )
        } else {
            Rational {
                numerator: &signed_mantissa * &ExactInteger::from_i64(2).pow(exponent as u64),
                denominator: ExactInteger::one(),
            }
        }
    }
}

impl FromStr for Rational {
    type Err = ExactError;

    /// Parse `n`, `n/d` or a decimal such as `-1.25`.
    fn from_str(s: &str) -> Result<Self, ExactError> {
        let s = s.trim();
        if let Some((n, d)) = s.split_once('/') {
            let numerator = n.trim().parse::<ExactInteger>()?;
            let denominator = d.trim().parse::<ExactInteger>()?;
            return Rational::new(numerator, denominator);
        }
        if let Some((whole, frac)) = s.split_once('.') {
            let negative = whole.starts_with('-');
            let whole_digits = whole.strip_prefix(['-', '+']).unwrap_or(whole);
            if frac.is_empty() || !frac.bytes().all(|c| c.is_ascii_digit()) {
                return Err(ExactError::Parse(s.to_string()));
            }
            if !whole_digits.is_empty() && !whole_digits.bytes().all(|c| c.is_ascii_digit()) {
                return Err(ExactError::Parse(s.to_string()));
            }
            let whole_value = if whole_digits.is_empty() {
                ExactInteger::zero()
            } else {
                whole_digits.parse::<ExactInteger>()?
            };
            let frac_value = frac.parse::<ExactInteger>()?;
            let scale = ExactInteger::from_i64(10).pow(frac.len() as u64);
            let mut numerator = &(&whole_value * &scale) + &frac_value;
            if negative {
                numerator = -numerator;
            }
            return Ok(Rational::reduced(numerator, scale));
        }
        s.parse::<ExactInteger>().map(Rational::from)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Compare by cross multiplication; denominators are positive.
    fn cmp(&self, other: &Self) -> Ordering {
        let a = &self.numerator * &other.denominator;
        let b = &self.denominator * &other.numerator;
        a.cmp(&b)
    }
}

impl InternalOrdering for Rational {
    fn internal_cmp(&self, other: &Self) -> Ordering {
        self.numerator
            .internal_cmp(&other.numerator)
            .then_with(|| self.denominator.internal_cmp(&other.denominator))
    }
}

impl ExactValue for Rational {
    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }

    fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    fn format<W: fmt::Write>(
        &self,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> fmt::Result {
        let has_denom = !self.denominator.is_one();
        let parens = in_product && (has_denom || self.numerator.is_negative());
        if parens {
            f.write_char('(')?;
        }
        self.numerator.format(opts, false, f)?;
        if has_denom {
            f.write_char('/')?;
            self.denominator.format(opts, false, f)?;
        }
        if parens {
            f.write_char(')')?;
        }
        Ok(())
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format(&PrintOptions::default(), false, f)
    }
}

impl Display for RationalField {
    fn fmt(&self, _: &mut Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl Ring for RationalField {
    type Element = Rational;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let r = &self.ring;

        if a.denominator == b.denominator {
            let num = r.add(&a.numerator, &b.numerator);
            let g = r.gcd(&num, &a.denominator);
            if !self.ring.is_one(&g) {
                return Rational {
                    numerator: r.quot_rem(&num, &g).0,
                    denominator: r.quot_rem(&a.denominator, &g).0,
                };
            } else {
                return Rational {
                    numerator: num,
                    denominator: a.denominator.clone(),
                };
            }
        }

        let denom_gcd = r.gcd(&a.denominator, &b.denominator);

        let mut a_den_red = Cow::Borrowed(&a.denominator);
        let mut b_den_red = Cow::Borrowed(&b.denominator);

        if !r.is_one(&denom_gcd) {
            a_den_red = Cow::Owned(r.quot_rem(&a.denominator, &denom_gcd).0);
            b_den_red = Cow::Owned(r.quot_rem(&b.denominator, &denom_gcd).0);
        }

        let num1 = r.mul(&a.numerator, &b_den_red);
        let num2 = r.mul(&b.numerator, &a_den_red);
        let mut num = r.add(&num1, &num2);
        let mut den = r.mul(b_den_red.as_ref(), &a.denominator);

        // only the shared denominator factor can still divide the sum
        let g = r.gcd(&num, &denom_gcd);

        if !r.is_one(&g) {
            num = r.quot_rem(&num, &g).0;
            den = r.quot_rem(&den, &g).0;
        }

        Rational {
            numerator: num,
            denominator: den,
        }
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.neg(b))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let r = &self.ring;
        let gcd1 = r.gcd(&a.numerator, &b.denominator);
        let gcd2 = r.gcd(&a.denominator, &b.numerator);

        if r.is_one(&gcd1) {
            if r.is_one(&gcd2) {
                Rational {
                    numerator: r.mul(&a.numerator, &b.numerator),
                    denominator: r.mul(&a.denominator, &b.denominator),
                }
            } else {
                Rational {
                    numerator: r.mul(&a.numerator, &r.quot_rem(&b.numerator, &gcd2).0),
                    denominator: r.mul(&r.quot_rem(&a.denominator, &gcd2).0, &b.denominator),
                }
            }
        } else if r.is_one(&gcd2) {
            Rational {
                numerator: r.mul(&r.quot_rem(&a.numerator, &gcd1).0, &b.numerator),
                denominator: r.mul(&a.denominator, &r.quot_rem(&b.denominator, &gcd1).0),
            }
        } else {
            Rational {
                numerator: r.mul(
                    &r.quot_rem(&a.numerator, &gcd1).0,
                    &r.quot_rem(&b.numerator, &gcd2).0,
                ),
                denominator: r.mul(
                    &r.quot_rem(&a.denominator, &gcd2).0,
                    &r.quot_rem(&b.denominator, &gcd1).0,
                ),
            }
        }
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        self.add_assign(a, &self.mul(b, c));
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        self.sub_assign(a, &self.mul(b, c));
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Rational {
            numerator: self.ring.neg(&a.numerator),
            denominator: a.denominator.clone(),
        }
    }

    fn zero(&self) -> Self::Element {
        Rational::zero()
    }

    fn one(&self) -> Self::Element {
        Rational::one()
    }

    #[inline]
    fn nth(&self, n: i64) -> Self::Element {
        Rational {
            numerator: self.ring.nth(n),
            denominator: ExactInteger::one(),
        }
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        // lowest terms survive exponentiation
        Rational {
            numerator: self.ring.pow(&b.numerator, e),
            denominator: self.ring.pow(&b.denominator, e),
        }
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
        if b.is_zero() {
            return None;
        }
        Some(self.div(a, b))
    }
}

impl EuclideanDomain for RationalField {
    fn rem(&self, _: &Self::Element, _: &Self::Element) -> Self::Element {
        Rational::zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(a, b), Rational::zero())
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let r = &self.ring;
        let gcd_num = r.gcd(&a.numerator, &b.numerator);
        let gcd_den = r.gcd(&a.denominator, &b.denominator);

        let d1 = r.quot_rem(&a.denominator, &gcd_den).0;
        let lcm = r.mul(&d1, &b.denominator);

        Rational {
            numerator: gcd_num,
            denominator: lcm,
        }
    }
}

impl Field for RationalField {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.mul(a, &self.inv(b))
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.div(a, b);
    }

    /// The multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics for zero; use [Rational::inv] for the checked form.
    fn inv(&self, a: &Self::Element) -> Self::Element {
        if a.is_zero() {
            panic!("Cannot invert zero");
        }
        if a.numerator.is_negative() {
            Rational {
                numerator: -&a.denominator,
                denominator: -&a.numerator,
            }
        } else {
            Rational {
                numerator: a.denominator.clone(),
                denominator: a.numerator.clone(),
            }
        }
    }
}

impl Add<Rational> for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Self::Output {
        Q.add(&self, &other)
    }
}

impl Sub<Rational> for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Self::Output {
        Q.sub(&self, &other)
    }
}

impl Mul<Rational> for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Self::Output {
        Q.mul(&self, &other)
    }
}

impl Div<Rational> for Rational {
    type Output = Rational;

    fn div(self, other: Rational) -> Self::Output {
        Q.div(&self, &other)
    }
}

impl<'a> Add<&'a Rational> for Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Self::Output {
        Q.add(&self, other)
    }
}

impl<'a> Sub<&'a Rational> for Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Self::Output {
        Q.sub(&self, other)
    }
}

impl<'a> Mul<&'a Rational> for Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Self::Output {
        Q.mul(&self, other)
    }
}

impl<'a> Div<&'a Rational> for Rational {
    type Output = Rational;

    fn div(self, other: &'a Rational) -> Self::Output {
        Q.div(&self, other)
    }
}

impl<'a, 'b> Add<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Self::Output {
        Q.add(self, other)
    }
}

impl<'a, 'b> Sub<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Self::Output {
        Q.sub(self, other)
    }
}

impl<'a, 'b> Mul<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Self::Output {
        Q.mul(self, other)
    }
}

impl<'a, 'b> Div<&'a Rational> for &'b Rational {
    type Output = Rational;

    fn div(self, other: &'a Rational) -> Self::Output {
        Q.div(self, other)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Q.neg(&self)
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Q.neg(self)
    }
}

impl<'a> AddAssign<&'a Rational> for Rational {
    fn add_assign(&mut self, other: &'a Rational) {
        Q.add_assign(self, other);
    }
}

impl<'a> SubAssign<&'a Rational> for Rational {
    fn sub_assign(&mut self, other: &'a Rational) {
        Q.sub_assign(self, other);
    }
}

impl<'a> MulAssign<&'a Rational> for Rational {
    fn mul_assign(&mut self, other: &'a Rational) {
        Q.mul_assign(self, other);
    }
}

impl<'a> DivAssign<&'a Rational> for Rational {
    fn div_assign(&mut self, other: &'a Rational) {
        Q.div_assign(self, other);
    }
}

impl AddAssign<Rational> for Rational {
    fn add_assign(&mut self, other: Rational) {
        *self += &other;
    }
}

impl SubAssign<Rational> for Rational {
    fn sub_assign(&mut self, other: Rational) {
        *self -= &other;
    }
}

impl MulAssign<Rational> for Rational {
    fn mul_assign(&mut self, other: Rational) {
        *self *= &other;
    }
}

impl DivAssign<Rational> for Rational {
    fn div_assign(&mut self, other: Rational) {
        *self /= &other;
    }
}

/// A number in its leanest exact shape.
///
/// The variants are disjoint: a fraction that reduces to a whole value is
/// held as `Integer`, so the `Rational` variant always carries a
/// denominator greater than one. [from_rational](Self::from_rational)
/// enforces this; equality and hashing are then structural.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExactNumber {
    Integer(ExactInteger),
    Rational(Rational),
}

impl ExactNumber {
    pub fn zero() -> ExactNumber {
        ExactNumber::Integer(ExactInteger::zero())
    }

    pub fn one() -> ExactNumber {
        ExactNumber::Integer(ExactInteger::one())
    }

    pub fn from_integer(v: ExactInteger) -> ExactNumber {
        ExactNumber::Integer(v)
    }

    pub fn from_i64(v: i64) -> ExactNumber {
        ExactNumber::Integer(ExactInteger::from_i64(v))
    }

    pub fn from_big(v: MultiPrecisionInteger) -> ExactNumber {
        ExactNumber::Integer(ExactInteger::from_big(v))
    }

    /// The exact value of a finite float.
    ///
    /// # Panics
    ///
    /// Panics on infinities and NaN.
    pub fn from_f64(value: f64) -> ExactNumber {
        ExactNumber::from_rational(Rational::from(value))
    }

    /// The canonicalizing constructor: a fraction with denominator one
    /// collapses into the integer variant.
    pub fn from_rational(r: Rational) -> ExactNumber {
        if r.denominator.is_one() {
            ExactNumber::Integer(r.numerator)
        } else {
            ExactNumber::Rational(r)
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            ExactNumber::Integer(v) => v.is_zero(),
            // a fraction with denominator above one is never whole
            ExactNumber::Rational(_) => false,
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            ExactNumber::Integer(v) => v.is_one(),
            ExactNumber::Rational(_) => false,
        }
    }

    pub fn is_negative(&self) -> bool {
        match self {
            ExactNumber::Integer(v) => v.is_negative(),
            ExactNumber::Rational(r) => r.is_negative(),
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, ExactNumber::Integer(_))
    }

    /// Widen to a fraction; total, an integer becomes `v / 1`.
    pub fn to_rational(&self) -> Rational {
        match self {
            ExactNumber::Integer(v) => Rational::from(v),
            ExactNumber::Rational(r) => r.clone(),
        }
    }

    pub fn numerator(&self) -> ExactInteger {
        match self {
            ExactNumber::Integer(v) => v.clone(),
            ExactNumber::Rational(r) => r.numerator(),
        }
    }

    pub fn denominator(&self) -> ExactInteger {
        match self {
            ExactNumber::Integer(_) => ExactInteger::one(),
            ExactNumber::Rational(r) => r.denominator(),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            ExactNumber::Integer(v) => v.to_f64(),
            ExactNumber::Rational(r) => r.to_f64(),
        }
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Fails on a zero divisor.
    pub fn checked_div(&self, other: &ExactNumber) -> Result<ExactNumber, ExactError> {
        if other.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        Ok(ExactNumber::from_rational(
            Q.div(&self.to_rational(), &other.to_rational()),
        ))
    }

    /// Raise to any integer exponent.
    ///
    /// # Errors
    ///
    /// Fails when zero is raised to a negative exponent.
    pub fn pow_signed(&self, e: i64) -> Result<ExactNumber, ExactError> {
        Ok(ExactNumber::from_rational(
            self.to_rational().pow_signed(e)?,
        ))
    }

    pub fn abs(&self) -> ExactNumber {
        match self {
            ExactNumber::Integer(v) => ExactNumber::Integer(v.abs()),
            ExactNumber::Rational(r) => ExactNumber::Rational(r.abs()),
        }
    }

    /// Render in the given radix.
    ///
    /// # Errors
    ///
    /// Fails when the radix is outside `2..=36`.
    pub fn to_radix_string(&self, radix: u32) -> Result<String, ExactError> {
        match self {
            ExactNumber::Integer(v) => v.to_radix_string(radix),
            ExactNumber::Rational(r) => r.to_radix_string(radix),
        }
    }
}

impl Default for ExactNumber {
    fn default() -> Self {
        ExactNumber::zero()
    }
}

impl From<ExactInteger> for ExactNumber {
    fn from(v: ExactInteger) -> Self {
        ExactNumber::Integer(v)
    }
}

impl From<i64> for ExactNumber {
    fn from(v: i64) -> Self {
        ExactNumber::Integer(ExactInteger::from_i64(v))
    }
}

impl From<Rational> for ExactNumber {
    fn from(r: Rational) -> Self {
        ExactNumber::from_rational(r)
    }
}

impl FromStr for ExactNumber {
    type Err = ExactError;

    fn from_str(s: &str) -> Result<Self, ExactError> {
        s.parse::<Rational>().map(ExactNumber::from_rational)
    }
}

impl PartialEq<Rational> for ExactNumber {
    /// Value equivalence across the two families; both sides are in lowest
    /// terms, so the comparison is componentwise.
    fn eq(&self, other: &Rational) -> bool {
        match self {
            ExactNumber::Integer(v) => {
                other.denominator_ref().is_one() && other.numerator_ref() == v
            }
            ExactNumber::Rational(r) => r == other,
        }
    }
}

impl PartialEq<ExactNumber> for Rational {
    fn eq(&self, other: &ExactNumber) -> bool {
        other == self
    }
}

impl PartialOrd for ExactNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExactNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ExactNumber::Integer(a), ExactNumber::Integer(b)) => a.cmp(b),
            (ExactNumber::Integer(a), ExactNumber::Rational(b)) => {
                (a * b.denominator_ref()).cmp(b.numerator_ref())
            }
            (ExactNumber::Rational(a), ExactNumber::Integer(b)) => {
                a.numerator_ref().cmp(&(b * a.denominator_ref()))
            }
            (ExactNumber::Rational(a), ExactNumber::Rational(b)) => a.cmp(b),
        }
    }
}

impl InternalOrdering for ExactNumber {
    fn internal_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ExactNumber::Integer(a), ExactNumber::Integer(b)) => a.internal_cmp(b),
            (ExactNumber::Rational(a), ExactNumber::Rational(b)) => a.internal_cmp(b),
            (ExactNumber::Integer(_), ExactNumber::Rational(_)) => Ordering::Less,
            (ExactNumber::Rational(_), ExactNumber::Integer(_)) => Ordering::Greater,
        }
    }
}

impl ExactValue for ExactNumber {
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
        match self {
            ExactNumber::Integer(v) => v.format(opts, in_product, f),
            ExactNumber::Rational(r) => r.format(opts, in_product, f),
        }
    }
}

impl Display for ExactNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format(&PrintOptions::default(), false, f)
    }
}

impl<'a, 'b> Add<&'b ExactNumber> for &'a ExactNumber {
    type Output = ExactNumber;

    fn add(self, rhs: &'b ExactNumber) -> ExactNumber {
        match (self, rhs) {
            (ExactNumber::Integer(a), ExactNumber::Integer(b)) => ExactNumber::Integer(a + b),
            _ => ExactNumber::from_rational(Q.add(&self.to_rational(), &rhs.to_rational())),
        }
    }
}

impl<'a, 'b> Sub<&'b ExactNumber> for &'a ExactNumber {
    type Output = ExactNumber;

    fn sub(self, rhs: &'b ExactNumber) -> ExactNumber {
        match (self, rhs) {
            (ExactNumber::Integer(a), ExactNumber::Integer(b)) => ExactNumber::Integer(a - b),
            _ => ExactNumber::from_rational(Q.sub(&self.to_rational(), &rhs.to_rational())),
        }
    }
}

impl<'a, 'b> Mul<&'b ExactNumber> for &'a ExactNumber {
    type Output = ExactNumber;

    fn mul(self, rhs: &'b ExactNumber) -> ExactNumber {
        match (self, rhs) {
            (ExactNumber::Integer(a), ExactNumber::Integer(b)) => ExactNumber::Integer(a * b),
            _ => ExactNumber::from_rational(Q.mul(&self.to_rational(), &rhs.to_rational())),
        }
    }
}

impl<'a, 'b> Div<&'b ExactNumber> for &'a ExactNumber {
    type Output = ExactNumber;

    /// Exact division.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor; use [ExactNumber::checked_div] for the
    /// checked form.
    fn div(self, rhs: &'b ExactNumber) -> ExactNumber {
        if rhs.is_zero() {
            panic!("Cannot divide by zero");
        }
        ExactNumber::from_rational(Q.div(&self.to_rational(), &rhs.to_rational()))
    }
}

macro_rules! forward_number_binop {
    ($($op:ident, $f:ident);* $(;)?) => {
        $(
            impl<'a> $op<&'a ExactNumber> for ExactNumber {
                type Output = ExactNumber;

                fn $f(self, rhs: &'a ExactNumber) -> ExactNumber {
                    (&self).$f(rhs)
                }
            }

            impl<'a> $op<ExactNumber> for &'a ExactNumber {
                type Output = ExactNumber;

                fn $f(self, rhs: ExactNumber) -> ExactNumber {
                    self.$f(&rhs)
                }
            }

            impl $op<ExactNumber> for ExactNumber {
                type Output = ExactNumber;

                fn $f(self, rhs: ExactNumber) -> ExactNumber {
                    (&self).$f(&rhs)
                }
            }
        )*
    };
}

forward_number_binop!(Add, add; Sub, sub; Mul, mul; Div, div);

impl Neg for &ExactNumber {
    type Output = ExactNumber;

    fn neg(self) -> ExactNumber {
        match self {
            ExactNumber::Integer(v) => ExactNumber::Integer(-v),
            // negation keeps the denominator, the variant stands
            ExactNumber::Rational(r) => ExactNumber::Rational(r.neg()),
        }
    }
}

impl Neg for ExactNumber {
    type Output = ExactNumber;

    fn neg(self) -> ExactNumber {
        -&self
    }
}
