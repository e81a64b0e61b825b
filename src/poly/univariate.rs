//! Dense univariate polynomials with a division engine that routes to
//! scalar, synthetic or long division based on the divisor shape.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use ahash::AHasher;

use crate::domains::{ExactValue, Field, InternalOrdering, Ring, RingPrinter};
use crate::error::ExactError;
use crate::poly::{check_degree, check_length};
use crate::printer::PrintOptions;

/// A dense univariate polynomial. `coefficients[i]` is the coefficient of
/// `x^i`; the sequence is never empty and its last entry is non-zero unless
/// the polynomial is zero, which is stored as a single zero coefficient.
#[derive(Clone)]
pub struct Polynomial<R: Ring> {
    pub coefficients: Vec<R::Element>,
    pub ring: R,
}

impl<R: Ring> fmt::Debug for Polynomial<R> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first = true;
        write!(f, "[ ")?;
        for c in &self.coefficients {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{{ {:?} }}", c)?;
        }
        write!(f, " ]")
    }
}

impl<R: Ring> Display for Polynomial<R> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.format(&PrintOptions::default(), f)
    }
}

impl<R: Ring> Polynomial<R> {
    /// The zero polynomial over `ring`.
    #[inline]
    pub fn new(ring: &R) -> Self {
        Polynomial {
            coefficients: vec![ring.zero()],
            ring: ring.clone(),
        }
    }

    /// The zero polynomial over the same ring.
    #[inline]
    pub fn zero(&self) -> Self {
        Polynomial {
            coefficients: vec![self.ring.zero()],
            ring: self.ring.clone(),
        }
    }

    /// The unit polynomial over the same ring.
    #[inline]
    pub fn one(&self) -> Self {
        Polynomial {
            coefficients: vec![self.ring.one()],
            ring: self.ring.clone(),
        }
    }

    /// A constant polynomial over the same ring.
    #[inline]
    pub fn constant(&self, coeff: R::Element) -> Self {
        Polynomial {
            coefficients: vec![coeff],
            ring: self.ring.clone(),
        }
    }

    /// A single-term polynomial over the same ring.
    ///
    /// # Errors
    ///
    /// Fails when `exponent` exceeds [MAX_DEGREE](crate::poly::MAX_DEGREE).
    pub fn monomial(&self, coeff: R::Element, exponent: usize) -> Result<Self, ExactError> {
        check_degree(exponent)?;
        if coeff.is_zero() {
            return Ok(self.zero());
        }
        let mut coefficients = vec![self.ring.zero(); exponent + 1];
        coefficients[exponent] = coeff;
        Ok(Polynomial {
            coefficients,
            ring: self.ring.clone(),
        })
    }

    /// Build from an ascending coefficient sequence, trimming trailing
    /// zeros down to the canonical form.
    ///
    /// # Errors
    ///
    /// Fails when the sequence is empty or longer than
    /// [MAX_LENGTH](crate::poly::MAX_LENGTH).
    pub fn from_coefficients(
        ring: &R,
        mut coefficients: Vec<R::Element>,
    ) -> Result<Self, ExactError> {
        check_length(coefficients.len())?;
        while coefficients.len() > 1 && coefficients[coefficients.len() - 1].is_zero() {
            coefficients.pop();
        }
        Ok(Polynomial {
            coefficients,
            ring: ring.clone(),
        })
    }

    /// The number of stored coefficients, one more than the degree.
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The coefficient of `x^exponent`, zero past the stored length.
    ///
    /// # Errors
    ///
    /// Fails when `exponent` exceeds [MAX_DEGREE](crate::poly::MAX_DEGREE).
    pub fn coefficient(&self, exponent: usize) -> Result<R::Element, ExactError> {
        check_degree(exponent)?;
        Ok(match self.coefficients.get(exponent) {
            Some(c) => c.clone(),
            None => self.ring.zero(),
        })
    }

    /// The constant term.
    #[inline]
    pub fn get_constant(&self) -> R::Element {
        self.coefficients[0].clone()
    }

    /// The leading coefficient, non-zero unless the polynomial is zero.
    #[inline]
    pub fn lcoeff(&self) -> R::Element {
        self.coefficients[self.coefficients.len() - 1].clone()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_one()
    }

    /// Returns true if the polynomial is constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coefficients.len() == 1
    }

    /// Returns true if at most one coefficient is non-zero.
    pub fn is_monomial(&self) -> bool {
        self.coefficients.iter().filter(|c| !c.is_zero()).count() <= 1
    }

    /// Multiply every coefficient by `coeff`. A unit multiplier returns the
    /// polynomial unchanged, a zero multiplier collapses it to zero.
    pub fn mul_coeff(mut self, coeff: &R::Element) -> Self {
        if coeff.is_one() {
            return self;
        }
        if coeff.is_zero() {
            return self.zero();
        }
        let ring = self.ring.clone();
        for c in &mut self.coefficients {
            if !c.is_zero() {
                ring.mul_assign(c, coeff);
            }
        }
        self
    }

    /// Multiply, validating the result length.
    ///
    /// # Errors
    ///
    /// Fails when the product needs more than
    /// [MAX_LENGTH](crate::poly::MAX_LENGTH) coefficients.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self, ExactError> {
        if self.is_zero() || rhs.is_zero() {
            return Ok(self.zero());
        }
        if self.is_constant() {
            return Ok(rhs.clone().mul_coeff(&self.coefficients[0]));
        }
        if rhs.is_constant() {
            return Ok(self.clone().mul_coeff(&rhs.coefficients[0]));
        }

        let length = self.len() + rhs.len() - 1;
        check_length(length)?;

        let mut coefficients = vec![self.ring.zero(); length];
        for (e1, c1) in self.coefficients.iter().enumerate() {
            if c1.is_zero() {
                continue;
            }
            for (e2, c2) in rhs.coefficients.iter().enumerate() {
                if !c2.is_zero() {
                    self.ring.add_mul_assign(&mut coefficients[e1 + e2], c1, c2);
                }
            }
        }
        Ok(Polynomial {
            coefficients,
            ring: self.ring.clone(),
        })
    }

    /// The formal derivative.
    pub fn derivative(&self) -> Self {
        if self.is_constant() {
            return self.zero();
        }
        let mut coefficients = Vec::with_capacity(self.len() - 1);
        for (e, c) in self.coefficients.iter().enumerate().skip(1) {
            coefficients.push(self.ring.mul(c, &self.ring.nth(e as i64)));
        }
        Polynomial {
            coefficients,
            ring: self.ring.clone(),
        }
    }

    /// One Horner sweep at `point`: the intermediate value sequence in
    /// ascending order and the final accumulator. The sequence is the
    /// quotient against the monic linear divisor whose root is `point`, and
    /// the accumulator is the evaluation.
    fn horner_sweep(&self, point: &R::Element) -> (Vec<R::Element>, R::Element) {
        let mut sweep = Vec::with_capacity(self.len() - 1);
        let mut acc = self.lcoeff();
        for c in self.coefficients.iter().rev().skip(1) {
            sweep.push(acc.clone());
            let mut next = c.clone();
            self.ring.add_mul_assign(&mut next, point, &acc);
            acc = next;
        }
        sweep.reverse();
        (sweep, acc)
    }

    /// Evaluate at `point` with Horner's rule.
    pub fn evaluate(&self, point: &R::Element) -> R::Element {
        self.horner_sweep(point).1
    }

    /// Write the polynomial as a sum of `coefficient*x^exponent` terms,
    /// zero coefficients skipped. Exponents stay decimal in every radix.
    pub fn format<W: fmt::Write>(&self, opts: &PrintOptions, f: &mut W) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (e, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, "+")?;
            }
            first = false;
            write!(
                f,
                "{}*x^{}",
                RingPrinter {
                    ring: &self.ring,
                    element: c,
                    opts: *opts,
                    in_product: true
                },
                e
            )?;
        }
        Ok(())
    }

    /// Render in the given radix.
    ///
    /// # Errors
    ///
    /// Fails when the radix is outside `2..=36`.
    pub fn to_radix_string(&self, radix: u32) -> Result<String, ExactError> {
        let opts = PrintOptions::with_radix(radix)?;
        let mut s = String::new();
        self.format(&opts, &mut s)
            .expect("could not write to string");
        Ok(s)
    }
}

impl<R: Ring> PartialEq for Polynomial<R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl<R: Ring> Eq for Polynomial<R> {}

impl<R: Ring> Hash for Polynomial<R> {
    /// The product of the per-term coefficient hashes, mixed with the
    /// length. Zero factors are replaced by a position marker so they
    /// cannot erase the other terms.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut product: u64 = 1;
        for (e, c) in self.coefficients.iter().enumerate() {
            let mut term = AHasher::default();
            c.hash(&mut term);
            let h = term.finish();
            product = product.wrapping_mul(if h == 0 { e as u64 + 1 } else { h });
        }
        state.write_u64(product);
        state.write_usize(self.coefficients.len());
    }
}

impl<R: Ring> PartialOrd for Polynomial<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Ring> Ord for Polynomial<R> {
    /// Shorter sequences sort first; equal lengths compare coefficients
    /// from the highest degree down and the first mismatch decides.
    fn cmp(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| {
            for (a, b) in self
                .coefficients
                .iter()
                .rev()
                .zip(other.coefficients.iter().rev())
            {
                let ord = a.internal_cmp(b);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            Ordering::Equal
        })
    }
}

impl<R: Ring> InternalOrdering for Polynomial<R> {
    fn internal_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl<'a, 'b, R: Ring> Add<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn add(self, rhs: &'a Polynomial<R>) -> Polynomial<R> {
        let ring = self.ring.clone();
        if self.len() == rhs.len() {
            // walk down while the leading terms cancel, so the result is
            // allocated at its final length
            let mut top = self.len();
            while top > 1 {
                let s = ring.add(&self.coefficients[top - 1], &rhs.coefficients[top - 1]);
                if !s.is_zero() {
                    break;
                }
                top -= 1;
            }
            let mut coefficients = Vec::with_capacity(top);
            for i in 0..top {
                coefficients.push(ring.add(&self.coefficients[i], &rhs.coefficients[i]));
            }
            return Polynomial { coefficients, ring };
        }

        let (long, short) = if self.len() > rhs.len() {
            (self, rhs)
        } else {
            (rhs, self)
        };
        let mut coefficients = Vec::with_capacity(long.len());
        for (i, c) in short.coefficients.iter().enumerate() {
            coefficients.push(ring.add(&long.coefficients[i], c));
        }
        coefficients.extend_from_slice(&long.coefficients[short.len()..]);
        Polynomial { coefficients, ring }
    }
}

impl<R: Ring> Add for Polynomial<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        (&self) + (&rhs)
    }
}

impl<'a, 'b, R: Ring> Sub<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    fn sub(self, rhs: &'a Polynomial<R>) -> Polynomial<R> {
        let ring = self.ring.clone();
        if self.len() == rhs.len() {
            let mut top = self.len();
            while top > 1 {
                let d = ring.sub(&self.coefficients[top - 1], &rhs.coefficients[top - 1]);
                if !d.is_zero() {
                    break;
                }
                top -= 1;
            }
            let mut coefficients = Vec::with_capacity(top);
            for i in 0..top {
                coefficients.push(ring.sub(&self.coefficients[i], &rhs.coefficients[i]));
            }
            return Polynomial { coefficients, ring };
        }

        let mut coefficients = Vec::with_capacity(self.len().max(rhs.len()));
        if self.len() > rhs.len() {
            for (i, c) in rhs.coefficients.iter().enumerate() {
                coefficients.push(ring.sub(&self.coefficients[i], c));
            }
            coefficients.extend_from_slice(&self.coefficients[rhs.len()..]);
        } else {
            for (i, c) in self.coefficients.iter().enumerate() {
                coefficients.push(ring.sub(c, &rhs.coefficients[i]));
            }
            for c in &rhs.coefficients[self.len()..] {
                coefficients.push(ring.neg(c));
            }
        }
        Polynomial { coefficients, ring }
    }
}

impl<R: Ring> Sub for Polynomial<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        (&self) - (&rhs)
    }
}

impl<R: Ring> Neg for Polynomial<R> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in &mut self.coefficients {
            *c = self.ring.neg(c);
        }
        self
    }
}

impl<'a, 'b, R: Ring> Mul<&'a Polynomial<R>> for &'b Polynomial<R> {
    type Output = Polynomial<R>;

    /// # Panics
    ///
    /// Panics when the product length leaves range;
    /// [try_mul](Polynomial::try_mul) is the checked variant.
    #[inline]
    fn mul(self, rhs: &'a Polynomial<R>) -> Polynomial<R> {
        match self.try_mul(rhs) {
            Ok(p) => p,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<R: Ring> Mul for Polynomial<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        (&self) * (&rhs)
    }
}

impl<'a, R: Ring> Mul<&'a Polynomial<R>> for Polynomial<R> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: &'a Polynomial<R>) -> Self {
        (&self) * rhs
    }
}

impl<F: Field> Polynomial<F> {
    /// Divide every coefficient by `coeff`.
    ///
    /// # Errors
    ///
    /// Fails on a zero divisor.
    pub fn div_coeff(self, coeff: &F::Element) -> Result<Self, ExactError> {
        if coeff.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        Ok(self.div_coeff_raw(coeff))
    }

    /// The divisor must be non-zero.
    fn div_coeff_raw(mut self, coeff: &F::Element) -> Self {
        if coeff.is_one() {
            return self;
        }
        let ring = self.ring.clone();
        for c in &mut self.coefficients {
            if !c.is_zero() {
                ring.div_assign(c, coeff);
            }
        }
        self
    }

    /// Quotient and remainder of dividing by `div`.
    ///
    /// # Errors
    ///
    /// Fails on a zero divisor.
    pub fn div_rem(&self, div: &Self) -> Result<(Self, Self), ExactError> {
        if div.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        Ok(self.quot_rem(div))
    }

    /// The quotient of dividing by `div`, skipping remainder
    /// reconstruction.
    ///
    /// # Errors
    ///
    /// Fails on a zero divisor.
    pub fn quotient(&self, div: &Self) -> Result<Self, ExactError> {
        if div.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        Ok(self.quotient_raw(div))
    }

    /// The remainder of dividing by `div`.
    ///
    /// # Errors
    ///
    /// Fails on a zero divisor.
    pub fn rem(&self, div: &Self) -> Result<Self, ExactError> {
        Ok(self.div_rem(div)?.1)
    }

    /// The divisor must be non-zero.
    fn quot_rem(&self, div: &Self) -> (Self, Self) {
        debug_assert!(!div.is_zero());
        if div.is_constant() {
            return (
                self.clone().div_coeff_raw(&div.coefficients[0]),
                self.zero(),
            );
        }
        if self.len() < div.len() {
            return (self.zero(), self.clone());
        }
        if div.len() == 2 {
            return self.synthetic_div(div);
        }
        if self.len() == div.len() {
            // a single quotient term cancels the leading coefficient; the
            // rest is a scalar multiple subtracted from the dividend
            let q = self.ring.div(&self.lcoeff(), &div.lcoeff());
            let r = self - &div.clone().mul_coeff(&q);
            return (self.constant(q), r);
        }
        let q = self.long_quotient(div);
        let r = self.long_rem(div, &q);
        (q, r)
    }

    /// The divisor must be non-zero.
    fn quotient_raw(&self, div: &Self) -> Self {
        debug_assert!(!div.is_zero());
        if div.is_constant() {
            return self.clone().div_coeff_raw(&div.coefficients[0]);
        }
        if self.len() < div.len() {
            return self.zero();
        }
        if div.len() == 2 {
            return self.synthetic_div(div).0;
        }
        if self.len() == div.len() {
            return self.constant(self.ring.div(&self.lcoeff(), &div.lcoeff()));
        }
        self.long_quotient(div)
    }

    /// Divide by a linear polynomial through a single Horner sweep,
    /// producing the quotient and the constant remainder.
    ///
    /// # Panics
    ///
    /// Panics when `div` is not linear.
    pub fn synthetic_div(&self, div: &Self) -> (Self, Self) {
        assert!(
            div.len() == 2,
            "synthetic division requires a linear divisor"
        );
        if self.len() < 2 {
            return (self.zero(), self.clone());
        }
        let ring = self.ring.clone();
        // the root of the monic image of m*x + c is -c/m
        let root = ring.div(&ring.neg(&div.coefficients[0]), &div.coefficients[1]);
        let (sweep, value) = self.horner_sweep(&root);
        let q = Polynomial {
            coefficients: sweep,
            ring: ring.clone(),
        }
        .mul_coeff(&ring.inv(&div.coefficients[1]));
        (q, self.constant(value))
    }

    /// Quotient of the schoolbook long division, found top-down from the
    /// recurrence on the dividend's upper coefficients alone. The dividend
    /// must be longer than the non-constant divisor.
    fn long_quotient(&self, div: &Self) -> Self {
        let ring = &self.ring;
        let n = self.len();
        let m = div.len();
        let q_len = n - m + 1;
        let lead_inv = ring.inv(&div.coefficients[m - 1]);

        let mut q = vec![ring.zero(); q_len];
        for k in (0..q_len).rev() {
            let mut acc = self.coefficients[k + m - 1].clone();
            for (j, qj) in q.iter().enumerate().take((k + m).min(q_len)).skip(k + 1) {
                ring.sub_mul_assign(&mut acc, qj, &div.coefficients[k + m - 1 - j]);
            }
            ring.mul_assign(&mut acc, &lead_inv);
            q[k] = acc;
        }
        Polynomial {
            coefficients: q,
            ring: self.ring.clone(),
        }
    }

    /// Remainder reconstructed from an already known quotient, one backward
    /// pass over the partial products below the divisor degree.
    fn long_rem(&self, div: &Self, q: &Self) -> Self {
        let ring = &self.ring;
        let m = div.len();
        let mut r = Vec::with_capacity(m - 1);
        for i in 0..m - 1 {
            let mut acc = self.coefficients[i].clone();
            for j in i.saturating_sub(m - 1)..(i + 1).min(q.len()) {
                ring.sub_mul_assign(&mut acc, &q.coefficients[j], &div.coefficients[i - j]);
            }
            r.push(acc);
        }
        while r.len() > 1 && r[r.len() - 1].is_zero() {
            r.pop();
        }
        Polynomial {
            coefficients: r,
            ring: self.ring.clone(),
        }
    }

    /// Raise to an integer exponent.
    ///
    /// # Errors
    ///
    /// Fails for a negative exponent on anything but a non-zero constant,
    /// for the zero polynomial to the zeroth power, and when the result
    /// length leaves range.
    pub fn pow(&self, e: i64) -> Result<Self, ExactError> {
        if e < 0 {
            if !self.is_constant() {
                return Err(ExactError::NegativeExponent { exponent: e });
            }
            if self.is_zero() {
                return Err(ExactError::DivisionByZero);
            }
            let inv = self.ring.inv(&self.coefficients[0]);
            return Ok(self.constant(self.ring.pow(&inv, e.unsigned_abs())));
        }
        if e == 0 {
            if self.is_zero() {
                return Err(ExactError::ZeroToTheZero);
            }
            return Ok(self.one());
        }
        if self.is_constant() {
            return Ok(self.constant(self.ring.pow(&self.coefficients[0], e as u64)));
        }

        let length =
            usize::try_from(self.degree() as u128 * e as u128 + 1).unwrap_or(usize::MAX);
        check_length(length)?;
        if e == 1 {
            return Ok(self.clone());
        }

        // accumulate products of the squared base, with one bare factor
        // left over for odd exponents
        let square = self.try_mul(self)?;
        let mut out = if e % 2 == 1 { self.clone() } else { self.one() };
        for _ in 0..e / 2 {
            out = out.try_mul(&square)?;
        }
        Ok(out)
    }

    /// The univariate gcd by Euclid's algorithm, normalized to a monic
    /// leading coefficient. A zero argument yields the other argument.
    pub fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }

        let mut c = self.clone();
        let mut d = other.clone();
        if self.len() < other.len() {
            std::mem::swap(&mut c, &mut d);
        }

        let mut r = c.quot_rem(&d).1;
        while !r.is_zero() {
            c = d;
            d = r;
            r = c.quot_rem(&d).1;
        }

        let l = d.lcoeff();
        d.div_coeff_raw(&l)
    }
}

impl<'a, 'b, F: Field> Div<&'a Polynomial<F>> for &'b Polynomial<F> {
    type Output = Polynomial<F>;

    /// The quotient of the division.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor; [div_rem](Polynomial::div_rem) and
    /// [quotient](Polynomial::quotient) are the checked variants.
    fn div(self, rhs: &'a Polynomial<F>) -> Polynomial<F> {
        if rhs.is_zero() {
            panic!("Cannot divide by zero");
        }
        self.quotient_raw(rhs)
    }
}

impl<F: Field> Div for Polynomial<F> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        (&self) / (&rhs)
    }
}

impl<'a, 'b, F: Field> Rem<&'a Polynomial<F>> for &'b Polynomial<F> {
    type Output = Polynomial<F>;

    /// The remainder of the division.
    ///
    /// # Panics
    ///
    /// Panics on a zero divisor; [rem](Polynomial::rem) is the checked
    /// variant.
    fn rem(self, rhs: &'a Polynomial<F>) -> Polynomial<F> {
        if rhs.is_zero() {
            panic!("Cannot divide by zero");
        }
        self.quot_rem(rhs).1
    }
}

impl<F: Field> Rem for Polynomial<F> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        (&self) % (&rhs)
    }
}

#[cfg(test)]
mod test {
    use ahash::AHasher;
    use std::hash::{Hash, Hasher};

    use crate::domains::integer::{ExactInteger, Z};
    use crate::domains::rational::{Q, Rational, RationalField};
    use crate::error::ExactError;
    use crate::poly::univariate::Polynomial;
    use crate::poly::{MAX_DEGREE, MAX_LENGTH};

    fn poly(coefficients: &[i64]) -> Polynomial<RationalField> {
        Polynomial::from_coefficients(
            &Q,
            coefficients.iter().map(|&c| Rational::from(c)).collect(),
        )
        .unwrap()
    }

    #[test]
    fn construction() {
        let p = poly(&[1, 2, 0, 0]);
        assert_eq!(p.len(), 2);
        assert_eq!(p.degree(), 1);

        let zero = Polynomial::new(&Q);
        assert!(zero.is_zero());
        assert_eq!(zero.len(), 1);

        assert_eq!(poly(&[0, 0, 0]), zero);

        assert_eq!(
            Polynomial::from_coefficients(&Q, vec![]),
            Err(ExactError::LengthOutOfRange { length: 0 })
        );
        assert_eq!(
            Polynomial::from_coefficients(&Q, vec![Rational::zero(); MAX_LENGTH + 1]),
            Err(ExactError::LengthOutOfRange {
                length: MAX_LENGTH + 1
            })
        );

        let m = zero.monomial(Rational::from(3), 4).unwrap();
        assert_eq!(m, poly(&[0, 0, 0, 0, 3]));
        assert!(m.is_monomial());
        assert!(!poly(&[1, 1]).is_monomial());
        assert!(zero.is_monomial());
        assert_eq!(
            zero.monomial(Rational::one(), MAX_DEGREE + 1),
            Err(ExactError::DegreeOutOfRange {
                degree: MAX_DEGREE + 1
            })
        );
        assert!(zero.monomial(Rational::zero(), 9).unwrap().is_zero());
    }

    #[test]
    fn coefficient_access() {
        let p = poly(&[1, 0, 5]);
        assert_eq!(p.coefficient(0).unwrap(), Rational::from(1));
        assert_eq!(p.coefficient(1).unwrap(), Rational::zero());
        assert_eq!(p.coefficient(100).unwrap(), Rational::zero());
        assert_eq!(
            p.coefficient(MAX_DEGREE + 1),
            Err(ExactError::DegreeOutOfRange {
                degree: MAX_DEGREE + 1
            })
        );
        assert_eq!(p.get_constant(), Rational::from(1));
        assert_eq!(p.lcoeff(), Rational::from(5));
    }

    #[test]
    fn addition_cancels_leading_terms() {
        let a = poly(&[1, 0, 1]);
        let b = poly(&[0, 1, -1]);
        assert_eq!(&a + &b, poly(&[1, 1]));

        let c = poly(&[5, 3]);
        assert_eq!(&c + &(-c.clone()), Polynomial::new(&Q));

        assert_eq!(&poly(&[1]) + &poly(&[0, 1]), poly(&[1, 1]));
        assert_eq!(&poly(&[0, 1]) + &poly(&[1]), poly(&[1, 1]));
    }

    #[test]
    fn subtraction() {
        let a = poly(&[1, 2, 3]);
        assert!((&a - &a).is_zero());
        assert_eq!(&poly(&[1]) - &poly(&[0, 0, 2]), poly(&[1, 0, -2]));
        assert_eq!(&poly(&[0, 0, 2]) - &poly(&[1]), poly(&[-1, 0, 2]));
        assert_eq!(&poly(&[1, 5, 3]) - &poly(&[2, 1, 3]), poly(&[-1, 4]));
    }

    #[test]
    fn multiplication() {
        assert_eq!(&poly(&[1, 1]) * &poly(&[-1, 1]), poly(&[-1, 0, 1]));
        assert_eq!(&poly(&[1, 2, 1]) * &poly(&[3]), poly(&[3, 6, 3]));
        assert!((&poly(&[1, 2, 1]) * &Polynomial::new(&Q)).is_zero());

        let p = poly(&[2, 4]);
        assert_eq!(p.clone().mul_coeff(&Rational::one()), p);
        assert!(p.clone().mul_coeff(&Rational::zero()).is_zero());
        assert_eq!(
            p.clone().mul_coeff(&(1, 2).into()),
            poly(&[1, 2])
        );

        assert_eq!(
            poly(&[2, 4]).div_coeff(&Rational::from(2)).unwrap(),
            poly(&[1, 2])
        );
        assert_eq!(
            poly(&[2, 4]).div_coeff(&Rational::zero()),
            Err(ExactError::DivisionByZero)
        );
    }

    #[test]
    fn length_guard_on_products() {
        let zero = Polynomial::new(&Q);
        let half = zero
            .monomial(Rational::one(), MAX_DEGREE / 2 + 1)
            .unwrap();
        assert_eq!(
            half.try_mul(&half),
            Err(ExactError::LengthOutOfRange {
                length: MAX_DEGREE + 2
            })
        );
    }

    #[test]
    fn evaluation() {
        let p = poly(&[1, 3, 2]);
        assert_eq!(p.evaluate(&Rational::from(2)), Rational::from(15));
        assert_eq!(p.evaluate(&Rational::from(-1)), Rational::zero());
        assert_eq!(poly(&[7]).evaluate(&Rational::from(100)), Rational::from(7));
    }

    #[test]
    fn synthetic_division() {
        // 2x^2+3x+1 = (x+1)(2x+1)
        let p = poly(&[1, 3, 2]);
        let (q, r) = p.synthetic_div(&poly(&[1, 1]));
        assert_eq!(q, poly(&[1, 2]));
        assert!(r.is_zero());

        // non-monic divisor
        let (q, r) = p.synthetic_div(&poly(&[1, 2]));
        assert_eq!(q, poly(&[1, 1]));
        assert!(r.is_zero());

        // x^2+1 = (x-1)(x+1) + 2
        let (q, r) = poly(&[1, 0, 1]).synthetic_div(&poly(&[-1, 1]));
        assert_eq!(q, poly(&[1, 1]));
        assert_eq!(r, poly(&[2]));
    }

    #[test]
    fn remainder_matches_evaluation() {
        let p = poly(&[4, -2, 0, 3, 1]);
        for point in -4i64..=4 {
            let divisor = poly(&[-point, 1]);
            let (_, r) = p.synthetic_div(&divisor);
            assert_eq!(r.get_constant(), p.evaluate(&Rational::from(point)));
        }
    }

    #[test]
    fn long_division() {
        // x^5 = (x^2-1)(x^3+x+1) + (x^2 terms)
        let zero = Polynomial::new(&Q);
        let p = zero.monomial(Rational::one(), 5).unwrap();
        let d = poly(&[1, 1, 0, 1]);
        let (q, r) = p.div_rem(&d).unwrap();
        assert_eq!(q, poly(&[-1, 0, 1]));
        assert_eq!(r, poly(&[1, 1, -1]));
        assert_eq!(&(&q * &d) + &r, p);

        // exact division
        let a = poly(&[1, 2, 3, 4]);
        let b = poly(&[5, 1, 2]);
        let prod = &a * &b;
        let (q, r) = prod.div_rem(&b).unwrap();
        assert_eq!(q, a);
        assert!(r.is_zero());
    }

    #[test]
    fn division_router_edges() {
        let p = poly(&[1, 3, 2]);

        assert_eq!(
            p.div_rem(&Polynomial::new(&Q)),
            Err(ExactError::DivisionByZero)
        );

        // constant divisor scales
        let (q, r) = p.div_rem(&poly(&[2])).unwrap();
        assert_eq!(q, Polynomial::from_coefficients(
            &Q,
            vec![(1, 2).into(), (3, 2).into(), Rational::one()]
        )
        .unwrap());
        assert!(r.is_zero());

        // longer divisor leaves the dividend untouched
        let (q, r) = p.div_rem(&poly(&[1, 0, 0, 1])).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, p);

        // equal length gives a constant quotient
        let (q, r) = poly(&[1, 0, 4]).div_rem(&poly(&[0, 1, 2])).unwrap();
        assert_eq!(q, poly(&[2]));
        assert_eq!(r, poly(&[1, -2]));
    }

    #[test]
    fn quotient_skips_remainder() {
        let cases = [
            (poly(&[1, 3, 2]), poly(&[1, 1])),
            (poly(&[4, 0, 0, 1, 7]), poly(&[1, 1, 3])),
            (poly(&[1, 0, 4]), poly(&[0, 1, 2])),
            (poly(&[3]), poly(&[1, 2, 3, 4])),
            (poly(&[9, 1]), poly(&[5])),
        ];
        for (p, d) in cases {
            assert_eq!(p.quotient(&d).unwrap(), p.div_rem(&d).unwrap().0);
            assert_eq!(&p / &d, p.quotient(&d).unwrap());
            assert_eq!(&p % &d, p.div_rem(&d).unwrap().1);
        }
    }

    #[test]
    fn reconstruction_across_shapes() {
        let dividends = [
            poly(&[1, 2, 3, 4, 5, 6]),
            poly(&[0, 0, 0, 1]),
            poly(&[-7, 0, 2, 0, 0, 0, 1]),
        ];
        let divisors = [poly(&[4]), poly(&[2, 3]), poly(&[1, 0, 1]), poly(&[-1, 0, 0, 2])];
        for p in &dividends {
            for d in &divisors {
                let (q, r) = p.div_rem(d).unwrap();
                assert_eq!(&(&q * d) + &r, *p);
                assert!(r.is_zero() || r.len() < d.len());
            }
        }
    }

    #[test]
    fn powers() {
        let p = poly(&[1, 1]);
        assert_eq!(p.pow(0).unwrap(), poly(&[1]));
        assert_eq!(p.pow(1).unwrap(), p);
        assert_eq!(p.pow(2).unwrap(), poly(&[1, 2, 1]));
        assert_eq!(p.pow(3).unwrap(), poly(&[1, 3, 3, 1]));
        assert_eq!(p.pow(4).unwrap(), poly(&[1, 4, 6, 4, 1]));

        let zero = Polynomial::new(&Q);
        assert_eq!(zero.pow(0), Err(ExactError::ZeroToTheZero));
        assert!(zero.pow(3).unwrap().is_zero());

        assert_eq!(
            poly(&[2]).pow(-2).unwrap(),
            Polynomial::from_coefficients(&Q, vec![(1, 4).into()]).unwrap()
        );
        assert_eq!(
            p.pow(-1),
            Err(ExactError::NegativeExponent { exponent: -1 })
        );
        assert_eq!(zero.pow(-1), Err(ExactError::DivisionByZero));

        assert!(matches!(
            p.pow(MAX_LENGTH as i64),
            Err(ExactError::LengthOutOfRange { .. })
        ));
    }

    #[test]
    fn gcd_normalizes_monic() {
        let a = &poly(&[1, 1]) * &poly(&[2, 1]);
        let b = &poly(&[1, 1]) * &poly(&[3, 1]);
        assert_eq!(a.gcd(&b), poly(&[1, 1]));

        // common factor with a non-unit leading coefficient
        let f = poly(&[3, 6]);
        let a = &f * &poly(&[1, 1]);
        let b = &f * &poly(&[4, 1]);
        assert_eq!(a.gcd(&b), Polynomial::from_coefficients(
            &Q,
            vec![(1, 2).into(), Rational::one()]
        )
        .unwrap());

        let zero = Polynomial::new(&Q);
        assert_eq!(zero.gcd(&a), a);
        assert_eq!(a.gcd(&zero), a);
    }

    #[test]
    fn derivatives() {
        assert_eq!(poly(&[1, 3, 2]).derivative(), poly(&[3, 4]));
        assert!(poly(&[9]).derivative().is_zero());
        assert_eq!(poly(&[0, 0, 0, 1]).derivative(), poly(&[0, 0, 3]));
    }

    #[test]
    fn ordering_is_length_first() {
        let mut polys = vec![
            poly(&[0, 0, 1]),
            poly(&[5]),
            poly(&[2, 1]),
            poly(&[0, 1]),
        ];
        polys.sort();
        assert_eq!(
            polys,
            vec![poly(&[5]), poly(&[0, 1]), poly(&[2, 1]), poly(&[0, 0, 1])]
        );
    }

    #[test]
    fn hashing_is_value_based() {
        fn hash_of(p: &Polynomial<RationalField>) -> u64 {
            let mut h = AHasher::default();
            p.hash(&mut h);
            h.finish()
        }

        let a = poly(&[1, 0, 0, 2]);
        let b = poly(&[1, 0, 0, 2]);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&poly(&[0, 1])), hash_of(&poly(&[0, 0, 1])));
    }

    #[test]
    fn rendering() {
        assert_eq!(poly(&[1, 2]).to_string(), "1*x^0+2*x^1");
        assert_eq!(poly(&[0, 0, -1]).to_string(), "(-1)*x^2");
        assert_eq!(Polynomial::new(&Q).to_string(), "0");
        assert_eq!(
            Polynomial::from_coefficients(&Q, vec![(1, 2).into(), Rational::from(3)])
                .unwrap()
                .to_string(),
            "(1/2)*x^0+3*x^1"
        );

        let p = Polynomial::from_coefficients(
            &Z,
            vec![ExactInteger::from_i64(255), ExactInteger::from_i64(16)],
        )
        .unwrap();
        assert_eq!(p.to_radix_string(16).unwrap(), "ff*x^0+10*x^1");
        assert_eq!(p.to_radix_string(1), Err(ExactError::RadixOutOfRange(1)));
    }

    #[test]
    fn integer_ring_polynomials() {
        let x = Polynomial::new(&Z)
            .monomial(ExactInteger::from_i64(1), 1)
            .unwrap();
        let p = &(&x * &x) + &x;
        assert_eq!(
            p,
            Polynomial::from_coefficients(
                &Z,
                vec![
                    ExactInteger::zero(),
                    ExactInteger::one(),
                    ExactInteger::one()
                ]
            )
            .unwrap()
        );
        assert_eq!(
            p.evaluate(&ExactInteger::from_i64(7)),
            ExactInteger::from_i64(56)
        );
    }
}
