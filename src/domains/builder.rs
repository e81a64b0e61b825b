//! Staged construction of exact numbers.
//!
//! [NumberBuilder] accumulates up to three components, a whole part, a
//! numerator and a denominator, in any order, measuring the storage class
//! of every input as it arrives. Building composes the components into a
//! single canonical value: the whole part folds into the numerator, the
//! fraction reduces, and the reduced pair is re-measured so the result
//! lands in the narrowest storage that holds it.

use crate::domains::integer::{ExactInteger, NarrowWidth};
use crate::domains::rational::{ExactNumber, Rational};
use crate::error::ExactError;

/// A staged component with its memoized width measurement.
#[derive(Clone, Debug)]
struct Pending {
    value: ExactInteger,
    width: Option<NarrowWidth>,
}

impl Pending {
    fn new(value: ExactInteger) -> Pending {
        Pending { value, width: None }
    }
}

/// A mutable, single-use accumulator for one exact number.
///
/// Not meant to be shared; use one builder per construction and
/// [clear](Self::clear) it to start over.
#[derive(Clone, Debug)]
pub struct NumberBuilder {
    whole: Option<Pending>,
    numerator: Option<Pending>,
    denominator: Option<Pending>,
    width: NarrowWidth,
}

impl Default for NumberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberBuilder {
    pub fn new() -> NumberBuilder {
        NumberBuilder {
            whole: None,
            numerator: None,
            denominator: None,
            width: NarrowWidth::Unmeasured,
        }
    }

    /// The widest class measured so far: of the inputs while accumulating,
    /// of the reduced result after a build.
    pub fn width(&self) -> NarrowWidth {
        self.width
    }

    /// Stage the whole part. Overwrites any earlier whole part.
    pub fn whole(&mut self, v: impl Into<ExactInteger>) -> &mut Self {
        let mut p = Pending::new(v.into());
        self.width = NarrowWidth::get_and_comp(&p.value, &mut p.width, self.width);
        self.whole = Some(p);
        self
    }

    /// Stage the numerator. Overwrites any earlier numerator.
    pub fn numerator(&mut self, v: impl Into<ExactInteger>) -> &mut Self {
        let mut p = Pending::new(v.into());
        self.width = NarrowWidth::get_and_comp(&p.value, &mut p.width, self.width);
        self.numerator = Some(p);
        self
    }

    /// Stage the denominator. Overwrites any earlier denominator.
    ///
    /// # Errors
    ///
    /// A zero denominator is rejected here, at input time, so an invalid
    /// component can never sit latent in the builder.
    pub fn denominator(&mut self, v: impl Into<ExactInteger>) -> Result<&mut Self, ExactError> {
        let value = v.into();
        if value.is_zero() {
            return Err(ExactError::DivisionByZero);
        }
        let mut p = Pending::new(value);
        self.width = NarrowWidth::get_and_comp(&p.value, &mut p.width, self.width);
        self.denominator = Some(p);
        Ok(self)
    }

    /// Reset all staged components.
    pub fn clear(&mut self) {
        self.whole = None;
        self.numerator = None;
        self.denominator = None;
        self.width = NarrowWidth::Unmeasured;
    }

    /// Compose the staged components into one reduced fraction, consuming
    /// the staged state.
    fn assemble(&mut self) -> Result<Rational, ExactError> {
        let whole = self.whole.take();
        let numerator = self.numerator.take();
        let denominator = self.denominator.take();

        if whole.is_none() && numerator.is_none() && denominator.is_none() {
            self.width = NarrowWidth::Unmeasured;
            return Err(ExactError::EmptyBuilder);
        }

        // zero was rejected when the denominator was staged
        let den = denominator.map_or_else(ExactInteger::one, |p| p.value);

        let num = match (whole, numerator) {
            (Some(w), Some(n)) => &n.value + &(&w.value * &den),
            (Some(w), None) => &w.value * &den,
            (None, Some(n)) => n.value,
            (None, None) => ExactInteger::zero(),
        };

        let reduced = Rational::reduced(num, den);

        // reduction can narrow, so the result class is measured fresh
        self.width = NarrowWidth::measure(reduced.numerator_ref())
            .comp(NarrowWidth::measure(reduced.denominator_ref()));

        Ok(reduced)
    }

    /// Build the accumulated number, collapsing whole values into the
    /// integer family.
    ///
    /// # Errors
    ///
    /// Fails when no component was staged.
    pub fn build(&mut self) -> Result<ExactNumber, ExactError> {
        Ok(ExactNumber::from_rational(self.assemble()?))
    }

    /// Build the accumulated number as a fraction even when it is whole.
    ///
    /// # Errors
    ///
    /// Fails when no component was staged.
    pub fn build_strict(&mut self) -> Result<Rational, ExactError> {
        self.assemble()
    }
}
