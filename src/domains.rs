//! Core algebraic traits.
//!
//! The central trait is [Ring], which has two binary operations, addition and
//! multiplication. Each ring has an associated element type, not to be
//! confused with the ring type itself:
//! - the ring of integers [Z](integer::Z) has elements of type
//!   [ExactInteger](integer::ExactInteger),
//! - the field of rational numbers [Q](rational::Q) has elements of type
//!   [Rational](rational::Rational).
//!
//! The ring elements do not implement the arithmetic operations themselves;
//! the ring does. Structures such as
//! [Polynomial](crate::poly::univariate::Polynomial) are generic over the
//! ring type and call into it for every coefficient operation.
//!
//! [EuclideanDomain] extends [Ring] with remainders, quotients and gcds, and
//! [Field] extends it further with division and inversion.
pub mod builder;
pub mod integer;
pub mod rational;

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use crate::printer::PrintOptions;

/// Compare two elements using an ordering that is defined even when no
/// meaningful total ordering exists. It is used to put terms and coefficient
/// sequences in a canonical order.
pub trait InternalOrdering {
    fn internal_cmp(&self, other: &Self) -> std::cmp::Ordering;
}

/// The capability contract of an exact value: it carries all the knowledge
/// of its algebraic context, so zero/one/sign tests and formatting need no
/// companion ring object. Modular residues are the classic counterexample,
/// and they do not occur in this crate.
pub trait ExactValue:
    Clone + PartialEq + Eq + Hash + InternalOrdering + Debug + Display
{
    fn is_zero(&self) -> bool;
    fn is_one(&self) -> bool;
    fn is_negative(&self) -> bool;

    /// Write the value using `opts`. When `in_product` is set, the output is
    /// parenthesized whenever it would otherwise parse as more than one
    /// factor (a leading minus or an embedded fraction bar).
    fn format<W: fmt::Write>(
        &self,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> fmt::Result;

    fn format_string(&self, opts: &PrintOptions, in_product: bool) -> String {
        let mut s = String::new();
        self.format(opts, in_product, &mut s)
            .expect("could not write to string");
        s
    }
}

/// A set with two binary operations, addition and multiplication.
///
/// The element operations are methods of the ring rather than of the
/// elements, so generic code can stay agnostic over the coefficient domain.
pub trait Ring: Clone + PartialEq + Eq + Hash + Debug + Display {
    type Element: ExactValue;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element);
    /// `a += b * c`.
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    /// `a -= b * c`.
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element);
    fn neg(&self, a: &Self::Element) -> Self::Element;
    fn zero(&self) -> Self::Element;
    fn one(&self) -> Self::Element;
    /// Return the nth element by computing `n * 1`.
    fn nth(&self, n: i64) -> Self::Element;
    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element;
    fn is_zero(a: &Self::Element) -> bool;
    fn is_one(&self, a: &Self::Element) -> bool;

    /// Return the result of dividing `a` by `b`, if possible and if the
    /// result is unique. For example, in [Z](integer::Z) `4/2` is possible
    /// but `3/2` is not.
    fn try_div(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element>;

    /// Format a ring element with custom [PrintOptions].
    fn format<W: fmt::Write>(
        &self,
        element: &Self::Element,
        opts: &PrintOptions,
        in_product: bool,
        f: &mut W,
    ) -> fmt::Result {
        element.format(opts, in_product, f)
    }

    /// Create a printer for the given ring element that can be used in a
    /// [format!] macro.
    fn printer<'a>(&'a self, element: &'a Self::Element) -> RingPrinter<'a, Self> {
        RingPrinter::new(self, element)
    }
}

/// A ring that supports division with remainder, quotients and gcds.
///
/// The gcd at this layer is total: `gcd(0, 0)` is `0`. The checked,
/// user-facing variant that rejects two zero operands lives on
/// [ExactInteger](integer::ExactInteger).
pub trait EuclideanDomain: Ring {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element);
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
}

/// A ring that supports division and inversion.
pub trait Field: EuclideanDomain {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element);
    fn inv(&self, a: &Self::Element) -> Self::Element;
}

/// An interface for printing ring elements with optional customization,
/// suitable as an argument to [format!]. Internally it calls [Ring::format].
pub struct RingPrinter<'a, R: Ring> {
    pub ring: &'a R,
    pub element: &'a R::Element,
    pub opts: PrintOptions,
    pub in_product: bool,
}

impl<'a, R: Ring> RingPrinter<'a, R> {
    pub fn new(ring: &'a R, element: &'a R::Element) -> RingPrinter<'a, R> {
        RingPrinter {
            ring,
            element,
            opts: PrintOptions::default(),
            in_product: false,
        }
    }
}

impl<'a, R: Ring> Display for RingPrinter<'a, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.ring
            .format(self.element, &self.opts, self.in_product, f)
    }
}
