//! Exactica is an exact arithmetic library.
//!
//! Integers carry a dual representation, a cached native form for small
//! values and an arbitrary-precision form for everything else, selected
//! automatically so equal values always share one representation. On top of
//! the integers sit reduced rationals, a narrowing number builder and dense
//! univariate polynomials with a shape-directed division engine.
//!
//! For example:
//!
//! ```
//! use exactica::domains::rational::{Q, Rational};
//! use exactica::poly::univariate::Polynomial;
//!
//! fn main() {
//!     let p = Polynomial::from_coefficients(
//!         &Q,
//!         vec![Rational::from(1), Rational::from(3), Rational::from(2)],
//!     )
//!     .unwrap();
//!     let d =
//!         Polynomial::from_coefficients(&Q, vec![Rational::from(1), Rational::from(1)]).unwrap();
//!     let (quotient, remainder) = p.div_rem(&d).unwrap();
//!     println!("({}) / ({}) = {}, rest {}", p, d, quotient, remainder);
//! }
//! ```

pub mod domains;
pub mod error;
pub mod poly;
pub mod printer;
pub mod utils;
