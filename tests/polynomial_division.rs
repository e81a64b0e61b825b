use exactica::domains::integer::ExactInteger;
use exactica::domains::rational::{Q, Rational, RationalField};
use exactica::error::ExactError;
use exactica::poly::univariate::Polynomial;

fn poly(coefficients: &[i64]) -> Polynomial<RationalField> {
    Polynomial::from_coefficients(
        &Q,
        coefficients.iter().map(|&c| Rational::from(c)).collect(),
    )
    .unwrap()
}

#[test]
fn factored_quadratic_divides_cleanly() {
    // 2x^2+3x+1 = (x+1)(2x+1)
    let p = poly(&[1, 3, 2]);
    let (q, r) = p.div_rem(&poly(&[1, 1])).unwrap();
    assert_eq!(q, poly(&[1, 2]));
    assert!(r.is_zero());

    let (q, r) = p.div_rem(&poly(&[1, 2])).unwrap();
    assert_eq!(q, poly(&[1, 1]));
    assert!(r.is_zero());
}

#[test]
fn remainder_is_the_evaluation_at_the_root() {
    let p = poly(&[-5, 0, 0, 2, 7, 1]);
    for root in -3i64..=3 {
        let divisor = poly(&[-root, 1]);
        let r = p.rem(&divisor).unwrap();
        assert!(r.is_constant());
        assert_eq!(r.get_constant(), p.evaluate(&Rational::from(root)));
    }
}

#[test]
fn every_divisor_shape_reconstructs_the_dividend() {
    let p = poly(&[3, -1, 0, 4, 4, -2, 1]);
    let divisors = [
        poly(&[5]),             // constant: scalar path
        poly(&[2, 1]),          // linear: synthetic path
        poly(&[1, 1, 1]),       // shorter: long division
        poly(&[-2, 0, 0, 3, 1, 0, 7]), // equal length: one quotient term
        poly(&[1, 0, 0, 0, 0, 0, 0, 1]), // longer: trivial split
    ];
    for d in &divisors {
        let (q, r) = p.div_rem(d).unwrap();
        assert_eq!(&(&q * d) + &r, p);
        assert!(r.is_zero() || r.len() < d.len());
        assert_eq!(p.quotient(d).unwrap(), q);
        assert_eq!(p.rem(d).unwrap(), r);
        assert_eq!(&p / d, q);
        assert_eq!(&p % d, r);
    }
}

#[test]
fn zero_divisor_is_rejected_everywhere() {
    let p = poly(&[1, 2]);
    let zero = Polynomial::new(&Q);
    assert_eq!(p.div_rem(&zero), Err(ExactError::DivisionByZero));
    assert_eq!(p.quotient(&zero), Err(ExactError::DivisionByZero));
    assert_eq!(p.rem(&zero), Err(ExactError::DivisionByZero));
    assert_eq!(
        p.clone().div_coeff(&Rational::zero()),
        Err(ExactError::DivisionByZero)
    );
}

#[test]
fn repeated_factors_divide_exactly() {
    let x_plus_1 = poly(&[1, 1]);
    let fifth = x_plus_1.pow(5).unwrap();
    assert_eq!(fifth, poly(&[1, 5, 10, 10, 5, 1]));

    let (q, r) = fifth.div_rem(&x_plus_1.pow(2).unwrap()).unwrap();
    assert_eq!(q, x_plus_1.pow(3).unwrap());
    assert!(r.is_zero());
}

#[test]
fn exponent_rules() {
    let p = poly(&[0, 1]);
    assert_eq!(p.pow(0).unwrap(), poly(&[1]));
    assert_eq!(p.pow(6).unwrap(), poly(&[0, 0, 0, 0, 0, 0, 1]));

    let zero = Polynomial::new(&Q);
    assert_eq!(zero.pow(0), Err(ExactError::ZeroToTheZero));
    assert!(zero.pow(4).unwrap().is_zero());

    assert_eq!(
        p.pow(-3),
        Err(ExactError::NegativeExponent { exponent: -3 })
    );
    assert_eq!(poly(&[4]).pow(-1).unwrap().to_string(), "(1/4)*x^0");
}

#[test]
fn gcd_of_shared_factors() {
    let shared = poly(&[1, 0, 1]);
    let a = &shared * &poly(&[-1, 1]);
    let b = &shared * &poly(&[7, 0, 0, 1]);
    assert_eq!(a.gcd(&b), shared);

    // coprime inputs reduce to one
    assert_eq!(poly(&[1, 1]).gcd(&poly(&[2, 1])), poly(&[1]));
}

#[test]
fn coefficients_escalate_past_the_native_range() {
    let big = Rational::from(ExactInteger::from_i64(1 << 40));
    let p = Polynomial::from_coefficients(&Q, vec![Rational::one(), big]).unwrap();
    let square = &p * &p;

    let lead = square.lcoeff().numerator();
    assert!(matches!(lead, ExactInteger::Arbitrary(_)));
    assert_eq!(lead.to_string(), "1208925819614629174706176");

    // synthetic division recovers the factor exactly
    let (q, r) = square.div_rem(&p).unwrap();
    assert_eq!(q, p);
    assert!(r.is_zero());
}

#[test]
fn derivative_and_evaluation_agree() {
    // d/dx (x^3 - 2x) = 3x^2 - 2
    let p = poly(&[0, -2, 0, 1]);
    let d = p.derivative();
    assert_eq!(d, poly(&[-2, 0, 3]));
    assert_eq!(d.evaluate(&Rational::from(2)), Rational::from(10));
}

#[test]
fn rendering_matches_the_term_form() {
    let p = poly(&[1, 3, 2]);
    assert_eq!(p.to_string(), "1*x^0+3*x^1+2*x^2");
    assert_eq!(
        poly(&[-1, 0, 1]).to_string(),
        "(-1)*x^0+1*x^2"
    );
}
