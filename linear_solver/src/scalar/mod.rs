mod parse;

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_complex::Complex64;

use crate::error::{Result, SolverError};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scalar(Complex64);

impl Scalar {
    pub const ZERO: Scalar = Scalar::new(0.0, 0.0);
    pub const ONE: Scalar = Scalar::new(1.0, 0.0);
    pub const I: Scalar = Scalar::new(0.0, 1.0);

    pub const fn new(real: f64, imaginary: f64) -> Self {
        Self(Complex64::new(real, imaginary))
    }

    pub fn real(&self) -> f64 {
        self.0.re
    }

    pub fn imaginary(&self) -> f64 {
        self.0.im
    }

    pub fn is_zero(&self) -> bool {
        self.0.re == 0.0 && self.0.im == 0.0
    }

    pub fn is_one(&self) -> bool {
        self.0.re == 1.0 && self.0.im == 0.0
    }

    pub fn is_real(&self) -> bool {
        self.0.im == 0.0
    }

    pub fn conjugate(self) -> Self {
        Self(self.0.conj())
    }

    /// Plain `f64` division when both operands are real.
    pub fn divide(self, divisor: Scalar) -> Result<Self> {
        if divisor.is_zero() {
            return Err(SolverError::DivisionByZero);
        }
        if self.is_real() && divisor.is_real() {
            return Ok(Self::from(self.0.re / divisor.0.re));
        }
        let numerator = self.0 * divisor.0.conj();
        Ok(Self(numerator.unscale(divisor.0.norm_sqr())))
    }

    pub fn inverse(self) -> Result<Self> {
        Self::ONE.divide(self)
    }
}

impl From<f64> for Scalar {
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl From<Complex64> for Scalar {
    fn from(value: Complex64) -> Self {
        Self(value)
    }
}

impl From<Scalar> for Complex64 {
    fn from(value: Scalar) -> Self {
        value.0
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        Scalar(self.0 + other.0)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, other: Scalar) -> Scalar {
        Scalar(self.0 - other.0)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, other: Scalar) -> Scalar {
        Scalar(self.0 * other.0)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(-self.0)
    }
}

impl FromStr for Scalar {
    type Err = SolverError;

    fn from_str(text: &str) -> Result<Self> {
        let (real, imaginary) = parse::parse_components(text)?;
        Ok(Self::new(real, imaginary))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex64 { re, im } = self.0;
        if im == 0.0 {
            // also turns -0 into 0
            return if re == 0.0 {
                f.write_str("0")
            } else {
                write!(f, "{re}")
            };
        }
        if re != 0.0 {
            write!(f, "{re}")?;
            if im > 0.0 {
                f.write_str("+")?;
            }
        }
        if im == 1.0 {
            f.write_str("i")
        } else if im == -1.0 {
            f.write_str("-i")
        } else {
            write!(f, "{im}i")
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn s(text: &str) -> Scalar {
        text.parse().unwrap()
    }

    #[test]
    fn arithmetic_follows_complex_rules() {
        let a = Scalar::new(3.0, 2.0);
        let b = Scalar::new(4.0, -3.0);
        assert_eq!(a + b, Scalar::new(7.0, -1.0));
        assert_eq!(a - b, Scalar::new(-1.0, 5.0));
        // (3+2i)(4-3i) = 12 - 9i + 8i + 6
        assert_eq!(a * b, Scalar::new(18.0, -1.0));
        assert_eq!(-a, Scalar::new(-3.0, -2.0));
        assert_eq!(a.conjugate(), Scalar::new(3.0, -2.0));
        assert_eq!(Scalar::I * Scalar::I, Scalar::from(-1.0));
    }

    #[test]
    fn division_multiplies_by_the_conjugate() {
        // (1+i) / i = 1 - i
        assert_eq!(s("1+i").divide(Scalar::I).unwrap(), s("1-i"));
        // 1 / (8+4i) = (8-4i) / 80
        assert_eq!(
            Scalar::new(8.0, 4.0).inverse().unwrap(),
            Scalar::new(0.1, -0.05)
        );
        assert_eq!(Scalar::from(1.0).divide(Scalar::from(4.0)).unwrap(), s("0.25"));
        assert_eq!(Scalar::I.inverse().unwrap(), s("-i"));
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(
            Scalar::ONE.divide(Scalar::ZERO),
            Err(SolverError::DivisionByZero)
        );
        assert_eq!(
            Scalar::new(0.0, -0.0).inverse(),
            Err(SolverError::DivisionByZero)
        );
    }

    #[test]
    fn identity_predicates() {
        assert!(Scalar::ZERO.is_zero());
        assert!(Scalar::new(-0.0, 0.0).is_zero());
        assert!(!Scalar::I.is_zero());
        assert!(Scalar::ONE.is_one());
        assert!(!Scalar::new(1.0, 1.0).is_one());
        assert_eq!(Scalar::default(), Scalar::ZERO);
    }

    #[test]
    fn formats_canonically() {
        for (text, expected) in [
            ("0", "0"),
            ("-0", "0"),
            ("3", "3"),
            ("3.0", "3"),
            ("-2.5", "-2.5"),
            ("i", "i"),
            ("+i", "i"),
            ("-i", "-i"),
            ("1i", "i"),
            ("0+1i", "i"),
            ("2i", "2i"),
            ("1+i", "1+i"),
            ("1-i", "1-i"),
            ("-3+4.5i", "-3+4.5i"),
            ("0.5-0.25i", "0.5-0.25i"),
            ("1e3", "1000"),
            ("5+0i", "5"),
        ] {
            assert_eq!(s(text).to_string(), expected, "formatting {text:?}");
        }
    }

    #[test]
    fn format_then_parse_is_identity() {
        for value in [
            Scalar::ZERO,
            Scalar::ONE,
            Scalar::I,
            -Scalar::I,
            Scalar::new(1.0 / 3.0, -2.0 / 7.0),
            Scalar::new(-1e-9, 12345.678),
            Scalar::new(0.0, 0.1),
            Scalar::new(6.02e23, 1.0),
        ] {
            assert_eq!(s(&value.to_string()), value, "round trip of {value:?}");
        }
    }

    #[test]
    fn parse_reports_the_offending_token() {
        assert_eq!(
            "1+2".parse::<Scalar>(),
            Err(SolverError::MalformedScalar {
                token: "1+2".to_owned()
            })
        );
    }
}
