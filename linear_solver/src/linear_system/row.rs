use std::fmt;

use itertools::Itertools;

use crate::error::{Result, SolverError};
use crate::scalar::Scalar;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    coefficients: Vec<Scalar>,
    constant: Scalar,
}

impl Row {
    pub fn new(coefficients: Vec<Scalar>, constant: Scalar) -> Self {
        Self {
            coefficients,
            constant,
        }
    }

    pub fn zero(variable_count: usize) -> Self {
        Self::new(vec![Scalar::ZERO; variable_count], Scalar::ZERO)
    }

    pub fn from_terms(variable_count: usize, terms: Vec<Scalar>) -> Result<Self> {
        let too_wide = || {
            SolverError::InvalidInput(format!("cannot hold a row of {variable_count} variables"))
        };
        let width = variable_count.checked_add(1).ok_or_else(too_wide)?;
        if terms.len() > width {
            return Err(SolverError::DimensionMismatch {
                expected: width,
                got: terms.len(),
            });
        }
        let mut coefficients = Vec::new();
        coefficients
            .try_reserve_exact(variable_count)
            .map_err(|_| too_wide())?;
        coefficients.resize(variable_count, Scalar::ZERO);
        let mut row = Self::new(coefficients, Scalar::ZERO);
        for (idx, term) in terms.into_iter().enumerate() {
            if idx < variable_count {
                row.coefficients[idx] = term;
            } else {
                row.constant = term;
            }
        }
        Ok(row)
    }

    pub fn variable_count(&self) -> usize {
        self.coefficients.len()
    }

    pub fn coefficients(&self) -> &[Scalar] {
        &self.coefficients
    }

    pub fn constant(&self) -> Scalar {
        self.constant
    }

    pub fn term(&self, index: usize) -> Result<Scalar> {
        SolverError::check_index("term", index, self.variable_count() + 1)?;
        Ok(if index == self.variable_count() + 1 {
            self.constant
        } else {
            self.coefficients[index - 1]
        })
    }

    pub fn set_coefficient(&mut self, index: usize, value: Scalar) -> Result<()> {
        SolverError::check_index("coefficient", index, self.variable_count())?;
        self.coefficients[index - 1] = value;
        Ok(())
    }

    pub fn swap_coefficients(&mut self, one: usize, two: usize) -> Result<()> {
        SolverError::check_index("coefficient", one, self.variable_count())?;
        SolverError::check_index("coefficient", two, self.variable_count())?;
        self.coefficients.swap(one - 1, two - 1);
        Ok(())
    }

    pub fn scale(&mut self, factor: Scalar) {
        for coefficient in self.coefficients.iter_mut() {
            *coefficient = *coefficient * factor;
        }
        self.constant = self.constant * factor;
    }

    pub fn scaled_copy(&self, factor: Scalar) -> Row {
        let mut copy = self.clone();
        copy.scale(factor);
        copy
    }

    pub fn add_row(&mut self, other: &Row) -> Result<()> {
        if other.variable_count() != self.variable_count() {
            return Err(SolverError::DimensionMismatch {
                expected: self.variable_count() + 1,
                got: other.variable_count() + 1,
            });
        }
        for (coefficient, addend) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *coefficient = *coefficient + *addend;
        }
        self.constant = self.constant + other.constant;
        Ok(())
    }

    pub fn is_all_coefficients_zero(&self) -> bool {
        self.coefficients.iter().all(Scalar::is_zero)
    }

    /// `0 = c` with `c != 0`.
    pub fn is_inconsistent(&self) -> bool {
        !self.constant.is_zero() && self.is_all_coefficients_zero()
    }

    pub fn leading_column(&self) -> Option<usize> {
        self.coefficients
            .iter()
            .position(|c| !c.is_zero())
            .map(|idx| idx + 1)
    }

    pub fn evaluate(&self, values: &[Scalar]) -> Result<Scalar> {
        if values.len() != self.variable_count() {
            return Err(SolverError::DimensionMismatch {
                expected: self.variable_count(),
                got: values.len(),
            });
        }
        Ok(self
            .coefficients
            .iter()
            .zip(values)
            .fold(Scalar::ZERO, |sum, (c, v)| sum + *c * *v))
    }

    pub(crate) fn coefficient_at(&self, column: usize) -> Scalar {
        self.coefficients[column]
    }

    pub(crate) fn swap_coefficients_at(&mut self, one: usize, two: usize) {
        self.coefficients.swap(one, two);
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}",
            self.coefficients.iter().join(" "),
            self.constant
        )
    }
}
