use crate::error::Result;
use crate::scalar::Scalar;

use super::system::System;

pub fn residuals(system: &System, values: &[Scalar]) -> Result<Vec<Scalar>> {
    system
        .rows()
        .iter()
        .map(|row| Ok(row.evaluate(values)? - row.constant()))
        .collect()
}

pub fn is_satisfied_by(system: &System, values: &[Scalar]) -> Result<bool> {
    // exact comparison; any nonzero residual means the equation fails
    for row in system.rows() {
        if row.evaluate(values)? != row.constant() {
            return Ok(false);
        }
    }
    Ok(true)
}
