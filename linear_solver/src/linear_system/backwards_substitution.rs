use crate::error::Result;
use crate::scalar::Scalar;

use super::gauss_jordan::log_row_combination;
use super::system::System;

pub struct BackwardsSubstitution {
    pub solution: Vec<Scalar>,
}

impl BackwardsSubstitution {
    pub fn zero(n: usize) -> Self {
        Self {
            solution: vec![Scalar::ZERO; n],
        }
    }

    pub fn solve(&mut self, system: &mut System) -> Result<()> {
        let n = self.solution.len();
        debug_assert!(n <= system.equation_count());
        debug_assert_eq!(n, system.variable_count());
        for column in (0..n).rev() {
            for row in (0..column).rev() {
                let factor = -system.entry(row, column);
                if factor.is_zero() {
                    continue;
                }
                log_row_combination(factor, column, row);
                system.combine_rows_at(row, column, factor)?;
            }
        }
        for (idx, value) in self.solution.iter_mut().enumerate() {
            *value = system.row_at(idx).constant();
        }
        Ok(())
    }
}
