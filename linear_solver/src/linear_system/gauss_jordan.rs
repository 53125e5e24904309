use crate::error::Result;
use crate::scalar::Scalar;

use super::backwards_substitution::BackwardsSubstitution;
use super::command::{Command, CommandLog};
use super::solution::{Classification, Solution};
use super::system::System;

pub struct GaussJordan<'a> {
    system: &'a mut System,
    history: CommandLog,
    active_pivot: usize,
}

impl<'a> GaussJordan<'a> {
    pub fn new(system: &'a mut System) -> Self {
        Self {
            system,
            history: CommandLog::new(),
            active_pivot: 0,
        }
    }

    pub fn run(mut self) -> Result<Solution> {
        log::debug!("input matrix:\n{}", self.system);
        if let Some(outcome) = self.classify_all_zero_system() {
            log::info!("{}", outcome.classification());
            return Ok(outcome);
        }

        self.go_to_echelon_form()?;
        log::debug!("row echelon form:\n{}", self.system);
        let outcome = self.classify_echelon_form();
        self.undo_column_swaps()?;
        if let Some(outcome) = outcome {
            log::info!("{}", outcome.classification());
            return Ok(outcome);
        }

        let mut substitution = BackwardsSubstitution::zero(self.system.variable_count());
        substitution.solve(self.system)?;
        log::debug!("reduced row echelon form:\n{}", self.system);
        log::info!("{}", Classification::Solved);
        Ok(Solution::solved(substitution.solution))
    }

    fn classify_all_zero_system(&self) -> Option<Solution> {
        if self.system.first_nonzero_entry().is_some() {
            return None;
        }
        if self.system.rows().iter().any(|row| row.is_inconsistent()) {
            Some(Solution::no_solution())
        } else {
            Some(Solution::infinite_solutions())
        }
    }

    pub fn go_to_echelon_form(&mut self) -> Result<()> {
        while self.is_not_in_echelon_form() {
            if !self.find_pivot()? {
                // nothing nonzero left below and to the right of the pivot
                break;
            }
            self.normalize_pivot_row()?;
            self.eliminate_below_pivot()?;
            self.go_to_next_pivot();
        }
        Ok(())
    }

    fn is_not_in_echelon_form(&self) -> bool {
        self.active_pivot < self.system.variable_count()
            && self.active_pivot < self.system.equation_count()
    }

    /// Swaps rows first and columns only when the whole column below is zero.
    fn find_pivot(&mut self) -> Result<bool> {
        let pivot = self.active_pivot;
        if !self.system.entry(pivot, pivot).is_zero() {
            return Ok(true);
        }
        if self.swap_in_nonzero_row() {
            return Ok(true);
        }
        let Some(column) = self.first_nonzero_column_after_pivot() else {
            return Ok(false);
        };
        log::debug!("C{} <-> C{}", pivot + 1, column + 1);
        self.history.execute(
            Command::ColumnSwap {
                column_one: pivot + 1,
                column_two: column + 1,
            },
            self.system,
        )?;
        Ok(!self.system.entry(pivot, pivot).is_zero() || self.swap_in_nonzero_row())
    }

    fn swap_in_nonzero_row(&mut self) -> bool {
        let pivot = self.active_pivot;
        let found = (pivot + 1..self.system.equation_count())
            .find(|&row| !self.system.entry(row, pivot).is_zero());
        if let Some(row) = found {
            log::debug!("R{} <-> R{}", pivot + 1, row + 1);
            self.system.swap_rows_at(pivot, row);
        }
        found.is_some()
    }

    fn first_nonzero_column_after_pivot(&self) -> Option<usize> {
        let pivot = self.active_pivot;
        (pivot + 1..self.system.variable_count()).find(|&column| {
            (pivot..self.system.equation_count())
                .any(|row| !self.system.entry(row, column).is_zero())
        })
    }

    fn normalize_pivot_row(&mut self) -> Result<()> {
        let pivot = self.active_pivot;
        let factor = self.system.entry(pivot, pivot).inverse()?;
        if !factor.is_one() {
            log::debug!("{factor} * R{} -> R{}", pivot + 1, pivot + 1);
            self.system.row_at_mut(pivot).scale(factor);
        }
        Ok(())
    }

    fn eliminate_below_pivot(&mut self) -> Result<()> {
        let pivot = self.active_pivot;
        for row in pivot + 1..self.system.equation_count() {
            let factor = -self.system.entry(row, pivot);
            if factor.is_zero() {
                continue;
            }
            log_row_combination(factor, pivot, row);
            self.system.combine_rows_at(row, pivot, factor)?;
        }
        Ok(())
    }

    fn go_to_next_pivot(&mut self) {
        self.active_pivot += 1;
    }

    fn classify_echelon_form(&self) -> Option<Solution> {
        if self.system.rows().iter().any(|row| row.is_inconsistent()) {
            return Some(Solution::no_solution());
        }
        if self.system.rank() < self.system.variable_count() {
            return Some(Solution::infinite_solutions());
        }
        None
    }

    fn undo_column_swaps(&mut self) -> Result<()> {
        if !self.history.is_empty() {
            log::debug!("undoing {} column swap(s)", self.history.len());
        }
        self.history.undo_all(self.system)
    }
}

pub(crate) fn log_row_combination(factor: Scalar, source: usize, target: usize) {
    log::debug!(
        "{factor} * R{} + R{} -> R{}",
        source + 1,
        target + 1,
        target + 1
    );
}
