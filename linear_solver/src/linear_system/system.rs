use std::fmt;

use itertools::Itertools;

use crate::error::{Result, SolverError};
use crate::scalar::Scalar;

use super::gauss_jordan::GaussJordan;
use super::residual;
use super::row::Row;
use super::solution::Solution;

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    variable_count: usize,
    rows: Vec<Row>,
}

impl System {
    pub fn new(variable_count: usize, rows: Vec<Row>) -> Result<Self> {
        if variable_count < 1 {
            return Err(SolverError::InvalidInput(format!(
                "variable count must be at least 1, got {variable_count}"
            )));
        }
        if let Some(row) = rows.iter().find(|r| r.variable_count() != variable_count) {
            return Err(SolverError::DimensionMismatch {
                expected: variable_count.saturating_add(1),
                got: row.variable_count() + 1,
            });
        }
        Ok(Self {
            variable_count,
            rows,
        })
    }

    pub fn from_terms(variable_count: usize, rows: Vec<Vec<Scalar>>) -> Result<Self> {
        let rows = rows
            .into_iter()
            .map(|terms| Row::from_terms(variable_count, terms))
            .collect::<Result<Vec<_>>>()?;
        Self::new(variable_count, rows)
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn equation_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Result<&Row> {
        SolverError::check_index("row", index, self.equation_count())?;
        Ok(&self.rows[index - 1])
    }

    pub fn term(&self, row: usize, column: usize) -> Result<Scalar> {
        SolverError::check_index("column", column, self.variable_count.saturating_add(1))?;
        self.row(row)?.term(column)
    }

    pub fn constants(&self) -> Vec<Scalar> {
        self.rows.iter().map(Row::constant).collect()
    }

    pub fn swap_rows(&mut self, one: usize, two: usize) -> Result<()> {
        SolverError::check_index("row", one, self.equation_count())?;
        SolverError::check_index("row", two, self.equation_count())?;
        self.swap_rows_at(one - 1, two - 1);
        Ok(())
    }

    pub fn swap_columns(&mut self, one: usize, two: usize) -> Result<()> {
        SolverError::check_index("column", one, self.variable_count)?;
        SolverError::check_index("column", two, self.variable_count)?;
        self.swap_columns_at(one - 1, two - 1);
        Ok(())
    }

    pub fn first_nonzero_entry(&self) -> Option<(usize, usize)> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(idx, row)| row.leading_column().map(|column| (idx + 1, column)))
    }

    pub fn rank(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| !row.is_all_coefficients_zero())
            .count()
    }

    pub fn satisfied_by(&self, values: &[Scalar]) -> Result<bool> {
        residual::is_satisfied_by(self, values)
    }

    /// On return the columns are back in their original order.
    pub fn solve(&mut self) -> Result<Solution> {
        GaussJordan::new(self).run()
    }

    pub(crate) fn entry(&self, row: usize, column: usize) -> Scalar {
        self.rows[row].coefficient_at(column)
    }

    pub(crate) fn row_at(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    pub(crate) fn row_at_mut(&mut self, row: usize) -> &mut Row {
        &mut self.rows[row]
    }

    pub(crate) fn swap_rows_at(&mut self, one: usize, two: usize) {
        self.rows.swap(one, two);
    }

    pub(crate) fn swap_columns_at(&mut self, one: usize, two: usize) {
        for row in self.rows.iter_mut() {
            row.swap_coefficients_at(one, two);
        }
    }

    pub(crate) fn combine_rows_at(
        &mut self,
        target: usize,
        source: usize,
        factor: Scalar,
    ) -> Result<()> {
        let addend = self.rows[source].scaled_copy(factor);
        self.rows[target].add_row(&addend)
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.iter().join("\n"))
    }
}
