use std::fmt;

use itertools::Itertools;
use strum_macros::Display;

use crate::scalar::Scalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Classification {
    #[strum(serialize = "Solved")]
    Solved,
    #[strum(serialize = "No solutions")]
    NoSolution,
    #[strum(serialize = "Infinitely many solutions")]
    InfiniteSolutions,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    classification: Classification,
    values: Vec<Scalar>,
}

impl Solution {
    pub fn solved(values: Vec<Scalar>) -> Self {
        Self {
            classification: Classification::Solved,
            values,
        }
    }

    pub fn no_solution() -> Self {
        Self {
            classification: Classification::NoSolution,
            values: Vec::new(),
        }
    }

    pub fn infinite_solutions() -> Self {
        Self {
            classification: Classification::InfiniteSolutions,
            values: Vec::new(),
        }
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn is_solved(&self) -> bool {
        self.classification == Classification::Solved
    }

    /// Values in the caller's original variable order.
    pub fn values(&self) -> &[Scalar] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Scalar> {
        self.values
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.classification {
            Classification::Solved => write!(f, "{}", self.values.iter().join("\n")),
            other => write!(f, "{other}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_each_outcome() {
        let solved = Solution::solved(vec![Scalar::from(3.0), Scalar::new(1.0, -1.0)]);
        assert_eq!(solved.to_string(), "3\n1-i");
        assert_eq!(Solution::no_solution().to_string(), "No solutions");
        assert_eq!(
            Solution::infinite_solutions().to_string(),
            "Infinitely many solutions"
        );
    }

    #[test]
    fn only_solved_outcomes_carry_values() {
        assert!(Solution::no_solution().values().is_empty());
        assert!(!Solution::infinite_solutions().is_solved());
        let solved = Solution::solved(vec![Scalar::ONE]);
        assert_eq!(solved.classification(), Classification::Solved);
        assert_eq!(solved.into_values(), vec![Scalar::ONE]);
    }
}
