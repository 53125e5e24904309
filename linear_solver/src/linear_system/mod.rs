pub mod backwards_substitution;
pub mod command;
pub mod gauss_jordan;
pub mod residual;
pub mod row;
pub mod solution;
pub mod system;

pub use command::{Command, CommandLog};
pub use gauss_jordan::GaussJordan;
pub use row::Row;
pub use solution::{Classification, Solution};
pub use system::System;
