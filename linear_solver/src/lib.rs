pub mod error;
pub mod linear_system;
pub mod matrix_file;
pub mod scalar;

pub use error::{Result, SolverError};
pub use linear_system::{Classification, Solution, System};
pub use scalar::Scalar;
