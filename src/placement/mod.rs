pub mod instance;
pub use instance::*;

pub mod solution;
pub use solution::*;

pub mod solver;
pub use solver::*;
