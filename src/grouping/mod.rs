pub mod group;
pub use group::*;

pub mod greedy;
pub use greedy::*;
