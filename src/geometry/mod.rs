pub mod point;
pub use point::*;

pub mod radius;
pub use radius::*;
