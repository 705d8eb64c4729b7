pub mod occupancy;
pub mod series;
pub mod window;

pub use occupancy::*;
pub use series::*;
pub use window::*;
