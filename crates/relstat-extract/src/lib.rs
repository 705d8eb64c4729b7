pub mod extract;
pub mod raw;

pub use extract::*;
pub use raw::*;
