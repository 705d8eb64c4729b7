pub mod category;
pub mod error;
pub mod record;

pub use category::*;
pub use error::*;
pub use record::*;
