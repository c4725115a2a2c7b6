pub mod holiday;
pub mod query;

pub use holiday::*;
pub use query::*;
