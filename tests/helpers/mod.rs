#![allow(dead_code, unused_imports)]
pub mod fake_source;
pub mod fake_upstream;
pub mod ics;
pub mod test_app;

pub use fake_source::*;
pub use fake_upstream::*;
pub use ics::*;
pub use test_app::*;
