pub mod holiday_decoder;
pub mod ical_encoder;
pub mod ical_text;

pub use holiday_decoder::*;
pub use ical_encoder::*;
