pub mod feiertage_client;

pub use feiertage_client::*;
