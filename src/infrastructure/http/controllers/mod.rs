pub mod health;
pub mod holidays;
