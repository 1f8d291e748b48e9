pub mod datetime;
pub mod sample;
pub mod units;
