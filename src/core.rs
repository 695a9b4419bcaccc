pub mod config;
pub mod estimate;
pub mod hours;
pub mod profile;
pub mod quantize;
pub mod schedule;
