pub mod cost;
pub mod hours;
pub mod rate;
