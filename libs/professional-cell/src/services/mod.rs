pub mod professional;
pub mod schedule;
