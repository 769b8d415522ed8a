pub mod targets;
pub mod usage;
