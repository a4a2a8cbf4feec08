pub mod error;
pub mod look_angle;
pub mod pressure;
pub mod soundings;
