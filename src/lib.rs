//! Skew-T soundings and look angles from radiosonde flight tracks.

pub mod atmosphere;
pub mod geodesy;
pub mod sounding;
pub mod web;

#[cfg(test)]
mod tests;
