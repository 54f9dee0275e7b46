pub mod generator;
pub mod providers;
