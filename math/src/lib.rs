pub mod angle;
pub mod types;
