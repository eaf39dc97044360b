pub mod config;
pub mod di;
pub mod errors;
