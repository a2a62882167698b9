pub mod config;
pub mod digits;
pub mod error;
pub mod types;
