pub mod config;
pub mod constants;
pub mod error;
pub mod remove_bg;
pub mod types;
pub mod utils;
