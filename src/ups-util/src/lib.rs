pub mod cli;
pub mod config;
pub mod constants;
pub mod fetcher;
pub mod logging;
pub mod partition;
pub mod platform;
pub mod render;
pub mod utils;
