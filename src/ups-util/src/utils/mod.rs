pub mod cli;
pub mod env;

// re-export for convenient use with the message macros
pub use colored::Colorize;
