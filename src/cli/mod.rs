//! CLI module for the roster binary

pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

pub use error::CliError;
