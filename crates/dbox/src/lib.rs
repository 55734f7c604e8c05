//! dbox command-line library
//!
//! This library contains the argument definitions and the conversion run
//! loop. The actual binary is in main.rs.

pub mod cli;

// Re-export commonly used types
pub use cli::{run, Cli, FormatArg, StrategyArg};
