//! CLI command implementations.

pub mod args;
pub mod output;

pub mod capture;
pub mod dashboard;
pub mod new;
pub mod promote;
pub mod recent;
pub mod search;
pub mod settings;
pub mod types;
pub mod watch;

pub use args::{Cli, Commands};
pub use output::Output;
