//! Command handlers.
//!
//! Each submodule owns exactly one subcommand. Handlers translate CLI
//! arguments into core types, call into `entigen-core`, and display results;
//! no business logic lives here.

pub mod completions;
pub mod generate;
pub mod kinds;
