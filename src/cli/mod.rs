//! Command-line interface definitions using clap.

mod commands;

pub use commands::{Cli, Commands, ComplexityArg, DraftCommands, ProjectTypeArg};
