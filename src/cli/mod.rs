//! Command-line interface module.

mod args;
pub mod hash;
pub mod resolve;

pub use args::{Cli, Commands, HashArgs, ResolveArgs};
