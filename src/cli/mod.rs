//! Command-line interface module.

mod args;
pub mod inspect;
pub mod resolve;
pub mod validate;

pub use args::{Cli, Commands, ModeArgs};
