//! CLI subcommands.

pub mod combine;
pub mod process;
