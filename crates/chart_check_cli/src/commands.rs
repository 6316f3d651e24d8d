//! CLI subcommand implementations.

pub mod check_cmd;
pub mod merge_cmd;
