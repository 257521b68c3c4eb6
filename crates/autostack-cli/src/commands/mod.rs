//! Subcommand handlers.

pub mod init;
