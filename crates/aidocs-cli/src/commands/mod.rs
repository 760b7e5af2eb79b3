//! CLI command implementations for aidocs.
//!
//! Each module corresponds to a subcommand (`aidocs <command>`).

pub mod customize;
pub mod generate;
pub mod list;
pub mod status;
