//! Flight finder CLI library.
//!
//! Output formats and terminal styling shared by the subcommands.

pub mod output;
