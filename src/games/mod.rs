//! Game implementations.
//!
//! - `connect383`: the reference board game played by the CLI
//! - `tree`: explicit game trees for checking search behavior

pub mod connect383;
pub mod tree;
