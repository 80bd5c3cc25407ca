//! Flightmap CLI library.
//!
//! Command handlers, terminal styling and output formatting used by the
//! `flightmap-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
