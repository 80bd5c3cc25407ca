//! Workspace root package.
//!
//! Holds no code; it exists so `rusty-hook` can install the pre-commit hook
//! configured in the root `Cargo.toml`. See `crates/flightmap-lib` and
//! `crates/flightmap-cli`.
