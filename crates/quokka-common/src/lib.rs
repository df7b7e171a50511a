//! Common utilities for the quokka exercise crates.
//!
//! This crate provides shared infrastructure used by the sibling crates:
//! - **Warning System** - colored terminal output for suspicious but accepted input

pub mod warning;
