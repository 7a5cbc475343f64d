//! wavout CLI library.
//!
//! Command implementations for the `wavout` binary: tone synthesis, JSON
//! sample conversion and header inspection.

pub mod commands;
