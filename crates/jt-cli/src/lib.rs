//! Shared command implementations for the `jtdict` and `jtsim` binaries.

pub mod commands;
pub mod render;
