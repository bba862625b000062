//! Shared helpers for engine test binaries.

pub mod logging;
