//! Engine test support utilities
//!
//! Shared helpers for the engine's unit and integration test binaries. Kept
//! free of any dependency on the engine itself so it can sit in the engine's
//! `[dev-dependencies]` without a cycle.

pub mod logging;
