//! housefinder-rs
//! ==============
//!
//! Umbrella crate for the housefinder workspace. It re-exports
//! [`housefinder_core`] so the demos under `demos/` can be run with
//! `cargo run --example <name>` from the workspace root.

pub use housefinder_core::*;
