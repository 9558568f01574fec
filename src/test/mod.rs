//! Shared functionality used by unit tests across the crate.

pub mod factories;
