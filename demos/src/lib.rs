//! Shared helpers for the numbered demos.
pub mod common;
