//! Common utilities for the Plume style engine.
//!
//! This crate provides shared infrastructure used by the style components:
//! - **Warning System** - colored terminal output for malformed or uninterpreted input

pub mod warning;
