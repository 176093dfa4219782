// src/filtering/mod.rs

//! Provides standalone functions for the filter stage.
//!
//! These functions are used by the engine and by the folder scanner. They are
//! exposed publicly to allow for their use in other contexts.

mod extension;

pub use extension::{filter_records, passes_extension_filter};
