//! Utilities

pub mod constants;
