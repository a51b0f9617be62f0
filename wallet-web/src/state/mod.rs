//! Application state

pub mod connection;
pub mod wallet;
