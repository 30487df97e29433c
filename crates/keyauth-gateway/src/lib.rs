//! keyauth gateway library entry.
//!
//! Wires config, key bootstrap, and the HTTP handlers around the core engine.
//! It is consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod cli;
pub mod config;
pub mod keys;
pub mod ops;
pub mod router;
pub mod transport;
