//! This crate is intended to contain code that is required to provide or
//! improve the observability of a system. That includes initialization logic
//! for logging as well as a panic hook that routes panics through the logs.
pub mod panic_hook;
pub mod tracing;
