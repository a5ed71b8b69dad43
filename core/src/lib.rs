//! # Portr Core
//!
//! The concurrent connect-scan engine.
//!
//! * **[`network`]**: single TCP connection probes and host name resolution.
//! * **[`scanner`]**: the batched dispatcher and the thread-safe result aggregator.

pub mod network;
pub mod scanner;
