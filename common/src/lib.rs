//! # Portr Common
//!
//! Shared data model for the scanner: port specifications, the
//! well-known service table, validated configuration and scan targets.

pub mod config;
pub mod error;
pub mod network;
pub mod services;

pub use error::ScanError;
