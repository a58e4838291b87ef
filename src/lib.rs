// Core types and errors
pub mod core;

// Indicator math
pub mod algo;

// Settings and credentials
pub mod config;

// Market data and alert delivery
pub mod client;
pub mod transport;

// Pipeline
pub mod scanner;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types for convenience
pub use crate::core::*;
pub use config::{Credentials, ScanConfig};
pub use scanner::{CrossScanner, ScanReport};
