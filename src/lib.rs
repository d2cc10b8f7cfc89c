//! # dbglink
//!
//! A blocking TCP client for the length-prefixed RPC protocol spoken by
//! on-device debug agents:
//! - Exact-count stream reads that survive short reads
//! - Length-prefixed request/response framing (8-byte big-endian prefix)
//! - Single-socket connection lifecycle with one round trip in flight
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RpcClient                              │
//! │          (connect / send_command / disconnect)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Protocol Codec                            │
//! │         (encode request / decode response frames)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Transport Reader                            │
//! │            (read exactly N bytes or fail)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod transport;
pub mod protocol;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LinkError, Result};
pub use config::ClientConfig;
pub use network::RpcClient;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dbglink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
