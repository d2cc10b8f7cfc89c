//! Network Module
//!
//! Connection lifecycle and request/response round trips.
//!
//! ## Architecture
//! - One TCP socket owned by the client at a time
//! - One round trip in flight, serialized by a mutex
//! - Blocking I/O throughout

mod client;

pub use client::RpcClient;
