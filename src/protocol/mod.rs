//! Protocol Module
//!
//! Defines the wire protocol for talking to a debug agent.
//!
//! ## Wire Format
//!
//! ### Frame (both directions)
//! ```text
//! ┌───────────────────────┬─────────────────────────────┐
//! │ Length (8, BE u64)    │      Payload (Length)       │
//! └───────────────────────┴─────────────────────────────┘
//! ```
//!
//! ### Request Payload
//! ```text
//! command_bytes  '|'  param_bytes      (params may be empty)
//! ```
//!
//! ### Response Payload
//! UTF-8 text, arbitrary content defined by the agent.
//!
//! The length prefix is the sole authority for frame extent; the `|`
//! delimiter only separates command from params inside a request payload.

mod request;
mod codec;

pub use request::Request;
pub use codec::{
    encode_request, decode_response, write_request, read_response, DELIMITER, LEN_PREFIX_SIZE,
};
