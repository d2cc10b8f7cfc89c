//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
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
//! command bytes + `|` + param bytes (delimiter always present)
//!
//! ### Response Payload
//! UTF-8 text

use std::io::{Read, Write};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{LinkError, Result};
use crate::transport::read_exact;
use super::Request;

/// Length prefix size: 8-byte big-endian unsigned integer
pub const LEN_PREFIX_SIZE: usize = 8;

/// Delimiter between command and params inside a request payload
pub const DELIMITER: u8 = b'|';

// =============================================================================
// Request Encoding
// =============================================================================

/// Encode a request into a complete wire frame
///
/// Format: payload_len (8, BE) + command + `|` + params.
/// Rejects command names containing the delimiter byte, since the agent
/// splits the payload at the first `|` and the encoding would be ambiguous.
/// No ceiling is imposed on the payload length at this layer.
pub fn encode_request(request: &Request) -> Result<Bytes> {
    if request.command.bytes().any(|b| b == DELIMITER) {
        return Err(LinkError::InvalidCommand(request.command.clone()));
    }

    let payload_len = request.payload_len();

    let mut frame = BytesMut::with_capacity(LEN_PREFIX_SIZE + payload_len);
    frame.put_u64(payload_len as u64);
    frame.put_slice(request.command.as_bytes());
    frame.put_u8(DELIMITER);
    if let Some(params) = &request.params {
        frame.put_slice(params);
    }

    Ok(frame.freeze())
}

// =============================================================================
// Response Decoding
// =============================================================================

/// Decode a response payload into text
///
/// The agent replies with UTF-8 text of arbitrary content; anything else is
/// an encoding error.
pub fn decode_response(payload: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(payload)?)
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Write a complete request frame to a stream
///
/// The whole frame is written and flushed, or the call fails; no partial
/// frame is ever exposed to the caller.
pub fn write_request<W: Write>(writer: &mut W, request: &Request) -> Result<()> {
    let frame = encode_request(request)?;
    writer.write_all(&frame)?;
    writer.flush()?;
    Ok(())
}

/// Read a complete response frame from a stream and decode it
///
/// Blocks until the full frame is received or an error occurs. The length
/// prefix alone decides where the frame ends.
pub fn read_response<R: Read>(reader: &mut R) -> Result<String> {
    // Read length prefix first
    let prefix = read_exact(reader, LEN_PREFIX_SIZE)?;
    let resp_len = u64::from_be_bytes([
        prefix[0], prefix[1], prefix[2], prefix[3], prefix[4], prefix[5], prefix[6], prefix[7],
    ]) as usize;

    // Read exactly that many payload bytes
    let payload = read_exact(reader, resp_len)?;

    decode_response(payload)
}
