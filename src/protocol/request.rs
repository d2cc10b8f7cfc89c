//! Request definitions
//!
//! Represents commands sent to the agent.

/// A request to the agent: a command name plus optional opaque parameter bytes.
///
/// The command names an operation the agent implements; the params are never
/// interpreted by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Command name (must not contain the `|` delimiter byte)
    pub command: String,

    /// Optional parameter bytes, passed through opaquely
    pub params: Option<Vec<u8>>,
}

impl Request {
    /// Create a request with no parameters
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            params: None,
        }
    }

    /// Create a request carrying parameter bytes
    pub fn with_params(command: impl Into<String>, params: impl Into<Vec<u8>>) -> Self {
        Self {
            command: command.into(),
            params: Some(params.into()),
        }
    }

    /// Payload length on the wire: command + delimiter + params
    pub fn payload_len(&self) -> usize {
        self.command.len() + 1 + self.params.as_ref().map_or(0, Vec::len)
    }
}
