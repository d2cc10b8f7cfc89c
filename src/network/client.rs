//! RPC Client
//!
//! Owns the socket lifecycle and the single round-trip operation.

use std::net::{Shutdown, TcpStream};
use std::time::Duration;

use parking_lot::Mutex;

use crate::config::ClientConfig;
use crate::error::{LinkError, Result};
use crate::protocol::{read_response, write_request, Request};

/// Blocking client for a debug agent's RPC port.
///
/// Created unconnected; [`connect`](RpcClient::connect) opens the socket and
/// [`disconnect`](RpcClient::disconnect) closes it. Exactly one socket is
/// owned at a time, and the mutex around it keeps one round trip in flight:
/// a second `send_command` from another thread blocks until the first
/// returns rather than interleaving frames (the protocol has no request
/// identifiers, so interleaving would misattribute responses).
pub struct RpcClient {
    /// Agent host
    host: String,

    /// Agent TCP port
    port: u16,

    /// Socket options applied on connect
    config: ClientConfig,

    /// Current socket, `None` while disconnected
    stream: Mutex<Option<TcpStream>>,
}

impl RpcClient {
    /// Create an unconnected client for the given agent address
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self::with_config(host, port, ClientConfig::default())
    }

    /// Create an unconnected client with explicit socket options
    pub fn with_config(host: impl Into<String>, port: u16, config: ClientConfig) -> Self {
        Self {
            host: host.into(),
            port,
            config,
            stream: Mutex::new(None),
        }
    }

    /// The agent address this client targets, as `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the client currently holds an open socket
    pub fn is_connected(&self) -> bool {
        self.stream.lock().is_some()
    }

    /// Open a TCP connection to the agent.
    ///
    /// On success the client transitions to connected and retains the socket.
    /// On failure it stays disconnected and the caller decides whether to
    /// retry or abort. Connecting while already connected closes the old
    /// socket and opens a fresh one.
    pub fn connect(&self) -> Result<()> {
        let stream = TcpStream::connect((self.host.as_str(), self.port))
            .and_then(|stream| {
                self.apply_socket_options(&stream)?;
                Ok(stream)
            })
            .map_err(|source| LinkError::ConnectFailed {
                addr: self.addr(),
                source,
            })?;

        let mut guard = self.stream.lock();
        if let Some(old) = guard.take() {
            tracing::debug!("replacing existing connection to {}", self.addr());
            let _ = old.shutdown(Shutdown::Both);
        }
        *guard = Some(stream);

        tracing::debug!("connected to {}", self.addr());
        Ok(())
    }

    /// Close the connection if one is open.
    ///
    /// Idempotent: disconnecting an already-disconnected client is a no-op.
    pub fn disconnect(&self) {
        let mut guard = self.stream.lock();
        if let Some(stream) = guard.take() {
            let _ = stream.shutdown(Shutdown::Both);
            tracing::debug!("disconnected from {}", self.addr());
        }
    }

    /// Send a command and block until the agent's response arrives.
    ///
    /// One full round trip: encode, write the request frame, read the 8-byte
    /// response length, read the payload, decode it as UTF-8 text. Fails with
    /// [`LinkError::NotConnected`] before any I/O if the client is not
    /// connected. A failed round trip leaves the connection in whatever state
    /// the transport reports; callers that want a clean slate call
    /// [`disconnect`](RpcClient::disconnect) themselves. No step is retried.
    pub fn send_command(&self, command: &str, params: Option<&[u8]>) -> Result<String> {
        let mut guard = self.stream.lock();
        let stream = guard.as_mut().ok_or(LinkError::NotConnected)?;

        let request = match params {
            Some(params) => Request::with_params(command, params),
            None => Request::new(command),
        };

        tracing::trace!(
            command,
            payload_len = request.payload_len(),
            "sending request"
        );

        write_request(stream, &request)?;
        let response = read_response(stream)?;

        tracing::trace!(command, response_len = response.len(), "round trip done");
        Ok(response)
    }

    fn apply_socket_options(&self, stream: &TcpStream) -> std::io::Result<()> {
        if self.config.nodelay {
            stream.set_nodelay(true)?;
        }
        if self.config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(self.config.read_timeout_ms)))?;
        }
        if self.config.write_timeout_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(self.config.write_timeout_ms)))?;
        }
        Ok(())
    }
}

impl Drop for RpcClient {
    fn drop(&mut self) {
        self.disconnect();
    }
}
