//! Transport Reader
//!
//! Exact-count reads over a byte stream.

use std::io::{ErrorKind, Read};

use crate::error::{LinkError, Result};

/// Read exactly `n` bytes from `reader`, looping over short reads.
///
/// A stream socket may deliver a frame in arbitrarily small chunks, so a
/// single `read` call is never enough. Returns [`LinkError::ConnectionClosed`]
/// if the peer shuts the stream down before `n` bytes arrive; `n == 0`
/// succeeds trivially with an empty buffer.
pub fn read_exact<R: Read>(reader: &mut R, n: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; n];
    let mut filled = 0;

    while filled < n {
        match reader.read(&mut buf[filled..]) {
            // Orderly EOF mid-frame is a failure, never a truncated result
            Ok(0) => {
                return Err(LinkError::ConnectionClosed {
                    expected: n,
                    got: filled,
                })
            }
            Ok(read) => filled += read,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(LinkError::Transport(e)),
        }
    }

    Ok(buf)
}
