//! HTTP GET pump: one request out, the raw response streamed back through
//! a flow-controlled [`ByteStream`].
//!
//! The response path deliberately goes through the byte stream rather than
//! straight from socket to output: each socket read is sized to the
//! stream's available capacity, so the buffer never overflows (no bytes are
//! ever truncated) and `--capacity` bounds peak memory no matter how large
//! the response is. The writer half is closed on socket EOF; the pump exits
//! once the reader reports the stream finished.

use std::io::Write;

use tokio::io::{AsyncReadExt, AsyncWriteExt};

// ---

use floodgate_domain::{ByteChannel, ByteStream, FloodgateError, Result};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound on a single socket read / output drain.
const READ_CHUNK: usize = 16 * 1024; // 16 KiB

// ---------------------------------------------------------------------------
// get_url
// ---------------------------------------------------------------------------

/// Fetch `http://{host}{path}` over `channel`, writing the raw response
/// (headers and body, exactly as received) to `out`.
///
/// Sends a minimal `HTTP/1.1` GET with `Connection: close`, finishes the
/// channel's write half, then pumps response bytes through an inbound
/// [`ByteStream`] of the given `capacity` until the peer signals EOF and
/// the stream is fully drained. Returns the number of response bytes
/// delivered to `out`.
///
/// On a channel read error the inbound stream is poisoned with
/// [`ByteStream::set_error`] before the fault is surfaced — buffered data
/// can no longer be trusted to be a complete response.
pub async fn get_url<W>(
    // ---
    channel: &mut (dyn ByteChannel + '_),
    host: &str,
    path: &str,
    capacity: usize,
    out: &mut W,
) -> Result<u64>
where
    W: Write + ?Sized,
{
    // ---
    let request = format!("GET {path} HTTP/1.1\r\nHost: {host}\r\nConnection: close\r\n\r\n");
    channel.write_all(request.as_bytes()).await?;
    channel.finish().await?;

    tracing::debug!(%host, %path, "request sent, write half closed");

    let mut inbound = ByteStream::new(capacity);
    let mut chunk = vec![0u8; READ_CHUNK];

    loop {
        // Size the read to the stream's headroom so nothing is truncated.
        // The drain below always empties the buffer, so headroom is never
        // zero here (a zero-length read would be mistaken for EOF).
        let headroom = inbound.writer().available_capacity().min(READ_CHUNK);
        debug_assert!(headroom > 0);

        match channel.read(&mut chunk[..headroom]).await {
            Ok(0) => {
                tracing::debug!("peer EOF, closing inbound stream");
                inbound.writer().close();
            }
            Ok(n) => {
                inbound.writer().push(&chunk[..n]);
                tracing::trace!(
                    bytes = n,
                    buffered = inbound.reader().bytes_buffered(),
                    "response bytes buffered",
                );
            }
            Err(e) => {
                inbound.set_error();
                return Err(FloodgateError::Transport(format!("read from {host}: {e}")));
            }
        }

        while inbound.reader().bytes_buffered() > 0 {
            let drained = inbound.reader().read(READ_CHUNK);
            out.write_all(&drained)?;
        }

        if inbound.reader().is_finished() {
            break;
        }
    }

    Ok(inbound.reader().bytes_popped())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
