use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite};

use super::error::Result;

// ---------------------------------------------------------------------------
// ByteChannel
// ---------------------------------------------------------------------------

/// A connected, bidirectional byte channel to a remote endpoint.
///
/// Implements [`AsyncRead`] + [`AsyncWrite`] so layers above (the webget
/// pump, tests with in-memory channels) are transport-agnostic. End of
/// stream on the read side is the usual tokio EOF indication: a read that
/// returns zero bytes after everything has been consumed.
///
/// `#[async_trait]` is required here so that `finish` is dyn-compatible,
/// allowing `ByteChannelPtr = Box<dyn ByteChannel>` to compile.
#[async_trait]
pub trait ByteChannel: AsyncRead + AsyncWrite + Send + Unpin {
    // ---
    /// Signal end-of-write to the remote side (FIN).
    ///
    /// The read half remains open so the response can still be drained.
    /// Returns [`FloodgateError::AlreadyFinished`] if called more than once.
    ///
    /// [`FloodgateError::AlreadyFinished`]: super::FloodgateError::AlreadyFinished
    async fn finish(&mut self) -> Result<()>;
}

// ---

/// Convenience type alias for a heap-allocated [`ByteChannel`].
pub type ByteChannelPtr = Box<dyn ByteChannel>;

// ---------------------------------------------------------------------------
// ChannelTransport
// ---------------------------------------------------------------------------

/// Factory trait for opening byte channels.
///
/// Implementation: `floodgate_net::TcpTransport`.
#[async_trait]
pub trait ChannelTransport: Send + Sync {
    // ---
    /// Resolve `host:service` and open a live channel to it.
    ///
    /// `service` is either a decimal port number or a well-known service
    /// name such as `"http"`.
    async fn connect(&self, host: &str, service: &str) -> Result<ByteChannelPtr>;
}
