//! [`TcpChannel`] — a connected TCP socket implementing [`ByteChannel`],
//! and [`TcpTransport`], the [`ChannelTransport`] that opens them.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadBuf};
use tokio::net::TcpStream;

// ---

use floodgate_domain::{
    // ---
    ByteChannel,
    ByteChannelPtr,
    ChannelTransport,
    FloodgateError,
    Result,
};

use super::resolve;

// ---------------------------------------------------------------------------
// TcpChannel
// ---------------------------------------------------------------------------

pub struct TcpChannel {
    // ---
    inner: TcpStream,
    finished: bool,
}

// ---

impl TcpChannel {
    // ---
    /// Wrap an already-connected socket.
    pub fn new(inner: TcpStream) -> Self {
        Self {
            inner,
            finished: false,
        }
    }
}

// ---

#[async_trait]
impl ByteChannel for TcpChannel {
    // ---
    async fn finish(&mut self) -> Result<()> {
        // ---
        if self.finished {
            return Err(FloodgateError::AlreadyFinished);
        }
        self.finished = true;
        // shutdown() sends FIN on the write half; the read half stays open
        // so the peer's response can still be drained to EOF.
        self.inner.shutdown().await?;
        Ok(())
    }
}

// ---

impl AsyncRead for TcpChannel {
    // ---
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_read(cx, buf)
    }
}

// ---

impl AsyncWrite for TcpChannel {
    // ---
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        data: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.inner).poll_write(cx, data)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.inner).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        // ---
        self.finished = true;
        Pin::new(&mut self.inner).poll_shutdown(cx)
    }
}

// ---------------------------------------------------------------------------
// TcpTransport
// ---------------------------------------------------------------------------

/// Opens [`TcpChannel`]s by resolving `host:service` and connecting.
#[derive(Debug, Default)]
pub struct TcpTransport;

// ---

#[async_trait]
impl ChannelTransport for TcpTransport {
    // ---
    async fn connect(&self, host: &str, service: &str) -> Result<ByteChannelPtr> {
        // ---
        let addr = resolve(host, service).await?;

        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| FloodgateError::Transport(format!("connect {addr}: {e}")))?;

        tracing::info!(%host, %addr, "TCP connected");
        Ok(Box::new(TcpChannel::new(stream)))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    // ---
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use floodgate_domain::{ChannelTransport, FloodgateError};

    use super::TcpTransport;

    // ---

    /// Bytes round-trip through a loopback listener, and `finish()` delivers
    /// EOF to the peer while leaving the read half usable.
    #[tokio::test]
    async fn round_trip_and_half_close() {
        // ---
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();

            // Client finished its write half, so this reads to EOF.
            let mut request = Vec::new();
            sock.read_to_end(&mut request).await.unwrap();
            assert_eq!(request, b"ping");

            sock.write_all(b"pong").await.unwrap();
            // sock drops here — FIN to the client.
        });

        let mut channel = TcpTransport
            .connect("127.0.0.1", &port.to_string())
            .await
            .unwrap();

        channel.write_all(b"ping").await.unwrap();
        channel.finish().await.unwrap();

        let mut reply = Vec::new();
        channel.read_to_end(&mut reply).await.unwrap();
        assert_eq!(reply, b"pong");

        server.await.unwrap();
    }

    // ---

    #[tokio::test]
    async fn finish_twice_errors() {
        // ---
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let accept = tokio::spawn(async move { listener.accept().await.unwrap() });

        let mut channel = TcpTransport
            .connect("127.0.0.1", &port.to_string())
            .await
            .unwrap();

        channel.finish().await.unwrap();
        let err = channel.finish().await.unwrap_err();
        assert!(matches!(err, FloodgateError::AlreadyFinished));

        drop(accept.await.unwrap());
    }
}
