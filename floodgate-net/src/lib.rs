//! OS-facing plumbing for Floodgate.
//!
//! Implements the `floodgate-domain` transport traits over the operating
//! system's TCP stack: `host:service` name resolution and [`TcpChannel`],
//! a connected socket exposed as a [`ByteChannel`].
//!
//! Socket lifecycle is RAII throughout — `tokio::net::TcpStream` owns the
//! kernel handle and releases it exactly once when dropped, on every exit
//! path.
//!
//! [`ByteChannel`]: floodgate_domain::ByteChannel

mod resolve;
mod tcp;

// --- resolve
pub use resolve::resolve;

// --- tcp
pub use tcp::{TcpChannel, TcpTransport};
