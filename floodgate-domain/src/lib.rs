//! Core types and the flow-controlled byte stream for Floodgate.
//!
//! This crate defines the vocabulary of the system. The OS-facing crates
//! depend on `floodgate-domain` and speak its types; the only logic that
//! lives here is the in-memory [`ByteStream`] primitive itself.
//!
//! # Structure
//!
//! - `error`     — [`FloodgateError`] and [`Result<T>`] alias
//! - `stream`    — [`ByteStream`] and its [`Writer`] / [`Reader`] views
//! - `transport` — [`ByteChannel`], [`ChannelTransport`] traits
//!
//! [`Result<T>`]: Result

mod error;
mod stream;
mod transport;

// --- error
pub use error::{FloodgateError, Result};

// --- stream
pub use stream::{ByteStream, Reader, Writer};

// --- transport
pub use transport::{
    // ---
    ByteChannel,
    ByteChannelPtr,
    ChannelTransport,
};
