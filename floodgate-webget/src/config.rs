//! CLI configuration for `floodgate-webget`.
//!
//! Usage:
//!   floodgate-webget stanford.edu /class/cs144
//!   floodgate-webget --service 8080 localhost /status

use clap::Parser;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "floodgate-webget", about = "Fetch HOST PATH over a raw TCP channel")]
pub struct Config {
    // ---
    /// Host to fetch from (example: stanford.edu).
    pub host: String,

    /// URL path, starting with '/' (example: /class/cs144).
    pub path: String,

    /// TCP service to connect to: a decimal port or a well-known service
    /// name ("http", "https").
    #[arg(long, default_value = "http")]
    pub service: String,

    /// Capacity in bytes of the inbound byte stream buffer.
    ///
    /// Socket reads are sized to the buffer's available capacity, so this
    /// bounds how much of the response is ever held in memory at once.
    #[arg(long, default_value_t = 64 * 1024)]
    pub capacity: usize,
}
