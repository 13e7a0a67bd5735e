//! Floodgate webget.
//!
//! Fetches a URL over a raw TCP channel, pumping the response through a
//! flow-controlled byte stream to stdout.
//!
//! Usage:
//!   floodgate-webget stanford.edu /class/cs144
//!   floodgate-webget --service 8080 --capacity 4096 localhost /status

use std::io::Write;

// ---

use clap::Parser;
use tracing::info;

// ---

use floodgate_domain::ChannelTransport;
use floodgate_net::TcpTransport;

// ---

mod config;
mod fetch;

// ---

use config::Config;
use fetch::get_url;

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ---

    let cfg = Config::parse();

    let no_color = std::env::var("EMACS").is_ok()
        || std::env::var("NO_COLOR").is_ok()
        || std::env::var("CARGO_TERM_COLOR").as_deref() == Ok("never")
        || !std::io::IsTerminal::is_terminal(&std::io::stderr());

    // Logs go to stderr — stdout carries the raw response body.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %cfg.host,
        path = %cfg.path,
        service = %cfg.service,
        capacity = cfg.capacity,
        "floodgate-webget starting",
    );

    let mut channel = TcpTransport.connect(&cfg.host, &cfg.service).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let bytes = get_url(channel.as_mut(), &cfg.host, &cfg.path, cfg.capacity, &mut out).await?;
    out.flush()?;

    info!(bytes, "response complete");
    Ok(())
}
