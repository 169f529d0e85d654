//! phonectl - one-shot command forwarder for the device-farm daemon.
//!
//! Resolves a target host/port and a command line from the process
//! arguments, writes the command as a single newline-terminated line to the
//! daemon's TCP command port, and exits. The daemon owns all command
//! handling; phonectl never reads a reply.

mod client;
mod command;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Default daemon host.
const DEFAULT_SERVER: &str = "127.0.0.1";

/// Default daemon command port.
const DEFAULT_PORT: u16 = 28001;

#[derive(Debug, Parser)]
#[command(name = "phonectl")]
#[command(version, about = "Forward a command to the device-farm daemon")]
#[command(long_about = "Forwards a single command line to the daemon's TCP command port.\n\
    \n\
    With no COMMAND, sends the status query.")]
struct Cli {
    /// Daemon host to connect to
    #[arg(short = 's', long = "server", value_name = "SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Daemon command port
    #[arg(short = 'p', long = "port", value_name = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Command to forward, joined with spaces
    #[arg(value_name = "COMMAND")]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Only reachable with an explicit `-s ""`; the flag defaults are never
    // empty. Treated as a usage error, not a send failure.
    if cli.server.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let line = command::resolve(&cli.command);
    debug!(server = %cli.server, port = cli.port, command = %line, "forwarding command");

    client::send(&cli.server, cli.port, &line).await
}
