//! TCP client for the daemon's command port.

use anyhow::{Context, Result};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

/// Forward a single command line to the daemon.
///
/// Fire-and-forget: the daemon sends no acknowledgement over the command
/// port, so the stream is shut down as soon as the line is flushed. Connect
/// and write failures propagate to the caller unretried.
pub async fn send(server: &str, port: u16, command: &str) -> Result<()> {
    let mut stream = TcpStream::connect((server, port))
        .await
        .with_context(|| format!("Failed to connect to {}:{}", server, port))?;

    let mut line = command.to_string();
    line.push('\n');

    stream
        .write_all(line.as_bytes())
        .await
        .with_context(|| format!("Failed to send command to {}:{}", server, port))?;
    stream.flush().await?;
    stream.shutdown().await?;

    Ok(())
}
