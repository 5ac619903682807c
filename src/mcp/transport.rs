//! Stdio transport - newline-delimited JSON-RPC over stdin/stdout.
//!
//! One request per line, one response per line. Diagnostics go through the
//! logger (stderr) so the stdout channel stays pure JSON-RPC.

use anyhow::Context;
use log::warn;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::mcp::rpc::{RpcRequest, RpcResponse};
use crate::mcp::service::McpService;

/// Serve requests from stdin until the host closes the channel.
pub async fn serve_stdio(service: McpService) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read from stdin")?
    {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<RpcRequest>(line) {
            Ok(request) => {
                log::info!("received MCP request: {}", request.method);
                service.handle_request(request).await
            }
            Err(err) => {
                warn!("failed to parse request line: {err}");
                Some(RpcResponse::parse_error(err.to_string()))
            }
        };

        if let Some(response) = response {
            let payload =
                serde_json::to_string(&response).context("failed to serialize response")?;
            stdout
                .write_all(payload.as_bytes())
                .await
                .context("failed to write to stdout")?;
            stdout
                .write_all(b"\n")
                .await
                .context("failed to write to stdout")?;
            stdout.flush().await.context("failed to flush stdout")?;
        }
    }

    Ok(())
}
