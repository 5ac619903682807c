pub mod mcp;
pub mod review;

use env_logger::Env;

use crate::mcp::tools::ToolRegistry;
use crate::mcp::McpService;
use crate::review::DocumentEvaluator;

/// Build the MCP service and serve it over stdio until the host closes
/// the channel.
pub async fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let evaluator = DocumentEvaluator::with_common_backends();
    let registry = ToolRegistry::new(evaluator);
    let service = McpService::new(registry);

    log::info!("Doc Evaluation MCP Server running on stdio");
    mcp::serve_stdio(service).await
}
