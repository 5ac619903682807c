//! Tool registry - central routing for MCP tools.
//!
//! Provides `list_tools()` and `call_tool()` per the MCP spec.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::mcp::content::ToolResult;
use crate::review::{DocumentEvaluator, EvaluationOutcome};

use super::evaluate_document::{self, EvaluateDocumentRequest};

/// Tool descriptor conforming to the MCP specification.
#[derive(Debug, Serialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Central registry for all MCP tools.
pub struct ToolRegistry {
    evaluator: DocumentEvaluator,
}

impl ToolRegistry {
    pub fn new(evaluator: DocumentEvaluator) -> Self {
        Self { evaluator }
    }

    /// List all available tools per the MCP spec.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![evaluate_document::descriptor()]
    }

    /// Call a tool by name with the given arguments.
    pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        match name {
            evaluate_document::TOOL_NAME => self.call_evaluate_document(arguments).await,
            _ => ToolResult::error(format!("Unknown tool: {name}")),
        }
    }

    async fn call_evaluate_document(&self, arguments: Option<Value>) -> ToolResult {
        let request = match parse_arguments::<EvaluateDocumentRequest>(arguments) {
            Ok(req) => req,
            Err(err) => return ToolResult::error(err),
        };

        match self.evaluator.evaluate(&request.document).await {
            EvaluationOutcome::Report(report) => {
                let json_text =
                    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string());
                ToolResult::success_text(json_text)
            }
            EvaluationOutcome::Failed(error) => {
                let json_text =
                    serde_json::to_string_pretty(&error).unwrap_or_else(|_| "{}".to_string());
                ToolResult::error(json_text)
            }
        }
    }
}

fn parse_arguments<T: for<'de> Deserialize<'de>>(arguments: Option<Value>) -> Result<T, String> {
    let value = arguments.unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|err| format!("Invalid arguments: {err}"))
}
