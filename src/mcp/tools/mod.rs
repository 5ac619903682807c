//! MCP tools module - defines the tools exposed via JSON-RPC.

pub mod evaluate_document;
pub mod registry;

pub use registry::ToolRegistry;
