//! MCP (Model Context Protocol) module.
//!
//! Provides JSON-RPC 2.0 over stdio for AI model integration.

pub mod content;
pub mod rpc;
pub mod service;
pub mod tools;
pub mod transport;

pub use service::McpService;
pub use transport::serve_stdio;
