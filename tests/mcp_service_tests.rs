use serde_json::{json, Value};

use doc_evaluation_server::mcp::rpc::RpcRequest;
use doc_evaluation_server::mcp::tools::ToolRegistry;
use doc_evaluation_server::mcp::McpService;
use doc_evaluation_server::review::DocumentEvaluator;

fn service() -> McpService {
    McpService::new(ToolRegistry::new(DocumentEvaluator::with_common_backends()))
}

fn request(method: &str, params: Value) -> RpcRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    }))
    .unwrap()
}

async fn dispatch(method: &str, params: Value) -> Value {
    let response = service()
        .handle_request(request(method, params))
        .await
        .expect("expected a response");
    serde_json::to_value(&response).unwrap()
}

#[tokio::test]
async fn test_initialize() {
    let wire = dispatch(
        "initialize",
        json!({
            "protocolVersion": "2024-11-05",
            "clientInfo": { "name": "test-client", "version": "1.0" },
        }),
    )
    .await;

    assert_eq!(wire["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(wire["result"]["serverInfo"]["name"], "doc-evaluation-server");
    assert_eq!(
        wire["result"]["capabilities"]["tools"]["listChanged"],
        false
    );
}

#[tokio::test]
async fn test_tools_list_exposes_single_tool() {
    let wire = dispatch("tools/list", Value::Null).await;

    let tools = wire["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0]["name"], "evaluate_document");
    assert_eq!(tools[0]["inputSchema"]["required"], json!(["document"]));
}

#[tokio::test]
async fn test_call_tool_returns_pretty_report() {
    let wire = dispatch(
        "tools/call",
        json!({
            "name": "evaluate_document",
            "arguments": { "document": "Everything is ambiguous." },
        }),
    )
    .await;

    assert_eq!(wire["result"]["isError"], false);
    let text = wire["result"]["content"][0]["text"].as_str().unwrap();
    let report: Value = serde_json::from_str(text).unwrap();
    assert!(report["summary"]
        .as_str()
        .unwrap()
        .starts_with("This is a summary of the document: "));
    assert_eq!(report["feedback"].as_array().unwrap().len(), 2);
    // Pretty-printed, not compact.
    assert!(text.contains('\n'));
}

#[tokio::test]
async fn test_call_unknown_tool() {
    let wire = dispatch(
        "tools/call",
        json!({ "name": "summarize_document", "arguments": {} }),
    )
    .await;

    assert_eq!(wire["result"]["isError"], true);
    assert_eq!(
        wire["result"]["content"][0]["text"],
        "Unknown tool: summarize_document"
    );
}

#[tokio::test]
async fn test_call_tool_with_missing_document_argument() {
    let wire = dispatch(
        "tools/call",
        json!({ "name": "evaluate_document", "arguments": {} }),
    )
    .await;

    assert_eq!(wire["result"]["isError"], true);
    let text = wire["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("Invalid arguments"));
}

#[tokio::test]
async fn test_unknown_method() {
    let wire = dispatch("resources/list", Value::Null).await;
    assert_eq!(wire["error"]["code"], -32601);
}

#[tokio::test]
async fn test_wrong_jsonrpc_version_is_rejected() {
    let request: RpcRequest = serde_json::from_value(json!({
        "jsonrpc": "1.0",
        "id": 7,
        "method": "ping",
    }))
    .unwrap();

    let response = service().handle_request(request).await.unwrap();
    let wire = serde_json::to_value(&response).unwrap();
    assert_eq!(wire["error"]["code"], -32600);
}

#[tokio::test]
async fn test_ping() {
    let wire = dispatch("ping", Value::Null).await;
    assert_eq!(wire["result"]["ok"], true);
}

#[tokio::test]
async fn test_notifications_get_no_response() {
    let request: RpcRequest = serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "method": "notifications/initialized",
    }))
    .unwrap();

    assert!(service().handle_request(request).await.is_none());
}
