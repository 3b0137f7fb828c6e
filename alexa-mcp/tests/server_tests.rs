//! MCP protocol tests over the in-memory fake accessor

mod common;

use common::{item, FakeApi};

use serde_json::{json, Value};

use alexa_mcp::server::{MCPRequest, McpServer};
use alexa_mcp::tools::{get_tool_definitions, ToolCall};

fn request(method: &str, params: Value) -> MCPRequest {
    serde_json::from_value(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params
    }))
    .unwrap()
}

fn call_tool(server: &McpServer<FakeApi>, name: &str, arguments: Value) -> (String, bool) {
    let result = server.handle_tool_call(ToolCall {
        name: name.to_string(),
        arguments,
    });
    let text = result.content[0].text.clone();
    (text, result.is_error.unwrap_or(false))
}

#[test]
fn initialize_reports_server_info() {
    let server = McpServer::new(FakeApi::empty());
    let response = server.handle_request(request("initialize", json!({})));

    let result = response.result.unwrap();
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "alexa-shopping-list");
    assert!(response.error.is_none());
}

#[test]
fn tools_list_exposes_the_seven_tools() {
    let server = McpServer::new(FakeApi::empty());
    let response = server.handle_request(request("tools/list", json!({})));

    let result = response.result.unwrap();
    let tools = result["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "get_list",
            "get_completed_list",
            "add_item",
            "delete_item",
            "mark_complete",
            "mark_incomplete",
            "clear_completed_items"
        ]
    );
    for tool in tools {
        assert!(tool["inputSchema"].is_object());
        assert!(!tool["description"].as_str().unwrap().is_empty());
    }
    assert_eq!(get_tool_definitions().len(), 7);
}

#[test]
fn unknown_method_is_a_protocol_error() {
    let server = McpServer::new(FakeApi::empty());
    let response = server.handle_request(request("resources/list", json!({})));

    let error = response.error.unwrap();
    assert_eq!(error.code, -32601);
    assert!(response.result.is_none());
}

#[test]
fn get_list_returns_incomplete_names_as_json() {
    let api = FakeApi::new(vec![
        item("1", "Milk", false),
        item("2", "Eggs", true),
        item("3", "Jam", false),
    ]);
    let server = McpServer::new(api);

    let (text, is_error) = call_tool(&server, "get_list", json!({}));
    assert!(!is_error);
    let names: Vec<String> = serde_json::from_str(&text).unwrap();
    assert_eq!(names, vec!["Milk", "Jam"]);
}

#[test]
fn get_list_on_empty_list_returns_sentinel() {
    let server = McpServer::new(FakeApi::empty());
    let (text, _) = call_tool(&server, "get_list", json!({}));
    let names: Vec<String> = serde_json::from_str(&text).unwrap();
    assert_eq!(
        names,
        vec!["Shopping list is empty or has no incomplete items."]
    );
}

#[test]
fn get_list_on_fetch_failure_returns_error_sentinel() {
    let server = McpServer::new(FakeApi::empty().fail_fetch_at(1));
    let (text, _) = call_tool(&server, "get_list", json!({}));
    let names: Vec<String> = serde_json::from_str(&text).unwrap();
    assert_eq!(names, vec!["Error: Could not retrieve shopping list items."]);
}

#[test]
fn get_completed_list_returns_completed_names() {
    let api = FakeApi::new(vec![item("1", "Milk", false), item("2", "Eggs", true)]);
    let server = McpServer::new(api);

    let (text, _) = call_tool(&server, "get_completed_list", json!({}));
    let names: Vec<String> = serde_json::from_str(&text).unwrap();
    assert_eq!(names, vec!["Eggs"]);
}

#[test]
fn add_item_accepts_a_single_string() {
    let server = McpServer::new(FakeApi::empty());
    let (text, is_error) = call_tool(&server, "add_item", json!({ "item_values": "Milk" }));

    assert!(!is_error);
    assert_eq!(text, "Added: Milk.");
}

#[test]
fn add_item_accepts_an_array() {
    let server = McpServer::new(FakeApi::empty());
    let (text, _) = call_tool(&server, "add_item", json!({ "item_values": ["Milk", "Eggs"] }));
    assert_eq!(text, "Added: Milk, Eggs.");
}

#[test]
fn add_item_with_blank_names_reports_the_error_string() {
    let server = McpServer::new(FakeApi::empty());
    let (text, _) = call_tool(&server, "add_item", json!({ "item_values": ["", "  "] }));
    assert_eq!(text, "Error: No valid item values provided to add.");
}

#[test]
fn missing_item_values_is_a_tool_error() {
    let server = McpServer::new(FakeApi::empty());
    let (text, is_error) = call_tool(&server, "delete_item", json!({}));

    assert!(is_error);
    assert!(text.contains("item_values"));
}

#[test]
fn wrongly_typed_item_values_is_a_tool_error() {
    let server = McpServer::new(FakeApi::empty());
    let (_, is_error) = call_tool(&server, "mark_complete", json!({ "item_values": 42 }));
    assert!(is_error);
}

#[test]
fn unknown_tool_is_a_tool_error() {
    let server = McpServer::new(FakeApi::empty());
    let (text, is_error) = call_tool(&server, "order_groceries", json!({}));

    assert!(is_error);
    assert_eq!(text, "Unknown tool: order_groceries");
}

#[test]
fn tools_call_wraps_content_and_error_flag() {
    let server = McpServer::new(FakeApi::empty());
    let response = server.handle_request(request(
        "tools/call",
        json!({ "name": "get_list", "arguments": {} }),
    ));

    let result = response.result.unwrap();
    assert_eq!(result["isError"], false);
    assert_eq!(result["content"][0]["type"], "text");
}

#[test]
fn clear_completed_via_tool_call_reports_summary() {
    let api = FakeApi::new(vec![item("1", "Milk", true)]);
    let server = McpServer::new(api);

    let (text, is_error) = call_tool(&server, "clear_completed_items", json!({}));
    assert!(!is_error);
    assert_eq!(
        text,
        "Clear completed process finished after 2 iteration(s). Total Deleted: 1."
    );
}

#[test]
fn delete_via_tool_call_applies_reconciliation() {
    let api = FakeApi::new(vec![item("1", "Milk", false)]);
    let server = McpServer::new(api);

    let (text, _) = call_tool(
        &server,
        "delete_item",
        json!({ "item_values": ["milk", " Milk "] }),
    );
    assert_eq!(text, "Deleted: milk. Not found (incomplete): Milk.");
}
