//! MCP server with stdio transport
//!
//! Reads one JSON-RPC message per line and writes one response per line.
//! Requests are handled in arrival order; a `tools/call` holds the loop until
//! the tool finishes.

use super::content::CallToolResult;
use super::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use super::tools::ToolRegistry;
use crate::error::{FeedbackError, Result};
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

pub const SERVER_NAME: &str = "Interactive Feedback MCP";
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server that handles JSON-RPC requests over stdio
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Run the server on stdin/stdout until EOF
    pub async fn run(&self) -> Result<()> {
        info!("MCP server started, listening on stdin...");
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.serve(reader, writer).await?;
        info!("MCP server shutting down");
        Ok(())
    }

    /// Serve requests from any line-oriented reader until EOF
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();

            if reader.read_until(b'\n', &mut buf).await? == 0 {
                debug!("Received EOF, shutting down");
                break;
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) => {
                    let message = line.trim();
                    if message.is_empty() {
                        continue;
                    }
                    debug!("Received request: {}", message);
                    self.process_request(message).await
                }
                Err(e) => {
                    warn!("Received a line that is not valid UTF-8: {}", e);
                    Some(JsonRpcResponse::error(
                        None,
                        JsonRpcError::parse_error(format!("Invalid UTF-8: {}", e)),
                    ))
                }
            };

            if let Some(response) = response {
                write_response(&mut writer, &response).await?;
            }
        }

        Ok(())
    }

    /// Process a single message; `None` for notifications
    pub async fn process_request(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(req) => req,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    None,
                    JsonRpcError::parse_error(format!("Invalid JSON: {}", e)),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id,
                JsonRpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        if request.is_notification() {
            debug!("Notification: {}", request.method);
            return None;
        }

        let id = request.id.clone();
        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.handle_initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(self.handle_tools_list()),
            "tools/call" => self.handle_tools_call(request.params).await,
            method => Err(JsonRpcError::method_not_found(method)),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::error(id, error),
        })
    }

    fn handle_initialize(&self) -> Value {
        debug!("Handling initialize");

        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": env!("CARGO_PKG_VERSION")
            },
            "capabilities": {
                "tools": {}
            }
        })
    }

    fn handle_tools_list(&self) -> Value {
        debug!("Handling tools/list");
        json!({ "tools": self.registry.list_tools() })
    }

    async fn handle_tools_call(&self, params: Value) -> std::result::Result<Value, JsonRpcError> {
        let params = params
            .as_object()
            .ok_or_else(|| JsonRpcError::invalid_params("params must be an object"))?;

        let tool_name = params
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| JsonRpcError::invalid_params("missing 'name' field"))?;

        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        debug!("Handling tools/call: {}", tool_name);

        let result = match self.registry.execute(tool_name, arguments).await {
            Ok(content) => CallToolResult::success(content),
            Err(FeedbackError::InvalidParams(message)) => {
                return Err(JsonRpcError::invalid_params(message));
            }
            Err(e) => {
                warn!("Tool {} failed: {}", tool_name, e);
                CallToolResult::failure(format!("Error executing tool {}: {}", tool_name, e))
            }
        };

        serde_json::to_value(result)
            .map_err(|e| JsonRpcError::internal_error(format!("Serialization error: {}", e)))
    }
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let response_json = serde_json::to_string(response).unwrap_or_else(|e| {
        error!("Failed to serialize response: {}", e);
        json!({
            "jsonrpc": JSONRPC_VERSION,
            "id": response.id,
            "error": JsonRpcError::internal_error(format!("Serialization error: {}", e)),
        })
        .to_string()
    });

    debug!("Sending response: {} bytes", response_json.len());

    writer.write_all(response_json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
