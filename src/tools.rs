//! Tool catalog and dispatch.
//!
//! [`ToolDispatcher`] is the transport-independent core: `list_tools` and
//! `call_tool` are pure functions over `pmcp` protocol types, so the whole
//! tool surface can be exercised without a running transport. [`SayHello`]
//! is the thin adapter that binds the dispatcher into the SDK run loop.

use async_trait::async_trait;
use pmcp::types::{CallToolResult, Content, ToolInfo};
use pmcp::{RequestHandlerExtra, ToolHandler};
use serde_json::{json, Value};

use crate::error::ToolError;

/// Name of the only tool this server exposes.
pub const SAY_HELLO: &str = "say_hello";

/// Static tool catalog plus invocation logic.
///
/// Holds no state; every invocation is a pure function of its inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolDispatcher;

impl ToolDispatcher {
    /// Create a dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Advertise the static tool catalog: exactly one descriptor.
    pub fn list_tools(&self) -> Vec<ToolInfo> {
        vec![ToolInfo {
            name: SAY_HELLO.to_string(),
            description: Some("Say hello to someone".to_string()),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name to greet",
                    }
                },
                "required": ["name"],
            }),
        }]
    }

    /// Execute a tool by name.
    ///
    /// For `say_hello`, the `"name"` argument selects who to greet. An
    /// absent mapping, a `null` mapping, and a mapping without a string
    /// `"name"` key all fall back to greeting `"World"`. Any other tool
    /// name is rejected with [`ToolError::UnknownTool`].
    pub fn call_tool(
        &self,
        name: &str,
        arguments: Option<&Value>,
    ) -> Result<Vec<Content>, ToolError> {
        if name != SAY_HELLO {
            return Err(ToolError::UnknownTool(name.to_string()));
        }

        let person = arguments
            .and_then(|args| args.get("name"))
            .and_then(Value::as_str)
            .unwrap_or("World");

        Ok(vec![Content::Text {
            text: format!("Hello, {person}!"),
        }])
    }
}

/// `ToolHandler` adapter for the `say_hello` tool.
///
/// The SDK routes calls by registered name, so `handle` only ever sees
/// `say_hello` arguments; unknown names are rejected before reaching here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SayHello {
    dispatcher: ToolDispatcher,
}

impl SayHello {
    /// Wrap a dispatcher for registration with the server builder.
    pub fn new(dispatcher: ToolDispatcher) -> Self {
        Self { dispatcher }
    }
}

#[async_trait]
impl ToolHandler for SayHello {
    async fn handle(&self, args: Value, _extra: RequestHandlerExtra) -> pmcp::Result<Value> {
        tracing::debug!(tool = SAY_HELLO, "tool invoked");
        let content = self.dispatcher.call_tool(SAY_HELLO, Some(&args))?;
        Ok(serde_json::to_value(CallToolResult {
            content,
            is_error: false,
        })?)
    }

    fn metadata(&self) -> Option<ToolInfo> {
        self.dispatcher.list_tools().into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(content: &[Content]) -> &str {
        match content {
            [Content::Text { text }] => text,
            other => panic!("expected a single text content, got {other:?}"),
        }
    }

    #[test]
    fn catalog_has_exactly_say_hello() {
        let tools = ToolDispatcher::new().list_tools();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, SAY_HELLO);
        assert_eq!(tools[0].input_schema["required"], json!(["name"]));
        assert_eq!(
            tools[0].input_schema["properties"]["name"]["type"],
            "string"
        );
    }

    #[test]
    fn greets_named_caller() {
        let content = ToolDispatcher::new()
            .call_tool(SAY_HELLO, Some(&json!({"name": "Ada"})))
            .unwrap();
        assert_eq!(text_of(&content), "Hello, Ada!");
    }

    #[test]
    fn empty_arguments_default_to_world() {
        let content = ToolDispatcher::new()
            .call_tool(SAY_HELLO, Some(&json!({})))
            .unwrap();
        assert_eq!(text_of(&content), "Hello, World!");
    }

    #[test]
    fn absent_and_null_arguments_default_to_world() {
        let dispatcher = ToolDispatcher::new();
        let absent = dispatcher.call_tool(SAY_HELLO, None).unwrap();
        let null = dispatcher.call_tool(SAY_HELLO, Some(&Value::Null)).unwrap();
        assert_eq!(text_of(&absent), "Hello, World!");
        assert_eq!(text_of(&null), "Hello, World!");
    }

    #[test]
    fn unknown_tool_is_rejected_with_its_name() {
        let err = ToolDispatcher::new()
            .call_tool("bogus_tool", Some(&json!({})))
            .unwrap_err();
        let ToolError::UnknownTool(name) = err;
        assert_eq!(name, "bogus_tool");
    }

    #[test]
    fn metadata_matches_catalog_entry() {
        let handler = SayHello::new(ToolDispatcher::new());
        let info = handler.metadata().expect("say_hello advertises metadata");
        assert_eq!(info.name, SAY_HELLO);
        assert_eq!(info.description.as_deref(), Some("Say hello to someone"));
    }
}
