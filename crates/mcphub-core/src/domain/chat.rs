//! Simulated chat domain types.
//!
//! Conversation turns and tool invocations are ephemeral per-session
//! records. Nothing here is persisted; a session owns its log and drops
//! it on teardown.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The side of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Parse a role from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }

    /// Convert role to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle of a simulated tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCallStatus {
    Pending,
    Success,
    Error,
}

impl ToolCallStatus {
    /// Convert status to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for ToolCallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record of one simulated tool invocation.
///
/// Created pending, then flipped to success or error by the session once
/// the simulated execution resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCall {
    /// Record identifier.
    pub id: String,

    /// Id of the server whose tool was invoked.
    pub server_id: String,

    /// Display name of that server.
    pub server_name: String,

    /// Name of the invoked tool.
    pub tool_name: String,

    /// Invocation lifecycle state.
    pub status: ToolCallStatus,

    /// Simulated execution time in seconds, set on completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,

    /// Input payload handed to the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<serde_json::Value>,

    /// Output payload produced by the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,

    /// Failure message, set on error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolCall {
    /// Create a pending invocation record with a fresh id.
    pub fn pending(
        server_id: impl Into<String>,
        server_name: impl Into<String>,
        tool_name: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            server_id: server_id.into(),
            server_name: server_name.into(),
            tool_name: tool_name.into(),
            status: ToolCallStatus::Pending,
            execution_time: None,
            input: None,
            output: None,
            error: None,
        }
    }

    /// Mark the invocation successful with its payloads and timing.
    #[must_use]
    pub fn succeeded(
        mut self,
        execution_time: f64,
        input: serde_json::Value,
        output: serde_json::Value,
    ) -> Self {
        self.status = ToolCallStatus::Success;
        self.execution_time = Some(execution_time);
        self.input = Some(input);
        self.output = Some(output);
        self
    }

    /// Mark the invocation failed.
    #[must_use]
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.status = ToolCallStatus::Error;
        self.error = Some(message.into());
        self
    }
}

/// One conversation turn.
///
/// Messages reference their triggering tool calls by id; the session owns
/// the single authoritative tool-call log so status flips are visible from
/// every referencing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message identifier.
    pub id: String,

    /// Which side produced the message.
    pub role: ChatRole,

    /// Message text.
    pub content: String,

    /// When the message was created.
    pub timestamp: DateTime<Utc>,

    /// Ids of tool calls this message triggered, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_call_ids: Vec<String>,
}

impl ChatMessage {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Attach a triggering tool call id.
    #[must_use]
    pub fn with_tool_call(mut self, tool_call_id: impl Into<String>) -> Self {
        self.tool_call_ids.push(tool_call_id.into());
        self
    }

    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
            tool_call_ids: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pending_to_success() {
        let call = ToolCall::pending("server-1", "Weather API", "get_forecast");
        assert_eq!(call.status, ToolCallStatus::Pending);
        assert!(call.execution_time.is_none());

        let done = call.succeeded(0.8, json!({"query": "rain?"}), json!({"result": "ok"}));
        assert_eq!(done.status, ToolCallStatus::Success);
        assert_eq!(done.execution_time, Some(0.8));
        assert_eq!(done.input, Some(json!({"query": "rain?"})));
    }

    #[test]
    fn test_failed_call_keeps_identity() {
        let call = ToolCall::pending("server-1", "Weather API", "get_forecast");
        let id = call.id.clone();
        let failed = call.failed("upstream timeout");
        assert_eq!(failed.id, id);
        assert_eq!(failed.status, ToolCallStatus::Error);
        assert_eq!(failed.error.as_deref(), Some("upstream timeout"));
    }

    #[test]
    fn test_message_roles_and_tool_refs() {
        let msg = ChatMessage::assistant("done").with_tool_call("call-1");
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.tool_call_ids, vec!["call-1"]);

        let user = ChatMessage::user("hello");
        assert!(user.tool_call_ids.is_empty());
    }

    #[test]
    fn test_wire_keys() {
        let call = ToolCall::pending("server-1", "Weather API", "get_forecast").succeeded(
            0.8,
            json!({}),
            json!({}),
        );
        let json = serde_json::to_string(&call).unwrap();
        assert!(json.contains("\"serverId\""));
        assert!(json.contains("\"toolName\""));
        assert!(json.contains("\"executionTime\":0.8"));
        assert!(json.contains("\"status\":\"success\""));
    }
}
