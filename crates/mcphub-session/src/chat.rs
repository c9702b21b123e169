//! The simulated conversation loop.
//!
//! `send_message` models what a hosted chat surface does with an MCP
//! toolbox: show the user message, think for a moment, surface a
//! pending tool invocation, resolve it after the execution delay, and
//! answer with a reply referencing the call. The only randomness is
//! which active server and tool get picked; payloads, timing and reply
//! text are canned.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use mcphub_core::domain::chat::{ChatMessage, ToolCall, ToolCallStatus};
use mcphub_core::latency::Latency;

use crate::toolbox::ToolboxStore;

/// Reply used when the toolbox has nothing to invoke.
const NO_TOOLS_REPLY: &str =
    "There are no active servers in your toolbox. Add and activate an MCP server first.";

/// Execution time reported for every successful simulated call, in
/// seconds. Unrelated to the wall-clock execution delay.
const EXECUTION_TIME_SECS: f64 = 0.8;

/// One simulated conversation: the message log, the tool-call log, and
/// the dice.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    tool_calls: Vec<ToolCall>,
    latency: Latency,
    rng: StdRng,
}

impl ChatSession {
    /// Create a session with operating-system entropy.
    #[must_use]
    pub fn new(latency: Latency) -> Self {
        Self::from_rng(latency, StdRng::from_entropy())
    }

    /// Create a session with a fixed seed, for deterministic tests.
    #[must_use]
    pub fn with_rng_seed(latency: Latency, seed: u64) -> Self {
        Self::from_rng(latency, StdRng::seed_from_u64(seed))
    }

    fn from_rng(latency: Latency, rng: StdRng) -> Self {
        Self {
            messages: Vec::new(),
            tool_calls: Vec::new(),
            latency,
            rng,
        }
    }

    /// The conversation so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Every tool invocation recorded this session, oldest first.
    #[must_use]
    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.tool_calls
    }

    /// Submit a user message and produce the assistant's reply.
    ///
    /// The user message is appended immediately. After the thinking
    /// pause one random tool from the active toolbox runs through the
    /// pending-then-success lifecycle, and the returned assistant reply
    /// (also appended) carries the call's id. With no active servers,
    /// or an active pick that exposes no tools, the reply is the canned
    /// refusal and nothing is recorded.
    pub async fn send_message(&mut self, content: &str, toolbox: &ToolboxStore) -> ChatMessage {
        self.messages.push(ChatMessage::user(content));
        self.latency.chat_thinking().await;

        let Some((server_id, server_name, tool_name)) = self.pick_tool(toolbox) else {
            let reply = ChatMessage::assistant(NO_TOOLS_REPLY);
            self.messages.push(reply.clone());
            return reply;
        };

        let call = ToolCall::pending(&server_id, &server_name, &tool_name);
        let call_id = call.id.clone();
        self.record_tool_call(call.clone());
        tracing::debug!(server = %server_name, tool = %tool_name, "Simulating tool invocation");

        self.latency.tool_execution().await;
        self.record_tool_call(call.succeeded(
            EXECUTION_TIME_SECS,
            json!({ "query": content }),
            json!({ "result": "Execution completed successfully" }),
        ));

        let reply = ChatMessage::assistant(format!(
            "Processed your request with the {tool_name} tool. Take a look at the result!"
        ))
        .with_tool_call(call_id);
        self.messages.push(reply.clone());
        reply
    }

    /// Append or resolve a tool-call record.
    ///
    /// A non-pending record replaces the first pending record carrying
    /// the same server id and tool name, keeping its position in the
    /// log; everything else is appended.
    pub fn record_tool_call(&mut self, call: ToolCall) {
        if call.status != ToolCallStatus::Pending {
            let slot = self.tool_calls.iter().position(|c| {
                c.server_id == call.server_id
                    && c.tool_name == call.tool_name
                    && c.status == ToolCallStatus::Pending
            });
            if let Some(slot) = slot {
                self.tool_calls[slot] = call;
                return;
            }
        }
        self.tool_calls.push(call);
    }

    /// Uniform random pick of an active server, then one of its tools.
    fn pick_tool(&mut self, toolbox: &ToolboxStore) -> Option<(String, String, String)> {
        let active = toolbox.active_servers();
        if active.is_empty() {
            return None;
        }
        let server = &active[self.rng.gen_range(0..active.len())];
        if server.tools.is_empty() {
            return None;
        }
        let tool = &server.tools[self.rng.gen_range(0..server.tools.len())];
        Some((server.id.clone(), server.name.clone(), tool.name.clone()))
    }
}
