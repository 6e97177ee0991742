//! Record types for the Claude Code stream-json protocol.

use serde_json::Number;

/// One decoded stream event, classified by its `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    SystemInit(SystemInit),
    /// A `system` record whose subtype is not `init`.
    SystemOther { subtype: Option<String> },
    Assistant(AssistantMessage),
    Result(SessionResult),
    /// Any other `type`, including a missing one (empty string).
    Unknown { record_type: String },
}

impl Record {
    /// The discriminator this record was classified under.
    pub fn kind(&self) -> &str {
        match self {
            Self::SystemInit(_) | Self::SystemOther { .. } => "system",
            Self::Assistant(_) => "assistant",
            Self::Result(_) => "result",
            Self::Unknown { record_type } => record_type,
        }
    }
}

/// Session start announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemInit {
    pub model: Option<String>,
    pub tool_count: usize,
}

/// Complete assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantMessage {
    pub content: Vec<ContentBlock>,
}

/// Content block in an assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text { text: String },
    ToolUse(ToolCall),
    /// Blocks we do not render (`thinking`, untyped blocks, ...).
    Other { block_type: Option<String> },
}

/// A tool invocation, keyed by tool name.
///
/// Each known tool carries only the argument shown on the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    Edit { file_path: Option<String> },
    Write { file_path: Option<String> },
    Read { file_path: Option<String> },
    Bash { command: Option<String> },
    Glob { pattern: Option<String> },
    Grep { pattern: Option<String> },
    Task { description: Option<String> },
    TodoWrite { todos: Vec<TodoItem> },
    Other { name: Option<String> },
}

/// Entry of a `TodoWrite` tool's `todos` list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoItem {
    pub status: Option<String>,
    pub active_form: Option<String>,
}

impl TodoItem {
    pub fn is_in_progress(&self) -> bool {
        self.status.as_deref() == Some("in_progress")
    }
}

/// Session completion summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResult {
    pub subtype: Option<String>,
    pub duration_ms: f64,
    pub cost_usd: f64,
    /// Kept as the producer's number so `4` stays `4`.
    pub num_turns: Number,
    pub output_tokens: Number,
}

impl Default for SessionResult {
    fn default() -> Self {
        Self {
            subtype: None,
            duration_ms: 0.0,
            cost_usd: 0.0,
            num_turns: Number::from(0),
            output_tokens: Number::from(0),
        }
    }
}
