//! Terminal line rendering for stream records.
//!
//! Rendering is pure: a record maps to the ordered lines that should reach
//! the terminal, and the dispatcher handles writing and flushing them.

use crate::ndjson::{AssistantMessage, ContentBlock, Record, SessionResult, SystemInit, ToolCall};

/// Shown in place of a missing model, path, pattern or tool name.
pub const PLACEHOLDER: &str = "?";

/// Maximum number of characters of a Bash command that are shown.
pub const BASH_PREVIEW_CHARS: usize = 100;

/// Render a record into zero or more output lines.
pub fn render(record: &Record) -> Vec<String> {
    match record {
        Record::SystemInit(init) => vec![render_init(init)],
        Record::Assistant(msg) => render_assistant(msg),
        Record::Result(result) => render_result(result),
        Record::SystemOther { .. } | Record::Unknown { .. } => Vec::new(),
    }
}

fn render_init(init: &SystemInit) -> String {
    format!(
        "[init] model={} tools={}",
        or_placeholder(init.model.as_deref()),
        init.tool_count
    )
}

fn render_assistant(msg: &AssistantMessage) -> Vec<String> {
    msg.content.iter().filter_map(render_block).collect()
}

/// Render one content block; `None` when the block has nothing to show.
pub fn render_block(block: &ContentBlock) -> Option<String> {
    match block {
        ContentBlock::Text { text } => Some(text.clone()),
        ContentBlock::ToolUse(call) => render_tool_call(call),
        ContentBlock::Other { .. } => None,
    }
}

/// Render a tool invocation; `None` for a `TodoWrite` with no active todo.
pub fn render_tool_call(call: &ToolCall) -> Option<String> {
    let line = match call {
        ToolCall::Edit { file_path } => tool_line("Edit", file_path.as_deref()),
        ToolCall::Write { file_path } => tool_line("Write", file_path.as_deref()),
        ToolCall::Read { file_path } => tool_line("Read", file_path.as_deref()),
        ToolCall::Bash { command } => {
            let preview = command.as_deref().map(bash_preview);
            tool_line("Bash", preview.as_deref())
        }
        ToolCall::Glob { pattern } => tool_line("Glob", pattern.as_deref()),
        ToolCall::Grep { pattern } => tool_line("Grep", pattern.as_deref()),
        ToolCall::Task { description } => tool_line("Task", description.as_deref()),
        ToolCall::TodoWrite { todos } => {
            let active = todos.iter().find(|todo| todo.is_in_progress())?;
            format!(
                "  [TODO] {}",
                or_placeholder(active.active_form.as_deref())
            )
        }
        ToolCall::Other { name } => format!("  [TOOL] {}", or_placeholder(name.as_deref())),
    };
    Some(line)
}

fn render_result(result: &SessionResult) -> Vec<String> {
    vec![
        String::new(),
        "--- Claude finished ---".to_string(),
        format!(
            "  Duration: {:.1}s | Turns: {} | Output tokens: {} | Cost: ${:.4}",
            result.duration_ms / 1000.0,
            result.num_turns,
            result.output_tokens,
            result.cost_usd
        ),
    ]
}

fn tool_line(tool: &str, arg: Option<&str>) -> String {
    format!("  [TOOL] {tool}: {}", or_placeholder(arg))
}

/// First [`BASH_PREVIEW_CHARS`] characters of a command, without a marker.
fn bash_preview(command: &str) -> String {
    command.chars().take(BASH_PREVIEW_CHARS).collect()
}

fn or_placeholder(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER)
}
