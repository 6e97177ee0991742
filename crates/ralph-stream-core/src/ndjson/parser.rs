//! NDJSON parser for Claude Code stream-json output.
//!
//! Implements tolerant reader pattern: unknown fields ignored, missing or
//! mistyped fields fall back to their defaults. Only malformed JSON fails.

use serde_json::{Number, Value};

use super::types::*;
use crate::error::Result;

/// Parse a single NDJSON line.
pub fn parse_line(line: &str) -> Result<Record> {
    let raw: Value = serde_json::from_str(line)?;
    Ok(parse_value(&raw))
}

/// Classify a JSON value into a record.
pub fn parse_value(raw: &Value) -> Record {
    let record_type = str_field(raw, "type").unwrap_or("");

    match record_type {
        "system" => parse_system(raw),
        "assistant" => parse_assistant(raw),
        "result" => parse_result(raw),
        _ => Record::Unknown {
            record_type: record_type.to_string(),
        },
    }
}

fn str_field<'a>(raw: &'a Value, key: &str) -> Option<&'a str> {
    raw.get(key).and_then(Value::as_str)
}

fn string_field(raw: &Value, key: &str) -> Option<String> {
    str_field(raw, key).map(String::from)
}

fn number_field(raw: &Value, key: &str) -> Number {
    match raw.get(key) {
        Some(Value::Number(n)) => n.clone(),
        _ => Number::from(0),
    }
}

fn f64_field(raw: &Value, key: &str) -> f64 {
    raw.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

fn parse_system(raw: &Value) -> Record {
    let subtype = str_field(raw, "subtype");
    if subtype != Some("init") {
        return Record::SystemOther {
            subtype: subtype.map(String::from),
        };
    }

    let tool_count = raw
        .get("tools")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);

    Record::SystemInit(SystemInit {
        model: string_field(raw, "model"),
        tool_count,
    })
}

fn parse_assistant(raw: &Value) -> Record {
    let content = raw
        .get("message")
        .map(|msg| parse_content_blocks(msg.get("content")))
        .unwrap_or_default();

    Record::Assistant(AssistantMessage { content })
}

fn parse_content_blocks(content: Option<&Value>) -> Vec<ContentBlock> {
    let Some(arr) = content.and_then(Value::as_array) else {
        return Vec::new();
    };

    arr.iter().filter_map(parse_content_block).collect()
}

/// Returns `None` for blocks that are not objects, and for `text` blocks
/// without a string `text`.
fn parse_content_block(block: &Value) -> Option<ContentBlock> {
    let block = block.as_object()?;
    let block_type = block.get("type").and_then(Value::as_str);

    match block_type {
        Some("text") => {
            let text = block.get("text")?.as_str()?.to_string();
            Some(ContentBlock::Text { text })
        }
        Some("tool_use") => {
            let name = block.get("name").and_then(Value::as_str);
            let input = block.get("input").unwrap_or(&Value::Null);
            Some(ContentBlock::ToolUse(parse_tool_call(name, input)))
        }
        other => Some(ContentBlock::Other {
            block_type: other.map(String::from),
        }),
    }
}

fn parse_tool_call(name: Option<&str>, input: &Value) -> ToolCall {
    match name {
        Some("Edit") => ToolCall::Edit {
            file_path: string_field(input, "file_path"),
        },
        Some("Write") => ToolCall::Write {
            file_path: string_field(input, "file_path"),
        },
        Some("Read") => ToolCall::Read {
            file_path: string_field(input, "file_path"),
        },
        Some("Bash") => ToolCall::Bash {
            command: string_field(input, "command"),
        },
        Some("Glob") => ToolCall::Glob {
            pattern: string_field(input, "pattern"),
        },
        Some("Grep") => ToolCall::Grep {
            pattern: string_field(input, "pattern"),
        },
        Some("Task") => ToolCall::Task {
            description: string_field(input, "description"),
        },
        Some("TodoWrite") => ToolCall::TodoWrite {
            todos: parse_todos(input.get("todos")),
        },
        other => ToolCall::Other {
            name: other.map(String::from),
        },
    }
}

fn parse_todos(todos: Option<&Value>) -> Vec<TodoItem> {
    let Some(arr) = todos.and_then(Value::as_array) else {
        return Vec::new();
    };

    arr.iter()
        .filter(|todo| todo.is_object())
        .map(|todo| TodoItem {
            status: string_field(todo, "status"),
            active_form: string_field(todo, "activeForm"),
        })
        .collect()
}

fn parse_result(raw: &Value) -> Record {
    let output_tokens = raw
        .get("usage")
        .map_or_else(|| Number::from(0), |usage| number_field(usage, "output_tokens"));

    Record::Result(SessionResult {
        subtype: string_field(raw, "subtype"),
        duration_ms: f64_field(raw, "duration_ms"),
        cost_usd: f64_field(raw, "total_cost_usd"),
        num_turns: number_field(raw, "num_turns"),
        output_tokens,
    })
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_system_init() {
        let json = r#"{"type":"system","subtype":"init","session_id":"abc123","model":"claude-sonnet-4-20250514","cwd":"/home/user","tools":["Bash","Read"]}"#;
        let record = parse_line(json).unwrap();
        assert_eq!(
            record,
            Record::SystemInit(SystemInit {
                model: Some("claude-sonnet-4-20250514".into()),
                tool_count: 2,
            })
        );
    }

    #[test]
    fn system_without_init_subtype_is_not_init() {
        let json = r#"{"type":"system","subtype":"compact_boundary","model":"m"}"#;
        let record = parse_line(json).unwrap();
        assert_eq!(
            record,
            Record::SystemOther {
                subtype: Some("compact_boundary".into())
            }
        );
    }

    #[test]
    fn system_init_with_non_array_tools_counts_zero() {
        let json = r#"{"type":"system","subtype":"init","tools":{"a":1}}"#;
        let Record::SystemInit(init) = parse_line(json).unwrap() else {
            panic!("expected init");
        };
        assert_eq!(init.tool_count, 0);
        assert_eq!(init.model, None);
    }

    #[test]
    fn tolerant_reader_ignores_unknown_fields() {
        let json = r#"{"type":"system","subtype":"init","model":"m","tools":[],"unknown":"ignored"}"#;
        assert!(parse_line(json).is_ok());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_line(r#"{"type":"system""#).is_err());
        assert!(parse_line("not json").is_err());
    }

    #[test]
    fn unknown_type_returns_unknown_record() {
        let json = r#"{"type":"user","message":{}}"#;
        let record = parse_line(json).unwrap();
        assert_eq!(
            record,
            Record::Unknown {
                record_type: "user".into()
            }
        );
    }

    #[test]
    fn missing_or_non_string_type_is_empty() {
        for json in [r#"{"model":"m"}"#, r#"{"type":7}"#, "[1,2]", "42"] {
            let record = parse_line(json).unwrap();
            assert_eq!(record.kind(), "", "input: {json}");
        }
    }

    #[test]
    fn assistant_blocks_keep_order() {
        let json = r#"{"type":"assistant","message":{"content":[
            {"type":"text","text":"first"},
            {"type":"tool_use","id":"t1","name":"Read","input":{"file_path":"/a.rs"}},
            {"type":"thinking","thinking":"hmm"},
            {"text":"untyped"}
        ]}}"#;
        let Record::Assistant(msg) = parse_line(json).unwrap() else {
            panic!("expected assistant");
        };
        assert_eq!(
            msg.content,
            vec![
                ContentBlock::Text {
                    text: "first".into()
                },
                ContentBlock::ToolUse(ToolCall::Read {
                    file_path: Some("/a.rs".into())
                }),
                ContentBlock::Other {
                    block_type: Some("thinking".into())
                },
                ContentBlock::Other { block_type: None },
            ]
        );
    }

    #[test]
    fn text_block_without_text_is_dropped() {
        let json = r#"{"type":"assistant","message":{"content":[{"type":"text"},{"type":"text","text":3}]}}"#;
        let Record::Assistant(msg) = parse_line(json).unwrap() else {
            panic!("expected assistant");
        };
        assert!(msg.content.is_empty());
    }

    #[test]
    fn assistant_without_message_has_no_content() {
        let Record::Assistant(msg) = parse_line(r#"{"type":"assistant"}"#).unwrap() else {
            panic!("expected assistant");
        };
        assert!(msg.content.is_empty());
    }

    #[test]
    fn tool_use_without_input_uses_defaults() {
        let json = r#"{"type":"assistant","message":{"content":[{"type":"tool_use","name":"Bash"},{"type":"tool_use"}]}}"#;
        let Record::Assistant(msg) = parse_line(json).unwrap() else {
            panic!("expected assistant");
        };
        assert_eq!(
            msg.content,
            vec![
                ContentBlock::ToolUse(ToolCall::Bash { command: None }),
                ContentBlock::ToolUse(ToolCall::Other { name: None }),
            ]
        );
    }

    #[test]
    fn todo_write_collects_todos() {
        let json = r#"{"type":"assistant","message":{"content":[{"type":"tool_use","name":"TodoWrite","input":{"todos":[
            {"content":"Run tests","status":"pending","activeForm":"Running tests"},
            "garbage",
            {"content":"Fix bug","status":"in_progress","activeForm":"Fixing bug"}
        ]}}]}}"#;
        let Record::Assistant(msg) = parse_line(json).unwrap() else {
            panic!("expected assistant");
        };
        let [ContentBlock::ToolUse(ToolCall::TodoWrite { todos })] = msg.content.as_slice() else {
            panic!("expected a single TodoWrite block");
        };
        assert_eq!(todos.len(), 2);
        assert!(!todos[0].is_in_progress());
        assert!(todos[1].is_in_progress());
        assert_eq!(todos[1].active_form.as_deref(), Some("Fixing bug"));
    }

    #[test]
    fn parse_result_fields() {
        let json = r#"{"type":"result","subtype":"success","total_cost_usd":1.23456,"duration_ms":2500,"num_turns":4,"usage":{"input_tokens":10,"output_tokens":321}}"#;
        let Record::Result(result) = parse_line(json).unwrap() else {
            panic!("expected result");
        };
        assert_eq!(result.subtype.as_deref(), Some("success"));
        assert!((result.cost_usd - 1.23456).abs() < f64::EPSILON);
        assert!((result.duration_ms - 2500.0).abs() < f64::EPSILON);
        assert_eq!(result.num_turns, Number::from(4));
        assert_eq!(result.output_tokens, Number::from(321));
    }

    #[test]
    fn parse_result_defaults() {
        let record = parse_line(r#"{"type":"result","subtype":"error_max_turns"}"#).unwrap();
        assert_eq!(
            record,
            Record::Result(SessionResult {
                subtype: Some("error_max_turns".into()),
                ..SessionResult::default()
            })
        );
    }
}
