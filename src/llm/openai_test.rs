use super::*;

// ===== request building =====

#[test]
fn cc_messages_prepend_system_prompt() {
    let messages = vec![Message::user("Topic: Rust basics")];
    let out = build_chat_completions_messages("You draw diagrams.", &messages);
    assert_eq!(
        out,
        vec![
            CcMessage { role: "system", content: "You draw diagrams." },
            CcMessage { role: "user", content: "Topic: Rust basics" },
        ]
    );
}

#[test]
fn cc_messages_skip_blank_system_prompt() {
    let messages = vec![Message::user("hi")];
    let out = build_chat_completions_messages("  ", &messages);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].role, "user");
}

#[test]
fn resp_input_wraps_text_parts() {
    let messages = vec![Message::user("hello")];
    let json = serde_json::to_value(build_responses_input(&messages)).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "type": "message",
            "role": "user",
            "content": [{ "type": "input_text", "text": "hello" }]
        }])
    );
}

// ===== chat completions =====

#[test]
fn cc_parse_text_response() {
    let json = serde_json::json!({
        "model": "openai/gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "graph TD\nA[Rust] --> B[Syntax]" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "graph TD\nA[Rust] --> B[Syntax]");
    assert_eq!(resp.model, "openai/gpt-3.5-turbo");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 10);
    assert_eq!(resp.output_tokens, 5);
}

#[test]
fn cc_parse_null_content_is_empty_text() {
    let json = serde_json::json!({
        "model": "m",
        "choices": [{ "message": { "role": "assistant", "content": null }, "finish_reason": "length" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert!(resp.text.is_empty());
    assert_eq!(resp.stop_reason, "max_tokens");
    assert_eq!(resp.input_tokens, 0);
}

#[test]
fn cc_parse_missing_choices() {
    let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn cc_parse_invalid_json() {
    assert!(matches!(parse_chat_completions_response("not json"), Err(LlmError::ApiParse(_))));
}

// ===== responses API =====

#[test]
fn resp_parse_joins_message_text_parts() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [
            { "type": "reasoning", "summary": [] },
            {
                "type": "message",
                "content": [
                    { "type": "output_text", "text": "graph TD\n" },
                    { "type": "output_text", "text": "A --> B" }
                ]
            }
        ],
        "usage": { "input_tokens": 15, "output_tokens": 8 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "graph TD\nA --> B");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.output_tokens, 8);
}

#[test]
fn resp_parse_output_text_fallback() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output_text": "Fallback text",
        "usage": { "input_tokens": 5, "output_tokens": 3 }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert_eq!(resp.text, "Fallback text");
}

#[test]
fn resp_parse_truncated_reply() {
    let json = serde_json::json!({
        "model": "gpt-4o",
        "output": [],
        "incomplete_details": { "reason": "max_output_tokens" }
    })
    .to_string();
    let resp = parse_responses_response(&json).unwrap();
    assert!(resp.text.is_empty());
    assert_eq!(resp.stop_reason, "max_tokens");
}
