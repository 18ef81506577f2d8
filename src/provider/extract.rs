//! Reduce a provider response to human-readable text.
//!
//! The provider's response shape is not contractually fixed, so the
//! body is classified against an ordered list of shape matchers and
//! the first match wins. Anything unrecognised is serialized as-is.

use serde_json::Value;

/// Recognised response shapes, in matching order.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape<'a> {
    /// A pre-flattened top-level `output_text` string.
    FlatText(&'a str),
    /// A top-level `output` array of items.
    Itemized(&'a [Value]),
    /// Nothing recognisable; the whole body.
    Raw(&'a Value),
}

type ShapeMatcher = for<'a> fn(&'a Value) -> Option<ResponseShape<'a>>;

const MATCHERS: &[ShapeMatcher] = &[flat_text, itemized];

fn flat_text(response: &Value) -> Option<ResponseShape<'_>> {
    response
        .get("output_text")
        .and_then(Value::as_str)
        .map(ResponseShape::FlatText)
}

fn itemized(response: &Value) -> Option<ResponseShape<'_>> {
    response
        .get("output")
        .and_then(Value::as_array)
        .map(|items| ResponseShape::Itemized(items.as_slice()))
}

impl<'a> ResponseShape<'a> {
    pub fn classify(response: &'a Value) -> Self {
        MATCHERS
            .iter()
            .find_map(|matcher| matcher(response))
            .unwrap_or(ResponseShape::Raw(response))
    }

    pub fn render(&self) -> String {
        match self {
            ResponseShape::FlatText(text) => (*text).to_string(),
            ResponseShape::Itemized(items) => items
                .iter()
                .map(render_item)
                .collect::<Vec<_>>()
                .join("\n"),
            ResponseShape::Raw(value) => value.to_string(),
        }
    }
}

/// Classify and render in one step.
pub fn extract_output_text(response: &Value) -> String {
    ResponseShape::classify(response).render()
}

fn render_item(item: &Value) -> String {
    match item.get("content").filter(|c| is_truthy(c)) {
        Some(Value::Array(parts)) => parts.iter().map(render_part).collect(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => item.to_string(),
    }
}

fn render_part(part: &Value) -> String {
    match part.get("text") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => part.to_string(),
        Some(other) => other.to_string(),
    }
}

/// JSON values a `content` field can hold without counting as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_text_wins_over_output_array() {
        let response = json!({
            "output_text": "flattened",
            "output": [{"content": [{"text": "ignored"}]}]
        });
        assert_eq!(ResponseShape::classify(&response), ResponseShape::FlatText("flattened"));
        assert_eq!(extract_output_text(&response), "flattened");
    }

    #[test]
    fn test_itemized_content_is_concatenated_and_joined() {
        let response = json!({
            "output": [
                {"type": "reasoning", "content": [{"type": "reasoning_text", "text": "think"}]},
                {"type": "message", "content": [
                    {"type": "output_text", "text": "Hello, "},
                    {"type": "output_text", "text": "world"}
                ]}
            ]
        });
        assert_eq!(extract_output_text(&response), "think\nHello, world");
    }

    #[test]
    fn test_part_without_text_is_serialized() {
        let response = json!({"output": [{"content": [{"type": "refusal"}, {"text": "ok"}]}]});
        assert_eq!(extract_output_text(&response), r#"{"type":"refusal"}ok"#);
    }

    #[test]
    fn test_non_array_content_is_stringified() {
        let response = json!({"output": [
            {"content": "plain"},
            {"content": {"k": 1}},
            {"content": 7}
        ]});
        assert_eq!(extract_output_text(&response), "plain\n{\"k\":1}\n7");
    }

    #[test]
    fn test_item_without_content_is_serialized() {
        let response = json!({"output": [
            {"type": "tool_call", "id": "x"},
            {"content": null},
            {"content": ""}
        ]});
        assert_eq!(
            extract_output_text(&response),
            "{\"id\":\"x\",\"type\":\"tool_call\"}\n{\"content\":null}\n{\"content\":\"\"}"
        );
    }

    #[test]
    fn test_empty_output_array_yields_empty_text() {
        let response = json!({"output": []});
        assert_eq!(extract_output_text(&response), "");
    }

    #[test]
    fn test_unrecognised_shape_falls_back_to_raw() {
        let response = json!({"choices": [{"message": {"content": "hi"}}]});
        assert!(matches!(ResponseShape::classify(&response), ResponseShape::Raw(_)));
        assert_eq!(extract_output_text(&response), response.to_string());
    }

    #[test]
    fn test_non_string_output_text_is_not_flat() {
        let response = json!({"output_text": null, "output": [{"content": [{"text": "a"}]}]});
        assert_eq!(extract_output_text(&response), "a");
    }
}
