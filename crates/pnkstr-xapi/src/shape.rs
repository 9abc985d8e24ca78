//! Summary of a raw search body's structure, for the `probe` command.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseShape {
    pub top_level_keys: Vec<String>,
    pub post_count: usize,
    /// JSON type of `data[0]`, if present.
    pub first_post_kind: Option<&'static str>,
    pub first_post: Option<Value>,
    pub includes: Option<Value>,
    pub result_count: Option<u64>,
}

#[must_use]
pub fn describe_shape(body: &Value) -> ResponseShape {
    let top_level_keys = body
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();
    let posts = body.get("data").and_then(Value::as_array);
    let first_post = posts.and_then(|p| p.first()).cloned();

    ResponseShape {
        top_level_keys,
        post_count: posts.map_or(0, Vec::len),
        first_post_kind: first_post.as_ref().map(json_kind),
        first_post,
        includes: body.get("includes").cloned(),
        result_count: body
            .get("meta")
            .and_then(|m| m.get("result_count"))
            .and_then(Value::as_u64),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
