//! Rendering caller data as prompt text

use serde_json::Value;

/// Render a JSON value the way it should read inside a prompt
///
/// Strings are inserted verbatim, without surrounding quotes. Every other
/// value is written as compact JSON.
///
/// # Examples
///
/// ```
/// use crew_prompt::render_value;
/// use serde_json::json;
///
/// assert_eq!(render_value(&json!("Revenue up 4%")), "Revenue up 4%");
/// assert_eq!(render_value(&json!({ "score": 0.8 })), r#"{"score":0.8}"#);
/// ```
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
