//! # Envelope codec: canonical sequence ⇄ `msg` string.
//!
//! [`encode`] serializes a canonical argument sequence to the transportable
//! `msg` string; [`decode`] turns a `msg` string back into a sequence on the
//! receiving side.
//!
//! ## Decode rules
//! - a JSON array contributes its elements, in order;
//! - a JSON string becomes a single-element sequence (already-string
//!   payloads are tolerated);
//! - any other JSON value has no iterable slots and decodes to the empty
//!   sequence;
//! - input that is not JSON at all degrades to a single-element sequence
//!   holding the raw string. Nothing is ever raised to the caller.

use serde_json::Value;

/// Encodes a canonical argument sequence into a `msg` string.
///
/// Serializing a slice of [`Value`]s cannot fail for JSON-representable
/// input; the empty-array fallback keeps the signature infallible.
///
/// # Example
/// ```
/// use serde_json::json;
///
/// let msg = loggate::codec::encode(&[json!("hello"), json!(42)]);
/// assert_eq!(msg, r#"["hello",42]"#);
/// ```
pub fn encode(args: &[Value]) -> String {
    serde_json::to_string(args).unwrap_or_else(|_| String::from("[]"))
}

/// Decodes a `msg` string back into a canonical argument sequence.
///
/// # Example
/// ```
/// use serde_json::json;
///
/// assert_eq!(loggate::codec::decode(r#"["a",1]"#), vec![json!("a"), json!(1)]);
/// assert_eq!(loggate::codec::decode(r#""plain""#), vec![json!("plain")]);
/// ```
pub fn decode(msg: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(msg) {
        Ok(Value::Array(items)) => items,
        Ok(Value::String(s)) => vec![Value::String(s)],
        Ok(_) => Vec::new(),
        Err(_) => vec![Value::String(msg.to_owned())],
    }
}
