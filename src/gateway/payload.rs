//! # Raw call payloads.
//!
//! [`Payload`] is what a call site hands to the formatter: either a single
//! string (which, when a source tag is present, may itself be a serialized
//! sequence) or an ordered collection of arbitrary JSON-representable
//! values. The [`args!`](crate::args) macro is the variadic-style
//! constructor for the collection form.

use serde_json::Value;

/// Raw input of one log call, before canonicalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A single string; may be a serialized sequence when relayed with a
    /// source tag.
    Text(String),
    /// An ordered collection of loggable values.
    Values(Vec<Value>),
}

impl Payload {
    /// The payload as a value sequence, without any source-dependent
    /// parsing: a string stays a single-element sequence.
    ///
    /// Used by the direct console side channel, which forwards the caller's
    /// arguments as given.
    pub fn to_values(&self) -> Vec<Value> {
        match self {
            Payload::Text(s) => vec![Value::String(s.clone())],
            Payload::Values(values) => values.clone(),
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_owned())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Vec<Value>> for Payload {
    fn from(values: Vec<Value>) -> Self {
        Payload::Values(values)
    }
}

/// Builds a [`Payload::Values`] from heterogeneous loggable expressions.
///
/// Each argument goes through [`serde_json::json!`], so anything
/// JSON-representable mixes freely.
///
/// # Example
/// ```
/// use loggate::{args, Payload};
/// use serde_json::json;
///
/// let payload = args!["hello", 42, {"k": true}];
/// assert_eq!(payload, Payload::Values(vec![json!("hello"), json!(42), json!({"k": true})]));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:tt),* $(,)?) => {
        $crate::Payload::Values(vec![ $( $crate::__private::json!($arg) ),* ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_macro_preserves_order() {
        let payload = args![1, "two", 3.0];
        assert_eq!(
            payload,
            Payload::Values(vec![json!(1), json!("two"), json!(3.0)])
        );
    }

    #[test]
    fn text_to_values_is_single_element() {
        let payload = Payload::from("hello");
        assert_eq!(payload.to_values(), vec![json!("hello")]);
    }

    #[test]
    fn empty_args_is_empty_sequence() {
        assert_eq!(args![], Payload::Values(Vec::new()));
    }
}
