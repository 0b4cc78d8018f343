use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a lookup item as the backend sends it.
///
/// The collaborator API returns numeric keys for most collections but some
/// endpoints (Mongo-style `_id`) return strings. `<select>` elements always
/// hand back strings, so selected values go through [`LookupId::parse`] once
/// and are compared by value from then on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LookupId {
    Int(i64),
    Text(String),
}

impl LookupId {
    /// Parse a form value into an id. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Some(LookupId::Int(n)),
            Err(_) => Some(LookupId::Text(trimmed.to_string())),
        }
    }

    /// Read an id out of a JSON value. Strings holding integers become
    /// `Int` so that `3` and `"3"` name the same item.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(LookupId::Int)
                .or_else(|| LookupId::parse(&n.to_string())),
            serde_json::Value::String(s) => LookupId::parse(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            LookupId::Int(n) => serde_json::Value::from(*n),
            LookupId::Text(s) => serde_json::Value::from(s.clone()),
        }
    }
}

impl fmt::Display for LookupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupId::Int(n) => write!(f, "{}", n),
            LookupId::Text(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_numeric_and_text() {
        assert_eq!(LookupId::parse("3"), Some(LookupId::Int(3)));
        assert_eq!(LookupId::parse(" 42 "), Some(LookupId::Int(42)));
        assert_eq!(
            LookupId::parse("64f1a0c2"),
            Some(LookupId::Text("64f1a0c2".to_string()))
        );
        assert_eq!(LookupId::parse("   "), None);
    }

    #[test]
    fn test_json_number_and_string_are_equal() {
        let from_number = LookupId::from_json(&json!(3));
        let from_string = LookupId::from_json(&json!("3"));
        assert_eq!(from_number, from_string);
        assert_eq!(from_number, LookupId::parse("3"));
    }

    #[test]
    fn test_json_null_is_none() {
        assert_eq!(LookupId::from_json(&json!(null)), None);
        assert_eq!(LookupId::from_json(&json!("")), None);
    }

    #[test]
    fn test_display_round_trips_select_value() {
        assert_eq!(LookupId::Int(7).to_string(), "7");
        assert_eq!(LookupId::Text("abc".into()).to_string(), "abc");
    }
}
