//! Tolerant field decoding for records whose schema the backend does not pin down.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string, a number or a boolean and keeps its text; null becomes `None`.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s).filter(|s| !s.is_empty()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts a non-negative integer sent as a number or as digits in a string.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_u64().map(|v| v.min(u32::MAX as u64) as u32).unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        text: Option<String>,
        #[serde(default, deserialize_with = "super::count")]
        n: u32,
    }

    #[test]
    fn numbers_and_strings_are_interchangeable() {
        let a: Probe = serde_json::from_str(r#"{"text":5000,"n":"12"}"#).unwrap();
        assert_eq!(a.text.as_deref(), Some("5000"));
        assert_eq!(a.n, 12);
        let b: Probe = serde_json::from_str(r#"{"text":null,"n":null}"#).unwrap();
        assert_eq!(b.text, None);
        assert_eq!(b.n, 0);
        let c: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(c.text, None);
    }
}
