//! Path expressions over JSON response bodies.
//!
//! Supported syntax:
//! - `$` or the empty string: the whole body (used for root-level arrays)
//! - `field`, `field.nested`, with an optional `$.` prefix
//! - `items[0]`, `items[-1]`, `$[2].id`
//! - `items[*]`: the array itself
//!
//! Naming a field on an array projects it over every element, so
//! `data.rockets.name` yields the list of rocket names.

use serde_json::Value;

use crate::error::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Field(String),
    Index(i64),
    Wildcard,
}

/// A parsed path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    expression: String,
    segments: Vec<Segment>,
}

impl JsonPath {
    /// Parses a path expression.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidJsonPath`] for malformed brackets or
    /// non-numeric indices.
    pub fn parse(expression: &str) -> DomainResult<Self> {
        let trimmed = expression.trim();
        let body = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let body = body.strip_prefix('.').unwrap_or(body);

        let mut segments = Vec::new();
        for raw in split_segments(body) {
            parse_segment(&raw, &mut segments)
                .map_err(|reason| DomainError::InvalidJsonPath(format!("{expression}: {reason}")))?;
        }

        Ok(Self {
            expression: trimmed.to_string(),
            segments,
        })
    }

    /// Returns the expression this path was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.expression
    }

    /// Returns true if the path addresses the whole document.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Resolves the path against `root`.
    ///
    /// Returns `None` when any segment is missing. A JSON `null` leaf is
    /// returned as `Some(Value::Null)`.
    #[must_use]
    pub fn query(&self, root: &Value) -> Option<Value> {
        let mut current = root.clone();
        for segment in &self.segments {
            current = step(current, segment)?;
        }
        Some(current)
    }
}

impl std::fmt::Display for JsonPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expression)
    }
}

/// Resolves `expression` against `root`, treating malformed paths as absent.
#[must_use]
pub fn query(root: &Value, expression: &str) -> Option<Value> {
    JsonPath::parse(expression)
        .ok()
        .and_then(|path| path.query(root))
}

fn step(current: Value, segment: &Segment) -> Option<Value> {
    match (segment, current) {
        (Segment::Wildcard, value @ Value::Array(_)) => Some(value),
        (Segment::Field(name), Value::Object(mut map)) => map.remove(name),
        (Segment::Field(name), Value::Array(items)) => Some(Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(mut map) => map.remove(name).unwrap_or(Value::Null),
                    _ => Value::Null,
                })
                .collect(),
        )),
        (Segment::Index(index), Value::Array(mut items)) => {
            let len = i64::try_from(items.len()).ok()?;
            let resolved = if *index < 0 { len + index } else { *index };
            let position = usize::try_from(resolved).ok()?;
            (position < items.len()).then(|| items.swap_remove(position))
        }
        _ => None,
    }
}

/// Split a path into segments, respecting array brackets.
fn split_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut in_bracket = false;

    for ch in path.chars() {
        match ch {
            '.' if !in_bracket => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            '[' => {
                in_bracket = true;
                current.push(ch);
            }
            ']' => {
                in_bracket = false;
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Parse `name[0][1]` into a field segment followed by index segments.
fn parse_segment(raw: &str, out: &mut Vec<Segment>) -> Result<(), String> {
    let (name, mut rest) = raw.find('[').map_or((raw, ""), |at| raw.split_at(at));
    if !name.is_empty() {
        out.push(Segment::Field(name.to_string()));
    }

    while !rest.is_empty() {
        let Some(inner) = rest.strip_prefix('[') else {
            return Err(format!("unexpected '{rest}'"));
        };
        let Some(close) = inner.find(']') else {
            return Err("unclosed '['".to_string());
        };
        let index = inner[..close].trim();
        if index == "*" {
            out.push(Segment::Wildcard);
        } else {
            let index = index
                .parse()
                .map_err(|_| format!("invalid array index '{index}'"))?;
            out.push(Segment::Index(index));
        }
        rest = &inner[close + 1..];
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn body() -> Value {
        json!({
            "id": 5,
            "title": "T",
            "missing": null,
            "data": {
                "rockets": [
                    {"id": "falcon1", "name": "Falcon 1"},
                    {"id": "falcon9", "name": "Falcon 9"},
                    {"id": "starship"}
                ]
            }
        })
    }

    #[test]
    fn test_root_sentinels() {
        let doc = json!([1, 2, 3]);
        assert_eq!(query(&doc, "$"), Some(doc.clone()));
        assert_eq!(query(&doc, ""), Some(doc.clone()));
        assert!(JsonPath::parse("$").unwrap().is_root());
    }

    #[test]
    fn test_dotted_fields() {
        assert_eq!(query(&body(), "title"), Some(json!("T")));
        assert_eq!(query(&body(), "$.id"), Some(json!(5)));
        assert_eq!(query(&body(), "missing"), Some(Value::Null));
        assert_eq!(query(&body(), "absent"), None);
        assert_eq!(query(&body(), "title.deeper"), None);
    }

    #[test]
    fn test_indices() {
        assert_eq!(
            query(&body(), "data.rockets[1].id"),
            Some(json!("falcon9"))
        );
        assert_eq!(
            query(&body(), "data.rockets[-1].id"),
            Some(json!("starship"))
        );
        assert_eq!(query(&body(), "data.rockets[7]"), None);
        assert_eq!(query(&json!([{"id": 4}]), "$[0].id"), Some(json!(4)));
    }

    #[test]
    fn test_projection_over_list() {
        assert_eq!(
            query(&body(), "data.rockets.name"),
            Some(json!(["Falcon 1", "Falcon 9", null]))
        );
    }

    #[test]
    fn test_wildcard_keeps_array() {
        assert_eq!(
            query(&body(), "data.rockets[*]").map(|v| v.as_array().map(Vec::len)),
            Some(Some(3))
        );
    }

    #[test]
    fn test_malformed_paths() {
        assert!(JsonPath::parse("items[abc]").is_err());
        assert!(JsonPath::parse("items[0").is_err());
        assert_eq!(query(&body(), "items[abc]"), None);
    }
}
