//! JSON test data files

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{error, warn};

/// A fixture row: one JSON object.
pub type DataRow = Map<String, Value>;

/// Loads a JSON array of objects from `path`.
///
/// Missing or unparsable files produce an empty list and a log line.
pub fn load_test_data(path: impl AsRef<Path>) -> Vec<DataRow> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Test data file not found: {}", path.display());
            return Vec::new();
        }
        Err(e) => {
            error!("Error loading test data from {}: {e}", path.display());
            return Vec::new();
        }
    };

    serde_json::from_str(&content).unwrap_or_else(|e| {
        error!("Error loading test data from {}: {e}", path.display());
        Vec::new()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_loads_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("posts.json");
        fs::write(&path, r#"[{"title": "A", "userId": 1}, {"title": "B", "userId": 2}]"#).unwrap();

        let rows = load_test_data(&path);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].get("title"), Some(&json!("B")));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_test_data(dir.path().join("nope.json")).is_empty());
    }

    #[test]
    fn test_non_array_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("object.json");
        fs::write(&path, r#"{"title": "A"}"#).unwrap();
        assert!(load_test_data(&path).is_empty());
    }
}
