//! File-backed list of client annotations.
//!
//! The file holds one JSON array. Entries are opaque JSON values; the UI owns their shape.
//! Reads return whatever JSON the file holds; appends start a fresh array when it is not one.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::AnnotationError;

pub struct AnnotationStore {
    path: PathBuf,
    /// Held across each append's read-modify-write.
    write_lock: Mutex<()>,
}

impl AnnotationStore {
    /// Opens the store at `path`, creating it as `[]` when missing.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AnnotationError> {
        let path = path.into();
        if !tokio::fs::try_exists(&path)
            .await
            .map_err(AnnotationError::Read)?
        {
            tokio::fs::write(&path, "[]")
                .await
                .map_err(AnnotationError::Write)?;
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored document: normally the annotation array, oldest first.
    pub async fn list(&self) -> Result<Value, AnnotationError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(AnnotationError::Read)?;
        serde_json::from_str(&raw).map_err(AnnotationError::Parse)
    }

    /// Appends `annotation` and rewrites the file (2-space indented).
    ///
    /// A file that no longer parses as an array is replaced by a fresh list.
    pub async fn append(&self, annotation: Value) -> Result<(), AnnotationError> {
        let _guard = self.write_lock.lock().await;

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(AnnotationError::Read)?;
        let mut annotations = match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(list)) => list,
            Ok(other) => {
                tracing::warn!(
                    path = %self.path.display(),
                    found = %json_kind(&other),
                    "annotations file is not an array, starting over"
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "annotations file unreadable, starting over"
                );
                Vec::new()
            }
        };
        annotations.push(annotation);

        let body = serde_json::to_string_pretty(&annotations)
            .map_err(|e| AnnotationError::Write(std::io::Error::other(e)))?;
        tokio::fs::write(&self.path, body)
            .await
            .map_err(AnnotationError::Write)
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
