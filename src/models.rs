//! Frontend Models
//!
//! Data structures matching the todo service's JSON payloads.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// A single todo item
///
/// `id` is either the server-assigned identifier or a provisional
/// `temp-<n>` value while a create is awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// RFC 3339 timestamp string
    pub date: String,
}

/// Draft for a new todo (POST body)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoDraft {
    pub title: String,
    pub completed: bool,
}

/// PUT body for an edit
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePayload {
    pub title: String,
    pub completed: bool,
    pub date: String,
}

/// Fields returned by the update endpoint
///
/// Anything the server leaves out keeps its prior value when merged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub date: Option<String>,
}

/// One page of the scroll feed
///
/// `next_cursor` is `null` in JSON once the collection is exhausted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    #[serde(rename = "nextCursor")]
    pub next_cursor: Option<u64>,
}

thread_local! {
    static NEXT_TEMP_ID: Cell<u64> = Cell::new(1);
}

/// Mint a provisional id for a todo awaiting server confirmation
pub fn next_temp_id() -> String {
    NEXT_TEMP_ID.with(|counter| {
        let n = counter.get();
        counter.set(n + 1);
        format!("temp-{}", n)
    })
}

/// Whether an id is client-assigned and still unconfirmed
pub fn is_temp_id(id: &str) -> bool {
    id.starts_with("temp-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_ids_are_unique_and_recognizable() {
        let first = next_temp_id();
        let second = next_temp_id();
        assert_ne!(first, second);
        assert!(is_temp_id(&first));
        assert!(is_temp_id(&second));
        assert!(!is_temp_id("42"));
    }

    #[test]
    fn page_json_decodes_with_camel_case_cursor() {
        let page: TodoPage = serde_json::from_str(
            r#"{"todos":[{"id":"1","title":"a","completed":false,"date":"2024-01-01T00:00:00Z"}],"nextCursor":20}"#,
        )
        .unwrap();
        assert_eq!(page.todos.len(), 1);
        assert_eq!(page.next_cursor, Some(20));

        let done: TodoPage = serde_json::from_str(r#"{"todos":[],"nextCursor":null}"#).unwrap();
        assert_eq!(done.next_cursor, None);
    }

    #[test]
    fn patch_fields_default_to_absent() {
        let patch: TodoPatch = serde_json::from_str(r#"{"title":"renamed"}"#).unwrap();
        assert_eq!(patch.title.as_deref(), Some("renamed"));
        assert_eq!(patch.completed, None);
        assert_eq!(patch.date, None);
    }
}
