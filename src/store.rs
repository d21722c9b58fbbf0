//! List Store
//!
//! Canonical ordered todo collection, plus the reconciliation steps that
//! keep it consistent with the server. Uses Leptos reactive_stores for
//! fine-grained reactivity; the list edits themselves are plain functions
//! over `Vec<Todo>` so they can be tested without a browser.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Todo, TodoPatch};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Ordered todo list: server order, optimistic items ahead of it
    pub todos: Vec<Todo>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Reactive snapshot of the list
pub fn store_todos(store: &AppStore) -> Vec<Todo> {
    store.todos().get()
}

/// Replace the whole list (initial page load)
pub fn store_replace_todos(store: &AppStore, todos: Vec<Todo>) {
    *store.todos().write() = todos;
}

/// Append a fetched page to the tail of the list
pub fn store_append_page(store: &AppStore, page: Vec<Todo>) {
    append_page(&mut store.todos().write(), page);
}

/// Put an optimistic todo ahead of the fetched order
pub fn store_prepend_todo(store: &AppStore, todo: Todo) {
    prepend_todo(&mut store.todos().write(), todo);
}

/// Swap the confirmed todo in at the temp item's position
pub fn store_confirm_created(store: &AppStore, temp_id: &str, confirmed: Todo) {
    confirm_created(&mut store.todos().write(), temp_id, confirmed);
}

/// Mark an unconfirmed todo as failed
pub fn store_mark_create_failed(store: &AppStore, temp_id: &str) {
    mark_create_failed(&mut store.todos().write(), temp_id);
}

/// Merge server-returned fields over the stored todo
pub fn store_merge_patch(store: &AppStore, id: &str, patch: TodoPatch) {
    merge_patch(&mut store.todos().write(), id, patch);
}

/// Remove a todo from the store by id
pub fn store_remove_todo(store: &AppStore, id: &str) {
    remove_todo(&mut store.todos().write(), id);
}

// ========================
// Reconciliation Steps
// ========================

/// Append a fetched page behind the existing items, in fetch order
pub fn append_page(todos: &mut Vec<Todo>, page: Vec<Todo>) {
    todos.extend(page);
}

/// Prepend an optimistic todo; it stays ahead of server order until reconciled
pub fn prepend_todo(todos: &mut Vec<Todo>, todo: Todo) {
    todos.insert(0, todo);
}

/// Replace the temp-id item in place with the server-confirmed todo
///
/// The substitution must not change ordering, so the element is swapped
/// where it sits.
pub fn confirm_created(todos: &mut Vec<Todo>, temp_id: &str, confirmed: Todo) {
    todos
        .iter_mut()
        .find(|todo| todo.id == temp_id)
        .map(|todo| *todo = confirmed);
}

/// Soft failure marker: keep the item, flip `completed`
pub fn mark_create_failed(todos: &mut Vec<Todo>, temp_id: &str) {
    todos
        .iter_mut()
        .find(|todo| todo.id == temp_id)
        .map(|todo| todo.completed = !todo.completed);
}

/// Merge server-returned fields over the prior item at the same id
pub fn merge_patch(todos: &mut Vec<Todo>, id: &str, patch: TodoPatch) {
    if let Some(todo) = todos.iter_mut().find(|todo| todo.id == id) {
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(date) = patch.date {
            todo.date = date;
        }
    }
}

/// Drop a todo by id
pub fn remove_todo(todos: &mut Vec<Todo>, id: &str) {
    todos.retain(|todo| todo.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_temp_id, next_temp_id};
    use std::collections::HashSet;

    fn todo(id: &str, title: &str, completed: bool) -> Todo {
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            completed,
            date: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    fn ids_are_unique(todos: &[Todo]) -> bool {
        let mut seen = HashSet::new();
        todos.iter().all(|todo| seen.insert(todo.id.as_str()))
    }

    #[test]
    fn optimistic_create_prepends_a_temp_item() {
        let mut todos = vec![todo("1", "existing", false)];
        let draft = Todo {
            id: next_temp_id(),
            ..todo("", "Buy milk", true)
        };
        prepend_todo(&mut todos, draft);

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].title, "Buy milk");
        assert!(todos[0].completed);
        assert!(is_temp_id(&todos[0].id));
        assert_eq!(todos[1].id, "1");
    }

    #[test]
    fn confirmation_substitutes_the_id_in_place() {
        let mut todos = vec![todo("temp-7", "Buy milk", true), todo("1", "existing", false)];
        confirm_created(&mut todos, "temp-7", todo("42", "Buy milk", true));

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, "42");
        assert_eq!(todos[0].title, "Buy milk");
        assert_eq!(todos[1].id, "1");
        assert!(ids_are_unique(&todos));
    }

    #[test]
    fn failed_create_flips_completed_and_keeps_the_item() {
        let mut todos = vec![todo("temp-7", "Buy milk", true), todo("1", "existing", false)];
        mark_create_failed(&mut todos, "temp-7");

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, "temp-7");
        assert!(!todos[0].completed);
    }

    #[test]
    fn delete_removes_exactly_the_matching_item() {
        let mut todos = vec![todo("42", "a", false), todo("43", "b", true)];
        remove_todo(&mut todos, "42");

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, "43");

        // Unknown id is a no-op
        remove_todo(&mut todos, "42");
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn merge_overlays_server_fields_and_keeps_the_rest() {
        let mut todos = vec![todo("42", "before", false)];
        let patch = TodoPatch {
            title: Some("after".to_string()),
            completed: None,
            date: None,
        };
        merge_patch(&mut todos, "42", patch);

        assert_eq!(todos[0].title, "after");
        assert!(!todos[0].completed);
        assert_eq!(todos[0].date, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn pages_append_in_fetch_order() {
        let mut todos = vec![todo("1", "first page", false)];
        append_page(&mut todos, vec![todo("21", "second page", false), todo("22", "second page", false)]);
        append_page(&mut todos, vec![todo("41", "third page", false)]);

        let ids: Vec<&str> = todos.iter().map(|todo| todo.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "21", "22", "41"]);
    }
}
