//! Todo List Component
//!
//! Renders the synced list: skeleton rows while a blocking load runs,
//! the last error when one is set, then the rows themselves.

use leptos::prelude::*;

use crate::context::use_todo_context;
use crate::models::{is_temp_id, Todo};
use crate::store::{self, use_app_store};

/// Placeholder rows shown while a blocking load runs
const SKELETON_ROWS: usize = 5;

/// The todo list
///
/// Clicking a row opens the edit modal; the inline button deletes. Both
/// go through the context, which owns all list writes.
#[component]
pub fn TodoList(set_selected: WriteSignal<Option<Todo>>) -> impl IntoView {
    let ctx = use_todo_context();
    let app_store = use_app_store();

    view! {
        <div class="list-group">
            <Show when=move || ctx.loading.get()>
                {(0..SKELETON_ROWS)
                    .map(|_| view! { <div class="skeleton-row"></div> })
                    .collect_view()}
            </Show>

            {move || {
                ctx.error
                    .get()
                    .map(|message| view! { <div class="error">"Error: " {message}</div> })
            }}

            <Show when=move || !ctx.loading.get()>
                <For
                    each=move || store::store_todos(&app_store)
                    key=|todo| {
                        // Key on the mutable fields so reconciliation re-renders the row
                        (todo.id.clone(), todo.title.clone(), todo.completed)
                    }
                    children=move |todo: Todo| {
                        let delete_id = todo.id.clone();
                        let row_todo = todo.clone();
                        // Rows awaiting server confirmation keep a provisional look
                        let row_class = if is_temp_id(&todo.id) { "list pending" } else { "list" };
                        view! {
                            <div class=row_class on:click=move |_| set_selected.set(Some(row_todo.clone()))>
                                <input type="checkbox" prop:checked=todo.completed />
                                <label>{todo.title.clone()}</label>
                                <button
                                    type="button"
                                    class="delete-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        ctx.delete(delete_id.clone());
                                    }
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
