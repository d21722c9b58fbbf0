//! Todo Form Component
//!
//! Form for creating new todos at the head of the list.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_todo_context;
use crate::models::TodoDraft;

/// Form for creating new todos
///
/// Blank titles are rejected locally and never submitted. The input
/// clears as soon as the draft is handed off; the create is optimistic,
/// so there is nothing to wait for.
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (title, set_title) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        ctx.create(TodoDraft {
            title: text,
            completed: true,
        });
        set_title.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Create new task"
                autofocus=true
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
