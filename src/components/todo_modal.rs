//! Edit Modal Component
//!
//! Overlay dialog for editing a todo's title. The edit is pessimistic:
//! the list only changes once the server confirms.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_todo_context;
use crate::models::Todo;

/// Edit dialog for the selected todo
#[component]
pub fn TodoModal(
    selected: ReadSignal<Option<Todo>>,
    set_selected: WriteSignal<Option<Todo>>,
) -> impl IntoView {
    let ctx = use_todo_context();

    let (title, set_title) = signal(String::new());

    // Seed the input whenever a todo is picked
    Effect::new(move |_| {
        if let Some(todo) = selected.get() {
            set_title.set(todo.title.clone());
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(todo) = selected.get() {
            ctx.update(Todo {
                title: title.get(),
                ..todo
            });
        }
        set_selected.set(None);
    };

    view! {
        <Show when=move || selected.get().is_some()>
            <div class="modal-overlay">
                <div class="modal-contain">
                    <div class="modal-title">
                        <h5>"Edit Task"</h5>
                        <button class="close-btn" on:click=move |_| set_selected.set(None)>
                            "×"
                        </button>
                    </div>
                    <form on:submit=submit>
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                        <button type="submit">"Save"</button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
