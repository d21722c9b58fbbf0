//! Todo Scroll App
//!
//! Main application component: provides the store and context, kicks off
//! the initial page load, and mounts the debounced scroll trigger.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoList, TodoModal};
use crate::context::TodoContext;
use crate::models::Todo;
use crate::scroll::mount_scroll_trigger;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let app_store = Store::new(AppState::default());
    let ctx = TodoContext::new(app_store);
    let (selected_todo, set_selected_todo) = signal::<Option<Todo>>(None);

    // Provide state to all children
    provide_context(app_store);
    provide_context(ctx);

    // First page on mount
    Effect::new(move |_| {
        ctx.load_initial();
    });

    // Debounced infinite scroll; detaches with this component
    mount_scroll_trigger(ctx);

    view! {
        <main>
            <h1 class="title">"Let's Get Things Done!"</h1>
            <p class="description">"One Step Closer to Your Goals"</p>

            <div class="container">
                <TodoForm />
                <TodoList set_selected=set_selected_todo />

                <Show when=move || ctx.loading.get() || ctx.fetching_more()>
                    <div class="spinner" aria-label="Loading Spinner"></div>
                </Show>
            </div>
        </main>

        <TodoModal selected=selected_todo set_selected=set_selected_todo />
    }
}
