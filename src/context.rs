//! Application Context
//!
//! Shared state and the sync entry points, provided via Leptos Context API.
//! Every write to the todo list funnels through here: page loads append,
//! user mutations reconcile optimistically. Presentation only renders the
//! resulting state and calls these methods.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::models::{next_temp_id, Todo, TodoDraft, UpdatePayload};
use crate::pagination::{Pagination, PAGE_LIMIT, SORT_FIELD, SORT_ORDER};
use crate::store::{self, AppStore};

/// App-wide sync state and entry points
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// Canonical todo list store
    pub store: AppStore,
    /// Cursor plus in-flight guard for the scroll feed
    pager: RwSignal<Pagination>,
    /// Global loading indicator (initial load and non-optimistic edits)
    pub loading: RwSignal<bool>,
    /// Last error message, if any
    pub error: RwSignal<Option<String>>,
}

/// Get the todo context from context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}

impl TodoContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            pager: RwSignal::new(Pagination::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    /// Whether a page fetch is outstanding (reactive)
    pub fn fetching_more(&self) -> bool {
        self.pager.get().is_fetching()
    }

    /// Non-reactive read of the fetch guard, for event handlers
    pub fn fetching_more_untracked(&self) -> bool {
        self.pager.get_untracked().is_fetching()
    }

    /// True until the owning reactive scope has been disposed
    ///
    /// Responses that land after teardown are dropped instead of touching
    /// dead state.
    fn is_alive(&self) -> bool {
        self.loading.try_get_untracked().is_some()
    }

    /// Load the first page
    ///
    /// The list is replaced wholesale on success; on failure the error is
    /// recorded and the list stays empty. The global loading indicator
    /// clears on both paths.
    pub fn load_initial(&self) {
        let Some(cursor) = self.pager.try_update(|pager| pager.try_begin()).flatten() else {
            return;
        };
        self.loading.set(true);
        let ctx = *self;
        spawn_local(async move {
            let result = api::fetch_page(cursor, PAGE_LIMIT, SORT_FIELD, SORT_ORDER).await;
            if !ctx.is_alive() {
                return;
            }
            match result {
                Ok(page) => {
                    ctx.pager.update(|pager| pager.complete(page.next_cursor));
                    store::store_replace_todos(&ctx.store, page.todos);
                }
                Err(err) => {
                    log::error!("initial page load failed: {}", err);
                    ctx.pager.update(|pager| pager.release());
                    ctx.error.set(Some(err.to_string()));
                }
            }
            ctx.loading.set(false);
        });
    }

    /// Fetch the next page, if the feed has one and none is in flight
    ///
    /// The guard check runs synchronously before the request starts, so a
    /// burst of triggers launches at most one fetch. On failure the cursor
    /// and the list are left as they were; a later trigger retries.
    pub fn load_more(&self) {
        let Some(cursor) = self.pager.try_update(|pager| pager.try_begin()).flatten() else {
            return;
        };
        let ctx = *self;
        spawn_local(async move {
            let result = api::fetch_page(cursor, PAGE_LIMIT, SORT_FIELD, SORT_ORDER).await;
            if !ctx.is_alive() {
                return;
            }
            match result {
                Ok(page) => {
                    ctx.pager.update(|pager| pager.complete(page.next_cursor));
                    store::store_append_page(&ctx.store, page.todos);
                }
                Err(err) => {
                    log::error!("page fetch failed: {}", err);
                    ctx.pager.update(|pager| pager.release());
                    ctx.error.set(Some(err.to_string()));
                }
            }
        });
    }

    /// Optimistic create
    ///
    /// The draft shows up at the head of the list immediately under a temp
    /// id. Confirmation swaps the server todo in at the same position; a
    /// failure flips `completed` as a soft marker instead of rolling back.
    pub fn create(&self, draft: TodoDraft) {
        if draft.title.trim().is_empty() {
            self.error
                .set(Some(ApiError::Validation("title must not be empty".to_string()).to_string()));
            return;
        }
        let todo = Todo {
            id: next_temp_id(),
            title: draft.title.clone(),
            completed: draft.completed,
            date: Utc::now().to_rfc3339(),
        };
        let temp_id = todo.id.clone();
        store::store_prepend_todo(&self.store, todo);

        let ctx = *self;
        spawn_local(async move {
            let result = api::create_todo(&draft).await;
            if !ctx.is_alive() {
                return;
            }
            match result {
                Ok(confirmed) => store::store_confirm_created(&ctx.store, &temp_id, confirmed),
                Err(err) => {
                    log::error!("create failed: {}", err);
                    store::store_mark_create_failed(&ctx.store, &temp_id);
                    ctx.error.set(Some(err.to_string()));
                }
            }
        });
    }

    /// Edit a todo; not optimistic
    ///
    /// The list goes into the loading state while the request is out and
    /// only changes once the server confirms, merging the returned fields
    /// over the item.
    pub fn update(&self, edited: Todo) {
        self.loading.set(true);
        let ctx = *self;
        spawn_local(async move {
            let payload = UpdatePayload {
                title: edited.title.clone(),
                completed: edited.completed,
                date: edited.date.clone(),
            };
            let result = api::update_todo(&edited.id, &payload).await;
            if !ctx.is_alive() {
                return;
            }
            match result {
                Ok(patch) => store::store_merge_patch(&ctx.store, &edited.id, patch),
                Err(err) => {
                    log::error!("update failed: {}", err);
                    ctx.error.set(Some(err.to_string()));
                }
            }
            ctx.loading.set(false);
        });
    }

    /// Optimistic delete
    ///
    /// The row disappears immediately. A failed request is only surfaced
    /// through the error slot; the removal is not rolled back.
    pub fn delete(&self, id: String) {
        store::store_remove_todo(&self.store, &id);
        let ctx = *self;
        spawn_local(async move {
            if let Err(err) = api::delete_todo(&id).await {
                log::error!("delete failed: {}", err);
                if ctx.is_alive() {
                    ctx.error.set(Some(err.to_string()));
                }
            }
        });
    }
}
