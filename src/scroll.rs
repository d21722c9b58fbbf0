//! Scroll Trigger
//!
//! Debounced window-scroll watcher that asks the context for the next
//! page once the viewport nears the end of the content.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::TodoContext;

/// Quiet period before a scroll burst is evaluated
const DEBOUNCE_MS: u32 = 200;
/// Distance from the content end that arms the next page fetch
const SCROLL_MARGIN_PX: f64 = 100.0;

/// Single timer slot shared between the listener and teardown
type TimerSlot = Rc<RefCell<Option<Timeout>>>;

/// Proximity test: scrolled to within the margin of the content end?
fn near_bottom(scroll_y: f64, viewport_height: f64, content_height: f64) -> bool {
    viewport_height + scroll_y >= content_height - SCROLL_MARGIN_PX
}

/// Cancel-and-reschedule on the single timer slot
///
/// Only the most recent caller within the quiet window survives.
fn reschedule(slot: &TimerSlot, ms: u32, run: impl FnOnce() + 'static) {
    let next = Timeout::new(ms, run);
    if let Some(prior) = slot.borrow_mut().replace(next) {
        prior.cancel();
    }
}

/// Read the scroll position and kick off a fetch if warranted
fn evaluate(ctx: TodoContext) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(body) = window.document().and_then(|doc| doc.body()) else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    let content = body.offset_height() as f64;

    if near_bottom(scroll_y, viewport, content) && !ctx.fetching_more_untracked() {
        ctx.load_more();
    }
}

/// Attach the debounced scroll listener for the current reactive owner
///
/// Each scroll event cancels the pending evaluation and reschedules it,
/// so a burst collapses into one decision after the quiet period. When
/// the owner is cleaned up the listener is detached and any pending
/// timeout cancelled, leaving no dangling callbacks.
pub fn mount_scroll_trigger(ctx: TodoContext) {
    let pending: TimerSlot = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&pending);
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        reschedule(&slot, DEBOUNCE_MS, move || evaluate(ctx));
    });

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    }

    // `on_cleanup` requires `Send + Sync`, but the wasm `Closure` and the `Rc`
    // timer slot are single-threaded. Wrap them so the bound is satisfied; on
    // the single-threaded wasm runtime the wrapper is never accessed off-thread.
    let teardown = leptos::__reexports::send_wrapper::SendWrapper::new((on_scroll, pending));
    on_cleanup(move || {
        let (on_scroll, pending) = teardown.take();
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        }
        let prior = pending.borrow_mut().take();
        if let Some(prior) = prior {
            prior.cancel();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proximity_margin_is_inclusive() {
        // content 1000, viewport 600: the trigger line sits at scroll_y 300
        assert!(near_bottom(300.0, 600.0, 1000.0));
        assert!(!near_bottom(299.0, 600.0, 1000.0));
        assert!(near_bottom(400.0, 600.0, 1000.0));
    }

    #[test]
    fn short_content_is_always_near_the_bottom() {
        assert!(near_bottom(0.0, 600.0, 400.0));
    }
}
