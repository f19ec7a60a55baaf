//! Explicit scheduling primitives over the browser event loop.
//!
//! Two are enough for the whole widget: a cancelable one-shot timer for
//! scroll settlement and a single-pending animation-frame token for
//! frame-throttled live updates. Both reuse one `Closure` for their entire
//! lifetime instead of leaking one per scroll event.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot quiet-period timer. Every `restart` cancels the pending deadline
/// and arms a fresh one, so the callback only runs after a full quiet period
/// with no restarts.
pub struct SettleTimer {
    closure: Closure<dyn FnMut()>,
    handle: Rc<Cell<Option<i32>>>,
    quiet_ms: i32,
}

impl SettleTimer {
    pub fn new(quiet_ms: i32, mut on_settle: impl FnMut() + 'static) -> Self {
        let handle = Rc::new(Cell::new(None));
        let handle_fire = handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            handle_fire.set(None);
            on_settle();
        }) as Box<dyn FnMut()>);
        Self {
            closure,
            handle,
            quiet_ms,
        }
    }

    pub fn restart(&self) {
        self.cancel();
        if let Some(window) = web::window() {
            if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                self.closure.as_ref().unchecked_ref(),
                self.quiet_ms,
            ) {
                self.handle.set(Some(id));
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web::window() {
                window.clear_timeout_with_handle(id);
            }
        }
    }
}

/// Single-pending `requestAnimationFrame` token: at most one callback is in
/// flight; the token clears itself when the frame fires.
pub struct FrameGate {
    closure: Closure<dyn FnMut()>,
    pending: Rc<Cell<bool>>,
}

impl FrameGate {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let pending = Rc::new(Cell::new(false));
        let pending_fire = pending.clone();
        let closure = Closure::wrap(Box::new(move || {
            pending_fire.set(false);
            on_frame();
        }) as Box<dyn FnMut()>);
        Self { closure, pending }
    }

    pub fn request(&self) {
        if self.pending.get() {
            return;
        }
        if let Some(window) = web::window() {
            if window
                .request_animation_frame(self.closure.as_ref().unchecked_ref())
                .is_ok()
            {
                self.pending.set(true);
            }
        }
    }
}
