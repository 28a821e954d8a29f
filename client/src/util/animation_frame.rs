//! `requestAnimationFrame` loop with explicit cancellation.
//!
//! The callback runs once per frame and decides whether another frame is
//! wanted. Cancelling (or dropping the loop) revokes the pending request, so no
//! callback fires after the owner has moved on.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

struct Inner {
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Inner {
    fn request(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("requestAnimationFrame failed: {e:?}"),
        }
    }
}

/// A running animation-frame loop. Stops when cancelled or dropped.
pub struct AnimationFrameLoop {
    inner: Rc<Inner>,
}

impl AnimationFrameLoop {
    /// Request the first frame. `on_frame` returns whether to keep going.
    ///
    /// Returns `None` outside a browser window.
    pub fn start(mut on_frame: impl FnMut() -> bool + 'static) -> Option<Self> {
        web_sys::window()?;
        let inner = Rc::new(Inner { pending: Cell::new(None), callback: RefCell::new(None) });
        let weak = Rc::downgrade(&inner);
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if on_frame() {
                inner.request();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.callback.borrow_mut() = Some(callback);
        inner.request();
        Some(Self { inner })
    }

    /// Revoke the pending frame request, if any.
    pub fn cancel(&self) {
        let Some(id) = self.inner.pending.take() else {
            return;
        };
        if let Some(window) = web_sys::window()
            && let Err(e) = window.cancel_animation_frame(id)
        {
            log::warn!("cancelAnimationFrame failed: {e:?}");
        }
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
