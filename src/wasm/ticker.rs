use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

use crate::{Curve, WormError};

/// `setInterval` timer that slides the shared curve forward, independent of
/// the frame rate. It is the curve's only writer.
pub struct Ticker {
    interval_ms: i32,
    handle: Cell<Option<i32>>,
    callback: Closure<dyn FnMut()>,
}

impl Ticker {
    pub fn new(curve: Rc<RefCell<Curve>>, interval_ms: u32) -> Result<Self, WormError> {
        let interval_ms =
            i32::try_from(interval_ms).map_err(|_| WormError::TickIntervalTooLong(interval_ms))?;
        let callback = Closure::wrap(Box::new(move || {
            curve.borrow_mut().advance();
        }) as Box<dyn FnMut()>);

        Ok(Self {
            interval_ms,
            handle: Cell::new(None),
            callback,
        })
    }

    pub fn start(&self) -> Result<(), JsValue> {
        if self.handle.get().is_some() {
            return Ok(());
        }
        let id = window()
            .ok_or(WormError::NoWindow)?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                self.interval_ms,
            )?;
        self.handle.set(Some(id));
        log!("worm: ticker started, every {} ms", self.interval_ms);
        Ok(())
    }

    pub fn stop(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = window() {
                window.clear_interval_with_handle(id);
            }
            log!("worm: ticker stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }
}

// The interval must be cleared before the closure it calls is freed.
impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
