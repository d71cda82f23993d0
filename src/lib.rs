#![cfg_attr(target_arch = "wasm32", allow(dead_code))]
//! A Lissajous "worm" sliding around a canvas, its stroke cycling through a
//! rainbow keyed to the curve parameter.

pub mod color;
pub mod config;
pub mod curve;
pub mod error;
pub mod frame;

pub use color::{color_at, Rgb, Segment};
pub use config::{Layout, WormConfig};
pub use curve::{Curve, Interval, Point};
pub use error::{WormError, WormResult};
pub use frame::{render_frame, Surface};

/// Builds the page's curve: `cos(3t)` across, `sin(2t)` up, scaled to fill
/// the layout.
pub fn lissajous(config: &WormConfig, layout: &Layout) -> WormResult<Curve> {
    config.validate()?;
    Curve::new(
        |t: f64| (3.0 * t).cos(),
        |t: f64| (2.0 * t).sin(),
        config.interval,
        config.capacity,
        config.step(),
        (layout.coefficient_x, layout.coefficient_y),
    )
}

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::{lissajous, Layout, WormConfig, WormError};

    macro_rules! log {
        ($($t:tt)*) => {
            web_sys::console::log_1(&format!($($t)*).into())
        };
    }

    macro_rules! warn {
        ($($t:tt)*) => {
            web_sys::console::warn_1(&format!($($t)*).into())
        };
    }

    mod render;
    mod ticker;

    pub use render::{CanvasSurface, Renderer};
    pub use ticker::Ticker;

    /// Both loops of a running page. Dropping it stops them.
    pub struct Animation {
        pub renderer: Renderer,
        pub ticker: Ticker,
    }

    impl Animation {
        pub fn start(&self) -> Result<(), JsValue> {
            self.renderer.start()?;
            self.ticker.start()?;
            Ok(())
        }

        pub fn stop(&self) {
            self.ticker.stop();
            self.renderer.stop();
        }
    }

    impl Drop for Animation {
        fn drop(&mut self) {
            self.stop();
        }
    }

    thread_local! {
        static ANIMATION: RefCell<Option<Animation>> = const { RefCell::new(None) };
    }

    /// Wires a curve, a ticker and a renderer onto the canvas named in
    /// `config`, sized to the current viewport.
    pub fn build(config: &WormConfig) -> Result<Animation, JsValue> {
        let window = web_sys::window().ok_or(WormError::NoWindow)?;
        let document = window.document().ok_or(WormError::NoDocument)?;
        let canvas = document
            .get_element_by_id(&config.canvas_id)
            .ok_or_else(|| WormError::CanvasNotFound(config.canvas_id.clone()))?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;

        let width = window.inner_width()?.as_f64().ok_or(WormError::NoViewport)?;
        let height = window.inner_height()?.as_f64().ok_or(WormError::NoViewport)?;
        let layout = Layout::from_viewport(config, width, height);

        let curve = Rc::new(RefCell::new(lissajous(config, &layout)?));
        let surface = CanvasSurface::new(canvas, &layout)?;
        log!(
            "worm: {}x{} canvas, {} points, tick every {} ms",
            width,
            height,
            config.capacity,
            config.tick_interval_ms
        );

        Ok(Animation {
            renderer: Renderer::new(surface, curve.clone()),
            ticker: Ticker::new(curve, config.tick_interval_ms)?,
        })
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let animation = build(&WormConfig::default())?;
        animation.start()?;
        ANIMATION.with(|slot| *slot.borrow_mut() = Some(animation));
        Ok(())
    }

    /// Stops both loops; the frame already requested still draws.
    #[wasm_bindgen]
    pub fn stop_animation() {
        ANIMATION.with(|slot| {
            if let Some(animation) = slot.borrow().as_ref() {
                animation.stop();
            }
        });
    }

    #[wasm_bindgen]
    pub fn start_animation() -> Result<(), JsValue> {
        ANIMATION.with(|slot| match slot.borrow().as_ref() {
            Some(animation) => animation.start(),
            None => Ok(()),
        })
    }
}
