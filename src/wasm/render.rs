use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::frame::{render_frame, Surface};
use crate::{Curve, Layout, Rgb, WormError};

/// 2D canvas context sized once to the viewport. Resizes are not tracked.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, layout: &Layout) -> Result<Self, JsValue> {
        canvas.set_width(layout.width as u32);
        canvas.set_height(layout.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(WormError::NoContext2d)?
            .dyn_into()?;
        ctx.set_line_width(layout.line_width());
        ctx.set_line_cap("round");

        Ok(Self {
            ctx,
            width: layout.width,
            height: layout.height,
        })
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn set_color(&mut self, color: Rgb) {
        let css = color.to_hex();
        self.ctx.set_fill_style_str(&css);
        self.ctx.set_stroke_style_str(&css);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that repaints the shared curve.
///
/// The renderer only ever borrows the curve immutably, for the length of
/// one frame. The ticker's mutable borrow lasts one `advance()`. Both run as
/// separate event-loop tasks, which never interleave, so the borrows cannot
/// overlap.
pub struct Renderer {
    running: Rc<Cell<bool>>,
    // id of the frame currently requested, if any
    pending: Rc<Cell<Option<i32>>>,
    frames: Rc<Cell<u64>>,
    frame: FrameCallback,
}

impl Renderer {
    pub fn new(surface: CanvasSurface, curve: Rc<RefCell<Curve>>) -> Self {
        let running = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None));
        let frames = Rc::new(Cell::new(0));

        // `frame` holds the animation-frame closure so that we can keep calling
        // `request_animation_frame` recursively. Storing it inside an `Option`
        // allows us to create the `Closure` first and then obtain a reference to
        // it from within itself.
        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let f = frame.clone();
        let mut surface = surface;
        let mut warned = false;
        *frame.borrow_mut() = Some(Closure::wrap(Box::new({
            let running = running.clone();
            let pending = pending.clone();
            let frames = frames.clone();
            move || {
                pending.set(None);
                frames.set(frames.get() + 1);

                if !render_frame(&mut surface, &curve.borrow()) && !warned {
                    warn!("worm: no points to draw, frame skipped");
                    warned = true;
                }

                // schedule next
                if running.get() {
                    if let Some(callback) = f.borrow().as_ref() {
                        match request_frame(callback) {
                            Ok(id) => pending.set(Some(id)),
                            Err(err) => {
                                warn!("worm: requestAnimationFrame failed: {:?}", err);
                                running.set(false);
                            }
                        }
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        Self {
            running,
            pending,
            frames,
            frame,
        }
    }

    /// Starts the frame chain. A no-op while running, and never requests a
    /// second frame while one is still pending.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.running.replace(true) {
            return Ok(());
        }
        log!("worm: render loop started");
        if self.pending.get().is_some() {
            return Ok(());
        }
        if let Some(callback) = self.frame.borrow().as_ref() {
            let id = request_frame(callback)?;
            self.pending.set(Some(id));
        }
        Ok(())
    }

    /// The pending frame still draws but does not reschedule.
    pub fn stop(&self) {
        if self.running.replace(false) {
            log!("worm: render loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Frames drawn since construction.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }
}

// The frame closure owns a handle to itself; cancel the pending frame and
// release the closure so neither outlives the renderer.
impl Drop for Renderer {
    fn drop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(window) = window() {
                window.cancel_animation_frame(id).ok();
            }
        }
        self.frame.borrow_mut().take();
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()
        .ok_or(WormError::NoWindow)?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
