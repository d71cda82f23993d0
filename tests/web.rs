#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use worm::wasm::{CanvasSurface, Renderer, Ticker};
use worm::{lissajous, render_frame, Curve, Layout, WormConfig};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

fn context(canvas: &web_sys::HtmlCanvasElement) -> web_sys::CanvasRenderingContext2d {
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn painted(canvas: &web_sys::HtmlCanvasElement) -> usize {
    let (w, h) = (canvas.width() as f64, canvas.height() as f64);
    let image = context(canvas).get_image_data(0.0, 0.0, w, h).unwrap();
    image.data().chunks(4).filter(|px| px[3] > 0).count()
}

fn shared_curve(width: f64, height: f64) -> (Layout, Rc<RefCell<Curve>>) {
    let config = WormConfig::default();
    let layout = Layout::from_viewport(&config, width, height);
    let curve = lissajous(&config, &layout).unwrap();
    (layout, Rc::new(RefCell::new(curve)))
}

// Resolves after the next display refresh. Callbacks registered earlier in
// the same refresh, like a renderer's pending frame, have run by then.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn surface_takes_layout_size() {
    let layout = Layout::from_viewport(&WormConfig::default(), 320.0, 200.0);
    let canvas = canvas();
    let _surface = CanvasSurface::new(canvas.clone(), &layout).unwrap();
    assert_eq!(canvas.width(), 320);
    assert_eq!(canvas.height(), 200);
}

#[wasm_bindgen_test]
fn frame_paints_pixels() {
    let (layout, curve) = shared_curve(320.0, 200.0);
    let canvas = canvas();
    let mut surface = CanvasSurface::new(canvas.clone(), &layout).unwrap();

    assert!(render_frame(&mut surface, &curve.borrow()));
    assert!(painted(&canvas) > 0);
}

#[wasm_bindgen_test(async)]
async fn ticker_advances_until_stopped() {
    let (_, curve) = shared_curve(100.0, 100.0);
    let ticker = Ticker::new(curve.clone(), 5).unwrap();
    let before = curve.borrow().parameter();

    ticker.start().unwrap();
    ticker.start().unwrap();
    assert!(ticker.is_running());
    sleep(50).await;
    let moved = curve.borrow().parameter();
    assert_ne!(moved, before);

    ticker.stop();
    assert!(!ticker.is_running());
    let stopped = curve.borrow().parameter();
    sleep(50).await;
    assert_eq!(curve.borrow().parameter(), stopped);

    // stopping twice is harmless
    ticker.stop();
}

#[wasm_bindgen_test(async)]
async fn dropped_ticker_stops_its_interval() {
    let (_, curve) = shared_curve(100.0, 100.0);
    let ticker = Ticker::new(curve.clone(), 5).unwrap();
    ticker.start().unwrap();
    sleep(20).await;
    drop(ticker);

    let at_drop = curve.borrow().parameter();
    sleep(50).await;
    assert_eq!(curve.borrow().parameter(), at_drop);
    assert_eq!(Rc::strong_count(&curve), 1);
}

#[wasm_bindgen_test]
fn ticker_rejects_interval_past_timer_range() {
    let (_, curve) = shared_curve(100.0, 100.0);
    assert!(Ticker::new(curve, u32::MAX).is_err());
}

#[wasm_bindgen_test(async)]
async fn restart_with_pending_frame_keeps_one_chain() {
    let (layout, curve) = shared_curve(100.0, 100.0);
    let surface = CanvasSurface::new(canvas(), &layout).unwrap();
    let renderer = Renderer::new(surface, curve);
    assert!(!renderer.is_running());

    renderer.start().unwrap();
    renderer.stop();
    renderer.start().unwrap();
    renderer.start().unwrap();
    assert!(renderer.is_running());
    assert_eq!(renderer.frames(), 0);

    next_frame().await;
    assert_eq!(renderer.frames(), 1);
    next_frame().await;
    assert_eq!(renderer.frames(), 2);
}

#[wasm_bindgen_test(async)]
async fn in_flight_frame_draws_after_stop() {
    let (layout, curve) = shared_curve(100.0, 100.0);
    let canvas = canvas();
    let surface = CanvasSurface::new(canvas.clone(), &layout).unwrap();
    let renderer = Renderer::new(surface, curve);

    renderer.start().unwrap();
    next_frame().await;
    assert_eq!(renderer.frames(), 1);

    renderer.stop();
    context(&canvas).clear_rect(0.0, 0.0, 100.0, 100.0);
    assert_eq!(painted(&canvas), 0);

    next_frame().await;
    assert_eq!(renderer.frames(), 2);
    assert!(painted(&canvas) > 0);

    next_frame().await;
    next_frame().await;
    assert_eq!(renderer.frames(), 2);
}

#[wasm_bindgen_test(async)]
async fn dropped_renderer_releases_the_curve() {
    let (layout, curve) = shared_curve(100.0, 100.0);
    let surface = CanvasSurface::new(canvas(), &layout).unwrap();
    let renderer = Renderer::new(surface, curve.clone());

    renderer.start().unwrap();
    next_frame().await;
    assert_eq!(Rc::strong_count(&curve), 2);

    drop(renderer);
    assert_eq!(Rc::strong_count(&curve), 1);
    next_frame().await;
    next_frame().await;
}
