//! `#[wasm_bindgen]` exports for the hero scene.
//!
//! The browser side owns the requestAnimationFrame loop and the canvases; it
//! calls `scene_tick()` once per refresh and replays each layer's frame
//! (read via `frame_ptr`/`frame_len` as a `Float32Array` view) onto that
//! layer's own canvas.

pub mod runner;

pub use runner::SceneRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<SceneRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SceneRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("scene not initialized, call scene_init() first");
        f(runner)
    })
}

fn install(runner: SceneRunner) {
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
}

/// Build the hero scene with stock tuning.
#[wasm_bindgen]
pub fn scene_init(width: f32, height: f32, seed: u32) -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    let runner =
        SceneRunner::new(width, height, seed as u64, None).map_err(|e| JsError::new(&e.to_string()))?;
    install(runner);
    log::info!("glimmer: hero scene initialized at {}x{}", width, height);
    Ok(())
}

/// Build the hero scene with a JSON tuning blob.
#[wasm_bindgen]
pub fn scene_init_tuned(width: f32, height: f32, seed: u32, tuning: &str) -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    let runner = SceneRunner::new(width, height, seed as u64, Some(tuning))
        .map_err(|e| JsError::new(&e.to_string()))?;
    install(runner);
    log::info!("glimmer: hero scene initialized (tuned)");
    Ok(())
}

/// Run one tick. Returns false once the scene has been cancelled.
#[wasm_bindgen]
pub fn scene_tick() -> bool {
    with_runner(|r| r.tick())
}

/// Latest pointer position, last value wins.
#[wasm_bindgen]
pub fn pointer_moved(x: f32, y: f32) {
    with_runner(|r| r.pointer_moved(x, y));
}

/// Hover emphasis on/off (pointer over an interactive element).
#[wasm_bindgen]
pub fn pointer_emphasis(on: bool) {
    with_runner(|r| r.pointer_emphasis(on));
}

/// Viewport change notification.
#[wasm_bindgen]
pub fn scene_resize(width: f32, height: f32) -> Result<(), JsError> {
    with_runner(|r| r.resize(width, height)).map_err(|e| JsError::new(&e.to_string()))
}

/// Stop the loop; further `scene_tick()` calls do nothing.
#[wasm_bindgen]
pub fn scene_cancel() {
    with_runner(|r| r.cancel());
}

#[wasm_bindgen]
pub fn layer_count() -> usize {
    with_runner(|r| r.layer_count())
}

/// Start of a layer's encoded frame. Valid until the next `scene_tick()`.
#[wasm_bindgen]
pub fn frame_ptr(layer: usize) -> *const f32 {
    with_runner(|r| r.frame_ptr(layer))
}

/// Length in floats of a layer's encoded frame.
#[wasm_bindgen]
pub fn frame_len(layer: usize) -> usize {
    with_runner(|r| r.frame_len(layer))
}
