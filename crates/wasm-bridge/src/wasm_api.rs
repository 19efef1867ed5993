//! WASM entry points for the web worker.
//!
//! This module is only compiled for the `wasm32` target. It provides the
//! `#[wasm_bindgen]` functions that JavaScript calls from the web worker.

use wasm_bindgen::prelude::*;

use crate::dispatch;
use crate::engine_state::EngineState;
use crate::messages::{EngineToUi, UiToEngine};

// Global engine state — single-threaded in the web worker.
thread_local! {
    static ENGINE_STATE: std::cell::RefCell<Option<EngineState>> = std::cell::RefCell::new(None);
}

/// Initialize the WASM engine. Must be called once before any other
/// function. Sets up panic hooks for better error messages.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();

    ENGINE_STATE.with(|cell| {
        *cell.borrow_mut() = Some(EngineState::new());
    });
}

/// Process a JSON message from the UI and return a JSON response.
///
/// This is the main entry point for the web worker's message handler.
/// The input should be a JSON-serialized `UiToEngine` message. Returns a
/// JSON-serialized `EngineToUi` response.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    let response = ENGINE_STATE.with(|cell| {
        let mut engine = cell.borrow_mut();
        let engine = engine
            .as_mut()
            .expect("Engine not initialized. Call init() first.");

        let msg: UiToEngine = match serde_json::from_str(json_input) {
            Ok(msg) => msg,
            Err(e) => {
                return EngineToUi::Error {
                    request_id: None,
                    message: format!("Failed to parse message: {e}"),
                };
            }
        };

        dispatch::dispatch(engine, msg)
    });

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(r#"{{"type":"Error","request_id":null,"message":"Serialization failed: {e}"}}"#)
    })
}

/// Triangle count of the latest generated mesh, 0 when none exists.
#[wasm_bindgen]
pub fn triangle_count() -> usize {
    ENGINE_STATE.with(|cell| {
        let engine = cell.borrow();
        engine
            .as_ref()
            .and_then(|e| e.stats().map(|s| s.triangle_count))
            .unwrap_or(0)
    })
}
