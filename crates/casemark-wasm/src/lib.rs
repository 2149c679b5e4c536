//! WASM bindings for casemark-core.
//!
//! Exposes `encode` and `decode` as `#[wasm_bindgen]` functions callable from
//! JavaScript/TypeScript. Built with `wasm-bindgen-cli`:
//!
//! ```sh
//! cargo build -p casemark-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/casemark_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Encode text into a marked lowercase stream.
#[wasm_bindgen]
pub fn encode(text: &str) -> String {
    casemark_core::encode(text)
}

/// Decode a marked stream, restoring casing. Dangling markers are dropped.
#[wasm_bindgen]
pub fn decode(text: &str) -> String {
    casemark_core::decode(text)
}

/// Decode a marked stream, throwing a JS error on a dangling marker.
#[wasm_bindgen]
pub fn decode_strict(text: &str) -> std::result::Result<String, JsValue> {
    casemark_core::decode_strict(text).map_err(|e| JsValue::from_str(&e.to_string()))
}
