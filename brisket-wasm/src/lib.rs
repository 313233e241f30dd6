//! WASM bindings for brisket one-hot DNA encoding.
//!
//! In-memory, JSON-based wrappers for environments where a native extension
//! is unavailable (browsers, sandboxed workers). Every public function accepts
//! `&str` and returns a JSON `String`:
//!
//! - Success: `{"ok": <value>}`
//! - Failure: `{"error": "<message>"}`
//!
//! `#[wasm_bindgen]` exports are added with the `wasm` feature.
//!
//! # Example
//!
//! ```
//! let json = brisket_wasm::encode_seq("ATCG");
//! let v: serde_json::Value = serde_json::from_str(&json).unwrap();
//! assert_eq!(v["ok"]["rows"], 4);
//! ```

pub mod encode;
pub mod error;

/// Crate version (set from Cargo.toml at compile time).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use encode::{decode_seq, encode_seq, parse_matrix, JsOneHotMatrix};
