//! One-hot encoding wrappers with JSON input/output.
//!
//! Matrices cross the boundary as nested arrays, one inner array of four
//! numbers per sequence position.

use serde::Serialize;

use brisket_core::{BrisketError, Result};
use brisket_encode::{OneHotMatrix, COLUMNS, COLUMN_ORDER};

use crate::error::{wasm_ok, wasm_result};

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

// ── Wrapper types ────────────────────────────────────────────────────────

/// Serializable one-hot matrix with nested rows.
#[derive(Debug, Serialize)]
pub struct JsOneHotMatrix {
    pub rows: usize,
    pub cols: usize,
    /// Column labels, always `"ATCG"`.
    pub columns: String,
    pub matrix: Vec<[u8; COLUMNS]>,
}

impl From<&OneHotMatrix> for JsOneHotMatrix {
    fn from(m: &OneHotMatrix) -> Self {
        let matrix = m
            .rows()
            .map(|r| [r[0], r[1], r[2], r[3]])
            .collect();
        JsOneHotMatrix {
            rows: m.nrows(),
            cols: m.ncols(),
            columns: String::from_utf8_lossy(&COLUMN_ORDER).into_owned(),
            matrix,
        }
    }
}

// ── Core logic ───────────────────────────────────────────────────────────

/// Parse a nested-array JSON matrix into a validated [`OneHotMatrix`].
pub fn parse_matrix(json: &str) -> Result<OneHotMatrix> {
    let rows: Vec<Vec<i64>> = serde_json::from_str(json)
        .map_err(|e| BrisketError::Parse(format!("invalid JSON matrix: {e}")))?;
    OneHotMatrix::from_rows(&rows)
}

// ── JSON boundary functions ──────────────────────────────────────────────

/// One-hot encode a DNA sequence.
///
/// Returns JSON `JsOneHotMatrix`. Never produces an error envelope.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn encode_seq(seq: &str) -> String {
    let m = brisket_encode::encode_str(seq);
    wasm_ok(&JsOneHotMatrix::from(&m))
}

/// Decode a nested-array JSON one-hot matrix back to a base string.
///
/// All-zero rows decode to `N`.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
pub fn decode_seq(matrix_json: &str) -> String {
    wasm_result(parse_matrix(matrix_json).map(|m| {
        m.decode().into_iter().map(char::from).collect::<String>()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(json: &str) -> serde_json::Value {
        let v: serde_json::Value = serde_json::from_str(json).unwrap();
        assert!(v.get("error").is_none(), "unexpected error: {json}");
        v["ok"].clone()
    }

    #[test]
    fn encode_atcgn() {
        let v = ok(&encode_seq("ATCGN"));
        assert_eq!(v["rows"], 5);
        assert_eq!(v["cols"], 4);
        assert_eq!(v["columns"], "ATCG");
        assert_eq!(v["matrix"][0], serde_json::json!([1, 0, 0, 0]));
        assert_eq!(v["matrix"][1], serde_json::json!([0, 1, 0, 0]));
        assert_eq!(v["matrix"][3], serde_json::json!([0, 0, 0, 1]));
        assert_eq!(v["matrix"][4], serde_json::json!([0, 0, 0, 0]));
    }

    #[test]
    fn encode_empty() {
        let v = ok(&encode_seq(""));
        assert_eq!(v["rows"], 0);
        assert_eq!(v["cols"], 4);
        assert_eq!(v["matrix"], serde_json::json!([]));
    }

    #[test]
    fn decode_round_trip() {
        let encoded = ok(&encode_seq("acgtn"));
        let v = ok(&decode_seq(&encoded["matrix"].to_string()));
        assert_eq!(v, "ACGTN");
    }

    #[test]
    fn decode_rejects_wrong_width() {
        let json = decode_seq("[[1,0,0]]");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(v["error"].as_str().unwrap().contains("expected 4"));
    }

    #[test]
    fn decode_rejects_two_ones() {
        let json = decode_seq("[[1,0,1,0]]");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(v["error"].as_str().unwrap().starts_with("invalid input"));
    }

    #[test]
    fn decode_rejects_out_of_range_values() {
        for bad in ["[[257,0,0,0]]", "[[-255,0,0,0]]"] {
            let json = decode_seq(bad);
            let v: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert!(v["error"].as_str().unwrap().starts_with("invalid input"), "{bad}");
        }
        let json = decode_seq("[[1.9,0,0,0]]");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(v["error"].as_str().unwrap().starts_with("parse error"));
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let json = decode_seq("not json");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(v["error"].as_str().unwrap().starts_with("parse error"));
    }
}
