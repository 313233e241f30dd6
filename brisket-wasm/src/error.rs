//! JSON result wrapper for WASM boundary.
//!
//! Every public function in `brisket-wasm` returns a `String` containing JSON.
//! Success → `{"ok": <value>}`, failure → `{"error": "<message>"}`.

use std::fmt::Display;

use serde::Serialize;

/// Serialize a success value as `{"ok": val}`.
pub fn wasm_ok<T: Serialize>(val: &T) -> String {
    #[derive(Serialize)]
    struct Ok<'a, T: Serialize> {
        ok: &'a T,
    }
    serde_json::to_string(&Ok { ok: val }).unwrap_or_else(|e| wasm_err(e))
}

/// Serialize an error as `{"error": "msg"}`.
pub fn wasm_err(msg: impl Display) -> String {
    #[derive(Serialize)]
    struct Err {
        error: String,
    }
    serde_json::to_string(&Err {
        error: msg.to_string(),
    })
    .unwrap_or_else(|_| r#"{"error":"serialization failed"}"#.into())
}

/// Map a `brisket_core::Result<T>` into the JSON envelope.
pub fn wasm_result<T: Serialize>(r: brisket_core::Result<T>) -> String {
    match r {
        Ok(val) => wasm_ok(&val),
        Err(e) => wasm_err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_serialization() {
        let json = wasm_ok(&[1u8, 0, 0, 0]);
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["ok"][0], 1);
    }

    #[test]
    fn err_serialization() {
        let json = wasm_err("bad matrix");
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["error"], "bad matrix");
    }

    #[test]
    fn parsed_matrix_flows_through_envelope() {
        let decoded: brisket_core::Result<String> =
            crate::encode::parse_matrix("[[0,0,1,0],[0,0,0,0]]")
                .map(|m| m.decode().into_iter().map(char::from).collect());
        let v: serde_json::Value = serde_json::from_str(&wasm_result(decoded)).unwrap();
        assert_eq!(v["ok"], "CN");

        let rejected: brisket_core::Result<String> =
            crate::encode::parse_matrix("[[1,1,0,0]]")
                .map(|m| m.decode().into_iter().map(char::from).collect());
        let v: serde_json::Value = serde_json::from_str(&wasm_result(rejected)).unwrap();
        assert!(v.get("ok").is_none());
        assert!(v["error"].as_str().unwrap().contains("2 set columns"));
    }

    #[test]
    fn result_err_variant() {
        let r: brisket_core::Result<i32> =
            Err(brisket_core::BrisketError::InvalidInput("row 0".into()));
        let json = wasm_result(r);
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(v["error"].as_str().unwrap().contains("row 0"));
    }
}
