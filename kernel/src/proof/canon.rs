//! Canonical JSON bytes for hashing.
//!
//! Every digest computed over JSON in this workspace goes through
//! [`canonical_json_bytes`].
//!
//! # Rules
//!
//! - Object keys sorted by byte order, no whitespace.
//! - Strings escaped per RFC 8259 §7; non-ASCII passes through as UTF-8.
//! - Numbers must be integers. Floats are rejected so digests never depend
//!   on float formatting.

use std::fmt::Write as _;

use serde_json::Value;

/// Failure while producing canonical bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanonError {
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
}

/// Canonical JSON bytes of `value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64` or
/// `u64`.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    let mut out = String::new();
    emit(&mut out, value)?;
    Ok(out.into_bytes())
}

fn emit(out: &mut String, value: &Value) -> Result<(), CanonError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                let _ = write!(out, "{i}");
            } else if let Some(u) = n.as_u64() {
                let _ = write!(out, "{u}");
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::String(s) => emit_str(out, s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                emit(out, item)?;
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                emit_str(out, key);
                out.push(':');
                emit(out, item)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

fn emit_str(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{0020}' => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
