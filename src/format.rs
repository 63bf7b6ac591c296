//! The RJSON text format.
//!
//! This module documents the canonical form produced by [`marshal`](crate::marshal)
//! and the `to_*` functions. It contains no code.
//!
//! # Overview
//!
//! RJSON is JSON with one encoding per document: two encoders that follow these
//! rules produce byte-identical output for equal documents, so RJSON text can be
//! diffed, hashed or signed.
//!
//! # Layout
//!
//! - A non-empty container opens with `{` or `[` followed by a newline.
//! - Each entry sits on its own line, indented by `indent` spaces per nesting
//!   level (default 2). Entries are separated by `,` at the end of the line; the
//!   last entry has no trailing comma.
//! - The closing `}` or `]` is on its own line at the container's level.
//! - Empty containers are written inline as `{}` and `[]`.
//! - Object entries are written `"key": value`, with one space after the colon.
//! - The document ends with exactly one `\n`.
//!
//! ```text
//! {
//!   "a": [
//!     1,
//!     {}
//!   ],
//!   "b": null
//! }
//! ```
//!
//! # Ordering
//!
//! Object keys are emitted in ascending byte order of their UTF-8 encoding, with
//! no locale or case folding. `"10"` sorts before `"9"`, and `"B"` before `"a"`.
//! Arrays keep insertion order.
//!
//! # Scalars
//!
//! | Kind | Text |
//! |------|------|
//! | Null | `null` |
//! | True / False | `true` / `false` |
//! | Number | plain decimal, never exponent notation |
//! | String | double-quoted, escaped |
//!
//! ## Numbers
//!
//! Numbers are exact decimals. The scale of a literal is kept, so `3.0200` is
//! written as `3.0200` and `1.50` as `1.50`. Exponent forms are expanded (`1.5e3`
//! is `1500`), redundant integer zeros and a `+` sign are dropped, and zero is
//! never negative (`-0.00` is `0.00`). A literal's exponent may not exceed
//! [`MAX_LITERAL_EXPONENT`](crate::number::MAX_LITERAL_EXPONENT) in magnitude.
//! Binary floats from Rust code are written in their shortest round-trip form,
//! so `0.1_f64` is `0.1`.
//!
//! ```rust
//! use serde_rjson::{marshal, Value};
//!
//! assert_eq!(marshal(&Value::number("1.5e3")).unwrap(), "1500\n");
//! assert_eq!(marshal(&Value::number("-0.00")).unwrap(), "0.00\n");
//! ```
//!
//! ## Strings
//!
//! `"` and `\` are backslash-escaped. Newline, carriage return, tab, backspace
//! and form feed use `\n`, `\r`, `\t`, `\b` and `\f`; every other control
//! character and DEL are written as `\u00XX` with lowercase hex. All other
//! characters, including non-ASCII, are written as-is.
//!
//! # Void
//!
//! Void has no text. It never occurs inside a container, and a Void root is
//! written as `null`.
//!
//! # Limits
//!
//! The encoder holds one frame per open container. A document that needs more
//! than `max_depth` frames (default 8096) is rejected with
//! [`Error::DepthExceeded`](crate::Error::DepthExceeded) and produces no output.
