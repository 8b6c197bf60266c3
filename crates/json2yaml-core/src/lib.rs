//! # json2yaml-core
//!
//! Streaming converter from JSON values to YAML block-style documents.
//!
//! The input may hold any number of JSON values, whitespace-separated or
//! directly concatenated; each becomes one YAML document and consecutive
//! documents are separated by a `---` line. Only one top-level value is held
//! in memory at a time.
//!
//! Conversion is lossless in the ways that matter for config-style data:
//! number literals are copied verbatim (so `12345678901234567890` and
//! `-6.63e-34` survive untouched), object key order and duplicate keys are
//! kept, and strings are always double-quoted.
//!
//! ## Quick start
//!
//! ```rust
//! use json2yaml_core::convert_str;
//!
//! let yaml = convert_str(r#"{"foo":[0,[1],[2,3]],"bar":{}}"#).unwrap();
//! assert_eq!(
//!     yaml,
//!     "\"foo\":\n  - 0\n  - - 1\n  - - 2\n    - 3\n\"bar\": {}\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`reader`] — byte stream → [`Value`]s
//! - [`emitter`] — [`Value`] → YAML text
//! - [`scalar`] — YAML text of a single scalar
//! - [`converter`] — the reader/emitter pipeline
//! - [`error`] — error types and positions
//! - [`options`] — reader limits
//! - [`types`] — the [`Value`] tree

pub mod converter;
pub mod emitter;
pub mod error;
pub mod options;
pub mod reader;
pub mod scalar;
pub mod types;

pub use converter::{convert, convert_str, Converter};
pub use emitter::Emitter;
pub use error::{Json2YamlError, Position, Result};
pub use options::{Options, DEFAULT_MAX_DEPTH};
pub use reader::Reader;
pub use types::Value;
