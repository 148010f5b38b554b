//! # xini
//!
//! A configuration-file parser that upgrades the classic INI text format
//! with richer value semantics: quoted strings, typed scalars, and both
//! implicit and explicit lists, under the familiar `[section]` /
//! `key = value` structure.
//!
//! ## Key Features
//!
//! - **Typed values**: raw text resolves to null, bool, int, float, string,
//!   or list, so host code branches on real types instead of strings
//! - **Quote-aware**: delimiters inside `"..."` or `'...'` never split, and
//!   quoting a value pins it as a string (`"123"` stays a string)
//! - **Ordered**: sections and keys keep file order via `IndexMap`
//! - **Schema verification**: diff a parsed configuration against expected
//!   defaults under strict or lenient policy
//! - **Serde Compatible**: bridge parsed configurations into serde
//!   ecosystems (e.g. `serde_json`)
//!
//! ## Format
//!
//! ```text
//! ; comments start with ';' or '#'
//! [server]
//! host = "example.com"
//! ports = [80, 443]
//! debug = false
//! retry, timeout = 30
//! ```
//!
//! - `host` is a string (quoting suppresses type inference)
//! - `ports` is a list of ints; `a, b` without brackets is a list too
//! - `retry` and `timeout` both get the int `30`; one assignment line can
//!   list several comma-separated keys
//! - a repeated key inside one section overwrites the earlier value
//!
//! ## Quick Start
//!
//! ```rust
//! use xini::{parse_str, Value};
//!
//! let config = parse_str(
//!     "app.ini",
//!     "[server]\nhost = \"example.com\"\nports = [80, 443]\ndebug = false\n",
//! )
//! .unwrap();
//!
//! let server = config.get("server").unwrap();
//! assert_eq!(server.get("host").and_then(|v| v.as_str()), Some("example.com"));
//! assert_eq!(server.get("debug").and_then(|v| v.as_bool()), Some(false));
//!
//! match server.get("ports") {
//!     Some(Value::List(ports)) => assert_eq!(ports.len(), 2),
//!     other => panic!("expected a list, got {:?}", other),
//! }
//! ```
//!
//! ## Verification
//!
//! ```rust
//! use xini::{parse_str, verify};
//!
//! let expected = parse_str("schema", "[server]\nhost = \"\"\nports = []\n").unwrap();
//! let actual = parse_str("app.ini", "[server]\nhost = \"x\"\nports = [80]\n").unwrap();
//!
//! let report = verify(&actual, &expected, true, false).unwrap();
//! assert!(report.is_empty());
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Value typing is total: it never fails, unresolvable scalars fall back
//!   to strings
//! - Parse errors carry the source identifier and 1-based line number
//! - Parsing builds an independent configuration per call; calls on
//!   separate inputs are safe from multiple threads without synchronization

pub mod error;
pub mod macros;
pub mod map;
pub mod parse;
pub mod split;
pub mod value;
pub mod verify;

pub use error::{Error, Result};
pub use map::{Config, SectionMap};
pub use parse::Parser;
pub use split::{split_unquoted, QUOTES};
pub use value::{typecast, Value};
pub use verify::{verify, verify_file};

use std::fs;
use std::io;
use std::path::Path;

/// Parses configuration text into a [`Config`].
///
/// `source` identifies the input in error messages (typically a file path
/// or a synthetic name like `"<stdin>"`).
///
/// # Examples
///
/// ```rust
/// use xini::parse_str;
///
/// let config = parse_str("app.ini", "[server]\nport = 8080\n").unwrap();
/// assert_eq!(config.get("server").unwrap().get("port").and_then(|v| v.as_i64()), Some(8080));
/// ```
///
/// # Errors
///
/// Returns a parse error ([`Error::MissingAssignment`] or
/// [`Error::EmptyKey`]) citing the source and 1-based line number; the
/// whole parse is aborted, no partial configuration is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(source: &str, text: &str) -> Result<Config> {
    let mut parser = Parser::new(source);
    for (index, line) in text.lines().enumerate() {
        parser.feed_line(line, index + 1)?;
    }
    Ok(parser.finish())
}

/// Parses configuration text from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use xini::parse_reader;
///
/// let cursor = Cursor::new(b"[a]\nx = 1\n");
/// let config = parse_reader("<memory>", cursor).unwrap();
/// assert!(config.get("a").is_some());
/// ```
///
/// # Errors
///
/// Returns [`Error::NotReadable`] if reading fails, or any parse error
/// [`parse_str`] produces.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_reader<R: io::Read>(source: &str, mut reader: R) -> Result<Config> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::not_readable(source, &e.to_string()))?;
    parse_str(source, &text)
}

/// Reads and parses a configuration file.
///
/// # Errors
///
/// Returns [`Error::NotReadable`] when the path is missing, cannot be
/// opened, or is not a regular file (raised before any parsing begins),
/// or any parse error [`parse_str`] produces.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let display = path.display().to_string();
    if !path.is_file() {
        return Err(Error::not_readable(&display, "not a regular file"));
    }
    let text =
        fs::read_to_string(path).map_err(|e| Error::not_readable(&display, &e.to_string()))?;
    parse_str(&display, &text)
}
