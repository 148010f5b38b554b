//! Error types for parsing and verification.
//!
//! Parse errors carry the offending source identifier and 1-based line
//! number so a host can point at the exact line of a configuration file.
//! Verification errors name the section (and key) that failed.
//!
//! Parse errors abort the whole parse; there is no partial configuration
//! on failure. Value typing itself never errors: unresolvable scalars fall
//! back to strings.
//!
//! ## Examples
//!
//! ```rust
//! use xini::{parse_str, Error};
//!
//! let result = parse_str("demo.ini", "[server]\nbad line without equals\n");
//! match result {
//!     Err(Error::MissingAssignment { line, .. }) => assert_eq!(line, 2),
//!     other => panic!("expected MissingAssignment, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors raised while reading, parsing, or
/// verifying a configuration.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The source cannot be located, opened, or is not a regular file.
    /// Raised before any parsing begins.
    #[error("cannot read {path}: {reason}")]
    NotReadable { path: String, reason: String },

    /// An assignment-line candidate has no `=` operator outside quotes.
    #[error("{file}:{line}: missing '=' in assignment: {text}")]
    MissingAssignment {
        file: String,
        line: usize,
        text: String,
    },

    /// A key came out empty after comma-splitting and de-quoting.
    #[error("{file}:{line}: empty key in assignment: {text}")]
    EmptyKey {
        file: String,
        line: usize,
        text: String,
    },

    /// Strict verification: a section has no counterpart in the expected
    /// configuration.
    #[error("unknown section [{section}]")]
    UnknownSection { section: String },

    /// Strict verification: a key has no counterpart in the expected
    /// section.
    #[error("unknown key '{key}' in section [{section}]")]
    UnknownKey { section: String, key: String },

    /// Verification: list-vs-non-list disagreement between actual and
    /// expected for the same key.
    #[error("type mismatch for '{key}' in section [{section}]: expected {expected}, found {found}")]
    TypeMismatch {
        section: String,
        key: String,
        expected: String,
        found: String,
    },

    /// A typed value could not be extracted as the requested Rust type.
    #[error("expected {expected}, found {found}")]
    Conversion { expected: String, found: String },
}

impl Error {
    /// Creates a not-readable error for a source that cannot be opened.
    pub fn not_readable(path: &str, reason: &str) -> Self {
        Error::NotReadable {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a missing-assignment parse error citing the source and
    /// 1-based line number.
    pub fn missing_assignment(file: &str, line: usize, text: &str) -> Self {
        Error::MissingAssignment {
            file: file.to_string(),
            line,
            text: text.to_string(),
        }
    }

    /// Creates an empty-key parse error citing the source and 1-based
    /// line number.
    pub fn empty_key(file: &str, line: usize, text: &str) -> Self {
        Error::EmptyKey {
            file: file.to_string(),
            line,
            text: text.to_string(),
        }
    }

    /// Creates a strict-mode unknown-section verification error.
    pub fn unknown_section(section: &str) -> Self {
        Error::UnknownSection {
            section: section.to_string(),
        }
    }

    /// Creates a strict-mode unknown-key verification error.
    pub fn unknown_key(section: &str, key: &str) -> Self {
        Error::UnknownKey {
            section: section.to_string(),
            key: key.to_string(),
        }
    }

    /// Creates a type-mismatch verification error naming both type names.
    pub fn type_mismatch(section: &str, key: &str, expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            section: section.to_string(),
            key: key.to_string(),
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates a conversion error for a failed typed extraction.
    pub fn conversion(expected: &str, found: &str) -> Self {
        Error::Conversion {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
