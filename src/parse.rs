//! Line-oriented parsing and section assembly.
//!
//! The [`Parser`] consumes a configuration's text one line at a time,
//! classifies each line (blank or comment, section header, assignment), and
//! accumulates a sectioned mapping of keys to typed values. The in-progress
//! section is flushed into the configuration whenever a new header begins or
//! input ends; blocks that accumulated nothing are never stored.
//!
//! Most users should use [`parse_str`](crate::parse_str) or
//! [`parse_file`](crate::parse_file) from the crate root instead of driving
//! a `Parser` by hand.
//!
//! ```rust
//! use xini::{parse_str, Value};
//!
//! let config = parse_str(
//!     "app.ini",
//!     "[server]\nhost = \"example.com\"\nports = [80, 443]\n",
//! )
//! .unwrap();
//!
//! let server = config.get("server").unwrap();
//! assert_eq!(server.get("host"), Some(&Value::Str("example.com".into())));
//! ```

use crate::split::{split_unquoted, QUOTES};
use crate::value::{strip_quotes, typecast};
use crate::{Config, Error, Result, SectionMap};

/// An in-progress parse.
///
/// Holds the configuration under construction plus exactly one "current
/// section" accumulator: the section name and the mapping collected for it
/// so far. The accumulator starts out as an empty name with an empty
/// mapping, so assignments appearing before any header land in the
/// unnamed section.
pub struct Parser {
    source: String,
    config: Config,
    section_name: String,
    section: SectionMap,
}

impl Parser {
    /// Creates a parser for input identified as `source` in error messages
    /// (typically a file path).
    #[must_use]
    pub fn new(source: &str) -> Self {
        Parser {
            source: source.to_string(),
            config: Config::new(),
            section_name: String::new(),
            section: SectionMap::new(),
        }
    }

    /// Consumes one line of input.
    ///
    /// `lineno` is the line's 1-based position in the source, used for
    /// error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingAssignment`] for a non-header line with no
    /// `=` outside quotes, and [`Error::EmptyKey`] when a key is empty
    /// after trimming and de-quoting.
    pub fn feed_line(&mut self, line: &str, lineno: usize) -> Result<()> {
        let line = line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            return Ok(());
        }

        if line.starts_with('[') && line.ends_with(']') {
            self.flush();
            // Header text between the brackets is taken as-is.
            self.section_name = line[1..line.len() - 1].to_string();
            return Ok(());
        }

        self.feed_assignment(line, lineno)
    }

    /// Ends the input, flushing a final non-empty block, and returns the
    /// assembled configuration.
    #[must_use]
    pub fn finish(mut self) -> Config {
        self.flush();
        self.config
    }

    fn feed_assignment(&mut self, line: &str, lineno: usize) -> Result<()> {
        let parts = split_unquoted(line, '=', 2, &QUOTES);
        // The bounded split leaves the operator on the remainder, so a
        // second part not starting with '=' means the only '=' sat inside
        // a quoted key.
        if parts.len() < 2 || !parts[1].starts_with('=') {
            return Err(Error::missing_assignment(&self.source, lineno, line));
        }

        let mut keys = Vec::new();
        for raw_key in split_unquoted(parts[0], ',', 0, &QUOTES) {
            let (key, _) = strip_quotes(raw_key.trim());
            if key.is_empty() {
                return Err(Error::empty_key(&self.source, lineno, line));
            }
            keys.push(key.to_string());
        }

        // One typecast per line; every listed key gets the same value.
        let value = typecast(parts[1][1..].trim());
        for key in keys {
            self.section.insert(key, value.clone());
        }
        Ok(())
    }

    fn flush(&mut self) {
        if !self.section.is_empty() {
            let name = std::mem::take(&mut self.section_name);
            let section = std::mem::take(&mut self.section);
            self.config.insert(name, section);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn parse(text: &str) -> Config {
        crate::parse_str("test.ini", text).unwrap()
    }

    #[test]
    fn assembles_sectioned_data() {
        let config = parse(
            "[server]\n\
             host = \"example.com\"\n\
             ports = [80, 443]\n\
             debug = false\n",
        );

        let server = config.get("server").unwrap();
        assert_eq!(
            server.get("host"),
            Some(&Value::Str("example.com".to_string()))
        );
        assert_eq!(
            server.get("ports"),
            Some(&Value::List(vec![Value::Int(80), Value::Int(443)]))
        );
        assert_eq!(server.get("debug"), Some(&Value::Bool(false)));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let config = parse("[a]\n\n; comment\n# other comment\nx = 1\n");
        assert_eq!(config.get("a").unwrap().len(), 1);
    }

    #[test]
    fn content_before_any_header_lands_in_unnamed_section() {
        let config = parse("top = 1\n[a]\nx = 2\n");
        assert_eq!(config.get("").unwrap().get("top"), Some(&Value::Int(1)));
        assert_eq!(config.get("a").unwrap().get("x"), Some(&Value::Int(2)));
    }

    #[test]
    fn empty_blocks_are_never_stored() {
        let config = parse("[empty]\n[full]\nx = 1\n");
        assert!(config.get("empty").is_none());
        assert!(config.get("full").is_some());
        assert!(config.get("").is_none());
        assert_eq!(config.len(), 1);
    }

    #[test]
    fn duplicate_keys_last_write_wins() {
        let config = parse("[a]\nx = 1\nx = 2\n");
        assert_eq!(config.get("a").unwrap().get("x"), Some(&Value::Int(2)));
    }

    #[test]
    fn multiple_keys_share_one_value() {
        let config = parse("[limits]\nsoft, hard = 1024\n");
        let limits = config.get("limits").unwrap();
        assert_eq!(limits.get("soft"), Some(&Value::Int(1024)));
        assert_eq!(limits.get("hard"), Some(&Value::Int(1024)));
    }

    #[test]
    fn quoted_keys_are_dequoted() {
        let config = parse("[a]\n\"spaced key\" = 1\n'other' = 2\n");
        let section = config.get("a").unwrap();
        assert_eq!(section.get("spaced key"), Some(&Value::Int(1)));
        assert_eq!(section.get("other"), Some(&Value::Int(2)));
    }

    #[test]
    fn section_name_kept_verbatim() {
        let config = parse("[ spaced name ]\nx = 1\n");
        assert!(config.get(" spaced name ").is_some());
    }

    #[test]
    fn missing_assignment_cites_line() {
        let err = crate::parse_str("bad.ini", "[a]\nbad line without equals\n").unwrap_err();
        match err {
            Error::MissingAssignment { file, line, .. } => {
                assert_eq!(file, "bad.ini");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn quoted_equals_is_not_an_assignment() {
        let err = crate::parse_str("bad.ini", "\"key = value\"\n").unwrap_err();
        assert!(matches!(err, Error::MissingAssignment { line: 1, .. }));
    }

    #[test]
    fn empty_key_cites_line() {
        let err = crate::parse_str("bad.ini", "[a]\nx, = 1\n").unwrap_err();
        match err {
            Error::EmptyKey { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn value_with_equals_inside() {
        let config = parse("[a]\nformula = y=mx+b\n");
        assert_eq!(
            config.get("a").unwrap().get("formula"),
            Some(&Value::Str("y=mx+b".to_string()))
        );
    }
}
