//! Schema verification.
//!
//! [`verify`] diffs a parsed configuration against a reference (expected)
//! configuration and reports structural mismatches. Scalar kinds are
//! mutually compatible (an `int` where the schema has a `string` is fine);
//! only list-vs-non-list disagreements count, plus (in strict mode)
//! sections and keys the schema does not know about.
//!
//! The caller chooses between two reporting modes: fail fast on the first
//! mismatch, or accumulate every mismatch into a returned [`Config`] (empty
//! when the configuration verified clean).
//!
//! ```rust
//! use xini::{parse_str, verify};
//!
//! let expected = parse_str("schema", "[server]\nhost = \"\"\nports = []\n").unwrap();
//! let actual = parse_str("app.ini", "[server]\nhost = \"x\"\nports = \"y\"\n").unwrap();
//!
//! let report = verify(&actual, &expected, false, false).unwrap();
//! assert!(report.get("server").unwrap().contains_key("ports"));
//! assert!(!report.get("server").unwrap().contains_key("host"));
//! ```

use crate::{Config, Error, Result, SectionMap, Value};
use std::path::Path;

/// Compares `actual` against `expected` and reports mismatches.
///
/// With `strict`, sections and keys absent from `expected` are themselves
/// mismatches; otherwise only list-vs-non-list type disagreements are
/// flagged. With `fail_fast`, the first mismatch is returned as an error;
/// otherwise mismatches accumulate into the returned configuration: whole
/// sections for strict-mode unknown sections, keys with a null placeholder
/// for strict-mode unknown keys, and keys with their actual value for type
/// mismatches.
///
/// An empty result means no mismatches exist across any section.
///
/// # Errors
///
/// With `fail_fast`, returns [`Error::UnknownSection`],
/// [`Error::UnknownKey`], or [`Error::TypeMismatch`] for the first
/// mismatch encountered.
pub fn verify(
    actual: &Config,
    expected: &Config,
    strict: bool,
    fail_fast: bool,
) -> Result<Config> {
    let mut report = Config::new();

    for (name, section) in actual.iter() {
        let expected_section = expected.get(name);

        if strict && expected_section.is_none() {
            if fail_fast {
                return Err(Error::unknown_section(name));
            }
            report.insert(name.clone(), section.clone());
            continue;
        }

        let mut mismatches = SectionMap::new();
        for (key, value) in section.iter() {
            match expected_section.and_then(|s| s.get(key)) {
                None => {
                    if strict {
                        if fail_fast {
                            return Err(Error::unknown_key(name, key));
                        }
                        mismatches.insert(key.clone(), Value::Null);
                    }
                }
                Some(expected_value) => {
                    if value.is_list() != expected_value.is_list() {
                        if fail_fast {
                            return Err(Error::type_mismatch(
                                name,
                                key,
                                expected_value.type_name(),
                                value.type_name(),
                            ));
                        }
                        mismatches.insert(key.clone(), value.clone());
                    }
                }
            }
        }

        if !mismatches.is_empty() {
            report.insert(name.clone(), mismatches);
        }
    }

    Ok(report)
}

/// Verifies `actual` against a reference configuration parsed from `path`
/// with the same engine.
///
/// # Errors
///
/// Returns [`Error::NotReadable`] or a parse error for the reference file,
/// or any error [`verify`] produces.
pub fn verify_file<P: AsRef<Path>>(
    actual: &Config,
    path: P,
    strict: bool,
    fail_fast: bool,
) -> Result<Config> {
    let expected = crate::parse_file(path)?;
    verify(actual, &expected, strict, fail_fast)
}
