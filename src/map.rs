//! Ordered containers for parsed configurations.
//!
//! This module provides [`SectionMap`], the insertion-ordered mapping from
//! key to [`Value`](crate::Value) holding one section's data, and [`Config`],
//! the insertion-ordered mapping from section name to [`SectionMap`].
//!
//! ## Why IndexMap?
//!
//! Both types wrap [`IndexMap`] rather than `HashMap` so that:
//!
//! - sections and keys iterate in file order
//! - rendering and diffing produce deterministic output
//! - duplicate inserts keep replace semantics (last write wins) without
//!   disturbing the original position
//!
//! ## Examples
//!
//! ```rust
//! use xini::{Config, SectionMap, Value};
//!
//! let mut section = SectionMap::new();
//! section.insert("host".to_string(), Value::from("example.com"));
//! section.insert("port".to_string(), Value::Int(8080));
//!
//! let mut config = Config::new();
//! config.insert("server".to_string(), section);
//!
//! let host = config.get("server").and_then(|s| s.get("host"));
//! assert_eq!(host.and_then(|v| v.as_str()), Some("example.com"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered map of keys to typed values: the contents of one section.
///
/// Keys are unique; inserting an existing key replaces its value in place
/// (last write wins), matching sequential file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionMap(IndexMap<String, Value>);

impl SectionMap {
    /// Creates an empty `SectionMap`.
    #[must_use]
    pub fn new() -> Self {
        SectionMap(IndexMap::new())
    }

    /// Creates an empty `SectionMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SectionMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for SectionMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SectionMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for SectionMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        SectionMap(IndexMap::from_iter(iter))
    }
}

impl fmt::Display for SectionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{} = {}", key, value)?;
        }
        Ok(())
    }
}

impl Serialize for SectionMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SectionMapVisitor;

        impl<'de> Visitor<'de> for SectionMapVisitor {
            type Value = SectionMap;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of keys to configuration values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut section = SectionMap::new();
                while let Some((key, value)) = access.next_entry()? {
                    section.insert(key, value);
                }
                Ok(section)
            }
        }

        deserializer.deserialize_map(SectionMapVisitor)
    }
}

/// An ordered map of section names to their contents: a whole parsed
/// configuration.
///
/// Re-opening a section name after it already produced a non-empty block
/// stores the later block with replace semantics: the earlier block is
/// dropped entirely, not merged, and the section keeps its original
/// position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config(IndexMap<String, SectionMap>);

impl Config {
    /// Creates an empty `Config`.
    #[must_use]
    pub fn new() -> Self {
        Config(IndexMap::new())
    }

    /// Inserts a section, returning the previous contents if the name was
    /// already present.
    pub fn insert(&mut self, name: String, section: SectionMap) -> Option<SectionMap> {
        self.0.insert(name, section)
    }

    /// Returns a reference to the named section.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SectionMap> {
        self.0.get(name)
    }

    /// Returns `true` if a section with this name exists.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the configuration holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the section names, in insertion order.
    pub fn sections(&self) -> indexmap::map::Keys<'_, String, SectionMap> {
        self.0.keys()
    }

    /// Returns an iterator over the name-section pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, SectionMap> {
        self.0.iter()
    }
}

impl IntoIterator for Config {
    type Item = (String, SectionMap);
    type IntoIter = indexmap::map::IntoIter<String, SectionMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a String, &'a SectionMap);
    type IntoIter = indexmap::map::Iter<'a, String, SectionMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, SectionMap)> for Config {
    fn from_iter<T: IntoIterator<Item = (String, SectionMap)>>(iter: T) -> Self {
        Config(IndexMap::from_iter(iter))
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, section)) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "[{}]", name)?;
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

impl Serialize for Config {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, section) in self.iter() {
            map.serialize_entry(name, section)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = Config;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of section names to sections")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut config = Config::new();
                while let Some((name, section)) = access.next_entry()? {
                    config.insert(name, section);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}
