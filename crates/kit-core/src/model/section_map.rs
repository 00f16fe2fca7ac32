//! Insertion-ordered map of section key to [`Section`].
//!
//! Section order in the file decides menu layout, so it must survive every
//! hop: text → model → JSON → browser → JSON → model → text.  A `HashMap`
//! would scramble it; this map keeps entries in a `Vec` and serializes them as
//! a JSON object whose members appear in the same order.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::menu::Section;

/// Ordered `key → Section` mapping with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMap {
    entries: Vec<(String, Section)>,
}

impl SectionMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `section` under `key` and returns its position.
    ///
    /// An existing key keeps its original position and has its value
    /// replaced; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, section: Section) -> usize {
        let key = key.into();
        match self.position(&key) {
            Some(index) => {
                self.entries[index].1 = section;
                index
            }
            None => {
                self.entries.push((key, section));
                self.entries.len() - 1
            }
        }
    }

    /// Looks up a section by key.
    pub fn get(&self, key: &str) -> Option<&Section> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Looks up a section by key for modification.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Section> {
        let index = self.position(key)?;
        self.get_index_mut(index)
    }

    /// Mutable access by position, as returned from [`SectionMap::insert`].
    pub(crate) fn get_index_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.entries.get_mut(index).map(|(_, s)| s)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    /// Iterates keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

impl<K: Into<String>> FromIterator<(K, Section)> for SectionMap {
    fn from_iter<I: IntoIterator<Item = (K, Section)>>(iter: I) -> Self {
        let mut map = SectionMap::new();
        for (key, section) in iter {
            map.insert(key, section);
        }
        map
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, section) in &self.entries {
            map.serialize_entry(key, section)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SectionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SectionMapVisitor)
    }
}

struct SectionMapVisitor;

impl<'de> Visitor<'de> for SectionMapVisitor {
    type Value = SectionMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of section key to section")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SectionMap, A::Error> {
        let mut map = SectionMap::new();
        // Visiting entries one at a time is what preserves document order.
        while let Some((key, section)) = access.next_entry::<String, Section>()? {
            map.insert(key, section);
        }
        Ok(map)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
