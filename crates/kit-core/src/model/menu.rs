//! Menu, section and item types.
//!
//! These types are the single in-memory shape of the menu file.  They are
//! produced by [`crate::codec::decode`], consumed by [`crate::codec::encode`],
//! and serialized to JSON for the browser form without any intermediate DTOs.
//!
//! # Optional means absent
//!
//! Every optional item attribute is an `Option`.  `None` means "the file does
//! not mention it", which is different from "present with a default value":
//! the encoder writes nothing at all for `None`.

use serde::{Deserialize, Deserializer, Serialize};

use super::int_value::IntValue;
use super::section_map::SectionMap;

/// The top-level menu: a title and its ordered sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Title of the main menu window.
    #[serde(rename = "menu-title", alias = "menuTitle")]
    pub menu_title: String,

    /// Sections keyed by their `[a-z_]+` identifier, in file order.
    pub sections: SectionMap,
}

impl MenuConfig {
    /// Total number of items across all sections.
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|(_, s)| s.items.len()).sum()
    }
}

/// A named group of items shown under one icon in the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Section {
    /// Item-type token used as the section's icon (unquoted in the file).
    pub icon: String,
    /// Display name of the section button.
    pub name: String,
    /// Inventory slot of the section button.
    pub slot: IntValue,
    /// Title of the sub-menu opened by this section.
    #[serde(rename = "menu-title", alias = "menuTitle")]
    pub menu_title: String,
    /// Items in display order.
    pub items: Vec<Item>,
}

impl Default for Section {
    /// The value a section starts with when its header line is read.
    fn default() -> Self {
        Self {
            icon: String::new(),
            name: String::new(),
            slot: IntValue::Int(0),
            menu_title: String::new(),
            items: Vec::new(),
        }
    }
}

/// One selectable entry of a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Base item-type token, e.g. `DIAMOND_SWORD`.  Required by the encoder.
    #[serde(default)]
    pub material: String,

    /// Stack size.  Only written when greater than 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<IntValue>,

    /// Custom display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Lore lines shown under the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enchantments: Option<Vec<Enchantment>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unbreakable: Option<bool>,

    /// Enchantment glint without real enchantments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glow: Option<bool>,

    /// Resource-pack model override.  Zero is treated as absent.
    #[serde(
        default,
        rename = "custom-model-data",
        alias = "customModelData",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_model_data: Option<IntValue>,

    /// Item flags such as `HIDE_ENCHANTS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potion: Option<Potion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firework: Option<Firework>,
}

impl Item {
    /// Creates an item with only its material set.
    pub fn new(material: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            ..Self::default()
        }
    }
}

/// An enchantment written as `TYPE:LEVEL` in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchantment {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_level", deserialize_with = "int_or_one")]
    pub level: i64,
}

impl Enchantment {
    pub fn new(kind: impl Into<String>, level: i64) -> Self {
        Self {
            kind: kind.into(),
            level,
        }
    }
}

/// Potion effect of a potion item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Flight power of a firework rocket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firework {
    #[serde(default = "default_power", deserialize_with = "int_or_one")]
    pub power: i64,
}

impl Default for Firework {
    fn default() -> Self {
        Self {
            power: default_power(),
        }
    }
}

fn default_level() -> i64 {
    1
}

fn default_power() -> i64 {
    1
}

/// Reads a level or power the way the file decoder does: numbers and numeric
/// strings are kept, anything unparsable (including `null`) becomes 1.
fn int_or_one<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(IntValue::deserialize(deserializer)?.as_i64().unwrap_or(1))
}

/// `true` when `key` is a valid section identifier (`[a-z_]+`).
pub fn is_section_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_lowercase() || b == b'_')
}

// ── Tests ─────────────────────────────────────────────────────────────────────
