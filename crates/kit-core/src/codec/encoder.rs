//! Encoder: [`MenuConfig`] → canonical menu file text.
//!
//! The encoder owns the layout.  Field order, indentation and quoting are
//! fixed here and never depend on how the model was built, so encoding the
//! same model always yields byte-identical text, and
//! `encode(decode(encode(c))) == encode(c)`.
//!
//! Item fields are written in this order, each only when present:
//!
//! ```text
//! material            always
//! amount              only when > 1
//! name                only when non-empty
//! lore                only when non-empty
//! enchantments        only entries with a non-blank type
//! unbreakable         only when true
//! glow                only when true
//! custom-model-data   only when non-zero
//! flags               only non-blank entries
//! potion              whenever present
//! firework            whenever present
//! ```

use std::fmt::{self, Write};

use thiserror::Error;
use tracing::debug;

use crate::model::{is_section_key, Enchantment, Item, MenuConfig, Section};

/// Comment block written at the top of every encoded file, up to the title.
pub const FILE_HEADER: &str = "\
# KitCore Essentials Configuration
# All items can be picked up from the menu (drag and drop)

# Main menu title
";

/// Errors that prevent a model from being written.
///
/// The model is checked completely before any text is produced, so a failed
/// encode never yields partial output.
#[derive(Debug, Error, PartialEq)]
pub enum EncodeError {
    /// An item has no material; the line `- material:` would be unreadable.
    #[error("item {index} of section '{section}' has no material")]
    MissingMaterial { section: String, index: usize },

    /// A section key is not `[a-z_]+` and could not be decoded again.
    #[error("invalid section key '{0}': only lowercase letters and '_' are allowed")]
    InvalidSectionKey(String),

    /// Writing into the output buffer failed.
    #[error("failed to format menu file: {0}")]
    Format(#[from] fmt::Error),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes `config` into the canonical menu file text.
///
/// The output ends with exactly one newline.
///
/// # Errors
///
/// Returns [`EncodeError::MissingMaterial`] or
/// [`EncodeError::InvalidSectionKey`] when the model fails validation.
///
/// # Examples
///
/// ```rust
/// use kit_core::{encode, Item, MenuConfig, Section};
///
/// let mut section = Section::default();
/// section.items.push(Item::new("BREAD"));
/// let mut config = MenuConfig::default();
/// config.sections.insert("food", section);
///
/// let text = encode(&config).unwrap();
/// assert!(text.contains("  food:\n"));
/// assert!(text.ends_with("      - material: BREAD\n"));
/// ```
pub fn encode(config: &MenuConfig) -> Result<String, EncodeError> {
    validate(config)?;

    let mut out = String::with_capacity(256 + config.item_count() * 64);
    out.push_str(FILE_HEADER);
    writeln!(out, "menu-title: \"{}\"", config.menu_title)?;
    out.push('\n');
    out.push_str("sections:\n");

    for (key, section) in config.sections.iter() {
        write_section(&mut out, key, section)?;
    }

    let len = out.trim_end().len();
    out.truncate(len);
    out.push('\n');

    debug!(
        sections = config.sections.len(),
        items = config.item_count(),
        bytes = out.len(),
        "encoded menu file"
    );
    Ok(out)
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate(config: &MenuConfig) -> Result<(), EncodeError> {
    for (key, section) in config.sections.iter() {
        if !is_section_key(key) {
            return Err(EncodeError::InvalidSectionKey(key.to_string()));
        }
        if let Some(index) = section.items.iter().position(|i| i.material.trim().is_empty()) {
            return Err(EncodeError::MissingMaterial {
                section: key.to_string(),
                index,
            });
        }
    }
    Ok(())
}

// ── Writers ───────────────────────────────────────────────────────────────────

fn write_section(out: &mut String, key: &str, section: &Section) -> fmt::Result {
    writeln!(out, "  {key}:")?;
    writeln!(out, "    icon: {}", section.icon)?;
    writeln!(out, "    name: \"{}\"", section.name)?;
    writeln!(out, "    slot: {}", section.slot)?;
    writeln!(out, "    menu-title: \"{}\"", section.menu_title)?;
    out.push_str("    items:\n");

    for item in &section.items {
        write_item(out, item)?;
    }
    out.push('\n');
    Ok(())
}

fn write_item(out: &mut String, item: &Item) -> fmt::Result {
    writeln!(out, "      - material: {}", item.material)?;

    if let Some(amount) = item.amount.filter(|a| a.is_greater_than(1)) {
        writeln!(out, "        amount: {amount}")?;
    }

    if let Some(name) = item.name.as_deref().filter(|n| !n.is_empty()) {
        writeln!(out, "        name: \"{name}\"")?;
    }

    if let Some(lore) = non_empty(&item.lore) {
        out.push_str("        lore:\n");
        for line in lore {
            writeln!(out, "          - \"{line}\"")?;
        }
    }

    // Entries with a blank type would be dropped on the next decode.
    let enchantments: Vec<&Enchantment> = item
        .enchantments
        .iter()
        .flatten()
        .filter(|e| !e.kind.trim().is_empty())
        .collect();
    if !enchantments.is_empty() {
        out.push_str("        enchantments:\n");
        for e in enchantments {
            writeln!(out, "          - {}:{}", e.kind.trim(), e.level)?;
        }
    }

    if item.unbreakable == Some(true) {
        out.push_str("        unbreakable: true\n");
    }

    if item.glow == Some(true) {
        out.push_str("        glow: true\n");
    }

    if let Some(data) = item.custom_model_data.filter(|d| d.is_truthy()) {
        writeln!(out, "        custom-model-data: {data}")?;
    }

    let flags: Vec<&str> = item
        .flags
        .iter()
        .flatten()
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .collect();
    if !flags.is_empty() {
        out.push_str("        flags:\n");
        for flag in flags {
            writeln!(out, "          - {flag}")?;
        }
    }

    if let Some(potion) = &item.potion {
        out.push_str("        potion:\n");
        writeln!(out, "          type: {}", potion.kind)?;
    }

    if let Some(firework) = &item.firework {
        out.push_str("        firework:\n");
        writeln!(out, "          power: {}", firework.power)?;
    }

    Ok(())
}

fn non_empty<T>(list: &Option<Vec<T>>) -> Option<&[T]> {
    list.as_deref().filter(|l| !l.is_empty())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
