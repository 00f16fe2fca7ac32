//! Decoder: menu file text → [`MenuConfig`].
//!
//! The decoder never fails.  It walks the text line by line and keeps a
//! stack of open [`Frame`]s describing where the previous line left off:
//!
//! ```text
//! depth 0   Section(i)      opened by a column-2 `key:` line
//! depth 1   Items           opened by a column-4 `items:` line
//! depth 2   Item            opened by a column-6 `- ` line
//! depth 3   Block(kind)     opened by a column-8 `lore:` / `flags:` / ... line
//! ```
//!
//! A structural line belongs to exactly one depth, decided by its column.  It
//! is accepted only when the frame one level up has the right kind, and it
//! closes every frame at or below its own depth before opening its own.
//! Because only one frame can sit at depth 3, at most one block is ever
//! active, and opening an item or a new block always closes the previous one.
//!
//! Lines at a column that belongs to no depth (1, 3, 5, 7, 9, …) and lines
//! whose parent frame is missing are dropped without touching the stack.
//!
//! # Scalars close what is below them
//!
//! A recognized section property (`icon:`, `slot:`, ...) closes the open
//! `items:` list, and a recognized item property (`amount:`, `glow:`, ...)
//! closes the open block.  Item lines or block content that follow such a
//! property are dropped until a new `items:` marker or block opener appears.
//! The encoder never writes a scalar after a list, so this only affects
//! hand-edited files with unusual ordering.  Unrecognized lines close
//! nothing.

use tracing::{debug, trace};

use crate::codec::text::{indent_of, unquote, value_after};
use crate::model::{
    is_section_key, parse_int, Enchantment, Firework, Item, MenuConfig, Potion, Section,
};

/// Column of a section key line.
const SECTION_COLUMN: usize = 2;
/// Column of section properties and the `items:` marker.
const SECTION_BODY_COLUMN: usize = 4;
/// Column of the `- ` that starts an item.
const ITEM_COLUMN: usize = 6;
/// Column of item properties and block openers.
const ITEM_BODY_COLUMN: usize = 8;
/// Minimum column of block content lines.
const BLOCK_BODY_COLUMN: usize = 10;

/// Nested block of an item introduced by a bare `key:` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Potion,
    Firework,
    Enchantments,
    Lore,
    Flags,
}

impl BlockKind {
    fn from_opener(content: &str) -> Option<Self> {
        match content {
            "potion:" => Some(BlockKind::Potion),
            "firework:" => Some(BlockKind::Firework),
            "enchantments:" => Some(BlockKind::Enchantments),
            "lore:" => Some(BlockKind::Lore),
            "flags:" => Some(BlockKind::Flags),
            _ => None,
        }
    }
}

/// One open level of nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// Position of the section in [`MenuConfig::sections`].
    Section(usize),
    Items,
    /// The last item of the current section.
    Item,
    Block(BlockKind),
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Decodes menu file text into a [`MenuConfig`].
///
/// Blank lines and `#` comments are skipped.  Lines that do not fit the
/// column grammar are ignored; a field that never appears stays unset.
///
/// # Examples
///
/// ```rust
/// use kit_core::decode;
///
/// let text = "menu-title: \"Kits\"\nsections:\n  tools:\n    icon: IRON_PICKAXE\n    items:\n      - material: IRON_PICKAXE\n";
/// let config = decode(text);
/// assert_eq!(config.menu_title, "Kits");
/// assert_eq!(config.sections.get("tools").unwrap().items[0].material, "IRON_PICKAXE");
/// ```
pub fn decode(text: &str) -> MenuConfig {
    let mut decoder = Decoder::default();
    for (number, line) in text.lines().enumerate() {
        decoder.line(number + 1, line);
    }

    let config = decoder.config;
    debug!(
        sections = config.sections.len(),
        items = config.item_count(),
        "decoded menu file"
    );
    config
}

// ── State machine ─────────────────────────────────────────────────────────────

#[derive(Default)]
struct Decoder {
    config: MenuConfig,
    stack: Vec<Frame>,
}

impl Decoder {
    fn line(&mut self, number: usize, raw: &str) {
        let content = raw.trim();
        if content.is_empty() || content.starts_with('#') {
            return;
        }

        let accepted = match indent_of(raw) {
            0 => self.top_level(content),
            SECTION_COLUMN => self.section_header(content),
            SECTION_BODY_COLUMN => self.section_line(content),
            ITEM_COLUMN => self.item_start(&raw[ITEM_COLUMN..]),
            ITEM_BODY_COLUMN => self.item_line(content),
            n if n >= BLOCK_BODY_COLUMN => self.block_line(content),
            _ => false,
        };

        if !accepted {
            trace!(line = number, content, "skipped line");
        }
    }

    /// Column 0: only `menu-title:` carries data; `sections:` is implied.
    fn top_level(&mut self, content: &str) -> bool {
        if let Some(value) = value_after(content, "menu-title") {
            self.config.menu_title = unquote(value).to_string();
            return true;
        }
        content == "sections:"
    }

    /// Column 2: `key:` opens (or reopens and resets) a section.
    fn section_header(&mut self, content: &str) -> bool {
        let Some(key) = content.strip_suffix(':').filter(|k| is_section_key(k)) else {
            return false;
        };
        let index = self.config.sections.insert(key, Section::default());
        self.open(0, Frame::Section(index));
        true
    }

    /// Column 4: section properties and the `items:` marker.
    fn section_line(&mut self, content: &str) -> bool {
        if !matches!(self.frame_at(0), Some(Frame::Section(_))) {
            return false;
        }
        if content == "items:" {
            self.open(1, Frame::Items);
            return true;
        }

        let Some(section) = self.current_section() else {
            return false;
        };
        if let Some(v) = value_after(content, "icon") {
            section.icon = v.to_string();
        } else if let Some(v) = value_after(content, "name") {
            section.name = unquote(v).to_string();
        } else if let Some(v) = value_after(content, "slot") {
            section.slot = parse_int(v);
        } else if let Some(v) = value_after(content, "menu-title") {
            section.menu_title = unquote(v).to_string();
        } else {
            return false;
        }
        // A section property ends the item list above it.
        self.stack.truncate(1);
        true
    }

    /// Column 6: `- ` starts an item, optionally with an inline `material:`.
    fn item_start(&mut self, rest: &str) -> bool {
        if self.frame_at(1) != Some(Frame::Items) {
            return false;
        }
        let Some(inline) = rest.strip_prefix("- ") else {
            return false;
        };

        let mut item = Item::default();
        if let Some(material) = value_after(inline.trim(), "material") {
            item.material = material.to_string();
        }

        let Some(section) = self.current_section() else {
            return false;
        };
        section.items.push(item);
        self.open(2, Frame::Item);
        true
    }

    /// Column 8: item scalars, or a block opener.
    fn item_line(&mut self, content: &str) -> bool {
        if self.frame_at(2) != Some(Frame::Item) {
            return false;
        }

        if let Some(kind) = BlockKind::from_opener(content) {
            let Some(item) = self.current_item() else {
                return false;
            };
            match kind {
                BlockKind::Potion => item.potion = Some(Potion::default()),
                BlockKind::Firework => item.firework = Some(Firework::default()),
                BlockKind::Enchantments => item.enchantments = Some(Vec::new()),
                BlockKind::Lore => item.lore = Some(Vec::new()),
                BlockKind::Flags => item.flags = Some(Vec::new()),
            }
            self.open(3, Frame::Block(kind));
            return true;
        }

        let Some(item) = self.current_item() else {
            return false;
        };
        if let Some(v) = value_after(content, "material") {
            item.material = v.to_string();
        } else if let Some(v) = value_after(content, "amount") {
            item.amount = Some(parse_int(v));
        } else if let Some(v) = value_after(content, "name") {
            item.name = Some(unquote(v).to_string());
        } else if let Some(v) = value_after(content, "unbreakable") {
            item.unbreakable = Some(v == "true");
        } else if let Some(v) = value_after(content, "glow") {
            item.glow = Some(v == "true");
        } else if let Some(v) = value_after(content, "custom-model-data") {
            item.custom_model_data = Some(parse_int(v));
        } else {
            return false;
        }
        // A scalar property ends any open block.
        self.stack.truncate(3);
        true
    }

    /// Column 10 and deeper: content of the single open block.
    fn block_line(&mut self, content: &str) -> bool {
        let Some(Frame::Block(kind)) = self.frame_at(3) else {
            return false;
        };
        let Some(item) = self.current_item() else {
            return false;
        };

        match kind {
            BlockKind::Potion => match (value_after(content, "type"), item.potion.as_mut()) {
                (Some(v), Some(potion)) => potion.kind = v.to_string(),
                _ => return false,
            },
            BlockKind::Firework => match (value_after(content, "power"), item.firework.as_mut()) {
                (Some(v), Some(firework)) => firework.power = parse_int(v).as_i64().unwrap_or(1),
                _ => return false,
            },
            BlockKind::Enchantments => {
                let entry = content.strip_prefix("- ").and_then(parse_enchantment);
                match (entry, item.enchantments.as_mut()) {
                    (Some(e), Some(list)) => list.push(e),
                    _ => return false,
                }
            }
            BlockKind::Lore => match (content.strip_prefix("- "), item.lore.as_mut()) {
                (Some(line), Some(lore)) => lore.push(unquote(line).to_string()),
                _ => return false,
            },
            BlockKind::Flags => match (content.strip_prefix("- "), item.flags.as_mut()) {
                (Some(flag), Some(flags)) => flags.push(flag.to_string()),
                _ => return false,
            },
        }
        true
    }

    // ── Frame helpers ─────────────────────────────────────────────────────────

    fn frame_at(&self, depth: usize) -> Option<Frame> {
        self.stack.get(depth).copied()
    }

    /// Closes every frame at `depth` or deeper, then opens `frame` there.
    fn open(&mut self, depth: usize, frame: Frame) {
        self.stack.truncate(depth);
        self.stack.push(frame);
    }

    fn current_section(&mut self) -> Option<&mut Section> {
        let index = match self.stack.first() {
            Some(&Frame::Section(index)) => index,
            _ => return None,
        };
        self.config.sections.get_index_mut(index)
    }

    fn current_item(&mut self) -> Option<&mut Item> {
        if self.frame_at(2) != Some(Frame::Item) {
            return None;
        }
        self.current_section()?.items.last_mut()
    }
}

/// Parses `TYPE:LEVEL`, splitting at the last colon.
///
/// A missing type drops the entry.  A level that is not a number becomes 1;
/// any number, including 0, is kept as written.
fn parse_enchantment(entry: &str) -> Option<Enchantment> {
    let colon = entry.rfind(':').filter(|&i| i > 0)?;
    let kind = entry[..colon].trim();
    if kind.is_empty() {
        return None;
    }
    let level = parse_int(&entry[colon + 1..]).as_i64().unwrap_or(1);
    Some(Enchantment::new(kind, level))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
