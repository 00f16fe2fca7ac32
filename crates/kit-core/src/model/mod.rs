//! Menu data model shared by the codec and the editor service.

pub mod int_value;
pub mod menu;
pub mod section_map;

pub use int_value::{parse_int, IntValue};
pub use menu::{is_section_key, Enchantment, Firework, Item, MenuConfig, Potion, Section};
pub use section_map::SectionMap;
