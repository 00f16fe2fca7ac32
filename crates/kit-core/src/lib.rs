//! # kit-core
//!
//! Shared library for the kit menu editor containing the menu data model and
//! the codec that converts it to and from the on-disk menu file.
//!
//! This crate has zero dependencies on the file system, async runtimes, or
//! HTTP frameworks.  Callers hand it text and get a model back, or hand it a
//! model and get text back.
//!
//! # Architecture overview (for beginners)
//!
//! The menu file is an indentation-structured text file describing a game
//! server "kit" menu: a title, a list of named sections, and inside each
//! section an ordered list of items.  An operator edits it through a web form;
//! the form speaks JSON, the server on disk speaks the indented text format.
//!
//! - **`model`** – The typed in-memory representation: [`MenuConfig`],
//!   [`Section`], [`Item`] and the optional item attributes.  Every type is
//!   `serde`-serializable so it can cross the JSON API boundary as-is.
//!
//! - **`codec`** – The two directions of translation.  [`decode`] reads the
//!   text format leniently (unknown lines are skipped, never an error);
//!   [`encode`] writes the canonical layout and rejects models that would
//!   produce unreadable text.
//!
//! ```text
//! text ──decode──▶ MenuConfig ──(edited in the browser)──▶ MenuConfig ──encode──▶ text
//! ```

pub mod codec;
pub mod model;

// Re-export the most-used types at the crate root so callers can write
// `kit_core::MenuConfig` instead of `kit_core::model::menu::MenuConfig`.
pub use codec::{decode, encode, EncodeError};
pub use model::{
    Enchantment, Firework, IntValue, Item, MenuConfig, Potion, Section, SectionMap,
};
