//! Codec for the indentation-structured menu file.
//!
//! File format:
//! ```text
//! menu-title: "Kits"
//!
//! sections:
//!   weapons:                      <- column 2: section key
//!     icon: DIAMOND_SWORD         <- column 4: section property
//!     items:
//!       - material: DIAMOND_SWORD <- column 6: item start
//!         name: "Excalibur"       <- column 8: item property / block opener
//!         enchantments:
//!           - SHARPNESS:5         <- column 10+: block content
//! ```
//! Structure is recognized by exact column counts.  A line at any other
//! column is skipped.

pub mod decoder;
pub mod encoder;
pub mod text;

pub use decoder::decode;
pub use encoder::{encode, EncodeError, FILE_HEADER};
