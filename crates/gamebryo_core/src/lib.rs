//! Save game metadata for Gamebryo and Creation Engine titles.
//!
//! Reads the header of Oblivion, Skyrim, Fallout 3, Fallout: New Vegas and
//! Fallout 4 saves into a [`SaveGameRecord`]: player name, level and
//! location, slot number, creation time, the preview screenshot and the
//! plugin load order.

pub mod core_api;
pub mod detect;
pub mod fallout3;
pub mod fallout4;
pub mod oblivion;
pub mod plugins;
pub mod reader;
pub mod screenshot;
pub mod skyrim;
pub mod text;
pub mod timestamp;

pub use core_api::{
    CoreError, CoreErrorCode, Engine, EngineOptions, FormatVariant, Game, SaveGameRecord, decode,
};
pub use screenshot::Screenshot;
pub use text::Latin1Text;
