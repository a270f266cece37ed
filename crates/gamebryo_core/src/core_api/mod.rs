mod engine;
mod error;
mod types;

pub use engine::{Engine, EngineOptions, decode};
pub use error::{CoreError, CoreErrorCode};
pub use types::{FormatVariant, Game, SaveGameRecord};
