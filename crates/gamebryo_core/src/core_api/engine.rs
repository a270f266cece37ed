use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use crate::detect::detect_format;
use crate::reader::ByteCursor;
use crate::{fallout3, fallout4, oblivion, skyrim};

use super::error::CoreError;
use super::types::{FormatVariant, SaveGameRecord};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Reject inputs larger than this many bytes before decoding.
    pub max_input_len: Option<u64>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn open_path<P: AsRef<Path>>(&self, path: P) -> Result<SaveGameRecord, CoreError> {
        let file = File::open(path.as_ref())?;
        self.open_reader(BufReader::new(file))
    }

    pub fn open_bytes<B: AsRef<[u8]>>(&self, bytes: B) -> Result<SaveGameRecord, CoreError> {
        self.open_reader(Cursor::new(bytes.as_ref()))
    }

    pub fn open_reader<R: Read + Seek>(&self, reader: R) -> Result<SaveGameRecord, CoreError> {
        let mut r = ByteCursor::new(reader)?;
        if let Some(limit) = self.options.max_input_len
            && r.len() > limit
        {
            return Err(CoreError::InputTooLarge {
                len: r.len(),
                limit,
            });
        }

        match detect_format(&mut r)? {
            FormatVariant::Oblivion => oblivion::decode(&mut r),
            FormatVariant::Skyrim => skyrim::decode(&mut r),
            FormatVariant::Fallout3 => fallout3::decode(&mut r),
            FormatVariant::Fallout4 => fallout4::decode(&mut r),
        }
    }
}

/// Decode the save at `path` with default options.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<SaveGameRecord, CoreError> {
    Engine::new().open_path(path)
}
