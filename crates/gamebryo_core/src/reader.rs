use std::io::{self, Read, Seek, SeekFrom};

use crate::core_api::CoreError;
use crate::text::Latin1Text;

/// A fixed-width little-endian value that can be read off the cursor.
pub trait LeField: Sized {
    const SIZE: usize;

    fn from_le_slice(bytes: &[u8]) -> Self;
}

macro_rules! le_field {
    ($($ty:ty),*) => {
        $(
            impl LeField for $ty {
                const SIZE: usize = std::mem::size_of::<$ty>();

                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$ty>()];
                    buf.copy_from_slice(&bytes[..Self::SIZE]);
                    <$ty>::from_le_bytes(buf)
                }
            }
        )*
    };
}

le_field!(u8, u16, u32, u64, i8, i16, i32, i64, f32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringEncoding {
    /// `u16` length followed by that many bytes.
    #[default]
    LengthPrefixedU16,
    /// `u8` length followed by that many bytes, the last being a terminator.
    BzString,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorMode {
    pub string_encoding: StringEncoding,
    /// Every fixed-width value and string payload is followed by a one byte
    /// field delimiter. Raw reads and skips never consume one.
    pub field_markers: bool,
}

/// Sequential little-endian reader over a save file.
///
/// The length of the source is taken once on construction and every read
/// is checked against it before any bytes are pulled or buffers allocated.
pub struct ByteCursor<R> {
    inner: R,
    pos: u64,
    len: u64,
    mode: CursorMode,
}

impl<R: Read + Seek> ByteCursor<R> {
    pub fn new(mut inner: R) -> Result<Self, CoreError> {
        let pos = inner.stream_position()?;
        let len = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(pos))?;
        Ok(Self {
            inner,
            pos,
            len,
            mode: CursorMode::default(),
        })
    }

    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    pub fn set_string_encoding(&mut self, encoding: StringEncoding) {
        self.mode.string_encoding = encoding;
    }

    pub fn set_field_markers(&mut self, enabled: bool) {
        self.mode.field_markers = enabled;
    }

    /// Read one value, then its field delimiter if markers are enabled.
    pub fn read<T: LeField>(&mut self) -> Result<T, CoreError> {
        let value = self.read_unmarked::<T>()?;
        self.skip_field_marker()?;
        Ok(value)
    }

    /// Advance past `count` values of `T` without decoding them.
    pub fn skip<T: LeField>(&mut self, count: u64) -> Result<(), CoreError> {
        let n = count.checked_mul(T::SIZE as u64).unwrap_or(u64::MAX);
        self.skip_bytes(n)
    }

    pub fn skip_bytes(&mut self, n: u64) -> Result<(), CoreError> {
        self.ensure(n)?;
        self.inner.seek_relative(n as i64)?;
        self.pos += n;
        Ok(())
    }

    pub fn read_bytes(&mut self, n: u64) -> Result<Vec<u8>, CoreError> {
        self.ensure(n)?;
        let mut buf = vec![0u8; n as usize];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Read a string in the active encoding, then the trailing field
    /// delimiter if the cursor has field markers enabled.
    pub fn read_string(&mut self) -> Result<Latin1Text, CoreError> {
        let bytes = match self.mode.string_encoding {
            StringEncoding::LengthPrefixedU16 => {
                let len = self.read_unmarked::<u16>()?;
                self.read_bytes(u64::from(len))?
            }
            StringEncoding::BzString => {
                let len = self.read_unmarked::<u8>()?;
                let mut bytes = self.read_bytes(u64::from(len))?;
                bytes.pop();
                bytes
            }
        };

        self.skip_field_marker()?;
        Ok(Latin1Text::new(bytes))
    }

    pub fn tell(&self) -> u64 {
        self.pos
    }

    pub fn seek(&mut self, pos: u64) -> Result<(), CoreError> {
        self.inner.seek(SeekFrom::Start(pos))?;
        self.pos = pos;
        Ok(())
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.pos)
    }

    fn read_unmarked<T: LeField>(&mut self) -> Result<T, CoreError> {
        let mut buf = [0u8; 16];
        let width = T::SIZE;
        if width > buf.len() {
            let bytes = self.read_bytes(width as u64)?;
            return Ok(T::from_le_slice(&bytes));
        }
        self.fill(&mut buf[..width])?;
        Ok(T::from_le_slice(&buf[..width]))
    }

    fn skip_field_marker(&mut self) -> Result<(), CoreError> {
        if self.mode.field_markers {
            self.skip_bytes(1)?;
        }
        Ok(())
    }

    fn ensure(&self, n: u64) -> Result<(), CoreError> {
        if n > self.remaining() {
            return Err(self.end_of_input(n));
        }
        Ok(())
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), CoreError> {
        let n = buf.len() as u64;
        self.ensure(n)?;
        match self.inner.read_exact(buf) {
            Ok(()) => {
                self.pos += n;
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(self.end_of_input(n)),
            Err(e) => Err(e.into()),
        }
    }

    fn end_of_input(&self, len: u64) -> CoreError {
        CoreError::UnexpectedEndOfInput {
            offset: self.pos,
            len,
        }
    }
}
