use std::io::{Read, Seek};

use serde::Serialize;

use crate::core_api::CoreError;
use crate::reader::ByteCursor;

/// Pixel layout of the screenshot as stored in the save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> u64 {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }
}

/// Save preview image, always RGBA with 4 bytes per pixel, rows top to
/// bottom in stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screenshot {
    width: u32,
    height: u32,
    #[serde(skip)]
    pixels: Vec<u8>,
}

impl Screenshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// Read `width` and `height` as `u32`s, then the pixel data.
pub fn read_screenshot<R: Read + Seek>(
    r: &mut ByteCursor<R>,
    format: PixelFormat,
) -> Result<Screenshot, CoreError> {
    let width = r.read::<u32>()?;
    let height = r.read::<u32>()?;
    read_screenshot_with_dimensions(r, width, height, format)
}

pub fn read_screenshot_with_dimensions<R: Read + Seek>(
    r: &mut ByteCursor<R>,
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Result<Screenshot, CoreError> {
    let len = u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|n| n.checked_mul(format.bytes_per_pixel()))
        .ok_or(CoreError::UnexpectedEndOfInput {
            offset: r.tell(),
            len: u64::MAX,
        })?;

    let raw = r.read_bytes(len)?;
    let pixels = match format {
        PixelFormat::Rgba => raw,
        PixelFormat::Rgb => rgb_to_rgba(&raw),
    };

    Ok(Screenshot {
        width,
        height,
        pixels,
    })
}

/// Expand packed RGB to RGBA with an opaque alpha channel.
pub fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgb.len() / 3 * 4);
    for px in rgb.chunks_exact(3) {
        out.extend_from_slice(px);
        out.push(0xFF);
    }
    out
}
