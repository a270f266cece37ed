use std::io::{Read, Seek};

use crate::core_api::{CoreError, FormatVariant};
use crate::reader::ByteCursor;

/// Match the file's leading bytes against the known save signatures.
///
/// Each probe starts again from offset 0. The cursor is left wherever the
/// last probe stopped; decoders reposition themselves.
pub fn detect_format<R: Read + Seek>(r: &mut ByteCursor<R>) -> Result<FormatVariant, CoreError> {
    for variant in FormatVariant::ALL {
        if probe(r, variant.signature())? {
            return Ok(variant);
        }
    }
    Err(CoreError::FormatUnrecognized)
}

fn probe<R: Read + Seek>(r: &mut ByteCursor<R>, signature: &[u8]) -> Result<bool, CoreError> {
    r.seek(0)?;
    if r.remaining() < signature.len() as u64 {
        return Ok(false);
    }
    let found = r.read_bytes(signature.len() as u64)?;
    Ok(found == signature)
}
