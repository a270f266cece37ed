use std::io::{Read, Seek};

use crate::core_api::{CoreError, FormatVariant, Game, SaveGameRecord};
use crate::plugins::read_plugin_list;
use crate::reader::ByteCursor;
use crate::screenshot::{PixelFormat, read_screenshot_with_dimensions};

const FIELD_DELIMITER: u8 = 0x7C;
/// A Fallout 3 save has only the 4 byte screenshot width and its delimiter
/// before the first `|`.
const FALLOUT3_LEADING_FIELD_LEN: u64 = 5;

pub fn decode<R: Read + Seek>(r: &mut ByteCursor<R>) -> Result<SaveGameRecord, CoreError> {
    r.seek(FormatVariant::Fallout3.signature().len() as u64)?;

    r.skip::<u32>(1)?; // save header size
    r.skip::<u32>(1)?; // version, always 0x30
    r.skip::<u8>(1)?; // delimiter

    let game = detect_new_vegas(r)?;

    r.set_field_markers(true);

    let width = r.read::<u32>()?;
    let height = r.read::<u32>()?;
    let save_slot_number = r.read::<u32>()?;
    let player_name = r.read_string()?;
    let _unknown = r.read_string()?;
    let player_level = r.read::<i32>()?;
    let player_location = r.read_string()?;
    let _playtime = r.read_string()?;

    let screenshot = read_screenshot_with_dimensions(r, width, height, PixelFormat::Rgb)?;

    r.skip::<u8>(5)?; // unknown byte, plugin data size

    let plugins = read_plugin_list(r)?;

    Ok(SaveGameRecord {
        game,
        save_slot_number,
        player_name,
        // Stored bit for bit; a negative level reads back as a large value.
        player_level: player_level as u32,
        player_location,
        creation_time: None,
        screenshot,
        plugins,
    })
}

/// New Vegas shares the Fallout 3 signature and header but inserts an extra
/// string field here.
///
/// This is a heuristic, not a guarantee: it scans for the first `|` and
/// assumes that byte never occurs inside New Vegas' extra field. Exactly
/// five bytes up to and including the delimiter means Fallout 3, and the
/// cursor is rewound because those bytes are the screenshot width. Any
/// other count is treated as New Vegas and the scanned bytes stay consumed.
fn detect_new_vegas<R: Read + Seek>(r: &mut ByteCursor<R>) -> Result<Game, CoreError> {
    let start = r.tell();
    let mut scanned = 0u64;
    loop {
        let byte = r.read::<u8>()?;
        scanned += 1;
        if byte == FIELD_DELIMITER {
            break;
        }
    }

    if scanned == FALLOUT3_LEADING_FIELD_LEN {
        r.seek(start)?;
        Ok(Game::Fallout3)
    } else {
        Ok(Game::FalloutNewVegas)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::detect_new_vegas;
    use crate::core_api::{CoreError, Game};
    use crate::reader::ByteCursor;

    fn cursor(bytes: &[u8]) -> ByteCursor<Cursor<Vec<u8>>> {
        ByteCursor::new(Cursor::new(bytes.to_vec())).expect("cursor")
    }

    #[test]
    fn five_bytes_to_delimiter_rewinds_as_fallout3() {
        let mut r = cursor(&[0x40, 0x01, 0x00, 0x00, b'|', 0xAA]);
        assert_eq!(detect_new_vegas(&mut r).expect("scan"), Game::Fallout3);
        assert_eq!(r.tell(), 0);
    }

    #[test]
    fn longer_field_is_consumed_as_new_vegas() {
        let mut r = cursor(&[5, 0, b'1', b'.', b'4', b'.', b'0', b'|', 0x40]);
        assert_eq!(
            detect_new_vegas(&mut r).expect("scan"),
            Game::FalloutNewVegas
        );
        assert_eq!(r.tell(), 8);
    }

    #[test]
    fn missing_delimiter_runs_off_the_end() {
        let mut r = cursor(&[1, 2, 3]);
        assert!(matches!(
            detect_new_vegas(&mut r),
            Err(CoreError::UnexpectedEndOfInput { offset: 3, len: 1 })
        ));
    }
}
