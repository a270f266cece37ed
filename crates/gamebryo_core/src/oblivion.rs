use std::io::{Read, Seek};

use crate::core_api::{CoreError, FormatVariant, Game, SaveGameRecord};
use crate::plugins::read_plugin_list;
use crate::reader::{ByteCursor, StringEncoding};
use crate::screenshot::{PixelFormat, read_screenshot};
use crate::timestamp::{SystemTime, system_time_to_epoch};

pub fn decode<R: Read + Seek>(r: &mut ByteCursor<R>) -> Result<SaveGameRecord, CoreError> {
    r.seek(FormatVariant::Oblivion.signature().len() as u64)?;
    r.set_string_encoding(StringEncoding::BzString);

    r.skip::<u8>(1)?; // major version
    r.skip::<u8>(1)?; // minor version
    r.skip::<SystemTime>(1)?; // executable modification time
    r.skip::<u32>(1)?; // header version
    r.skip::<u32>(1)?; // header size

    let save_slot_number = r.read::<u32>()?;
    let player_name = r.read_string()?;
    let player_level = r.read::<u16>()?;
    let player_location = r.read_string()?;

    r.skip::<f32>(1)?; // game days
    r.skip::<u32>(1)?; // game ticks

    // Local time, unlike the tick timestamps of the later games.
    let saved_at = r.read::<SystemTime>()?;
    let creation_time = system_time_to_epoch(&saved_at);

    // Byte size of the screenshot block that follows.
    r.skip::<u32>(1)?;
    let screenshot = read_screenshot(r, PixelFormat::Rgb)?;

    let plugins = read_plugin_list(r)?;

    Ok(SaveGameRecord {
        game: Game::Oblivion,
        save_slot_number,
        player_name,
        player_level: u32::from(player_level),
        player_location,
        creation_time: Some(creation_time),
        screenshot,
        plugins,
    })
}
