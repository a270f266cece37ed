use std::io::{Read, Seek};

use crate::core_api::{CoreError, FormatVariant, Game, SaveGameRecord};
use crate::plugins::read_plugin_list;
use crate::reader::ByteCursor;
use crate::screenshot::{PixelFormat, read_screenshot};
use crate::timestamp::ticks_to_epoch;

pub fn decode<R: Read + Seek>(r: &mut ByteCursor<R>) -> Result<SaveGameRecord, CoreError> {
    r.seek(FormatVariant::Skyrim.signature().len() as u64)?;

    r.skip::<u32>(1)?; // header size
    r.skip::<u32>(1)?; // header version

    let save_slot_number = r.read::<u32>()?;
    let player_name = r.read_string()?;
    let player_level = r.read::<u32>()? as u16;
    let player_location = r.read_string()?;

    let _time_of_day = r.read_string()?;
    let _race = r.read_string()?;

    r.skip::<u16>(1)?; // gender
    r.skip::<f32>(2)?; // experience gathered, experience required

    let filetime = r.read::<u64>()?;
    let creation_time = ticks_to_epoch(filetime);

    let screenshot = read_screenshot(r, PixelFormat::Rgb)?;

    r.skip::<u8>(1)?; // form version
    r.skip::<u32>(1)?; // plugin info size

    let plugins = read_plugin_list(r)?;

    Ok(SaveGameRecord {
        game: Game::Skyrim,
        save_slot_number,
        player_name,
        player_level: u32::from(player_level),
        player_location,
        creation_time: Some(i64::from(creation_time)),
        screenshot,
        plugins,
    })
}
