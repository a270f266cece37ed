use std::fmt::Write as _;
use std::path::Path;

use encoding_rs::WINDOWS_1252;
use gamebryo_core::{Game, Latin1Text, SaveGameRecord, Screenshot};
use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::{ImageFormat, RgbaImage};
use serde_json::{Map as JsonMap, Value as JsonValue};

const LABEL_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    pub verbose: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub game: bool,
    pub slot: bool,
    pub name: bool,
    pub level: bool,
    pub location: bool,
    pub created: bool,
    pub screenshot_size: bool,
    pub plugins: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.game
            || self.slot
            || self.name
            || self.level
            || self.location
            || self.created
            || self.screenshot_size
            || self.plugins
    }
}

/// Decode save text for display. Saves are written with the Windows
/// Western code page.
pub fn display_text(text: &Latin1Text) -> String {
    let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(text.as_bytes());
    decoded.into_owned()
}

pub fn game_key(game: Game) -> &'static str {
    match game {
        Game::Oblivion => "Oblivion",
        Game::Skyrim => "Skyrim",
        Game::Fallout3 => "Fallout3",
        Game::FalloutNewVegas => "FalloutNewVegas",
        Game::Fallout4 => "Fallout4",
    }
}

pub fn render_json_full(record: &SaveGameRecord, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(default_json(record)),
    }
}

pub fn render_json_selected(
    record: &SaveGameRecord,
    fields: &FieldSelection,
    style: JsonStyle,
) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(selected_json(fields, record)),
    }
}

/// One `(key, value)` pair per selected field; plugins yield one pair each.
pub fn selected_pairs(record: &SaveGameRecord, fields: &FieldSelection) -> Vec<(&'static str, String)> {
    let mut out = Vec::new();

    if fields.game {
        out.push(("game", record.game().as_str().to_string()));
    }
    if fields.slot {
        out.push(("slot", record.save_slot_number().to_string()));
    }
    if fields.name {
        out.push(("name", display_text(record.player_name())));
    }
    if fields.level {
        out.push(("level", record.player_level().to_string()));
    }
    if fields.location {
        out.push(("location", display_text(record.player_location())));
    }
    if fields.created {
        out.push((
            "created",
            format_created(record).unwrap_or_else(|| "unknown".to_string()),
        ));
    }
    if fields.screenshot_size {
        out.push(("screenshot", format_dimensions(record.screenshot())));
    }
    if fields.plugins {
        for plugin in record.plugins() {
            out.push(("plugin", display_text(plugin)));
        }
    }

    out
}

pub fn render_text(record: &SaveGameRecord) -> String {
    render_text_with_options(record, TextRenderOptions::default())
}

pub fn render_text_with_options(record: &SaveGameRecord, options: TextRenderOptions) -> String {
    let mut out = String::new();

    write_row(&mut out, "Game", record.game().as_str());
    if options.verbose {
        write_row(&mut out, "Format", &format!("{:?}", record.variant()));
    }
    write_row(&mut out, "Slot", &record.save_slot_number().to_string());
    write_row(&mut out, "Name", &display_text(record.player_name()));
    write_row(&mut out, "Level", &record.player_level().to_string());
    write_row(&mut out, "Location", &display_text(record.player_location()));
    write_row(
        &mut out,
        "Created",
        &format_created(record).unwrap_or_else(|| "unknown".to_string()),
    );

    let shot = record.screenshot();
    let mut dims = format_dimensions(shot);
    if options.verbose {
        write!(&mut dims, " ({} bytes RGBA)", shot.pixels().len())
            .expect("writing to String cannot fail");
    }
    write_row(&mut out, "Screenshot", &dims);

    writeln!(&mut out, "Plugins ({}):", record.plugins().len())
        .expect("writing to String cannot fail");
    for (index, plugin) in record.plugins().iter().enumerate() {
        writeln!(&mut out, "  {:02X} {}", index, display_text(plugin))
            .expect("writing to String cannot fail");
    }

    out
}

/// Write the screenshot as a PNG file.
pub fn write_screenshot_png(shot: &Screenshot, path: &Path) -> Result<(), ImageError> {
    let img = RgbaImage::from_raw(shot.width(), shot.height(), shot.pixels().to_vec()).ok_or(
        ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::DimensionMismatch,
        )),
    )?;
    img.save_with_format(path, ImageFormat::Png)
}

fn default_json(record: &SaveGameRecord) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    out.insert(
        "game".to_string(),
        JsonValue::String(game_key(record.game()).to_string()),
    );
    out.insert(
        "slot".to_string(),
        JsonValue::from(record.save_slot_number()),
    );
    out.insert(
        "name".to_string(),
        JsonValue::String(display_text(record.player_name())),
    );
    out.insert("level".to_string(), JsonValue::from(record.player_level()));
    out.insert(
        "location".to_string(),
        JsonValue::String(display_text(record.player_location())),
    );
    out.insert("created".to_string(), created_to_json(record));
    out.insert(
        "created_unix".to_string(),
        match record.creation_time() {
            Some(secs) => JsonValue::from(secs),
            None => JsonValue::Null,
        },
    );
    out.insert(
        "screenshot".to_string(),
        screenshot_to_json(record.screenshot()),
    );
    out.insert("plugins".to_string(), plugins_to_json(record));

    out
}

fn selected_json(fields: &FieldSelection, record: &SaveGameRecord) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    if fields.game {
        out.insert(
            "game".to_string(),
            JsonValue::String(game_key(record.game()).to_string()),
        );
    }
    if fields.slot {
        out.insert(
            "slot".to_string(),
            JsonValue::from(record.save_slot_number()),
        );
    }
    if fields.name {
        out.insert(
            "name".to_string(),
            JsonValue::String(display_text(record.player_name())),
        );
    }
    if fields.level {
        out.insert("level".to_string(), JsonValue::from(record.player_level()));
    }
    if fields.location {
        out.insert(
            "location".to_string(),
            JsonValue::String(display_text(record.player_location())),
        );
    }
    if fields.created {
        out.insert("created".to_string(), created_to_json(record));
    }
    if fields.screenshot_size {
        out.insert(
            "screenshot".to_string(),
            screenshot_to_json(record.screenshot()),
        );
    }
    if fields.plugins {
        out.insert("plugins".to_string(), plugins_to_json(record));
    }

    out
}

fn created_to_json(record: &SaveGameRecord) -> JsonValue {
    match record.creation_datetime() {
        Some(dt) => JsonValue::String(dt.to_rfc3339()),
        None => JsonValue::Null,
    }
}

fn screenshot_to_json(shot: &Screenshot) -> JsonValue {
    let mut obj = JsonMap::new();
    obj.insert("width".to_string(), JsonValue::from(shot.width()));
    obj.insert("height".to_string(), JsonValue::from(shot.height()));
    JsonValue::Object(obj)
}

fn plugins_to_json(record: &SaveGameRecord) -> JsonValue {
    JsonValue::Array(
        record
            .plugins()
            .iter()
            .map(|p| JsonValue::String(display_text(p)))
            .collect(),
    )
}

fn write_row(out: &mut String, label: &str, value: &str) {
    let label = format!("{label}:");
    writeln!(out, "{label:<width$}{value}", width = LABEL_WIDTH)
        .expect("writing to String cannot fail");
}

fn format_created(record: &SaveGameRecord) -> Option<String> {
    record
        .creation_datetime()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

fn format_dimensions(shot: &Screenshot) -> String {
    format!("{}x{}", shot.width(), shot.height())
}
