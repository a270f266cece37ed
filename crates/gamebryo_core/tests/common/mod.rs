#![allow(dead_code)]

pub const SKYRIM_CREATED_AT: i64 = 1_320_969_600;
pub const FALLOUT4_CREATED_AT: i64 = 1_447_372_800;

pub fn unix_to_ticks(secs: i64) -> u64 {
    (secs as u64 + 11_644_473_600) * 10_000_000
}

/// Little-endian byte sink for synthesising save files.
#[derive(Default)]
pub struct SaveBuilder {
    bytes: Vec<u8>,
}

impl SaveBuilder {
    pub fn new(signature: &[u8]) -> Self {
        Self {
            bytes: signature.to_vec(),
        }
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.bytes.push(v);
        self
    }

    pub fn u16(mut self, v: u16) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u32(mut self, v: u32) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn i32(mut self, v: i32) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u64(mut self, v: u64) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn f32(mut self, v: f32) -> Self {
        self.bytes.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn raw(mut self, v: &[u8]) -> Self {
        self.bytes.extend_from_slice(v);
        self
    }

    pub fn system_time(self, fields: [u16; 8]) -> Self {
        fields.into_iter().fold(self, |b, v| b.u16(v))
    }

    /// `u16` length prefixed.
    pub fn wstring(self, s: &str) -> Self {
        self.u16(s.len() as u16).raw(s.as_bytes())
    }

    /// The `|` field delimiter.
    pub fn marker(self) -> Self {
        self.u8(b'|')
    }

    /// `u16` length prefixed, followed by a `|` delimiter.
    pub fn marked_wstring(self, s: &str) -> Self {
        self.wstring(s).marker()
    }

    /// `u8` length prefixed, including a trailing NUL.
    pub fn bzstring(self, s: &str) -> Self {
        self.u8(s.len() as u8 + 1).raw(s.as_bytes()).u8(0)
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

pub fn rgb_pixels(width: u32, height: u32) -> Vec<u8> {
    (0..width * height * 3).map(|i| (i % 251) as u8).collect()
}

pub fn rgba_pixels(width: u32, height: u32) -> Vec<u8> {
    (0..width * height * 4).map(|i| (i % 241) as u8).collect()
}

/// Oblivion: slot 7, "Hero", level 12 in "Imperial City", saved
/// 2006-03-20 12:30:15 local time, 2x2 screenshot, two plugins.
pub fn oblivion_save() -> Vec<u8> {
    SaveBuilder::new(b"TES4SAVEGAME")
        .u8(0) // major
        .u8(125) // minor
        .system_time([2006, 3, 1, 10, 9, 0, 0, 0])
        .u32(125) // header version
        .u32(512) // header size
        .u32(7)
        .bzstring("Hero")
        .u16(12)
        .bzstring("Imperial City")
        .f32(2.5)
        .u32(90_000)
        .system_time([2006, 3, 1, 20, 12, 30, 15, 250])
        .u32(8 + 2 * 2 * 3)
        .u32(2)
        .u32(2)
        .raw(&rgb_pixels(2, 2))
        .u8(2)
        .bzstring("Oblivion.esm")
        .bzstring("Knights.esp")
        .build()
}

/// Skyrim: slot 42, "Dovahkiin", level 81 in "Whiterun", 3x2 screenshot,
/// three plugins.
pub fn skyrim_save() -> Vec<u8> {
    skyrim_save_with_level(81)
}

pub fn skyrim_save_with_level(level: u32) -> Vec<u8> {
    SaveBuilder::new(b"TESV_SAVEGAME")
        .u32(0x2c)
        .u32(9)
        .u32(42)
        .wstring("Dovahkiin")
        .u32(level)
        .wstring("Whiterun")
        .wstring("Morning of Sundas")
        .wstring("NordRace")
        .u16(1)
        .f32(120.0)
        .f32(1400.0)
        .u64(unix_to_ticks(SKYRIM_CREATED_AT))
        .u32(3)
        .u32(2)
        .raw(&rgb_pixels(3, 2))
        .u8(74) // form version
        .u32(37) // plugin info size
        .u8(3)
        .wstring("Skyrim.esm")
        .wstring("Update.esm")
        .wstring("Dawnguard.esm")
        .build()
}

/// Fallout 3 / New Vegas: slot 3, "Courier", level 30 in "Goodsprings",
/// two plugins. Every field after the game check carries a trailing `|`.
/// New Vegas adds a version field before the screenshot width.
pub fn fallout3_save(new_vegas: bool) -> Vec<u8> {
    let (width, height) = fallout3_screenshot_dimensions(new_vegas);
    let b = SaveBuilder::new(b"FO3SAVEGAME")
        .u32(0x1b0) // save header size
        .u32(0x30)
        .marker();

    let b = if new_vegas {
        b.u16(7).raw(b"1.4.0.5").marker()
    } else {
        b
    };

    b.u32(width)
        .marker()
        .u32(height)
        .marker()
        .u32(3)
        .marker()
        .marked_wstring("Courier")
        .marked_wstring("")
        .i32(30)
        .marker()
        .marked_wstring("Goodsprings")
        .marked_wstring("012.34.56")
        .raw(&rgb_pixels(width, height))
        .u8(0)
        .u32(44)
        .u8(2)
        .marker()
        .marked_wstring("FalloutNV.esm")
        .marked_wstring("DeadMoney.esm")
        .build()
}

pub fn fallout3_screenshot_dimensions(new_vegas: bool) -> (u32, u32) {
    if new_vegas { (6, 4) } else { (8, 6) }
}

/// Fallout 4: slot 15, "Nate", level 50 in "Sanctuary Hills", 2x3 RGBA
/// screenshot, two plugins.
pub fn fallout4_save() -> Vec<u8> {
    SaveBuilder::new(b"FO4_SAVEGAME")
        .u32(0x4a)
        .u32(11)
        .u32(15)
        .wstring("Nate")
        .u32(50)
        .wstring("Sanctuary Hills")
        .wstring("012.34.56")
        .wstring("HumanRace")
        .u16(0)
        .f32(10.0)
        .f32(250.0)
        .u64(unix_to_ticks(FALLOUT4_CREATED_AT))
        .u32(2)
        .u32(3)
        .raw(&rgba_pixels(2, 3))
        .u8(68)
        .wstring("1.10.163.0")
        .u32(31)
        .u8(2)
        .wstring("Fallout4.esm")
        .wstring("DLCRobot.esm")
        .build()
}
