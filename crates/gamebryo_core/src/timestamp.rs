use chrono::{LocalResult, Months, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};

use crate::reader::LeField;

/// 100ns intervals per second.
pub const TICKS_PER_SECOND: u64 = 10_000_000;
/// Seconds from 1601-01-01T00:00:00Z to 1970-01-01T00:00:00Z.
pub const SECONDS_TO_UNIX_EPOCH: u64 = 11_644_473_600;

/// The calendar timestamp layout used by Windows (`SYSTEMTIME`): eight
/// little-endian `u16` fields, 16 bytes on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemTime {
    pub year: u16,
    pub month: u16,
    pub day_of_week: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
    pub milliseconds: u16,
}

impl LeField for SystemTime {
    const SIZE: usize = 16;

    fn from_le_slice(bytes: &[u8]) -> Self {
        let field = |i: usize| u16::from_le_bytes([bytes[i * 2], bytes[i * 2 + 1]]);
        Self {
            year: field(0),
            month: field(1),
            day_of_week: field(2),
            day: field(3),
            hour: field(4),
            minute: field(5),
            second: field(6),
            milliseconds: field(7),
        }
    }
}

/// Convert a count of 100ns ticks since 1601-01-01 UTC to Unix seconds.
///
/// Truncates to 32 bits. Ticks before 1970 wrap instead of failing.
pub fn ticks_to_epoch(ticks: u64) -> u32 {
    (ticks / TICKS_PER_SECOND).wrapping_sub(SECONDS_TO_UNIX_EPOCH) as u32
}

/// Interpret a calendar timestamp in the host's local time zone and return
/// Unix seconds.
///
/// Out-of-range fields carry into the next unit (month 13 is January of the
/// following year, day 0 is the last day of the previous month). Local times
/// that fall into a DST gap move forward an hour; ambiguous ones take the
/// earlier instant.
pub fn system_time_to_epoch(time: &SystemTime) -> i64 {
    system_time_to_epoch_in(time, &chrono::Local)
}

pub fn system_time_to_epoch_in<Tz: TimeZone>(time: &SystemTime, tz: &Tz) -> i64 {
    let naive = normalized_naive(time);
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp(),
        LocalResult::None => {
            let shifted = naive + TimeDelta::hours(1);
            tz.from_local_datetime(&shifted)
                .earliest()
                .map(|dt| dt.timestamp())
                .unwrap_or_else(|| shifted.and_utc().timestamp())
        }
    }
}

fn normalized_naive(time: &SystemTime) -> NaiveDateTime {
    // u16 years are always within chrono's range.
    let jan_first = NaiveDate::from_ymd_opt(i32::from(time.year), 1, 1).unwrap_or_default();
    let month_start = if time.month == 0 {
        jan_first.checked_sub_months(Months::new(1))
    } else {
        jan_first.checked_add_months(Months::new(u32::from(time.month) - 1))
    }
    .unwrap_or(jan_first);

    let offset = (i64::from(time.day) - 1) * 86_400
        + i64::from(time.hour) * 3_600
        + i64::from(time.minute) * 60
        + i64::from(time.second);

    month_start.and_time(chrono::NaiveTime::MIN) + TimeDelta::seconds(offset)
}
