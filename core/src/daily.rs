//! Calendar to seed mapping.
//!
//! Everything here is a pure function of the dates passed in; reading the
//! wall clock is left to the caller.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole calendar days from `epoch` to `date`, negative before the epoch.
pub fn days_between(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// Whole days between two instants, floored toward negative infinity so an
/// instant one millisecond before the epoch is day `-1`, not day `0`.
pub fn days_since_instant(now: DateTime<Utc>, epoch: DateTime<Utc>) -> i64 {
    (now.timestamp_millis() - epoch.timestamp_millis()).div_euclid(MILLIS_PER_DAY)
}

/// Maps a day offset onto `0..count` with a true modulo, so days before the
/// epoch still land on a valid puzzle.
///
/// `count` must be non-zero.
pub fn daily_index(day: i64, count: u32) -> u32 {
    debug_assert!(count > 0, "puzzle set must not be empty");
    day.rem_euclid(i64::from(count.max(1))) as u32
}

/// Day offset since `epoch`, optionally wrapped into a puzzle set.
pub fn daily_seed(date: NaiveDate, epoch: NaiveDate, puzzle_set_size: Option<u32>) -> i64 {
    let day = days_between(date, epoch);
    match puzzle_set_size {
        Some(count) => daily_index(day, count).into(),
        None => day,
    }
}

/// Decimal date stamp `YYYYMMDD`, the seed the grid path game is built from.
pub fn date_stamp_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Rotation through a fixed, ordered puzzle set starting at `epoch`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub epoch: NaiveDate,
    pub puzzle_count: u32,
}

impl DailySchedule {
    pub const fn new_unchecked(epoch: NaiveDate, puzzle_count: u32) -> Self {
        Self {
            epoch,
            puzzle_count,
        }
    }

    pub fn new(epoch: NaiveDate, puzzle_count: u32) -> Self {
        Self::new_unchecked(epoch, puzzle_count.max(1))
    }

    pub fn index_for(&self, date: NaiveDate) -> usize {
        daily_index(days_between(date, self.epoch), self.puzzle_count) as usize
    }

    pub fn index_at(&self, now: DateTime<Utc>) -> usize {
        let epoch = self.epoch.and_time(chrono::NaiveTime::MIN).and_utc();
        daily_index(days_since_instant(now, epoch), self.puzzle_count) as usize
    }
}
