//! Date arithmetic for the rolling commit window.
//!
//! Day offsets count backwards from today: an event `d` days old lands on offset
//! `d + alignment_offset()`, which places every weekday on a fixed slot of the grid.

use crate::model::WINDOW_DAYS;
use chrono::{DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, TimeZone, Weekday};

#[derive(Debug, Clone, Copy)]
pub struct WindowClock {
    now: DateTime<FixedOffset>,
}

impl WindowClock {
    /// Clock anchored on the current wall-clock time in the local zone.
    pub fn now() -> Self {
        Self::at(Local::now().fixed_offset())
    }

    pub fn at(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }

    pub fn today(&self) -> NaiveDate {
        Self::start_of_day(&self.now)
    }

    /// Calendar date of `instant` in its own time zone.
    pub fn start_of_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
        instant.date_naive()
    }

    /// Whole days between `date` and today, or `None` once the count exceeds the window.
    ///
    /// Dates after today count as zero days.
    pub fn days_since(&self, date: NaiveDate) -> Option<u32> {
        let days = (self.today() - date).num_days();
        if days <= 0 {
            return Some(0);
        }
        if days > i64::from(WINDOW_DAYS) {
            return None;
        }
        u32::try_from(days).ok()
    }

    /// Slots needed to anchor today's weekday: Sunday 7, Monday 6, ..., Saturday 1.
    pub fn alignment_offset(&self) -> u32 {
        match self.now.weekday() {
            Weekday::Sun => 7,
            Weekday::Mon => 6,
            Weekday::Tue => 5,
            Weekday::Wed => 4,
            Weekday::Thu => 3,
            Weekday::Fri => 2,
            Weekday::Sat => 1,
        }
    }

    /// Day offset of an instant, or `None` if it is older than the window.
    pub fn day_offset<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> Option<u32> {
        self.days_since(Self::start_of_day(instant))
            .map(|days| days + self.alignment_offset())
    }

    /// Calendar date a day offset stands for. Offsets below the alignment map to future days.
    pub fn date_of_offset(&self, offset: u32) -> NaiveDate {
        let days_ago = i64::from(offset) - i64::from(self.alignment_offset());
        self.today() - Duration::days(days_ago)
    }

    pub fn window_start(&self) -> NaiveDate {
        self.today() - Duration::days(i64::from(WINDOW_DAYS))
    }
}
