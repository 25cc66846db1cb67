use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;

/// Length of the rolling window, in days.
pub const WINDOW_DAYS: u32 = 183;

/// Smallest offset a bucket table holds. Offset 0 is never populated.
pub const FIRST_OFFSET: u32 = 1;

pub const DAYS_PER_WEEK: u32 = 7;

/// Largest offset a day inside the window can reach: `WINDOW_DAYS` plus a full alignment.
pub const MAX_OFFSET: u32 = WINDOW_DAYS + DAYS_PER_WEEK;

/// Highest week index the grid can hold: `ceil(WINDOW_DAYS / 7)`.
pub const MAX_WEEK: u32 = WINDOW_DAYS.div_ceil(DAYS_PER_WEEK);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitEvent {
    pub author_email: String,
    pub authored_at: DateTime<FixedOffset>,
}

/// Commit counts keyed by day offset (1 = most recent slot, increasing into the past).
///
/// Offsets `FIRST_OFFSET..=WINDOW_DAYS` always exist. Recording an offset beyond the last
/// one extends the table with zeros so the key range stays contiguous; offsets outside
/// `FIRST_OFFSET..=MAX_OFFSET` are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketTable {
    counts: BTreeMap<u32, u32>,
}

impl BucketTable {
    pub fn new() -> Self {
        Self::with_window(WINDOW_DAYS)
    }

    pub fn with_window(window_days: u32) -> Self {
        let counts = (FIRST_OFFSET..=window_days).map(|offset| (offset, 0)).collect();
        Self { counts }
    }

    pub fn record(&mut self, offset: u32) {
        if !in_range(offset) {
            return;
        }
        self.extend_to(offset);
        *self.counts.entry(offset).or_insert(0) += 1;
    }

    pub(crate) fn set(&mut self, offset: u32, count: u32) {
        if !in_range(offset) {
            return;
        }
        self.extend_to(offset);
        self.counts.insert(offset, count);
    }

    fn extend_to(&mut self, offset: u32) {
        for missing in (self.last_offset() + 1)..offset {
            self.counts.insert(missing, 0);
        }
    }

    pub fn get(&self, offset: u32) -> u32 {
        self.counts.get(&offset).copied().unwrap_or(0)
    }

    pub fn last_offset(&self) -> u32 {
        self.counts.keys().next_back().copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    /// Offsets in ascending order with their counts.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.counts.iter().map(|(&offset, &count)| (offset, count))
    }
}

impl Default for BucketTable {
    fn default() -> Self {
        Self::new()
    }
}

fn in_range(offset: u32) -> bool {
    (FIRST_OFFSET..=MAX_OFFSET).contains(&offset)
}

/// One calendar week: slot `offset % 7` holds the count for that offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekColumn(pub [u32; DAYS_PER_WEEK as usize]);

impl WeekColumn {
    pub fn get(&self, slot: usize) -> u32 {
        self.0.get(slot).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalendarGrid {
    pub columns: BTreeMap<u32, WeekColumn>,
}

impl CalendarGrid {
    pub fn column(&self, week: u32) -> Option<&WeekColumn> {
        self.columns.get(&week)
    }

    /// Count stored in the cell at `(week, slot)`; absent columns read as zero.
    pub fn cell(&self, week: u32, slot: usize) -> u32 {
        self.column(week).map(|c| c.get(slot)).unwrap_or(0)
    }

    pub fn count_at(&self, offset: u32) -> u32 {
        let (week, slot) = cell_of(offset);
        self.cell(week, slot)
    }

    pub fn max_week(&self) -> Option<u32> {
        self.columns.keys().next_back().copied()
    }
}

/// Grid coordinates `(week, slot)` of a day offset.
pub fn cell_of(offset: u32) -> (u32, usize) {
    (offset / DAYS_PER_WEEK, (offset % DAYS_PER_WEEK) as usize)
}
