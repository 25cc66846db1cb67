use crate::model::{cell_of, BucketTable, CalendarGrid, WeekColumn};

/// Pack bucket counts into week columns.
///
/// Offsets are visited in ascending order; each lands in column `offset / 7` at slot
/// `offset % 7`. Slots with no offset (slot 0 of week 0, the tail of the oldest week) stay
/// zero, and the final partial column is always committed.
pub fn build_grid(buckets: &BucketTable) -> CalendarGrid {
    let mut grid = CalendarGrid::default();
    let mut current: Option<(u32, WeekColumn)> = None;

    for (offset, count) in buckets.iter() {
        let (week, slot) = cell_of(offset);

        if !matches!(current, Some((open_week, _)) if open_week == week) {
            if let Some((done_week, column)) = current.take() {
                grid.columns.insert(done_week, column);
            }
            current = Some((week, WeekColumn::default()));
        }
        if let Some((_, column)) = current.as_mut() {
            column.0[slot] = count;
        }
    }

    if let Some((week, column)) = current {
        grid.columns.insert(week, column);
    }
    grid
}
