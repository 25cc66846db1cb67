use crate::clock::WindowClock;
use crate::model::{cell_of, CalendarGrid, DAYS_PER_WEEK, MAX_WEEK};
use chrono::Datelike;
use console::Style;

const CELL_WIDTH: usize = 4;
const EMPTY_CELL: &str = "  - ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellLevel {
    Empty,
    Low,
    Medium,
    High,
    Today,
}

impl CellLevel {
    pub fn for_count(count: u32) -> Self {
        match count {
            0 => CellLevel::Empty,
            1..=4 => CellLevel::Low,
            5..=9 => CellLevel::Medium,
            _ => CellLevel::High,
        }
    }

    fn style(self) -> Style {
        match self {
            CellLevel::Empty => Style::new().dim(),
            CellLevel::Low => Style::new().black().on_white().bold(),
            CellLevel::Medium => Style::new().black().on_yellow().bold(),
            CellLevel::High => Style::new().black().on_green().bold(),
            CellLevel::Today => Style::new().white().on_magenta().bold(),
        }
    }
}

/// Paints a [`CalendarGrid`] as a month header and seven weekday rows, oldest week first.
///
/// The rightmost column is always the week holding today, so a Sunday (alignment 7) shows
/// weeks 1 through `MAX_WEEK + 1` instead of an all-future week 0.
pub struct HeatmapRenderer<'a> {
    clock: &'a WindowClock,
    styled: bool,
}

impl<'a> HeatmapRenderer<'a> {
    pub fn new(clock: &'a WindowClock) -> Self {
        Self {
            clock,
            styled: console::colors_enabled(),
        }
    }

    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn render(&self, grid: &CalendarGrid) -> String {
        let mut out = self.month_header();
        out.push('\n');

        let today = self.today_cell();
        for slot in (0..DAYS_PER_WEEK as usize).rev() {
            out.push_str(&day_label(slot));
            for week in self.weeks() {
                let count = grid.cell(week, slot);
                let level = if (week, slot) == today {
                    CellLevel::Today
                } else {
                    CellLevel::for_count(count)
                };
                let cell = level
                    .style()
                    .force_styling(self.styled)
                    .apply_to(cell_text(count));
                out.push_str(&cell.to_string());
            }
            out.push('\n');
        }
        out
    }

    fn today_cell(&self) -> (u32, usize) {
        cell_of(self.clock.alignment_offset())
    }

    /// Rendered week indices, oldest first.
    fn weeks(&self) -> impl Iterator<Item = u32> {
        let newest = self.today_cell().0;
        (newest..=newest + MAX_WEEK).rev()
    }

    /// Month abbreviation above the first column of each new month.
    fn month_header(&self) -> String {
        let mut header = " ".repeat(day_label(0).len());
        let mut month = None;

        for week in self.weeks() {
            // oldest day of the column
            let anchor = self.clock.date_of_offset(week * DAYS_PER_WEEK + DAYS_PER_WEEK - 1);
            match month {
                Some(m) if m != anchor.month() => {
                    let label = anchor.format("%b").to_string();
                    header.push_str(&format!("{label:<CELL_WIDTH$}"));
                }
                _ => header.push_str(&" ".repeat(CELL_WIDTH)),
            }
            month = Some(anchor.month());
        }
        header
    }
}

/// Row label; slot 6 holds Mondays, 4 Wednesdays, 2 Fridays.
fn day_label(slot: usize) -> String {
    let name = match slot {
        6 => "Mon",
        4 => "Wed",
        2 => "Fri",
        _ => "",
    };
    format!(" {name:<3} ")
}

fn cell_text(count: u32) -> String {
    if count == 0 {
        return EMPTY_CELL.to_string();
    }
    format!("{count:>3} ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BucketTable;
    use crate::stats::build_grid;
    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;

    fn wednesday() -> WindowClock {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 5, 9, 0, 0)
            .unwrap();
        WindowClock::at(now)
    }

    fn column_start(week: u32) -> usize {
        5 + (MAX_WEEK - week) as usize * CELL_WIDTH
    }

    fn cell_in(line: &str, week: u32) -> &str {
        let start = column_start(week);
        &line[start..start + CELL_WIDTH]
    }

    #[test]
    fn counts_pick_their_level() {
        assert_eq!(CellLevel::for_count(0), CellLevel::Empty);
        assert_eq!(CellLevel::for_count(1), CellLevel::Low);
        assert_eq!(CellLevel::for_count(4), CellLevel::Low);
        assert_eq!(CellLevel::for_count(5), CellLevel::Medium);
        assert_eq!(CellLevel::for_count(9), CellLevel::Medium);
        assert_eq!(CellLevel::for_count(10), CellLevel::High);
        assert_eq!(CellLevel::for_count(250), CellLevel::High);
    }

    #[test]
    fn cell_text_keeps_columns_aligned() {
        assert_eq!(cell_text(0), "  - ");
        assert_eq!(cell_text(7), "  7 ");
        assert_eq!(cell_text(42), " 42 ");
        assert_eq!(cell_text(123), "123 ");
    }

    #[test]
    fn renders_header_and_seven_rows() {
        let clock = wednesday();
        let out = HeatmapRenderer::new(&clock)
            .styled(false)
            .render(&build_grid(&BucketTable::new()));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 8);
        let row_width = 5 + (MAX_WEEK as usize + 1) * CELL_WIDTH;
        for line in &lines[1..] {
            assert_eq!(line.len(), row_width);
        }
        assert!(lines[1].starts_with(" Mon "));
        assert!(lines[2].starts_with("     "));
        assert!(lines[3].starts_with(" Wed "));
        assert!(lines[5].starts_with(" Fri "));
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn commits_land_in_recent_previous_and_oldest_weeks() {
        let clock = wednesday();
        let mut table = BucketTable::new();
        for offset in [1, 8, 183] {
            table.record(offset);
        }
        let out = HeatmapRenderer::new(&clock).styled(false).render(&build_grid(&table));
        let lines: Vec<&str> = out.lines().collect();

        // slot 1 is printed on the sixth weekday row
        let row = lines[1 + (6 - 1)];
        assert_eq!(cell_in(row, 0), "  1 ");
        assert_eq!(cell_in(row, 1), "  1 ");
        assert_eq!(cell_in(row, 26), "  1 ");
        assert_eq!(out.matches("  1 ").count(), 3);

        let empty = lines[1..].iter().map(|l| l.matches(EMPTY_CELL).count()).sum::<usize>();
        assert_eq!(empty, 7 * (MAX_WEEK as usize + 1) - 3);
    }

    #[test]
    fn today_is_highlighted_even_without_commits() {
        let clock = wednesday();
        let grid = build_grid(&BucketTable::new());
        let styled = HeatmapRenderer::new(&clock).styled(true).render(&grid);

        let today_style = CellLevel::Today.style().force_styling(true);
        let highlighted = today_style.apply_to(EMPTY_CELL).to_string();
        assert_eq!(styled.matches(&highlighted).count(), 1);

        // Wednesday: alignment 4, so today is the Wednesday row of week 0.
        let wed_row = styled.lines().nth(3).unwrap();
        assert!(wed_row.ends_with(&highlighted));
    }

    #[test]
    fn sunday_puts_today_in_the_rightmost_column() {
        // 2024-06-09 is a Sunday: alignment 7, today is week 1 slot 0.
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 9, 9, 0, 0)
            .unwrap();
        let clock = WindowClock::at(now);
        let mut table = BucketTable::new();
        table.record(clock.alignment_offset());
        table.record(183 + clock.alignment_offset());
        let grid = build_grid(&table);

        let plain = HeatmapRenderer::new(&clock).styled(false).render(&grid);
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines.len(), 8);
        // bottom row is the Sunday slot; the last cell is today
        assert!(lines[7].ends_with("  1 "));
        // the commit 183 days back (offset 190, week 27 slot 1) sits in the second column
        assert_eq!(&lines[6][5 + CELL_WIDTH..5 + 2 * CELL_WIDTH], "  1 ");
        assert_eq!(plain.matches("  1 ").count(), 2);
        // the rightmost column starts on today, so it holds no future days
        assert_eq!(clock.date_of_offset(DAYS_PER_WEEK), clock.today());

        let styled = HeatmapRenderer::new(&clock).styled(true).render(&grid);
        let highlighted = CellLevel::Today
            .style()
            .force_styling(true)
            .apply_to(cell_text(1))
            .to_string();
        assert_eq!(styled.matches(&highlighted).count(), 1);
        assert!(styled.lines().nth(7).unwrap().ends_with(&highlighted));
    }

    #[test]
    fn month_labels_mark_the_first_week_of_each_month() {
        let clock = wednesday();
        let out = HeatmapRenderer::new(&clock)
            .styled(false)
            .render(&build_grid(&BucketTable::new()));
        let header = out.lines().next().unwrap();

        // oldest column starts in November and is never labelled
        assert!(!header.contains("Nov"));
        assert_eq!(cell_in(header, 26), "Dec ");
        assert_eq!(cell_in(header, 0), "Jun ");
        for month in ["Jan", "Feb", "Mar", "Apr", "May"] {
            assert_eq!(header.matches(month).count(), 1, "{month}");
        }
    }
}
