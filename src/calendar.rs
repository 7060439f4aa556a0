use crate::models::DailySample;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

const WINDOW_DAYS: i64 = 364;

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub completed_count: u32,
    pub tier: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub week: usize,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributionGrid {
    pub weeks: usize,
    // rows[day_of_week][week]; row 0 is Sunday. The grid fills top-to-bottom
    // within a week column before advancing right.
    pub rows: Vec<Vec<Option<CalendarCell>>>,
    pub month_labels: Vec<MonthLabel>,
}

impl ContributionGrid {
    pub fn empty() -> Self {
        Self {
            weeks: 0,
            rows: vec![Vec::new(); 7],
            month_labels: Vec::new(),
        }
    }
}

pub fn color_tier(completed: u32) -> u8 {
    match completed {
        0 => 0,
        1 => 1,
        2 => 2,
        3 => 3,
        _ => 4,
    }
}

pub fn build_calendar(samples: &[DailySample], today: NaiveDate) -> ContributionGrid {
    if samples.is_empty() {
        return ContributionGrid::empty();
    }

    let by_date: BTreeMap<NaiveDate, u32> = samples
        .iter()
        .map(|sample| (sample.date, sample.completed_count.min(sample.total_count)))
        .collect();

    let anchor = sunday_on_or_before(today - Duration::days(WINDOW_DAYS));
    let total_days = (today - anchor).num_days() + 1;
    let weeks = ((total_days + 6) / 7) as usize;

    let mut rows: Vec<Vec<Option<CalendarCell>>> = vec![vec![None; weeks]; 7];
    let mut date = anchor;
    while date <= today {
        let offset = (date - anchor).num_days();
        let week = (offset / 7) as usize;
        let row = (offset % 7) as usize;
        let completed = by_date.get(&date).copied().unwrap_or(0);
        rows[row][week] = Some(CalendarCell {
            date,
            completed_count: completed,
            tier: color_tier(completed),
        });
        date += Duration::days(1);
    }

    // Month headers come from the Sunday row alone: label a column the first
    // time its (year, month) pair shows up.
    let mut month_labels = Vec::new();
    let mut last_seen = None;
    for week in 0..weeks {
        let sunday = anchor + Duration::weeks(week as i64);
        let key = (sunday.year(), sunday.month());
        if last_seen != Some(key) {
            last_seen = Some(key);
            month_labels.push(MonthLabel {
                week,
                label: MONTH_ABBREV[sunday.month0() as usize].to_string(),
            });
        }
    }

    ContributionGrid {
        weeks,
        rows,
        month_labels,
    }
}

fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}
