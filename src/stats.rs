use crate::models::{DailySample, Stats};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub fn compute_stats(samples: &[DailySample], today: NaiveDate) -> Stats {
    let by_date: BTreeMap<NaiveDate, u32> = samples
        .iter()
        .map(|sample| (sample.date, sample.completed_count))
        .collect();

    let completed_today = by_date.get(&today).copied().unwrap_or(0);

    // The streak is anchored strictly at today; a missing day counts as zero.
    let mut current_streak = 0u32;
    let mut cursor = today;
    while by_date.get(&cursor).is_some_and(|count| *count > 0) {
        current_streak += 1;
        match cursor.pred_opt() {
            Some(previous) => cursor = previous,
            None => break,
        }
    }

    let mut longest_streak = 0u32;
    let mut run = 0u32;
    let mut previous_active: Option<NaiveDate> = None;
    for (date, count) in &by_date {
        if *count == 0 {
            continue;
        }
        run = match previous_active {
            Some(last) if (*date - last).num_days() == 1 => run + 1,
            _ => 1,
        };
        previous_active = Some(*date);
        longest_streak = longest_streak.max(run);
    }

    let days_elapsed = today.day();
    let active_this_month = by_date
        .iter()
        .filter(|(date, count)| {
            date.year() == today.year()
                && date.month() == today.month()
                && **date <= today
                && **count > 0
        })
        .count() as u32;
    let monthly_progress = if days_elapsed == 0 {
        0
    } else {
        let percent = (100.0 * f64::from(active_this_month) / f64::from(days_elapsed)).round();
        (percent as u32).min(100) as u8
    };

    Stats {
        completed_today,
        current_streak,
        longest_streak,
        monthly_progress,
    }
}
