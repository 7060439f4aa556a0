use crate::models::{AppData, DailySample, HabitCard, Month};
use chrono::{Local, NaiveDate};

impl AppData {
    pub fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn card(&self, id: u64) -> Option<&HabitCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn card_mut(&mut self, id: u64) -> Option<&mut HabitCard> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    pub fn has_card(&self, month: Month, year: i32) -> bool {
        self.cards
            .iter()
            .any(|card| card.month == month && card.year == year)
    }

    // One card per (month, year); a duplicate request returns None.
    pub fn create_card(&mut self, month: Month, year: i32) -> Option<&HabitCard> {
        if self.has_card(month, year) {
            return None;
        }
        let id = self.alloc_id();
        self.cards.push(HabitCard {
            id,
            month,
            year,
            created_at: Local::now().to_rfc3339(),
            phrase: String::new(),
            grid: Default::default(),
            achievements: Default::default(),
        });
        self.cards.last()
    }

    pub fn delete_card(&mut self, id: u64) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        self.cards.len() != before
    }

    // Flattens every stored card-day on/before `today` into the sample series
    // the calendar and stats aggregators consume.
    pub fn daily_samples(&self, today: NaiveDate) -> Vec<DailySample> {
        let mut samples = Vec::new();
        for card in &self.cards {
            let total = card.grid.activities.len() as u32;
            for day in 1..=card.month.days_in(card.year) {
                let Some(date) = NaiveDate::from_ymd_opt(card.year, card.month.number(), day)
                else {
                    continue;
                };
                if date > today {
                    continue;
                }
                samples.push(DailySample {
                    date,
                    completed_count: card.grid.completed_on(day as u8),
                    total_count: total,
                });
            }
        }
        samples.sort_by_key(|sample| sample.date);
        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_month_year_is_refused() {
        let mut data = AppData::default();
        assert!(data.create_card(Month::Enero, 2025).is_some());
        assert!(data.create_card(Month::Enero, 2025).is_none());
        assert!(data.create_card(Month::Enero, 2026).is_some());
        assert!(data.create_card(Month::Febrero, 2025).is_some());
        assert_eq!(data.cards.len(), 3);
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut data = AppData::default();
        let first = data.create_card(Month::Marzo, 2025).map(|c| c.id);
        let second = data.create_card(Month::Abril, 2025).map(|c| c.id);
        assert_eq!(first, Some(1));
        assert_eq!(second, Some(2));
    }

    #[test]
    fn delete_card_reports_whether_anything_was_removed() {
        let mut data = AppData::default();
        let id = data.create_card(Month::Mayo, 2025).map(|c| c.id).unwrap();
        assert!(data.delete_card(id));
        assert!(!data.delete_card(id));
        assert!(data.cards.is_empty());
    }

    #[test]
    fn daily_samples_cover_elapsed_card_days_only() {
        let mut data = AppData::default();
        let id = data.create_card(Month::Febrero, 2024).map(|c| c.id).unwrap();
        {
            let card = data.card_mut(id).unwrap();
            let activity = card.grid.add_activity(10, "Leer").map(|a| a.id).unwrap();
            card.grid.toggle_day(1, activity);
            card.grid.toggle_day(2, activity);
        }

        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let samples = data.daily_samples(today);
        assert_eq!(samples.len(), 10);
        assert_eq!(samples[0].completed_count, 1);
        assert_eq!(samples[0].total_count, 1);
        assert_eq!(samples[2].completed_count, 0);

        // Once the month lies in the past the whole card is sampled.
        let later = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(data.daily_samples(later).len(), 29);
    }
}
