use serde::{Deserialize, Serialize};

pub const MAX_ACTIVITIES: usize = 8;
pub const MAX_NAME_CHARS: usize = 20;

// One swatch per activity slot; a freed swatch is handed out again first.
pub const PALETTE: [&str; 8] = [
    "#ff6b4a", "#4a90d9", "#39d353", "#f2c94c", "#9b59b6", "#2f9e8f", "#e45db2", "#8d6e63",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayState {
    pub day: u8,
    pub activity_id: u64,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityGrid {
    pub activities: Vec<Activity>,
    pub days: Vec<DayState>,
}

impl ActivityGrid {
    pub fn add_activity(&mut self, id: u64, name: &str) -> Option<&Activity> {
        let name = name.trim();
        if name.is_empty()
            || name.chars().count() > MAX_NAME_CHARS
            || self.activities.len() >= MAX_ACTIVITIES
        {
            return None;
        }
        let color = self.next_color().to_string();
        self.activities.push(Activity {
            id,
            name: name.to_string(),
            color,
        });
        self.activities.last()
    }

    fn next_color(&self) -> &'static str {
        PALETTE
            .iter()
            .copied()
            .find(|swatch| !self.activities.iter().any(|a| a.color == *swatch))
            .unwrap_or(PALETTE[self.activities.len() % PALETTE.len()])
    }

    pub fn remove_activity(&mut self, id: u64) -> bool {
        let before = self.activities.len();
        self.activities.retain(|activity| activity.id != id);
        if self.activities.len() == before {
            return false;
        }
        self.days.retain(|state| state.activity_id != id);
        true
    }

    pub fn toggle_day(&mut self, day: u8, activity_id: u64) -> Option<bool> {
        if !self.activities.iter().any(|a| a.id == activity_id) {
            return None;
        }
        if let Some(state) = self
            .days
            .iter_mut()
            .find(|state| state.day == day && state.activity_id == activity_id)
        {
            state.completed = !state.completed;
            Some(state.completed)
        } else {
            self.days.push(DayState {
                day,
                activity_id,
                completed: true,
            });
            Some(true)
        }
    }

    pub fn completed_on(&self, day: u8) -> u32 {
        self.days
            .iter()
            .filter(|state| state.day == day && state.completed)
            .count() as u32
    }

    pub fn completion_percent(&self, day: u8) -> u8 {
        if self.activities.is_empty() {
            return 0;
        }
        let completed = self.completed_on(day) as f64;
        (100.0 * completed / self.activities.len() as f64).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(names: &[&str]) -> ActivityGrid {
        let mut grid = ActivityGrid::default();
        for (index, name) in names.iter().enumerate() {
            grid.add_activity(index as u64 + 1, name);
        }
        grid
    }

    #[test]
    fn blank_name_is_a_no_op() {
        let mut grid = ActivityGrid::default();
        assert!(grid.add_activity(1, "").is_none());
        assert!(grid.add_activity(1, "   ").is_none());
        assert_eq!(grid.activities.len(), 0);
    }

    #[test]
    fn name_longer_than_twenty_chars_is_refused() {
        let mut grid = ActivityGrid::default();
        assert!(grid.add_activity(1, "abcdefghijklmnopqrstu").is_none());
        assert!(grid.add_activity(1, "abcdefghijklmnopqrst").is_some());
    }

    #[test]
    fn ninth_activity_is_a_no_op() {
        let mut grid = grid_with(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!(grid.activities.len(), 8);
        assert!(grid.add_activity(9, "Ninth").is_none());
        assert_eq!(grid.activities.len(), 8);
    }

    #[test]
    fn colors_come_from_the_palette_in_order() {
        let grid = grid_with(&["a", "b", "c"]);
        assert_eq!(grid.activities[0].color, PALETTE[0]);
        assert_eq!(grid.activities[1].color, PALETTE[1]);
        assert_eq!(grid.activities[2].color, PALETTE[2]);
    }

    #[test]
    fn freed_swatch_is_reused_first() {
        let mut grid = grid_with(&["a", "b", "c"]);
        grid.remove_activity(2);
        let color = grid.add_activity(4, "d").map(|a| a.color.clone());
        assert_eq!(color.as_deref(), Some(PALETTE[1]));
    }

    #[test]
    fn remove_cascades_to_day_states() {
        let mut grid = grid_with(&["a", "b"]);
        grid.toggle_day(3, 1);
        grid.toggle_day(4, 1);
        grid.toggle_day(3, 2);

        assert!(grid.remove_activity(1));
        assert!(!grid.activities.iter().any(|a| a.id == 1));
        assert!(!grid.days.iter().any(|s| s.activity_id == 1));
        assert_eq!(grid.days.len(), 1);
        assert!(!grid.remove_activity(1));
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut grid = grid_with(&["a"]);
        assert_eq!(grid.toggle_day(5, 1), Some(true));
        assert_eq!(grid.toggle_day(5, 1), Some(false));
        assert_eq!(grid.completed_on(5), 0);
    }

    #[test]
    fn toggle_unknown_activity_is_a_no_op() {
        let mut grid = grid_with(&["a"]);
        assert_eq!(grid.toggle_day(5, 99), None);
        assert!(grid.days.is_empty());
    }

    #[test]
    fn completion_percent_stays_in_range() {
        let empty = ActivityGrid::default();
        assert_eq!(empty.completion_percent(1), 0);

        let mut grid = grid_with(&["a", "b", "c"]);
        grid.toggle_day(7, 1);
        assert_eq!(grid.completion_percent(7), 33);
        grid.toggle_day(7, 2);
        assert_eq!(grid.completion_percent(7), 67);
        grid.toggle_day(7, 3);
        assert_eq!(grid.completion_percent(7), 100);
        assert_eq!(grid.completion_percent(8), 0);
    }
}
