use crate::grid::{Activity, ActivityGrid, DayState};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Month {
    Enero,
    Febrero,
    Marzo,
    Abril,
    Mayo,
    Junio,
    Julio,
    Agosto,
    Septiembre,
    Octubre,
    Noviembre,
    Diciembre,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Enero,
        Month::Febrero,
        Month::Marzo,
        Month::Abril,
        Month::Mayo,
        Month::Junio,
        Month::Julio,
        Month::Agosto,
        Month::Septiembre,
        Month::Octubre,
        Month::Noviembre,
        Month::Diciembre,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Month::Enero => "Enero",
            Month::Febrero => "Febrero",
            Month::Marzo => "Marzo",
            Month::Abril => "Abril",
            Month::Mayo => "Mayo",
            Month::Junio => "Junio",
            Month::Julio => "Julio",
            Month::Agosto => "Agosto",
            Month::Septiembre => "Septiembre",
            Month::Octubre => "Octubre",
            Month::Noviembre => "Noviembre",
            Month::Diciembre => "Diciembre",
        }
    }

    pub fn from_name(name: &str) -> Option<Month> {
        let name = name.trim();
        Month::ALL
            .into_iter()
            .find(|month| month.name().eq_ignore_ascii_case(name))
    }

    pub fn number(self) -> u32 {
        Month::ALL
            .iter()
            .position(|month| *month == self)
            .map(|index| index as u32 + 1)
            .unwrap_or(1)
    }

    pub fn days_in(self, year: i32) -> u32 {
        match self {
            Month::Abril | Month::Junio | Month::Septiembre | Month::Noviembre => 30,
            Month::Febrero => {
                if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                    29
                } else {
                    28
                }
            }
            _ => 31,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySample {
    pub date: NaiveDate,
    pub completed_count: u32,
    pub total_count: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub completed_today: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub monthly_progress: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitCard {
    pub id: u64,
    pub month: Month,
    pub year: i32,
    pub created_at: String,
    #[serde(default)]
    pub phrase: String,
    #[serde(default)]
    pub grid: ActivityGrid,
    #[serde(default)]
    pub achievements: BTreeMap<u8, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub next_id: u64,
    pub cards: Vec<HabitCard>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
        }
    }

    pub fn invalid(message: impl Into<String>, errors: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: Some(errors),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub month: String,
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct CardIdRequest {
    pub card_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct CreateActivityRequest {
    pub card_id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteActivityRequest {
    pub activity_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct ToggleDayRequest {
    pub card_id: u64,
    pub activity_id: u64,
    pub day: u8,
}

#[derive(Debug, Deserialize)]
pub struct AchievementRequest {
    pub card_id: u64,
    pub day: u8,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct PhraseRequest {
    pub card_id: u64,
    pub phrase: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardSummary {
    pub id: u64,
    pub month: Month,
    pub year: i32,
    pub created_at: String,
}

impl From<&HabitCard> for CardSummary {
    fn from(card: &HabitCard) -> Self {
        Self {
            id: card.id,
            month: card.month,
            year: card.year,
            created_at: card.created_at.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CardDetail {
    pub card: CardSummary,
    pub phrase: String,
    pub days_in_month: u8,
    pub activities: Vec<Activity>,
    pub days: Vec<DayState>,
    pub daily_percent: Vec<u8>,
    pub achievements: BTreeMap<u8, String>,
}

#[derive(Debug, Serialize)]
pub struct ToggleDayResponse {
    pub day: u8,
    pub activity_id: u64,
    pub completed: bool,
    pub percent: u8,
}
