use crate::calendar::{build_calendar, ContributionGrid};
use crate::errors::AppError;
use crate::grid::{Activity, MAX_ACTIVITIES, MAX_NAME_CHARS};
use crate::models::{
    AchievementRequest, ApiResponse, CardDetail, CardIdRequest, CardSummary, CreateActivityRequest,
    CreateCardRequest, DeleteActivityRequest, Month, PhraseRequest, Stats, ToggleDayRequest,
    ToggleDayResponse,
};
use crate::state::AppState;
use crate::stats::compute_stats;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use chrono::Local;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let stats = compute_stats(&data.daily_samples(today), today);
    Html(render_index(&stats))
}

pub async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<Stats>> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let stats = compute_stats(&data.daily_samples(today), today);
    Json(ApiResponse::ok("Stats retrieved successfully.", stats))
}

pub async fn get_calendar(State(state): State<AppState>) -> Json<ApiResponse<ContributionGrid>> {
    let today = Local::now().date_naive();
    let data = state.data.lock().await;
    let grid = build_calendar(&data.daily_samples(today), today);
    Json(ApiResponse::ok("Calendar retrieved successfully.", grid))
}

pub async fn list_cards(State(state): State<AppState>) -> Json<ApiResponse<Vec<CardSummary>>> {
    let data = state.data.lock().await;
    let cards: Vec<CardSummary> = data.cards.iter().map(CardSummary::from).collect();
    Json(ApiResponse::ok("Habit cards retrieved successfully.", cards))
}

pub async fn create_card(
    State(state): State<AppState>,
    Json(payload): Json<CreateCardRequest>,
) -> Result<Json<ApiResponse<CardSummary>>, AppError> {
    let Some(month) = Month::from_name(&payload.month) else {
        return Err(AppError::validation(
            "month",
            "month must be one of the twelve canonical month names",
        ));
    };
    if !(1970..=2100).contains(&payload.year) {
        return Err(AppError::validation("year", "year must be between 1970 and 2100"));
    }

    let mut data = state.data.lock().await;
    let summary = match data.create_card(month, payload.year) {
        Some(card) => CardSummary::from(card),
        None => {
            return Err(AppError::conflict(format!(
                "A card for {} {} already exists.",
                month.name(),
                payload.year
            )))
        }
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok("Habit card created.", summary)))
}

pub async fn delete_card(
    State(state): State<AppState>,
    Json(payload): Json<CardIdRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    if !data.delete_card(payload.card_id) {
        return Err(AppError::not_found("Habit card not found."));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok("Habit card deleted.", ())))
}

pub async fn card_detail(
    State(state): State<AppState>,
    Json(payload): Json<CardIdRequest>,
) -> Result<Json<ApiResponse<CardDetail>>, AppError> {
    let data = state.data.lock().await;
    let Some(card) = data.card(payload.card_id) else {
        return Err(AppError::not_found("Habit card not found."));
    };

    let days_in_month = card.month.days_in(card.year) as u8;
    let daily_percent = (1..=days_in_month)
        .map(|day| card.grid.completion_percent(day))
        .collect();

    Ok(Json(ApiResponse::ok(
        "Habit card retrieved successfully.",
        CardDetail {
            card: CardSummary::from(card),
            phrase: card.phrase.clone(),
            days_in_month,
            activities: card.grid.activities.clone(),
            days: card.grid.days.clone(),
            daily_percent,
            achievements: card.achievements.clone(),
        },
    )))
}

pub async fn create_activity(
    State(state): State<AppState>,
    Json(payload): Json<CreateActivityRequest>,
) -> Result<Json<ApiResponse<Activity>>, AppError> {
    let name = payload.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::validation("activity", "activity name must not be empty"));
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(AppError::validation(
            "activity",
            "activity name must be at most 20 characters",
        ));
    }

    let mut data = state.data.lock().await;
    if data.card(payload.card_id).is_none() {
        return Err(AppError::not_found("Habit card not found."));
    }
    let id = data.alloc_id();
    let activity = data
        .card_mut(payload.card_id)
        .and_then(|card| card.grid.add_activity(id, &name).cloned());
    let Some(activity) = activity else {
        return Err(AppError::conflict(format!(
            "This card already has the maximum of {MAX_ACTIVITIES} activities."
        )));
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok("Activity created.", activity)))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Json(payload): Json<DeleteActivityRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let removed = data
        .cards
        .iter_mut()
        .any(|card| card.grid.remove_activity(payload.activity_id));
    if !removed {
        return Err(AppError::not_found("Activity not found."));
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok("Activity deleted.", ())))
}

pub async fn toggle_activity(
    State(state): State<AppState>,
    Json(payload): Json<ToggleDayRequest>,
) -> Result<Json<ApiResponse<ToggleDayResponse>>, AppError> {
    let mut data = state.data.lock().await;
    let Some(card) = data.card_mut(payload.card_id) else {
        return Err(AppError::not_found("Habit card not found."));
    };
    let days_in_month = card.month.days_in(card.year) as u8;
    if payload.day == 0 || payload.day > days_in_month {
        return Err(AppError::validation("day", "day is outside the card's month"));
    }

    let Some(completed) = card.grid.toggle_day(payload.day, payload.activity_id) else {
        return Err(AppError::not_found("Activity not found."));
    };
    let percent = card.grid.completion_percent(payload.day);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(
        "Activity completion updated.",
        ToggleDayResponse {
            day: payload.day,
            activity_id: payload.activity_id,
            completed,
            percent,
        },
    )))
}

pub async fn save_achievement(
    State(state): State<AppState>,
    Json(payload): Json<AchievementRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let Some(card) = data.card_mut(payload.card_id) else {
        return Err(AppError::not_found("Habit card not found."));
    };
    let days_in_month = card.month.days_in(card.year) as u8;
    if payload.day == 0 || payload.day > days_in_month {
        return Err(AppError::validation("day", "day is outside the card's month"));
    }

    let text = payload.text.trim();
    let message = if text.is_empty() {
        card.achievements.remove(&payload.day);
        "Daily achievement removed."
    } else {
        card.achievements.insert(payload.day, text.to_string());
        "Daily achievement saved."
    };
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok(message, ())))
}

pub async fn save_phrase(
    State(state): State<AppState>,
    Json(payload): Json<PhraseRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let mut data = state.data.lock().await;
    let Some(card) = data.card_mut(payload.card_id) else {
        return Err(AppError::not_found("Habit card not found."));
    };
    card.phrase = payload.phrase.trim().to_string();
    persist_data(&state.data_path, &data).await?;

    Ok(Json(ApiResponse::ok("Monthly phrase saved.", ())))
}
