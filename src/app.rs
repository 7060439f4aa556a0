use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/cards", get(handlers::list_cards).post(handlers::create_card))
        .route("/api/cards/delete", post(handlers::delete_card))
        .route("/api/cards/detail", post(handlers::card_detail))
        .route("/api/activities", post(handlers::create_activity))
        .route("/api/activities/delete", post(handlers::delete_activity))
        .route("/api/activities/toggle", post(handlers::toggle_activity))
        .route("/api/achievements", post(handlers::save_achievement))
        .route("/api/phrases", post(handlers::save_phrase))
        .with_state(state)
}
