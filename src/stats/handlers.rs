use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use time::OffsetDateTime;
use tracing::instrument;

use super::dto::{StatsQuery, StatsResponse};
use super::streaks::{self, Activity};
use crate::{dates::parse_iso, error::ApiError, state::AppState};

pub fn stats_routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

#[instrument(skip(state))]
pub async fn get_stats(
    State(state): State<AppState>,
    Query(q): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, ApiError> {
    let today = match q.today.as_deref() {
        Some(raw) => parse_iso(raw)?,
        None => OffsetDateTime::now_utc().date(),
    };

    let ledger = state.ledger.read().await;
    let days = streaks::logged_days(ledger.list());
    let current = streaks::current_streak(&days, today);
    let activity = Activity::from_meals(ledger.list(), &state.config.goals)?;
    let level = streaks::level_progress(ledger.len());

    Ok(Json(StatsResponse {
        today,
        total_meals: ledger.len(),
        total_days: days.len(),
        current_streak: current,
        longest_streak: activity.longest_streak,
        milestones: streaks::milestones(activity.longest_streak, current),
        achievements: streaks::achievements(&activity),
        level,
        badge: streaks::badge_title(level.level),
    }))
}
