use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::analytics::{
    distinct_values, filter, goal_scorers, Criterion, DistinctValues, FilterQuery, HeatMap,
    MatchSummary, ScorerEntry, ShotFilter,
};
use crate::shots::log::Score;
use crate::shots::models::{ShotRecord, Team};
use crate::shots::roster::Roster;

/// Frozen match served by the dashboard. Handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    pub shots: Arc<Vec<ShotRecord>>,
    pub roster: Arc<Roster>,
    pub score: Score,
    pub cell_size: f64,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub score: Score,
    #[serde(flatten)]
    pub summary: MatchSummary,
}

#[derive(Debug, Serialize)]
pub struct ShotsResponse {
    pub count: usize,
    pub shots: Vec<ShotRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HeatmapQuery {
    pub team: Option<String>,
}

/// Build the Axum router for the dashboard.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/summary", get(summary_handler))
        .route("/api/shots", get(shots_handler))
        .route("/api/filters", get(filters_handler))
        .route("/api/heatmap", get(heatmap_handler))
        .route("/api/leaderboard", get(leaderboard_handler))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

impl AppState {
    pub fn summary(&self) -> SummaryResponse {
        SummaryResponse {
            score: self.score,
            summary: MatchSummary::from_shots(&self.shots),
        }
    }

    pub fn shots(&self, query: &FilterQuery) -> ShotsResponse {
        let shots = filter(&self.shots, &ShotFilter::from(query));
        ShotsResponse {
            count: shots.len(),
            shots,
        }
    }

    pub fn filters(&self) -> DistinctValues {
        distinct_values(&self.shots)
    }

    /// Unknown team values get an empty map scoped `unmatched` rather than an
    /// error.
    pub fn heatmap(&self, query: &HeatmapQuery) -> HeatMap {
        let team = Criterion::<Team>::parse(query.team.as_deref());
        if team == Criterion::Unmatched {
            debug!("Heatmap requested for unknown team {:?}", query.team);
        }
        HeatMap::for_criterion(&self.shots, team, self.cell_size)
    }

    pub fn leaderboard(&self) -> Vec<ScorerEntry> {
        goal_scorers(&self.shots, &self.roster)
    }
}

/// GET /api/summary
async fn summary_handler(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    Json(state.summary())
}

/// GET /api/shots?team=home&type=Goal&half=First
async fn shots_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FilterQuery>,
) -> Json<ShotsResponse> {
    Json(state.shots(&query))
}

/// GET /api/filters
async fn filters_handler(State(state): State<Arc<AppState>>) -> Json<DistinctValues> {
    Json(state.filters())
}

/// GET /api/heatmap?team=away
async fn heatmap_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HeatmapQuery>,
) -> Json<HeatMap> {
    Json(state.heatmap(&query))
}

/// GET /api/leaderboard
async fn leaderboard_handler(State(state): State<Arc<AppState>>) -> Json<Vec<ScorerEntry>> {
    Json(state.leaderboard())
}
