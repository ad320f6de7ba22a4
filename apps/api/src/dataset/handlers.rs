use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Number of distinct matches before the result cap was applied.
    pub total: usize,
    pub results: Vec<String>,
}

fn capped(mut matches: Vec<String>, limit: usize) -> SearchResponse {
    let total = matches.len();
    matches.truncate(limit);
    SearchResponse {
        total,
        results: matches,
    }
}

/// GET /api/v1/jobs/roles
pub async fn handle_search_roles(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let matches = state.jobs.search_roles(&params.q);
    Ok(Json(capped(matches, state.config.search_result_limit)))
}

/// GET /api/v1/jobs/titles
pub async fn handle_search_titles(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let matches = state
        .jobs
        .search_titles(&params.q, params.role.as_deref());
    Ok(Json(capped(matches, state.config.search_result_limit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capped_truncates_but_reports_full_total() {
        let matches: Vec<String> = (0..20).map(|i| format!("role {i}")).collect();
        let response = capped(matches, 15);
        assert_eq!(response.total, 20);
        assert_eq!(response.results.len(), 15);
    }

    #[test]
    fn test_capped_below_limit_is_untouched() {
        let response = capped(vec!["Data Science".to_string()], 15);
        assert_eq!(response.total, 1);
        assert_eq!(response.results, vec!["Data Science".to_string()]);
    }
}
