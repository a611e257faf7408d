use axum::{
    extract::{Query, State},
    response::Json,
};
use tracing::debug;

use super::AppState;
use crate::api::models::{Recommendation, RecommendationQuery};
use crate::error::{AppError, Result};
use crate::recommend::select_longest;

pub async fn get_recommendations(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Recommendation>>> {
    let faculty = RecommendationQuery::from_pairs(pairs)
        .faculty
        .filter(|f| !f.is_empty())
        .ok_or(AppError::MissingParameter("faculty"))?;

    let courses = state.catalog.courses_for(&faculty);
    let course =
        select_longest(courses).ok_or_else(|| AppError::FacultyNotFound(faculty.clone()))?;

    debug!(faculty = %faculty, course_id = %course.id, "recommendation selected");
    Ok(Json(vec![Recommendation::from(course)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn state() -> AppState {
        AppState::new(Catalog::builtin())
    }

    fn query(faculty: Option<&str>) -> Query<Vec<(String, String)>> {
        Query(
            faculty
                .map(|f| vec![("faculty".to_string(), f.to_string())])
                .unwrap_or_default(),
        )
    }

    #[tokio::test]
    async fn test_missing_faculty() {
        let result = get_recommendations(State(state()), query(None)).await;
        assert!(matches!(result, Err(AppError::MissingParameter("faculty"))));
    }

    #[tokio::test]
    async fn test_empty_faculty_counts_as_missing() {
        let result = get_recommendations(State(state()), query(Some(""))).await;
        assert!(matches!(result, Err(AppError::MissingParameter("faculty"))));
    }

    #[tokio::test]
    async fn test_unknown_faculty_keeps_original_casing() {
        let result = get_recommendations(State(state()), query(Some("Storia"))).await;
        match result {
            Err(AppError::FacultyNotFound(faculty)) => assert_eq!(faculty, "Storia"),
            other => panic!("expected FacultyNotFound, got {:?}", other.map(|j| j.0)),
        }
    }

    #[tokio::test]
    async fn test_known_faculty_returns_single_recommendation() {
        let Json(recs) = get_recommendations(State(state()), query(Some("Ingegneria")))
            .await
            .unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "ing-03");
        assert_eq!(recs[0].name, "Mobile Applications and Cloud Computing");
        assert_eq!(recs[0].reason, "most popular course this month");
    }
}
