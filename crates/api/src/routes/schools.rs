//! Handler for the `/schools` listing.

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use unipath_core::admission::AdmissionMethod;
use unipath_core::eligibility::ScreeningCriteria;
use unipath_db::models::school::SchoolRecord;
use unipath_db::repositories::SchoolRepo;

use crate::error::AppResult;
use crate::query::SchoolsQuery;
use crate::response::{Pagination, SchoolsResponse};
use crate::screening::{screen_schools, ScreeningQuery};
use crate::state::AppState;

/// GET /api/v1/schools
///
/// Two execution modes:
/// - Plain mode: only scalar attributes are filtered, so counting and
///   pagination run in SQL.
/// - Screening mode (any of method/group/listening/scores supplied):
///   scalar-filtered rows are fetched and the department-level gates run
///   in memory, because a school's membership in the result depends on
///   which of its departments survive.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SchoolsQuery>,
) -> AppResult<Json<SchoolsResponse>> {
    let page = query.page();
    let limit = query.limit();
    let filter = query.filter();

    let (total, schools) = if !query.has_advanced_filters() {
        let total = SchoolRepo::count(&state.pool, &filter).await?;
        let rows = SchoolRepo::list_page(&state.pool, &filter, limit, (page - 1) * limit).await?;
        let records = rows
            .into_iter()
            .map(|school| SchoolRecord::from_school(school, query.detail))
            .collect();
        (total, records)
    } else {
        let method = match query.method.as_deref() {
            Some(raw) => raw.parse::<AdmissionMethod>()?,
            None => AdmissionMethod::PersonalApplication,
        };

        let screening = ScreeningQuery {
            year: query.year(),
            method,
            academic_group: query.group.clone(),
            criteria: ScreeningCriteria {
                listening: query.user_listening_level(),
                levels: query.subject_levels(),
                require_prior_outcome: method == AdmissionMethod::DistributionAdmission,
            },
            detail: query.detail,
        };

        let rows = SchoolRepo::list_filtered(&state.pool, &filter).await?;
        let outcome = screen_schools(rows, &screening, page, limit);
        (outcome.total as i64, outcome.schools)
    };

    let metadata = state.metadata_cache.get(&state.pool).await?;

    Ok(Json(SchoolsResponse {
        metadata,
        schools,
        pagination: Pagination::new(page, limit, total),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/schools", get(list))
}
