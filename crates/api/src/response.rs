//! Shared response envelope types for API handlers.

use serde::Serialize;
use unipath_db::models::school::SchoolRecord;

use crate::metadata::SchoolMetadata;

/// Pagination block returned alongside every listing.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: (total as u64).div_ceil(limit as u64) as i64,
            has_more: page * limit < total,
        }
    }
}

/// Envelope of `GET /schools`.
#[derive(Debug, Serialize)]
pub struct SchoolsResponse {
    pub metadata: SchoolMetadata,
    pub schools: Vec<SchoolRecord>,
    pub pagination: Pagination,
}

/// Envelope of `POST /seed`.
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub count: usize,
    pub status: &'static str,
}
