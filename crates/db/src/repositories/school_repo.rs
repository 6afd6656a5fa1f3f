//! Repository for the `schools` table.

use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use unipath_core::regions;

use crate::models::school::{School, SeedSchool};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, school_id, school_name, school_type, school_url, \
    school_images, campuses, departments, created_at, updated_at";

/// Scalar filters applied at the SQL level. Department-level screening
/// (year/method/listening/score gates) happens in the API layer after rows
/// are fetched; these filters bound how many rows that layer has to look at.
#[derive(Debug, Clone, Default)]
pub struct SchoolFilter {
    pub school_id: Option<String>,
    pub school_type: Option<String>,
    /// Region name (expanded to its city list) or a literal city name;
    /// matched against the main campus location.
    pub region: Option<String>,
}

impl SchoolFilter {
    /// The main-campus cities that satisfy the region filter, if one is set.
    fn region_cities(&self) -> Option<Vec<String>> {
        self.region.as_ref().map(|region| {
            match regions::cities_in_region(region) {
                Some(cities) => cities.iter().map(|city| city.to_string()).collect(),
                // Unknown region names are treated as literal city names.
                None => vec![region.clone()],
            }
        })
    }
}

/// Append `WHERE`/`AND` clauses for the scalar filters.
fn push_filter_clauses(builder: &mut QueryBuilder<'_, Postgres>, filter: &SchoolFilter) {
    let mut prefix = " WHERE ";

    if let Some(school_id) = &filter.school_id {
        builder.push(prefix).push("school_id = ");
        builder.push_bind(school_id.clone());
        prefix = " AND ";
    }

    if let Some(school_type) = &filter.school_type {
        builder.push(prefix).push("school_type = ");
        builder.push_bind(school_type.clone());
        prefix = " AND ";
    }

    if let Some(cities) = filter.region_cities() {
        builder.push(prefix).push(
            "EXISTS (SELECT 1 FROM jsonb_array_elements(campuses) AS campus \
             WHERE (campus->>'is_main')::boolean IS TRUE \
             AND campus->'location'->>'city' = ANY(",
        );
        builder.push_bind(cities);
        builder.push("))");
    }
}

/// Provides query and bulk-replace operations for schools.
pub struct SchoolRepo;

impl SchoolRepo {
    /// Count schools matching the scalar filters.
    pub async fn count(pool: &PgPool, filter: &SchoolFilter) -> Result<i64, sqlx::Error> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM schools");
        push_filter_clauses(&mut builder, filter);
        builder.build_query_scalar().fetch_one(pool).await
    }

    /// One page of schools matching the scalar filters, ordered by
    /// `school_id` so pagination is stable.
    pub async fn list_page(
        pool: &PgPool,
        filter: &SchoolFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<School>, sqlx::Error> {
        let mut builder = QueryBuilder::new(format!("SELECT {COLUMNS} FROM schools"));
        push_filter_clauses(&mut builder, filter);
        builder.push(" ORDER BY school_id LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);
        builder.build_query_as::<School>().fetch_all(pool).await
    }

    /// All schools matching the scalar filters, ordered by `school_id`.
    /// Input to the in-memory screening pass, which paginates after
    /// department-level filtering.
    pub async fn list_filtered(
        pool: &PgPool,
        filter: &SchoolFilter,
    ) -> Result<Vec<School>, sqlx::Error> {
        let mut builder = QueryBuilder::new(format!("SELECT {COLUMNS} FROM schools"));
        push_filter_clauses(&mut builder, filter);
        builder.push(" ORDER BY school_id");
        builder.build_query_as::<School>().fetch_all(pool).await
    }

    /// Replace the whole collection: delete everything, insert the given
    /// documents, all in one transaction. Returns the number inserted.
    pub async fn replace_all(
        pool: &PgPool,
        schools: &[SeedSchool],
    ) -> Result<usize, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM schools").execute(&mut *tx).await?;

        for school in schools {
            sqlx::query(
                "INSERT INTO schools
                    (school_id, school_name, school_type, school_url,
                     school_images, campuses, departments)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&school.school_id)
            .bind(&school.school_name)
            .bind(&school.school_type)
            .bind(&school.school_url)
            .bind(Json(&school.school_images))
            .bind(Json(&school.campuses))
            .bind(Json(&school.departments))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::info!(count = schools.len(), "Replaced school collection");
        Ok(schools.len())
    }

    /// Distinct academic groups across all departments, sorted.
    pub async fn distinct_academic_groups(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT dept->>'academic_group' AS value
             FROM schools, jsonb_array_elements(departments) AS dept
             WHERE dept->>'academic_group' IS NOT NULL AND dept->>'academic_group' <> ''
             ORDER BY value",
        )
        .fetch_all(pool)
        .await
    }

    /// Distinct colleges across all departments, sorted.
    pub async fn distinct_colleges(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT dept->>'college' AS value
             FROM schools, jsonb_array_elements(departments) AS dept
             WHERE dept->>'college' IS NOT NULL AND dept->>'college' <> ''
             ORDER BY value",
        )
        .fetch_all(pool)
        .await
    }

    /// Distinct campus cities across all schools, sorted.
    pub async fn distinct_cities(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT DISTINCT campus->'location'->>'city' AS value
             FROM schools, jsonb_array_elements(campuses) AS campus
             WHERE campus->'location'->>'city' IS NOT NULL
             ORDER BY value",
        )
        .fetch_all(pool)
        .await
    }
}
