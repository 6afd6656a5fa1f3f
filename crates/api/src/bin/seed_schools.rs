//! Bulk-load school documents from a JSON file.
//!
//! Usage: `seed-schools <schools.json>`
//!
//! Reads the file, normalizes a single object to a one-element list,
//! and fully replaces the school collection (delete-all + insert-all),
//! exactly like the `/seed` endpoint.

use serde_json::Value;
use tracing_subscriber::EnvFilter;
use unipath_db::models::school::SeedSchool;
use unipath_db::repositories::SchoolRepo;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: seed-schools <schools.json>")?;

    let content = std::fs::read_to_string(&path)?;
    let data: Value = serde_json::from_str(&content)?;
    let documents = match data {
        Value::Array(items) => items,
        other => vec![other],
    };
    let schools: Vec<SeedSchool> = serde_json::from_value(Value::Array(documents))?;
    tracing::info!(count = schools.len(), path = %path, "Loaded school documents");

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = unipath_db::create_pool(&database_url).await?;
    unipath_db::run_migrations(&pool).await?;

    let inserted = SchoolRepo::replace_all(&pool, &schools).await?;
    tracing::info!(inserted, "Seed complete");

    Ok(())
}
