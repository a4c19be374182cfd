//! Database Module
//!
//! SurrealDB connection handling and startup seeding.

pub mod convert;
pub mod models;
pub mod repository;

use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::Config;
use crate::db::models::LessonRecord;
use crate::db::repository::LessonRepository;
use crate::inventory::seed;
use crate::utils::AppError;

/// Database service owning the SurrealDB connection handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to SurrealDB and prepare the lesson table.
    ///
    /// The attempt is bounded by `DB_CONNECT_TIMEOUT_MS` so an unreachable
    /// backend degrades to fallback mode instead of hanging the startup.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let url = config
            .surrealdb_url
            .as_deref()
            .ok_or_else(|| AppError::database("SURREALDB_URL is not set"))?;

        let timeout = Duration::from_millis(config.db_connect_timeout_ms);
        let db = tokio::time::timeout(timeout, any::connect(url))
            .await
            .map_err(|_| AppError::database(format!("Connection to {url} timed out")))?
            .map_err(|e| AppError::database(format!("Failed to connect to {url}: {e}")))?;

        // Root signin only applies to servers started with authentication
        if let (Some(user), Some(pass)) = (&config.surrealdb_user, &config.surrealdb_pass) {
            db.signin(Root {
                username: user.as_str(),
                password: pass.as_str(),
            })
            .await
            .map_err(|e| AppError::database(format!("SurrealDB signin failed: {e}")))?;
        }

        db.use_ns(&config.surrealdb_ns)
            .use_db(&config.surrealdb_db)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            url = %url,
            ns = %config.surrealdb_ns,
            db = %config.surrealdb_db,
            "Database connection established"
        );

        let service = Self { db };
        service.seed_if_empty().await?;
        Ok(service)
    }

    /// Insert the sample lesson set when the lesson table is empty, so a
    /// fresh database boots with bookable inventory.
    async fn seed_if_empty(&self) -> Result<(), AppError> {
        let repo = LessonRepository::new(self.db.clone());
        let count = repo
            .count()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        if count > 0 {
            tracing::debug!(lessons = count, "Lesson table already populated, skipping seed");
            return Ok(());
        }

        let lessons = seed::sample_lessons();
        let total = lessons.len();
        for lesson in &lessons {
            repo.create(LessonRecord::from(lesson))
                .await
                .map_err(|e| AppError::database(format!("Failed to seed lessons: {e}")))?;
        }
        tracing::info!(lessons = total, "Seeded empty lesson table with sample data");
        Ok(())
    }
}
