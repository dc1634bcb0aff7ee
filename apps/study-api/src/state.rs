//! Application state for the study API

use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub struct AppState {
    pub db: SqlitePool,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        let db_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:study-api.db?mode=rwc".to_string());
        Self::connect(&db_url).await
    }

    pub async fn connect(db_url: &str) -> Result<Self> {
        tracing::info!("Connecting to database: {}", db_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(db_url)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { db: pool })
    }

    /// State backed by a single shared in-memory database, for tests.
    ///
    /// The pool is pinned to one connection that never expires; each sqlite
    /// `:memory:` connection is otherwise its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { db: pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                pages INTEGER NOT NULL DEFAULT 0,
                text_content TEXT NOT NULL,
                summary TEXT NOT NULL DEFAULT '',
                highlights_json TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS study_plans (
                id TEXT PRIMARY KEY,
                document_id TEXT NOT NULL REFERENCES documents(id),
                name TEXT NOT NULL,
                total_days INTEGER NOT NULL,
                start_date TEXT NOT NULL,
                deadline TEXT NOT NULL,
                daily_word_count INTEGER NOT NULL,
                summary TEXT NOT NULL DEFAULT '',
                key_concepts_json TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS daily_goals (
                id TEXT PRIMARY KEY,
                study_plan_id TEXT NOT NULL REFERENCES study_plans(id),
                day_number INTEGER NOT NULL,
                date TEXT NOT NULL,
                start_index INTEGER NOT NULL,
                end_index INTEGER NOT NULL,
                content_preview TEXT NOT NULL DEFAULT '',
                word_count INTEGER NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                reflections_json TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS progress_entries (
                id TEXT PRIMARY KEY,
                study_plan_id TEXT NOT NULL REFERENCES study_plans(id),
                goal_id TEXT REFERENCES daily_goals(id),
                notes TEXT,
                mood TEXT,
                mastery INTEGER,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
            "#,
        )
        .execute(pool)
        .await?;

        // Indexes for the common list queries
        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_goals_plan ON daily_goals(study_plan_id, day_number)"#,
        )
        .execute(pool)
        .await?;
        sqlx::query(
            r#"CREATE INDEX IF NOT EXISTS idx_progress_plan ON progress_entries(study_plan_id)"#,
        )
        .execute(pool)
        .await?;

        tracing::info!("Migrations complete");
        Ok(())
    }
}
