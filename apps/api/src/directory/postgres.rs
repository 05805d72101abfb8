//! PostgreSQL-backed directory. Rows list newest first by `created_at`, with
//! the `seq` serial breaking ties between rows written in one transaction or
//! at the same instant.
//!
//! The role column is `role_title`: `current_role` is reserved in Postgres.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::info;

use crate::directory::{seed, AlumniRepository};
use crate::models::alumni::AlumniRecord;

#[derive(Debug, FromRow)]
struct AlumniRow {
    id: String,
    name: String,
    email: String,
    graduation_year: i32,
    role_title: String,
    skills: Vec<String>,
    linkedin_url: String,
    short_bio: String,
    avatar_url: String,
}

impl From<AlumniRow> for AlumniRecord {
    fn from(row: AlumniRow) -> Self {
        AlumniRecord {
            id: row.id,
            name: row.name,
            email: row.email,
            graduation_year: row.graduation_year,
            current_role: row.role_title,
            skills: row.skills,
            linkedin_url: row.linkedin_url,
            short_bio: row.short_bio,
            avatar_url: row.avatar_url,
            match_score: None,
        }
    }
}

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS alumni (
        id              TEXT PRIMARY KEY,
        seq             BIGSERIAL NOT NULL,
        name            TEXT NOT NULL,
        email           TEXT NOT NULL,
        graduation_year INTEGER NOT NULL,
        role_title      TEXT NOT NULL,
        skills          TEXT[] NOT NULL DEFAULT '{}',
        linkedin_url    TEXT NOT NULL DEFAULT '',
        short_bio       TEXT NOT NULL DEFAULT '',
        avatar_url      TEXT NOT NULL DEFAULT '',
        created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const COUNT_ROWS: &str = "SELECT COUNT(*) FROM alumni";

const SELECT_ORDERED: &str = "SELECT id, name, email, graduation_year, role_title, skills, \
     linkedin_url, short_bio, avatar_url FROM alumni ORDER BY created_at DESC, seq DESC";

const SELECT_BY_ID: &str = "SELECT id, name, email, graduation_year, role_title, skills, \
     linkedin_url, short_bio, avatar_url FROM alumni WHERE id = $1";

const INSERT_ROW: &str = r#"
    INSERT INTO alumni
        (id, name, email, graduation_year, role_title,
         skills, linkedin_url, short_bio, avatar_url)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
"#;

const UPDATE_ROW: &str = r#"
    UPDATE alumni
    SET name = $2, email = $3, graduation_year = $4, role_title = $5,
        skills = $6, linkedin_url = $7, short_bio = $8, avatar_url = $9
    WHERE id = $1
"#;

#[derive(Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `alumni` table if needed and seeds it when empty.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;

        let (count,): (i64,) = sqlx::query_as(COUNT_ROWS).fetch_one(&self.pool).await?;

        if count == 0 {
            let defaults = seed::default_alumni();
            let mut tx = self.pool.begin().await?;
            for record in seed_insertion_order(&defaults) {
                insert(&mut *tx, record).await?;
            }
            tx.commit().await?;
            info!("Seeded alumni table with {} default records", defaults.len());
        }

        Ok(())
    }
}

/// One transaction shares a single `created_at`, so the listing falls back
/// to `seq DESC`: the first default has to be written last.
fn seed_insertion_order(defaults: &[AlumniRecord]) -> impl Iterator<Item = &AlumniRecord> {
    defaults.iter().rev()
}

async fn insert<'e, E>(executor: E, record: &AlumniRecord) -> Result<()>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query(INSERT_ROW)
        .bind(&record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(record.graduation_year)
        .bind(&record.current_role)
        .bind(&record.skills)
        .bind(&record.linkedin_url)
        .bind(&record.short_bio)
        .bind(&record.avatar_url)
        .execute(executor)
        .await?;
    Ok(())
}

#[async_trait]
impl AlumniRepository for PgDirectory {
    async fn list(&self) -> Result<Vec<AlumniRecord>> {
        let rows: Vec<AlumniRow> = sqlx::query_as(SELECT_ORDERED)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(AlumniRecord::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<AlumniRecord>> {
        let row: Option<AlumniRow> = sqlx::query_as(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(AlumniRecord::from))
    }

    async fn prepend(&self, record: AlumniRecord) -> Result<()> {
        insert(&self.pool, &record).await
    }

    async fn update(&self, record: AlumniRecord) -> Result<bool> {
        let result = sqlx::query(UPDATE_ROW)
            .bind(&record.id)
            .bind(&record.name)
            .bind(&record.email)
            .bind(record.graduation_year)
            .bind(&record.current_role)
            .bind(&record.skills)
            .bind(&record.linkedin_url)
            .bind(&record.short_bio)
            .bind(&record.avatar_url)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
