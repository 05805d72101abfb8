//! Alumni Directory: the candidate pool behind browsing and mentor matching.
//!
//! Storage is an injected capability: `AppState` holds an
//! `Arc<dyn AlumniRepository>`, chosen at startup (`DATABASE_URL` set →
//! `PgDirectory`, otherwise `InMemoryDirectory`).

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::coerce::SkillsField;
use crate::models::alumni::{placeholder_avatar, AlumniRecord};

pub mod handlers;
pub mod postgres;
pub mod seed;

#[async_trait]
pub trait AlumniRepository: Send + Sync {
    /// All alumni in directory order (newest signups first).
    async fn list(&self) -> Result<Vec<AlumniRecord>>;

    async fn get(&self, id: &str) -> Result<Option<AlumniRecord>>;

    /// Inserts a record at the top of the directory.
    async fn prepend(&self, record: AlumniRecord) -> Result<()>;

    /// Replaces the record with the same id. Returns `false` if there is none.
    async fn update(&self, record: AlumniRecord) -> Result<bool>;

    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory backend
// ────────────────────────────────────────────────────────────────────────────

pub struct InMemoryDirectory {
    alumni: RwLock<Vec<AlumniRecord>>,
}

impl InMemoryDirectory {
    pub fn new(alumni: Vec<AlumniRecord>) -> Self {
        Self {
            alumni: RwLock::new(alumni),
        }
    }

    /// Directory pre-filled with the bundled default alumni.
    pub fn seeded() -> Self {
        Self::new(seed::default_alumni())
    }
}

#[async_trait]
impl AlumniRepository for InMemoryDirectory {
    async fn list(&self) -> Result<Vec<AlumniRecord>> {
        Ok(self.alumni.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<AlumniRecord>> {
        Ok(self.alumni.read().await.iter().find(|a| a.id == id).cloned())
    }

    async fn prepend(&self, record: AlumniRecord) -> Result<()> {
        self.alumni.write().await.insert(0, record);
        Ok(())
    }

    async fn update(&self, record: AlumniRecord) -> Result<bool> {
        let mut alumni = self.alumni.write().await;
        match alumni.iter_mut().find(|a| a.id == record.id) {
            Some(existing) => {
                *existing = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Signup and profile edits
// ────────────────────────────────────────────────────────────────────────────

/// Placeholder profile for a freshly signed-up alumnus.
pub fn new_alumnus(id_seed: Uuid, graduation_year: i32) -> AlumniRecord {
    let id = format!("new-alumni-{}", id_seed.simple());
    AlumniRecord {
        avatar_url: placeholder_avatar(&id),
        id,
        name: "New Alumnus".to_string(),
        email: "new.alumnus@example.com".to_string(),
        graduation_year,
        current_role: "Newly Joined".to_string(),
        skills: vec![],
        linkedin_url: String::new(),
        short_bio: "Please update your bio.".to_string(),
        match_score: None,
    }
}

/// Creates a placeholder alumnus and puts it at the top of the directory.
pub async fn sign_up(repo: &dyn AlumniRepository) -> Result<AlumniRecord> {
    let record = new_alumnus(Uuid::new_v4(), Utc::now().year());
    repo.prepend(record.clone()).await?;
    info!(id = %record.id, backend = repo.backend(), "New alumnus signed up");
    Ok(record)
}

/// Editable profile fields. Absent fields keep their current value.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub graduation_year: Option<i32>,
    pub current_role: Option<String>,
    pub skills: Option<SkillsField>,
    #[serde(rename = "linkedinURL")]
    pub linkedin_url: Option<String>,
    pub short_bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    pub fn apply(self, mut record: AlumniRecord) -> AlumniRecord {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(email) = self.email {
            record.email = email;
        }
        if let Some(year) = self.graduation_year {
            record.graduation_year = year;
        }
        if let Some(role) = self.current_role {
            record.current_role = role;
        }
        if let Some(skills) = self.skills {
            record.skills = skills.into_list();
        }
        if let Some(url) = self.linkedin_url {
            record.linkedin_url = url;
        }
        if let Some(bio) = self.short_bio {
            record.short_bio = bio;
        }
        if let Some(avatar) = self.avatar_url {
            record.avatar_url = avatar;
        }
        record.match_score = None;
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_directory_lists_defaults() {
        let directory = InMemoryDirectory::seeded();
        let alumni = directory.list().await.unwrap();
        assert_eq!(alumni, seed::default_alumni());
    }

    #[tokio::test]
    async fn test_sign_up_prepends_placeholder() {
        let directory = InMemoryDirectory::seeded();
        let created = sign_up(&directory).await.unwrap();

        let alumni = directory.list().await.unwrap();
        assert_eq!(alumni[0], created);
        assert_eq!(alumni.len(), seed::default_alumni().len() + 1);
        assert!(created.id.starts_with("new-alumni-"));
        assert!(created.avatar_url.contains(&created.id));
        assert_eq!(created.graduation_year, Utc::now().year());
    }

    #[tokio::test]
    async fn test_update_replaces_matching_record() {
        let directory = InMemoryDirectory::seeded();
        let mut record = directory.get("3").await.unwrap().unwrap();
        record.current_role = "Staff ML Engineer".to_string();

        assert!(directory.update(record).await.unwrap());
        let fetched = directory.get("3").await.unwrap().unwrap();
        assert_eq!(fetched.current_role, "Staff ML Engineer");
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_false() {
        let directory = InMemoryDirectory::new(vec![]);
        let record = new_alumnus(Uuid::new_v4(), 2024);
        assert!(!directory.update(record).await.unwrap());
    }

    #[test]
    fn test_profile_update_coerces_delimited_skills() {
        let update: ProfileUpdate = serde_json::from_str(
            r#"{"skills": "Rust, Kafka ,  Postgres", "shortBio": "Backend engineer."}"#,
        )
        .unwrap();
        let record = update.apply(new_alumnus(Uuid::new_v4(), 2024));
        assert_eq!(record.skills, vec!["Rust", "Kafka", "Postgres"]);
        assert_eq!(record.short_bio, "Backend engineer.");
        assert_eq!(record.name, "New Alumnus");
    }
}
