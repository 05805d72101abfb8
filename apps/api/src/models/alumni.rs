use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coerce::coerce_score;

/// One alumnus, as browsed in the directory and ranked by mentor matching.
///
/// JSON field names follow the front end (`graduationYear`, `linkedinURL`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniRecord {
    /// Opaque identifier, unique within a candidate pool.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub graduation_year: i32,
    pub current_role: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "linkedinURL", default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub short_bio: String,
    #[serde(default)]
    pub avatar_url: String,
    /// 0 – 100, set only on ranked results. Read leniently: a stale or odd
    /// score on a submitted record becomes `None` instead of failing the record.
    #[serde(
        default,
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_score: Option<u8>,
}

impl AlumniRecord {
    /// Copy of the record with ranking output stripped, as sent to a ranking oracle.
    pub fn without_score(&self) -> Self {
        Self {
            match_score: None,
            ..self.clone()
        }
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_score("matchScore", raw.as_ref()).ok())
}

/// Deterministic placeholder avatar for records that have none.
pub fn placeholder_avatar(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/200/200")
}
