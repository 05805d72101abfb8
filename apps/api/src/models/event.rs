use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A community event listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    pub image_url: String,
    pub rsvps: u32,
}
