use crate::error::EntryError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub const CLICK_SOURCE: &str = "Direct Click";
pub const CLICK_LOCATION: &str = "Unknown";
pub const CLICK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingEntry {
    pub original: String,
    pub validity: String,
    pub shortcode: String,
    #[serde(serialize_with = "error_message")]
    pub error: Option<EntryError>,
}

// Valid entries carry an empty message, matching the per-entry list of a rejected batch.
fn error_message<S>(error: &Option<EntryError>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match error {
        Some(error) => serializer.collect_str(error),
        None => serializer.serialize_str(""),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryField {
    Original,
    Validity,
    Shortcode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryUpdate {
    pub field: EntryField,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenedRecord {
    pub original: String,
    pub shortcode: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: u64,
    pub click_details: Vec<ClickDetail>,
}

impl ShortenedRecord {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    pub fn short_url(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.shortcode)
    }

    pub fn view(&self, prefix: &str) -> RecordView {
        RecordView {
            short_url: self.short_url(prefix),
            click_log: self.click_details.iter().map(ToString::to_string).collect(),
            record: self.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickDetail {
    pub timestamp: String,
    pub source: String,
    pub location: String,
}

impl ClickDetail {
    pub fn direct(at: DateTime<Utc>) -> Self {
        Self {
            timestamp: at.format(CLICK_TIMESTAMP_FORMAT).to_string(),
            source: CLICK_SOURCE.into(),
            location: CLICK_LOCATION.into(),
        }
    }
}

impl fmt::Display for ClickDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.timestamp, self.source, self.location)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    #[serde(flatten)]
    pub record: ShortenedRecord,
    pub short_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub click_log: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub navigate_to: String,
}
