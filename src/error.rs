use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Validity must be a positive integer")]
    InvalidValidity,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not generate a unique short code after {attempts} attempts")]
pub struct GenerationError {
    pub attempts: u32,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("at most {0} URLs can be shortened at once")]
    TooManyEntries(usize),
    #[error("no pending entry at index {0}")]
    EntryNotFound(usize),
    #[error("one or more entries are invalid")]
    InvalidEntries(Vec<Option<EntryError>>),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("no short URL at index {0}")]
    LinkNotFound(usize),
    #[error("This short URL has expired.")]
    Expired {
        shortcode: String,
        expired_at: DateTime<Utc>,
    },
}
