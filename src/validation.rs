use crate::error::EntryError;
use crate::model::PendingEntry;
use url::Url;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub errors: Vec<Option<EntryError>>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.iter().all(Option::is_none)
    }
}

pub fn validate_entries(entries: &[PendingEntry]) -> Validation {
    Validation {
        errors: entries.iter().map(validate_entry).collect(),
    }
}

/// Checks run in order and a later failure replaces an earlier one, so an
/// entry with a bad URL and a bad validity reports the validity error.
pub fn validate_entry(entry: &PendingEntry) -> Option<EntryError> {
    let mut error = None;
    if parse_url(&entry.original).is_err() {
        error = Some(EntryError::InvalidUrl);
    }
    if parse_validity(&entry.validity).is_err() {
        error = Some(EntryError::InvalidValidity);
    }
    error
}

pub fn parse_url(text: &str) -> Result<Url, EntryError> {
    if text.is_empty() {
        return Err(EntryError::InvalidUrl);
    }
    let url = Url::parse(text).map_err(|_| EntryError::InvalidUrl)?;
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(EntryError::InvalidUrl),
    }
}

// Any run of digits with a non-zero value is valid; values past u64 saturate.
pub fn parse_validity(text: &str) -> Result<Option<u64>, EntryError> {
    if text.is_empty() {
        return Ok(None);
    }
    if !text.bytes().all(|c| c.is_ascii_digit()) {
        return Err(EntryError::InvalidValidity);
    }
    let significant = text.trim_start_matches('0');
    if significant.is_empty() {
        return Err(EntryError::InvalidValidity);
    }
    Ok(Some(significant.parse::<u64>().unwrap_or(u64::MAX)))
}
