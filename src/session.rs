use crate::clock::Clock;
use crate::error::SessionError;
use crate::generator::{generate_code, RandomSource};
use crate::model::{ClickDetail, EntryField, Navigation, PendingEntry, ShortenedRecord};
use crate::validation::{parse_validity, validate_entries};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

pub const MAX_PENDING_ENTRIES: usize = 5;
pub const DEFAULT_VALIDITY_MINUTES: u64 = 30;

pub struct ShortenerSession {
    pending: Vec<PendingEntry>,
    records: Vec<ShortenedRecord>,
    clock: Box<dyn Clock>,
    random: Box<dyn RandomSource>,
}

impl ShortenerSession {
    pub fn new(clock: Box<dyn Clock>, random: Box<dyn RandomSource>) -> Self {
        Self {
            pending: vec![PendingEntry::default()],
            records: Vec::new(),
            clock,
            random,
        }
    }

    pub fn pending_entries(&self) -> &[PendingEntry] {
        &self.pending
    }

    pub fn records(&self) -> &[ShortenedRecord] {
        &self.records
    }

    pub fn add_pending_entry(&mut self) -> Result<usize, SessionError> {
        if self.pending.len() >= MAX_PENDING_ENTRIES {
            return Err(SessionError::TooManyEntries(MAX_PENDING_ENTRIES));
        }
        self.pending.push(PendingEntry::default());
        Ok(self.pending.len() - 1)
    }

    pub fn update_entry(
        &mut self,
        index: usize,
        field: EntryField,
        value: impl Into<String>,
    ) -> Result<&PendingEntry, SessionError> {
        let entry = self
            .pending
            .get_mut(index)
            .ok_or(SessionError::EntryNotFound(index))?;
        let value = value.into();
        match field {
            EntryField::Original => entry.original = value,
            EntryField::Validity => entry.validity = value,
            EntryField::Shortcode => entry.shortcode = value,
        }
        entry.error = None;
        Ok(&*entry)
    }

    pub fn submit(&mut self) -> Result<Vec<ShortenedRecord>, SessionError> {
        let validation = validate_entries(&self.pending);
        for (entry, error) in self.pending.iter_mut().zip(&validation.errors) {
            entry.error = *error;
        }
        if !validation.is_valid() {
            tracing::debug!(errors = ?validation.errors, "Rejected submission with invalid entries");
            return Err(SessionError::InvalidEntries(validation.errors));
        }

        let mut used: HashSet<String> = self
            .records
            .iter()
            .map(|record| record.shortcode.clone())
            .collect();
        let mut created = Vec::with_capacity(self.pending.len());
        for entry in &self.pending {
            let preferred = entry.shortcode.trim();
            let shortcode = if preferred.is_empty() || used.contains(preferred) {
                if !preferred.is_empty() {
                    tracing::info!(shortcode = %preferred, "Preferred shortcode taken, generating one");
                }
                generate_code(self.random.as_mut(), &used)?
            } else {
                preferred.to_string()
            };
            used.insert(shortcode.clone());

            let minutes = parse_validity(&entry.validity)
                .ok()
                .flatten()
                .unwrap_or(DEFAULT_VALIDITY_MINUTES);
            let created_at = self.clock.now();
            created.push(ShortenedRecord {
                original: entry.original.clone(),
                shortcode,
                created_at,
                expires_at: expiry(created_at, minutes),
                clicks: 0,
                click_details: Vec::new(),
            });
        }

        for record in &created {
            tracing::info!(
                shortcode = %record.shortcode,
                original = %record.original,
                expires_at = %record.expires_at,
                "Created short URL"
            );
        }
        self.records.extend(created.iter().cloned());
        self.pending = vec![PendingEntry::default()];
        Ok(created)
    }

    /// Expired records are left untouched.
    pub fn click_short_url(&mut self, index: usize) -> Result<Navigation, SessionError> {
        let now = self.clock.now();
        let record = self
            .records
            .get_mut(index)
            .ok_or(SessionError::LinkNotFound(index))?;
        if record.is_expired_at(now) {
            tracing::warn!(shortcode = %record.shortcode, "Click on expired short URL");
            return Err(SessionError::Expired {
                shortcode: record.shortcode.clone(),
                expired_at: record.expires_at,
            });
        }
        record.clicks += 1;
        record.click_details.push(ClickDetail::direct(now));
        tracing::debug!(shortcode = %record.shortcode, clicks = record.clicks, "Click recorded");
        Ok(Navigation {
            navigate_to: record.original.clone(),
        })
    }
}

// Validity windows too long for chrono end at the latest representable instant.
fn expiry(created_at: DateTime<Utc>, minutes: u64) -> DateTime<Utc> {
    i64::try_from(minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .and_then(|validity| created_at.checked_add_signed(validity))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
