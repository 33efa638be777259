use crate::session::ShortenerSession;
use crate::utils::{internal_error, ApiError};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<ShortenerSession>>,
    pub short_url_prefix: Arc<str>,
}

impl AppState {
    pub fn new(session: ShortenerSession, short_url_prefix: &str) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            short_url_prefix: short_url_prefix.into(),
        }
    }

    pub fn session(&self) -> Result<MutexGuard<'_, ShortenerSession>, ApiError> {
        self.session.lock().map_err(internal_error)
    }
}
