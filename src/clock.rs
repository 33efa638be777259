use chrono::{DateTime, Utc};

pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Clones share the same instant.
#[cfg(test)]
#[derive(Clone)]
pub struct ManualClock(std::sync::Arc<std::sync::Mutex<DateTime<Utc>>>);

#[cfg(test)]
impl ManualClock {
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(std::sync::Arc::new(std::sync::Mutex::new(instant)))
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut instant = self.0.lock().unwrap();
        *instant += by;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}
