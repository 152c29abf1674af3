use time::{OffsetDateTime, UtcOffset};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> OffsetDateTime;

    /// Offset of the time zone the service operates in
    fn offset(&self) -> UtcOffset;
}

pub struct DefaultClock {
    offset: UtcOffset,
}

impl DefaultClock {
    pub fn new() -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|err| {
            tracing::debug!("Local offset unavailable, falling back to UTC: {err}");
            UtcOffset::UTC
        });
        Self { offset }
    }
}

impl Default for DefaultClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for DefaultClock {
    fn now_utc(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }

    fn offset(&self) -> UtcOffset {
        self.offset
    }
}
