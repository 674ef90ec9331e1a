//! Global library settings.
//!
//! [`Settings`] holds the **clock override**: an optional frozen instant that
//! replaces the system clock for every "now" query in the library
//! (`LocalMoment::now`, `CalendarDate::today`, `is_future`, `is_past`).  It
//! is a process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the override is stored behind a `Mutex`.  Code that freezes
//! the clock temporarily should use [`ScopedFrozenClock`], which serialises
//! competing scopes and restores the previous state on drop.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use chrono::{DateTime, Utc};

/// Process-wide settings used by the localtime library.
pub struct Settings {
    frozen_now: Mutex<Option<DateTime<Utc>>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Serialises [`ScopedFrozenClock`] scopes across threads.
static SCOPE_LOCK: Mutex<()> = Mutex::new(());

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            frozen_now: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<DateTime<Utc>>> {
        // The slot holds plain data, so a poisoned lock is still consistent.
        self.frozen_now
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The current instant: the frozen instant if one is set, otherwise the
    /// system clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.slot().unwrap_or_else(Utc::now)
    }

    /// Return the frozen instant, or `None` when the system clock is in use.
    pub fn frozen_now(&self) -> Option<DateTime<Utc>> {
        *self.slot()
    }

    /// Freeze the clock at `instant`.
    pub fn freeze_now(&self, instant: DateTime<Utc>) {
        tracing::debug!(%instant, "freezing library clock");
        *self.slot() = Some(instant);
    }

    /// Return to the system clock.
    pub fn reset_now(&self) {
        tracing::debug!("library clock reset to system time");
        *self.slot() = None;
    }
}

/// RAII guard that freezes the library clock for its lifetime.
///
/// Only one scope can be active at a time; a second `ScopedFrozenClock`
/// blocks until the first is dropped.  The previous override (if any) is
/// restored on drop.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lt_core::{ScopedFrozenClock, Settings};
///
/// let instant = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// {
///     let _clock = ScopedFrozenClock::new(instant);
///     assert_eq!(Settings::instance().now(), instant);
/// }
/// assert_eq!(Settings::instance().frozen_now(), None);
/// ```
pub struct ScopedFrozenClock {
    previous: Option<DateTime<Utc>>,
    _scope: MutexGuard<'static, ()>,
}

impl ScopedFrozenClock {
    /// Freeze the clock at `instant` until the guard is dropped.
    pub fn new(instant: DateTime<Utc>) -> Self {
        let scope = SCOPE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let settings = Settings::instance();
        let previous = settings.frozen_now();
        settings.freeze_now(instant);
        Self {
            previous,
            _scope: scope,
        }
    }
}

impl Drop for ScopedFrozenClock {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(instant) => settings.freeze_now(instant),
            None => settings.reset_now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_scoped_clock_restores() {
        let first = Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap();
        {
            let _clock = ScopedFrozenClock::new(first);
            assert_eq!(Settings::instance().now(), first);
            assert_eq!(Settings::instance().frozen_now(), Some(first));
        }
        assert_eq!(Settings::instance().frozen_now(), None);
    }

    #[test]
    fn test_unfrozen_clock_moves() {
        let _scope = SCOPE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let before = Utc::now();
        let now = Settings::instance().now();
        assert!(now >= before);
    }
}
