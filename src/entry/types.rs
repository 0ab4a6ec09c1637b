//! Cached config snapshot.

use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

use crate::fetch::FetchError;

/// Outcome of one fetch. A loaded entry never carries an error and a failed
/// entry never carries a value.
#[derive(Debug)]
enum EntryState {
    Loaded { value: String, loaded_at: Instant },
    Failed(FetchError),
}

/// One immutable snapshot of a config value.
///
/// Refreshing a name builds a new entry; existing entries are never changed,
/// so an `Arc<ConfigEntry>` handed to a caller stays valid after the store
/// moves on.
#[derive(Debug)]
pub struct ConfigEntry {
    state: EntryState,
}

impl ConfigEntry {
    /// A successfully fetched value, loaded at `loaded_at`.
    pub fn loaded(value: impl Into<String>, loaded_at: Instant) -> Self {
        Self {
            state: EntryState::Loaded {
                value: value.into(),
                loaded_at,
            },
        }
    }

    /// A failed fetch. Its value reads as the empty string.
    pub fn failed(error: FetchError) -> Self {
        Self {
            state: EntryState::Failed(error),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, EntryState::Loaded { .. })
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.state {
            EntryState::Failed(error) => Some(error),
            EntryState::Loaded { .. } => None,
        }
    }

    /// When the value was fetched. `None` for failed entries.
    pub fn loaded_at(&self) -> Option<Instant> {
        match self.state {
            EntryState::Loaded { loaded_at, .. } => Some(loaded_at),
            EntryState::Failed(_) => None,
        }
    }

    /// Time since the value was fetched.
    pub fn age(&self) -> Option<Duration> {
        self.loaded_at().map(|at| at.elapsed())
    }

    /// True while `loaded_at + window` is still after `now`.
    /// Failed entries are never fresh.
    pub fn is_fresh_at(&self, now: Instant, window: Duration) -> bool {
        self.loaded_at()
            .and_then(|at| at.checked_add(window))
            .is_some_and(|expires| expires > now)
    }

    pub(crate) fn raw(&self) -> &str {
        match &self.state {
            EntryState::Loaded { value, .. } => value,
            EntryState::Failed(_) => "",
        }
    }
}

impl fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw())
    }
}
