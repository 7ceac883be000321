//! Access Gate
//!
//! Two-state machine controlling the savings comparison. Initial state is
//! locked; either a stored flag from a prior session or a payment
//! completion marker in the entry query string unlocks it. Unlocked is
//! absorbing - no transition back to locked exists anywhere.
//!
//! Events are applied as explicit commands returning the next state plus
//! side effects, so the gate logic runs identically under test and in the
//! browser. The caller owns effect execution it alone can perform
//! (rewriting the visible address); flag persistence is executed here
//! against the injected [`AccessStore`].

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::AccessStore;

/// Whether the savings comparison is visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessState {
    #[default]
    Locked,
    Unlocked,
}

impl AccessState {
    #[must_use]
    pub fn is_unlocked(self) -> bool {
        self == AccessState::Unlocked
    }

    /// Apply one gate event, returning the next state and the side effects
    /// the transition demands.
    #[must_use]
    pub fn apply(self, event: &AccessEvent) -> (AccessState, Vec<Effect>) {
        match (self, event) {
            (AccessState::Locked, AccessEvent::StoredFlagFound) => (AccessState::Unlocked, vec![]),
            (AccessState::Locked, AccessEvent::CompletionMarker { .. }) => (
                AccessState::Unlocked,
                vec![Effect::PersistFlag, Effect::StripMarker],
            ),
            // Unlocked is absorbing. A marker arriving on an already
            // unlocked session is still stripped so it is not reprocessed,
            // but the flag is not re-persisted.
            (AccessState::Unlocked, AccessEvent::CompletionMarker { .. }) => {
                (AccessState::Unlocked, vec![Effect::StripMarker])
            }
            (AccessState::Unlocked, AccessEvent::StoredFlagFound) => (AccessState::Unlocked, vec![]),
        }
    }
}

/// Gate events observed at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessEvent {
    /// The durable flag from a prior session was found.
    StoredFlagFound,

    /// The payment provider redirected back with a completion marker.
    CompletionMarker { session_id: String },
}

/// Side effects a transition demands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write the durable flag.
    PersistFlag,

    /// Remove the marker from the visible address so a reload does not
    /// reprocess it.
    StripMarker,
}

/// Outcome of the one-time startup check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Startup {
    /// Final gate state for the session.
    pub state: AccessState,

    /// Completion marker value, held for the session when one was seen.
    pub session_id: Option<String>,

    /// Whether the caller must rewrite the visible address.
    pub strip_marker: bool,
}

/// Run the startup check: stored flag first, then the entry query string.
///
/// `query` is the raw query component of the page address, with or without
/// the leading `?`. Flag persistence is executed against `store`; address
/// rewriting is reported back via [`Startup::strip_marker`] because only
/// the caller can touch the address bar.
pub fn bootstrap<S: AccessStore + ?Sized>(store: &S, query: &str) -> Result<Startup> {
    let mut state = AccessState::Locked;

    if store.load()? {
        let (next, _) = state.apply(&AccessEvent::StoredFlagFound);
        state = next;
        tracing::info!("stored access flag found, savings view unlocked");
    }

    let mut strip_marker = false;
    let mut session_id = None;

    if let Some(sid) = completion_marker(query) {
        let event = AccessEvent::CompletionMarker {
            session_id: sid.to_string(),
        };
        let (next, effects) = state.apply(&event);
        state = next;

        for effect in effects {
            match effect {
                Effect::PersistFlag => store.set_unlocked()?,
                Effect::StripMarker => strip_marker = true,
            }
        }

        tracing::info!(session_id = %sid, "payment completion marker observed");
        session_id = Some(sid.to_string());
    } else if state == AccessState::Locked {
        tracing::debug!("no stored flag or completion marker, gate stays locked");
    }

    Ok(Startup {
        state,
        session_id,
        strip_marker,
    })
}

/// Extract the payment completion marker from a raw query string.
///
/// Handles a leading `?` and `&`-separated pairs; an empty value is no
/// marker.
#[must_use]
pub fn completion_marker(query: &str) -> Option<&str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "session_id" && !value.is_empty() {
            return Some(value);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryAccessStore;

    #[test]
    fn test_fresh_session_stays_locked() {
        let store = MemoryAccessStore::new();
        let startup = bootstrap(&store, "").unwrap();

        assert_eq!(startup.state, AccessState::Locked);
        assert!(startup.session_id.is_none());
        assert!(!startup.strip_marker);
    }

    #[test]
    fn test_stored_flag_unlocks_immediately() {
        let store = MemoryAccessStore::unlocked();
        let startup = bootstrap(&store, "").unwrap();

        assert_eq!(startup.state, AccessState::Unlocked);
        assert!(!startup.strip_marker);
    }

    #[test]
    fn test_completion_marker_unlocks_persists_and_strips() {
        let store = MemoryAccessStore::new();
        let startup = bootstrap(&store, "?session_id=abc123").unwrap();

        assert_eq!(startup.state, AccessState::Unlocked);
        assert_eq!(startup.session_id.as_deref(), Some("abc123"));
        assert!(startup.strip_marker);
        // Flag persisted for the next session
        assert!(store.load().unwrap());
    }

    #[test]
    fn test_marker_on_already_unlocked_session_still_strips() {
        let store = MemoryAccessStore::unlocked();
        let startup = bootstrap(&store, "?session_id=again").unwrap();

        assert_eq!(startup.state, AccessState::Unlocked);
        assert!(startup.strip_marker);
    }

    #[test]
    fn test_unlocked_is_absorbing() {
        let (state, effects) = AccessState::Unlocked.apply(&AccessEvent::StoredFlagFound);
        assert_eq!(state, AccessState::Unlocked);
        assert!(effects.is_empty());

        let (state, effects) = AccessState::Unlocked.apply(&AccessEvent::CompletionMarker {
            session_id: "x".into(),
        });
        assert_eq!(state, AccessState::Unlocked);
        assert_eq!(effects, vec![Effect::StripMarker]);
    }

    #[test]
    fn test_locked_marker_transition_effects() {
        let (state, effects) = AccessState::Locked.apply(&AccessEvent::CompletionMarker {
            session_id: "abc".into(),
        });
        assert_eq!(state, AccessState::Unlocked);
        assert_eq!(effects, vec![Effect::PersistFlag, Effect::StripMarker]);
    }

    #[test]
    fn test_completion_marker_parsing() {
        assert_eq!(completion_marker("?session_id=abc123"), Some("abc123"));
        assert_eq!(completion_marker("session_id=abc123"), Some("abc123"));
        assert_eq!(completion_marker("?foo=1&session_id=xyz"), Some("xyz"));
        assert_eq!(completion_marker("?session_id=a&foo=1"), Some("a"));
        assert_eq!(completion_marker("?session_id="), None);
        assert_eq!(completion_marker("?session=abc"), None);
        assert_eq!(completion_marker(""), None);
    }
}
