//! Favorites store
//!
//! Persistent, ordered set of country codes with change notifications.
//! Every toggle rewrites the whole list under [`FAVORITES_KEY`] before the
//! new membership becomes visible, then broadcasts a [`FavoritesEvent`].
//! A toggle that brings the list back to what was loaded restores the stored
//! entry exactly as it was found, including its absence.
//! Subscribers hold a [`FavoritesSubscription`]; dropping it unsubscribes.

pub mod models;

pub use models::FavoritesEvent;

use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use crate::config::{KeyValueStore, StorageError};

/// Storage key of the serialized favorites list
pub const FAVORITES_KEY: &str = "favorites";

/// Events buffered per subscriber before the oldest are dropped
const EVENT_CAPACITY: usize = 64;

#[derive(Debug, Default)]
struct FavoritesState {
    /// Insertion order is the persisted order
    codes: Vec<String>,
    /// Position of codes removed this session, so re-adding restores the list exactly
    removed_at: HashMap<String, usize>,
    /// List as parsed at load time
    loaded_codes: Vec<String>,
    /// Stored entry at load time, `None` when there was none
    loaded_raw: Option<String>,
}

pub struct FavoritesStore {
    storage: Arc<dyn KeyValueStore>,
    state: Mutex<FavoritesState>,
    events: broadcast::Sender<FavoritesEvent>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("codes", &self.list())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Normalize a code the way records carry it (`cca3` is upper-case)
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Parse the persisted list; anything malformed yields `None`
fn deserialize_codes(raw: &str) -> Option<Vec<String>> {
    let parsed: Vec<String> = serde_json::from_str(raw).ok()?;
    let mut codes: Vec<String> = Vec::with_capacity(parsed.len());
    for code in parsed.iter().map(|c| normalize_code(c)) {
        if !code.is_empty() && !codes.contains(&code) {
            codes.push(code);
        }
    }
    Some(codes)
}

impl FavoritesStore {
    /// Initialize from storage. Absent or malformed entries start an empty set.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let loaded_raw = storage.get(FAVORITES_KEY);
        let codes = match &loaded_raw {
            None => Vec::new(),
            Some(raw) => deserialize_codes(raw).unwrap_or_else(|| {
                warn!("Stored favorites are malformed, starting with an empty list");
                Vec::new()
            }),
        };
        debug!("Loaded {} favorites", codes.len());

        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            storage,
            state: Mutex::new(FavoritesState {
                loaded_codes: codes.clone(),
                codes,
                removed_at: HashMap::new(),
                loaded_raw,
            }),
            events,
        }
    }

    fn state(&self) -> MutexGuard<'_, FavoritesState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn is_favorite(&self, code: &str) -> bool {
        let code = normalize_code(code);
        self.state().codes.contains(&code)
    }

    /// Flip membership of `code` and return the new state (`true` = now a favorite).
    ///
    /// The list is persisted before the change is applied in memory; if the
    /// write fails nothing changes and no event is sent.
    pub fn toggle(&self, code: &str) -> Result<bool, StorageError> {
        let code = normalize_code(code);
        let mut state = self.state();

        let mut updated = state.codes.clone();
        let (event, removed_index) = match updated.iter().position(|c| *c == code) {
            Some(index) => {
                updated.remove(index);
                (FavoritesEvent::Removed(code.clone()), Some(index))
            }
            None => {
                let index = state
                    .removed_at
                    .get(&code)
                    .copied()
                    .unwrap_or(updated.len())
                    .min(updated.len());
                updated.insert(index, code.clone());
                (FavoritesEvent::Added(code.clone()), None)
            }
        };

        self.persist(&state, &updated)?;

        state.codes = updated;
        match removed_index {
            Some(index) => {
                state.removed_at.insert(code.clone(), index);
            }
            None => {
                state.removed_at.remove(&code);
            }
        }
        drop(state);

        info!("{}", event);
        let added = event.is_added();
        // No receivers is fine: nothing is open to re-render
        let _ = self.events.send(event);
        Ok(added)
    }

    /// Write `codes`, or put back the loaded entry when `codes` equals the loaded list
    fn persist(&self, state: &FavoritesState, codes: &[String]) -> Result<(), StorageError> {
        if codes == state.loaded_codes.as_slice() {
            return match &state.loaded_raw {
                Some(raw) => self.storage.set(FAVORITES_KEY, raw),
                None => self.storage.remove(FAVORITES_KEY),
            };
        }

        let serialized =
            serde_json::to_string(codes).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set(FAVORITES_KEY, &serialized)
    }

    /// Codes in insertion order
    pub fn list(&self) -> Vec<String> {
        self.state().codes.clone()
    }

    pub fn count(&self) -> usize {
        self.state().codes.len()
    }

    /// Register for change notifications until the subscription is dropped
    pub fn subscribe(&self) -> FavoritesSubscription {
        FavoritesSubscription {
            receiver: self.events.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }
}

/// Live registration for favorites changes
///
/// Events only say which code triggered the change; observers re-derive the
/// rest from [`FavoritesStore::list`] / [`FavoritesStore::is_favorite`].
#[derive(Debug)]
pub struct FavoritesSubscription {
    receiver: broadcast::Receiver<FavoritesEvent>,
}

impl FavoritesSubscription {
    /// Every change delivered since the last call, without waiting
    pub fn drain(&mut self) -> Vec<FavoritesEvent> {
        let mut events = Vec::new();
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Lagged(missed)) => {
                    warn!("Favorites subscriber missed {} events", missed);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;

    /// Storage whose writes always fail
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            Some(r#"["DEU"]"#.to_string())
        }

        fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: key.to_string(),
                reason: "read-only".to_string(),
            })
        }

        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn store_with(raw: Option<&str>) -> (Arc<MemoryStore>, FavoritesStore) {
        let storage = Arc::new(match raw {
            Some(raw) => MemoryStore::with_value(FAVORITES_KEY, raw),
            None => MemoryStore::new(),
        });
        let store = FavoritesStore::load(storage.clone());
        (storage, store)
    }

    #[test]
    fn test_load_absent_is_empty() {
        let (_, store) = store_with(None);
        assert_eq!(store.count(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"DEU\": true}", "[1, 2]", ""] {
            let (_, store) = store_with(Some(raw));
            assert_eq!(store.count(), 0, "input {:?}", raw);
        }
    }

    #[test]
    fn test_load_existing_list() {
        let (_, store) = store_with(Some(r#"["DEU","fra","DEU"]"#));
        assert_eq!(store.list(), vec!["DEU", "FRA"]);
        assert!(store.is_favorite("deu"));
        assert!(!store.is_favorite("ITA"));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (storage, store) = store_with(None);

        assert!(store.toggle("JPN").unwrap());
        assert!(store.is_favorite("JPN"));
        assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some(r#"["JPN"]"#));

        assert!(!store.toggle("JPN").unwrap());
        assert!(!store.is_favorite("JPN"));
        assert_eq!(storage.get(FAVORITES_KEY), None);
    }

    #[test]
    fn test_removing_every_favorite_writes_empty_list() {
        let (storage, store) = store_with(Some(r#"["DEU"]"#));

        store.toggle("FRA").unwrap();
        store.toggle("DEU").unwrap();
        assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some(r#"["FRA"]"#));

        store.toggle("FRA").unwrap();
        assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_toggle_twice_restores_storage_bytes() {
        let original = r#"["DEU","FRA","ITA"]"#;

        for code in ["FRA", "ESP"] {
            let (storage, store) = store_with(Some(original));
            let before = store.is_favorite(code);

            store.toggle(code).unwrap();
            store.toggle(code).unwrap();

            assert_eq!(store.is_favorite(code), before);
            assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some(original));
        }
    }

    #[test]
    fn test_toggle_twice_keeps_entry_absent() {
        let (storage, store) = store_with(None);

        store.toggle("JPN").unwrap();
        assert!(storage.get(FAVORITES_KEY).is_some());
        store.toggle("JPN").unwrap();

        assert_eq!(storage.get(FAVORITES_KEY), None);
    }

    #[test]
    fn test_toggle_twice_keeps_non_canonical_bytes() {
        let original = r#"[ "deu", "FRA" ]"#;

        for code in ["DEU", "ITA"] {
            let (storage, store) = store_with(Some(original));

            store.toggle(code).unwrap();
            assert_ne!(storage.get(FAVORITES_KEY).as_deref(), Some(original));
            store.toggle(code).unwrap();

            assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some(original));
            assert_eq!(store.list(), vec!["DEU", "FRA"]);
        }
    }

    #[test]
    fn test_toggle_twice_keeps_malformed_bytes() {
        let (storage, store) = store_with(Some("not json"));

        store.toggle("PER").unwrap();
        store.toggle("PER").unwrap();

        assert_eq!(storage.get(FAVORITES_KEY).as_deref(), Some("not json"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_, store) = store_with(None);
        store.toggle("PER").unwrap();
        store.toggle("ARG").unwrap();
        store.toggle("CHL").unwrap();
        assert_eq!(store.list(), vec!["PER", "ARG", "CHL"]);
    }

    #[test]
    fn test_failed_write_changes_nothing() {
        let store = FavoritesStore::load(Arc::new(ReadOnlyStore));
        let mut subscription = store.subscribe();

        assert!(store.toggle("FRA").is_err());
        assert!(!store.is_favorite("FRA"));
        assert!(store.toggle("DEU").is_err());
        assert!(store.is_favorite("DEU"));
        assert!(subscription.drain().is_empty());
    }

    #[test]
    fn test_events_reach_every_subscriber() {
        let (_, store) = store_with(None);
        let mut list_view = store.subscribe();
        let mut favorites_view = store.subscribe();

        store.toggle("NOR").unwrap();
        store.toggle("NOR").unwrap();

        let expected = vec![
            FavoritesEvent::Added("NOR".to_string()),
            FavoritesEvent::Removed("NOR".to_string()),
        ];
        assert_eq!(list_view.drain(), expected);
        assert_eq!(favorites_view.drain(), expected);
        assert!(list_view.drain().is_empty());
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let (_, store) = store_with(None);
        let subscription = store.subscribe();
        assert_eq!(store.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(store.subscriber_count(), 0);

        // Toggling without subscribers still succeeds
        assert!(store.toggle("SWE").unwrap());
    }

    #[test]
    fn test_event_display() {
        assert_eq!(
            FavoritesEvent::Removed("DEU".to_string()).to_string(),
            "favorites changed: removed DEU"
        );
    }
}
