//! The configuration store seam and its in-memory implementation.

use std::collections::BTreeMap;

use crate::Result;

/// Flat string-keyed configuration store.
///
/// The wheel configuration pass holds exclusive access for its duration;
/// implementations do not need interior synchronization.
pub trait ConfigStore {
    /// Read the value currently stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StoreError`] when the backing store rejects the
    /// write.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory configuration store backed by an ordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryConfigStore {
    values: BTreeMap<String, String>,
}

impl MemoryConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from existing key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Borrow the full key/value snapshot, for serialization by the caller.
    pub fn snapshot(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<()>;

    #[test]
    fn set_then_get_round_trips() -> TestResult {
        let mut store = MemoryConfigStore::new();
        store.set("input_joypad_driver", "udev")?;
        assert_eq!(store.get("input_joypad_driver").as_deref(), Some("udev"));
        assert_eq!(store.get("missing"), None);
        Ok(())
    }

    #[test]
    fn set_replaces_previous_value() -> TestResult {
        let mut store = MemoryConfigStore::new();
        store.set("k", "old")?;
        store.set("k", "new")?;
        assert_eq!(store.get("k").as_deref(), Some("new"));
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn from_pairs_seeds_the_snapshot() {
        let store = MemoryConfigStore::from_pairs([("a", "1"), ("b", "2")]);
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(store.get("b").as_deref(), Some("2"));
    }
}
