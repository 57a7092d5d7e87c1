use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use authflow_core::SecureStorage;

/// In-memory [`SecureStorage`], the development and test stand-in for a
/// platform keychain. Clones share the same entries.
#[derive(Default, Clone)]
pub struct InMemorySecureStorage {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemorySecureStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecureStorage for InMemorySecureStorage {
    fn store(&self, key: &str, data: &[u8]) {
        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), data.to_vec());
    }

    fn fetch(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}
