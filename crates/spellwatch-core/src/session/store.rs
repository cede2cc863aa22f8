use std::collections::HashMap;
use std::sync::Mutex;

use super::errors::SessionStoreError;
use super::types::{Identity, ROLE_HEADER, ROLE_KEY, USERNAME_HEADER, USERNAME_KEY};

/// Key-value storage for the signed-in identity.
///
/// Implementations store exactly what they are given; there is no
/// validation of content. [`get`](SessionStore::get) and
/// [`set`](SessionStore::set) are the operations the rest of the client
/// uses, the item-level methods exist so implementations only have to
/// provide raw storage.
pub trait SessionStore: Send + Sync {
    /// Read one raw value.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Write one raw value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;

    /// Remove every stored value.
    fn clear(&self) -> Result<(), SessionStoreError>;

    /// The stored identity, or `None` when either part is missing or empty.
    fn get(&self) -> Option<Identity> {
        Identity::from_parts(self.get_item(USERNAME_KEY), self.get_item(ROLE_KEY))
    }

    /// Persist an identity as-is.
    fn set(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        self.set_item(USERNAME_KEY, &identity.username)?;
        self.set_item(ROLE_KEY, &identity.role)
    }
}

/// Identity headers for an authenticated request.
///
/// Values are the raw stored strings, empty when absent. The backend is
/// responsible for rejecting an empty identity.
pub fn identity_headers(store: &dyn SessionStore) -> [(&'static str, String); 2] {
    [
        (USERNAME_HEADER, store.get_item(USERNAME_KEY).unwrap_or_default()),
        (ROLE_HEADER, store.get_item(ROLE_KEY).unwrap_or_default()),
    ]
}

/// Process-scoped session store.
///
/// The identity lives only as long as the process, like session-scoped
/// browser storage.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an identity.
    pub fn with_identity(identity: &Identity) -> Self {
        let mut items = HashMap::new();
        items.insert(USERNAME_KEY.to_string(), identity.username.clone());
        items.insert(ROLE_KEY.to_string(), identity.role.clone());
        Self {
            items: Mutex::new(items),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        match self.items.lock() {
            Ok(items) => items.get(key).cloned(),
            Err(poisoned) => poisoned.into_inner().get(key).cloned(),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let mut items = match self.items.lock() {
            Ok(items) => items,
            Err(poisoned) => poisoned.into_inner(),
        };
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut items = match self.items.lock() {
            Ok(items) => items,
            Err(poisoned) => poisoned.into_inner(),
        };
        items.clear();
        Ok(())
    }
}
