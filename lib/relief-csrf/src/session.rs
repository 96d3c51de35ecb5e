use std::{collections::HashMap, sync::Mutex};
use triomphe::Arc;

/// The host's mutable per-user session: a mapping of string keys to string
/// values, persisted across requests.
///
/// How the mapping is stored and how concurrent access to it is serialised
/// is up to the host; the token lifecycle performs at most one read and one
/// write per request.
pub trait SessionMap {
    fn get(&self, key: &str) -> Option<String>;

    fn insert(&mut self, key: &str, value: String);

    fn remove(&mut self, key: &str);
}

/// Shared handle to the current request's session.
///
/// The host's session middleware is expected to attach one of these to the
/// request extensions before [`CsrfService`](crate::CsrfService) runs.
#[derive(Clone)]
pub struct SessionHandle {
    inner: Arc<Mutex<Box<dyn SessionMap + Send>>>,
}

impl SessionHandle {
    pub fn new<S>(session: S) -> Self
    where
        S: SessionMap + Send + 'static,
    {
        Self {
            inner: Arc::new(Mutex::new(Box::new(session))),
        }
    }

    /// Run `func` with exclusive access to the session.
    pub fn with<T>(&self, func: impl FnOnce(&mut dyn SessionMap) -> T) -> T {
        let mut guard = self.inner.lock().unwrap();
        func(&mut **guard)
    }
}

/// [`SessionMap`] over a plain in-memory map, for hosts without a backing
/// store and for tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySession {
    values: HashMap<String, String>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionMap for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn insert(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
