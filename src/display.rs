//! The debug display surface.
//!
//! A single named region whose content is replaced wholesale by the text of
//! each completed request. Handles are cheap clones of the same region.

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone)]
pub struct DebugSurface {
    id: Arc<str>,
    content: Arc<Mutex<String>>,
}

impl DebugSurface {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            content: Arc::new(Mutex::new(String::new())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the whole content. Last write wins.
    pub fn replace(&self, text: impl Into<String>) {
        *self.lock() = text.into();
    }

    pub fn content(&self) -> String {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        // A panic while holding the guard cannot leave a half-written String.
        self.content.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
