//! Clipboard adapters.
//!
//! A server has no clipboard of its own. `InMemoryClipboard` keeps the last
//! copied text (the session clipboard), `UnavailableClipboard` always
//! refuses so callers return the manual-copy fallback.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{Clipboard, ClipboardError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryClipboard {
    contents: Arc<RwLock<Option<String>>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

#[async_trait]
impl Clipboard for InMemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.write().await = Some(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

#[async_trait]
impl Clipboard for UnavailableClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard in this environment".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_keeps_last_text() {
        let clipboard = InMemoryClipboard::new();
        assert_eq!(clipboard.contents().await, None);
        clipboard.write_text("Pet Pro").await.unwrap();
        clipboard.write_text("Pet Hub").await.unwrap();
        assert_eq!(clipboard.contents().await.as_deref(), Some("Pet Hub"));
    }

    #[tokio::test]
    async fn unavailable_always_refuses() {
        let result = UnavailableClipboard.write_text("Pet Pro").await;
        assert!(matches!(result, Err(ClipboardError::Unavailable(_))));
    }
}
