//! Clipboard Port - Copying a chosen business name.

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// The environment has no clipboard; the caller should offer a manual copy.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
