//! CopyNameHandler - Copies a chosen business name.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::foundation::ValidationError;
use crate::domain::toolkit::copy_notice;
use crate::ports::{Clipboard, ClipboardError};

#[derive(Debug, Clone)]
pub struct CopyNameCommand {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyNameResult {
    pub name: String,
    pub notice: String,
    /// `false` when the clipboard was unavailable and the caller has to
    /// copy `name` by hand.
    pub copied: bool,
}

pub struct CopyNameHandler {
    clipboard: Arc<dyn Clipboard>,
}

impl CopyNameHandler {
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self { clipboard }
    }

    pub async fn handle(&self, cmd: CopyNameCommand) -> Result<CopyNameResult, ValidationError> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let copied = match self.clipboard.write_text(name).await {
            Ok(()) => true,
            Err(ClipboardError::Unavailable(reason)) => {
                warn!(%reason, "Clipboard unavailable, returning manual copy fallback");
                false
            }
        };
        debug!(name, copied, "Business name copied");

        Ok(CopyNameResult {
            name: name.to_string(),
            notice: copy_notice(name),
            copied,
        })
    }
}
