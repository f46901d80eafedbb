//! Research checklist with progress tracking.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Percentage, ValidationError};

/// The fixed research tasks, in display order.
pub const CHECKLIST_ITEMS: [&str; 5] = [
    "Analyze local competition",
    "Survey potential customers",
    "Research local demographics",
    "Study industry trends",
    "Identify target market segments",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checklist {
    items: Vec<ChecklistItem>,
}

impl Checklist {
    /// All items unchecked.
    pub fn new() -> Self {
        Self {
            items: CHECKLIST_ITEMS
                .iter()
                .map(|label| ChecklistItem {
                    label: (*label).to_string(),
                    completed: false,
                })
                .collect(),
        }
    }

    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Sets one item's state.
    ///
    /// # Errors
    ///
    /// `OutOfRange` when the index is past the last item.
    pub fn set(&mut self, index: usize, completed: bool) -> Result<(), ValidationError> {
        let last = self.items.len().saturating_sub(1);
        let item = self
            .items
            .get_mut(index)
            .ok_or_else(|| ValidationError::out_of_range("index", 0.0, last as f64, index as f64))?;
        item.completed = completed;
        Ok(())
    }

    /// Flips one item and returns its new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool, ValidationError> {
        let completed = !self.items.get(index).map(|i| i.completed).unwrap_or(false);
        self.set(index, completed)?;
        Ok(completed)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    /// Share of completed items, rounded.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.completed_count(), self.items.len())
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::new()
    }
}
