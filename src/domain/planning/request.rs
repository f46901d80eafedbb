//! PlanRequest - The captured form input.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A business idea and where it will operate. Both fields are trimmed and
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    business: String,
    location: String,
}

impl PlanRequest {
    /// Captures the request.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` naming the first blank field.
    pub fn new(business: impl AsRef<str>, location: impl AsRef<str>) -> Result<Self, ValidationError> {
        let business = business.as_ref().trim();
        let location = location.as_ref().trim();
        if business.is_empty() {
            return Err(ValidationError::empty_field("business"));
        }
        if location.is_empty() {
            return Err(ValidationError::empty_field("location"));
        }
        Ok(Self {
            business: business.to_string(),
            location: location.to_string(),
        })
    }

    pub fn business(&self) -> &str {
        &self.business
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_both_fields() {
        let req = PlanRequest::new("  Coffee Shop ", "\tDowntown\n").unwrap();
        assert_eq!(req.business(), "Coffee Shop");
        assert_eq!(req.location(), "Downtown");
    }

    #[test]
    fn blank_business_is_rejected() {
        let err = PlanRequest::new("   ", "Downtown").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("business"));
    }

    #[test]
    fn blank_location_is_rejected() {
        let err = PlanRequest::new("Coffee", "").unwrap_err();
        assert_eq!(err.field(), "location");
    }
}
