//! Star rating value object (0.0 to 5.0 stars).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Customer-facing star rating, 0.0 (worst) to 5.0 (best).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StarRating(f64);

impl StarRating {
    /// Lowest possible rating.
    pub const MIN: f64 = 0.0;

    /// Highest possible rating.
    pub const MAX: f64 = 5.0;

    /// Creates a rating, returning error if outside 0.0..=5.0 or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a rating, clamping into range. NaN becomes 0.0.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Mean of a set of ratings; `None` when empty.
    pub fn average(ratings: impl IntoIterator<Item = StarRating>) -> Option<StarRating> {
        let (sum, count) = ratings
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), r| (sum + r.0, count + 1));
        if count == 0 {
            None
        } else {
            Some(Self::clamped(sum / count as f64))
        }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_try_new_accepts_valid_values() {
        assert!(StarRating::try_new(0.0).is_ok());
        assert!(StarRating::try_new(3.7).is_ok());
        assert!(StarRating::try_new(5.0).is_ok());
    }

    #[test]
    fn rating_try_new_rejects_invalid_values() {
        assert!(StarRating::try_new(-0.1).is_err());
        assert!(StarRating::try_new(5.1).is_err());
        assert!(StarRating::try_new(f64::NAN).is_err());
        assert!(StarRating::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn rating_clamped_stays_in_range() {
        assert_eq!(StarRating::clamped(7.0).value(), 5.0);
        assert_eq!(StarRating::clamped(-1.0).value(), 0.0);
        assert_eq!(StarRating::clamped(f64::NAN).value(), 0.0);
    }

    #[test]
    fn rating_average_of_empty_is_none() {
        assert!(StarRating::average(Vec::new()).is_none());
    }

    #[test]
    fn rating_average_computes_mean() {
        let avg = StarRating::average(vec![
            StarRating::clamped(3.0),
            StarRating::clamped(4.0),
            StarRating::clamped(5.0),
        ])
        .unwrap();
        assert!((avg.value() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn rating_displays_one_decimal() {
        assert_eq!(format!("{}", StarRating::clamped(4.26)), "4.3");
        assert_eq!(format!("{}", StarRating::clamped(3.0)), "3.0");
    }

    #[test]
    fn rating_serializes_as_number() {
        let json = serde_json::to_string(&StarRating::clamped(4.5)).unwrap();
        assert_eq!(json, "4.5");
    }
}
