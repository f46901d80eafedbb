//! Business ideas suggested for a location.

use super::category::LocationKind;
use super::rules::SUGGESTION_TABLE;
use crate::domain::foundation::ValidationError;
use crate::ports::RandomSource;

const CAMPUS: &[&str] = &[
    "Student Tutoring Service",
    "Campus Food Delivery",
    "Student Housing Services",
    "Campus Tech Support",
    "Student Fitness Coaching",
];

const BEACH: &[&str] = &[
    "Beach Equipment Rental",
    "Surf Lessons",
    "Beach Photography",
    "Beach Food Truck",
    "Water Sports Equipment",
];

const DOWNTOWN: &[&str] = &[
    "Coffee Shop",
    "Food Truck",
    "Personal Training",
    "Web Design Agency",
    "Pet Grooming",
];

const TECH_HUB: &[&str] = &[
    "Web Development Agency",
    "IT Consulting",
    "Digital Marketing",
    "Tech Support",
    "Software Training",
];

const FAMILY: &[&str] = &[
    "Child Care Services",
    "Pet Grooming",
    "House Cleaning",
    "Personal Training",
    "Tutoring Services",
];

const TOURIST: &[&str] = &[
    "Tour Guide Services",
    "Souvenir Shop",
    "Local Food Tours",
    "Photography Services",
    "Transportation Services",
];

const SUBURBAN: &[&str] = &[
    "Lawn Care Services",
    "House Cleaning",
    "Pet Sitting",
    "Personal Training",
    "Home Maintenance",
];

const ANYWHERE: &[&str] = &[
    "Coffee Shop",
    "Food Truck",
    "Personal Training",
    "Web Design Agency",
    "Pet Grooming",
    "House Cleaning",
    "Tutoring Services",
];

/// Candidate ideas for a location.
pub fn suggestion_pool(location: &str) -> &'static [&'static str] {
    match SUGGESTION_TABLE.resolve(location) {
        LocationKind::Campus => CAMPUS,
        LocationKind::Beach => BEACH,
        LocationKind::Downtown => DOWNTOWN,
        LocationKind::TechHub => TECH_HUB,
        LocationKind::Family => FAMILY,
        LocationKind::Tourist => TOURIST,
        LocationKind::Suburban => SUBURBAN,
        LocationKind::Anywhere => ANYWHERE,
    }
}

/// Picks one business idea for the location.
///
/// # Errors
///
/// Returns `EmptyField` when the location is blank.
pub fn suggest_business(location: &str, rng: &mut dyn RandomSource) -> Result<String, ValidationError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(ValidationError::empty_field("location"));
    }
    let pool = suggestion_pool(location);
    Ok(rng.pick(pool).copied().unwrap_or(ANYWHERE[0]).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_unit(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn blank_location_is_rejected() {
        let err = suggest_business("   ", &mut Fixed(0.0)).unwrap_err();
        assert_eq!(err.field(), "location");
    }

    #[test]
    fn campus_location_suggests_student_services() {
        let pick = suggest_business("Boston College", &mut Fixed(0.0)).unwrap();
        assert_eq!(pick, "Student Tutoring Service");
    }

    #[test]
    fn unmatched_location_uses_default_list() {
        assert_eq!(suggestion_pool("Springfield").len(), 7);
        let pick = suggest_business("Springfield", &mut Fixed(0.99)).unwrap();
        assert_eq!(pick, "Tutoring Services");
    }

    #[test]
    fn every_pick_comes_from_the_pool() {
        for unit in [0.0, 0.2, 0.4, 0.6, 0.8, 0.999] {
            let pick = suggest_business("sunny beach", &mut Fixed(unit)).unwrap();
            assert!(BEACH.contains(&pick.as_str()));
        }
    }
}
