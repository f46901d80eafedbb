//! Competition grade scoring.
//!
//! The score is the sum of three banded components:
//!
//! | Component | Bands |
//! |-----------|-------|
//! | local saturation | <0.3 → 40, <0.5 → 30, <0.7 → 20, else 10 |
//! | competitor count | <3 → 30, <7 → 25, <12 → 20, else 10 |
//! | vs. mean regional saturation | <0.8× → 30, <1× → 20, else 10 |

use super::analysis::{CompetitionGrade, GradeLetter, RegionalStats};

fn saturation_points(saturation: f64) -> u8 {
    if saturation < 0.3 {
        40
    } else if saturation < 0.5 {
        30
    } else if saturation < 0.7 {
        20
    } else {
        10
    }
}

fn competitor_points(count: u32) -> u8 {
    if count < 3 {
        30
    } else if count < 7 {
        25
    } else if count < 12 {
        20
    } else {
        10
    }
}

fn regional_points(local: f64, regional_mean: f64) -> u8 {
    if local < regional_mean * 0.8 {
        30
    } else if local < regional_mean {
        20
    } else {
        10
    }
}

/// Mean saturation across regions; zero when there are none.
pub fn mean_regional_saturation(regions: &[RegionalStats]) -> f64 {
    if regions.is_empty() {
        return 0.0;
    }
    regions.iter().map(|r| r.saturation).sum::<f64>() / regions.len() as f64
}

/// Competition score in 30..=100.
pub fn competition_score(saturation: f64, competitor_count: u32, regional_mean: f64) -> u8 {
    saturation_points(saturation) + competitor_points(competitor_count) + regional_points(saturation, regional_mean)
}

/// Maps a score to its letter and description.
pub fn grade_for_score(score: u8) -> CompetitionGrade {
    let (grade, description) = match score {
        85..=u8::MAX => (GradeLetter::A, "Excellent opportunity - low competition"),
        75..=84 => (GradeLetter::B, "Good opportunity - moderate competition"),
        65..=74 => (GradeLetter::C, "Fair opportunity - some competition"),
        55..=64 => (GradeLetter::D, "Challenging - high competition"),
        _ => (GradeLetter::F, "Very difficult - saturated market"),
    };
    CompetitionGrade {
        grade,
        score,
        description: description.to_string(),
    }
}

/// Scores and grades a market.
///
/// `competitor_count` is the drawn market-wide count (1 to 20), not the
/// number of sampled local competitors, which never exceeds five.
pub fn calculate_grade(saturation: f64, competitor_count: u32, regions: &[RegionalStats]) -> CompetitionGrade {
    let score = competition_score(saturation, competitor_count, mean_regional_saturation(regions));
    grade_for_score(score)
}
