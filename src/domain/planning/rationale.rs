//! Location rationale paragraph.

use super::category::LocationKind;
use super::rules::RATIONALE_TABLE;

/// Explains why the location suits the business.
///
/// The business text is interpolated lowercased; the downtown paragraph
/// also echoes the location as entered.
pub fn location_rationale(location: &str, business: &str) -> String {
    let business = business.to_lowercase();
    match RATIONALE_TABLE.resolve(location) {
        LocationKind::Campus => format!(
            "This location is ideal for a {business} business due to the high concentration of students, faculty, and staff who are always seeking convenient services. The university environment provides a steady customer base with regular foot traffic and a community that values quality and convenience."
        ),
        LocationKind::Downtown => format!(
            "Downtown {location} offers excellent visibility and accessibility for a {business} business. The high foot traffic, proximity to offices and retail establishments, and central location make it an ideal spot for attracting both local residents and visitors."
        ),
        LocationKind::Beach => format!(
            "The beach location provides a unique opportunity for a {business} business to serve tourists and locals enjoying the coastal lifestyle. The seasonal tourism creates additional revenue opportunities while the local community provides year-round support."
        ),
        LocationKind::Suburban => format!(
            "This suburban location is perfect for a {business} business serving families and local residents. The area offers a stable customer base, lower competition compared to urban areas, and opportunities to build strong community relationships."
        ),
        _ => format!(
            "This location offers great potential for a {business} business with its mix of local residents and potential customers. The area provides good accessibility and visibility while offering opportunities for growth and community engagement."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downtown_echoes_location() {
        let text = location_rationale("Downtown Springfield", "Mobile Pet Grooming");
        assert!(text.starts_with("Downtown Downtown Springfield offers"));
        assert!(text.contains("a mobile pet grooming business"));
    }

    #[test]
    fn campus_and_beach_paragraphs() {
        assert!(location_rationale("State College", "Tutoring").contains("university environment"));
        assert!(location_rationale("Coastal Maine", "Surf").contains("coastal lifestyle"));
    }

    #[test]
    fn unknown_location_gets_default_paragraph() {
        let text = location_rationale("Nowhere", "Llama Spa");
        assert!(text.starts_with("This location offers great potential for a llama spa business"));
    }
}
