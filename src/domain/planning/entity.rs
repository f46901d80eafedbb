//! Legal entity recommendation by business profile.

use super::category::EntityProfile;
use super::content::EntityRecommendation;
use super::rules::ENTITY_TABLE;

const LLC: &str = "LLC (Limited Liability Company)";

struct EntityAdvice {
    recommended: &'static str,
    reasoning: &'static str,
    benefits: &'static [&'static str],
    considerations: &'static [&'static str],
}

const FOOD_SERVICE: EntityAdvice = EntityAdvice {
    recommended: LLC,
    reasoning: "Food service businesses face higher liability risks from food safety, customer injuries, and property damage. An LLC provides personal liability protection while offering tax flexibility.",
    benefits: &[
        "Personal liability protection from lawsuits",
        "Pass-through taxation (avoid double taxation)",
        "Flexible management structure",
        "Easier to transfer ownership",
        "Professional credibility with customers",
    ],
    considerations: &[
        "Annual filing requirements vary by state",
        "May need additional insurance coverage",
        "Consider S-Corp election for tax savings if profitable",
    ],
};

const PET_SERVICE: EntityAdvice = EntityAdvice {
    recommended: LLC,
    reasoning: "Pet service businesses involve animal handling which can lead to injuries, property damage, or customer disputes. An LLC protects personal assets while maintaining operational flexibility.",
    benefits: &[
        "Protection from pet-related lawsuits",
        "Professional liability coverage",
        "Tax advantages for service businesses",
        "Easy to add partners or investors",
        "Credibility with pet owners",
    ],
    considerations: &[
        "May need specialized pet business insurance",
        "Consider professional liability coverage",
        "State-specific pet business regulations apply",
    ],
};

const TECHNOLOGY: EntityAdvice = EntityAdvice {
    recommended: "LLC or S-Corporation",
    reasoning: "Tech businesses often have low startup costs but high growth potential. An LLC provides flexibility for early stages, while S-Corp can offer tax advantages as the business grows.",
    benefits: &[
        "Limited personal liability for intellectual property issues",
        "Pass-through taxation benefits",
        "Easy to add technical co-founders",
        "Professional credibility with clients",
        "Flexible profit distribution",
    ],
    considerations: &[
        "S-Corp requires reasonable salary for owners",
        "May need professional liability insurance",
        "Consider C-Corp if seeking venture capital",
    ],
};

const PERSONAL_SERVICE: EntityAdvice = EntityAdvice {
    recommended: LLC,
    reasoning: "Personal service businesses involve direct client interaction and potential liability from advice or services provided. An LLC offers protection while maintaining tax simplicity.",
    benefits: &[
        "Protection from professional liability claims",
        "Pass-through taxation",
        "Professional credibility",
        "Easy to operate as solo entrepreneur",
        "Flexible management structure",
    ],
    considerations: &[
        "Consider professional liability insurance",
        "May need industry-specific certifications",
        "S-Corp election possible for tax savings",
    ],
};

const MOBILE: EntityAdvice = EntityAdvice {
    recommended: LLC,
    reasoning: "Mobile businesses face unique risks including vehicle accidents, property damage, and liability from mobile operations. An LLC provides essential protection for these risks.",
    benefits: &[
        "Protection from vehicle-related lawsuits",
        "Coverage for property damage claims",
        "Professional credibility with clients",
        "Tax advantages for vehicle expenses",
        "Easy to expand to multiple vehicles",
    ],
    considerations: &[
        "Requires commercial auto insurance",
        "May need additional liability coverage",
        "Consider fleet management structure",
    ],
};

const RETAIL: EntityAdvice = EntityAdvice {
    recommended: LLC,
    reasoning: "Retail businesses face inventory risks, customer injuries, and product liability issues. An LLC provides protection while offering operational flexibility.",
    benefits: &[
        "Protection from product liability claims",
        "Coverage for customer injury lawsuits",
        "Tax advantages for inventory management",
        "Professional credibility",
        "Easy to add locations or partners",
    ],
    considerations: &[
        "May need product liability insurance",
        "Consider inventory financing options",
        "S-Corp election possible for tax benefits",
    ],
};

const GENERAL: EntityAdvice = EntityAdvice {
    recommended: LLC,
    reasoning: "An LLC is generally the best choice for most small businesses as it provides personal liability protection, tax flexibility, and operational simplicity.",
    benefits: &[
        "Personal liability protection",
        "Pass-through taxation",
        "Flexible management structure",
        "Professional credibility",
        "Easy to form and maintain",
    ],
    considerations: &[
        "Annual filing requirements vary by state",
        "May need business insurance",
        "Consider S-Corp election if profitable",
        "Consult with attorney for specific advice",
    ],
};

/// Recommends a legal structure for the business.
pub fn recommend_entity(business: &str) -> EntityRecommendation {
    let advice = match ENTITY_TABLE.resolve(business) {
        EntityProfile::FoodService => &FOOD_SERVICE,
        EntityProfile::PetService => &PET_SERVICE,
        EntityProfile::Technology => &TECHNOLOGY,
        EntityProfile::PersonalService => &PERSONAL_SERVICE,
        EntityProfile::Mobile => &MOBILE,
        EntityProfile::Retail => &RETAIL,
        EntityProfile::General => &GENERAL,
    };
    EntityRecommendation {
        recommended: advice.recommended.to_string(),
        reasoning: advice.reasoning.to_string(),
        benefits: advice.benefits.iter().map(|s| s.to_string()).collect(),
        considerations: advice.considerations.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn technology_recommends_s_corp_option() {
        let rec = recommend_entity("Software Studio");
        assert_eq!(rec.recommended, "LLC or S-Corporation");
        assert_eq!(rec.considerations.len(), 3);
    }

    #[test]
    fn pet_service_mentions_animal_handling() {
        let rec = recommend_entity("Mobile Pet Grooming");
        assert!(rec.reasoning.contains("animal handling"));
    }

    #[test]
    fn general_profile_has_four_considerations() {
        let rec = recommend_entity("Llama Spa");
        assert_eq!(rec.recommended, LLC);
        assert_eq!(rec.benefits.len(), 5);
        assert_eq!(rec.considerations.len(), 4);
    }
}
