//! Template Library - Fixed content bundle per business category.
//!
//! Templates are constant data. The only computation is interpolating the
//! business description into the overview sentence.

use super::category::Category;
use super::content::{PricingItem, RevenueYear};

/// Constant content for one category.
#[derive(Debug)]
pub struct PlanTemplate {
    pub category: Category,
    overview_tail: &'static str,
    capitalize_overview: bool,
    pub target_market: &'static str,
    pub revenue_streams: [&'static str; 5],
    pub pricing: [(&'static str, &'static str); 5],
    pub revenue_projection: [&'static str; 5],
    pub startup_steps: [(&'static str, &'static str); 5],
    pub marketing_strategies: [&'static str; 5],
    pub challenges: [&'static str; 5],
}

impl PlanTemplate {
    /// Returns the template for a category.
    pub fn for_category(category: Category) -> &'static PlanTemplate {
        match category {
            Category::CoffeeCafe => &COFFEE_CAFE,
            Category::PetGrooming => &PET_GROOMING,
            Category::WebDesign => &WEB_DESIGN,
            Category::FoodTruck => &FOOD_TRUCK,
            Category::PersonalTraining => &PERSONAL_TRAINING,
            Category::Generic => &GENERIC,
        }
    }

    /// Overview sentence for the given business description.
    pub fn overview(&self, business: &str) -> String {
        let sentence = format!("{} {}", business, self.overview_tail);
        if self.capitalize_overview {
            capitalize_first(&sentence)
        } else {
            sentence
        }
    }

    pub fn pricing_items(&self) -> Vec<PricingItem> {
        self.pricing
            .iter()
            .map(|(item, price)| PricingItem {
                item: (*item).to_string(),
                price: (*price).to_string(),
            })
            .collect()
    }

    pub fn revenue_years(&self) -> Vec<RevenueYear> {
        self.revenue_projection
            .iter()
            .enumerate()
            .map(|(i, revenue)| RevenueYear {
                year: format!("Year {}", i + 1),
                revenue: (*revenue).to_string(),
            })
            .collect()
    }
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

static COFFEE_CAFE: PlanTemplate = PlanTemplate {
    category: Category::CoffeeCafe,
    overview_tail: "will be a cozy, community-focused coffee shop offering premium coffee, pastries, and a welcoming atmosphere for remote workers, students, and coffee enthusiasts.",
    capitalize_overview: true,
    target_market: "Remote workers, students, coffee enthusiasts, professionals aged 25-45, and local residents seeking a community gathering space.",
    revenue_streams: [
        "Coffee and beverage sales",
        "Food and pastry sales",
        "Merchandise (mugs, coffee beans)",
        "Catering services for events",
        "Coffee subscription service",
    ],
    pricing: [
        ("Espresso", "$3.50"),
        ("Cappuccino", "$4.50"),
        ("Latte", "$4.75"),
        ("Pastry", "$3.25"),
        ("Sandwich", "$8.50"),
    ],
    revenue_projection: ["$180,000", "$240,000", "$300,000", "$360,000", "$420,000"],
    startup_steps: [
        ("Secure Location and Permits", "Find a high-traffic location, negotiate lease terms, and obtain all necessary business licenses, food service permits, and health department approvals."),
        ("Design and Build Out", "Work with contractors to design the space layout, install coffee equipment, seating, and create an inviting atmosphere."),
        ("Source Equipment and Suppliers", "Purchase commercial coffee machines, grinders, refrigerators, and establish relationships with coffee bean suppliers and food vendors."),
        ("Hire and Train Staff", "Recruit baristas with coffee knowledge, train them on equipment operation, customer service, and coffee preparation techniques."),
        ("Launch Marketing Campaign", "Create social media presence, host grand opening event, partner with local businesses, and implement loyalty program."),
    ],
    marketing_strategies: [
        "Social media marketing (Instagram, Facebook)",
        "Local business partnerships",
        "Loyalty program and rewards",
        "Community events and workshops",
        "Local influencer collaborations",
    ],
    challenges: [
        "High initial investment in equipment and build-out",
        "Competition from established coffee chains",
        "Seasonal fluctuations in customer traffic",
        "Staff training and retention",
        "Maintaining consistent quality and service",
    ],
};

static PET_GROOMING: PlanTemplate = PlanTemplate {
    category: Category::PetGrooming,
    overview_tail: "will provide professional pet grooming services including bathing, haircuts, nail trimming, and specialized treatments for dogs and cats in a clean, safe, and stress-free environment.",
    capitalize_overview: false,
    target_market: "Pet owners aged 25-65, busy professionals, elderly pet owners, and customers seeking premium pet care services.",
    revenue_streams: [
        "Pet grooming services",
        "Specialized treatments (flea baths, de-shedding)",
        "Pet accessories and products",
        "Mobile grooming services",
        "Pet photography packages",
    ],
    pricing: [
        ("Small Dog Grooming", "$45"),
        ("Medium Dog Grooming", "$65"),
        ("Large Dog Grooming", "$85"),
        ("Cat Grooming", "$55"),
        ("Nail Trim", "$15"),
    ],
    revenue_projection: ["$120,000", "$180,000", "$240,000", "$300,000", "$360,000"],
    startup_steps: [
        ("Obtain Licenses and Insurance", "Get business license, pet grooming certification, liability insurance, and ensure compliance with local pet care regulations."),
        ("Set Up Grooming Facility", "Design and equip grooming space with professional equipment, bathing stations, grooming tables, and safety features."),
        ("Purchase Equipment and Supplies", "Invest in professional grooming tools, shampoos, conditioners, clippers, dryers, and safety equipment."),
        ("Hire and Train Staff", "Recruit experienced groomers, provide additional training on safety protocols, customer service, and specialized grooming techniques."),
        ("Establish Client Base", "Create website, social media presence, partner with local veterinarians, and implement referral program."),
    ],
    marketing_strategies: [
        "Social media showcasing before/after photos",
        "Partnerships with local veterinarians",
        "Referral program for existing clients",
        "Local pet store collaborations",
        "Community pet events participation",
    ],
    challenges: [
        "Managing pet behavior and safety concerns",
        "Seasonal demand fluctuations",
        "Equipment maintenance and replacement costs",
        "Staff training and certification requirements",
        "Building trust with pet owners",
    ],
};

static WEB_DESIGN: PlanTemplate = PlanTemplate {
    category: Category::WebDesign,
    overview_tail: "will provide professional web design and development services, creating modern, responsive websites and digital solutions for small businesses and entrepreneurs.",
    capitalize_overview: false,
    target_market: "Small business owners, entrepreneurs, startups, local businesses, and professionals needing online presence.",
    revenue_streams: [
        "Website design and development",
        "E-commerce solutions",
        "Website maintenance and updates",
        "SEO and digital marketing",
        "Custom web applications",
    ],
    pricing: [
        ("Basic Website", "$2,500"),
        ("E-commerce Website", "$5,000"),
        ("Custom Web Application", "$8,000"),
        ("Monthly Maintenance", "$150"),
        ("SEO Package", "$500/month"),
    ],
    revenue_projection: ["$80,000", "$140,000", "$200,000", "$280,000", "$350,000"],
    startup_steps: [
        ("Establish Business Structure", "Register business, set up LLC or corporation, obtain necessary licenses, and establish business bank account and accounting system."),
        ("Build Portfolio and Website", "Create personal portfolio website, develop sample projects, and establish professional online presence to showcase skills."),
        ("Set Up Development Environment", "Invest in professional development tools, hosting services, domain management, and project management software."),
        ("Create Service Packages", "Define service offerings, pricing structure, project timelines, and develop contracts and proposal templates."),
        ("Launch Marketing Strategy", "Create professional website, establish social media presence, network with local businesses, and implement referral system."),
    ],
    marketing_strategies: [
        "Professional portfolio website",
        "Social media marketing (LinkedIn, Twitter)",
        "Local business networking",
        "Content marketing and blogging",
        "Referral partnerships with marketing agencies",
    ],
    challenges: [
        "Staying current with technology trends",
        "Managing client expectations and revisions",
        "Competition from large agencies and freelancers",
        "Project timeline management",
        "Scaling business while maintaining quality",
    ],
};

static FOOD_TRUCK: PlanTemplate = PlanTemplate {
    category: Category::FoodTruck,
    overview_tail: "will be a mobile food service offering delicious, high-quality meals at various locations including office parks, events, and popular gathering spots.",
    capitalize_overview: false,
    target_market: "Office workers, event attendees, food enthusiasts, busy professionals, and customers seeking convenient, quality food options.",
    revenue_streams: [
        "Food sales at various locations",
        "Catering for private events",
        "Food delivery partnerships",
        "Merchandise sales",
        "Cooking classes and workshops",
    ],
    pricing: [
        ("Main Entree", "$12"),
        ("Side Dish", "$6"),
        ("Beverage", "$3"),
        ("Dessert", "$5"),
        ("Combo Meal", "$15"),
    ],
    revenue_projection: ["$150,000", "$220,000", "$300,000", "$380,000", "$450,000"],
    startup_steps: [
        ("Obtain Permits and Licenses", "Get food truck permit, business license, health department approval, and ensure compliance with local food service regulations."),
        ("Purchase and Equip Food Truck", "Buy or lease food truck, install commercial kitchen equipment, refrigeration, and ensure all safety requirements are met."),
        ("Develop Menu and Source Suppliers", "Create menu items, establish relationships with food suppliers, and develop efficient food preparation processes."),
        ("Hire and Train Staff", "Recruit kitchen staff and servers, train them on food safety, customer service, and efficient food preparation."),
        ("Establish Locations and Schedule", "Identify high-traffic locations, obtain necessary permits for each location, and create regular schedule and route."),
    ],
    marketing_strategies: [
        "Social media updates on location and menu",
        "Partnerships with local businesses",
        "Food truck festivals and events",
        "Loyalty program for regular customers",
        "Local food blogger collaborations",
    ],
    challenges: [
        "Weather-dependent operations",
        "Location permits and regulations",
        "Equipment maintenance and repairs",
        "Food safety and health compliance",
        "Managing inventory and waste",
    ],
};

static PERSONAL_TRAINING: PlanTemplate = PlanTemplate {
    category: Category::PersonalTraining,
    overview_tail: "will provide personalized fitness training services, helping clients achieve their health and fitness goals through customized workout plans and nutrition guidance.",
    capitalize_overview: false,
    target_market: "Fitness enthusiasts, busy professionals, individuals with specific fitness goals, and people seeking personalized health guidance.",
    revenue_streams: [
        "One-on-one personal training sessions",
        "Group fitness classes",
        "Online training programs",
        "Nutrition consultation",
        "Fitness equipment sales",
    ],
    pricing: [
        ("Single Session", "$75"),
        ("10-Session Package", "$650"),
        ("Monthly Unlimited", "$300"),
        ("Group Class", "$25"),
        ("Nutrition Consultation", "$100"),
    ],
    revenue_projection: ["$90,000", "$150,000", "$220,000", "$300,000", "$380,000"],
    startup_steps: [
        ("Obtain Certifications and Insurance", "Get personal training certification, CPR/first aid certification, liability insurance, and ensure compliance with fitness industry standards."),
        ("Set Up Training Space", "Secure gym space or set up home studio with essential equipment, or establish mobile training service capabilities."),
        ("Purchase Equipment and Supplies", "Invest in fitness equipment, training tools, assessment devices, and professional training materials."),
        ("Develop Training Programs", "Create customized workout plans, nutrition guides, and assessment protocols for different client types and goals."),
        ("Build Client Base", "Create professional website, establish social media presence, network with local gyms, and implement referral program."),
    ],
    marketing_strategies: [
        "Social media showcasing client transformations",
        "Partnerships with local gyms and health clubs",
        "Free fitness assessments and consultations",
        "Referral program for existing clients",
        "Community fitness events and workshops",
    ],
    challenges: [
        "Building and maintaining client base",
        "Managing different fitness levels and limitations",
        "Staying current with fitness trends and research",
        "Balancing personal training with business management",
        "Seasonal fluctuations in client demand",
    ],
};

static GENERIC: PlanTemplate = PlanTemplate {
    category: Category::Generic,
    overview_tail: "will provide high-quality services to meet the needs of the local community, focusing on customer satisfaction and sustainable business growth.",
    capitalize_overview: false,
    target_market: "Local residents, businesses, and individuals seeking quality services in the area.",
    revenue_streams: [
        "Primary service offerings",
        "Additional service packages",
        "Product sales",
        "Consultation services",
        "Maintenance and support",
    ],
    pricing: [
        ("Basic Service", "$50"),
        ("Standard Package", "$100"),
        ("Premium Service", "$150"),
        ("Consultation", "$75"),
        ("Maintenance", "$25"),
    ],
    revenue_projection: ["$100,000", "$150,000", "$200,000", "$250,000", "$300,000"],
    startup_steps: [
        ("Business Planning and Registration", "Develop comprehensive business plan, register business entity, obtain necessary licenses and permits, and set up business accounts."),
        ("Set Up Operations", "Secure location or workspace, purchase necessary equipment and supplies, and establish operational procedures and systems."),
        ("Develop Service Offerings", "Define core services, pricing structure, and quality standards. Create service packages and delivery processes."),
        ("Build Team and Training", "Hire qualified staff, provide comprehensive training on services, customer service, and business operations."),
        ("Launch Marketing Campaign", "Create professional website, establish social media presence, implement local marketing strategies, and build community relationships."),
    ],
    marketing_strategies: [
        "Local advertising and community outreach",
        "Social media marketing",
        "Referral programs",
        "Partnerships with complementary businesses",
        "Customer loyalty programs",
    ],
    challenges: [
        "Building brand awareness and trust",
        "Managing cash flow and expenses",
        "Competition from established businesses",
        "Staff recruitment and retention",
        "Scaling operations while maintaining quality",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_its_own_template() {
        for category in Category::ALL {
            assert_eq!(PlanTemplate::for_category(category).category, category);
        }
    }

    #[test]
    fn pet_template_has_fixed_pricing() {
        let t = PlanTemplate::for_category(Category::PetGrooming);
        let pricing = t.pricing_items();
        assert_eq!(pricing[0].item, "Small Dog Grooming");
        assert_eq!(pricing[0].price, "$45");
        assert_eq!(pricing.len(), 5);
    }

    #[test]
    fn revenue_years_are_labelled_in_order() {
        let years = PlanTemplate::for_category(Category::Generic).revenue_years();
        assert_eq!(years[0].year, "Year 1");
        assert_eq!(years[4].year, "Year 5");
        assert_eq!(years[4].revenue, "$300,000");
    }

    #[test]
    fn coffee_overview_is_capitalized() {
        let t = PlanTemplate::for_category(Category::CoffeeCafe);
        assert!(t.overview("bean there cafe").starts_with("Bean there cafe will be"));
    }

    #[test]
    fn other_overviews_keep_input_casing() {
        let t = PlanTemplate::for_category(Category::PetGrooming);
        assert!(t.overview("mobile pet grooming").starts_with("mobile pet grooming will provide"));
    }

    #[test]
    fn capitalize_first_handles_empty_and_unicode() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("école"), "École");
    }
}
