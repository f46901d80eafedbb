//! Step resources - Links attached to each of the five startup steps.
//!
//! Every step has a general list followed by a track-specific list chosen
//! from the business description. Step 1 closes with a payroll platform
//! regardless of track; step 3 has no general list.

use super::category::ResourceTrack;
use super::content::Resource;
use super::rules::{FIRST_STEP_TRACK_TABLE, LATER_STEP_TRACK_TABLE};

type Link = (&'static str, &'static str, &'static str);

const REGISTRATION_GENERAL: &[Link] = &[
    ("Business Registration", "https://www.sba.gov/business-guide/launch-your-business/register-your-business", "Register your business entity (LLC recommended for liability protection)"),
    ("Business Banking", "https://www.chase.com/business", "Business checking account and merchant services"),
    ("Business Insurance", "https://www.hiscox.com/small-business-insurance", "Liability insurance for small businesses"),
];

const REGISTRATION_FOOD: &[Link] = &[
    ("Food Service Permits", "https://www.fda.gov/food/retail-food-industry/state-retail-and-food-service-codes-and-regulations", "State-specific food service regulations and permits"),
    ("Health Department Requirements", "https://www.cdc.gov/nceh/ehs/ehsnet/state_resources.htm", "Local health department contact information"),
];

const REGISTRATION_PET: &[Link] = &[
    ("Pet Grooming Certification", "https://www.nationaldoggroomers.com/", "Professional pet grooming certification programs"),
    ("Local Pet Care Regulations", "https://www.avma.org/policies/state-licensing-and-regulation", "State-specific pet care business regulations"),
];

const REGISTRATION_WEB: &[Link] = &[
    ("Professional Liability Insurance", "https://www.hiscox.com/small-business-insurance", "Professional liability insurance for web designers"),
    ("Accounting Software", "https://quickbooks.intuit.com/", "QuickBooks for business accounting and invoicing"),
];

const PAYROLL: Link = (
    "Payroll & HR Platform",
    "https://gusto.com",
    "Complete payroll, benefits, and HR platform for small businesses",
);

const SETUP_GENERAL: &[Link] = &[
    ("Commercial Real Estate", "https://www.loopnet.com/", "Find available commercial properties and retail spaces"),
    ("Contractor Directory", "https://www.angieslist.com/", "Find licensed contractors for build-out work"),
];

const SETUP_FOOD: &[Link] = &[
    ("Commercial Coffee Equipment", "https://www.webstaurantstore.com/coffee-equipment.html", "Commercial coffee machines, grinders, and accessories"),
    ("Restaurant Furniture", "https://www.webstaurantstore.com/restaurant-furniture.html", "Tables, chairs, and seating for coffee shop"),
];

const SETUP_PET: &[Link] = &[
    ("Grooming Equipment", "https://www.groomerschoice.com/", "Professional grooming tables, tubs, and equipment"),
    ("Safety Equipment", "https://www.groomerschoice.com/safety-equipment", "Safety restraints, muzzles, and protective gear"),
];

const SETUP_WEB: &[Link] = &[
    ("Portfolio Website Builder", "https://www.squarespace.com/", "Professional portfolio website templates"),
    ("Domain Registration", "https://domains.google.com/", "Register your business domain name"),
];

const SUPPLIES_FOOD: &[Link] = &[
    ("Coffee Bean Suppliers", "https://www.coffeeam.com/", "Wholesale coffee beans and roasting services"),
    ("Commercial Refrigeration", "https://www.webstaurantstore.com/refrigeration.html", "Commercial refrigerators and freezers"),
    ("Food Service Equipment", "https://www.webstaurantstore.com/", "Complete restaurant equipment and supplies"),
];

const SUPPLIES_PET: &[Link] = &[
    ("Grooming Tools", "https://www.groomerschoice.com/grooming-tools", "Professional clippers, scissors, and grooming tools"),
    ("Pet Care Products", "https://www.groomerschoice.com/shampoos-conditioners", "Professional shampoos, conditioners, and pet care products"),
    ("Grooming Dryers", "https://www.groomerschoice.com/dryers", "Professional pet dryers and grooming equipment"),
];

const SUPPLIES_WEB: &[Link] = &[
    ("Code Editor", "https://code.visualstudio.com/", "VS Code - professional code editor"),
    ("Design Tools", "https://www.figma.com/", "Figma for web design and prototyping"),
    ("Web Hosting", "https://www.bluehost.com/", "Reliable web hosting for your portfolio site"),
];

const HIRING_GENERAL: &[Link] = &[
    ("Job Posting Sites", "https://www.indeed.com/", "Post job listings for your business"),
    ("Employee Management Platform", "https://www.gusto.com/", "Payroll and HR management for small businesses"),
];

const HIRING_FOOD: &[Link] = &[(
    "Barista Training Programs",
    "https://www.sca.coffee/education",
    "Specialty Coffee Association training resources",
)];

const HIRING_PET: &[Link] = &[
    ("Grooming Training", "https://www.nationaldoggroomers.com/education", "Professional grooming training and certification"),
    ("Safety Training", "https://www.osha.gov/", "Workplace safety training and compliance"),
];

const HIRING_WEB: &[Link] = &[
    ("Project Management", "https://trello.com/", "Trello for project and client management"),
    ("Version Control", "https://github.com/", "GitHub for code version control and collaboration"),
];

const LAUNCH_GENERAL: &[Link] = &[
    ("Social Media Management", "https://business.facebook.com/", "Create and manage business social media accounts"),
    ("Local Business Directory", "https://www.google.com/business/", "Google My Business for local visibility"),
];

const LAUNCH_FOOD: &[Link] = &[
    ("Loyalty Program Software", "https://www.loyaltysystems.com/", "Customer loyalty and rewards programs"),
    ("Event Planning Resources", "https://www.eventbrite.com/", "Plan and promote grand opening events"),
];

const LAUNCH_PET: &[Link] = &[
    ("Website Builder", "https://www.wix.com/", "Create professional website for your grooming business"),
    ("Local Veterinarian Network", "https://www.avma.org/find-a-veterinarian", "Find local veterinarians for partnerships"),
];

const LAUNCH_WEB: &[Link] = &[
    ("LinkedIn Marketing", "https://www.linkedin.com/", "Professional networking and lead generation"),
    ("Freelance Platforms", "https://www.upwork.com/", "Upwork for finding web design clients"),
];

/// Resources for a 1-based step number. Steps outside 1..=5 get none.
pub fn step_resources(business: &str, step: usize) -> Vec<Resource> {
    let (general, track_links): (&[Link], &[Link]) = match step {
        1 => (
            REGISTRATION_GENERAL,
            by_track(
                FIRST_STEP_TRACK_TABLE.resolve(business),
                REGISTRATION_FOOD,
                REGISTRATION_PET,
                REGISTRATION_WEB,
            ),
        ),
        2 => (
            SETUP_GENERAL,
            by_track(LATER_STEP_TRACK_TABLE.resolve(business), SETUP_FOOD, SETUP_PET, SETUP_WEB),
        ),
        3 => (
            &[],
            by_track(
                LATER_STEP_TRACK_TABLE.resolve(business),
                SUPPLIES_FOOD,
                SUPPLIES_PET,
                SUPPLIES_WEB,
            ),
        ),
        4 => (
            HIRING_GENERAL,
            by_track(LATER_STEP_TRACK_TABLE.resolve(business), HIRING_FOOD, HIRING_PET, HIRING_WEB),
        ),
        5 => (
            LAUNCH_GENERAL,
            by_track(LATER_STEP_TRACK_TABLE.resolve(business), LAUNCH_FOOD, LAUNCH_PET, LAUNCH_WEB),
        ),
        _ => return Vec::new(),
    };

    let mut resources: Vec<Resource> = general.iter().chain(track_links).map(to_resource).collect();
    if step == 1 {
        resources.push(to_resource(&PAYROLL));
    }
    resources
}

fn by_track(
    track: Option<ResourceTrack>,
    food: &'static [Link],
    pet: &'static [Link],
    web: &'static [Link],
) -> &'static [Link] {
    match track {
        Some(ResourceTrack::FoodService) => food,
        Some(ResourceTrack::PetCare) => pet,
        Some(ResourceTrack::WebStudio) => web,
        None => &[],
    }
}

fn to_resource(link: &Link) -> Resource {
    Resource {
        name: link.0.to_string(),
        link: link.1.to_string(),
        description: link.2.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(resources: &[Resource]) -> Vec<&str> {
        resources.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn registration_always_ends_with_payroll() {
        for business in ["mobile pet grooming", "llama spa", "coffee roaster"] {
            let resources = step_resources(business, 1);
            assert_eq!(resources.last().map(|r| r.name.as_str()), Some("Payroll & HR Platform"));
        }
    }

    #[test]
    fn registration_adds_pet_certification() {
        let resources = step_resources("mobile pet grooming", 1);
        assert_eq!(
            names(&resources),
            vec![
                "Business Registration",
                "Business Banking",
                "Business Insurance",
                "Pet Grooming Certification",
                "Local Pet Care Regulations",
                "Payroll & HR Platform",
            ]
        );
    }

    #[test]
    fn registration_treats_restaurants_as_food_service() {
        let resources = step_resources("family restaurant", 1);
        assert!(names(&resources).contains(&"Food Service Permits"));
    }

    #[test]
    fn supplies_step_is_empty_without_track() {
        assert!(step_resources("llama spa", 3).is_empty());
        assert_eq!(step_resources("cat cafe", 3).len(), 3);
    }

    #[test]
    fn later_steps_keep_general_links_first() {
        let resources = step_resources("web design studio", 4);
        assert_eq!(
            names(&resources),
            vec!["Job Posting Sites", "Employee Management Platform", "Project Management", "Version Control"]
        );
    }

    #[test]
    fn launch_step_for_generic_business_has_only_general_links() {
        assert_eq!(step_resources("llama spa", 5).len(), 2);
    }

    #[test]
    fn out_of_range_steps_have_no_resources() {
        assert!(step_resources("coffee", 0).is_empty());
        assert!(step_resources("coffee", 6).is_empty());
    }
}
