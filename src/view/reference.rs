//! Per-section data sources
//!
//! The worker API only carries identity, contact, and document fields today;
//! the demographic, history, and skills sections are fixed reference content.
//! Each section sits behind [`SectionSource`] so live fields can replace the
//! fixed content without touching the renderer.

use super::model::{
    Attribute, CaregivingCategory, EducationEntry, Expectation, ExpectationStatus,
    ExperienceDetails, InfoCard, MainDuty, Period, Stat, WorkExperience,
};

/// Supplies the page sections that are not derived from the worker record.
pub trait SectionSource {
    fn stats(&self) -> Vec<Stat>;
    fn profile_attributes(&self) -> Vec<Attribute>;
    fn family_background(&self) -> Vec<Attribute>;
    fn education(&self) -> Vec<EducationEntry>;
    fn languages(&self) -> String;
    fn cooking(&self) -> String;
    fn skill_cards(&self) -> Vec<InfoCard>;
    fn work_history(&self) -> Vec<WorkExperience>;
    fn expectations(&self) -> Vec<Expectation>;
    fn caregiving(&self) -> Vec<CaregivingCategory>;
}

/// Fixed demo content, pending profile fields in the worker API schema.
pub struct DemoContent;

fn attr(label: &str, value: &str) -> Attribute {
    Attribute {
        label: label.to_string(),
        value: value.to_string(),
    }
}

fn duty(icon: &str, name: &str, age_range: Option<&str>) -> MainDuty {
    MainDuty {
        icon: icon.to_string(),
        name: name.to_string(),
        age_range: age_range.map(str::to_string),
    }
}

impl SectionSource for DemoContent {
    fn stats(&self) -> Vec<Stat> {
        vec![
            Stat {
                icon: "/assets/icons/work-experience.png".to_string(),
                label: "Experience".to_string(),
                value: "10 Years".to_string(),
            },
            Stat {
                icon: "/assets/icons/calendar.png".to_string(),
                label: "Can Start".to_string(),
                value: "April 20".to_string(),
            },
            Stat {
                icon: "/assets/icons/location.png".to_string(),
                label: "Location".to_string(),
                value: "Hong Kong".to_string(),
            },
        ]
    }

    fn profile_attributes(&self) -> Vec<Attribute> {
        vec![
            attr("AGE", "38"),
            attr("NATIONALITY", "Filipino"),
            attr("HEIGHT", "155cm"),
            attr("CHINESE HOROSCOPE", "Dog"),
            attr("WEIGHT", "47kg"),
            attr("HOROSCOPE", "Libra"),
            attr("RELIGION", "Christian"),
            attr("MARITAL STATUS", "Married"),
        ]
    }

    fn family_background(&self) -> Vec<Attribute> {
        vec![
            attr("NUMBER OF CHILDREN", "2"),
            attr("AGE OF OLDEST CHILD", "15"),
        ]
    }

    fn education(&self) -> Vec<EducationEntry> {
        vec![
            EducationEntry {
                icon: "/assets/icons/education.png".to_string(),
                label: "EDUCATION LEVEL".to_string(),
                value: "University of the Philippines, Los Banos Communications".to_string(),
            },
            EducationEntry {
                icon: "/assets/icons/specialty-course.png".to_string(),
                label: "SPECIAL COURSEWORK".to_string(),
                value: "Caregiving".to_string(),
            },
        ]
    }

    fn languages(&self) -> String {
        "English, Cantonese".to_string()
    }

    fn cooking(&self) -> String {
        "Filipino Cuisine, Chinese Cuisine".to_string()
    }

    fn skill_cards(&self) -> Vec<InfoCard> {
        vec![
            InfoCard {
                icon: "/assets/icons/baby-care.png".to_string(),
                title: "Baby Care".to_string(),
                subtitle: Some("AGE 0-1".to_string()),
            },
            InfoCard {
                icon: "/assets/icons/toddler-care.png".to_string(),
                title: "Toddler Care".to_string(),
                subtitle: Some("AGE 2-5".to_string()),
            },
            InfoCard {
                icon: "/assets/icons/elderly-care.png".to_string(),
                title: "Elderly Care".to_string(),
                subtitle: Some("AGE 65+".to_string()),
            },
            InfoCard {
                icon: "/assets/icons/cooking.png".to_string(),
                title: "Cooking".to_string(),
                subtitle: None,
            },
            InfoCard {
                icon: "/assets/icons/gardening.png".to_string(),
                title: "Gardening".to_string(),
                subtitle: None,
            },
            InfoCard {
                icon: "/assets/icons/driving.png".to_string(),
                title: "Driving".to_string(),
                subtitle: None,
            },
        ]
    }

    fn work_history(&self) -> Vec<WorkExperience> {
        vec![
            WorkExperience {
                icon: "/assets/icons/work-experience.png".to_string(),
                position: "Domestic Helper".to_string(),
                location: "Hong Kong".to_string(),
                period: Period {
                    start: "June 2018".to_string(),
                    end: "June 2020".to_string(),
                },
                details: ExperienceDetails {
                    employer_nationality: "Hong Kong".to_string(),
                    size_of_home: "500 Sq Ft".to_string(),
                    district: "Wanchai".to_string(),
                    household_size: 4,
                    language_spoken: "Cantonese".to_string(),
                    reason_for_leaving: "Finished Contract".to_string(),
                },
                main_duties: vec![
                    duty("/assets/icons/child-care.png", "Child Care", Some("6-12")),
                    duty("/assets/icons/elderly-care.png", "Elderly Care", Some("6-12")),
                    duty("/assets/icons/cooking.png", "Cooking", None),
                    duty("/assets/icons/housework.png", "General Housework", None),
                ],
            },
            WorkExperience {
                icon: "/assets/icons/overseas-experience.png".to_string(),
                position: "Domestic Helper".to_string(),
                location: "Taiwan".to_string(),
                period: Period {
                    start: "July 2016".to_string(),
                    end: "May 2018".to_string(),
                },
                details: ExperienceDetails {
                    employer_nationality: "Hong Kong".to_string(),
                    size_of_home: "500 Sq Ft".to_string(),
                    district: "Wanchai".to_string(),
                    household_size: 4,
                    language_spoken: "Cantonese".to_string(),
                    reason_for_leaving: "Terminated Contract (Pass Away)".to_string(),
                },
                main_duties: vec![
                    duty("/assets/icons/teen-care.png", "Teen Care", Some("13-18")),
                    duty("/assets/icons/cooking.png", "Cooking", None),
                    duty("/assets/icons/pet-care.png", "Pet Care", None),
                ],
            },
        ]
    }

    fn expectations(&self) -> Vec<Expectation> {
        vec![
            Expectation {
                label: "Take care of newborn baby".to_string(),
                status: ExpectationStatus::Satisfied,
            },
            Expectation {
                label: "Willing to share room".to_string(),
                status: ExpectationStatus::Satisfied,
            },
            Expectation {
                label: "Co-worker".to_string(),
                status: ExpectationStatus::Unsatisfied,
            },
            Expectation {
                label: "Saturday Off".to_string(),
                status: ExpectationStatus::Satisfied,
            },
        ]
    }

    fn caregiving(&self) -> Vec<CaregivingCategory> {
        vec![
            CaregivingCategory {
                category: "Baby Care".to_string(),
                has_cared_for: [
                    "Newborn (0-1 year)",
                    "Infant (1-3 years)",
                    "Toddler (3-5 years)",
                    "Child (5-12 years)",
                    "Teen (13-19 years)",
                ]
                .map(str::to_string)
                .to_vec(),
                experienced_in: [
                    "Changing diapers",
                    "Feeding",
                    "Preparing food",
                    "Sterilising bottles",
                    "Night care for baby",
                    "Night care for toddler / child",
                    "Caring for child with Special Needs",
                ]
                .map(str::to_string)
                .to_vec(),
            },
            CaregivingCategory {
                category: "Elderly Care".to_string(),
                has_cared_for: vec!["75 yr old".to_string()],
                experienced_in: [
                    "Assisting with daily activities",
                    "Medication management",
                    "Monitoring health (e.g. blood pressure)",
                    "Mobility assistance (e.g. wheelchair)",
                    "Meal preparation",
                    "Assisting with physical therapy",
                    "Care for elderly with Special Needs",
                ]
                .map(str::to_string)
                .to_vec(),
            },
            CaregivingCategory {
                category: "Household Chores".to_string(),
                has_cared_for: vec![],
                experienced_in: [
                    "General cleaning",
                    "Furniture care",
                    "Washing machine",
                    "Bed making",
                    "Window cleaning",
                    "Ironing",
                    "Sewing",
                    "Hand washing (clothes)",
                    "Floor cleaning",
                    "Vacuum cleaning",
                ]
                .map(str::to_string)
                .to_vec(),
            },
        ]
    }
}
