//! Recommendation rules.
//!
//! Output order is part of the contract: the tier block comes first, then
//! category advisories in [`ADVISORY_ORDER`].

use super::level::ReadinessLevel;
use crate::model::Category;
use std::collections::BTreeMap;

/// Categories checked for advisories, in output order. Academic is scored but
/// not advised on unless `academic_advisory` is enabled.
pub const ADVISORY_ORDER: [Category; 4] = [
    Category::Language,
    Category::Experience,
    Category::Leadership,
    Category::Financial,
];

/// Fixed messages for a readiness tier
#[must_use]
pub const fn tier_messages(level: ReadinessLevel) -> &'static [&'static str] {
    match level {
        ReadinessLevel::Excellent => &[
            "You are well-prepared for competitive scholarship applications",
            "Focus on top-tier universities and prestigious scholarship programs",
            "Start your application process immediately",
        ],
        ReadinessLevel::Good => &[
            "You have a solid foundation for scholarship applications",
            "Strengthen a few key areas to become more competitive",
            "Apply to a mix of ambitious and realistic scholarship programs",
        ],
        ReadinessLevel::Fair => &[
            "You have potential but need to strengthen several areas",
            "Focus on improving your weakest categories before applying",
            "Start with less competitive scholarships to build experience",
        ],
        ReadinessLevel::NeedsWork => &[
            "Focus on building a stronger foundation before applying",
            "Work with a mentor to create a personalized preparation plan",
            "Consider a gap year to strengthen your academic and personal profile",
        ],
    }
}

/// Subtotal below which a category advisory is emitted
#[must_use]
pub const fn advisory_threshold(category: Category) -> u32 {
    match category {
        Category::Language => 4,
        Category::Academic
        | Category::Experience
        | Category::Leadership
        | Category::Financial => 3,
    }
}

/// Advisory text for a weak category
#[must_use]
pub const fn advisory_message(category: Category) -> &'static str {
    match category {
        Category::Academic => "Strengthen your academic record and grades in core subjects",
        Category::Language => "Improve your English proficiency and prepare for IELTS or TOEFL",
        Category::Experience => "Gain more extracurricular and volunteer experience",
        Category::Leadership => "Seek leadership roles in school clubs or community organizations",
        Category::Financial => "Research fully-funded scholarships and financial aid options",
    }
}

/// Build the ordered recommendation list.
///
/// Categories absent from `category_scores` (nothing answered there) never
/// produce an advisory.
pub(crate) fn build(
    level: ReadinessLevel,
    category_scores: &BTreeMap<Category, u32>,
    academic_advisory: bool,
) -> Vec<String> {
    let mut recommendations: Vec<String> = tier_messages(level)
        .iter()
        .map(|m| (*m).to_string())
        .collect();

    let academic = academic_advisory.then_some(Category::Academic);
    for category in academic.into_iter().chain(ADVISORY_ORDER) {
        if let Some(&subtotal) = category_scores.get(&category) {
            if subtotal < advisory_threshold(category) {
                recommendations.push(advisory_message(category).to_string());
            }
        }
    }

    recommendations
}
