//! Static marketplace of opportunity listings
//!
//! A fixed catalog users browse and pull goals from. Search is substring
//! matching over the display fields; there is no remote fetch.

use crate::core::models::{GoalDraft, GoalType};

/// One opportunity in the marketplace catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Stable identifier (e.g., "mkt-robotics-league")
    pub id: String,
    /// Display title
    pub title: String,
    /// Organization offering the opportunity
    pub provider: String,
    /// Kind of goal this becomes when added to a board
    pub goal_type: GoalType,
    /// Short description
    pub description: String,
    /// Link to the provider's page
    pub url: String,
}

impl Listing {
    /// Convert this listing into a goal draft for the given semester
    ///
    /// The draft is categorized by the listing type's default category and
    /// records the listing id as its source.
    #[must_use]
    pub fn to_draft(&self, semester: String) -> GoalDraft {
        let mut draft = GoalDraft::new(
            self.title.clone(),
            self.goal_type,
            self.goal_type.default_category().to_string(),
            semester,
        );
        draft.description = Some(self.description.clone());
        draft.source = Some(self.id.clone());
        draft
    }
}

fn listing(
    id: &str,
    title: &str,
    provider: &str,
    goal_type: GoalType,
    description: &str,
    url: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        provider: provider.to_string(),
        goal_type,
        description: description.to_string(),
        url: url.to_string(),
    }
}

/// The static marketplace catalog
#[must_use]
pub fn listings() -> Vec<Listing> {
    vec![
        listing(
            "mkt-robotics-league",
            "FIRST Robotics Competition Team",
            "FIRST",
            GoalType::Extracurricular,
            "Season-long robotics build and competition with a school team",
            "https://www.firstinspires.org/robotics/frc",
        ),
        listing(
            "mkt-summer-research",
            "Summer Science Research Program",
            "State University",
            GoalType::Summer,
            "Six-week mentored lab research placement for high schoolers",
            "https://example.edu/summer-research",
        ),
        listing(
            "mkt-ap-calculus",
            "AP Calculus AB",
            "College Board",
            GoalType::Course,
            "Advanced placement calculus with the May exam",
            "https://apstudents.collegeboard.org/courses/ap-calculus-ab",
        ),
        listing(
            "mkt-hospital-volunteer",
            "Hospital Volunteer Program",
            "Regional Medical Center",
            GoalType::Career,
            "Weekly patient-support volunteering for pre-med exposure",
            "https://example.org/volunteer",
        ),
        listing(
            "mkt-swim-club",
            "Club Swim Team",
            "City Aquatics",
            GoalType::Sports,
            "Year-round competitive swimming with regional meets",
            "https://example.org/aquatics",
        ),
        listing(
            "mkt-coding-bootcamp",
            "Intro to Web Development Bootcamp",
            "Code Futures",
            GoalType::Summer,
            "Two-week project-based HTML/CSS/JavaScript intensive",
            "https://example.com/bootcamp",
        ),
        listing(
            "mkt-debate-club",
            "Policy Debate Club",
            "National Speech & Debate Association",
            GoalType::Extracurricular,
            "Weekly practice and monthly tournaments",
            "https://www.speechanddebate.org",
        ),
    ]
}

/// Case-insensitive substring search over title, provider, and description
///
/// An empty or whitespace-only query matches every listing.
#[must_use]
pub fn search(listings: &[Listing], query: &str) -> Vec<Listing> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return listings.to_vec();
    }

    listings
        .iter()
        .filter(|l| {
            l.title.to_lowercase().contains(&needle)
                || l.provider.to_lowercase().contains(&needle)
                || l.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Restrict a listing set to one goal type
#[must_use]
pub fn of_type(listings: &[Listing], goal_type: GoalType) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| l.goal_type == goal_type)
        .cloned()
        .collect()
}
