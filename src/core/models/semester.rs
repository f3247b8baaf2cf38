//! Semester model

use serde::{Deserialize, Serialize};

/// Part of the academic year a semester falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// Autumn term
    Fall,
    /// Spring term
    Spring,
    /// Summer term
    Summer,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Fall => "Fall",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
        };
        write!(f, "{as_str}")
    }
}

/// Represents a fixed board column for one time period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Stable identifier (e.g., "fall-2025")
    pub id: String,

    /// Display name (e.g., "Fall 2025")
    pub name: String,

    /// Calendar year the term starts in
    pub year: u16,

    /// Part of the academic year
    pub season: Season,
}

impl Semester {
    /// Create a new semester
    ///
    /// # Arguments
    /// * `id` - Stable identifier
    /// * `name` - Display name
    /// * `year` - Calendar year
    /// * `season` - Part of the academic year
    #[must_use]
    pub const fn new(id: String, name: String, year: u16, season: Season) -> Self {
        Self {
            id,
            name,
            year,
            season,
        }
    }
}
