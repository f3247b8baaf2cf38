//! Board cell identifier

use serde::{Deserialize, Serialize};

/// Identifies one board cell as a structured (category, semester) pair
///
/// Drop targets and placement queries carry this pair directly rather than a
/// delimited string, so ids containing any separator character are safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellRef {
    /// Category id of the row
    pub category: String,

    /// Semester id of the column
    pub semester: String,
}

impl CellRef {
    /// Create a cell reference
    #[must_use]
    pub const fn new(category: String, semester: String) -> Self {
        Self { category, semester }
    }

    /// Whether a goal with the given placement sits in this cell
    #[must_use]
    pub fn contains(&self, category: &str, semester: &str) -> bool {
        self.category == category && self.semester == semester
    }
}

impl std::fmt::Display for CellRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.category, self.semester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let cell = CellRef::new("school".to_string(), "fall-2025".to_string());

        assert!(cell.contains("school", "fall-2025"));
        assert!(!cell.contains("school", "spring-2026"));
        assert!(!cell.contains("career", "fall-2025"));
    }

    #[test]
    fn test_display() {
        let cell = CellRef::new("career".to_string(), "spring-2026".to_string());
        assert_eq!(cell.to_string(), "(career, spring-2026)");
    }

    #[test]
    fn test_ids_with_separator_characters() {
        // Structured pairs make separator characters in ids a non-issue.
        let cell = CellRef::new("dual-credit".to_string(), "fall-2025".to_string());
        assert!(cell.contains("dual-credit", "fall-2025"));
    }
}
