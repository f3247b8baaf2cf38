//! Category model

use serde::{Deserialize, Serialize};

/// Represents a fixed board row grouping goals by life domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (e.g., "school")
    pub id: String,

    /// Display name (e.g., "School")
    pub name: String,

    /// Display color as a hex string
    pub color: String,

    /// Display icon name
    pub icon: String,
}

impl Category {
    /// Create a new category
    ///
    /// # Arguments
    /// * `id` - Stable identifier
    /// * `name` - Display name
    /// * `color` - Hex color string
    /// * `icon` - Icon name
    #[must_use]
    pub const fn new(id: String, name: String, color: String, icon: String) -> Self {
        Self {
            id,
            name,
            color,
            icon,
        }
    }
}
