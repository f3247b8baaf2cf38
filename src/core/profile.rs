//! User profile storage
//!
//! Onboarding data (who the student is) persisted as TOML next to the
//! configuration file. Goal data is deliberately not persisted here — the
//! profile is the only user state that survives between runs by default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::Config;

const PROFILE_FILE_NAME: &str = "profile.toml";

/// Onboarding data describing the student
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Student's display name
    #[serde(default)]
    pub name: String,

    /// Current school
    #[serde(default)]
    pub school: String,

    /// Expected graduation year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<u16>,

    /// Current grade level (e.g., "11")
    #[serde(default)]
    pub grade_level: String,

    /// Free-form interest tags
    #[serde(default)]
    pub interests: Vec<String>,
}

impl UserProfile {
    /// Get the profile file path inside the `PlanBoard` config directory
    #[must_use]
    pub fn get_profile_file_path() -> PathBuf {
        Config::get_planboard_dir().join(PROFILE_FILE_NAME)
    }

    /// Parse a profile from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load the profile from a specific path
    ///
    /// A missing or unreadable file yields the default (empty) profile — a
    /// fresh install has no profile yet and that is not an error.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| Self::from_toml(&content).ok())
            .unwrap_or_default()
    }

    /// Load the profile from the default location
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_profile_file_path())
    }

    /// Save the profile to a specific path, creating parent directories
    ///
    /// # Errors
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Save the profile to the default location
    ///
    /// # Errors
    /// Returns an error if serialization or the filesystem write fails.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_profile_file_path())
    }

    /// Get a profile value by key
    ///
    /// Supported keys: `name`, `school`, `graduation_year`, `grade_level`,
    /// `interests` (comma-joined).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "school" => Some(self.school.clone()),
            "graduation_year" | "graduation-year" => Some(
                self.graduation_year
                    .map_or_else(String::new, |y| y.to_string()),
            ),
            "grade_level" | "grade-level" => Some(self.grade_level.clone()),
            "interests" => Some(self.interests.join(", ")),
            _ => None,
        }
    }

    /// Set a profile value by key
    ///
    /// `interests` takes a comma-separated list; `graduation_year` must be a
    /// number.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "name" => self.name = value.to_string(),
            "school" => self.school = value.to_string(),
            "graduation_year" | "graduation-year" => {
                let year = value
                    .parse::<u16>()
                    .map_err(|_| format!("Invalid year for 'graduation_year': '{value}'"))?;
                self.graduation_year = Some(year);
            }
            "grade_level" | "grade-level" => self.grade_level = value.to_string(),
            "interests" => {
                self.interests = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(ToString::to_string)
                    .collect();
            }
            _ => return Err(format!("Unknown profile key: '{key}'")),
        }
        Ok(())
    }
}

impl std::fmt::Display for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  name = \"{}\"", self.name)?;
        writeln!(f, "  school = \"{}\"", self.school)?;
        let year = self
            .graduation_year
            .map_or_else(String::new, |y| y.to_string());
        writeln!(f, "  graduation_year = \"{year}\"")?;
        writeln!(f, "  grade_level = \"{}\"", self.grade_level)?;
        writeln!(f, "  interests = \"{}\"", self.interests.join(", "))?;
        Ok(())
    }
}
