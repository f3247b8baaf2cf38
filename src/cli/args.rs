//! CLI argument definitions for `PlanBoard`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use plan_board::config::ConfigOverrides;
use plan_board::logger::Level;
use plan_board::models::{GoalStatus, GoalType};

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// CLI goal type argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum GoalTypeArg {
    /// An academic course
    Course,
    /// A summer program
    Summer,
    /// An extracurricular activity
    Extracurricular,
    /// A career target
    Career,
    /// An athletic commitment
    Sports,
}

impl From<GoalTypeArg> for GoalType {
    fn from(arg: GoalTypeArg) -> Self {
        match arg {
            GoalTypeArg::Course => Self::Course,
            GoalTypeArg::Summer => Self::Summer,
            GoalTypeArg::Extracurricular => Self::Extracurricular,
            GoalTypeArg::Career => Self::Career,
            GoalTypeArg::Sports => Self::Sports,
        }
    }
}

/// CLI goal status argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum GoalStatusArg {
    /// Not started yet
    Planned,
    /// Currently being worked on
    InProgress,
    /// Done
    Completed,
}

impl From<GoalStatusArg> for GoalStatus {
    fn from(arg: GoalStatusArg) -> Self {
        match arg {
            GoalStatusArg::Planned => Self::Planned,
            GoalStatusArg::InProgress => Self::InProgress,
            GoalStatusArg::Completed => Self::Completed,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `export_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum ProfileSubcommand {
    /// Display profile values.
    ///
    /// If a KEY is provided, displays only that profile value.
    Get {
        /// Optional profile key to display (e.g., `name`, `school`, `interests`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a profile value.
    Set {
        /// Profile key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set (comma-separated for `interests`)
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Delete the stored profile (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum GoalSubcommand {
    /// Add a goal to a board document.
    Add {
        /// Board document to modify
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Goal title (must not be blank)
        #[arg(long, value_name = "TITLE")]
        title: String,

        /// Kind of goal
        #[arg(long = "type", value_enum, value_name = "TYPE")]
        goal_type: GoalTypeArg,

        /// Target category id (defaults to the type's category)
        #[arg(long, value_name = "ID")]
        category: Option<String>,

        /// Target semester id
        #[arg(long, value_name = "ID")]
        semester: String,

        /// Optional description
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,

        /// Initial status
        #[arg(long, value_enum, value_name = "STATUS", default_value = "planned")]
        status: GoalStatusArg,
    },
    /// Remove a goal from a board document.
    Remove {
        /// Board document to modify
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Id of the goal to remove
        #[arg(value_name = "GOAL_ID")]
        id: String,
    },
    /// Update fields of a goal in a board document.
    Update {
        /// Board document to modify
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Id of the goal to update
        #[arg(value_name = "GOAL_ID")]
        id: String,

        /// New title
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// New kind
        #[arg(long = "type", value_enum, value_name = "TYPE")]
        goal_type: Option<GoalTypeArg>,

        /// New category id
        #[arg(long, value_name = "ID")]
        category: Option<String>,

        /// New semester id
        #[arg(long, value_name = "ID")]
        semester: Option<String>,

        /// New description
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,

        /// New status
        #[arg(long, value_enum, value_name = "STATUS")]
        status: Option<GoalStatusArg>,
    },
    /// Move a goal to another cell of the board.
    Move {
        /// Board document to modify
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Id of the goal to move
        #[arg(value_name = "GOAL_ID")]
        id: String,

        /// Target category id
        #[arg(long, value_name = "ID")]
        category: String,

        /// Target semester id
        #[arg(long, value_name = "ID")]
        semester: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the planning board.
    ///
    /// Loads a board document when FILE is given, otherwise shows the
    /// built-in starter board.
    Board {
        /// Path to a board TOML document
        #[arg(value_name = "FILE")]
        board_file: Option<PathBuf>,

        /// Show only this category row (an id, or "all")
        #[arg(long, value_name = "ID", default_value = "all")]
        category: String,

        /// Show only this semester column (an id, or "all")
        #[arg(long, value_name = "ID", default_value = "all")]
        semester: String,

        /// Export a report in the specified format (markdown, html)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Report output path (defaults to the configured export directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Add, remove, update, or move goals in a board document.
    Goal {
        #[command(subcommand)]
        subcommand: GoalSubcommand,
    },
    /// Browse the opportunity marketplace.
    Market {
        /// Search text matched against title, provider, and description
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Show only listings of this type
        #[arg(long = "type", value_enum, value_name = "TYPE")]
        listing_type: Option<GoalTypeArg>,

        /// Add the listing with this id to a board document
        #[arg(long, value_name = "LISTING_ID")]
        add: Option<String>,

        /// Board document to add the listing to
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Semester id to place the new goal in
        #[arg(long, value_name = "ID")]
        semester: Option<String>,
    },
    /// Manage the stored user profile.
    ///
    /// If no subcommand is provided, displays all profile values.
    Profile {
        #[command(subcommand)]
        subcommand: Option<ProfileSubcommand>,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "planboard",
    about = "PlanBoard command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config export directory
    #[arg(long = "config-export-dir", value_name = "DIR")]
    pub config_export_dir: Option<PathBuf>,

    /// Override config export directory (short form)
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g.,
    /// `--export-dir`) take precedence over long-form flags (e.g.,
    /// `--config-export-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            export_dir: self
                .export_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_export_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
