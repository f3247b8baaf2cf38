//! Core module for the goal board engine

pub mod board;
pub mod boardfile;
pub mod config;
pub mod filter;
pub mod marketplace;
pub mod models;
pub mod profile;
pub mod report;
pub mod seed;
pub mod store;

/// Returns the current version of the `PlanBoard` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
