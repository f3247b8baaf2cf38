//! Profile command handler

use crate::args::ProfileSubcommand;
use plan_board::profile::UserProfile;
use std::fs;
use std::io::{self, Write};

/// Dispatch profile subcommands
pub fn run(subcommand: Option<ProfileSubcommand>) {
    match subcommand {
        None => handle_profile_get(None),
        Some(ProfileSubcommand::Get { key }) => handle_profile_get(key),
        Some(ProfileSubcommand::Set { key, value }) => handle_profile_set(&key, &value),
        Some(ProfileSubcommand::Reset) => handle_profile_reset(),
    }
}

/// Handle the profile get subcommand
pub fn handle_profile_get(key: Option<String>) {
    let profile = UserProfile::load();

    if let Some(k) = key {
        match profile.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown profile key: '{k}'"),
        }
    } else {
        println!("\n=== Profile ===\n");
        print!("{profile}");
    }
}

/// Handle the profile set subcommand
pub fn handle_profile_set(key: &str, value: &str) {
    let mut profile = UserProfile::load();

    if let Err(e) = profile.set(key, value) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = profile.save() {
        eprintln!("Failed to save profile: {e}");
        std::process::exit(1);
    }

    println!("✓ Set {key} = {value}");
}

/// Handle the profile reset subcommand
pub fn handle_profile_reset() {
    let profile_file = UserProfile::get_profile_file_path();
    if !profile_file.exists() {
        println!("✓ No stored profile to remove");
        return;
    }

    // Ask for confirmation
    print!("Are you sure you want to delete the stored profile? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        if let Err(e) = fs::remove_file(&profile_file) {
            eprintln!("Failed to remove profile file: {e}");
            std::process::exit(1);
        }
        println!("✓ Profile deleted");
    } else {
        println!("✗ Reset cancelled");
    }
}
