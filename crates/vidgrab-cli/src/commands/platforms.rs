//! Platforms command implementation
//!
//! Lists the platforms download URLs are accepted from.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use vidgrab_request::Platform;

use super::json_output::{print_json, PlatformEntry, PlatformsOutput};

/// Builds the platform list.
pub fn platform_entries() -> Vec<PlatformEntry> {
    Platform::ALL
        .iter()
        .map(|p| PlatformEntry {
            name: p.display_name().to_string(),
            domains: p.domains().iter().map(|d| d.to_string()).collect(),
        })
        .collect()
}

/// Run the platforms command
pub fn run(json_output: bool) -> Result<ExitCode> {
    let platforms = platform_entries();

    if json_output {
        print_json(&PlatformsOutput { platforms })?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Supported platforms:".cyan().bold());
    for entry in &platforms {
        println!("  {:<12} {}", entry.name, entry.domains.join(", ").dimmed());
    }
    Ok(ExitCode::SUCCESS)
}
