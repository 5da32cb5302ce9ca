// ABOUTME: Coach roster seeding utility for the roster API database
// ABOUTME: Loads coaches from a JSON file or the built-in 32-team roster and upserts them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Coach roster seeder.
//!
//! The API itself never writes; this tool is how rows get into the `coaches` table.
//!
//! Usage:
//! ```bash
//! # Seed the built-in roster (uses DATABASE_URL from environment)
//! cargo run --bin seed-coaches
//!
//! # Seed from a JSON array of {id, name, country_name, image_url}
//! cargo run --bin seed-coaches -- --file ./data/coaches.json
//!
//! # Override database URL
//! cargo run --bin seed-coaches -- --database-url sqlite:./data/roster.db
//!
//! # Force re-seed (replace existing rows)
//! cargo run --bin seed-coaches -- --force
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use roster_api::{
    config::{DatabaseConfig, DatabaseUrl},
    database::Database,
    logging,
    models::{Coach, CoachId},
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "seed-coaches",
    about = "Roster API Coach Seeder",
    long_about = "Populate the coaches table from a JSON file or the built-in roster"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// JSON file holding an array of coaches
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// Force re-seed even if coaches already exist
    #[arg(long)]
    force: bool,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// Built-in roster: one coach per team, ids 1 to 32
const DEFAULT_ROSTER: &[(&str, &str)] = &[
    ("Stanislav Cherchesov", "Russia"),
    ("Juan Antonio Pizzi", "Saudi Arabia"),
    ("Héctor Cúper", "Egypt"),
    ("Óscar Tabárez", "Uruguay"),
    ("Fernando Santos", "Portugal"),
    ("Fernando Hierro", "Spain"),
    ("Hervé Renard", "Morocco"),
    ("Carlos Queiroz", "Iran"),
    ("Didier Deschamps", "France"),
    ("Bert van Marwijk", "Australia"),
    ("Ricardo Gareca", "Peru"),
    ("Åge Hareide", "Denmark"),
    ("Jorge Sampaoli", "Argentina"),
    ("Heimir Hallgrímsson", "Iceland"),
    ("Zlatko Dalić", "Croatia"),
    ("Gernot Rohr", "Nigeria"),
    ("Tite", "Brazil"),
    ("Vladimir Petković", "Switzerland"),
    ("Óscar Ramírez", "Costa Rica"),
    ("Mladen Krstajić", "Serbia"),
    ("Joachim Löw", "Germany"),
    ("Juan Carlos Osorio", "Mexico"),
    ("Janne Andersson", "Sweden"),
    ("Shin Tae-yong", "South Korea"),
    ("Roberto Martínez", "Belgium"),
    ("Hernán Darío Gómez", "Panama"),
    ("Nabil Maâloul", "Tunisia"),
    ("Gareth Southgate", "England"),
    ("Adam Nawałka", "Poland"),
    ("Aliou Cissé", "Senegal"),
    ("José Pékerman", "Colombia"),
    ("Akira Nishino", "Japan"),
];

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    logging::init_cli(args.verbose)?;

    info!("=== Roster API Coach Seeder ===");

    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = args.database_url.as_deref() {
        config.url = DatabaseUrl::parse_url(url)?;
    }
    config.auto_migrate = true;

    info!("Connecting to database: {}", config.url);
    let database = Database::connect(&config).await?;

    let existing = database.count().await?;
    if existing > 0 && !args.force {
        info!(
            "Coaches already seeded ({} coaches found). Use --force to re-seed.",
            existing
        );
        return Ok(());
    }

    let coaches = match &args.file {
        Some(path) => load_roster_file(path).await?,
        None => default_roster()?,
    };

    info!("Seeding {} coaches...", coaches.len());
    let mut seeded = 0u32;
    for coach in &coaches {
        match database.upsert(coach).await {
            Ok(()) => {
                info!("  ✓ {} ({})", coach.name, coach.country_name);
                seeded += 1;
            }
            Err(e) => warn!("  ✗ {} - Error: {}", coach.name, e),
        }
    }

    info!("");
    info!("=== Seeding Complete ===");
    info!("Stored {} of {} coaches", seeded, coaches.len());

    Ok(())
}

/// Read a JSON array of coaches; ids outside the roster range are rejected while parsing
async fn load_roster_file(path: &Path) -> Result<Vec<Coach>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let coaches: Vec<Coach> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid roster file {}", path.display()))?;
    Ok(coaches)
}

fn default_roster() -> Result<Vec<Coach>> {
    DEFAULT_ROSTER
        .iter()
        .enumerate()
        .map(|(index, (name, country))| -> Result<Coach> {
            let id = CoachId::new(i64::try_from(index)? + 1)?;
            Ok(Coach::new(
                id,
                *name,
                *country,
                format!("/static/coaches/{id}.png"),
            ))
        })
        .collect()
}
