//! CLI seeding tool for chicken-ranker.
//!
//! Provides commands for seeding the restaurant catalog, checking the
//! database connection, and printing the current ranking without requiring
//! HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Clear the catalog and insert the initial restaurant set
//! cargo run --bin seed -- seed
//!
//! # Insert without clearing existing rows
//! cargo run --bin seed -- seed --keep
//!
//! # Print the current ranking
//! cargo run --bin seed -- list
//!
//! # Check database connection
//! cargo run --bin seed -- check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use chicken_ranker::domain::entities::NewRestaurant;
use chicken_ranker::domain::repositories::RestaurantRepository;
use chicken_ranker::infrastructure::persistence::PgRestaurantRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the chicken-ranker catalog.
#[derive(Parser)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the catalog with the initial restaurant set
    Seed {
        /// Keep existing rows instead of clearing the catalog first
        #[arg(short, long)]
        keep: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Print the current ranking
    List,

    /// Check database connection
    Check,
}

/// The initial restaurant set.
fn seed_restaurants() -> Vec<NewRestaurant> {
    vec![
        NewRestaurant {
            name: "Dave's Hot Chicken".to_string(),
            description: "Street food sensation turned fast-casual hit. Specializing in \
                          Nashville-style hot chicken tenders & sliders."
                .to_string(),
            website: "https://daveshotchicken.com".to_string(),
            image_url: "/images/daves-hot-chicken.jpg".to_string(),
        },
        NewRestaurant {
            name: "Main Bird Hot Chicken".to_string(),
            description: "Started as a food truck in 2020, serving fully halal, \
                          Nashville-style hot chicken in Houston."
                .to_string(),
            website: "https://mainbirdhotchicken.com".to_string(),
            image_url: "/images/main-bird.jpg".to_string(),
        },
        NewRestaurant {
            name: "Urban Bird Hot Chicken".to_string(),
            description: "Veteran Owned and Operated. Original Nashville style Hot Chicken \
                          using only All Natural Halal chicken."
                .to_string(),
            website: "https://www.urbanbirdhotchicken.com".to_string(),
            image_url: "/images/urban-bird.jpg".to_string(),
        },
        NewRestaurant {
            name: "Birdside HTX".to_string(),
            description: "On a mission to serve up 100% Halal fried chicken with a taste \
                          unlike anything you've experienced before."
                .to_string(),
            website: "https://birdsidehtx.com".to_string(),
            image_url: "/images/birdside-htx.jpg".to_string(),
        },
    ]
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    let repo = Arc::new(PgRestaurantRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::Seed { keep, yes } => seed_catalog(repo, keep, yes).await?,
        Commands::List => list_ranking(repo).await?,
        Commands::Check => check_connection(repo).await?,
    }

    Ok(())
}

/// Seeds the catalog, optionally clearing it first.
async fn seed_catalog(repo: Arc<PgRestaurantRepository>, keep: bool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Seed Catalog".bright_blue().bold());
    println!();

    if !keep {
        let existing = repo.count().await?;

        if existing > 0 && !skip_confirm {
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "Delete {} existing restaurants (and their comments)?",
                    existing
                ))
                .default(false)
                .interact()?;

            if !confirmed {
                println!("{}", "Aborted".yellow());
                return Ok(());
            }
        }

        let removed = repo.delete_all().await?;
        if removed > 0 {
            println!("{} {} restaurants", "🗑️  Cleared".yellow(), removed);
        }
    }

    for new_restaurant in seed_restaurants() {
        let name = new_restaurant.name.clone();
        match repo.insert(new_restaurant).await {
            Ok(r) => println!("   {} {} (id {})", "✓".green(), r.name, r.id),
            Err(e) => println!("   {} {}: {}", "✗".red(), name, e),
        }
    }

    println!();
    println!("{}", "✅ Seeding complete".green().bold());
    Ok(())
}

/// Prints the catalog ordered by score.
async fn list_ranking(repo: Arc<PgRestaurantRepository>) -> Result<()> {
    println!("{}", "🏆 Current Ranking".bright_blue().bold());
    println!();

    let ranked = repo.list_by_score().await?;

    if ranked.is_empty() {
        println!("{}", "Catalog is empty - run `seed -- seed` first".yellow());
        return Ok(());
    }

    for (position, r) in ranked.iter().enumerate() {
        println!(
            "{:>3}. {} {} ({} up / {} down)",
            position + 1,
            format!("[{:+}]", r.score).bold(),
            r.name,
            r.upvotes.to_string().green(),
            r.downvotes.to_string().red(),
        );
    }

    Ok(())
}

/// Verifies database connectivity with a catalog count.
async fn check_connection(repo: Arc<PgRestaurantRepository>) -> Result<()> {
    let count = repo.count().await?;
    println!(
        "{} database reachable, {} restaurants",
        "✓".green(),
        count
    );
    Ok(())
}
