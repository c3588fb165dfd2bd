//! EcoLearn CLI - local lesson progress, badges, and streaks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use ecolearn_core::badge::{catalog, find_template};
use ecolearn_core::{Badge, LessonId, UserProgress};
use ecolearn_progress::config::POINTS_PER_LESSON;
use ecolearn_progress::{ProgressStore, ProgressTracker, StreakChange, TrackerConfig};
use ecolearn_storage::JsonStorage;

#[derive(Parser)]
#[command(name = "ecolearn")]
#[command(about = "Climate lesson progress tracker", long_about = None)]
struct Cli {
    /// Directory holding the progress record
    #[arg(long, env = "ECOLEARN_DATA_DIR", default_value = ".ecolearn")]
    data_dir: std::path::PathBuf,

    /// Storage key of the progress record
    #[arg(long, env = "ECOLEARN_STORAGE_KEY", default_value = ecolearn_progress::config::DEFAULT_STORAGE_KEY)]
    key: String,

    /// Count streak days at this UTC offset (minutes) instead of local time
    #[arg(
        long,
        env = "ECOLEARN_UTC_OFFSET",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i32).range(-1439..=1439),
    )]
    utc_offset_minutes: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mark a lesson complete (also counts toward the streak)
    Complete {
        /// Lesson ID
        lesson: String,
    },
    /// Award a badge from the catalog
    Badge {
        /// Catalog badge ID
        id: String,
    },
    /// Record today's activity against the streak
    Streak,
    /// Show progress
    Status,
    /// Print the certificate summary as JSON
    Summary {
        /// Learner name
        #[arg(long)]
        name: String,
        /// Eco actions logged
        #[arg(long, default_value = "0")]
        actions: u32,
    },
    /// List the badge catalog
    Badges,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut config = TrackerConfig::default().with_storage_key(cli.key);
    config.utc_offset_minutes = cli.utc_offset_minutes;

    let storage = JsonStorage::new(&cli.data_dir).await?;
    let mut tracker = ProgressTracker::load(storage, config).await?;

    match cli.command {
        Commands::Complete { lesson } => {
            let lesson = LessonId::new(lesson);
            let already = tracker.progress().has_completed(&lesson);
            let awarded = tracker.complete_lesson(lesson.clone()).await?;
            tracker.update_streak().await?;

            if already {
                println!("Lesson {} was already complete", lesson);
            } else {
                println!("Completed {} (+{} points)", lesson, POINTS_PER_LESSON);
            }
            for badge in &awarded {
                println!("  New badge: {}", format_badge(badge));
            }
        }
        Commands::Badge { id } => {
            let Some(template) = find_template(&id) else {
                anyhow::bail!("Unknown badge: {}", id);
            };
            if tracker.progress().has_badge(template.id) {
                println!("Badge {} already held", template.id);
                return Ok(());
            }
            let badge = template.award(tracker.clock().now());
            println!("Awarded {}", format_badge(&badge));
            tracker.add_badge(badge).await?;
        }
        Commands::Streak => {
            let change = tracker.update_streak().await?;
            let streak = tracker.progress().streak;
            match change {
                StreakChange::Unchanged => println!("Already active today ({} days)", streak),
                StreakChange::Extended(_) => println!("Streak extended: {} days", streak),
                StreakChange::Reset => println!("Streak started: {} day", streak),
            }
        }
        Commands::Status => print_status(tracker.progress()),
        Commands::Summary { name, actions } => {
            let summary = tracker.summary(name, actions);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Commands::Badges => {
            for template in catalog() {
                let held = if tracker.progress().has_badge(template.id) { "*" } else { " " };
                println!(
                    "{} {} {:<16} {:<7} {}",
                    held,
                    template.icon,
                    template.id,
                    template.tier.as_str(),
                    template.description,
                );
            }
        }
    }

    debug!("Progress record: {}", tracker.config().storage_key);
    Ok(())
}

fn format_badge(badge: &Badge) -> String {
    format!("{} {} [{}]", badge.icon, badge.name, badge.tier.as_str())
}

fn print_status(progress: &UserProgress) {
    println!("EcoLearn Progress");
    println!("  Points: {}", progress.points);
    println!("  Lessons: {}", progress.lesson_count());
    for lesson in &progress.completed_lessons {
        println!("    - {}", lesson);
    }
    println!("  Streak: {} days", progress.streak);
    if let Some(last) = progress.last_active_date {
        println!("  Last active: {}", last);
    }
    println!("  Badges: {}", progress.badge_count());
    for badge in &progress.badges {
        println!("    {} (earned {})", format_badge(badge), badge.earned_at);
    }
}
