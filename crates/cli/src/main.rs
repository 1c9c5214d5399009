use anyhow::{Context, Result};
use catalog::{Content, ContentRepository, Subscriber, SubscriberRepository};
use clap::{Parser, Subcommand};
use colored::Colorize;
use recommender::{RecommendationEngine, format_recommendations};
use serde::Serialize;
use tracing::info;

mod seed;

/// Streamflix - streaming catalog and genre recommendations
#[derive(Parser)]
#[command(name = "streamflix")]
#[command(about = "Streaming catalog demo with favorite-genre recommendations", long_about = None)]
struct Cli {
    /// Maximum number of entries the content repository may hold
    #[arg(short, long, default_value = "100")]
    capacity: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print details of every movie and series
    Catalog,

    /// Show one title
    Show {
        /// Exact, case-sensitive title
        #[arg(long)]
        title: String,
    },

    /// List subscribers with plan, status and history
    Subscribers,

    /// Recommend unseen content in a subscriber's favorite genres
    Recommend {
        /// Subscriber email
        #[arg(long)]
        email: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "4")]
        limit: usize,

        /// Only recommend content averaging at least this rating
        #[arg(long)]
        min_rating: Option<f32>,

        /// Print the recommendations as JSON
        #[arg(long)]
        json: bool,
    },

    /// Dump the whole catalog and subscriber list as JSON
    Export,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    content: &'a [Content],
    subscribers: &'a [Subscriber],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let (content, subscribers) = seed::seed(cli.capacity).context("Failed to seed demo catalog")?;
    info!("Catalog ready ({} of {} slots used)", content.len(), content.capacity());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Catalog => handle_catalog(&content),
        Commands::Show { title } => handle_show(&content, &title),
        Commands::Subscribers => handle_subscribers(&subscribers),
        Commands::Recommend {
            email,
            limit,
            min_rating,
            json,
        } => handle_recommend(&content, &subscribers, &email, limit, min_rating, json)?,
        Commands::Export => handle_export(&content, &subscribers)?,
    }

    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(content: &ContentRepository) {
    let series = content.iter().filter(|entry| entry.is_series()).count();
    println!(
        "{} {} movies, {} series",
        "All Content Details:".bold().blue(),
        content.len() - series,
        series
    );
    for entry in content {
        println!("{}", "---------------------------------".dimmed());
        println!("{}", entry.details());
    }
}

/// Handle the 'show' command
fn handle_show(content: &ContentRepository, title: &str) {
    match content.find_content_by_title(title) {
        Some(entry) => println!("{}", entry.details()),
        None => println!("{} '{}' not found in catalog.", "✗".red(), title),
    }
}

/// Handle the 'subscribers' command
fn handle_subscribers(subscribers: &SubscriberRepository) {
    println!("{}", "Subscribers:".bold().blue());
    for subscriber in subscribers.get_subscribers() {
        println!("{}", "---------------------------------".dimmed());
        let details = subscriber.details();
        if subscriber.is_active() {
            println!("{}", details);
        } else {
            println!("{}", details.yellow());
        }
    }
}

/// Handle the 'recommend' command
fn handle_recommend(
    content: &ContentRepository,
    subscribers: &SubscriberRepository,
    email: &str,
    limit: usize,
    min_rating: Option<f32>,
    json: bool,
) -> Result<()> {
    let Some(subscriber) = subscribers.find_subscriber_by_email(email) else {
        println!("{} Subscriber '{}' not found.", "✗".red(), email);
        return Ok(());
    };

    let mut engine = RecommendationEngine::new(content);
    if let Some(min_rating) = min_rating {
        engine = engine.with_minimum_rating(min_rating, 1)?;
    }

    let recommendations = engine
        .recommend_by_favorite_genres(subscriber, limit)
        .with_context(|| format!("Failed to build recommendations for {email}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
    } else {
        println!("{}", format_recommendations(&recommendations, subscriber).green());
    }
    Ok(())
}

/// Handle the 'export' command
fn handle_export(content: &ContentRepository, subscribers: &SubscriberRepository) -> Result<()> {
    let snapshot = Snapshot {
        content: content.get_all_content(),
        subscribers: subscribers.get_subscribers(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&snapshot).context("Failed to serialize catalog")?
    );
    Ok(())
}
