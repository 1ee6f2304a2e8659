use clap::Parser;
use simrec::{load_preferences, LoadOptions, Pearson, RecommendationReport, Recommender, RecommenderConfig};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Recommend items to a user from other users' ratings
#[derive(Parser, Debug)]
#[command(name = "simrec")]
#[command(about = "User-user collaborative filtering recommender", long_about = None)]
struct Args {
    /// Rating records (JSON array or JSON Lines)
    #[arg(long, default_value = "reviews.json")]
    ratings: PathBuf,

    /// Entity name records (JSON array or JSON Lines)
    #[arg(long, default_value = "restaurants.json")]
    entities: PathBuf,

    /// User to recommend for
    #[arg(short, long)]
    user: String,

    /// Number of recommendations to print
    #[arg(short = 'n', long, default_value_t = 15)]
    top: usize,

    /// Where to write the full ranked list
    #[arg(short, long, default_value = "userrec.json")]
    output: PathBuf,

    /// Skip ratings for items with no entity record
    #[arg(long)]
    skip_unknown_items: bool,

    /// Treat a rating of 0 as rated (excluded from recommendations)
    #[arg(long)]
    zero_is_rated: bool,

    /// Compute neighbour similarities in parallel
    #[arg(long)]
    parallel: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting simrec v{}", env!("CARGO_PKG_VERSION"));
    info!("Ratings: {:?}", args.ratings);
    info!("Entities: {:?}", args.entities);

    let options = LoadOptions {
        skip_unknown_items: args.skip_unknown_items,
    };
    let prefs = load_preferences(&args.ratings, &args.entities, &options)?;
    if prefs.is_empty() {
        warn!("No preferences loaded");
    }

    let config = RecommenderConfig {
        treat_zero_as_unrated: !args.zero_is_rated,
    };
    let recommender = Recommender::with_config(Pearson, config);
    let rankings = if args.parallel {
        recommender.recommend_parallel(&prefs, &args.user)?
    } else {
        recommender.recommend(&prefs, &args.user)?
    };

    println!("\nTop {} Recommendations for user {}:", args.top, args.user);
    for (i, rec) in rankings.iter().take(args.top).enumerate() {
        println!("{}. {} (Similarity Score: {:.2})", i + 1, rec.item, rec.score);
    }

    let report = RecommendationReport::from_rankings(&rankings);
    report.write_to(&args.output)?;

    println!("\nTotal recommendations: {}", rankings.len());
    println!("Recommendations saved to {}", args.output.display());

    Ok(())
}
