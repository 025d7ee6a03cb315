use anyhow::{anyhow, Context, Result};
use catalog::{loader, Catalog, Coordinate, PriceBand, StayId};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use maps_client::MapsClient;
use planner::{StayPlanner, StayRecommendation};
use recommender::{Budget, PreferenceSet, ScoringWeights, TripType};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// ilocos-stays - Accommodation recommender for Ilocos Norte
#[derive(Parser)]
#[command(name = "ilocos-stays")]
#[command(about = "Rule-based accommodation recommender for Ilocos Norte", long_about = None)]
struct Cli {
    /// Path to a catalog JSON file (uses the embedded dataset when omitted)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Built-in scoring profile
    #[arg(long, value_enum, default_value = "classic")]
    profile: Profile,

    /// Path to a custom scoring-weight table (JSON); overrides --profile
    #[arg(long)]
    weights: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Which of the two built-in weight tables to score with
#[derive(Clone, Copy, ValueEnum)]
enum Profile {
    /// Numeric budgets with tiered proximity bonuses
    Classic,
    /// Price-band matching with trip-type bonuses
    TripPlanner,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the catalog under a set of preferences
    Recommend {
        /// Budget ceiling in pesos per night
        #[arg(long)]
        budget: Option<f64>,

        /// Budget as a price band (low, mid, high)
        #[arg(long, conflicts_with = "budget")]
        budget_band: Option<PriceBand>,

        /// Desired municipality (omit for "any")
        #[arg(long)]
        area: Option<String>,

        /// Desired amenity tag (repeat for several)
        #[arg(long = "amenity")]
        amenities: Vec<String>,

        /// Minimum acceptable guest rating
        #[arg(long)]
        min_rating: Option<f64>,

        /// Kind of trip (adventure, culture, surf, relaxation)
        #[arg(long)]
        trip: Option<TripType>,

        /// Reference coordinate for proximity scoring, as LAT,LNG
        #[arg(long)]
        near: Option<String>,

        /// Number of results to show
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Show the per-term score breakdown for each result
        #[arg(long)]
        explain: bool,
    },

    /// Find stays in or near a town by name
    Search {
        /// Town name (prefix is enough, like an autocomplete box)
        #[arg(long)]
        town: String,

        /// Number of results to show
        #[arg(long, default_value = "6")]
        limit: usize,
    },

    /// Show one accommodation record in full
    Show {
        /// Accommodation id
        #[arg(long)]
        id: StayId,
    },

    /// Road distances from a point to every record in the catalog
    Distances {
        /// Origin coordinate as LAT,LNG
        #[arg(long)]
        from: String,
    },

    /// Estimated driving route from a point to one record
    Route {
        /// Origin coordinate as LAT,LNG
        #[arg(long)]
        from: String,

        /// Destination accommodation id
        #[arg(long)]
        id: StayId,
    },

    /// Run a throughput benchmark with random preference snapshots
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog (embedded dataset unless a file was given)
    let start = Instant::now();
    let catalog = match &cli.data {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => loader::load_embedded().context("Failed to load embedded catalog")?,
    };
    let catalog = Arc::new(catalog);
    println!(
        "{} Loaded {} records in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    let weights = load_weights(&cli)?;
    let planner = StayPlanner::new(catalog.clone(), &weights, MapsClient::new());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            budget,
            budget_band,
            area,
            amenities,
            min_rating,
            trip,
            near,
            limit,
            explain,
        } => {
            let prefs = PreferenceSet {
                budget: budget
                    .map(Budget::Ceiling)
                    .or(budget_band.map(Budget::Band)),
                area,
                amenities: amenities
                    .into_iter()
                    .map(|a| a.trim().to_ascii_lowercase())
                    .collect(),
                min_rating,
                trip_type: trip,
                center: near.as_deref().map(parse_coordinate).transpose()?,
            };
            handle_recommend(&planner, prefs, limit, explain).await?
        }
        Commands::Search { town, limit } => handle_search(&planner, &town, limit).await?,
        Commands::Show { id } => handle_show(&catalog, id)?,
        Commands::Distances { from } => handle_distances(&planner, &from).await?,
        Commands::Route { from, id } => handle_route(&planner, &from, id).await?,
        Commands::Benchmark { requests } => handle_benchmark(&planner, &catalog, requests).await?,
    }

    Ok(())
}

/// Resolve the weight table: custom file beats the named profile.
fn load_weights(cli: &Cli) -> Result<ScoringWeights> {
    if let Some(path) = &cli.weights {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read weight table {}", path.display()))?;
        return serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse weight table {}", path.display()));
    }
    Ok(match cli.profile {
        Profile::Classic => ScoringWeights::classic(),
        Profile::TripPlanner => ScoringWeights::trip_planner(),
    })
}

/// Parse a "LAT,LNG" argument into a coordinate.
fn parse_coordinate(s: &str) -> Result<Coordinate> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("Expected LAT,LNG but got {s:?}"))?;
    let coord = Coordinate::new(
        lat.trim().parse().context("Latitude is not a number")?,
        lng.trim().parse().context("Longitude is not a number")?,
    );
    if !coord.is_valid() {
        return Err(anyhow!("Coordinate ({}, {}) is out of range", coord.lat, coord.lng));
    }
    Ok(coord)
}

/// Handle the 'recommend' command
async fn handle_recommend(
    planner: &StayPlanner,
    prefs: PreferenceSet,
    limit: usize,
    explain: bool,
) -> Result<()> {
    let recommendations = planner.recommend(prefs, limit).await?;
    print_recommendations(&recommendations, explain);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(planner: &StayPlanner, town: &str, limit: usize) -> Result<()> {
    let results = planner.search_town(town, limit).await?;
    println!("{}", format!("Stays in or near {town}:").bold().blue());
    print_recommendations(&results, false);
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &Catalog, id: StayId) -> Result<()> {
    let stay = catalog
        .get(id)
        .ok_or_else(|| anyhow!("No accommodation with id {id}"))?;

    println!("{}", stay.name.bold().blue());
    println!("{}Area: {}", "• ".green(), stay.area);
    println!("{}Price: {}", "• ".green(), stay.price);
    match stay.rating {
        Some(r) => println!("{}Rating: {r:.1}", "• ".green()),
        None => println!("{}Rating: unrated", "• ".green()),
    }
    println!(
        "{}Location: {:.4}, {:.4}",
        "• ".cyan(),
        stay.location.lat,
        stay.location.lng
    );
    if !stay.amenities.is_empty() {
        println!("{}Amenities: {}", "• ".cyan(), stay.amenities.join(", "));
    }
    if let Some(desc) = &stay.description {
        println!("{desc}");
    }
    Ok(())
}

/// Handle the 'distances' command
async fn handle_distances(planner: &StayPlanner, from: &str) -> Result<()> {
    let origin = parse_coordinate(from)?;
    let rows = planner.distances_from(origin).await?;

    println!("{}", "Distances from you:".bold().blue());
    for (name, leg) in rows {
        println!(
            "{name}: {:.1} km / {:.0} min",
            leg.distance_km, leg.duration_min
        );
    }
    Ok(())
}

/// Handle the 'route' command
async fn handle_route(planner: &StayPlanner, from: &str, id: StayId) -> Result<()> {
    let origin = parse_coordinate(from)?;
    let (name, summary) = planner.plan_route(origin, id).await?;
    println!("{}", name.bold().blue());
    println!(
        "Distance: {:.1} km — Duration: {:.0} min",
        summary.distance_km, summary.duration_min
    );
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    planner: &StayPlanner,
    catalog: &Arc<Catalog>,
    requests: usize,
) -> Result<()> {
    let areas = catalog.areas();

    // Random preference snapshots, the way slider/select churn would produce them
    let snapshots: Vec<PreferenceSet> = (0..requests)
        .map(|_| {
            let budget = 800.0 + f64::from(rand::random::<u32>() % 2500);
            let area = areas
                .get(rand::random::<u32>() as usize % (areas.len() + 1))
                .cloned();
            PreferenceSet {
                budget: Some(Budget::Ceiling(budget)),
                area,
                min_rating: Some(3.0 + f64::from(rand::random::<u32>() % 20) / 10.0),
                center: Some(Coordinate::new(18.1978, 120.5936)),
                ..PreferenceSet::new()
            }
        })
        .collect();

    let mut handles = vec![];
    for prefs in snapshots {
        let planner = planner.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            planner.recommend(prefs, 10).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    for handle in handles {
        timings.push(handle.await??);
    }

    let total_time: std::time::Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("Benchmark results:");
    println!("Total time: {total_time:?}");
    println!("Average latency: {avg_latency:?}");
    println!("P50 latency: {p50:?}");
    println!("P95 latency: {p95:?}");
    println!("Throughput: {throughput:.2} requests/second");

    Ok(())
}

/// Helper function to format and print recommendations
fn print_recommendations(recommendations: &[StayRecommendation], explain: bool) {
    if recommendations.is_empty() {
        println!("No stays found.");
        return;
    }
    for (rank, rec) in recommendations.iter().enumerate() {
        let rating = rec
            .rating
            .map(|r| format!("⭐ {r:.1}"))
            .unwrap_or_else(|| "unrated".to_string());
        let road = rec
            .road
            .map(|leg| format!(" — {:.1} km away", leg.distance_km))
            .unwrap_or_default();
        println!(
            "{}. {} ({} • {} • {}) - Score: {:.1}{}",
            (rank + 1).to_string().green(),
            rec.name.bold(),
            rec.area,
            rec.price,
            rating,
            rec.score,
            road
        );
        if explain {
            println!("   Explanation: {}", rec.explanation);
        }
    }
}
