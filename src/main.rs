//! Covtrack CLI
//!
//! Command-line dashboard for live COVID-19 statistics:
//! - Summary cards for worldwide or a single country
//! - Sortable live-cases-by-country table
//! - Worldwide history sparkline

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use covtrack::client::{ApiClientConfig, CovidApiClient};
use covtrack::config::Config;
use covtrack::dashboard::{self, reduce, DashboardEvent, DashboardState, Region};
use covtrack::stats::{sort_by_field, StatField};

#[derive(Parser)]
#[command(name = "covtrack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Live COVID-19 statistics in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file path (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard (cards, table, history)
    Show {
        /// Country code (ISO2, ISO3, or numeric); omit for worldwide
        #[arg(short, long)]
        country: Option<String>,
    },

    /// List selectable countries (name and ISO code)
    Countries,

    /// Show the country table sorted by a metric
    Top {
        /// Metric to sort by (cases, today_cases, deaths, today_deaths,
        /// recovered, today_recovered)
        #[arg(short, long)]
        metric: Option<StatField>,
        /// Number of rows to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show worldwide daily history for a metric
    History {
        /// Metric to plot
        #[arg(short, long)]
        metric: Option<StatField>,
        /// Days of history to fetch
        #[arg(short, long)]
        days: Option<u32>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config);

    let client = CovidApiClient::new(ApiClientConfig {
        base_url: config.api.base_url.clone(),
        request_timeout_secs: config.api.request_timeout_secs,
    })
    .context("failed to build HTTP client")?;

    match cli.command.unwrap_or(Commands::Show { country: None }) {
        Commands::Show { country } => {
            let region = match country {
                Some(code) => Region::Country(code),
                None => Region::Worldwide,
            };
            show_dashboard(&client, &config, region).await?;
        }

        Commands::Countries => {
            let countries = client.countries().await?;
            let selectors = covtrack::stats::selectors(&countries);

            println!("{:<32} {}", "Country", "Code");
            println!("{}", "-".repeat(38));
            for sel in &selectors {
                println!("{:<32} {}", sel.name, sel.code.as_deref().unwrap_or("--"));
            }
        }

        Commands::Top { metric, limit } => {
            let metric = metric.unwrap_or_else(|| config.dashboard.metric_field());
            let limit = limit.unwrap_or(config.dashboard.table_limit);

            let countries = client.countries().await?;
            let sorted = sort_by_field(countries, metric);
            print!("{}", dashboard::render_table(&sorted, metric, limit));
        }

        Commands::History { metric, days } => {
            let metric = metric.unwrap_or_else(|| config.dashboard.metric_field());
            let days = days.unwrap_or(config.dashboard.history_days);

            let timeline = client.historical(days).await?;
            print!("{}", dashboard::render_history(&timeline, metric, 80));
        }

        Commands::Config { output } => {
            let content = covtrack::config::generate_default_config();
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Fetch everything, fold it through the reducer, and print the dashboard.
async fn show_dashboard(
    client: &CovidApiClient,
    config: &Config,
    region: Region,
) -> anyhow::Result<()> {
    let mut state = DashboardState::default();
    state = reduce(&state, DashboardEvent::MetricChanged(config.dashboard.metric_field()));

    for event in dashboard::load_initial(client, config.dashboard.history_days).await {
        state = reduce(&state, event);
    }

    if region != Region::Worldwide {
        state = reduce(&state, DashboardEvent::RegionSelected(region.clone()));
        let event = dashboard::select_region(client, &region).await;
        state = reduce(&state, event);
    }

    print!("{}", dashboard::render_cards(&state));
    println!();

    println!("Live cases by country");
    print!(
        "{}",
        dashboard::render_table(&state.table, StatField::Cases, config.dashboard.table_limit)
    );

    if let Some(timeline) = &state.history {
        println!();
        print!("{}", dashboard::render_history(timeline, state.metric, 80));
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("covtrack={}", config.logging.level)),
    );

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
