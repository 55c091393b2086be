//! Paper Portal - Entry Point
//!
//! Runs the HTTP search server, or a one-shot search from the terminal.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use paper_portal::formatters::{format_papers_json, format_papers_markdown};
use paper_portal::models::{Paper, SearchParams};
use paper_portal::sanitize::sanitize;
use paper_portal::search::{ResultSource, SearchService};
use paper_portal::secondary::{SecondarySource, SimulatedWebSource};
use paper_portal::server::PortalServer;
use paper_portal::{Config, config::limits};

#[derive(Parser, Debug)]
#[command(name = "paper-portal")]
#[command(about = "Academic paper search over the Semantic Scholar API")]
#[command(version)]
struct Cli {
    /// Semantic Scholar API key (optional, enables higher rate limits)
    #[arg(long, env = "SEMANTIC_SCHOLAR_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG", global = true)]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0", env = "HOST")]
        host: std::net::IpAddr,

        /// HTTP server port
        #[arg(long, default_value = "8000", env = "PORT")]
        port: u16,
    },
    /// Run a single search and print the results
    Search {
        /// Free-text query
        #[arg(long, short)]
        query: Option<String>,

        /// Topic filter ("all" means no filter)
        #[arg(long, short)]
        topic: Option<String>,

        /// Year filter ("all" means no filter)
        #[arg(long, short)]
        year: Option<String>,

        /// Maximum number of results
        #[arg(long, short, default_value_t = limits::DEFAULT_LIMIT)]
        limit: u32,

        /// Output format
        #[arg(long, default_value = "markdown")]
        format: OutputFormat,

        /// Use the secondary source instead of Semantic Scholar
        #[arg(long)]
        secondary: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Human-readable Markdown
    #[default]
    Markdown,
    /// Full JSON records
    Json,
    /// JSON without abstracts
    Compact,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn render(papers: &[Paper], source: &str, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Markdown => format_papers_markdown(papers, source),
        OutputFormat::Json => format_papers_json(papers, source, false)?,
        OutputFormat::Compact => format_papers_json(papers, source, true)?,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting paper portal");

    let config = Config::new(cli.api_key);
    let service = SearchService::from_config(&config)?;

    match cli.command {
        Command::Serve { host, port } => {
            tracing::info!(%host, port, "Running in HTTP mode");
            PortalServer::new(service).run_http(SocketAddr::new(host, port)).await?;
        }
        Command::Search { query, topic, year, limit, format, secondary } => {
            let (papers, source) = if secondary {
                let query = match query.as_deref() {
                    None | Some("") => anyhow::bail!("--query is required with --secondary"),
                    Some(q) => sanitize(q),
                };
                let source = SimulatedWebSource;
                (source.search(&query).await?, source.name())
            } else {
                let params =
                    SearchParams::new(query.as_deref(), topic.as_deref(), year.as_deref())
                        .with_limit(limit);
                let outcome = service.search_with_source(&params).await?;
                if outcome.source == ResultSource::Fallback {
                    tracing::warn!("Semantic Scholar unavailable, showing sample data");
                }
                (outcome.papers, outcome.source.as_str())
            };

            println!("{}", render(&papers, source, format)?);
        }
    }

    Ok(())
}
