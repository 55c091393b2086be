//! Paper Portal
//!
//! Search backend for academic papers on top of the Semantic Scholar Graph API.
//! Maps a keyword, topic or year search to a single provider request,
//! normalizes the heterogeneous response into one [`Paper`](models::Paper)
//! shape, and answers from bundled sample data when the provider is down.
//!
//! # Example
//!
//! ```no_run
//! use paper_portal::{config::Config, models::SearchParams, search::SearchService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let service = SearchService::from_config(&config)?;
//!
//!     let params = SearchParams::default().with_topic("Quantum Computing");
//!     let papers = service.search(&params).await?;
//!     println!("{} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod sanitize;
pub mod search;
pub mod secondary;
pub mod server;

pub use client::SemanticScholarClient;
pub use config::Config;
pub use error::{ProviderError, SearchError};
pub use sanitize::sanitize;
pub use search::SearchService;
