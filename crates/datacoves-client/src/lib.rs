//! # datacoves-client
//!
//! API client for Datacoves. Fetches the latest compiled manifest for a
//! given dbt project.
//!
//! ## How it works
//!
//! 1. [`ReferenceConfig::from_env`] resolves the project's API token and
//!    endpoint from environment variables at startup.
//! 2. [`Datacoves`] is constructed once per project and holds the bearer
//!    authorization headers precomputed.
//! 3. [`Datacoves::get_models`] issues a single
//!    `GET {endpoint}/projects/{project}/latest-manifest?trimmed=true`
//!    and returns the decoded JSON body verbatim.
//!
//! Transport and decode failures propagate as [`reqwest::Error`] — there is
//! no retry, caching, or domain error type in this crate.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use datacoves_client::{Datacoves, ReferenceConfig, SystemEnv};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), reqwest::Error> {
//!     let config = ReferenceConfig::from_env(&SystemEnv, "analytics");
//!     let client = Datacoves::from_config(&config);
//!     let manifest = client.get_models().await?;
//!     println!("{} nodes", manifest["nodes"].as_object().map_or(0, |m| m.len()));
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration (env vars)
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `DATACOVES__DBT_API_TOKEN` | — | Bearer token for the dbt API |
//! | `DATACOVES__SECRETS_TOKEN` | — | Fallback token if the above is unset |
//! | `DATACOVES__DBT_API_ENDPOINT` | `http://core-dbt-api-svc.core.svc.cluster.local:80/api/internal` | API base URL |

pub mod client;
pub mod config;
pub mod env;
pub mod events;

pub use client::Datacoves;
pub use config::{ReferenceConfig, DEFAULT_API_ENDPOINT, UNSET};
pub use env::{ReadEnv, SystemEnv};
pub use events::{EmitNote, TracingNotes};

#[cfg(any(test, feature = "test-support"))]
pub use env::InMemoryEnv;
#[cfg(any(test, feature = "test-support"))]
pub use events::MockNotes;
