//! # anime-roster-provider
//!
//! Fetches the character roster of one anime from the public
//! [Jikan](https://jikan.moe/) API (an unofficial MyAnimeList mirror).
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use anime_roster_provider::{create_source, CharacterSource, SourceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = create_source(&SourceConfig::default())?;
//!
//!     for character in source.fetch_characters().await? {
//!         println!("{} ({})", character.name, character.role);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError):
//!
//! - [`ProviderError::NetworkError`] / [`ProviderError::Timeout`] — transport failure
//! - [`ProviderError::RateLimited`] — HTTP 429
//! - [`ProviderError::AnimeNotFound`] — HTTP 404 for the configured anime
//! - [`ProviderError::ParseError`] — body does not match the expected document
//!
//! Requests are sent once; nothing is retried or cached.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;

pub use error::{ProviderError, Result};

pub use factory::create_source;

pub use traits::CharacterSource;

pub use types::{
    CharacterRecord, DEFAULT_ANIME_ID, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_JIKAN_BASE_URL,
    DEFAULT_REQUEST_TIMEOUT_SECS, SourceConfig,
};

pub use providers::JikanProvider;
