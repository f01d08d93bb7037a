//! Jikan (unofficial MyAnimeList API) character source

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, parse_base_url};
use crate::types::SourceConfig;

pub(crate) use types::{JikanCharacterEntry, JikanCharactersResponse, JikanErrorBody};

pub(crate) const PROVIDER_NAME: &str = "jikan";

/// Jikan character source
#[derive(Debug)]
pub struct JikanProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) anime_id: u64,
}

impl JikanProvider {
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let base_url = parse_base_url(PROVIDER_NAME, &config.base_url)?;

        Ok(Self {
            client: create_http_client(
                PROVIDER_NAME,
                &base_url,
                config.connect_timeout_secs,
                config.request_timeout_secs,
            )?,
            base_url: config.base_url.trim().to_string(),
            anime_id: config.anime_id,
        })
    }
}
