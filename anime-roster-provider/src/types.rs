use serde::{Deserialize, Serialize};

/// Default Jikan REST API root.
pub const DEFAULT_JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";
/// MyAnimeList ID of One Piece, the roster fetched when nothing else is configured.
pub const DEFAULT_ANIME_ID: u64 = 21;
/// Default connect timeout (seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

// ============ Character ============

/// One entry of an anime's character roster.
///
/// Built once from the upstream document and never mutated afterwards.
/// Fields the upstream document may omit are `Option`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    /// MyAnimeList character ID.
    pub mal_id: u64,
    /// Display name, as given by the API (e.g. `"Monkey D., Luffy"`).
    pub name: String,
    /// Role in the anime (`"Main"`, `"Supporting"`).
    pub role: String,
    /// Raw life status (`"alive"`, `"dead"`), when the API provides one.
    pub status: Option<String>,
    /// JPG portrait URL.
    pub image_url: Option<String>,
}

// ============ Source configuration ============

/// Where and how a character source fetches its roster.
///
/// # Default
///
/// Jikan v4, anime `21`, 10s connect timeout, 30s request timeout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// Anime whose roster is fetched.
    pub anime_id: u64,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_JIKAN_BASE_URL.to_string(),
            anime_id: DEFAULT_ANIME_ID,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
