//! Anime Roster Core Library
//!
//! Platform-independent logic behind the roster viewer:
//! - [`PageView`]: fixed-size pagination and single-item selection over a loaded list
//! - [`lookup`]: life status and gender tables with per-language labels
//! - [`RosterService`]: one-shot roster loading through a [`CharacterSource`](anime_roster_provider::CharacterSource)
//!
//! Front ends own the event loop and rendering; nothing here touches a terminal.

pub mod config;
pub mod error;
pub mod lookup;
pub mod page_view;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::RosterSettings;
pub use error::{CoreError, CoreResult};
pub use lookup::{guess_gender, translate_status, Gender, LifeStatus};
pub use page_view::{PageView, DEFAULT_PAGE_SIZE};
pub use services::RosterService;
pub use types::{CharacterRecord, Language, SourceConfig};
