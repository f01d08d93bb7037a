//! Jikan CharacterSource trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::traits::{CharacterSource, ProviderErrorMapper};
use crate::types::CharacterRecord;

use super::{JikanCharacterEntry, JikanProvider};

impl JikanProvider {
    /// 将 Jikan 角色条目转换为 `CharacterRecord`
    /// 缺失的 `images` / `jpg` / `image_url` 任一层级都得到 `None`
    pub(crate) fn entry_to_record(entry: JikanCharacterEntry) -> CharacterRecord {
        let JikanCharacterEntry { character, role } = entry;
        let image_url = character
            .images
            .and_then(|images| images.jpg)
            .and_then(|jpg| jpg.image_url);

        CharacterRecord {
            mal_id: character.mal_id,
            name: character.name,
            role,
            status: character.status,
            image_url,
        }
    }
}

#[async_trait]
impl CharacterSource for JikanProvider {
    fn id(&self) -> &'static str {
        self.provider_name()
    }

    async fn fetch_characters(&self) -> Result<Vec<CharacterRecord>> {
        let response = self.get_characters().await?;
        let records: Vec<CharacterRecord> = response
            .data
            .into_iter()
            .map(Self::entry_to_record)
            .collect();

        log::info!(
            "[{}] Fetched {} characters for anime {}",
            self.provider_name(),
            records.len(),
            self.anime_id
        );
        Ok(records)
    }
}
