//! 测试辅助模块
//!
//! 提供 mock 数据源和便捷的测试数据工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};

use anime_roster_provider::{CharacterSource, ProviderError};
use async_trait::async_trait;

use crate::types::CharacterRecord;

// ===== MockCharacterSource =====

#[derive(Debug)]
pub struct MockCharacterSource {
    result: Result<Vec<CharacterRecord>, ProviderError>,
    calls: AtomicUsize,
}

impl MockCharacterSource {
    pub fn ok(characters: Vec<CharacterRecord>) -> Self {
        Self {
            result: Ok(characters),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn err(error: ProviderError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CharacterSource for MockCharacterSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_characters(&self) -> anime_roster_provider::Result<Vec<CharacterRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

// ===== 测试数据 =====

pub fn character(mal_id: u64, name: &str) -> CharacterRecord {
    CharacterRecord {
        mal_id,
        name: name.to_string(),
        role: "Supporting".to_string(),
        status: None,
        image_url: Some(format!("https://cdn.example/{mal_id}.jpg")),
    }
}

pub fn sample_characters(count: usize) -> Vec<CharacterRecord> {
    (1..=count as u64)
        .map(|id| character(id, &format!("Character {id}")))
        .collect()
}
