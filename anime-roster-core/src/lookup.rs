//! Static lookup tables
//!
//! Two plain key → value tables with a documented default for unmatched keys:
//! - life status (`"alive"` / `"dead"`) → [`LifeStatus`], default [`LifeStatus::Unknown`]
//! - character name → [`Gender`], default [`Gender::Unknown`]
//!
//! Keys match exactly (case-sensitive, no trimming).

use serde::Serialize;

use crate::types::Language;

/// Life status of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifeStatus {
    Alive,
    Dead,
    Unknown,
}

/// Best-effort gender of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

const STATUS_TABLE: &[(&str, LifeStatus)] = &[
    ("alive", LifeStatus::Alive),
    ("dead", LifeStatus::Dead),
];

const GENDER_TABLE: &[(&str, Gender)] = &[
    ("Luffy", Gender::Male),
    ("Zoro", Gender::Male),
    ("Sanji", Gender::Male),
    ("Nami", Gender::Female),
    ("Robin", Gender::Female),
    ("Boa Hancock", Gender::Female),
];

fn lookup<V: Copy>(table: &[(&str, V)], key: &str) -> Option<V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

impl LifeStatus {
    /// Maps a raw API status; missing or unmatched values give `Unknown`.
    pub fn from_raw(status: Option<&str>) -> Self {
        status
            .and_then(|s| lookup(STATUS_TABLE, s))
            .unwrap_or(LifeStatus::Unknown)
    }

    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::EnUs, LifeStatus::Alive) => "Alive",
            (Language::EnUs, LifeStatus::Dead) => "Dead",
            (Language::EnUs, LifeStatus::Unknown) => "Unknown",
            (Language::PtBr, LifeStatus::Alive) => "Vivo",
            (Language::PtBr, LifeStatus::Dead) => "Morto",
            (Language::PtBr, LifeStatus::Unknown) => "Desconhecido",
        }
    }
}

impl Gender {
    pub fn label(self, language: Language) -> &'static str {
        match (language, self) {
            (Language::EnUs, Gender::Male) => "Male",
            (Language::EnUs, Gender::Female) => "Female",
            (Language::EnUs, Gender::Unknown) => "Unknown",
            (Language::PtBr, Gender::Male) => "Homem",
            (Language::PtBr, Gender::Female) => "Mulher",
            (Language::PtBr, Gender::Unknown) => "Desconhecido",
        }
    }
}

/// Translated label for a raw status.
pub fn translate_status(status: Option<&str>, language: Language) -> &'static str {
    LifeStatus::from_raw(status).label(language)
}

/// Gender guess from the exact character name; unlisted names are `Unknown`.
pub fn guess_gender(name: &str) -> Gender {
    lookup(GENDER_TABLE, name).unwrap_or(Gender::Unknown)
}
