//! Localized text for catalogue labels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported portal languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// French
    Fr,
}

impl Language {
    /// All supported languages, default first
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    /// ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

/// Static text in every supported language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub en: &'static str,
    pub fr: &'static str,
}

impl LocalizedText {
    pub const fn new(en: &'static str, fr: &'static str) -> Self {
        Self { en, fr }
    }

    /// Text for `language`, falling back to English when the translation is missing
    pub fn get(&self, language: Language) -> &'static str {
        let text = match language {
            Language::En => self.en,
            Language::Fr => self.fr,
        };
        if text.is_empty() { self.en } else { text }
    }
}
