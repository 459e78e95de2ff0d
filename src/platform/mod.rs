//! Per-platform character budgets and thread previews.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThreadError;
use crate::format::number_segments;
use crate::types::char_len;

/// Characters kept free in every previewed post for `"NN/NN "` numbering.
pub const NUMBERING_RESERVE: usize = 6;

/// A publishing target with its own length rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    LinkedIn,
    Facebook,
    Instagram,
    Email,
    Blog,
    Sms,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Email,
        Platform::Blog,
        Platform::Sms,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::LinkedIn => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Email => "email",
            Platform::Blog => "blog",
            Platform::Sms => "sms",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Twitter => "Twitter/X",
            Platform::LinkedIn => "LinkedIn",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Email => "Email",
            Platform::Blog => "Blog",
            Platform::Sms => "SMS",
        }
    }

    /// Character budget, `None` when unbounded.
    pub fn char_limit(&self) -> Option<usize> {
        match self {
            Platform::Twitter => Some(280),
            Platform::LinkedIn => Some(3000),
            Platform::Facebook => Some(63206),
            Platform::Instagram => Some(2200),
            Platform::Email | Platform::Blog => None,
            Platform::Sms => Some(160),
        }
    }

    pub fn supports_threads(&self) -> bool {
        matches!(self, Platform::Twitter)
    }

    /// Maximum posts per thread on thread-capable platforms.
    pub fn thread_limit(&self) -> Option<usize> {
        match self {
            Platform::Twitter => Some(25),
            _ => None,
        }
    }

    pub fn limit(&self) -> PlatformLimit {
        PlatformLimit {
            platform: *self,
            name: self.display_name().to_string(),
            char_limit: self.char_limit(),
            supports_threads: self.supports_threads(),
            thread_limit: self.thread_limit(),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Platform {
    type Err = ThreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        match key.as_str() {
            "x" => Ok(Platform::Twitter),
            _ => Platform::ALL
                .into_iter()
                .find(|p| p.key() == key)
                .ok_or_else(|| ThreadError::UnknownPlatform(s.to_string())),
        }
    }
}

/// Length rules of one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformLimit {
    pub platform: Platform,
    pub name: String,
    pub char_limit: Option<usize>,
    pub supports_threads: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_limit: Option<usize>,
}

/// Limits of every known platform, in a stable order
pub fn all_limits() -> Vec<PlatformLimit> {
    Platform::ALL.iter().map(Platform::limit).collect()
}

/// How a text would land on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformPreview {
    pub platform: Platform,
    pub content: String,
    pub char_count: usize,
    pub char_limit: Option<usize>,
    pub is_within_limit: bool,
    /// Numbered posts, present only when the text overflows a
    /// thread-capable platform
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<Vec<String>>,
}

/// Preview `text` on `platform`.
pub fn preview(platform: Platform, text: &str) -> PlatformPreview {
    let char_count = char_len(text);
    let char_limit = platform.char_limit();
    let is_within_limit = char_limit.is_none_or(|limit| char_count <= limit);

    let threads = match char_limit {
        Some(limit) if platform.supports_threads() && !is_within_limit => {
            Some(number_segments(&wrap_words(text, limit)))
        }
        _ => None,
    };

    PlatformPreview {
        platform,
        content: text.to_string(),
        char_count,
        char_limit,
        is_within_limit,
        threads,
    }
}

/// Greedy word wrap into chunks that leave [`NUMBERING_RESERVE`] characters
/// free under `char_limit`.
///
/// Words are rejoined with single spaces. A word longer than the room
/// available becomes its own chunk.
pub fn wrap_words(text: &str, char_limit: usize) -> Vec<String> {
    let room = char_limit.saturating_sub(NUMBERING_RESERVE).max(1);
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = char_len(word);
        let added = if current.is_empty() { word_len } else { word_len + 1 };

        if current_len + added > room && !current.is_empty() {
            chunks.push(current.join(" "));
            current.clear();
            current_len = word_len;
        } else {
            current_len += added;
        }
        current.push(word);
    }

    if !current.is_empty() {
        chunks.push(current.join(" "));
    }

    chunks
}
