//! Service category model
//!
//! A fee is always quoted for exactly one category. The front end selects a
//! main category and, for rough cuts only, a media type; both collapse into
//! a single [`Category`] here so the rate key is derived in one place.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main category as presented to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MainCategory {
    /// Preliminary, unpolished edit
    #[default]
    Rough,
    /// Complete, polished edit
    Full,
}

/// Media type of a rough cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Audio-only rough cut
    Audio,
    /// Video rough cut
    #[default]
    Video,
}

/// Billable service category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Rough cut, audio only
    RoughAudio,
    /// Rough cut, video
    RoughVideo,
    /// Full editing
    FullEdit,
}

impl Category {
    /// All categories, in rate card order
    pub const ALL: [Category; 3] = [
        Category::RoughAudio,
        Category::RoughVideo,
        Category::FullEdit,
    ];

    /// Resolve the category from the main category and media type.
    ///
    /// The media type only matters for rough cuts.
    pub fn from_selection(main: MainCategory, media: MediaType) -> Self {
        match (main, media) {
            (MainCategory::Full, _) => Category::FullEdit,
            (MainCategory::Rough, MediaType::Audio) => Category::RoughAudio,
            (MainCategory::Rough, MediaType::Video) => Category::RoughVideo,
        }
    }

    /// Key of the rate entry priced for this category
    pub fn rate_key(&self) -> &'static str {
        match self {
            Category::RoughAudio => "rough_audio",
            Category::RoughVideo => "rough_video",
            Category::FullEdit => "full_edit",
        }
    }

    /// Parse a rate key
    pub fn from_rate_key(key: &str) -> Option<Self> {
        match key {
            "rough_audio" => Some(Category::RoughAudio),
            "rough_video" => Some(Category::RoughVideo),
            "full_edit" => Some(Category::FullEdit),
            _ => None,
        }
    }

    /// Label used when the rate card has none
    pub fn default_label(&self) -> &'static str {
        match self {
            Category::RoughAudio => "Rough Cut (Audio)",
            Category::RoughVideo => "Rough Cut (Video)",
            Category::FullEdit => "Full Editing",
        }
    }

    /// Whether full-edit-only surcharges apply
    #[inline]
    pub fn is_full_edit(&self) -> bool {
        matches!(self, Category::FullEdit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rate_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selection() {
        assert_eq!(
            Category::from_selection(MainCategory::Rough, MediaType::Audio),
            Category::RoughAudio
        );
        assert_eq!(
            Category::from_selection(MainCategory::Rough, MediaType::Video),
            Category::RoughVideo
        );
        // Media type is irrelevant for full edits
        assert_eq!(
            Category::from_selection(MainCategory::Full, MediaType::Audio),
            Category::FullEdit
        );
    }

    #[test]
    fn test_rate_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_rate_key(category.rate_key()), Some(category));
        }
        assert_eq!(Category::from_rate_key("color_grade"), None);
    }

    #[test]
    fn test_serde_uses_rate_keys() {
        let json = serde_json::to_string(&Category::FullEdit).unwrap();
        assert_eq!(json, "\"full_edit\"");

        let main: MainCategory = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(main, MainCategory::Full);
    }
}
