//! Core type definitions for file categories and conversion options.
//!
//! All enums are serialized in lowercase. [`DetectedFileType`] and
//! [`ConversionOptions`] are plain value objects: produced fresh per call,
//! never mutated afterwards, safe to copy and share.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse kind of a file, determined from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    /// Text and office documents (PDF, DOCX, spreadsheets, ...).
    Document,
    /// Still images.
    Image,
    /// Video containers.
    Video,
    /// Audio files.
    Audio,
    /// Compressed archives and disk images.
    Archive,
    /// Anything that matched no known extension set.
    Unknown,
}

impl FileCategory {
    /// Human-readable capitalized name, used in descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Image => "Image",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Archive => "Archive",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Audio => write!(f, "audio"),
            Self::Archive => write!(f, "archive"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of classifying a single file.
///
/// Value semantics only: two detections with equal fields are
/// interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedFileType {
    /// The category the extension mapped to.
    pub category: FileCategory,
    /// Lowercase extension without the leading dot, or `"unknown"`.
    pub format: String,
    /// Display glyph for the category.
    pub icon: &'static str,
    /// Human-readable description, e.g. `"Video file"`.
    pub description: String,
}

impl DetectedFileType {
    /// The terminal classification for unrecognized or missing files.
    pub fn unknown() -> Self {
        Self {
            category: FileCategory::Unknown,
            format: "unknown".to_string(),
            icon: "❓",
            description: "Unknown file type".to_string(),
        }
    }
}

/// Conversion targets for one classified file.
///
/// Both sequences are freshly allocated per request and ordered for
/// presentation; the first recommended entry is the preferred default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Highlighted targets, best first.
    pub recommended: Vec<String>,
    /// Every viable target for the category.
    pub all_formats: Vec<String>,
}

impl ConversionOptions {
    /// True when the category offered no targets at all.
    pub fn is_empty(&self) -> bool {
        self.recommended.is_empty() && self.all_formats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serialization() {
        let c = FileCategory::Video;
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#""video""#);

        let c: FileCategory = serde_json::from_str(r#""archive""#).unwrap();
        assert_eq!(c, FileCategory::Archive);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(FileCategory::Document.to_string(), "document");
        assert_eq!(FileCategory::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_category_label() {
        assert_eq!(FileCategory::Image.label(), "Image");
        assert_eq!(FileCategory::Audio.label(), "Audio");
    }

    #[test]
    fn test_unknown_detection() {
        let d = DetectedFileType::unknown();
        assert_eq!(d.category, FileCategory::Unknown);
        assert_eq!(d.format, "unknown");
        assert_eq!(d.icon, "❓");
        assert_eq!(d.description, "Unknown file type");
    }

    #[test]
    fn test_detection_value_semantics() {
        let a = DetectedFileType::unknown();
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_options_default_is_empty() {
        let options = ConversionOptions::default();
        assert!(options.is_empty());
    }

    #[test]
    fn test_options_serialization() {
        let options = ConversionOptions {
            recommended: vec!["webp".to_string()],
            all_formats: vec!["png".to_string(), "webp".to_string()],
        };
        let json = serde_json::to_string(&options).unwrap();
        let back: ConversionOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, back);
    }

    #[test]
    fn test_category_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(FileCategory::Video);
        set.insert(FileCategory::Audio);
        assert!(set.contains(&FileCategory::Video));
        assert!(!set.contains(&FileCategory::Archive));
    }
}
