//! File type classification by extension.
//!
//! Classification is a pure metadata heuristic: only the extension is
//! examined, file contents are never read. The extension tables are static,
//! read-only, and pairwise disjoint; categories are checked in declaration
//! order and the first match wins.

use crate::types::{DetectedFileType, FileCategory};
use std::path::Path;

/// Static per-category classification data.
#[derive(Debug)]
pub struct CategoryProfile {
    /// The category this profile classifies into.
    pub category: FileCategory,
    /// Display glyph for files of this category.
    pub icon: &'static str,
    /// Lowercase extensions (without dots) that map to this category.
    pub extensions: &'static [&'static str],
}

/// Classification tables, in the fixed order they are consulted.
pub const CATEGORY_PROFILES: &[CategoryProfile] = &[
    CategoryProfile {
        category: FileCategory::Document,
        icon: "📄",
        extensions: &[
            "pdf", "doc", "docx", "txt", "rtf", "odt", "xls", "xlsx", "ppt", "pptx", "csv",
        ],
    },
    CategoryProfile {
        category: FileCategory::Image,
        icon: "🖼️",
        extensions: &[
            "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif", "heic",
        ],
    },
    CategoryProfile {
        category: FileCategory::Video,
        icon: "🎬",
        extensions: &[
            "mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg",
        ],
    },
    CategoryProfile {
        category: FileCategory::Audio,
        icon: "🎵",
        extensions: &[
            "mp3", "wav", "flac", "aac", "ogg", "wma", "m4a", "opus", "alac",
        ],
    },
    CategoryProfile {
        category: FileCategory::Archive,
        icon: "📦",
        extensions: &["zip", "rar", "7z", "tar", "gz", "bz2", "xz", "iso"],
    },
];

/// Classify an existing file by its extension.
///
/// Returns the Unknown detection when the path is not an existing regular
/// file or its extension matches no category. Never fails.
///
/// # Examples
///
/// ```no_run
/// use formatforge_common::classify::classify;
/// use formatforge_common::FileCategory;
/// use std::path::Path;
///
/// let detected = classify(Path::new("/media/holiday.mp4"));
/// assert_eq!(detected.category, FileCategory::Video);
/// ```
pub fn classify(path: &Path) -> DetectedFileType {
    if !path.is_file() {
        return DetectedFileType::unknown();
    }
    classify_name(path)
}

/// Classify by extension alone, without touching the filesystem.
///
/// # Examples
///
/// ```
/// use formatforge_common::classify::classify_name;
/// use formatforge_common::FileCategory;
/// use std::path::Path;
///
/// assert_eq!(classify_name(Path::new("song.flac")).category, FileCategory::Audio);
/// assert_eq!(classify_name(Path::new("mystery.xyz")).category, FileCategory::Unknown);
/// ```
pub fn classify_name(path: &Path) -> DetectedFileType {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return DetectedFileType::unknown(),
    };

    for profile in CATEGORY_PROFILES {
        if profile.extensions.contains(&ext.as_str()) {
            return DetectedFileType {
                category: profile.category,
                format: ext,
                icon: profile.icon,
                description: format!("{} file", profile.category.label()),
            };
        }
    }

    DetectedFileType::unknown()
}

/// Check if a path has a video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use formatforge_common::classify::is_video_file;
///
/// assert!(is_video_file(Path::new("movie.mkv")));
/// assert!(!is_video_file(Path::new("poster.jpg")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    classify_name(path).category == FileCategory::Video
}

/// Check if a path has an image file extension.
pub fn is_image_file(path: &Path) -> bool {
    classify_name(path).category == FileCategory::Image
}

/// Get the extension list for a category, if it has one.
#[must_use]
pub fn extensions_for(category: FileCategory) -> Option<&'static [&'static str]> {
    CATEGORY_PROFILES
        .iter()
        .find(|p| p.category == category)
        .map(|p| p.extensions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_extension_maps_to_its_category() {
        for profile in CATEGORY_PROFILES {
            for ext in profile.extensions {
                let detected = classify_name(Path::new(&format!("sample.{ext}")));
                assert_eq!(
                    detected.category, profile.category,
                    "extension {ext} classified as {:?}",
                    detected.category
                );
                assert_eq!(detected.format, *ext);
                assert_eq!(detected.icon, profile.icon);
                assert_eq!(
                    detected.description,
                    format!("{} file", profile.category.label())
                );
            }
        }
    }

    #[test]
    fn test_extension_sets_are_disjoint() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        for profile in CATEGORY_PROFILES {
            for ext in profile.extensions {
                assert!(seen.insert(*ext), "extension {ext} appears twice");
            }
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify_name(Path::new("MOVIE.MKV")).category,
            FileCategory::Video
        );
        assert_eq!(classify_name(Path::new("Photo.JpG")).format, "jpg");
    }

    #[test]
    fn test_unknown_extension() {
        let detected = classify_name(Path::new("data.xyz"));
        assert_eq!(detected.category, FileCategory::Unknown);
        assert_eq!(detected.format, "unknown");
        assert_eq!(detected.icon, "❓");
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(
            classify_name(Path::new("Makefile")).category,
            FileCategory::Unknown
        );
        assert_eq!(classify_name(Path::new("")).category, FileCategory::Unknown);
    }

    #[test]
    fn test_multiple_dots() {
        let detected = classify_name(Path::new("movie.1080p.mkv"));
        assert_eq!(detected.category, FileCategory::Video);
        assert_eq!(detected.format, "mkv");
    }

    #[test]
    fn test_hidden_file() {
        assert_eq!(
            classify_name(Path::new(".hidden.png")).category,
            FileCategory::Image
        );
    }

    #[test]
    fn test_classify_nonexistent_path() {
        let detected = classify(Path::new("/definitely/not/here/clip.mp4"));
        assert_eq!(detected.category, FileCategory::Unknown);
        assert_eq!(detected.format, "unknown");
    }

    #[test]
    fn test_classify_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.mov");
        std::fs::write(&path, b"not really a video").unwrap();

        let detected = classify(&path);
        assert_eq!(detected.category, FileCategory::Video);
        assert_eq!(detected.format, "mov");
        assert_eq!(detected.icon, "🎬");
    }

    #[test]
    fn test_classify_directory_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("folder.mp4");
        std::fs::create_dir(&sub).unwrap();
        assert_eq!(classify(&sub).category, FileCategory::Unknown);
    }

    #[test]
    fn test_predicates() {
        assert!(is_video_file(Path::new("a.webm")));
        assert!(is_image_file(Path::new("a.heic")));
        assert!(!is_video_file(Path::new("a.heic")));
        assert!(!is_image_file(Path::new("a.webm")));
    }

    #[test]
    fn test_extensions_for() {
        let video = extensions_for(FileCategory::Video).unwrap();
        assert!(video.contains(&"mp4"));
        assert!(video.contains(&"mov"));
        assert!(extensions_for(FileCategory::Unknown).is_none());
    }

    #[test]
    fn test_deterministic() {
        let a = classify_name(Path::new("x.webp"));
        let b = classify_name(Path::new("x.webp"));
        assert_eq!(a, b);
    }
}
