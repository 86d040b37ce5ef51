//! Conversion target catalog and recommendations.
//!
//! The catalog is static, read-only data mapping each category to its
//! recommended and complete target format lists. [`recommend`] derives a
//! fresh [`ConversionOptions`] per request: the current format is filtered
//! out of both lists and the category's anchor format is promoted to the
//! front of the recommendations.

use crate::types::{ConversionOptions, FileCategory};

/// Static conversion targets for one category.
#[derive(Debug)]
pub struct CategoryConversions {
    /// The category these targets apply to.
    pub category: FileCategory,
    /// Highlighted targets, in presentation order.
    pub recommended: &'static [&'static str],
    /// Every supported target, in presentation order.
    pub all_formats: &'static [&'static str],
}

/// The conversion catalog. Unknown has no entry.
pub const CONVERSION_CATALOG: &[CategoryConversions] = &[
    CategoryConversions {
        category: FileCategory::Document,
        recommended: &["pdf", "docx", "txt"],
        all_formats: &[
            "pdf", "docx", "doc", "txt", "rtf", "odt", "html", "md", "epub", "xps", "oxps",
        ],
    },
    CategoryConversions {
        category: FileCategory::Image,
        recommended: &["jpg", "png"],
        all_formats: &[
            "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "pdf", "heic",
        ],
    },
    CategoryConversions {
        category: FileCategory::Video,
        recommended: &["mp4", "webm", "avi"],
        all_formats: &[
            "mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "gif",
        ],
    },
    CategoryConversions {
        category: FileCategory::Audio,
        recommended: &["mp3", "wav", "flac"],
        all_formats: &[
            "mp3", "wav", "flac", "aac", "ogg", "wma", "m4a", "opus", "alac",
        ],
    },
    CategoryConversions {
        category: FileCategory::Archive,
        recommended: &["zip", "7z", "tar"],
        all_formats: &[
            "zip", "rar", "7z", "tar", "gz", "bz2", "xz", "tar.gz", "tar.bz2",
        ],
    },
];

/// The single most preferred target for a category, promoted to the front
/// of the recommended list when it is not the current format.
pub fn anchor_format(category: FileCategory) -> Option<&'static str> {
    match category {
        FileCategory::Image => Some("webp"),
        FileCategory::Video => Some("mp4"),
        FileCategory::Document => Some("pdf"),
        FileCategory::Audio => Some("mp3"),
        FileCategory::Archive | FileCategory::Unknown => None,
    }
}

fn catalog_entry(category: FileCategory) -> Option<&'static CategoryConversions> {
    CONVERSION_CATALOG.iter().find(|c| c.category == category)
}

/// Derive conversion options for a category and the file's current format.
///
/// The current format is never offered as a target of itself. Categories
/// without a catalog entry yield empty options; this function never fails.
///
/// # Examples
///
/// ```
/// use formatforge_common::catalog::recommend;
/// use formatforge_common::FileCategory;
///
/// let options = recommend(FileCategory::Image, "jpg");
/// assert_eq!(options.recommended[0], "webp");
/// assert!(!options.all_formats.iter().any(|f| f == "jpg"));
/// ```
pub fn recommend(category: FileCategory, current_format: &str) -> ConversionOptions {
    let Some(entry) = catalog_entry(category) else {
        return ConversionOptions::default();
    };

    let keep = |f: &&&str| !f.eq_ignore_ascii_case(current_format);

    let mut options = ConversionOptions {
        recommended: entry
            .recommended
            .iter()
            .filter(keep)
            .map(|f| f.to_string())
            .collect(),
        all_formats: entry
            .all_formats
            .iter()
            .filter(keep)
            .map(|f| f.to_string())
            .collect(),
    };

    if let Some(anchor) = anchor_format(category) {
        if !anchor.eq_ignore_ascii_case(current_format)
            && !options.recommended.iter().any(|f| f == anchor)
        {
            options.recommended.insert(0, anchor.to_string());
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_format_never_offered() {
        for entry in CONVERSION_CATALOG {
            for format in entry.all_formats {
                let options = recommend(entry.category, format);
                assert!(
                    !options
                        .recommended
                        .iter()
                        .any(|f| f.eq_ignore_ascii_case(format)),
                    "{format} recommended as a target of itself"
                );
                assert!(
                    !options
                        .all_formats
                        .iter()
                        .any(|f| f.eq_ignore_ascii_case(format)),
                    "{format} listed as a target of itself"
                );
            }
        }
    }

    #[test]
    fn test_image_anchor_promoted() {
        let options = recommend(FileCategory::Image, "jpg");
        assert_eq!(options.recommended, vec!["webp", "png"]);
        assert!(!options.recommended.iter().any(|f| f == "jpg"));
        assert_eq!(options.recommended.iter().filter(|f| *f == "webp").count(), 1);
    }

    #[test]
    fn test_anchor_not_inserted_for_itself() {
        let options = recommend(FileCategory::Image, "webp");
        assert!(!options.recommended.iter().any(|f| f == "webp"));
        assert_eq!(options.recommended, vec!["jpg", "png"]);
    }

    #[test]
    fn test_video_anchor_already_first() {
        // mp4 is already the first recommended video target; converting from
        // mov must not duplicate it.
        let options = recommend(FileCategory::Video, "mov");
        assert_eq!(options.recommended, vec!["mp4", "webm", "avi"]);
    }

    #[test]
    fn test_document_anchor() {
        let options = recommend(FileCategory::Document, "docx");
        assert_eq!(options.recommended[0], "pdf");
        assert!(!options.recommended.iter().any(|f| f == "docx"));
    }

    #[test]
    fn test_audio_anchor() {
        let options = recommend(FileCategory::Audio, "flac");
        assert_eq!(options.recommended, vec!["mp3", "wav"]);
    }

    #[test]
    fn test_archive_has_no_anchor() {
        let options = recommend(FileCategory::Archive, "rar");
        assert_eq!(options.recommended, vec!["zip", "7z", "tar"]);
    }

    #[test]
    fn test_unknown_category_yields_empty_options() {
        let options = recommend(FileCategory::Unknown, "xyz");
        assert!(options.is_empty());
    }

    #[test]
    fn test_filtering_is_case_insensitive() {
        let options = recommend(FileCategory::Video, "MP4");
        assert!(!options.recommended.iter().any(|f| f == "mp4"));
        assert!(!options.all_formats.iter().any(|f| f == "mp4"));
    }

    #[test]
    fn test_catalog_order_preserved() {
        let options = recommend(FileCategory::Video, "avi");
        assert_eq!(
            options.all_formats,
            vec!["mp4", "mkv", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "gif"]
        );
    }

    #[test]
    fn test_gif_is_a_video_target() {
        let options = recommend(FileCategory::Video, "mov");
        assert!(options.all_formats.iter().any(|f| f == "gif"));
    }

    #[test]
    fn test_fresh_copies_per_call() {
        let a = recommend(FileCategory::Image, "png");
        let b = recommend(FileCategory::Image, "png");
        assert_eq!(a, b);
        // Mutating one result must not affect a later request.
        let mut c = recommend(FileCategory::Image, "png");
        c.recommended.clear();
        assert_eq!(recommend(FileCategory::Image, "png"), a);
    }
}
