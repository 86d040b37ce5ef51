//! Formatforge-Common: Shared types, classification, and format catalog.
//!
//! This crate provides the pure, synchronous core used across formatforge:
//!
//! - **Core Types**: The closed [`FileCategory`] enum and the
//!   [`DetectedFileType`] / [`ConversionOptions`] value objects
//! - **Classification**: Extension-based file type detection
//! - **Catalog**: Per-category conversion target tables and recommendations
//! - **Error Handling**: The unified error type for the conversion pathway
//!
//! Classification and recommendation are total functions: they never fail,
//! falling back to the Unknown category and empty option lists instead.
//!
//! # Examples
//!
//! ```
//! use formatforge_common::{catalog, classify, FileCategory};
//! use std::path::Path;
//!
//! let detected = classify::classify_name(Path::new("clip.mov"));
//! assert_eq!(detected.category, FileCategory::Video);
//! assert_eq!(detected.format, "mov");
//!
//! let options = catalog::recommend(detected.category, &detected.format);
//! assert_eq!(options.recommended.first().map(String::as_str), Some("mp4"));
//! ```

pub mod catalog;
pub mod classify;
pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{ConversionOptions, DetectedFileType, FileCategory};
