//! # formatforge-av
//!
//! External converter orchestration for formatforge.
//!
//! This crate owns the only non-simulated conversion pathway: transcoding a
//! video file into an animated GIF by driving an external ffmpeg binary. It
//! provides:
//!
//! - Converter discovery and availability probing ([`tools`])
//! - Async subprocess execution with a live, line-oriented stderr feed and
//!   cancellation support ([`command`])
//! - Progress extraction from ffmpeg's diagnostic output ([`progress`])
//! - The video → animated image conversion itself ([`animate`])
//!
//! ## Example
//!
//! ```no_run
//! use formatforge_av::{convert_video_to_animated_image, tools};
//! use std::path::Path;
//!
//! # async fn example() -> formatforge_common::Result<()> {
//! let converter = tools::locate_converter();
//! convert_video_to_animated_image(
//!     &converter,
//!     Path::new("clip.mov"),
//!     Path::new("/tmp/clip.gif"),
//!     75,
//!     |pct| println!("{pct}%"),
//!     None,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod animate;
pub mod command;
pub mod progress;
pub mod tools;

// Re-exports
pub use animate::{convert_video_to_animated_image, quality_tier, QualityTier};
pub use command::{StreamedOutput, ToolCommand, ToolOutput};
pub use progress::ProgressParser;
pub use tools::{converter_info, is_converter_available, locate_converter, ToolInfo};
