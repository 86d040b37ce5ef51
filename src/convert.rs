//! Conversion job orchestration.
//!
//! A [`ConversionJob`] is the per-invocation unit of work: it carries the
//! source, destination, and quality level, owns the cancellation token for
//! the running child process, and bridges the runner's progress callback to
//! whatever the front end renders. Jobs are created when a conversion
//! starts and dropped when it completes, fails, or is cancelled.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use formatforge_common::{FileCategory, Result};

/// One conversion attempt.
#[derive(Debug)]
pub struct ConversionJob {
    /// Job identifier, for logs.
    pub id: Uuid,
    /// Source video file.
    pub input: PathBuf,
    /// Destination the converter writes to.
    pub output: PathBuf,
    /// Quality level 0-100.
    pub quality: u8,
    /// When the job was created.
    pub started_at: DateTime<Utc>,
    cancel: CancellationToken,
}

impl ConversionJob {
    /// Create a new job. The destination will be overwritten if it exists.
    pub fn new(input: PathBuf, output: PathBuf, quality: u8) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            output,
            quality,
            started_at: Utc::now(),
            cancel: CancellationToken::new(),
        }
    }

    /// Token that cancels this job; triggering it kills the child process.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the conversion, forwarding progress percentages to `on_progress`
    /// in the order they are observed.
    pub async fn run(&self, converter: &Path, on_progress: impl FnMut(u8)) -> Result<()> {
        tracing::info!(
            "starting conversion job {}: {:?} -> {:?} (quality={})",
            self.id,
            self.input,
            self.output,
            self.quality
        );

        formatforge_av::convert_video_to_animated_image(
            converter,
            &self.input,
            &self.output,
            self.quality,
            on_progress,
            Some(self.cancel.clone()),
        )
        .await
    }
}

/// Whether a (category, target) pair is backed by the real converter.
///
/// Everything else would be a simulated conversion in the original design
/// and is deliberately not implemented.
pub fn is_real_conversion(category: FileCategory, target: &str) -> bool {
    category == FileCategory::Video && target.eq_ignore_ascii_case("gif")
}

/// Compute the working destination for an input: the input's stem with a
/// `.gif` extension, placed in `output_dir` or the system temp directory.
pub fn default_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir);
    dir.join(format!("{stem}.gif"))
}

/// Deliver a produced artifact to its final destination.
///
/// The work file is copied (overwriting any existing file) and then
/// removed, best effort.
pub fn deliver(work: &Path, dest: &Path) -> Result<()> {
    std::fs::copy(work, dest)?;
    if let Err(e) = std::fs::remove_file(work) {
        tracing::debug!("leaving work file {}: {e}", work.display());
    }
    Ok(())
}

/// Detail text for a progress percentage, mirroring the conversion phases.
pub fn phase_detail(pct: u8) -> &'static str {
    if pct < 30 {
        "Analyzing video..."
    } else if pct < 70 {
        "Converting to GIF..."
    } else {
        "Finalizing..."
    }
}

/// Human-readable file size.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut len = bytes as f64;
    let mut order = 0;

    while len >= 1024.0 && order < UNITS.len() - 1 {
        order += 1;
        len /= 1024.0;
    }

    if order == 0 {
        format!("{bytes} B")
    } else {
        format!("{len:.2} {}", UNITS[order])
    }
}
