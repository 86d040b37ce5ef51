//! Video to animated image (GIF) conversion.
//!
//! The one real, non-simulated conversion pathway: drive the external
//! converter to transcode a video into an animated GIF, streaming progress
//! back to the caller as it is discovered in the diagnostic output.

use std::path::Path;

use tokio_util::sync::CancellationToken;

use formatforge_common::{Error, Result};

use crate::command::{error_digest, ToolCommand};
use crate::progress::ProgressParser;
use crate::tools;

/// Encoding parameters derived from the caller's 0–100 quality level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityTier {
    /// Output frame rate.
    pub frame_rate: u32,
    /// Output width in pixels; height follows the source aspect ratio.
    pub width: u32,
}

/// Bucket a quality level into an encoding tier.
///
/// - above 70: 15 fps at 480 px wide
/// - above 40: 10 fps at 360 px wide
/// - otherwise: 5 fps at 240 px wide
pub fn quality_tier(quality: u8) -> QualityTier {
    if quality > 70 {
        QualityTier {
            frame_rate: 15,
            width: 480,
        }
    } else if quality > 40 {
        QualityTier {
            frame_rate: 10,
            width: 360,
        }
    } else {
        QualityTier {
            frame_rate: 5,
            width: 240,
        }
    }
}

/// Build the converter invocation for one conversion.
///
/// The filter chain fixes the frame rate, scales to the tier width with the
/// height derived from the aspect ratio, and resamples with lanczos. The
/// destination is always overwritten.
fn build_args(input: &Path, output: &Path, tier: QualityTier) -> Vec<String> {
    vec![
        "-y".to_string(),
        "-i".to_string(),
        input.to_string_lossy().to_string(),
        "-vf".to_string(),
        format!(
            "fps={},scale={}:-1:flags=lanczos",
            tier.frame_rate, tier.width
        ),
        "-c:v".to_string(),
        "gif".to_string(),
        output.to_string_lossy().to_string(),
    ]
}

/// Transcode a video file into an animated GIF.
///
/// Progress percentages (0–100) are pushed to `progress` in the order their
/// markers are observed in the converter's diagnostic stream. The call
/// resolves only once the child process has exited and its output has been
/// fully drained. Triggering `cancel` kills the child process.
///
/// On success the destination file is owned by the caller. On failure or
/// cancellation a partially-written destination is removed (best effort) so
/// it cannot be mistaken for valid output.
///
/// # Errors
///
/// - [`Error::ConverterUnavailable`] when the binary does not answer its
///   version probe; no conversion process is spawned in that case.
/// - [`Error::ConversionFailed`] when the process exits non-zero or an I/O
///   fault interrupts orchestration.
/// - [`Error::Cancelled`] when `cancel` was triggered.
///
/// No retries are performed; retry policy belongs to the caller.
pub async fn convert_video_to_animated_image(
    converter: &Path,
    input: &Path,
    output: &Path,
    quality: u8,
    mut progress: impl FnMut(u8),
    cancel: Option<CancellationToken>,
) -> Result<()> {
    if !tools::check_converter(converter) {
        return Err(Error::converter_unavailable(format!(
            "{} did not respond to its version probe",
            converter.display()
        )));
    }

    let tier = quality_tier(quality);

    tracing::info!(
        "animated image encode: {:?} -> {:?} (quality={}, fps={}, width={})",
        input,
        output,
        quality,
        tier.frame_rate,
        tier.width
    );

    let mut cmd = ToolCommand::new(converter.to_path_buf());
    cmd.args(build_args(input, output, tier));

    let mut parser = ProgressParser::new();
    let result = cmd
        .execute_streaming(
            |line| {
                if let Some(pct) = parser.parse_line(line) {
                    progress(pct);
                }
            },
            cancel,
        )
        .await;

    match result {
        Ok(out) if out.status.success() => {
            tracing::info!("conversion complete: {:?}", output);
            Ok(())
        }
        Ok(out) => {
            discard_output(output);
            Err(Error::conversion_failed(format!(
                "converter exited with status {}: {}",
                out.status,
                error_digest(&out.stderr)
            )))
        }
        Err(err) => {
            discard_output(output);
            Err(err)
        }
    }
}

/// Best-effort removal of an incomplete destination file.
fn discard_output(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            tracing::warn!("failed to remove incomplete output {}: {e}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(quality_tier(100), QualityTier { frame_rate: 15, width: 480 });
        assert_eq!(quality_tier(71), QualityTier { frame_rate: 15, width: 480 });
        assert_eq!(quality_tier(70), QualityTier { frame_rate: 10, width: 360 });
        assert_eq!(quality_tier(41), QualityTier { frame_rate: 10, width: 360 });
        assert_eq!(quality_tier(40), QualityTier { frame_rate: 5, width: 240 });
        assert_eq!(quality_tier(0), QualityTier { frame_rate: 5, width: 240 });
    }

    #[test]
    fn test_build_args_shape() {
        let args = build_args(
            Path::new("/in/clip.mov"),
            Path::new("/out/clip.gif"),
            quality_tier(80),
        );
        assert_eq!(args[0], "-y");
        assert_eq!(args[1], "-i");
        assert_eq!(args[2], "/in/clip.mov");
        assert_eq!(args[3], "-vf");
        assert_eq!(args[4], "fps=15,scale=480:-1:flags=lanczos");
        assert_eq!(args[5], "-c:v");
        assert_eq!(args[6], "gif");
        assert_eq!(args[7], "/out/clip.gif");
    }

    #[test]
    fn test_build_args_low_quality_filter() {
        let args = build_args(Path::new("a.mp4"), Path::new("a.gif"), quality_tier(10));
        assert!(args.contains(&"fps=5,scale=240:-1:flags=lanczos".to_string()));
    }

    #[tokio::test]
    async fn test_unavailable_converter_short_circuits() {
        let result = convert_video_to_animated_image(
            &PathBuf::from("/nonexistent_converter_12345"),
            Path::new("in.mov"),
            Path::new("out.gif"),
            75,
            |_| {},
            None,
        )
        .await;

        assert!(matches!(result, Err(Error::ConverterUnavailable { .. })));
    }
}
