//! Builder for executing external converter invocations.
//!
//! Two execution modes: [`ToolCommand::execute`] buffers everything and
//! fails on a non-zero exit, while [`ToolCommand::execute_streaming`]
//! delivers the diagnostic stream line-by-line as it arrives and leaves the
//! exit-status decision to the caller. Streaming is the mode the conversion
//! pathway uses: ffmpeg writes its progress text to stderr, terminated by
//! carriage returns for in-place updates, so both CR and LF are treated as
//! line boundaries and partial lines are held until their terminator
//! arrives.

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio_util::sync::CancellationToken;

use formatforge_common::{Error, Result};

/// Output captured from a buffered tool execution.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Captured standard output (lossy UTF-8).
    pub stdout: String,
    /// Captured standard error (lossy UTF-8).
    pub stderr: String,
}

/// Output of a streaming execution: the exit status plus the accumulated
/// diagnostic lines (one per line, LF-joined).
#[derive(Debug, Clone)]
pub struct StreamedOutput {
    /// Process exit status.
    pub status: ExitStatus,
    /// Every non-empty diagnostic line, in arrival order.
    pub stderr: String,
}

/// A builder for constructing and executing external tool invocations.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl ToolCommand {
    /// Create a new command for the given program path.
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(&mut self, s: impl Into<String>) -> &mut Self {
        self.args.push(s.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(&mut self, iter: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.args.extend(iter.into_iter().map(Into::into));
        self
    }

    fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.program.to_string_lossy().to_string())
    }

    /// Execute the command, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConversionFailed`] if spawning fails or the process
    /// exits with a non-zero status (the message includes stderr).
    pub async fn execute(&self) -> Result<ToolOutput> {
        let name = self.program_name();

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let child = cmd
            .spawn()
            .map_err(|e| Error::conversion_failed(format!("failed to spawn {name}: {e}")))?;

        let output = child.wait_with_output().await.map_err(|e| {
            Error::conversion_failed(format!("I/O error waiting for {name}: {e}"))
        })?;

        let tool_output = ToolOutput {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !output.status.success() {
            return Err(Error::conversion_failed(format!(
                "{name} exited with status {}: {}",
                output.status,
                tool_output.stderr.trim()
            )));
        }

        Ok(tool_output)
    }

    /// Execute the command with stderr streamed line-by-line to `on_line`.
    ///
    /// Lines are delivered in arrival order; empty segments (from CRLF
    /// pairs) are skipped. The returned future resolves only once the child
    /// has exited *and* its stderr has been fully drained, so no reader is
    /// left dangling.
    ///
    /// If `cancel` is triggered the child process is killed — not merely
    /// abandoned — before the call returns [`Error::Cancelled`]. The child
    /// is also configured to be killed if the future itself is dropped.
    ///
    /// A non-zero exit is *not* an error here; the status is returned in
    /// [`StreamedOutput`] for the caller to interpret.
    pub async fn execute_streaming(
        &self,
        mut on_line: impl FnMut(&str),
        cancel: Option<CancellationToken>,
    ) -> Result<StreamedOutput> {
        let name = self.program_name();

        tracing::debug!("executing {} {:?}", self.program.display(), self.args);

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .map_err(|e| Error::conversion_failed(format!("failed to spawn {name}: {e}")))?;

        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| Error::conversion_failed(format!("failed to capture {name} stderr")))?;

        let cancel = cancel.unwrap_or_default();
        let mut collected = String::new();
        let mut pending: Vec<u8> = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            tokio::select! {
                read = stderr.read(&mut chunk) => match read {
                    Ok(0) => break,
                    Ok(n) => {
                        pending.extend_from_slice(&chunk[..n]);
                        while let Some(pos) =
                            pending.iter().position(|&b| b == b'\n' || b == b'\r')
                        {
                            let raw: Vec<u8> = pending.drain(..=pos).collect();
                            let line = String::from_utf8_lossy(&raw[..raw.len() - 1]);
                            if !line.is_empty() {
                                on_line(&line);
                                collected.push_str(&line);
                                collected.push('\n');
                            }
                        }
                    }
                    Err(e) => {
                        kill_child(&mut child, &name).await;
                        return Err(Error::conversion_failed(format!(
                            "error reading {name} output: {e}"
                        )));
                    }
                },
                _ = cancel.cancelled() => {
                    kill_child(&mut child, &name).await;
                    return Err(Error::Cancelled);
                }
            }
        }

        // Flush a trailing line that arrived without a terminator.
        if !pending.is_empty() {
            let line = String::from_utf8_lossy(&pending);
            on_line(&line);
            collected.push_str(&line);
            collected.push('\n');
        }

        let status = child.wait().await.map_err(|e| {
            Error::conversion_failed(format!("I/O error waiting for {name}: {e}"))
        })?;

        Ok(StreamedOutput {
            status,
            stderr: collected,
        })
    }
}

async fn kill_child(child: &mut Child, name: &str) {
    if let Err(e) = child.kill().await {
        tracing::warn!("failed to kill {name}: {e}");
    }
}

/// Pick the most meaningful line of a converter's stderr for an error
/// message: the last line mentioning an error, else the last line that is
/// not a progress update.
pub fn error_digest(stderr: &str) -> String {
    if let Some(error_line) = stderr
        .lines()
        .rev()
        .find(|line| line.contains("Error") || line.contains("error"))
    {
        return error_line.trim().to_string();
    }

    stderr
        .lines()
        .rev()
        .find(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with("frame=") && !trimmed.starts_with("size=")
        })
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "no diagnostic output".to_string())
}
