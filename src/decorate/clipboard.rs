//! Clipboard access and the transient "copied" feedback of copy controls

use std::io::{self, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

use super::code_copy::{CHECK_ICON, COPY_ICON};

/// How long a control shows its success state
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command found")]
    Unavailable,
    #[error("failed to run {command}: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("{command} exited with {status}")]
    Status { command: String, status: ExitStatus },
}

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes to the desktop clipboard through the platform's copy command
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    /// Pick the copy command for this platform
    pub fn detect() -> Result<Self, ClipboardError> {
        let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
            ("pbcopy", &[])
        } else if cfg!(target_os = "windows") {
            ("clip", &[])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            ("wl-copy", &[])
        } else if std::env::var_os("DISPLAY").is_some() {
            ("xclip", &["-selection", "clipboard"])
        } else {
            return Err(ClipboardError::Unavailable);
        };

        Ok(Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let io_err = |source| ClipboardError::Io {
            command: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(io_err)?;

        let status = feed(&mut child, text).map_err(io_err)?;
        if !status.success() {
            return Err(ClipboardError::Status {
                command: self.program.clone(),
                status,
            });
        }

        Ok(())
    }
}

/// Write `text` to the command's stdin and wait for it to exit.
/// A failed write kills the command, so it is reaped either way.
fn feed(child: &mut Child, text: &str) -> io::Result<ExitStatus> {
    if let Some(mut stdin) = child.stdin.take() {
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            drop(stdin);
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }
    }
    child.wait()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Copied,
}

/// A copy button: shows the success state for a while after each
/// successful copy, then reverts
#[derive(Debug, Clone)]
pub struct CopyControl {
    // (state, generation of the last successful press)
    state: Arc<Mutex<(CopyState, u64)>>,
    feedback: Duration,
}

impl Default for CopyControl {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

impl CopyControl {
    pub fn new(feedback: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new((CopyState::Idle, 0))),
            feedback,
        }
    }

    pub fn state(&self) -> CopyState {
        self.state.lock().map(|s| s.0).unwrap_or(CopyState::Idle)
    }

    pub fn icon(&self) -> &'static str {
        match self.state() {
            CopyState::Idle => COPY_ICON,
            CopyState::Copied => CHECK_ICON,
        }
    }

    /// Copy `text`. On failure the error is logged and the control keeps
    /// its current state. Must be called inside a tokio runtime.
    pub fn press(&self, clipboard: &dyn Clipboard, text: &str) -> Result<(), ClipboardError> {
        if let Err(e) = clipboard.write_text(text) {
            tracing::error!("Failed to copy: {}", e);
            return Err(e);
        }

        let generation = match self.state.lock() {
            Ok(mut state) => {
                state.1 += 1;
                state.0 = CopyState::Copied;
                state.1
            }
            Err(_) => return Ok(()),
        };

        // Only the latest press may revert the indicator
        let state = Arc::clone(&self.state);
        let feedback = self.feedback;
        tokio::spawn(async move {
            tokio::time::sleep(feedback).await;
            if let Ok(mut state) = state.lock() {
                if state.1 == generation {
                    state.0 = CopyState::Idle;
                }
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Mutex<Option<String>>,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_copied_state_reverts() {
        let clipboard = MemoryClipboard::default();
        let control = CopyControl::default();

        control.press(&clipboard, "crontab -l").unwrap();
        assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("crontab -l"));
        assert_eq!(control.state(), CopyState::Copied);
        assert_eq!(control.icon(), CHECK_ICON);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(control.state(), CopyState::Copied);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(control.state(), CopyState::Idle);
        assert_eq!(control.icon(), COPY_ICON);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_press_extends_feedback() {
        let clipboard = MemoryClipboard::default();
        let control = CopyControl::default();

        control.press(&clipboard, "a").unwrap();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        control.press(&clipboard, "b").unwrap();

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(control.state(), CopyState::Copied);

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(control.state(), CopyState::Idle);
    }

    // larger than a pipe buffer, so the write fails once the reader exits
    #[cfg(unix)]
    fn large_payload() -> String {
        "x".repeat(1 << 20)
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_write_reaps_command() {
        let mut child = Command::new("true")
            .stdin(Stdio::piped())
            .spawn()
            .unwrap();

        assert!(feed(&mut child, &large_payload()).is_err());
        assert!(child.try_wait().unwrap().is_some());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_ignoring_input_is_io_error() {
        let clipboard = SystemClipboard {
            program: "true".to_string(),
            args: Vec::new(),
        };
        let err = clipboard.write_text(&large_payload()).unwrap_err();
        assert!(matches!(err, ClipboardError::Io { ref command, .. } if command == "true"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_reading_input() {
        let clipboard = SystemClipboard {
            program: "cat".to_string(),
            args: Vec::new(),
        };
        clipboard.write_text("crontab -l").unwrap();
    }

    #[tokio::test]
    async fn test_failure_leaves_state() {
        let control = CopyControl::default();
        assert!(control.press(&DeniedClipboard, "x").is_err());
        assert_eq!(control.state(), CopyState::Idle);
    }
}
