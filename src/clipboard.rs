//! Best-effort system clipboard access
//!
//! There is no clipboard library in our stack, so text is piped into the
//! platform's clipboard command. Missing commands, headless sessions and
//! non-zero exits all surface as `ScrapeError::ClipboardUnavailable`; callers
//! log that and carry on.

use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use crate::error::{ScrapeError, ScrapeResult};

/// Destination for exported text
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> ScrapeResult<()>;
}

struct CopyCommand {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const COPY_COMMANDS: &[CopyCommand] = &[CopyCommand {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const COPY_COMMANDS: &[CopyCommand] = &[CopyCommand {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const COPY_COMMANDS: &[CopyCommand] = &[
    CopyCommand {
        program: "wl-copy",
        args: &[],
    },
    CopyCommand {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    CopyCommand {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

/// Clipboard backed by the platform's copy command
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn pipe_into(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(text.as_bytes())
        {
            drop(stdin);
            // reap the child so it does not linger
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }
        // stdin is closed by now, so the command has seen EOF

        Ok(child.wait()?.success())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> ScrapeResult<()> {
        let mut tried = Vec::new();

        for CopyCommand { program, args } in COPY_COMMANDS {
            match Self::pipe_into(program, args, text) {
                Ok(true) => {
                    debug!("Copied {} bytes to clipboard via {program}", text.len());
                    return Ok(());
                }
                Ok(false) => trace!("{program} exited unsuccessfully"),
                Err(e) => trace!("{program} unavailable: {e}"),
            }
            tried.push(*program);
        }

        Err(ScrapeError::ClipboardUnavailable(format!(
            "no clipboard command succeeded (tried {})",
            tried.join(", ")
        )))
    }
}

/// Clipboard that is always unavailable, for headless runs that opt out
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&self, _text: &str) -> ScrapeResult<()> {
        Err(ScrapeError::ClipboardUnavailable(
            "clipboard disabled".to_string(),
        ))
    }
}
