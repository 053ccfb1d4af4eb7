//! Opening a merged document with the platform's default handler.
//!
//! Opening is a side effect after a successful merge. Its failures are
//! reported to the user as warnings and never turn a merge into a failure.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Opens a file for the user to look at.
pub trait Opener {
    /// Hand `path` to a viewer.
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Platform launcher used by [`SystemOpener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launcher {
    /// `open <path>`
    MacOs,
    /// `cmd /C start "" <path>`
    Windows,
    /// `xdg-open <path>`
    Desktop,
}

impl Launcher {
    /// Launcher for the platform this binary was built for.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Desktop
        }
    }

    /// Command that opens `path` with this launcher.
    pub fn command(&self, path: &Path) -> Command {
        let mut command = match self {
            Self::MacOs => Command::new("open"),
            Self::Windows => {
                let mut command = Command::new("cmd");
                // The empty argument is the window title `start` expects first.
                command.args(["/C", "start", ""]);
                command
            }
            Self::Desktop => Command::new("xdg-open"),
        };
        command.arg(path);
        command
    }
}

/// Opens files with the desktop's default application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemOpener {
    launcher: Launcher,
}

impl SystemOpener {
    pub fn new() -> Self {
        Self::with_launcher(Launcher::detect())
    }

    pub fn with_launcher(launcher: Launcher) -> Self {
        Self { launcher }
    }

    pub fn launcher(&self) -> Launcher {
        self.launcher
    }
}

impl Default for SystemOpener {
    fn default() -> Self {
        Self::new()
    }
}

impl Opener for SystemOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        let mut command = self.launcher.command(path);
        let program = command.get_program().to_string_lossy().into_owned();

        let status = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|err| io::Error::new(err.kind(), format!("failed to run {program}: {err}")))?;

        tracing::debug!(program, path = %path.display(), %status, "opener finished");

        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{program} exited with {status}")))
        }
    }
}

/// Opener that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopOpener;

impl Opener for NoopOpener {
    fn open(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}
