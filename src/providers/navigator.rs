//! # Navigation
//!
//! The "open this URL" capability used by link and search commands.
//! Requests are fire-and-forget: nothing is reported back to the command.

use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use log::{debug, info, warn};

pub trait Navigator: Send + Sync {
    fn request_navigation(&self, url: &str);
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default)]
pub struct SystemNavigator;

impl SystemNavigator {
    fn opener(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl Navigator for SystemNavigator {
    fn request_navigation(&self, url: &str) {
        info!("Opening {url}");
        if let Err(e) = spawn_reaped(Self::opener(url)) {
            warn!("Failed to open {url}: {e}");
        }
    }
}

/// Starts `cmd` with null stdio and waits for it on a background thread,
/// so the exited opener does not linger as a zombie.
fn spawn_reaped(mut cmd: Command) -> io::Result<JoinHandle<Option<ExitStatus>>> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            debug!("Opener exited with {status}");
            Some(status)
        }
        Err(e) => {
            warn!("Failed to wait for opener: {e}");
            None
        }
    }))
}

/// Records requested URLs instead of opening them.
///
/// Used by one-shot mode (which prints them after the transcript) and by tests.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    requests: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        match self.requests.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Navigator for RecordingNavigator {
    fn request_navigation(&self, url: &str) {
        debug!("Recording navigation to {url}");
        match self.requests.lock() {
            Ok(mut guard) => guard.push(url.to_string()),
            Err(poisoned) => poisoned.into_inner().push(url.to_string()),
        }
    }
}
