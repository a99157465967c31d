use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

/// Screenshot written by an external capture tool, removed again on drop.
pub struct ScreenShot {
    path: PathBuf,
}

impl ScreenShot {
    /// Capture the whole screen with `grim`. Runs before any window exists
    /// so the overlay is not part of its own shot.
    pub fn take() -> Result<Self> {
        let path = std::env::temp_dir().join(format!("zoomlight-{}.png", std::process::id()));
        let mut command = Command::new("grim");
        command.arg(&path);
        Self::take_with(command, path)
    }

    fn take_with(mut command: Command, path: PathBuf) -> Result<Self> {
        info!("taking screenshot to {}", path.display());
        let status = command
            .status()
            .context("failed to run the screen capture tool (is `grim` installed?)")?;
        if !status.success() {
            bail!("screen capture tool exited with {status}");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScreenShot {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!("could not remove screenshot {}: {}", self.path.display(), e);
        }
    }
}
