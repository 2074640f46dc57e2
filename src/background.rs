use std::path::Path;
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::error::Result;

/// External command that sets the desktop background from an image URI.
///
/// The URI is appended as the last argument. Only spawning is observed; the
/// command's exit status is never waited for.
#[derive(Debug, Clone)]
pub struct BackgroundSetter {
    pub program: String,
    pub args: Vec<String>,
}

impl BackgroundSetter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// GNOME `gsettings`
    pub fn gnome() -> Self {
        Self::new(
            "gsettings",
            vec![
                "set".to_string(),
                "org.gnome.desktop.background".to_string(),
                "picture-uri".to_string(),
            ],
        )
    }

    /// The command that would run for `image_path`
    pub fn command(&self, image_path: &Path) -> Result<Command> {
        let uri = file_uri(image_path)?;
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(uri)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Ok(command)
    }

    /// Fire and forget. Failing to resolve the path or spawn the command is logged, not returned.
    pub fn apply(&self, image_path: &Path) {
        let mut command = match self.command(image_path) {
            Ok(command) => command,
            Err(e) => {
                warn!("Cannot resolve {}: {}", image_path.display(), e);
                return;
            }
        };
        match command.spawn() {
            Ok(_) => info!("Requested background change via {}", self.program),
            Err(e) => warn!("Failed to run {}: {}", self.program, e),
        }
    }
}

impl Default for BackgroundSetter {
    fn default() -> Self {
        Self::gnome()
    }
}

/// Absolute `file://` URI for an existing file
pub fn file_uri(path: &Path) -> Result<String> {
    let absolute = std::fs::canonicalize(path)?;
    Ok(format!("file://{}", absolute.display()))
}
