//! Output handling for assessment reports.

use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => OutputTarget::File(p),
            None => OutputTarget::Stdout,
        }
    }

    /// Check if output is to a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, OutputTarget::Stdout) && std::io::stdout().is_terminal()
    }
}

/// Determine if color should be used based on flags, environment and target
pub fn should_use_color(no_color_flag: bool, target: &OutputTarget) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err() && target.is_terminal()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Report written to {}", path.display());
            }
            Ok(())
        }
    }
}
