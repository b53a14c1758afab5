//! Output sink for rendered markup

use std::path::PathBuf;

use colored::Colorize;
use tracing::{debug, info, instrument};

use crate::{error::Result, utils};

/// Where the rendered markup goes
///
/// An explicit value passed to [`export`]; there is no ambient output
/// state. The default destination is stdout.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Destination file; `None` prints to stdout
    pub path: Option<PathBuf>,
}

impl OutputConfig {
    /// Print the markup to stdout
    pub fn stdout() -> Self {
        Self { path: None }
    }

    /// Write the markup to `path` as UTF-8 text, creating or truncating it
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

/// Delivers rendered markup to the configured destination
///
/// With a path set, the markup is written in one shot and a confirmation
/// naming the file is printed; without one, the markup itself is printed
/// wrapped in a success-colored banner. Write failures propagate as IO
/// errors: no retry, no atomic-write guarantee.
#[instrument(skip(markup))]
pub fn export(markup: &str, config: &OutputConfig) -> Result<()> {
    match &config.path {
        Some(path) => {
            debug!("Writing markup to {}", path.display());
            utils::write_file(path, markup)?;
            info!("Markup written successfully");
            println!(
                "{} {} {}",
                "File".green(),
                path.display().to_string().magenta(),
                "generated".green()
            );
        }
        None => {
            debug!("No output path configured, printing to stdout");
            println!("\n{}\n", markup.green());
        }
    }
    Ok(())
}
