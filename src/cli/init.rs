use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::importer::{EmacsImporter, Importer, Source};
use crate::prompt::PromptSession;
use crate::workflow::{Outcome, Workflow};
use crate::{Error, Result};

/// Create an Eask manifest, interactively or from an existing package.
pub fn run(files: Vec<PathBuf>, from: Option<String>, config: Option<PathBuf>) -> Result<()> {
    let settings = Settings::resolve(config.as_deref())?;
    let cwd = std::env::current_dir().map_err(Error::CurrentDir)?;

    let Some(from) = from else {
        let outcome = run_interactive(&cwd, &settings, PromptSession::stdio())?;
        tracing::debug!(?outcome, "init finished");
        return Ok(());
    };

    match from.parse::<Source>() {
        Ok(source) => EmacsImporter::new(&settings.importer, &cwd).import(source, &files),
        Err(_) => {
            tracing::warn!("Invalid argument, from: {}", from);
            Ok(())
        }
    }
}

/// Run the interactive workflow, closing `session` whatever the result.
pub fn run_interactive<R: BufRead, W: Write>(
    dir: &Path,
    settings: &Settings,
    mut session: PromptSession<R, W>,
) -> Result<Outcome> {
    let outcome = Workflow::new(dir, settings).run(&mut session);
    let closed = session.close();

    let outcome = outcome?;
    closed?;
    Ok(outcome)
}
