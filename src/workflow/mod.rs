//! Interactive creation of a new Eask manifest.
//!
//! The steps run strictly in order: resolve a free filename, collect the
//! package fields, render the manifest, then confirm before writing.

mod collision;
mod fields;
mod render;

pub use collision::{CollisionResolver, Resolution, is_affirmative};
pub use fields::{Fields, collect};
pub use render::render;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::Result;
use crate::config::Settings;
use crate::prompt::PromptSession;

/// Default manifest filename.
pub const DEFAULT_MANIFEST: &str = "Eask";

/// How a workflow run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The manifest was written to this path.
    Written(PathBuf),
    /// The user rejected the final confirmation. Nothing was written.
    Declined(PathBuf),
    /// Writing failed; the error has been logged.
    WriteFailed(PathBuf),
    /// The user chose not to continue after existing manifests were listed.
    Aborted,
}

/// Options for one run of the workflow.
pub struct Workflow<'a> {
    dir: &'a Path,
    settings: &'a Settings,
    max_attempts: Option<usize>,
}

impl<'a> Workflow<'a> {
    pub fn new(dir: &'a Path, settings: &'a Settings) -> Self {
        Self {
            dir,
            settings,
            max_attempts: None,
        }
    }

    /// Bound the filename retry loop (unbounded by default).
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Run the workflow. The caller owns the session and closes it.
    pub fn run<R: BufRead, W: Write>(&self, session: &mut PromptSession<R, W>) -> Result<Outcome> {
        let resolution = CollisionResolver::new(self.dir)
            .with_max_attempts(self.max_attempts)
            .resolve(session, DEFAULT_MANIFEST)?;

        let path = match resolution {
            Resolution::Proceed(path) => path,
            Resolution::Aborted => return Ok(Outcome::Aborted),
        };

        let dir_name = self
            .dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let fields = collect(session, &dir_name, &self.settings.defaults)?;
        let content = render(&fields);

        confirm_and_write(session, &path, &content)
    }
}

/// Show the rendered manifest and write it if the user agrees.
fn confirm_and_write<R: BufRead, W: Write>(
    session: &mut PromptSession<R, W>,
    path: &Path,
    content: &str,
) -> Result<Outcome> {
    let prompt = format!(
        "About to write to {}:\n\n{}\n\nIs this OK? (yes) ",
        path.display(),
        content
    );
    let answer = session.ask(&prompt)?;
    tracing::debug!(answer = %answer, "confirmation answered");

    if !is_affirmative(&answer) {
        return Ok(Outcome::Declined(path.to_path_buf()));
    }

    match std::fs::write(path, content) {
        Ok(()) => Ok(Outcome::Written(path.to_path_buf())),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to write manifest");
            Ok(Outcome::WriteFailed(path.to_path_buf()))
        }
    }
}
