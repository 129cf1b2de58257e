use std::io::{BufRead, Write};
use std::path::{Component, Path, PathBuf};

use crate::naming::is_valid_manifest_name;
use crate::prompt::PromptSession;
use crate::{Error, Result};

/// Result of checking the working directory for existing manifests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Write the new manifest here. The path does not exist yet.
    Proceed(PathBuf),
    /// The user declined to continue.
    Aborted,
}

/// Finds a free, valid manifest filename in a directory.
pub struct CollisionResolver<'a> {
    dir: &'a Path,
    max_attempts: Option<usize>,
}

impl<'a> CollisionResolver<'a> {
    pub fn new(dir: &'a Path) -> Self {
        Self {
            dir,
            max_attempts: None,
        }
    }

    /// Bound the number of alternative filenames asked for.
    pub fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Place `answer` under the directory. Root, prefix and `..` components
    /// are dropped so the result never leaves it.
    fn candidate_path(&self, answer: &str) -> PathBuf {
        let mut path = self.dir.to_path_buf();
        for component in Path::new(answer).components() {
            if let Component::Normal(part) = component {
                path.push(part);
            }
        }
        path
    }

    /// List entries in the directory whose name contains `Eask`, sorted.
    pub fn existing_manifests(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(self.dir).map_err(|e| Error::ReadDir {
            path: self.dir.to_path_buf(),
            source: e,
        })?;

        let mut found = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::ReadDir {
                path: self.dir.to_path_buf(),
                source: e,
            })?;
            if entry.file_name().to_string_lossy().contains("Eask") {
                found.push(entry.path());
            }
        }
        found.sort();
        Ok(found)
    }

    /// Resolve the path to write, starting from `default_name`.
    pub fn resolve<R: BufRead, W: Write>(
        &self,
        session: &mut PromptSession<R, W>,
        default_name: &str,
    ) -> Result<Resolution> {
        let mut candidate = self.dir.join(default_name);

        let existing = self.existing_manifests()?;
        if existing.is_empty() {
            return Ok(Resolution::Proceed(candidate));
        }

        tracing::debug!(count = existing.len(), "found existing manifests");
        session.say("Eask-file is already exists,")?;
        session.say("")?;
        for path in &existing {
            session.say(&format!("   {}", path.display()))?;
        }
        session.say("")?;

        let answer = session.ask("Continue the creation? (yes) ")?;
        if !is_affirmative(&answer) {
            return Ok(Resolution::Aborted);
        }

        let mut basename = default_name.to_string();
        let mut invalid = false;
        let mut attempts = 0;

        while invalid || candidate.exists() {
            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(Error::FilenameAttemptsExceeded(attempts));
            }

            let prompt = if invalid {
                format!("[?] Invalid filename '{}', try another one: ", basename)
            } else {
                format!("[?] Filename '{}' already taken, try another one: ", basename)
            };

            basename = session.ask(&prompt)?;
            candidate = self.candidate_path(&basename);
            invalid = !is_valid_manifest_name(&basename);
            attempts += 1;
        }

        tracing::debug!(path = %candidate.display(), "manifest filename chosen");
        Ok(Resolution::Proceed(candidate))
    }
}

/// An empty answer or a literal `yes`.
pub fn is_affirmative(answer: &str) -> bool {
    answer.is_empty() || answer == "yes"
}
