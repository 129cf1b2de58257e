use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

use crate::config::ImporterSettings;
use crate::{Error, Result};

/// An existing package description that `--from` can convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cask,
    Eldev,
    Keg,
    Source,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Cask => "cask",
            Source::Eldev => "eldev",
            Source::Keg => "keg",
            Source::Source => "source",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `--from` value was not a recognized source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSource(pub String);

impl FromStr for Source {
    type Err = UnknownSource;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cask" => Ok(Source::Cask),
            "eldev" => Ok(Source::Eldev),
            "keg" => Ok(Source::Keg),
            "source" => Ok(Source::Source),
            other => Err(UnknownSource(other.to_string())),
        }
    }
}

/// Converts an existing package description into an Eask manifest.
pub trait Importer {
    fn import(&self, source: Source, files: &[PathBuf]) -> Result<()>;
}

/// Runs the importer's lisp script in a batch Emacs.
pub struct EmacsImporter {
    emacs: String,
    lisp_dir: Option<PathBuf>,
    working_dir: PathBuf,
}

impl EmacsImporter {
    pub fn new(settings: &ImporterSettings, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            emacs: settings.emacs.clone(),
            lisp_dir: settings.lisp_dir.clone(),
            working_dir: working_dir.into(),
        }
    }

    /// Path of the script for `source`: `<lisp_dir>/init/<source>.el`.
    pub fn script_path(lisp_dir: &Path, source: Source) -> PathBuf {
        lisp_dir.join("init").join(format!("{}.el", source))
    }

    /// Build the Emacs invocation for `source`.
    pub fn command(&self, source: Source, files: &[PathBuf]) -> Result<Command> {
        let lisp_dir = self
            .lisp_dir
            .as_deref()
            .ok_or(Error::ImporterNotConfigured(source))?;

        let mut cmd = Command::new(&self.emacs);
        cmd.current_dir(&self.working_dir)
            .args(["-Q", "--batch", "--script"])
            .arg(Self::script_path(lisp_dir, source))
            .args(["--", "--from", source.as_str()])
            .args(files);
        Ok(cmd)
    }
}

impl Importer for EmacsImporter {
    fn import(&self, source: Source, files: &[PathBuf]) -> Result<()> {
        let mut cmd = self.command(source, files)?;
        tracing::debug!(command = ?cmd, "running importer");

        let status = cmd.status().map_err(|e| Error::ImporterSpawn {
            program: self.emacs.clone(),
            source: e,
        })?;

        if !status.success() {
            return Err(Error::ImporterFailed {
                importer: source,
                status,
            });
        }
        Ok(())
    }
}
