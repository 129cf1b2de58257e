pub mod cli;
pub mod config;
pub mod importer;
pub mod naming;
pub mod prompt;
pub mod workflow;

use std::path::PathBuf;
use thiserror::Error;

use crate::importer::Source;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Filesystem errors
    #[error("failed to list directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    // Config errors
    #[error("failed to parse config {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    // Prompt errors
    #[error("failed to read answer: {0}")]
    PromptRead(#[source] std::io::Error),

    #[error("failed to write prompt: {0}")]
    PromptWrite(#[source] std::io::Error),

    #[error("input closed before an answer was given")]
    InputClosed,

    #[error("no usable filename after {0} attempt(s)")]
    FilenameAttemptsExceeded(usize),

    // Importer errors
    #[error("no lisp directory configured for the '{0}' importer")]
    ImporterNotConfigured(Source),

    #[error("failed to run {program}: {source}")]
    ImporterSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{importer}' importer exited with {status}")]
    ImporterFailed {
        importer: Source,
        status: std::process::ExitStatus,
    },
}
