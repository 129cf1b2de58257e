mod init;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::Result;

pub use init::run_interactive;

#[derive(Parser)]
#[command(name = "eask")]
#[command(about = "Project manifests for Emacs packages")]
#[command(version)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/eask/init.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize project to use Eask
    Init {
        /// Files to use with `--from`
        files: Vec<PathBuf>,

        /// Build from an existing package (cask, eldev, keg, source)
        #[arg(long)]
        from: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Init { files, from } => init::run(files, from, self.config),
        }
    }
}
