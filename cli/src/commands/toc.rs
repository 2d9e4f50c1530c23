use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum TocCommands {
    /// Dump the offsets in a binary offset table file
    Dump {
        /// Input offset table file
        input: PathBuf,
    },
}

pub fn handle(cmd: TocCommands) -> Result<()> {
    match cmd {
        TocCommands::Dump { input } => bundle::process::toc_dump(&input),
    }
}
