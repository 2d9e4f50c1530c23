use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ManifestCommands {
    /// Parse a manifest and list its texture descriptors
    List {
        /// Input manifest text file
        input: PathBuf,
        /// Binary offset table file (optional; offsets are estimated
        /// sequentially without it)
        #[arg(short, long)]
        toc: Option<PathBuf>,
        /// Write the full descriptor listing as JSON to this path
        #[arg(short, long)]
        json: Option<PathBuf>,
    },
}

pub fn handle(cmd: ManifestCommands) -> Result<()> {
    match cmd {
        ManifestCommands::List { input, toc, json } => {
            bundle::process::manifest_list(&input, toc.as_deref(), json.as_ref())
        }
    }
}
