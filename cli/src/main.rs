use clap::{Parser, Subcommand};

mod commands;

use commands::manifest::ManifestCommands;
use commands::texture::TextureCommands;
use commands::toc::TocCommands;

#[derive(Parser)]
#[command(name = "texbundle")]
#[command(about = "CLI for texture bundle archives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manifest operations (List)
    #[command(subcommand)]
    Manifest(ManifestCommands),
    /// Offset table operations (Dump)
    #[command(subcommand)]
    Toc(TocCommands),
    /// Texture operations (Decode/Raw)
    #[command(subcommand)]
    Texture(TextureCommands),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Manifest(cmd) => commands::manifest::handle(cmd),
        Commands::Toc(cmd) => commands::toc::handle(cmd),
        Commands::Texture(cmd) => commands::texture::handle(cmd),
    }
}
