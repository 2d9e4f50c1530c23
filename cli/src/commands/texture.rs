use anyhow::{Result, anyhow};
use clap::Subcommand;
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum TextureCommands {
    /// Extract one texture from an archive and decode it to a PNG
    Decode {
        /// Archive file
        archive: PathBuf,
        /// Manifest text file
        #[arg(short, long)]
        manifest: PathBuf,
        /// Binary offset table file (optional)
        #[arg(short, long)]
        toc: Option<PathBuf>,
        /// Texture name as it appears in the manifest
        #[arg(short, long)]
        name: String,
        /// Output PNG path (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a loose texture blob (no container) to a PNG
    Raw {
        /// Input file holding raw pixel data
        input: PathBuf,
        /// Pixel format name (pvrtc2, pvrtc4, rgb565, rgba4444, rgba8888)
        #[arg(short, long)]
        format: String,
        #[arg(long)]
        width: u32,
        #[arg(long)]
        height: u32,
        /// Output PNG path (optional, defaults to input with .png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn handle(cmd: TextureCommands) -> Result<()> {
    match cmd {
        TextureCommands::Decode {
            archive,
            manifest,
            toc,
            name,
            output,
        } => bundle::process::texture_decode(
            &archive,
            &manifest,
            toc.as_deref(),
            &name,
            output.as_ref(),
        ),
        TextureCommands::Raw {
            input,
            format,
            width,
            height,
            output,
        } => {
            let data = fs::read(&input)?;
            let rgba = match format.as_str() {
                "pvrtc2" => pvrtc::decode_pvrtc(&data, width, height, true)?,
                "pvrtc4" => pvrtc::decode_pvrtc(&data, width, height, false)?,
                "rgb565" => pvrtc::raw::decode_rgb565(&data, width, height)?,
                "rgba4444" => pvrtc::raw::decode_rgba4444(&data, width, height)?,
                "rgba8888" => pvrtc::raw::decode_rgba8888(&data, width, height)?,
                other => return Err(anyhow!("Unknown format name: {other}")),
            };

            let out_path = match output {
                Some(p) => p,
                None => input.with_extension("png"),
            };
            bundle::process::save_png(&out_path, width, height, rgba)?;
            println!("Saved {out_path:?}");
            Ok(())
        }
    }
}
