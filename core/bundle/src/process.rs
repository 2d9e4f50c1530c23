use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};

use manifest::{
    ManifestReport, OffsetSource, OffsetTable, TextureDescriptor, TextureFormat, parse_manifest,
    parse_offset_table,
};

use crate::extract::decode_texture;

#[derive(Serialize)]
struct ManifestDump<'a> {
    descriptors: &'a [TextureDescriptor],
    report: &'a ManifestReport,
}

fn load_offset_table(toc: Option<&Path>) -> Result<OffsetTable> {
    match toc {
        Some(path) => {
            let data = fs::read(path).context("Failed to read offset table file")?;
            Ok(parse_offset_table(&data))
        }
        None => Ok(OffsetTable::default()),
    }
}

fn load_descriptors(
    manifest_path: &Path,
    toc: Option<&Path>,
) -> Result<(Vec<TextureDescriptor>, ManifestReport)> {
    let text = fs::read_to_string(manifest_path).context("Failed to read manifest file")?;
    let table = load_offset_table(toc)?;
    Ok(parse_manifest(&text, &table))
}

/// Parses a manifest (plus optional offset table) and prints the texture
/// listing; optionally writes the full descriptor set as JSON.
pub fn manifest_list(
    manifest_path: &Path,
    toc: Option<&Path>,
    json_out: Option<&PathBuf>,
) -> Result<()> {
    let (descriptors, report) = load_descriptors(manifest_path, toc)?;

    println!("Parsed {} textures from {:?}", descriptors.len(), manifest_path);
    for d in &descriptors {
        let source = match d.offset_source {
            OffsetSource::Table => "table",
            OffsetSource::Estimated => "estimated",
        };
        print!(
            "  {:<32} {}x{} {:?} offset={} ({}) size~{}",
            d.name, d.width, d.height, d.format, d.offset, source, d.estimated_data_size
        );
        if matches!(
            d.format,
            TextureFormat::Dxt1 | TextureFormat::Etc2Rgb | TextureFormat::Etc2Rgba
        ) {
            print!(" chain~{}", d.format.mip_chain_size(d.width, d.height));
        }
        println!();
    }
    if !report.skipped.is_empty() {
        println!("Skipped {} non-texture lines", report.skipped.len());
    }
    if report.estimated_offset_count > 0 {
        println!(
            "Warning: {} offsets are sequential estimates (offset table missing or exhausted)",
            report.estimated_offset_count
        );
    }

    if let Some(out) = json_out {
        let dump = ManifestDump {
            descriptors: &descriptors,
            report: &report,
        };
        let json = serde_json::to_string_pretty(&dump)?;
        fs::write(out, json).context("Failed to write JSON dump")?;
        println!("Wrote JSON listing to {out:?}");
    }
    Ok(())
}

/// Prints the offset table's declared size and usable offsets.
pub fn toc_dump(toc_path: &Path) -> Result<()> {
    let data = fs::read(toc_path).context("Failed to read offset table file")?;
    let table = parse_offset_table(&data);

    match table.declared_file_size {
        Some(size) => println!("Declared archive size: {size} bytes"),
        None => println!("Empty offset table"),
    }
    println!("{} usable offsets:", table.offsets.len());
    for (i, offset) in table.offsets.iter().enumerate() {
        println!("  [{i}] {offset}");
    }
    Ok(())
}

/// Extracts one texture by name from the archive, decodes it, and saves it
/// as a PNG next to the archive unless an output path is given.
pub fn texture_decode(
    archive_path: &Path,
    manifest_path: &Path,
    toc: Option<&Path>,
    name: &str,
    output: Option<&PathBuf>,
) -> Result<()> {
    let (descriptors, _) = load_descriptors(manifest_path, toc)?;
    let descriptor = descriptors
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| crate::error::BundleError::TextureNotFound(name.to_string()))?;

    let mut archive = File::open(archive_path).context("Failed to open archive file")?;
    let decoded = decode_texture(&mut archive, descriptor)
        .with_context(|| format!("Failed to decode texture {name:?}"))?;

    println!(
        "Decoded {:?}: {}x{}, header {:?}, {} mip size fields",
        name,
        decoded.width,
        decoded.height,
        decoded.header,
        decoded.mip_sizes.len()
    );

    let out_path = match output {
        Some(p) => p.clone(),
        None => archive_path.with_extension(format!("{name}.png")),
    };
    save_png(&out_path, decoded.width, decoded.height, decoded.rgba)?;
    println!("Saved {out_path:?}");
    Ok(())
}

pub fn save_png(path: &Path, width: u32, height: u32, rgba: Vec<u8>) -> Result<()> {
    let img = image::RgbaImage::from_raw(width, height, rgba)
        .context("Decoded buffer does not match dimensions")?;
    img.save(path).context("Failed to save PNG")?;
    Ok(())
}
