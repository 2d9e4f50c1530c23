use serde::{Deserialize, Serialize};

use crate::descriptor::{OffsetSource, TextureDescriptor};
use crate::format::TextureFormat;
use crate::toc::OffsetTable;

/// Why a manifest line produced no descriptor. None of these abort the
/// parse; manifests routinely contain category markers and other
/// non-texture lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    Category,
    Affiliate,
    NoQuotedName,
    MissingRequiredField,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedLine {
    /// 1-based line number in the manifest text.
    pub line_no: usize,
    pub reason: SkipReason,
}

/// Structured account of a manifest parse, returned instead of being
/// written to a logger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManifestReport {
    pub skipped: Vec<SkippedLine>,
    /// Descriptors whose offset came from the sequential size-sum fallback
    /// rather than the offset table. Nonzero means lower-confidence
    /// offsets from that point on.
    pub estimated_offset_count: usize,
}

/// Parses the line-oriented texture manifest.
///
/// Each texture line is a double-quoted name followed by whitespace
/// separated `key=value` pairs; `width`/`height` are positive decimal, `format` is
/// hexadecimal, `img`/`png` are hexadecimal 32-bit content hashes, and
/// unrecognized keys are ignored. Offsets come from the table while it has
/// unused entries, then from a running sum of per-format size estimates.
pub fn parse_manifest(text: &str, table: &OffsetTable) -> (Vec<TextureDescriptor>, ManifestReport) {
    let mut descriptors = Vec::new();
    let mut report = ManifestReport::default();

    let mut table_cursor = 0usize;
    let mut running_offset = 0u64;

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("cat=") {
            report.skipped.push(SkippedLine {
                line_no,
                reason: SkipReason::Category,
            });
            continue;
        }
        if line.contains("affiliate=") {
            report.skipped.push(SkippedLine {
                line_no,
                reason: SkipReason::Affiliate,
            });
            continue;
        }

        let Some((name, rest)) = split_quoted_name(line) else {
            report.skipped.push(SkippedLine {
                line_no,
                reason: SkipReason::NoQuotedName,
            });
            continue;
        };

        let mut width: Option<u32> = None;
        let mut height: Option<u32> = None;
        let mut format_code: Option<u8> = None;
        let mut hash_img: Option<u32> = None;
        let mut hash_png: Option<u32> = None;

        for pair in rest.split_whitespace() {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                // a zero dimension can never describe a texture; treat it
                // like a missing field so the line is skipped
                "width" => width = value.parse().ok().filter(|&v| v > 0),
                "height" => height = value.parse().ok().filter(|&v| v > 0),
                "format" => format_code = u8::from_str_radix(value, 16).ok(),
                "img" => hash_img = u32::from_str_radix(value, 16).ok(),
                "png" => hash_png = u32::from_str_radix(value, 16).ok(),
                _ => {}
            }
        }

        let (Some(width), Some(height), Some(format_code)) = (width, height, format_code) else {
            report.skipped.push(SkippedLine {
                line_no,
                reason: SkipReason::MissingRequiredField,
            });
            continue;
        };

        let format = TextureFormat::from(format_code);
        let estimated_data_size = format.estimated_data_size(width, height);

        let (offset, offset_source) = if table_cursor < table.offsets.len() {
            let offset = table.offsets[table_cursor] as u64;
            table_cursor += 1;
            (offset, OffsetSource::Table)
        } else {
            report.estimated_offset_count += 1;
            (running_offset, OffsetSource::Estimated)
        };
        running_offset += estimated_data_size;

        descriptors.push(TextureDescriptor {
            name: name.to_string(),
            offset,
            width,
            height,
            format,
            has_alpha: format.has_alpha(),
            hash_img,
            hash_png,
            estimated_data_size,
            offset_source,
        });
    }

    (descriptors, report)
}

/// Splits a `"name" rest...` line, returning the unquoted name and the
/// remainder after the closing quote.
fn split_quoted_name(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('"')?;
    let end = rest.find('"')?;
    Some((&rest[..end], &rest[end + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::parse_offset_table;

    fn no_table() -> OffsetTable {
        OffsetTable::default()
    }

    #[test]
    fn test_basic_texture_line() {
        let (descs, report) =
            parse_manifest("\"tex1\" width=64 height=64 format=18\n", &no_table());
        assert_eq!(descs.len(), 1);
        let d = &descs[0];
        assert_eq!(d.name, "tex1");
        assert_eq!(d.width, 64);
        assert_eq!(d.height, 64);
        assert_eq!(d.format, TextureFormat::Pvrtc2bpp);
        assert!(d.has_alpha);
        assert_eq!(d.estimated_data_size, 1024);
        assert_eq!(d.offset_source, OffsetSource::Estimated);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_category_line_skipped() {
        let (descs, report) = parse_manifest("cat=weapons\n", &no_table());
        assert!(descs.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].reason, SkipReason::Category);
    }

    #[test]
    fn test_affiliate_line_skipped() {
        let (descs, report) =
            parse_manifest("\"promo\" affiliate=brandx width=8 height=8 format=0\n", &no_table());
        assert!(descs.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::Affiliate);
    }

    #[test]
    fn test_missing_required_field_recovered() {
        let text = "\"broken\" width=64 format=18\n\"good\" width=8 height=8 format=10\n";
        let (descs, report) = parse_manifest(text, &no_table());
        assert_eq!(descs.len(), 1);
        assert_eq!(descs[0].name, "good");
        assert_eq!(descs[0].format, TextureFormat::Rgb565);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_no, 1);
        assert_eq!(report.skipped[0].reason, SkipReason::MissingRequiredField);
    }

    #[test]
    fn test_zero_dimension_skipped() {
        let text = "\"z\" width=0 height=64 format=18\n\"z2\" width=64 height=0 format=18\n";
        let (descs, report) = parse_manifest(text, &no_table());
        assert!(descs.is_empty());
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].reason, SkipReason::MissingRequiredField);
        assert_eq!(report.skipped[1].reason, SkipReason::MissingRequiredField);
    }

    #[test]
    fn test_hashes_and_unknown_keys() {
        let (descs, _) = parse_manifest(
            "\"t\" width=4 height=4 format=18 img=DEADBEEF png=0000FFFF frob=9\n",
            &no_table(),
        );
        assert_eq!(descs[0].hash_img, Some(0xDEAD_BEEF));
        assert_eq!(descs[0].hash_png, Some(0xFFFF));
    }

    #[test]
    fn test_table_offsets_then_fallback() {
        // table header 1000, then two usable offsets
        let raw: Vec<u8> = [1000u32, 600, 1800]
            .iter()
            .flat_map(|v| v.to_le_bytes())
            .collect();
        let table = parse_offset_table(&raw);

        let text = "\"a\" width=64 height=64 format=18\n\
                    \"b\" width=64 height=64 format=18\n\
                    \"c\" width=64 height=64 format=18\n";
        let (descs, report) = parse_manifest(text, &table);
        assert_eq!(descs.len(), 3);
        assert_eq!(descs[0].offset, 600);
        assert_eq!(descs[0].offset_source, OffsetSource::Table);
        assert_eq!(descs[1].offset, 1800);
        // table exhausted: running sum of the two prior 1024-byte estimates
        assert_eq!(descs[2].offset, 2048);
        assert_eq!(descs[2].offset_source, OffsetSource::Estimated);
        assert_eq!(report.estimated_offset_count, 1);
    }

    #[test]
    fn test_blank_lines_not_reported() {
        let (descs, report) = parse_manifest("\n   \n\t\n", &no_table());
        assert!(descs.is_empty());
        assert!(report.skipped.is_empty());
    }
}
