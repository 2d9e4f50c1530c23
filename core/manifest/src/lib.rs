pub mod descriptor;
pub mod format;
pub mod parser;
pub mod toc;

pub use descriptor::{OffsetSource, TextureDescriptor};
pub use format::TextureFormat;
pub use parser::{ManifestReport, SkipReason, SkippedLine, parse_manifest};
pub use toc::{OffsetTable, parse_offset_table};
