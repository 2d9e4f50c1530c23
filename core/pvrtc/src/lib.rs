pub mod block;
pub mod color;
pub mod decoder;
pub mod error;
pub mod raw;

pub use block::PvrtcBlock;
pub use color::{Rgba32, decode_color16};
pub use decoder::{compressed_size, decode_pvrtc};
pub use error::{PvrtcError, Result};
