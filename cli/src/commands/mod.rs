pub mod manifest;
pub mod texture;
pub mod toc;
