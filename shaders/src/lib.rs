//! The compiled SPIR-V module plus the entry-point names a host needs at
//! pipeline-creation time. Building this crate requires the rust-gpu
//! toolchain; the shader crate itself tests on a stock toolchain.

pub const SPIRV: &[u8] = include_bytes!(env!("triangle_shaders.spv"));

pub const VERTEX_COLOR_VS: &str = "vertex_color_vs";
pub const VERTEX_COLOR_FS: &str = "vertex_color_fs";
pub const BUFFERLESS_VS: &str = "bufferless_vs";
pub const BUFFERLESS_FS: &str = "bufferless_fs";
