//! Two self-contained shader modules: one passes host-supplied vertex
//! attributes through to the rasterizer, one generates a fixed triangle
//! from the vertex index alone.

#![cfg_attr(target_arch = "spirv", no_std)]

pub mod bufferless;
pub mod vertex_color;
