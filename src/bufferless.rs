//! Bufferless module: clip-space positions come straight from the built-in
//! vertex index, so the host binds no vertex buffer and draws three
//! vertices. Indices outside 0..3 still evaluate but land outside the
//! intended triangle.

use spirv_std::{
    glam::{vec4, Vec4},
    spirv,
};

#[spirv(vertex)]
pub fn bufferless_vs(
    #[spirv(vertex_index)] vert_index: i32,
    #[spirv(position)] out_pos: &mut Vec4,
) {
    let x = (1 - vert_index) as f32 * 0.5;
    let y = ((vert_index & 1) * 2 - 1) as f32 * 0.5;
    *out_pos = vec4(x, y, 0.0, 1.0);
}

#[spirv(fragment)]
pub fn bufferless_fs(output: &mut Vec4) {
    *output = vec4(0.3, 0.2, 0.1, 1.0);
}
