//! Pass-through module: the host binds a vertex buffer with a position at
//! location 0 and a color at location 1, and the rasterizer interpolates
//! the color across each triangle.

use spirv_std::{
    glam::{Vec3, Vec4},
    spirv,
};

#[spirv(vertex)]
pub fn vertex_color_vs(
    position: Vec3,
    color: Vec3,
    #[spirv(position)] out_pos: &mut Vec4,
    out_color: &mut Vec3,
) {
    // w is fixed to 1.0; no perspective divide.
    *out_pos = position.extend(1.0);
    *out_color = color;
}

#[spirv(fragment)]
pub fn vertex_color_fs(color: Vec3, output: &mut Vec4) {
    *output = color.extend(1.0);
}
