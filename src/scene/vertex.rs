//! Vertex layout shared by every mesh.

/// One vertex: position, normal, and UV coordinate.
///
/// `#[repr(C)]` so a vertex slice can be handed to the buffer upload as
/// plain bytes. Attribute locations 0/1/2 map to the three fields in
/// declaration order.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Vertex normal; zero when the source mesh has none.
    pub normal: [f32; 3],
    /// First-channel texture coordinate; (0, 0) when absent.
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Byte offset of the normal attribute.
    pub(crate) const NORMAL_OFFSET: i32 =
        std::mem::offset_of!(Vertex, normal) as i32;
    /// Byte offset of the texture coordinate attribute.
    pub(crate) const TEX_COORDS_OFFSET: i32 =
        std::mem::offset_of!(Vertex, tex_coords) as i32;
    /// Stride between consecutive vertices in bytes.
    pub(crate) const STRIDE: i32 = std::mem::size_of::<Vertex>() as i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_attribute_offsets() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(Vertex::NORMAL_OFFSET, 12);
        assert_eq!(Vertex::TEX_COORDS_OFFSET, 24);
        assert_eq!(Vertex::STRIDE, 32);
    }
}
