use bytemuck::{Pod, Zeroable};
use quadrille_common::{Size, TexturePart};

/// One interleaved position/uv vertex.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TexturedVertex {
    /// Destination position in target-local pixels.
    pub position: [f32; 2],
    /// Texture coordinate in `[0, 1]` texture space.
    pub uv: [f32; 2],
}

/// Four vertices in strip order: top-left, top-right, bottom-left,
/// bottom-right. Every quad is emitted with this winding.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TextureQuad {
    pub vertices: [TexturedVertex; 4],
}

/// Expand `parts` into one quad each, preserving input order.
///
/// UVs are each part's source rectangle divided by `texture_size`;
/// positions are the destination offset extended by the source size.
/// Pure data transform, no GPU state involved.
pub fn texture_quads(parts: &[TexturePart], texture_size: Size<u32>) -> Vec<TextureQuad> {
    let texture: Size<f32> = texture_size.cast();
    parts
        .iter()
        .map(|part| {
            let x1 = part.dest_x as f32;
            let x2 = (part.dest_x + part.source.width) as f32;
            let y1 = part.dest_y as f32;
            let y2 = (part.dest_y + part.source.height) as f32;
            let u1 = part.source.x as f32 / texture.width;
            let u2 = (part.source.x + part.source.width) as f32 / texture.width;
            let v1 = part.source.y as f32 / texture.height;
            let v2 = (part.source.y + part.source.height) as f32 / texture.height;
            TextureQuad {
                vertices: [
                    TexturedVertex {
                        position: [x1, y1],
                        uv: [u1, v1],
                    },
                    TexturedVertex {
                        position: [x2, y1],
                        uv: [u2, v1],
                    },
                    TexturedVertex {
                        position: [x1, y2],
                        uv: [u1, v2],
                    },
                    TexturedVertex {
                        position: [x2, y2],
                        uv: [u2, v2],
                    },
                ],
            }
        })
        .collect()
}
